//! Per-user IP history endpoint.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use watcher_core::domain::timestamp::{format_timestamp, parse_timestamp};
use watcher_core::domain::{GeoAnnotation, IpHistoryRow};
use watcher_shared::dto::{IpEntry, IpsResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IpsQuery {
    pub limit: Option<i64>,
}

fn ip_entry(row: IpHistoryRow, geo: GeoAnnotation) -> IpEntry {
    IpEntry {
        first_seen: format_timestamp(row.first_seen.as_ref()),
        last_seen: format_timestamp(row.last_seen.as_ref()),
        last_played: format_timestamp(row.last_played.as_ref()),
        first_seen_ts: parse_timestamp(row.first_seen.as_ref()),
        last_seen_ts: parse_timestamp(row.last_seen.as_ref()),
        last_played_ts: parse_timestamp(row.last_played.as_ref()),
        ip_address: row.ip_address,
        is_home: geo.is_home(),
        country: geo.country,
        country_code: geo.country_code,
        region: geo.region,
        city: geo.city,
        latitude: geo.latitude,
        longitude: geo.longitude,
        timezone: geo.timezone,
        isp: geo.isp,
    }
}

/// GET /api/users/{user_id}/ips?limit=N
///
/// Geo lookups run per row; a failed lookup only blanks that row's location.
pub async fn list_user_ips(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<IpsQuery>,
    request_id: RequestId,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let limit = query.limit.unwrap_or(state.config.default_ip_limit);

    let rows = state
        .api
        .list_user_ips(user_id, limit)
        .await
        .map_err(|e| AppError::upstream("Tautulli get_user_ips failed", e, &request_id))?;

    tracing::debug!(user_id, limit, rows = rows.len(), "Fetched IP history");

    let mut ips = Vec::with_capacity(rows.len());
    for row in rows {
        let geo = match row.ip() {
            Some(ip) => state.geo.lookup(ip).await,
            None => GeoAnnotation::default(),
        };
        ips.push(ip_entry(row, geo));
    }

    Ok(HttpResponse::Ok().json(IpsResponse { ips }))
}

//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub upstream_configured: bool,
    pub geo_cache_entries: usize,
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        upstream_configured: state.config.tautulli.is_configured(),
        geo_cache_entries: state.geo.cache().len().await,
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    use crate::handlers::{configure_routes, test_support::state_for};

    #[actix_web::test]
    async fn test_health_reports_configuration() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_for("http://127.0.0.1:9", &[])))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["upstream_configured"], true);
        assert_eq!(body["geo_cache_entries"], 0);
    }
}

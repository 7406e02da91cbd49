//! User list endpoint.

use actix_web::{HttpResponse, web};

use watcher_core::domain::User;
use watcher_shared::dto::{UserSummary, UsersResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

fn summarize(user: User) -> UserSummary {
    UserSummary {
        friendly_name: user.display_name().cloned(),
        user_id: user.user_id,
        username: user.username,
        email: user.email,
        is_active: user.is_active,
        is_admin: user.is_admin,
    }
}

/// GET /api/users
pub async fn list_users(
    state: web::Data<AppState>,
    request_id: RequestId,
) -> AppResult<HttpResponse> {
    let users = state
        .api
        .list_users()
        .await
        .map_err(|e| AppError::upstream("Tautulli get_users failed", e, &request_id))?;

    Ok(HttpResponse::Ok().json(UsersResponse {
        users: users.into_iter().map(summarize).collect(),
    }))
}

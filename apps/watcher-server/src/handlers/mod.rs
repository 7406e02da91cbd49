//! HTTP handlers and route configuration.

mod dashboard;
mod health;
mod ips;
mod users;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::NotFound(err.to_string()).into()),
    )
    .route("/", web::get().to(dashboard::index))
    .route("/static/app.js", web::get().to(dashboard::app_js))
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/users", web::get().to(users::list_users))
            .route("/users/{user_id}/ips", web::get().to(ips::list_user_ips)),
    );
}

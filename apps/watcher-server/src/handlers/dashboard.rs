//! Dashboard shell and its script, embedded at compile time.

use actix_web::{HttpResponse, http::header::ContentType, web};

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const APP_JS: &str = include_str!("../../assets/app.js");

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// GET /
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    let page = INDEX_HTML.replace("{{ app_name }}", &escape_html(&state.config.app_name));

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page)
}

/// GET /static/app.js
pub async fn app_js() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(APP_JS)
}

use axum::{response::Html, routing::get, Router};

static INDEX_HTML: &str = include_str!("../static/index.html");

/// Serve the embedded assistant page at `GET /`.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub fn build_app() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}

use axum::{http::StatusCode, response::Html};

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Upload form.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

use axum::response::Html;

/// Serve the bundled front page.
pub async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

use crate::api::api_utils::try_unwrap_body;
use crate::api::model::AppState;
use axum::response::IntoResponse;
use shared::model::ChannelCatalog;
use std::sync::Arc;

/// Extended m3u export of the whole catalog, in catalog order.
pub fn render_m3u(catalog: &ChannelCatalog) -> String {
    let mut content = String::from("#EXTM3U\n");
    for channel in catalog.channels() {
        content.push_str(&channel.to_m3u());
        content.push('\n');
    }
    content
}

async fn m3u_playlist(
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> impl IntoResponse + Send {
    let content = render_m3u(app_state.catalog());
    try_unwrap_body!(axum::response::Response::builder()
        .status(axum::http::StatusCode::OK)
        .header(axum::http::header::CONTENT_TYPE, mime::TEXT_PLAIN_UTF_8.to_string())
        .header("Content-Disposition", "attachment; filename=\"playlist.m3u\"")
        .body(axum::body::Body::from(content)))
}

pub fn m3u_api_register() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/playlist.m3u", axum::routing::get(m3u_playlist))
}

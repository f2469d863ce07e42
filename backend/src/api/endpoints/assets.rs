use crate::api::api_utils::static_response;
use crate::api::model::AppState;
use std::sync::Arc;

const PLAYER_JS: &str = include_str!("../../../resources/web/player.js");
const PLAYER_CSS: &str = include_str!("../../../resources/web/player.css");

async fn player_js() -> axum::response::Response {
    static_response(PLAYER_JS, &mime::APPLICATION_JAVASCRIPT_UTF_8)
}

async fn player_css() -> axum::response::Response {
    static_response(PLAYER_CSS, &mime::TEXT_CSS_UTF_8)
}

pub fn assets_register() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/assets/player.js", axum::routing::get(player_js))
        .route("/assets/player.css", axum::routing::get(player_css))
}

use crate::api::model::AppState;
use crate::utils::debug_if_enabled;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;
use shared::utils::MSG_CHANNEL_NOT_FOUND;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct ChannelFilter {
    #[serde(default)]
    pub category: Option<String>,
}

async fn channels(
    axum::extract::Query(filter): axum::extract::Query<ChannelFilter>,
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> axum::response::Response {
    let catalog = app_state.catalog();
    match filter.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => axum::Json(catalog.channels_in(category)).into_response(),
        None => axum::Json(catalog.channels()).into_response(),
    }
}

async fn channel(
    axum::extract::Path(name): axum::extract::Path<String>,
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> axum::response::Response {
    match app_state.catalog().get(&name) {
        Ok(channel) => axum::Json(channel).into_response(),
        Err(err) => {
            debug_if_enabled!("{}", err);
            (axum::http::StatusCode::NOT_FOUND,
             axum::Json(json!({"error": MSG_CHANNEL_NOT_FOUND, "channel": name}))).into_response()
        }
    }
}

async fn categories(
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> axum::response::Response {
    axum::Json(app_state.catalog().group_by_category()).into_response()
}

pub fn v1_api_register() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .nest("/api/v1", axum::Router::new()
            .route("/channels", axum::routing::get(channels))
            .route("/channels/{name}", axum::routing::get(channel))
            .route("/categories", axum::routing::get(categories)))
}

use crate::api::api_utils::{get_build_time, get_server_time, log_request};
use crate::api::endpoints::assets::assets_register;
use crate::api::endpoints::m3u_api::m3u_api_register;
use crate::api::endpoints::v1_api::v1_api_register;
use crate::api::endpoints::web_index::index_register;
use crate::api::model::AppState;
use crate::api::serve::serve;
use crate::model::{AppConfig, Healthcheck, HEALTHCHECK_OK};
use crate::VERSION;
use log::info;
use shared::error::to_io_error;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

fn get_web_dir_path(web_root: &str) -> Result<PathBuf, std::io::Error> {
    let web_dir_path = PathBuf::from(web_root);
    if !web_dir_path.exists() || !web_dir_path.is_dir() {
        return Err(std::io::Error::new(
            ErrorKind::NotFound,
            format!("web_root does not exists or is not an directory: {}", web_dir_path.display()),
        ));
    }
    Ok(web_dir_path)
}

fn create_healthcheck(app_state: &AppState) -> Healthcheck {
    Healthcheck {
        status: HEALTHCHECK_OK.to_string(),
        version: VERSION.to_string(),
        build_time: get_build_time(),
        server_time: get_server_time(),
        channels: app_state.catalog().len(),
    }
}

async fn healthcheck(
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> impl axum::response::IntoResponse {
    axum::Json(create_healthcheck(&app_state))
}

fn create_cors_layer() -> tower_http::cors::CorsLayer {
    tower_http::cors::CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::OPTIONS,
            axum::http::Method::HEAD,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(std::time::Duration::from_secs(3600))
}

fn create_compression_layer() -> tower_http::compression::CompressionLayer {
    tower_http::compression::CompressionLayer::new()
        .br(true)
        .deflate(true)
        .gzip(true)
        .zstd(true)
}

pub fn create_router(app_state: Arc<AppState>, web_dir_path: Option<PathBuf>) -> axum::Router<()> {
    let web_ui = &app_state.app_config.config.web_ui;
    let mut router = axum::Router::new()
        .route("/healthcheck", axum::routing::get(healthcheck))
        .merge(index_register())
        .merge(assets_register())
        .merge(v1_api_register());
    if web_ui.m3u_enabled {
        router = router.merge(m3u_api_register());
    }
    if let Some(web_dir) = web_dir_path {
        router = router.fallback_service(tower_http::services::ServeDir::new(web_dir));
    }

    router
        .layer(axum::middleware::from_fn(log_request))
        .layer(create_cors_layer())
        .layer(create_compression_layer())
        .with_state(app_state)
}

pub async fn start_server(app_config: Arc<AppConfig>) -> std::io::Result<()> {
    let mut infos = Vec::new();
    let cfg = Arc::clone(&app_config.config);
    let host = cfg.api.host.clone();
    let port = cfg.api.port;

    let web_dir_path = match cfg.api.web_root.as_deref() {
        Some(web_root) => Some(get_web_dir_path(web_root)?),
        None => None,
    };
    if let Some(web_dir) = web_dir_path.as_ref() {
        infos.push(format!("Web root: {}", web_dir.display()));
    }

    let app_state = Arc::new(AppState::new(Arc::clone(&app_config)).map_err(to_io_error)?);
    infos.push(format!("Channels: {} in {} categories", app_state.catalog().len(), app_state.catalog().categories().len()));
    if cfg.web_ui.content_security_policy.is_some() {
        infos.push("Content security policy is enabled".to_string());
    }
    if cfg.web_ui.m3u_enabled {
        infos.push(format!("M3U playlist: http://{host}:{port}/playlist.m3u"));
    }
    infos.push(format!("Server running: http://{host}:{port}"));
    for info in &infos {
        info!("{info}");
    }

    let router = create_router(app_state, web_dir_path);
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    serve(listener, router).await
}

#[cfg(test)]
mod tests {
    use crate::api::model::AppState;
    use crate::model::{AppConfig, Config, ConfigPaths, Healthcheck};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use shared::model::{ChannelCatalog, ConfigDto, ContentSecurityPolicyConfigDto, WebUiConfigDto};
    use std::sync::Arc;
    use tower::ServiceExt;
    use super::create_router;

    fn create_app(dto: ConfigDto) -> axum::Router<()> {
        let catalog = ChannelCatalog::builtin().unwrap();
        let app_config = AppConfig::new(Config::from(dto), catalog, ConfigPaths::default());
        let app_state = AppState::new(Arc::new(app_config)).unwrap();
        create_router(Arc::new(app_state), None)
    }

    fn default_app() -> axum::Router<()> {
        create_app(ConfigDto::default())
    }

    async fn get(app: axum::Router<()>, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_listing_page() {
        let (status, headers, body) = get(default_app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
        assert!(body.contains("<title>Live TV Channels</title>"));
        for category in ["Kids", "Infotainment", "Movies", "Sports"] {
            assert!(body.contains(&format!("<h2>{category}</h2>")), "missing category {category}");
        }
        assert!(body.contains(r#"href="/?c=sonyyay""#));
        assert_eq!(body.matches("class=\"channel-card\"").count(), 13);
        assert!(body.contains(r#"href="/playlist.m3u""#));
    }

    #[tokio::test]
    async fn test_empty_query_shows_listing() {
        let (status, _, body) = get(default_app(), "/?c=").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("listing-page"));
    }

    #[tokio::test]
    async fn test_player_page_case_insensitive() {
        let (status, headers, body) = get(default_app(), "/?c=SonyYAY").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>sonyyay - Live TV</title>"));
        assert!(body.contains("player-page"));
        assert!(body.contains("SonyYaySD/master_3500.m3u8"));
        assert!(body.contains(r#"<script src="/assets/player.js" nonce=""#));
        let csp = headers["content-security-policy"].to_str().unwrap();
        assert!(csp.contains("'nonce-"));
        assert!(csp.contains("https://cdn.jsdelivr.net"));
    }

    #[tokio::test]
    async fn test_player_page_by_path() {
        let (status, _, body) = get(default_app(), "/play/SONYPIXHD").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>sonypixhd - Live TV</title>"));
    }

    #[tokio::test]
    async fn test_channel_not_found() {
        let (status, _, body) = get(default_app(), "/?c=doesnotexist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("<h1>Channel not found</h1>"));

        let (status, _, body) = get(default_app(), "/play/doesnotexist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Channel not found"));
    }

    #[tokio::test]
    async fn test_padded_name_not_found() {
        for uri in ["/?c=%20sonyyay", "/?c=%20sonyyay%20", "/play/%20SONYYAY", "/api/v1/channels/%20sonyyay"] {
            let (status, _, _) = get(default_app(), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_repeated_query_uses_first_channel() {
        let (status, _, body) = get(default_app(), "/?c=sonyyay&c=x").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>sonyyay - Live TV</title>"));

        let (status, _, body) = get(default_app(), "/?c=x&c=sonyyay").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Channel not found"));
    }

    #[tokio::test]
    async fn test_api_channels() {
        let (status, _, body) = get(default_app(), "/api/v1/channels").await;
        assert_eq!(status, StatusCode::OK);
        let channels: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(channels.len(), 13);

        let (_, _, body) = get(default_app(), "/api/v1/channels?category=sports").await;
        let channels: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(channels.len(), 10);
        assert!(channels.iter().all(|c| c["category"] == "Sports"));
    }

    #[tokio::test]
    async fn test_api_channel() {
        let (status, _, body) = get(default_app(), "/api/v1/channels/SonyYay").await;
        assert_eq!(status, StatusCode::OK);
        let channel: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(channel["name"], "sonyyay");
        assert_eq!(channel["category"], "Kids");

        let (status, _, body) = get(default_app(), "/api/v1/channels/doesnotexist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(error["error"], "Channel not found");
    }

    #[tokio::test]
    async fn test_api_categories() {
        let (status, _, body) = get(default_app(), "/api/v1/categories").await;
        assert_eq!(status, StatusCode::OK);
        let groups: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
        let names: Vec<&str> = groups.iter().filter_map(|g| g["category"].as_str()).collect();
        assert_eq!(names, vec!["Kids", "Infotainment", "Movies", "Sports"]);
        assert_eq!(groups[3]["channels"].as_array().map(Vec::len), Some(10));
    }

    #[tokio::test]
    async fn test_m3u_playlist() {
        let (status, headers, body) = get(default_app(), "/playlist.m3u").await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers["content-disposition"].to_str().unwrap().contains("playlist.m3u"));
        assert!(body.starts_with("#EXTM3U\n"));
        assert_eq!(body.matches("#EXTINF:-1").count(), 13);
    }

    #[tokio::test]
    async fn test_m3u_disabled() {
        let dto = ConfigDto {
            web_ui: Some(WebUiConfigDto { m3u_enabled: false, ..WebUiConfigDto::default() }),
            ..ConfigDto::default()
        };
        let (status, _, body) = get(create_app(dto), "/playlist.m3u").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_csp_disabled() {
        let dto = ConfigDto {
            web_ui: Some(WebUiConfigDto {
                content_security_policy: Some(ContentSecurityPolicyConfigDto { enabled: false, custom_attributes: None }),
                ..WebUiConfigDto::default()
            }),
            ..ConfigDto::default()
        };
        let (status, headers, body) = get(create_app(dto), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!headers.contains_key("content-security-policy"));
        assert!(body.contains("listing-page"));
    }

    #[tokio::test]
    async fn test_healthcheck() {
        let (status, _, body) = get(default_app(), "/healthcheck").await;
        assert_eq!(status, StatusCode::OK);
        let healthcheck: Healthcheck = serde_json::from_str(&body).unwrap();
        assert!(healthcheck.is_ok());
        assert_eq!(healthcheck.channels, 13);
        assert_eq!(healthcheck.version, crate::VERSION);
    }

    #[tokio::test]
    async fn test_assets() {
        let (status, headers, body) = get(default_app(), "/assets/player.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("application/javascript"));
        assert!(body.contains("DPlayer"));

        let (status, headers, _) = get(default_app(), "/assets/player.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/css"));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _, _) = get(default_app(), "/does/not/exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

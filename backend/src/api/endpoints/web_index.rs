use crate::api::api_utils::{try_result_internal_error, try_unwrap_body};
use crate::api::model::{AppState, TEMPLATE_INDEX, TEMPLATE_MESSAGE, TEMPLATE_PLAYER};
use crate::model::ContentSecurityPolicyConfig;
use crate::utils::debug_if_enabled;
use axum::response::IntoResponse;
use base64::Engine;
use lol_html::{element, RewriteStrSettings};
use rand::Rng;
use serde::Serialize;
use shared::model::{Channel, PlayerConfigDto, PlayerSettings};
use shared::utils::{encode_query_value, get_base_url_from_str, CHANNEL_QUERY_PARAM, MSG_CHANNEL_NOT_FOUND};
use std::sync::Arc;

const BODY_CLASS_LISTING: &str = "listing-page";
const BODY_CLASS_PLAYER: &str = "player-page";
const BODY_CLASS_MESSAGE: &str = "message-page";

#[derive(Serialize)]
struct ChannelCard<'a> {
    name: &'a str,
    logo: &'a str,
    category: &'a str,
    href: String,
}

#[derive(Serialize)]
struct CategorySection<'a> {
    category: &'a str,
    channels: Vec<ChannelCard<'a>>,
}

#[derive(Serialize)]
struct IndexPage<'a> {
    title: &'a str,
    heading: &'a str,
    body_class: &'static str,
    groups: Vec<CategorySection<'a>>,
    m3u_enabled: bool,
}

#[derive(Serialize)]
struct PlayerPage {
    title: String,
    body_class: &'static str,
    config: String,
}

#[derive(Serialize)]
struct MessagePage<'a> {
    title: &'a str,
    body_class: &'static str,
    message: &'a str,
}

fn channel_href(name: &str) -> String {
    format!("/?{CHANNEL_QUERY_PARAM}={}", encode_query_value(name))
}

fn create_nonce() -> String {
    let mut rnd = [0u8; 32];
    rand::rng().fill(&mut rnd);
    base64::engine::general_purpose::STANDARD.encode(rnd)
}

/// Adds `nonce` to all <script> tags that do not yet have one.
/// Also removes any existing <meta http-equiv="Content-Security-Policy"> tags.
fn inject_nonce_with_parser(html: String, nonce_b64: &str) -> String {
    let settings = RewriteStrSettings {
        element_content_handlers: vec![
            element!("script:not([nonce])", move |el| {
                el.set_attribute("nonce", nonce_b64)?;
                Ok(())
            }),
            element!("meta[http-equiv='Content-Security-Policy']", |el| {
                el.remove();
                Ok(())
            }),
        ],
        ..RewriteStrSettings::default()
    };

    lol_html::rewrite_str(&html, settings).unwrap_or(html)
}

// The player libraries are loaded from their own origins.
fn script_origins(player: &PlayerConfigDto) -> Vec<String> {
    let mut origins: Vec<String> = Vec::new();
    for url in [&player.hls_js_url, &player.player_js_url] {
        if let Some(origin) = get_base_url_from_str(url) {
            if !origins.contains(&origin) {
                origins.push(origin);
            }
        }
    }
    origins
}

fn create_csp_header(csp: &ContentSecurityPolicyConfig, nonce_b64: &str, origins: &[String]) -> String {
    let mut script_src = format!("script-src 'self' 'nonce-{nonce_b64}'");
    for origin in origins {
        script_src.push(' ');
        script_src.push_str(origin);
    }
    let mut attributes = vec![
        "default-src 'self'".to_string(),
        script_src,
        "style-src 'self' 'unsafe-inline'".to_string(),
        "img-src * data: blob:".to_string(),
        "media-src * blob:".to_string(),
        "connect-src *".to_string(),
        "worker-src 'self' blob:".to_string(),
        "frame-ancestors 'none'".to_string(),
    ];
    for attr in &csp.custom_attributes {
        attributes.push(attr.replace("{nonce_b64}", nonce_b64));
    }
    attributes.join("; ")
}

fn html_response(app_state: &AppState, html: String, status: axum::http::StatusCode) -> axum::response::Response {
    let config = &app_state.app_config.config;
    let nonce_b64 = create_nonce();
    let content = inject_nonce_with_parser(html, &nonce_b64);

    let mut builder = axum::response::Response::builder()
        .status(status)
        .header(axum::http::header::CONTENT_TYPE, mime::TEXT_HTML_UTF_8.as_ref())
        .header(axum::http::header::CACHE_CONTROL, "no-store");
    if let Some(csp) = config.web_ui.content_security_policy.as_ref() {
        let origins = script_origins(&config.player);
        builder = builder.header("Content-Security-Policy", create_csp_header(csp, &nonce_b64, &origins));
    }
    try_unwrap_body!(builder.body(axum::body::Body::from(content)))
}

fn render_page<T: Serialize>(app_state: &AppState, template: &str, data: &T, status: axum::http::StatusCode) -> axum::response::Response {
    let html = try_result_internal_error!(app_state.templates.render(template, data),
        format!("Failed to render template {template}"));
    html_response(app_state, html, status)
}

fn listing_page(app_state: &AppState) -> axum::response::Response {
    let web_ui = &app_state.app_config.config.web_ui;
    let groups = app_state.catalog().group_by_category().into_iter()
        .map(|group| CategorySection {
            category: group.category,
            channels: group.channels.into_iter().map(|channel| ChannelCard {
                name: &channel.name,
                logo: &channel.logo,
                category: &channel.category,
                href: channel_href(&channel.name),
            }).collect(),
        })
        .collect();
    let page = IndexPage {
        title: &web_ui.title,
        heading: &web_ui.title,
        body_class: BODY_CLASS_LISTING,
        groups,
        m3u_enabled: web_ui.m3u_enabled,
    };
    render_page(app_state, TEMPLATE_INDEX, &page, axum::http::StatusCode::OK)
}

fn player_page(app_state: &AppState, channel: &Channel) -> axum::response::Response {
    let settings = PlayerSettings::new(channel, &app_state.app_config.config.player);
    let config = try_result_internal_error!(serde_json::to_string(&settings),
        format!("Failed to serialize player settings for {}", channel.name));
    let page = PlayerPage {
        title: format!("{} - Live TV", channel.name),
        body_class: BODY_CLASS_PLAYER,
        config,
    };
    render_page(app_state, TEMPLATE_PLAYER, &page, axum::http::StatusCode::OK)
}

fn not_found_page(app_state: &AppState) -> axum::response::Response {
    let page = MessagePage {
        title: MSG_CHANNEL_NOT_FOUND,
        body_class: BODY_CLASS_MESSAGE,
        message: MSG_CHANNEL_NOT_FOUND,
    };
    render_page(app_state, TEMPLATE_MESSAGE, &page, axum::http::StatusCode::NOT_FOUND)
}

fn channel_page(app_state: &AppState, name: &str) -> axum::response::Response {
    match app_state.catalog().find(name) {
        Some(channel) => player_page(app_state, channel),
        None => {
            debug_if_enabled!("Channel {} not found", name);
            not_found_page(app_state)
        }
    }
}

// The first `c` parameter wins when it is repeated.
fn channel_param(params: &[(String, String)]) -> Option<&str> {
    params.iter()
        .find(|(key, _)| key == CHANNEL_QUERY_PARAM)
        .map(|(_, value)| value.as_str())
        .filter(|name| !name.is_empty())
}

async fn index(
    axum::extract::Query(params): axum::extract::Query<Vec<(String, String)>>,
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> impl IntoResponse + Send {
    match channel_param(&params) {
        Some(name) => channel_page(&app_state, name),
        None => listing_page(&app_state),
    }
}

async fn play(
    axum::extract::Path(name): axum::extract::Path<String>,
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> impl IntoResponse + Send {
    channel_page(&app_state, &name)
}

pub fn index_register() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/", axum::routing::get(index))
        .route("/play/{name}", axum::routing::get(play))
}

#[cfg(test)]
mod tests {
    use crate::model::ContentSecurityPolicyConfig;
    use shared::model::PlayerConfigDto;
    use super::{channel_href, channel_param, create_csp_header, create_nonce, inject_nonce_with_parser, script_origins};

    #[test]
    fn test_inject_nonce() {
        let html = r#"<html><head><meta http-equiv="Content-Security-Policy" content="default-src *"></head><body><script src="/a.js"></script><script nonce="keep">x()</script></body></html>"#;
        let result = inject_nonce_with_parser(html.to_string(), "abc");
        assert!(result.contains(r#"<script src="/a.js" nonce="abc">"#));
        assert!(result.contains(r#"<script nonce="keep">"#));
        assert!(!result.contains("Content-Security-Policy"));
    }

    #[test]
    fn test_nonce_is_random() {
        let first = create_nonce();
        assert_eq!(first.len(), 44);
        assert_ne!(first, create_nonce());
    }

    #[test]
    fn test_channel_param() {
        let params = |pairs: &[(&str, &str)]| pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect::<Vec<_>>();
        assert_eq!(channel_param(&params(&[("c", "sonyyay"), ("c", "x")])), Some("sonyyay"));
        assert_eq!(channel_param(&params(&[("other", "1"), ("c", " sonyyay")])), Some(" sonyyay"));
        assert_eq!(channel_param(&params(&[("c", "")])), None);
        assert_eq!(channel_param(&params(&[])), None);
    }

    #[test]
    fn test_channel_href() {
        assert_eq!(channel_href("sonyyay"), "/?c=sonyyay");
        assert_eq!(channel_href("a&b"), "/?c=a%26b");
    }

    #[test]
    fn test_csp_header() {
        let csp = ContentSecurityPolicyConfig {
            enabled: true,
            custom_attributes: vec!["report-uri /csp?n={nonce_b64}".to_string()],
        };
        let origins = script_origins(&PlayerConfigDto::default());
        assert_eq!(origins, vec!["https://cdn.jsdelivr.net".to_string()]);
        let header = create_csp_header(&csp, "XYZ", &origins);
        assert!(header.starts_with("default-src 'self'; script-src 'self' 'nonce-XYZ' https://cdn.jsdelivr.net;"));
        assert!(header.contains("frame-ancestors 'none'"));
        assert!(header.ends_with("report-uri /csp?n=XYZ"));
    }
}

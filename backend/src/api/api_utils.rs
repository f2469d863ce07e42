use crate::utils::debug_if_enabled;
use crate::BUILD_TIMESTAMP;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use std::time::Instant;

#[macro_export]
macro_rules! try_unwrap_body {
    ($body:expr) => {
        $body.map_or_else(
            |_| axum::http::StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            |resp| resp.into_response(),
        )
    };
}

#[macro_export]
macro_rules! try_result_or_status {
    ($option:expr, $status:expr, $msg_is_error:expr, $msg:expr) => {
        match $option {
            Ok(value) => value,
            Err(err) => {
                if $msg_is_error {
                    log::error!("{}: {err}", $msg);
                } else {
                    log::debug!("{}: {err}", $msg);
                }
                return $status.into_response();
            }
        }
    };
}

#[macro_export]
macro_rules! try_result_internal_error {
    ($option:expr, $msg:expr) => {
       $crate::api::api_utils::try_result_or_status!($option, axum::http::StatusCode::INTERNAL_SERVER_ERROR, true, $msg)
    };
}

pub use try_unwrap_body;
pub use try_result_or_status;
pub use try_result_internal_error;

pub fn get_server_time() -> String {
    chrono::offset::Local::now()
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M:%S %Z")
        .to_string()
}

pub fn get_build_time() -> Option<String> {
    BUILD_TIMESTAMP
        .and_then(|ts| ts.parse::<DateTime<Utc>>().ok())
        .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S %Z").to_string())
}

pub fn static_response(content: &'static str, mime_type: &mime::Mime) -> axum::response::Response {
    try_unwrap_body!(axum::response::Response::builder()
        .status(axum::http::StatusCode::OK)
        .header(axum::http::header::CONTENT_TYPE, mime_type.as_ref())
        .header(
            axum::http::header::CACHE_CONTROL,
            axum::http::header::HeaderValue::from_static("public, max-age=3600")
        )
        .body(axum::body::Body::from(content)))
}

pub async fn log_request(req: axum::extract::Request, next: axum::middleware::Next) -> axum::response::Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();
    let response = next.run(req).await;
    debug_if_enabled!("{} {} -> {} ({} ms)", method, path, response.status().as_u16(), start.elapsed().as_millis());
    response
}

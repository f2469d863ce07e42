mod app_config;
mod healthcheck;

pub use self::app_config::*;
pub use self::healthcheck::*;

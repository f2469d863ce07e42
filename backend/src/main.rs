#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
mod modules;

include_modules!();

use crate::api::api_utils::get_build_time;
use crate::api::endpoints::m3u_api::render_m3u;
use crate::model::{AppConfig, ConfigPaths, Healthcheck, HealthcheckConfig};
use crate::utils::{init_logger, read_app_config, resolve_env_var};
use clap::Parser;
use log::{error, info};
use std::path::Path;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "livetv")]
#[command(version)]
#[command(about = "Live TV channel directory and player", long_about = None)]
struct Args {
    /// The config directory
    #[arg(short = 'p', long = "config-path")]
    config_path: Option<String>,

    /// The config file
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,

    /// The channel catalog file (yaml or json)
    #[arg(short = 'C', long = "catalog")]
    catalog_file: Option<String>,

    /// log level
    #[arg(short = 'l', long = "log-level", default_missing_value = "info")]
    log_level: Option<String>,

    /// Print the channels grouped by category and exit
    #[arg(short = None, long = "list", default_value_t = false, default_missing_value = "true")]
    list: bool,

    /// Print the catalog as m3u playlist and exit
    #[arg(short = None, long = "m3u", default_value_t = false, default_missing_value = "true")]
    m3u: bool,

    #[arg(short = None, long = "healthcheck", default_value_t = false, default_missing_value = "true")]
    healthcheck: bool,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_TIMESTAMP: Option<&str> = option_env!("VERGEN_BUILD_TIMESTAMP");
const CONFIG_PATH_ENV_VAR: &str = "LIVETV_CONFIG_PATH";

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut config_paths = get_file_paths(&args);

    init_logger(args.log_level.as_ref(), config_paths.config_file_path.as_str());

    if args.healthcheck {
        let healthy = healthcheck(config_paths.config_file_path.as_str()).await;
        std::process::exit(i32::from(!healthy));
    }

    let app_config = read_app_config(&mut config_paths).unwrap_or_else(|err| exit!("{}", err));

    if args.list {
        print!("{}", format_channel_list(&app_config));
        return;
    }
    if args.m3u {
        print!("{}", render_m3u(&app_config.catalog));
        return;
    }

    info!("Version: {VERSION}");
    if let Some(bts) = get_build_time() {
        info!("Build time: {bts}");
    }
    print_info(&app_config);

    if let Err(err) = api::main_api::start_server(Arc::new(app_config)).await {
        exit!("Can't start server: {err}");
    }
}

fn print_info(app_config: &AppConfig) {
    let paths = &app_config.paths;
    info!("Current time: {}", chrono::offset::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("Config dir: {:?}", &paths.config_path);
    info!("Config file: {:?}", &paths.config_file_path);
    info!("Catalog file: {:?}", &paths.catalog_file_path.as_ref().map_or_else(|| "built-in", |v| v.as_str()));
}

fn format_channel_list(app_config: &AppConfig) -> String {
    let mut output = String::new();
    for group in app_config.catalog.group_by_category() {
        output.push_str(group.category);
        output.push('\n');
        for channel in group.channels {
            output.push_str(&format!("  {:<20} {}\n", channel.name, channel.url));
        }
    }
    output
}

fn get_file_paths(args: &Args) -> ConfigPaths {
    let config_path: String = utils::resolve_directory_path(&resolve_env_var(
        &args.config_path.clone()
            .or_else(|| std::env::var(CONFIG_PATH_ENV_VAR).ok())
            .unwrap_or_else(utils::get_default_config_path)));
    let config_file: String = resolve_env_var(&args.config_file.as_ref().map_or_else(|| utils::get_default_config_file_path(&config_path), ToString::to_string));
    let catalog_file = args.catalog_file.as_ref().map(|p| resolve_env_var(p));

    ConfigPaths {
        config_path,
        config_file_path: config_file,
        catalog_file_path: catalog_file,
    }
}

fn read_healthcheck_config(config_file: &str) -> HealthcheckConfig {
    let path = Path::new(config_file);
    if !path.exists() {
        return HealthcheckConfig::default();
    }
    match std::fs::read_to_string(path) {
        Ok(content) if content.trim().is_empty() => HealthcheckConfig::default(),
        Ok(content) => serde_yaml::from_str::<HealthcheckConfig>(&resolve_env_var(&content))
            .unwrap_or_else(|err| {
                error!("Failed to parse config file for healthcheck {err:?}");
                HealthcheckConfig::default()
            }),
        Err(err) => {
            error!("Failed to open config file for healthcheck {err:?}");
            HealthcheckConfig::default()
        }
    }
}

async fn healthcheck(config_file: &str) -> bool {
    let config = read_healthcheck_config(config_file);
    match reqwest::Client::new()
        .get(format!("http://localhost:{}/healthcheck", config.api.port))
        .send()
        .await
    {
        Ok(response) => matches!(response.json::<Healthcheck>().await, Ok(check) if check.is_ok()),
        Err(err) => {
            error!("Healthcheck request failed {err}");
            false
        }
    }
}

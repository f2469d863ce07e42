use env_logger::{Builder, Target};
use log::{error, info, LevelFilter};
use shared::model::LogLevelConfigDto;
use crate::utils::resolve_env_var;

pub const LOG_ENV_VAR: &str = "LIVETV_LOG";

const LOG_ERROR_LEVEL_MOD: &[&str] = &[
    "hyper_util::client",
    "hyper::proto",
    "reqwest::connect",
    "handlebars::render",
];

fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        // "info" => LevelFilter::Info,
        _ => LevelFilter::Info,
    }
}

fn read_config_log_level(config_file: &str) -> Option<String> {
    let content = std::fs::read_to_string(config_file).ok()?;
    serde_yaml::from_str::<LogLevelConfigDto>(&resolve_env_var(&content))
        .map_err(|e| error!("Failed to parse log config file: {e}"))
        .ok()
        .and_then(|cfg| cfg.log.and_then(|l| l.log_level))
}

/// Splits `debug` or `info,livetv::api=trace` into a default level and module levels.
pub fn parse_log_levels(log_level: &str) -> (Option<LevelFilter>, Vec<(String, LevelFilter)>) {
    let mut default_level = None;
    let mut module_levels = vec![];
    for pair in log_level.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if pair.contains('=') {
            let mut kv_iter = pair.split('=').map(str::trim);
            if let (Some(module), Some(level)) = (kv_iter.next(), kv_iter.next()) {
                module_levels.push((module.to_string(), get_log_level(level)));
            }
        } else {
            default_level = Some(get_log_level(pair));
        }
    }
    (default_level, module_levels)
}

pub fn init_logger(user_log_level: Option<&String>, config_file: &str) {
    let env_log_level = std::env::var(LOG_ENV_VAR).ok();

    let mut log_builder = Builder::from_default_env();
    log_builder.target(Target::Stdout);

    // priority  CLI-Argument, Env-Var, Config, Default
    let log_level = user_log_level
        .map(std::string::ToString::to_string) // cli-argument
        .or(env_log_level) // env
        .or_else(|| read_config_log_level(config_file)) // config
        .unwrap_or_else(|| "info".to_string()); // Default

    let (default_level, module_levels) = parse_log_levels(&log_level);
    let mut log_levels = vec![];
    let default_level = default_level.unwrap_or(LevelFilter::Info);
    log_builder.filter_level(default_level);
    log_levels.push(default_level.to_string());
    for (module, level) in &module_levels {
        log_builder.filter_module(module, *level);
        log_levels.push(format!("{module}={level}"));
    }
    for module in LOG_ERROR_LEVEL_MOD {
        log_builder.filter_module(module, LevelFilter::Error);
    }
    if log_builder.try_init().is_err() {
        return;
    }
    info!("Log Level {}", &log_levels.join(", "));
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use super::parse_log_levels;

    #[test]
    fn test_parse_single_level() {
        let (default_level, modules) = parse_log_levels("DEBUG");
        assert_eq!(default_level, Some(LevelFilter::Debug));
        assert!(modules.is_empty());
    }

    #[test]
    fn test_parse_module_levels() {
        let (default_level, modules) = parse_log_levels("warn, livetv::api=trace,tower_http=debug");
        assert_eq!(default_level, Some(LevelFilter::Warn));
        assert_eq!(modules, vec![
            ("livetv::api".to_string(), LevelFilter::Trace),
            ("tower_http".to_string(), LevelFilter::Debug),
        ]);
    }

    #[test]
    fn test_unknown_level_is_info() {
        assert_eq!(parse_log_levels("verbose").0, Some(LevelFilter::Info));
    }
}

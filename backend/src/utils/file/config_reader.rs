use crate::model::{AppConfig, Config, ConfigPaths};
use log::{error, info, warn};
use shared::error::{info_err, LiveTvError, LiveTvErrorKind};
use shared::model::{Channel, ChannelCatalog, ConfigDto};
use shared::utils::CONSTANTS;
use std::env;
use std::path::Path;

fn read_file_content(path: &Path, resolve_env: bool) -> Result<String, std::io::Error> {
    let content = std::fs::read_to_string(path)?;
    Ok(if resolve_env { resolve_env_var(&content) } else { content })
}

/// Reads and prepares the config file. A missing file is not an error, the defaults are used.
pub fn read_config_dto(config_file: &str, resolve_env: bool) -> Result<ConfigDto, LiveTvError> {
    let path = Path::new(config_file);
    if !path.exists() {
        warn!("Config file {config_file} not found, using defaults");
        let mut config = ConfigDto::default();
        config.prepare()?;
        return Ok(config);
    }
    let content = read_file_content(path, resolve_env)
        .map_err(|err| info_err!("Can't read the config file: {config_file}: {err}"))?;
    if content.trim().is_empty() {
        let mut config = ConfigDto::default();
        config.prepare()?;
        return Ok(config);
    }
    let mut config: ConfigDto = serde_yaml::from_str(&content)
        .map_err(|err| info_err!("Can't read the config file: {config_file}: {err}"))?;
    config.prepare()?;
    Ok(config)
}

/// Reads a catalog file, json when the extension says so, yaml otherwise.
pub fn read_catalog(catalog_file: &str) -> Result<ChannelCatalog, LiveTvError> {
    let path = Path::new(catalog_file);
    let content = read_file_content(path, false)
        .map_err(|err| LiveTvError::new(LiveTvErrorKind::Catalog, format!("Can't read the catalog file: {catalog_file}: {err}")))?;
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        return ChannelCatalog::from_json(&content);
    }
    let channels: Vec<Channel> = if content.trim().is_empty() {
        Vec::new()
    } else {
        serde_yaml::from_str(&content)
            .map_err(|err| LiveTvError::new(LiveTvErrorKind::Catalog, format!("Can't read the catalog file: {catalog_file}: {err}")))?
    };
    ChannelCatalog::new(channels)
}

fn resolve_catalog_path(config_path: &str, catalog_file: &str) -> String {
    let path = Path::new(catalog_file);
    if path.is_absolute() {
        catalog_file.to_string()
    } else {
        Path::new(config_path).join(path).to_string_lossy().to_string()
    }
}

/// Loads config and catalog.
///
/// Catalog priority: `paths.catalog_file_path` (command line), `catalog` in the config file
/// (relative to the config directory), the built-in catalog.
pub fn read_app_config(paths: &mut ConfigPaths) -> Result<AppConfig, LiveTvError> {
    let config_dto = read_config_dto(&paths.config_file_path, true)?;
    let config = Config::from(config_dto);

    if paths.catalog_file_path.is_none() {
        paths.catalog_file_path = config.catalog.as_ref()
            .map(|file| resolve_catalog_path(&paths.config_path, &resolve_env_var(file)));
    }

    let catalog = match paths.catalog_file_path.as_ref() {
        Some(catalog_file) => {
            let catalog = read_catalog(catalog_file)?;
            info!("Loaded {} channels from {catalog_file}", catalog.len());
            catalog
        }
        None => {
            let catalog = ChannelCatalog::builtin()?;
            info!("Using built-in catalog with {} channels", catalog.len());
            catalog
        }
    };

    Ok(AppConfig::new(config, catalog, paths.clone()))
}

pub fn resolve_env_var(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    CONSTANTS.re_env_var.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|e| {
            error!("Could not resolve env var '{var_name}': {e}");
            format!("${{env:{var_name}}}")
        })
    }).to_string()
}

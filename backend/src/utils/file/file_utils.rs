use log::error;
use shared::utils::{CONFIG_FILE, CONFIG_PATH};
use std::fs;
use std::path::PathBuf;

pub fn get_exe_path() -> PathBuf {
    let default_path = std::path::PathBuf::from("./");
    let current_exe = std::env::current_exe();
    match current_exe {
        Ok(exe) => {
            match fs::read_link(&exe) {
                Ok(f) => f.parent().map_or(default_path, std::path::Path::to_path_buf),
                Err(_) => exe.parent().map_or(default_path, std::path::Path::to_path_buf)
            }
        }
        Err(_) => default_path
    }
}

fn get_default_path(file: &str) -> String {
    let path: PathBuf = get_exe_path();
    let default_path = path.join(file);
    String::from(if default_path.exists() {
        default_path.to_str().unwrap_or(file)
    } else {
        file
    })
}

pub fn get_default_file_path(config_path: &str, file: &str) -> String {
    let path: PathBuf = PathBuf::from(config_path);
    let default_path = path.join(file);
    String::from(default_path.to_str().unwrap_or(file))
}

#[inline]
pub fn get_default_config_path() -> String {
    get_default_path(CONFIG_PATH)
}

#[inline]
pub fn get_default_config_file_path(config_path: &str) -> String {
    get_default_file_path(config_path, CONFIG_FILE)
}

/// Makes a directory path absolute. Unlike files, a missing config directory is not created,
/// the server runs fine with built-in defaults.
pub fn resolve_directory_path(input: &str) -> String {
    let current_dir = std::env::current_dir().unwrap_or_default();

    if input.is_empty() {
        return String::from(current_dir.to_str().unwrap_or("."));
    }

    let input_path = PathBuf::from(input);
    let final_path = if input_path.is_absolute() { input_path } else { current_dir.join(input) };

    match final_path.canonicalize() {
        Ok(path) => String::from(path.to_str().unwrap_or("./")),
        Err(err) => {
            if final_path.exists() {
                error!("Failed to resolve path {}: {err}", final_path.display());
            }
            String::from(final_path.to_str().unwrap_or("./"))
        }
    }
}

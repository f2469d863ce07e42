mod file_utils;
mod config_reader;

pub use self::file_utils::*;
pub use self::config_reader::*;

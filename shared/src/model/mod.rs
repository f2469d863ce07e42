mod catalog;
mod channel;
mod config;
mod player;

pub use self::catalog::*;
pub use self::channel::*;
pub use self::config::*;
pub use self::player::*;

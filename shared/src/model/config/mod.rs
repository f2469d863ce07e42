mod api;
mod base;
mod log;
mod player;
mod web_ui;

pub use self::api::*;
pub use self::base::*;
pub use self::log::*;
pub use self::player::*;
pub use self::web_ui::*;

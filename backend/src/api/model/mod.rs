mod app_state;
mod templates;

pub use self::app_state::*;
pub use self::templates::*;

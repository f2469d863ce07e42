mod livetv_error;

pub use self::livetv_error::*;

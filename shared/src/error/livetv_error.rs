use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[macro_export]
macro_rules! create_livetv_error {
     ($kind: expr, $($arg:tt)*) => {
        $crate::error::LiveTvError::new($kind, format!($($arg)*))
    }
}

pub use create_livetv_error;

#[macro_export]
macro_rules! info_err {
    // format string + variables are forwarded to format!
    ($($arg:tt)*) => {
        $crate::error::LiveTvError::new($crate::error::LiveTvErrorKind::Info, format!($($arg)*))
    };
}

pub use info_err;

#[macro_export]
macro_rules! info_err_res {
    ($($arg:tt)*) => {
        Err($crate::error::LiveTvError::new($crate::error::LiveTvErrorKind::Info, format!($($arg)*)))
    };
}

pub use info_err_res;

#[macro_export]
macro_rules! handle_livetv_error_result_list {
    ($kind:expr, $result: expr) => {
        let errors = $result
            .filter_map(|result| {
                if let Err(err) = result {
                    Some(err.to_string())
                } else {
                    None
                }
            })
            .collect::<Vec<String>>();
        if !&errors.is_empty() {
            return Err($crate::error::LiveTvError::new($kind, errors.join("\n")));
        }
    }
}

pub use handle_livetv_error_result_list;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LiveTvErrorKind {
    // config, io and other startup problems
    Info,
    // the channel catalog is malformed
    Catalog,
    NotFound,
}

#[derive(Debug)]
pub struct LiveTvError {
    pub kind: LiveTvErrorKind,
    pub message: String,
}

impl LiveTvError {
    pub const fn new(kind: LiveTvErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for LiveTvError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "LiveTv error: {}", self.message)
    }
}

impl Error for LiveTvError {}

pub fn to_io_error<E>(err: E) -> std::io::Error
where
    E: std::error::Error,
{ std::io::Error::other(err.to_string()) }

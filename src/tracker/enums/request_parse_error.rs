use thiserror::Error;

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum RequestParseError {
    #[error("packet of {0} bytes is too short")]
    TooShort(usize),
    #[error("truncated {0} request")]
    Truncated(&'static str),
    #[error("unsupported action: {0}")]
    UnsupportedAction(i32),
}

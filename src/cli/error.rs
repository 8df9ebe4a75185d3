//! .

pub type RequestResult<T> = std::result::Result<T, RequestError>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Invalid theme: {value} (expected one of: {expected})")]
    InvalidTheme { value: String, expected: String },
    #[error("Invalid font: {value} (expected one of: {expected})")]
    InvalidFont { value: String, expected: String },
    #[error("Invalid format: {value} (expected one of: {expected})")]
    InvalidFormat { value: String, expected: String },
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortError {
    /// The API refused the request and explained why.
    #[error("{0}")]
    Rejected(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("connection error: {0}")]
    Connection(String),
}

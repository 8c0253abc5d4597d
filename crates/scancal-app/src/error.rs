use scancal_core::DomainError;
use scancal_ports::error::PortError;
use thiserror::Error;

use crate::forms::FormErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("invalid form: {0}")]
    Form(FormErrors),
    #[error("port error: {0}")]
    Port(#[from] PortError),
}

//! Account rules shared by the ScanCal registration and profile forms.
//!
//! Brazilian phone and CPF formatting, normalization and validation, plus the
//! field rules the API expects. Everything here is pure and cheap enough to
//! run on every keystroke.

pub mod account;
pub mod digits;
pub mod error;

pub use account::{Cpf, Phone};
pub use error::DomainError;

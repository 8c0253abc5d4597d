pub mod error;
pub mod forms;
pub mod login_service;
pub mod profile_service;
pub mod registration_service;

pub use error::AppError;
pub use forms::{Field, FormErrors, ProfileForm, RegistrationForm};
pub use login_service::LoginService;
pub use profile_service::ProfileService;
pub use registration_service::RegistrationService;

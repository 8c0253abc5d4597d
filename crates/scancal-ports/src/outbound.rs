use async_trait::async_trait;

use crate::error::PortError;
use crate::types::{AuthSession, Credentials, ProfileUpdate, Registration, UserProfile};

/// Account endpoints of the remote ScanCal API.
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, PortError>;
    async fn register(&self, registration: &Registration) -> Result<AuthSession, PortError>;
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, PortError>;
}

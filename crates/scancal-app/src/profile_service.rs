use scancal_ports::outbound::AccountApi;
use scancal_ports::types::UserProfile;

use crate::error::AppError;
use crate::forms::ProfileForm;

pub struct ProfileService<A>
where
    A: AccountApi,
{
    api: A,
}

impl<A> ProfileService<A>
where
    A: AccountApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Validate the profile editor and push the changes.
    /// Field errors stay on the form for display.
    pub async fn update(&self, form: &mut ProfileForm) -> Result<UserProfile, AppError> {
        let update = form.validate().map_err(|errors| {
            tracing::debug!(fields = errors.len(), "profile form rejected");
            AppError::Form(errors)
        })?;

        let profile = self.api.update_profile(&update).await.map_err(|e| {
            tracing::warn!(error = %e, "profile update failed");
            e
        })?;
        tracing::info!(user_id = %profile.id, "profile updated");
        Ok(profile)
    }
}

use scancal_ports::outbound::AccountApi;
use scancal_ports::types::AuthSession;

use crate::error::AppError;
use crate::forms::RegistrationForm;

pub struct RegistrationService<A>
where
    A: AccountApi,
{
    api: A,
}

impl<A> RegistrationService<A>
where
    A: AccountApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Validate the sign-up form and create the account.
    /// A broken rule is left on the form and nothing is sent.
    pub async fn register(&self, form: &mut RegistrationForm) -> Result<AuthSession, AppError> {
        let registration = match form.validate() {
            Ok(registration) => registration,
            Err(e) => {
                tracing::debug!(reason = %e, "registration form rejected");
                form.set_error(e);
                return Err(e.into());
            }
        };

        let session = self.api.register(&registration).await.map_err(|e| {
            tracing::warn!(error = %e, "registration request failed");
            e
        })?;
        tracing::info!(user_id = %session.user.id, "account registered");
        Ok(session)
    }
}

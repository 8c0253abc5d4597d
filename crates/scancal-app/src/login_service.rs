use scancal_core::DomainError;
use scancal_ports::outbound::AccountApi;
use scancal_ports::types::{AuthSession, Credentials};

use crate::error::AppError;

pub struct LoginService<A>
where
    A: AccountApi,
{
    api: A,
}

impl<A> LoginService<A>
where
    A: AccountApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Sign in with email and password. Blank fields are rejected locally.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(DomainError::EmailRequired.into());
        }
        if password.is_empty() {
            return Err(DomainError::PasswordRequired.into());
        }

        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let session = self.api.login(&credentials).await.map_err(|e| {
            tracing::warn!(error = %e, "login failed");
            e
        })?;
        tracing::info!(user_id = %session.user.id, "logged in");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use scancal_ports::error::PortError;
    use scancal_ports::types::{ProfileUpdate, Registration, UserProfile};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockAccountApi {
        logins: Mutex<Vec<Credentials>>,
    }

    #[async_trait]
    impl AccountApi for MockAccountApi {
        async fn login(&self, credentials: &Credentials) -> Result<AuthSession, PortError> {
            self.logins.lock().unwrap().push(credentials.clone());
            if credentials.password != "segredo" {
                return Err(PortError::Unauthorized);
            }
            Ok(AuthSession {
                user: UserProfile {
                    id: "u1".into(),
                    email: credentials.email.clone(),
                    ..UserProfile::default()
                },
                token: "tok".into(),
            })
        }

        async fn register(&self, _registration: &Registration) -> Result<AuthSession, PortError> {
            unimplemented!("not used by login")
        }

        async fn update_profile(&self, _update: &ProfileUpdate) -> Result<UserProfile, PortError> {
            unimplemented!("not used by login")
        }
    }

    #[tokio::test]
    async fn sends_trimmed_email() {
        let svc = LoginService::new(MockAccountApi::default());

        let session = svc.login("  ana@scancal.com ", "segredo").await.unwrap();
        assert_eq!(session.token, "tok");

        let sent = svc.api.logins.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "ana@scancal.com");
    }

    #[tokio::test]
    async fn blank_fields_are_not_sent() {
        let svc = LoginService::new(MockAccountApi::default());

        let result = svc.login("   ", "segredo").await;
        assert!(matches!(result, Err(AppError::Domain(DomainError::EmailRequired))));

        let result = svc.login("ana@scancal.com", "").await;
        assert!(matches!(result, Err(AppError::Domain(DomainError::PasswordRequired))));

        assert!(svc.api.logins.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn wrong_password_is_surfaced() {
        let svc = LoginService::new(MockAccountApi::default());

        let result = svc.login("ana@scancal.com", "errada").await;
        assert!(matches!(result, Err(AppError::Port(PortError::Unauthorized))));
    }
}

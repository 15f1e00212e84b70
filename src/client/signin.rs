//! Sign-in form

use crate::{handlers::auth::AdminProfile, utils::is_missing};

use super::{api::ApiClient, session::Session};

pub const FIELDS_REQUIRED_MESSAGE: &str = "Please fill in all fields";
pub const SIGN_IN_FAILED_MESSAGE: &str = "Invalid email or password";

/// Sign-in form input
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// Reject empty fields before anything is sent
    pub fn validate(&self) -> Result<(), &'static str> {
        if is_missing(Some(&self.email)) || is_missing(Some(&self.password)) {
            return Err(FIELDS_REQUIRED_MESSAGE);
        }
        Ok(())
    }

    /// Validate, then sign in through `client`.
    ///
    /// Any server or transport failure is reported as a single generic
    /// message and leaves `session` untouched.
    pub async fn submit(
        &self,
        client: &ApiClient,
        session: &mut Session,
    ) -> Result<AdminProfile, &'static str> {
        self.validate()?;

        client
            .sign_in(session, &self.email, &self.password)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Sign-in form rejected");
                SIGN_IN_FAILED_MESSAGE
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> SignInForm {
        SignInForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_validate_requires_both_fields() {
        assert_eq!(form("", "password123").validate(), Err(FIELDS_REQUIRED_MESSAGE));
        assert_eq!(form("a@x.com", "").validate(), Err(FIELDS_REQUIRED_MESSAGE));
        assert!(form("a@x.com", "password123").validate().is_ok());
    }

    #[tokio::test]
    async fn test_submit_stops_before_network_on_empty_fields() {
        // Nothing listens here; validation must fail first
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let mut session = Session::new();

        let result = form("", "").submit(&client, &mut session).await;
        assert_eq!(result, Err(FIELDS_REQUIRED_MESSAGE));
        assert!(!session.is_authenticated());
    }
}

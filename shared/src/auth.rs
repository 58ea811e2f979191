//! Owner sign-in and sign-up.
//!
//! Sign-up registers the account and then logs in with the same
//! credentials, so both modes end with a stored token.

use thiserror::Error;

use crate::client::ApiClient;
use crate::error::{ApiError, GENERIC_ERROR_MESSAGE};
use crate::protocol::{LoginRequest, RegisterRequest};
use crate::session::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub const ALL: [AuthMode; 2] = [AuthMode::Login, AuthMode::Signup];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Signup => "Sign up",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Signup => "Create account",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    /// Only sent on sign-up.
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AuthError {
    /// Message shown under the auth form.
    pub fn display_message(&self) -> String {
        match self {
            Self::Api(err) => err.display_message(),
            Self::Session(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Runs the auth flow and stores the resulting token in the client's session.
pub async fn authenticate(
    client: &ApiClient,
    mode: AuthMode,
    credentials: &Credentials,
) -> Result<(), AuthError> {
    if mode == AuthMode::Signup {
        client
            .send(&RegisterRequest {
                name: credentials.name.clone(),
                email: credentials.email.clone(),
                password: credentials.password.clone(),
            })
            .await?;
        log::info!("registered {}", credentials.email);
    }

    let token = client
        .send(&LoginRequest {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        })
        .await?;
    client.session().login(&token.access_token)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{HttpMethod, ListStoresRequest};
    use crate::session::Session;
    use crate::testing::MockTransport;
    use futures::executor::block_on;

    fn credentials() -> Credentials {
        Credentials {
            name: "Ann".into(),
            email: "a@b.com".into(),
            password: "x".into(),
        }
    }

    #[test]
    fn test_login_stores_token_for_later_requests() {
        let transport = MockTransport::new();
        transport
            .reply(200, r#"{"access_token":"T","token_type":"bearer"}"#)
            .reply(200, "[]");
        let client = transport.client(Session::in_memory());

        block_on(authenticate(&client, AuthMode::Login, &credentials())).unwrap();
        assert!(client.session().is_authenticated());

        block_on(client.send(&ListStoresRequest)).unwrap();
        assert_eq!(transport.last_request().header("Authorization"), Some("Bearer T"));
    }

    #[test]
    fn test_invalid_credentials_message() {
        let transport = MockTransport::new();
        transport.reply(401, r#"{"detail":"Invalid credentials"}"#);
        let client = transport.client(Session::in_memory());

        let err = block_on(authenticate(&client, AuthMode::Login, &credentials())).unwrap_err();
        assert_eq!(err.display_message(), "Invalid credentials");
        assert!(!client.session().is_authenticated());
    }

    #[test]
    fn test_signup_registers_then_logs_in() {
        let transport = MockTransport::new();
        transport
            .reply(201, r#"{"id":"u1"}"#)
            .reply(200, r#"{"access_token":"T"}"#);
        let client = transport.client(Session::in_memory());

        block_on(authenticate(&client, AuthMode::Signup, &credentials())).unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].url.ends_with("/auth/register"));
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert!(requests[0].body.as_deref().unwrap().contains(r#""name":"Ann""#));
        assert!(requests[1].url.ends_with("/auth/login"));
        assert_eq!(client.session().token().as_deref(), Some("T"));
    }

    #[test]
    fn test_failed_signup_skips_login() {
        let transport = MockTransport::new();
        transport.reply(400, r#"{"detail":"Email already registered"}"#);
        let client = transport.client(Session::in_memory());

        let err = block_on(authenticate(&client, AuthMode::Signup, &credentials())).unwrap_err();
        assert_eq!(err.display_message(), "Email already registered");
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(AuthMode::default(), AuthMode::Login);
        assert_eq!(AuthMode::Login.submit_label(), "Log in");
        assert_eq!(AuthMode::Signup.submit_label(), "Create account");
    }
}

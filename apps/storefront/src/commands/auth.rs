//! # Auth Commands
//!
//! Sign-in and sign-out for the login page.
//!
//! ```text
//! email + password ──► validate_login ──► find_by_email
//!                          │                   │
//!                          │                   ├── none      → UNAUTHORIZED
//!                          │                   ├── inactivo  → UNAUTHORIZED
//!                          │                   └── activo    → record_login,
//!                          │                                   session signed in
//!                          └── blank / malformed → VALIDATION_ERROR
//! ```
//!
//! Accounts carry no stored credential, so any non-empty password is
//! accepted for an active account.

use chrono::Utc;
use meow_core::validation::validate_login;
use meow_core::{CoreError, Session};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{DataState, SessionState};

/// Signs in the account registered under `email`.
///
/// ## Returns
/// The new session, also stored as the current one.
pub fn login(
    data: &DataState,
    sessions: &SessionState,
    email: &str,
    password: &str,
) -> Result<Session, ApiError> {
    let email = validate_login(email, password)?;
    debug!(email = %email, "login command");

    let users = data.inner().users();
    let user = match users.find_by_email(&email)? {
        Some(user) => user,
        None => {
            warn!(email = %email, "Login rejected: unknown account");
            return Err(CoreError::InvalidCredentials.into());
        }
    };

    if !user.is_active() {
        warn!(id = user.id, "Login rejected: account inactive");
        return Err(CoreError::AccountInactive { email: user.email }.into());
    }

    let user = users.record_login(user.id, Utc::now().date_naive())?;
    info!(id = user.id, role = user.role.as_str(), "Login accepted");
    Ok(sessions.sign_in(user.identity()))
}

/// Ends the current session.
pub fn logout(sessions: &SessionState) {
    debug!("logout command");
    sessions.sign_out();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use meow_core::Role;
    use meow_data::Store;

    fn setup() -> (DataState, SessionState) {
        (DataState::new(Store::seeded()), SessionState::new())
    }

    #[test]
    fn test_login_admin_and_customer() {
        let (data, sessions) = setup();

        let session = login(&data, &sessions, " Andres@MeowThreads.com ", "gato").unwrap();
        assert!(session.is_admin());
        assert_eq!(sessions.current(), session);

        let session = login(&data, &sessions, "maria@example.com", "gato").unwrap();
        let identity = session.identity.as_ref().unwrap();
        assert_eq!(identity.role, Role::Customer);
        assert_eq!(identity.user_id, 1);
        assert_eq!(identity.display_name, "María González");

        let today = Utc::now().date_naive();
        let maria = data.inner().users().get_by_id(1).unwrap().unwrap();
        assert_eq!(maria.last_login, Some(today));
    }

    #[test]
    fn test_login_requires_both_fields_and_email_shape() {
        let (data, sessions) = setup();

        for (email, password) in [
            ("", "gato"),
            ("maria@example.com", ""),
            ("   ", "gato"),
            ("maria@example", "gato"),
            ("maria example.com", "gato"),
        ] {
            let err = login(&data, &sessions, email, password).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError, "{email:?}");
        }
        assert!(!sessions.current().is_authenticated());
    }

    #[test]
    fn test_login_rejects_unknown_and_inactive_accounts() {
        let (data, sessions) = setup();

        let err = login(&data, &sessions, "nadie@example.com", "gato").unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        let err = login(&data, &sessions, "pedro@example.com", "gato").unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(err.message, "Account pedro@example.com is inactive");

        let pedro = data.inner().users().get_by_id(4).unwrap().unwrap();
        assert_ne!(pedro.last_login, Some(Utc::now().date_naive()));
        assert!(!sessions.current().is_authenticated());
    }

    #[test]
    fn test_logout() {
        let (data, sessions) = setup();
        login(&data, &sessions, "ana@example.com", "gato").unwrap();
        logout(&sessions);
        assert!(!sessions.current().is_authenticated());
    }
}

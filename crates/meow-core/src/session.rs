//! # Session
//!
//! The identity behind the current browsing session.
//!
//! Authorization decisions read the [`Session`] handed to them by the caller.
//! There is no global "is admin" switch.
//!
//! ```text
//! Guest ──login──► SignedIn { role: Customer } ──► storefront, cart, orders
//!                  SignedIn { role: Admin }    ──► + inventory, order status
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::Customer;
use crate::user::UserId;

/// What a signed-in user may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Admin,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }
}

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: UserId,
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

impl Identity {
    /// The customer snapshot stored on orders this identity places.
    pub fn to_customer(&self) -> Customer {
        Customer {
            user_id: self.user_id,
            name: self.display_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// The session context passed to operations that need authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Random per-session id, useful for correlating log lines.
    pub id: Uuid,
    pub identity: Option<Identity>,
}

impl Session {
    /// An anonymous visitor.
    pub fn guest() -> Self {
        Session {
            id: Uuid::new_v4(),
            identity: None,
        }
    }

    /// A session for `identity`.
    pub fn signed_in(identity: Identity) -> Self {
        Session {
            id: Uuid::new_v4(),
            identity: Some(identity),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|i| i.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Fails with `Forbidden` unless the session belongs to an admin.
    ///
    /// `action` names the operation in the error message.
    pub fn require_admin(&self, action: &str) -> CoreResult<&Identity> {
        match &self.identity {
            Some(identity) if identity.role == Role::Admin => Ok(identity),
            _ => Err(CoreError::Forbidden {
                action: action.to_string(),
                required: Role::Admin.as_str().to_string(),
            }),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::guest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: 1,
            display_name: "Luna".to_string(),
            email: "luna@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_guest_is_not_admin() {
        let session = Session::guest();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert!(matches!(
            session.require_admin("inventory report"),
            Err(CoreError::Forbidden { .. })
        ));
    }

    #[test]
    fn test_customer_is_not_admin() {
        let session = Session::signed_in(identity(Role::Customer));
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Customer));
        assert!(session.require_admin("update order status").is_err());
    }

    #[test]
    fn test_admin_passes() {
        let session = Session::signed_in(identity(Role::Admin));
        assert!(session.is_admin());
        assert_eq!(session.require_admin("restock").unwrap().user_id, 1);
    }

    #[test]
    fn test_identity_to_customer() {
        let customer = identity(Role::Customer).to_customer();
        assert_eq!(customer.user_id, 1);
        assert_eq!(customer.name, "Luna");
        assert_eq!(customer.email, "luna@example.com");
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(Session::guest().id, Session::guest().id);
    }
}

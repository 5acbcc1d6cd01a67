//! # Users
//!
//! Accounts managed from the back office. A user signs in as an
//! [`Identity`] carrying their role.
//!
//! ```text
//! Activo ──toggle──► Inactivo ──toggle──► Activo
//!   │
//!   └── only active users may sign in
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::session::{Identity, Role};

/// Unique identifier for a user.
pub type UserId = u32;

/// Whether an account may sign in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum UserStatus {
    #[default]
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "inactivo")]
    Inactive,
}

impl UserStatus {
    /// The other status.
    pub const fn toggled(&self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }
}

/// A storefront account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unique, compared case-insensitively
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    #[ts(as = "String")]
    pub created_at: NaiveDate,
    /// `None` until the first sign-in
    #[ts(as = "Option<String>")]
    pub last_login: Option<NaiveDate>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// The identity a session carries once this user signs in.
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.id,
            display_name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Input for creating a user. The id, status and dates are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

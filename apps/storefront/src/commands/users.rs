//! # User Management Commands
//!
//! The back office's user table. Admin only.
//!
//! ```text
//! list_users(filter) ──► search name/email, role, status
//! create_user        ──► validate ──► unique email ──► id = max + 1, activo
//! toggle_user_status ──► activo ⇄ inactivo
//! delete_user        ──► row removed
//! ```

use chrono::Utc;
use meow_core::validation::{validate_email, validate_search_query, validate_user_name};
use meow_core::{NewUser, Session, User, UserFilter, UserId};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DataState;

/// Users matching the search box and drop-downs, by id.
pub fn list_users(
    data: &DataState,
    session: &Session,
    filter: &UserFilter,
) -> Result<Vec<User>, ApiError> {
    let admin = session.require_admin("list users")?;
    let filter = UserFilter {
        search: validate_search_query(&filter.search)?,
        ..filter.clone()
    };
    debug!(user = %admin.user_id, ?filter, "list_users command");

    Ok(data.inner().users().list(&filter)?)
}

/// Creates an active account.
///
/// ## Errors
/// * `VALIDATION_ERROR` - Blank or over-long name, malformed email, or an
///   email already in use
pub fn create_user(
    data: &DataState,
    session: &Session,
    new_user: NewUser,
) -> Result<User, ApiError> {
    let admin = session.require_admin("create users")?;
    let new_user = NewUser {
        name: validate_user_name(&new_user.name)?,
        email: validate_email(&new_user.email)?,
        role: new_user.role,
    };
    debug!(user = %admin.user_id, email = %new_user.email, "create_user command");

    let user = data
        .inner()
        .users()
        .create(new_user, Utc::now().date_naive())?;
    info!(id = user.id, by = %admin.user_id, "User created from back office");
    Ok(user)
}

/// Flips a user between active and inactive.
pub fn toggle_user_status(
    data: &DataState,
    session: &Session,
    user_id: UserId,
) -> Result<User, ApiError> {
    let admin = session.require_admin("change user status")?;
    debug!(user = %admin.user_id, user_id, "toggle_user_status command");

    let users = data.inner().users();
    let user = users
        .get_by_id(user_id)?
        .ok_or_else(|| ApiError::not_found("User", user_id))?;
    Ok(users.set_status(user_id, user.status.toggled())?)
}

/// Removes a user and returns the removed account.
pub fn delete_user(data: &DataState, session: &Session, user_id: UserId) -> Result<User, ApiError> {
    let admin = session.require_admin("delete users")?;
    debug!(user = %admin.user_id, user_id, "delete_user command");

    let user = data.inner().users().delete(user_id)?;
    info!(id = user.id, by = %admin.user_id, "User deleted from back office");
    Ok(user)
}

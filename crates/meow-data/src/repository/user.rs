//! # User Repository
//!
//! In-memory user accounts for the back office and for sign-in.
//!
//! Emails are unique ignoring ASCII case. New users take the highest id
//! plus one, so ids of deleted users are reused only when they were the
//! highest.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use meow_core::{NewUser, User, UserFilter, UserId, UserStatus};
use tracing::{debug, info};

use super::UserRepository;
use crate::error::{DataError, DataResult};

/// User repository over a shared in-memory table.
///
/// ## Usage
/// ```rust
/// use meow_data::Store;
///
/// let store = Store::seeded();
/// let admin = store.users().find_by_email("ANDRES@meowthreads.com").unwrap().unwrap();
/// assert!(admin.is_admin());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    table: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserRepository {
    /// Creates a repository over `users`.
    pub fn new(users: Vec<User>) -> Self {
        MemoryUserRepository {
            table: Arc::new(RwLock::new(users)),
        }
    }

    fn update(&self, id: UserId, change: impl FnOnce(&mut User)) -> DataResult<User> {
        let mut table = self.table.write()?;
        let user = table
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DataError::not_found("User", id))?;
        change(user);
        Ok(user.clone())
    }
}

impl UserRepository for MemoryUserRepository {
    fn list(&self, filter: &UserFilter) -> DataResult<Vec<User>> {
        debug!(
            search = %filter.search,
            role = ?filter.role,
            status = ?filter.status,
            "Listing users"
        );
        Ok(filter.apply(self.table.read()?.iter()))
    }

    fn get_by_id(&self, id: UserId) -> DataResult<Option<User>> {
        Ok(self.table.read()?.iter().find(|u| u.id == id).cloned())
    }

    fn find_by_email(&self, email: &str) -> DataResult<Option<User>> {
        let email = email.trim();
        Ok(self
            .table
            .read()?
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn create(&self, new_user: NewUser, created_at: NaiveDate) -> DataResult<User> {
        let mut table = self.table.write()?;
        if table.iter().any(|u| u.email.eq_ignore_ascii_case(&new_user.email)) {
            return Err(DataError::duplicate("email", &new_user.email));
        }

        let last = table.iter().map(|u| u.id).max().unwrap_or(0);
        let id = last
            .checked_add(1)
            .ok_or_else(|| DataError::duplicate("user id", last))?;

        let user = User {
            id,
            name: new_user.name,
            email: new_user.email,
            role: new_user.role,
            status: UserStatus::Active,
            created_at,
            last_login: None,
        };

        info!(id, email = %user.email, role = user.role.as_str(), "User created");
        table.push(user.clone());
        Ok(user)
    }

    fn set_status(&self, id: UserId, status: UserStatus) -> DataResult<User> {
        self.update(id, |user| {
            info!(id, from = ?user.status, to = ?status, "User status updated");
            user.status = status;
        })
    }

    fn delete(&self, id: UserId) -> DataResult<User> {
        let mut table = self.table.write()?;
        let index = table
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| DataError::not_found("User", id))?;

        let user = table.remove(index);
        info!(id, email = %user.email, "User deleted");
        Ok(user)
    }

    fn record_login(&self, id: UserId, date: NaiveDate) -> DataResult<User> {
        self.update(id, |user| user.last_login = Some(date))
    }

    fn count(&self) -> DataResult<usize> {
        Ok(self.table.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use meow_core::Role;

    fn repo() -> MemoryUserRepository {
        MemoryUserRepository::new(seed::users())
    }

    fn day(month: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, d).unwrap()
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Luna Pérez".to_string(),
            email: email.to_string(),
            role: Role::Customer,
        }
    }

    #[test]
    fn test_list_and_filter() {
        let repo = repo();
        assert_eq!(repo.list(&UserFilter::default()).unwrap().len(), 4);

        let filter = UserFilter {
            role: Some(Role::Customer),
            status: Some(UserStatus::Active),
            ..Default::default()
        };
        let ids: Vec<_> = repo.list(&filter).unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_find_by_email_ignores_case_and_spaces() {
        let repo = repo();
        assert_eq!(repo.find_by_email("  Ana@Example.com ").unwrap().unwrap().id, 3);
        assert!(repo.find_by_email("nadie@example.com").unwrap().is_none());
    }

    #[test]
    fn test_create_assigns_next_id() {
        let repo = repo();
        let user = repo.create(new_user("luna@example.com"), day(8, 5)).unwrap();

        assert_eq!(user.id, 5);
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.created_at, day(8, 5));
        assert!(user.last_login.is_none());
        assert_eq!(repo.get_by_id(5).unwrap(), Some(user));
        assert_eq!(repo.count().unwrap(), 5);
    }

    #[test]
    fn test_create_rejects_taken_email() {
        let repo = repo();
        assert!(matches!(
            repo.create(new_user("MARIA@example.com"), day(8, 5)),
            Err(DataError::UniqueViolation { .. })
        ));
        assert_eq!(repo.count().unwrap(), 4);
    }

    #[test]
    fn test_set_status_and_record_login() {
        let repo = repo();
        let user = repo.set_status(4, UserStatus::Active).unwrap();
        assert!(user.is_active());

        let user = repo.record_login(4, day(8, 6)).unwrap();
        assert_eq!(user.last_login, Some(day(8, 6)));

        assert!(matches!(
            repo.set_status(99, UserStatus::Inactive),
            Err(DataError::NotFound { .. })
        ));
    }

    #[test]
    fn test_delete() {
        let repo = repo();
        let removed = repo.delete(3).unwrap();
        assert_eq!(removed.email, "ana@example.com");
        assert!(repo.get_by_id(3).unwrap().is_none());
        assert!(matches!(repo.delete(3), Err(DataError::NotFound { .. })));

        // ids below the highest are not handed out again
        assert_eq!(repo.create(new_user("luna@example.com"), day(8, 5)).unwrap().id, 5);
    }
}

//! Accounts.

use precast_core::roles::Role;
use precast_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user joined with the name of its role.
///
/// Carries the password hash, so it is never serialized; handlers answer
/// with [`UserResponse`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
    /// `roles.name` for `role_id`.
    pub role_name: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// The typed role. `None` only if a role row exists that the code does
    /// not know about.
    pub fn role(&self) -> Option<Role> {
        self.role_name.parse().ok()
    }

    pub fn is_locked_at(&self, now: Timestamp) -> bool {
        self.locked_until.is_some_and(|until| until > now)
    }
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role_name,
            is_active: user.is_active,
            last_login_at: user.last_login_at,
            locked_until: user.locked_until,
            created_at: user.created_at,
        }
    }
}

/// Insert payload. The password is already hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
}

/// Partial update; `None` leaves a column unchanged.
#[derive(Debug, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<DbId>,
    pub is_active: Option<bool>,
}

/// Outcome of recording a failed login.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct FailedLogin {
    pub failed_login_count: i32,
    /// Set when this failure tripped the lockout.
    pub locked_until: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn user(role_name: &str, locked_until: Option<Timestamp>) -> User {
        let now = Utc::now();
        User {
            id: 1,
            username: "somchai".into(),
            email: "somchai@example.com".into(),
            password_hash: "hash".into(),
            role_id: 3,
            role_name: role_name.into(),
            is_active: true,
            last_login_at: None,
            failed_login_count: 0,
            locked_until,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn role_name_parses_to_typed_role() {
        assert_eq!(user("site_user", None).role(), Some(Role::SiteUser));
        assert_eq!(user("auditor", None).role(), None);
    }

    #[test]
    fn lock_expires() {
        let now = Utc::now();
        let locked = user("user", Some(now + Duration::minutes(5)));
        assert!(locked.is_locked_at(now));
        assert!(!locked.is_locked_at(now + Duration::minutes(6)));
        assert!(!user("user", None).is_locked_at(now));
    }

    #[test]
    fn response_omits_password_hash() {
        let json = serde_json::to_value(UserResponse::from(user("admin", None))).unwrap();
        assert_eq!(json["role"], "admin");
        assert!(json.get("password_hash").is_none());
    }
}

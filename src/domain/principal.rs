use std::fmt;

/// Access level attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Whether this role may perform operations that require `required`.
    pub fn grants(self, required: Role) -> bool {
        match self {
            Role::Admin => true,
            Role::User => required == Role::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::User => write!(f, "User"),
        }
    }
}

/// The authenticated identity performing catalog operations.
///
/// Only [`AuthStore::authenticate`](crate::auth::AuthStore::authenticate) hands
/// these out in production code; fields are read-only for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    username: String,
    role: Role,
}

impl Principal {
    pub(crate) fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

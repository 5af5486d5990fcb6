use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::auth::AuthError;
use crate::domain::{Principal, Role};

#[derive(Debug)]
struct Account {
    password: SecretString,
    role: Role,
}

/// Fixed set of accounts loaded at startup.
///
/// There is no registration or password change; the map is never mutated
/// after construction.
#[derive(Debug)]
pub struct AuthStore {
    accounts: HashMap<String, Account>,
}

impl AuthStore {
    pub fn new<I, U, P>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (U, P, Role)>,
        U: Into<String>,
        P: Into<String>,
    {
        let accounts = accounts
            .into_iter()
            .map(|(username, password, role)| {
                let account = Account {
                    password: SecretString::from(password.into()),
                    role,
                };
                (username.into(), account)
            })
            .collect();
        Self { accounts }
    }

    /// The two stock accounts: `admin` / `admin123` and `user` / `user123`.
    pub fn with_default_accounts() -> Self {
        Self::new([
            ("admin", "admin123", Role::Admin),
            ("user", "user123", Role::User),
        ])
    }

    #[instrument(skip(self, password))]
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        match self.accounts.get(username) {
            Some(account) if account.password.expose_secret() == password => {
                debug!(role = %account.role, "Credentials accepted");
                Ok(Principal::new(username, account.role))
            }
            _ => {
                debug!("Credentials rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accounts_carry_their_roles() {
        let store = AuthStore::with_default_accounts();

        let admin = store.authenticate("admin", "admin123").unwrap();
        assert_eq!(admin.username(), "admin");
        assert_eq!(admin.role(), Role::Admin);

        let user = store.authenticate("user", "user123").unwrap();
        assert_eq!(user.role(), Role::User);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_bad_credentials_are_rejected() {
        let store = AuthStore::with_default_accounts();

        assert_eq!(store.authenticate("admin", "user123"), Err(AuthError::InvalidCredentials));
        assert_eq!(store.authenticate("ghost", "admin123"), Err(AuthError::InvalidCredentials));
        assert_eq!(store.authenticate("ADMIN", "admin123"), Err(AuthError::InvalidCredentials));
        assert_eq!(store.authenticate("", ""), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_password_is_not_debug_printed() {
        let store = AuthStore::new([("ops", "hunter22", Role::User)]);
        assert!(!format!("{store:?}").contains("hunter22"));
    }
}

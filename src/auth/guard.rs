use crate::domain::{Principal, Role};
use crate::product_actor::CatalogError;

/// Checks that `principal` holds `required` before `operation` runs.
pub fn authorize(principal: &Principal, required: Role, operation: &'static str) -> Result<(), CatalogError> {
    if principal.role().grants(required) {
        return Ok(());
    }
    tracing::debug!(username = principal.username(), role = %principal.role(), operation, "Authorization denied");
    Err(CatalogError::PermissionDenied {
        username: principal.username().to_string(),
        role: principal.role(),
        operation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_passes_admin_guard() {
        let admin = Principal::new("admin", Role::Admin);
        assert_eq!(authorize(&admin, Role::Admin, "delete products"), Ok(()));
        assert_eq!(authorize(&admin, Role::User, "view inventory"), Ok(()));
    }

    #[test]
    fn test_user_is_denied_with_context() {
        let user = Principal::new("user", Role::User);
        let err = authorize(&user, Role::Admin, "delete products").unwrap_err();
        assert_eq!(
            err,
            CatalogError::PermissionDenied {
                username: "user".into(),
                role: Role::User,
                operation: "delete products",
            }
        );
        assert_eq!(err.to_string(), "Permission denied: user (User) may not delete products");
    }
}

/// Ownership-scoped operations on users, lists and tasks
///
/// This is the layer request handlers call. Every function takes the pool
/// and, for list/task operations, the already-authenticated `user_id`. List
/// and task operations resolve their target through
/// [`crate::auth::authorization`] first, so "not yours" and "does not exist"
/// always come back as the same [`AccessError::NotFound`].
///
/// Operations that both check and mutate run in a single transaction.
///
/// # Modules
///
/// - [`users`]: sign-up, login, current-user resolution
/// - [`lists`]: list CRUD scoped to the owner
/// - [`tasks`]: task CRUD scoped to the owner of the parent list

pub mod lists;
pub mod tasks;
pub mod users;

use crate::auth::{
    authorization::AuthzError, jwt::JwtError, password::PasswordError,
};

/// Result alias for access operations
pub type AccessResult<T> = Result<T, AccessError>;

/// Error type for access operations
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// Entity absent or not owned by the caller
    #[error("{0}")]
    NotFound(String),

    /// Bad credentials or inactive account
    #[error("{0}")]
    Unauthorized(String),

    /// Unique constraint clash, e.g. duplicate username
    #[error("{0}")]
    Conflict(String),

    /// Password hashing or token signing failed
    #[error("Credential operation failed: {0}")]
    Credential(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<AuthzError> for AccessError {
    fn from(err: AuthzError) -> Self {
        match err {
            AuthzError::ListNotFound => AccessError::NotFound("List not found".to_string()),
            AuthzError::TaskNotFound => AccessError::NotFound("Task not found".to_string()),
            AuthzError::DatabaseError(e) => AccessError::Database(e),
        }
    }
}

impl From<PasswordError> for AccessError {
    fn from(err: PasswordError) -> Self {
        AccessError::Credential(err.to_string())
    }
}

impl From<JwtError> for AccessError {
    fn from(err: JwtError) -> Self {
        AccessError::Credential(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authz_maps_to_not_found() {
        let err: AccessError = AuthzError::ListNotFound.into();
        assert!(matches!(err, AccessError::NotFound(ref m) if m == "List not found"));

        let err: AccessError = AuthzError::TaskNotFound.into();
        assert!(matches!(err, AccessError::NotFound(ref m) if m == "Task not found"));
    }

    #[test]
    fn test_credential_errors_are_internal() {
        let err: AccessError = PasswordError::HashError("boom".to_string()).into();
        assert!(matches!(err, AccessError::Credential(_)));

        let err: AccessError = JwtError::CreateError("boom".to_string()).into();
        assert!(matches!(err, AccessError::Credential(_)));
    }
}

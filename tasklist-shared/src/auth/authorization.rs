/// Ownership guard for lists and tasks
///
/// Every list or task operation resolves its target through this module
/// before reading or mutating anything. A resource that exists but belongs to
/// another user produces exactly the same error as one that does not exist,
/// so callers cannot probe for other users' ids.
///
/// # Example
///
/// ```no_run
/// use tasklist_shared::auth::authorization::authorize_list;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool, user_id: i64, list_id: i64) -> Result<(), Box<dyn std::error::Error>> {
/// let mut tx = pool.begin().await?;
/// let list = authorize_list(&mut *tx, user_id, list_id).await?;
/// // ... mutate tasks of `list` ...
/// tx.commit().await?;
/// # Ok(())
/// # }
/// ```

use sqlx::{PgConnection, PgExecutor};

use crate::models::{list::List, task::Task};

/// Error type for ownership checks
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    /// List is missing or owned by someone else
    #[error("List not found")]
    ListNotFound,

    /// Task is missing, in another list, or in a list owned by someone else
    #[error("Task not found")]
    TaskNotFound,

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Returns the list iff it exists and is owned by `user_id`
pub async fn authorize_list<'e, E>(
    executor: E,
    user_id: i64,
    list_id: i64,
) -> Result<List, AuthzError>
where
    E: PgExecutor<'e>,
{
    match List::find_owned(executor, list_id, user_id).await? {
        Some(list) => Ok(list),
        None => {
            tracing::debug!(user_id, list_id, "List lookup denied");
            Err(AuthzError::ListNotFound)
        }
    }
}

/// Returns the list and task iff the task belongs to `list_id` and that list
/// is owned by `user_id`
pub async fn authorize_task(
    conn: &mut PgConnection,
    user_id: i64,
    list_id: i64,
    task_id: i64,
) -> Result<(List, Task), AuthzError> {
    let list = authorize_list(&mut *conn, user_id, list_id).await?;

    match Task::find_in_list(&mut *conn, list.id, task_id).await? {
        Some(task) => Ok((list, task)),
        None => {
            tracing::debug!(user_id, list_id, task_id, "Task lookup denied");
            Err(AuthzError::TaskNotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authz_error_display() {
        assert_eq!(AuthzError::ListNotFound.to_string(), "List not found");
        assert_eq!(AuthzError::TaskNotFound.to_string(), "Task not found");
    }

    #[test]
    fn test_authz_error_from_sqlx() {
        let err: AuthzError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AuthzError::DatabaseError(_)));
    }
}

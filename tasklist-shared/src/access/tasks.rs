/// Task operations scoped to the owner of the parent list
///
/// Every operation here, including creation, runs the list ownership guard.

use sqlx::PgPool;

use super::AccessResult;
use crate::auth::authorization::{authorize_list, authorize_task, AuthzError};
use crate::models::{
    list::ListWithTasks,
    task::{CreateTask, Task},
};
use crate::pagination::Pagination;

/// Returns the tasks of a list owned by the caller, in insertion order
///
/// # Errors
///
/// - `NotFound` if the list is missing or owned by someone else
pub async fn get_tasks(
    pool: &PgPool,
    user_id: i64,
    list_id: i64,
    page: Pagination,
) -> AccessResult<Vec<Task>> {
    authorize_list(pool, user_id, list_id).await?;

    Ok(Task::list_owned(pool, user_id, list_id, page.limit(), page.offset()).await?)
}

/// Creates a task in a list owned by the caller
///
/// # Errors
///
/// - `NotFound` if the list is missing or owned by someone else
pub async fn create_task(
    pool: &PgPool,
    user_id: i64,
    list_id: i64,
    title: &str,
) -> AccessResult<Task> {
    let mut tx = pool.begin().await?;

    let list = authorize_list(&mut *tx, user_id, list_id).await?;
    let task = Task::create(
        &mut *tx,
        CreateTask {
            list_id: list.id,
            title: title.to_string(),
        },
    )
    .await?;

    tx.commit().await?;

    tracing::info!(user_id, list_id, task_id = task.id, "Task created");

    Ok(task)
}

/// Deletes a task from a list owned by the caller
///
/// Returns the parent list with its remaining tasks.
///
/// # Errors
///
/// - `NotFound` if the list is missing or not owned by the caller, or the
///   task does not belong to that list
pub async fn delete_task(
    pool: &PgPool,
    user_id: i64,
    list_id: i64,
    task_id: i64,
) -> AccessResult<ListWithTasks> {
    let mut tx = pool.begin().await?;

    let (list, task) = authorize_task(&mut *tx, user_id, list_id, task_id).await?;

    Task::delete_in_list(&mut *tx, list.id, task.id)
        .await?
        .ok_or(AuthzError::TaskNotFound)?;

    let remaining = Task::list_for_lists(&mut *tx, &[list.id]).await?;

    tx.commit().await?;

    tracing::info!(user_id, list_id, task_id, "Task deleted");

    Ok(ListWithTasks::new(list, remaining))
}

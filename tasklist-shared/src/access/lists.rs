/// List operations scoped to the owning user

use sqlx::PgPool;

use super::AccessResult;
use crate::auth::authorization::{authorize_list, AuthzError};
use crate::models::{
    list::{CreateList, List, ListWithTasks},
    task::Task,
};
use crate::pagination::Pagination;

/// Returns the caller's lists in insertion order, each with its tasks
///
/// Never fails for an empty result; a user with no lists gets `[]`.
pub async fn get_lists(
    pool: &PgPool,
    user_id: i64,
    page: Pagination,
) -> AccessResult<Vec<ListWithTasks>> {
    let lists = List::list_by_owner(pool, user_id, page.limit(), page.offset()).await?;

    let ids: Vec<i64> = lists.iter().map(|l| l.id).collect();
    let tasks = Task::list_for_lists(pool, &ids).await?;

    Ok(ListWithTasks::group(lists, tasks))
}

/// Returns a single list owned by the caller
///
/// # Errors
///
/// - `NotFound` if the list is missing or owned by someone else
pub async fn get_list(pool: &PgPool, user_id: i64, list_id: i64) -> AccessResult<List> {
    Ok(authorize_list(pool, user_id, list_id).await?)
}

/// Creates a list owned by the caller
pub async fn create_list(pool: &PgPool, user_id: i64, name: &str) -> AccessResult<ListWithTasks> {
    let list = List::create(
        pool,
        CreateList {
            name: name.to_string(),
            owner_id: user_id,
        },
    )
    .await?;

    tracing::info!(user_id, list_id = list.id, "List created");

    Ok(ListWithTasks::new(list, Vec::new()))
}

/// Deletes a list owned by the caller and returns it with the tasks it held
///
/// # Errors
///
/// - `NotFound` if the list is missing or owned by someone else
pub async fn delete_list(
    pool: &PgPool,
    user_id: i64,
    list_id: i64,
) -> AccessResult<ListWithTasks> {
    let mut tx = pool.begin().await?;

    let list = authorize_list(&mut *tx, user_id, list_id).await?;
    let tasks = Task::list_for_lists(&mut *tx, &[list.id]).await?;

    // A concurrent delete between guard and here leaves nothing to return.
    let deleted = List::delete_owned(&mut *tx, list.id, user_id)
        .await?
        .ok_or(AuthzError::ListNotFound)?;

    tx.commit().await?;

    tracing::info!(user_id, list_id, removed_tasks = tasks.len(), "List deleted");

    Ok(ListWithTasks::new(deleted, tasks))
}

/// Task endpoints, nested under the owning list
///
/// - `GET /lists/:list_id/tasks?skip=&limit=` - Tasks of a list
/// - `POST /lists/:list_id/tasks` - Add a task
/// - `DELETE /lists/:list_id/tasks?task_id=` - Remove a task
///
/// Each one checks that the caller owns `:list_id` before touching tasks.

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use tasklist_shared::{
    access,
    auth::middleware::AuthContext,
    models::{list::ListWithTasks, task::Task},
    pagination::Pagination,
};
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
}

/// `?task_id=` for task deletion
#[derive(Debug, Deserialize)]
pub struct DeleteTaskQuery {
    pub task_id: i64,
}

/// List tasks of a list
///
/// # Response
///
/// ```json
/// [ { "id": 3, "title": "milk", "completed": false, "list_id": 1 } ]
/// ```
///
/// # Errors
///
/// - `404 Not Found`: List missing, or owned by another user
pub async fn read_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(list_id): Path<i64>,
    Query(page): Query<Pagination>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = access::tasks::get_tasks(&state.db, auth.user_id, list_id, page).await?;
    Ok(Json(tasks))
}

/// Add a task to a list
///
/// # Endpoint
///
/// ```text
/// POST /lists/1/tasks
/// Content-Type: application/json
///
/// { "title": "milk" }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: List missing, or owned by another user
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(list_id): Path<i64>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<Task>> {
    req.validate()?;

    let task = access::tasks::create_task(&state.db, auth.user_id, list_id, &req.title).await?;
    Ok(Json(task))
}

/// Remove a task from a list
///
/// Responds with the parent list and its remaining tasks.
///
/// # Errors
///
/// - `404 Not Found`: List missing or not owned, or the task is not in it
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(list_id): Path<i64>,
    Query(query): Query<DeleteTaskQuery>,
) -> ApiResult<Json<ListWithTasks>> {
    let list =
        access::tasks::delete_task(&state.db, auth.user_id, list_id, query.task_id).await?;
    Ok(Json(list))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_bounds() {
        assert!(CreateTaskRequest { title: "milk".to_string() }.validate().is_ok());
        assert!(CreateTaskRequest { title: String::new() }.validate().is_err());
        assert!(CreateTaskRequest { title: "x".repeat(201) }.validate().is_err());
    }
}

/// List endpoints
///
/// All routes require a bearer token. A list owned by another user answers
/// exactly like a list that does not exist (404).
///
/// - `GET /lists?skip=&limit=` - The caller's lists with their tasks
/// - `POST /lists` - Create a list
/// - `DELETE /lists?list_id=` - Delete a list and its tasks
/// - `GET /lists/:list_id` - A single list

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use tasklist_shared::{
    access,
    auth::middleware::AuthContext,
    models::list::{List, ListWithTasks},
    pagination::Pagination,
};
use validator::Validate;

/// Create list request
///
/// The owner always comes from the token; an `owner_id` or `user_id` in the
/// body is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateListRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// `?list_id=` for list deletion
#[derive(Debug, Deserialize)]
pub struct DeleteListQuery {
    pub list_id: i64,
}

/// List the caller's lists
///
/// # Response
///
/// ```json
/// [
///   { "id": 1, "name": "groceries", "tasks": [
///     { "id": 3, "title": "milk", "completed": false, "list_id": 1 }
///   ] }
/// ]
/// ```
pub async fn read_lists(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(page): Query<Pagination>,
) -> ApiResult<Json<Vec<ListWithTasks>>> {
    let lists = access::lists::get_lists(&state.db, auth.user_id, page).await?;
    Ok(Json(lists))
}

/// Fetch one list as `{id, name}`
///
/// # Errors
///
/// - `404 Not Found`: Missing, or owned by another user
pub async fn read_list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(list_id): Path<i64>,
) -> ApiResult<Json<List>> {
    let list = access::lists::get_list(&state.db, auth.user_id, list_id).await?;
    Ok(Json(list))
}

/// Create a list
///
/// # Endpoint
///
/// ```text
/// POST /lists
/// Content-Type: application/json
///
/// { "name": "groceries" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "name": "groceries", "tasks": [] }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateListRequest>,
) -> ApiResult<Json<ListWithTasks>> {
    req.validate()?;

    let list = access::lists::create_list(&state.db, auth.user_id, &req.name).await?;
    Ok(Json(list))
}

/// Delete a list
///
/// Responds with the deleted list and the tasks that went with it.
///
/// # Errors
///
/// - `404 Not Found`: Missing, or owned by another user
pub async fn delete_list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<DeleteListQuery>,
) -> ApiResult<Json<ListWithTasks>> {
    let list = access::lists::delete_list(&state.db, auth.user_id, query.list_id).await?;
    Ok(Json(list))
}

/// Task model and database operations
///
/// Tasks are only ever addressed through their parent list. Reads that are
/// reachable from a request join `lists` and filter on `owner_id` so a task
/// can never be returned for a list the caller does not own.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id BIGSERIAL PRIMARY KEY,
///     title VARCHAR(200) NOT NULL,
///     completed BOOLEAN NOT NULL DEFAULT FALSE,
///     list_id BIGINT NOT NULL REFERENCES lists (id) ON DELETE CASCADE
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

/// Task row: `{id, title, completed, list_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID
    pub id: i64,

    pub title: String,

    /// Defaults to false on creation
    pub completed: bool,

    /// Parent list, fixed at creation
    pub list_id: i64,
}

/// Input for creating a task
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub list_id: i64,
    pub title: String,
}

impl Task {
    /// Inserts a task under `data.list_id`
    ///
    /// Does not check ownership of the list. Callers go through
    /// `auth::authorization::authorize_list` first.
    pub async fn create<'e, E>(executor: E, data: CreateTask) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, list_id)
            VALUES ($1, $2)
            RETURNING id, title, completed, list_id
            "#,
        )
        .bind(data.title)
        .bind(data.list_id)
        .fetch_one(executor)
        .await
    }

    /// Lists the tasks of a list owned by `owner_id`, in insertion order
    pub async fn list_owned<'e, E>(
        executor: E,
        owner_id: i64,
        list_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT t.id, t.title, t.completed, t.list_id
            FROM tasks t
            JOIN lists l ON l.id = t.list_id
            WHERE t.list_id = $1 AND l.owner_id = $2
            ORDER BY t.id ASC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(list_id)
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await
    }

    /// Fetches every task of the given lists, ordered by list then task id
    ///
    /// Used to attach tasks to lists that were already ownership-filtered.
    pub async fn list_for_lists<'e, E>(
        executor: E,
        list_ids: &[i64],
    ) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        if list_ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, completed, list_id
            FROM tasks
            WHERE list_id = ANY($1)
            ORDER BY list_id ASC, id ASC
            "#,
        )
        .bind(list_ids)
        .fetch_all(executor)
        .await
    }

    /// Finds a task by id only if it belongs to `list_id`
    pub async fn find_in_list<'e, E>(
        executor: E,
        list_id: i64,
        id: i64,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, completed, list_id
            FROM tasks
            WHERE id = $1 AND list_id = $2
            "#,
        )
        .bind(id)
        .bind(list_id)
        .fetch_optional(executor)
        .await
    }

    /// Deletes a task by `(list_id, id)`, returning the removed row
    pub async fn delete_in_list<'e, E>(
        executor: E,
        list_id: i64,
        id: i64,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Task>(
            r#"
            DELETE FROM tasks
            WHERE id = $1 AND list_id = $2
            RETURNING id, title, completed, list_id
            "#,
        )
        .bind(id)
        .bind(list_id)
        .fetch_optional(executor)
        .await
    }
}

/// List model and database operations
///
/// Every lookup, listing and deletion here is keyed by `owner_id` as well as
/// the list id. There is intentionally no unscoped `find_by_id`.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE lists (
///     id BIGSERIAL PRIMARY KEY,
///     name VARCHAR(100) NOT NULL,
///     owner_id BIGINT NOT NULL REFERENCES users (id) ON DELETE CASCADE
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use std::collections::HashMap;

use super::task::Task;

/// List row. Serializes as `{id, name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct List {
    /// Unique list ID
    pub id: i64,

    /// Display name
    pub name: String,

    /// Owning user, fixed at creation
    #[serde(skip)]
    pub owner_id: i64,
}

/// List together with its tasks: `{id, name, tasks}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListWithTasks {
    pub id: i64,
    pub name: String,
    pub tasks: Vec<Task>,
}

impl ListWithTasks {
    pub fn new(list: List, tasks: Vec<Task>) -> Self {
        Self {
            id: list.id,
            name: list.name,
            tasks,
        }
    }

    /// Attaches tasks to their lists, keeping the order of both inputs
    ///
    /// Tasks whose `list_id` is not among `lists` are dropped.
    pub fn group(lists: Vec<List>, tasks: Vec<Task>) -> Vec<Self> {
        let mut by_list: HashMap<i64, Vec<Task>> = HashMap::new();
        for task in tasks {
            by_list.entry(task.list_id).or_default().push(task);
        }

        lists
            .into_iter()
            .map(|list| {
                let tasks = by_list.remove(&list.id).unwrap_or_default();
                Self::new(list, tasks)
            })
            .collect()
    }
}

/// Input for creating a list
#[derive(Debug, Clone)]
pub struct CreateList {
    pub name: String,
    pub owner_id: i64,
}

impl List {
    pub async fn create<'e, E>(executor: E, data: CreateList) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, List>(
            r#"
            INSERT INTO lists (name, owner_id)
            VALUES ($1, $2)
            RETURNING id, name, owner_id
            "#,
        )
        .bind(data.name)
        .bind(data.owner_id)
        .fetch_one(executor)
        .await
    }

    /// Finds a list only if it is owned by `owner_id`
    ///
    /// A list owned by someone else is indistinguishable from a missing one.
    pub async fn find_owned<'e, E>(
        executor: E,
        id: i64,
        owner_id: i64,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, List>(
            r#"
            SELECT id, name, owner_id
            FROM lists
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(executor)
        .await
    }

    /// Lists a user's lists in insertion order
    pub async fn list_by_owner<'e, E>(
        executor: E,
        owner_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, List>(
            r#"
            SELECT id, name, owner_id
            FROM lists
            WHERE owner_id = $1
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await
    }

    /// Deletes a list owned by `owner_id`, returning the removed row
    ///
    /// Its tasks go with it through `ON DELETE CASCADE`.
    pub async fn delete_owned<'e, E>(
        executor: E,
        id: i64,
        owner_id: i64,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, List>(
            r#"
            DELETE FROM lists
            WHERE id = $1 AND owner_id = $2
            RETURNING id, name, owner_id
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(executor)
        .await
    }
}

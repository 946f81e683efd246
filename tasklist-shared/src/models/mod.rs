/// Database models for Tasklist
///
/// Each model owns its SQL. Query functions take any `PgExecutor`, so they
/// run equally against the pool or inside a transaction.
///
/// # Models
///
/// - `user`: Accounts and password hashes
/// - `list`: Named task collections owned by one user
/// - `task`: Completable items belonging to one list
///
/// # Relationships
///
/// ```text
/// users 1 ──< lists 1 ──< tasks
///   lists.owner_id -> users.id
///   tasks.list_id  -> lists.id
/// ```

pub mod list;
pub mod task;
pub mod user;

/// Database layer for Tasklist
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool with health check
/// - `migrations`: Embedded schema migrations
///
/// Models live in the `models` module at the crate root.

pub mod migrations;
pub mod pool;

/// API route handlers
///
/// Handlers deserialize and validate input, take the caller from the
/// `AuthContext` the auth layer inserted, and delegate to
/// `tasklist_shared::access`. They hold no authorization logic of their own.
///
/// - `health`: Health check endpoint
/// - `users`: Sign-up, login, profile
/// - `lists`: List endpoints
/// - `tasks`: Task endpoints nested under a list

pub mod health;
pub mod lists;
pub mod tasks;
pub mod users;

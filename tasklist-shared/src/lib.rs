//! # Tasklist Shared Library
//!
//! Domain core for the Tasklist API: credentials, persistence models, the
//! ownership guard and the access layer the HTTP handlers call into.
//!
//! ## Module Organization
//!
//! - `auth`: Password hashing, bearer tokens, request authentication, ownership guard
//! - `models`: Database models (users, lists, tasks)
//! - `access`: Ownership-scoped operations on those models
//! - `db`: Connection pool and migrations
//! - `pagination`: `skip`/`limit` parameters

pub mod access;
pub mod auth;
pub mod db;
pub mod models;
pub mod pagination;

/// Current version of the Tasklist shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # Tasklist API Server Library
//!
//! HTTP surface of the Tasklist service. Domain logic lives in
//! `tasklist_shared`; this crate wires it to Axum.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;

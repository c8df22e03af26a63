//! # TaskFlow Shared Library
//!
//! This crate contains the types, database layer, and authentication
//! primitives shared by the TaskFlow API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `auth`: Password hashing, JWT tokens, bearer authentication
//! - `db`: Connection pool and migration runner

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the TaskFlow shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

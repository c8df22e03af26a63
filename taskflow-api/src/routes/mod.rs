/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Authentication endpoints (register, login)
/// - `groups`: Group CRUD
/// - `members`: Member CRUD (scoped through the owning group)
/// - `tasks`: Task CRUD (scoped through the group→member chain)

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod groups;
pub mod health;
pub mod members;
pub mod tasks;

/// Response for delete endpoints
///
/// `deleted` is 0 when the resource does not exist or is not owned by the
/// caller; the two cases are deliberately indistinguishable.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// Number of rows deleted
    pub deleted: u64,
}

/// Response for update endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatedResponse {
    /// Number of rows updated
    pub updated: u64,
}

/// Database models for TaskFlow
///
/// This module contains all database models and their CRUD operations.
/// Ownership is chain-derived: every member or task access re-joins
/// member→group→user; there is no denormalized owner column below groups.
///
/// # Models
///
/// - `user`: User accounts
/// - `group`: User-owned collections of members
/// - `member`: Named entities within a group that own tasks
/// - `task`: Titled, optionally-dated units of work owned by a member
///
/// # Example
///
/// ```no_run
/// use taskflow_shared::models::user::{CreateUser, User};
/// use taskflow_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     email: "user@example.com".to_string(),
///     password_hash: "$argon2id$...".to_string(),
/// }).await?;
/// # Ok(())
/// # }
/// ```

pub mod group;
pub mod member;
pub mod task;
pub mod user;

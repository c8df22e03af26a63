/// Group model and database operations
///
/// A group is a user-owned collection of members. Groups are only ever
/// visible to and mutable by their owner; every operation here takes the
/// owner's id and encodes the ownership check in the statement itself.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE groups (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL,
///     description TEXT,
///     owner_id INTEGER NOT NULL REFERENCES users (id),
///     created_at TEXT NOT NULL
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Group model representing a user-owned collection of members
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Group {
    /// Unique group id
    pub id: i64,

    /// Group name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Owning user id
    pub owner_id: i64,

    /// When the group was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroup {
    /// Group name
    pub name: String,

    /// Optional description
    pub description: Option<String>,
}

impl Group {
    /// Creates a new group owned by `owner_id`
    pub async fn create(
        pool: &SqlitePool,
        owner_id: i64,
        data: CreateGroup,
    ) -> Result<Self, sqlx::Error> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO groups (name, description, owner_id, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, description, owner_id, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.description)
        .bind(owner_id)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(group)
    }

    /// Lists all groups owned by `owner_id`, in insertion order
    pub async fn list_by_owner(pool: &SqlitePool, owner_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let groups = sqlx::query_as::<_, Group>(
            r#"
            SELECT id, name, description, owner_id, created_at
            FROM groups
            WHERE owner_id = ?
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

        Ok(groups)
    }

    /// Deletes a group, but only if `owner_id` owns it
    ///
    /// Members and tasks under the group are NOT deleted; they remain as
    /// orphaned rows.
    ///
    /// # Returns
    ///
    /// The number of rows deleted: 0 when the group does not exist or is
    /// owned by someone else (the two cases are indistinguishable).
    pub async fn delete_owned(
        pool: &SqlitePool,
        id: i64,
        owner_id: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM groups WHERE id = ? AND owner_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

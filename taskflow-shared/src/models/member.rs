/// Member model and database operations
///
/// A member is a named entity within a group that owns tasks; it is not a
/// login-capable account. Members carry no owner column of their own: every
/// access joins back through the owning group.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE members (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     group_id INTEGER NOT NULL REFERENCES groups (id),
///     name TEXT NOT NULL,
///     created_at TEXT NOT NULL
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Member model representing a named entity within a group
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    /// Unique member id
    pub id: i64,

    /// The group this member belongs to
    pub group_id: i64,

    /// Member name
    pub name: String,

    /// When the member was created
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Creates a member inside a group, but only if `owner_id` owns it
    ///
    /// The ownership check and the insert are a single atomic
    /// `INSERT ... SELECT` statement: there is no window between verifying
    /// the group and inserting the row.
    ///
    /// # Returns
    ///
    /// The created member, or None when the group does not exist or is
    /// owned by someone else.
    pub async fn create_in_group(
        pool: &SqlitePool,
        group_id: i64,
        owner_id: i64,
        name: String,
    ) -> Result<Option<Self>, sqlx::Error> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (group_id, name, created_at)
            SELECT g.id, ?, ?
            FROM groups g
            WHERE g.id = ? AND g.owner_id = ?
            RETURNING id, group_id, name, created_at
            "#,
        )
        .bind(name)
        .bind(Utc::now())
        .bind(group_id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;

        Ok(member)
    }

    /// Lists the members of a group, but only if `owner_id` owns it
    ///
    /// Returns an empty set when the group does not exist or is owned by
    /// someone else, indistinguishable from a group with no members.
    pub async fn list_in_group(
        pool: &SqlitePool,
        group_id: i64,
        owner_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT m.id, m.group_id, m.name, m.created_at
            FROM members m
            JOIN groups g ON m.group_id = g.id
            WHERE g.id = ? AND g.owner_id = ?
            ORDER BY m.id
            "#,
        )
        .bind(group_id)
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

        Ok(members)
    }

    /// Deletes a member, but only if its group is owned by `owner_id`
    ///
    /// Tasks under the member are NOT deleted; they remain as orphaned rows.
    ///
    /// # Returns
    ///
    /// The number of rows deleted (0 for not-found and not-owned alike).
    pub async fn delete_owned(
        pool: &SqlitePool,
        id: i64,
        owner_id: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM members
            WHERE id = ? AND group_id IN (SELECT id FROM groups WHERE owner_id = ?)
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}

/// Task model and database operations
///
/// A task is a titled, optionally-dated unit of work owned by a member.
/// Authorization is chain-derived on every operation: a task is reachable
/// only through member→group→owner, and each statement here encodes that
/// join directly so the check and the mutation are one atomic statement.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     member_id INTEGER NOT NULL REFERENCES members (id),
///     title TEXT NOT NULL,
///     description TEXT,
///     completed BOOLEAN NOT NULL DEFAULT 0,
///     due_date TEXT,
///     created_at TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskflow_shared::models::task::{CreateTask, Task};
/// use taskflow_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// // Fails (None) unless member 3 is reachable through a group owned by user 7
/// let task = Task::create_for_member(&pool, 3, 7, CreateTask {
///     title: "Water the plants".to_string(),
///     description: None,
///     due_date: None,
/// }).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Task model representing a unit of work owned by a member
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task id
    pub id: i64,

    /// The member this task belongs to
    pub member_id: i64,

    /// Task title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Completion flag
    pub completed: bool,

    /// Optional due date
    pub due_date: Option<NaiveDate>,

    /// When the task was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new task
///
/// New tasks always start with `completed = false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Optional due date
    pub due_date: Option<NaiveDate>,
}

/// Input for updating a task
///
/// This is a full-record replace, not a partial patch: omitted fields become
/// nulls/false, never "unchanged". Callers must resend the complete task
/// state each time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title
    pub title: String,

    /// New description (None clears it)
    pub description: Option<String>,

    /// New completion flag
    pub completed: bool,

    /// New due date (None clears it)
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Creates a task under a member, but only if the member's group is
    /// owned by `owner_id`
    ///
    /// The ownership join and the insert are a single atomic
    /// `INSERT ... SELECT` statement.
    ///
    /// # Returns
    ///
    /// The created task, or None when the member is not reachable through a
    /// group owned by `owner_id`.
    pub async fn create_for_member(
        pool: &SqlitePool,
        member_id: i64,
        owner_id: i64,
        data: CreateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (member_id, title, description, completed, due_date, created_at)
            SELECT m.id, ?, ?, 0, ?, ?
            FROM members m
            JOIN groups g ON m.group_id = g.id
            WHERE m.id = ? AND g.owner_id = ?
            RETURNING id, member_id, title, description, completed, due_date, created_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.due_date)
        .bind(Utc::now())
        .bind(member_id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists the tasks of a member, but only if the member's group is owned
    /// by `owner_id`
    ///
    /// Returns an empty set when the chain does not resolve.
    pub async fn list_for_member(
        pool: &SqlitePool,
        member_id: i64,
        owner_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT t.id, t.member_id, t.title, t.description, t.completed, t.due_date, t.created_at
            FROM tasks t
            JOIN members m ON t.member_id = m.id
            JOIN groups g ON m.group_id = g.id
            WHERE t.member_id = ? AND g.owner_id = ?
            ORDER BY t.id
            "#,
        )
        .bind(member_id)
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Replaces a task's mutable fields, scoped by the ownership chain
    ///
    /// # Returns
    ///
    /// The number of rows updated (0 for not-found and not-owned alike).
    pub async fn update_owned(
        pool: &SqlitePool,
        id: i64,
        owner_id: i64,
        data: UpdateTask,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, description = ?, completed = ?, due_date = ?
            WHERE id = ? AND member_id IN (
                SELECT m.id
                FROM members m
                JOIN groups g ON m.group_id = g.id
                WHERE g.owner_id = ?
            )
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.completed)
        .bind(data.due_date)
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a task, scoped by the ownership chain
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
            DELETE FROM tasks
            WHERE id = ? AND member_id IN (
                SELECT m.id
                FROM members m
                JOIN groups g ON m.group_id = g.id
                WHERE g.owner_id = ?
            )
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}

/// Integration tests for the TaskFlow models
///
/// These run against an in-memory SQLite database with the real migrations
/// applied, exercising the ownership-chain semantics at the model level:
/// - Chain-derived authorization on every operation
/// - Zero-count / empty-set results for unowned resources
/// - Non-cascading deletes (orphaned rows remain)

use sqlx::SqlitePool;
use taskflow_shared::db::migrations::run_migrations;
use taskflow_shared::db::pool::{create_pool, DatabaseConfig};
use taskflow_shared::models::group::{CreateGroup, Group};
use taskflow_shared::models::member::Member;
use taskflow_shared::models::task::{CreateTask, Task, UpdateTask};
use taskflow_shared::models::user::{CreateUser, User};

/// Fresh in-memory database with the schema applied
///
/// A single connection keeps the in-memory database alive and shared.
async fn test_pool() -> SqlitePool {
    let pool = create_pool(DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        ..Default::default()
    })
    .await
    .expect("Pool should be created");

    run_migrations(&pool).await.expect("Migrations should run");

    pool
}

async fn test_user(pool: &SqlitePool, email: &str) -> User {
    User::create(
        pool,
        CreateUser {
            email: email.to_string(),
            password_hash: "$argon2id$test".to_string(),
        },
    )
    .await
    .expect("User should be created")
}

async fn test_group(pool: &SqlitePool, owner_id: i64, name: &str) -> Group {
    Group::create(
        pool,
        owner_id,
        CreateGroup {
            name: name.to_string(),
            description: None,
        },
    )
    .await
    .expect("Group should be created")
}

#[tokio::test]
async fn test_user_create_and_find() {
    let pool = test_pool().await;

    let user = test_user(&pool, "alice@example.com").await;
    assert_eq!(user.email, "alice@example.com");

    let by_email = User::find_by_email(&pool, "alice@example.com")
        .await
        .unwrap()
        .expect("Should find by email");
    assert_eq!(by_email.id, user.id);

    let by_id = User::find_by_id(&pool, user.id)
        .await
        .unwrap()
        .expect("Should find by id");
    assert_eq!(by_id.email, user.email);

    assert!(User::find_by_email(&pool, "nobody@example.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let pool = test_pool().await;

    test_user(&pool, "alice@example.com").await;

    let result = User::create(
        &pool,
        CreateUser {
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$other".to_string(),
        },
    )
    .await;

    assert!(result.is_err(), "Second insert with same email should fail");
}

#[tokio::test]
async fn test_group_ownership_isolation() {
    let pool = test_pool().await;

    let alice = test_user(&pool, "alice@example.com").await;
    let bob = test_user(&pool, "bob@example.com").await;

    let group = test_group(&pool, alice.id, "Chores").await;
    assert_eq!(group.owner_id, alice.id);

    // Alice sees her group, Bob does not
    let alice_groups = Group::list_by_owner(&pool, alice.id).await.unwrap();
    assert_eq!(alice_groups.len(), 1);
    assert!(Group::list_by_owner(&pool, bob.id).await.unwrap().is_empty());

    // Bob's delete of Alice's group affects 0 rows
    let deleted = Group::delete_owned(&pool, group.id, bob.id).await.unwrap();
    assert_eq!(deleted, 0);

    // The group survives and Alice can delete it
    assert_eq!(Group::list_by_owner(&pool, alice.id).await.unwrap().len(), 1);
    let deleted = Group::delete_owned(&pool, group.id, alice.id).await.unwrap();
    assert_eq!(deleted, 1);
}

#[tokio::test]
async fn test_groups_listed_in_insertion_order() {
    let pool = test_pool().await;
    let alice = test_user(&pool, "alice@example.com").await;

    test_group(&pool, alice.id, "first").await;
    test_group(&pool, alice.id, "second").await;
    test_group(&pool, alice.id, "third").await;

    let names: Vec<String> = Group::list_by_owner(&pool, alice.id)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_member_create_requires_ownership() {
    let pool = test_pool().await;

    let alice = test_user(&pool, "alice@example.com").await;
    let bob = test_user(&pool, "bob@example.com").await;
    let group = test_group(&pool, alice.id, "Chores").await;

    // Bob cannot add a member to Alice's group
    let denied = Member::create_in_group(&pool, group.id, bob.id, "Intruder".to_string())
        .await
        .unwrap();
    assert!(denied.is_none());

    // And no row was created
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    // Alice can
    let member = Member::create_in_group(&pool, group.id, alice.id, "Kid".to_string())
        .await
        .unwrap()
        .expect("Owner should create member");
    assert_eq!(member.group_id, group.id);
    assert_eq!(member.name, "Kid");
}

#[tokio::test]
async fn test_member_list_join_enforced() {
    let pool = test_pool().await;

    let alice = test_user(&pool, "alice@example.com").await;
    let bob = test_user(&pool, "bob@example.com").await;
    let group = test_group(&pool, alice.id, "Chores").await;

    Member::create_in_group(&pool, group.id, alice.id, "Kid".to_string())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        Member::list_in_group(&pool, group.id, alice.id)
            .await
            .unwrap()
            .len(),
        1
    );

    // Unowned group and nonexistent group are both just empty
    assert!(Member::list_in_group(&pool, group.id, bob.id)
        .await
        .unwrap()
        .is_empty());
    assert!(Member::list_in_group(&pool, 9999, alice.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_task_lifecycle_through_chain() {
    let pool = test_pool().await;

    let alice = test_user(&pool, "alice@example.com").await;
    let group = test_group(&pool, alice.id, "Chores").await;
    let member = Member::create_in_group(&pool, group.id, alice.id, "Kid".to_string())
        .await
        .unwrap()
        .unwrap();

    let task = Task::create_for_member(
        &pool,
        member.id,
        alice.id,
        CreateTask {
            title: "Dishes".to_string(),
            description: Some("After dinner".to_string()),
            due_date: "2026-09-01".parse().ok(),
        },
    )
    .await
    .unwrap()
    .expect("Owner should create task");

    assert!(!task.completed);
    assert_eq!(task.member_id, member.id);

    // Full-record replace: toggle completed, clear description and due date
    let updated = Task::update_owned(
        &pool,
        task.id,
        alice.id,
        UpdateTask {
            title: "Dishes".to_string(),
            description: None,
            completed: true,
            due_date: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(updated, 1);

    let tasks = Task::list_for_member(&pool, member.id, alice.id)
        .await
        .unwrap();
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].completed);
    assert!(tasks[0].description.is_none());
    assert!(tasks[0].due_date.is_none());

    let deleted = Task::delete_owned(&pool, task.id, alice.id).await.unwrap();
    assert_eq!(deleted, 1);
    assert!(Task::list_for_member(&pool, member.id, alice.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_task_operations_denied_across_users() {
    let pool = test_pool().await;

    let alice = test_user(&pool, "alice@example.com").await;
    let bob = test_user(&pool, "bob@example.com").await;
    let group = test_group(&pool, alice.id, "Chores").await;
    let member = Member::create_in_group(&pool, group.id, alice.id, "Kid".to_string())
        .await
        .unwrap()
        .unwrap();
    let task = Task::create_for_member(
        &pool,
        member.id,
        alice.id,
        CreateTask {
            title: "Dishes".to_string(),
            description: None,
            due_date: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    // Bob cannot create, list, update, or delete through Alice's chain
    assert!(Task::create_for_member(
        &pool,
        member.id,
        bob.id,
        CreateTask {
            title: "Sneaky".to_string(),
            description: None,
            due_date: None,
        },
    )
    .await
    .unwrap()
    .is_none());

    assert!(Task::list_for_member(&pool, member.id, bob.id)
        .await
        .unwrap()
        .is_empty());

    let updated = Task::update_owned(
        &pool,
        task.id,
        bob.id,
        UpdateTask {
            title: "Hijacked".to_string(),
            description: None,
            completed: true,
            due_date: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(updated, 0);

    assert_eq!(Task::delete_owned(&pool, task.id, bob.id).await.unwrap(), 0);

    // Alice's task is untouched
    let tasks = Task::list_for_member(&pool, member.id, alice.id)
        .await
        .unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Dishes");
    assert!(!tasks[0].completed);
}

#[tokio::test]
async fn test_member_delete_orphans_tasks() {
    let pool = test_pool().await;

    let alice = test_user(&pool, "alice@example.com").await;
    let group = test_group(&pool, alice.id, "Chores").await;
    let member = Member::create_in_group(&pool, group.id, alice.id, "Kid".to_string())
        .await
        .unwrap()
        .unwrap();
    let task = Task::create_for_member(
        &pool,
        member.id,
        alice.id,
        CreateTask {
            title: "Dishes".to_string(),
            description: None,
            due_date: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    // Deleting the member succeeds even though it still has tasks
    let deleted = Member::delete_owned(&pool, member.id, alice.id)
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    // The task row survives with a now-dangling member_id
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE id = ?")
        .bind(task.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let (dangling_member_id,): (i64,) =
        sqlx::query_as("SELECT member_id FROM tasks WHERE id = ?")
            .bind(task.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(dangling_member_id, member.id);

    // The orphaned task is no longer reachable through the chain
    assert!(Task::list_for_member(&pool, member.id, alice.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_completed_partition() {
    let pool = test_pool().await;

    let alice = test_user(&pool, "alice@example.com").await;
    let group = test_group(&pool, alice.id, "Chores").await;
    let member = Member::create_in_group(&pool, group.id, alice.id, "Kid".to_string())
        .await
        .unwrap()
        .unwrap();

    for (title, completed) in [("a", true), ("b", false), ("c", true), ("d", false), ("e", false)]
    {
        let task = Task::create_for_member(
            &pool,
            member.id,
            alice.id,
            CreateTask {
                title: title.to_string(),
                description: None,
                due_date: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

        if completed {
            Task::update_owned(
                &pool,
                task.id,
                alice.id,
                UpdateTask {
                    title: title.to_string(),
                    description: None,
                    completed: true,
                    due_date: None,
                },
            )
            .await
            .unwrap();
        }
    }

    let tasks = Task::list_for_member(&pool, member.id, alice.id)
        .await
        .unwrap();
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let pending = tasks.iter().filter(|t| !t.completed).count();

    assert_eq!(total, 5);
    assert_eq!(completed, 2);
    assert_eq!(completed + pending, total);
}

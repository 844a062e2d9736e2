use outline_core::{
    models::Field, params::CreateTask, store::TaskPatch, Database, StepData, WizardError,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn create_params(title: &str) -> CreateTask {
    CreateTask {
        title: title.to_string(),
        description: String::new(),
    }
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();

    assert!(_temp_file.path().exists());
}

#[test]
fn test_create_task() {
    let (_temp_file, mut db) = create_test_db();

    let task = db
        .create_task(&CreateTask {
            title: "Test Title".to_string(),
            description: "Test Description".to_string(),
        })
        .expect("Failed to create task");

    assert_eq!(task.title, "Test Title");
    assert_eq!(task.description, "Test Description");
    assert!(task.id > 0);
    // Fresh tasks start with an all-blank worksheet and no completed steps
    assert_eq!(task.step_data, StepData::default());
    assert_eq!(task.progress(), 0);
}

#[test]
fn test_create_task_rejects_blank_title() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.create_task(&create_params("   "));
    assert!(result.is_err());

    match result.unwrap_err() {
        WizardError::InvalidInput { field, .. } => assert_eq!(field, "title"),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }

    // The database should still be functional
    let task = db
        .create_task(&create_params("Valid Title"))
        .expect("Should be able to create task after error");
    assert!(task.id > 0);
}

#[test]
fn test_get_task() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_task(&create_params("Get Title"))
        .expect("Failed to create task");

    let retrieved = db
        .get_task(created.id)
        .expect("Failed to get task")
        .expect("Task should exist");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.title, "Get Title");
    // Worksheet round-trips through the JSON column
    assert_eq!(retrieved.step_data, created.step_data);
}

#[test]
fn test_get_nonexistent_task() {
    let (_temp_file, db) = create_test_db();

    let result = db.get_task(999).expect("Query should succeed");
    assert!(result.is_none());
}

#[test]
fn test_list_tasks() {
    let (_temp_file, mut db) = create_test_db();

    db.create_task(&create_params("Title 1"))
        .expect("Failed to create task 1");
    db.create_task(&create_params("Title 2"))
        .expect("Failed to create task 2");
    db.create_task(&create_params("Title 3"))
        .expect("Failed to create task 3");

    let tasks = db.list_tasks().expect("Failed to list tasks");
    assert_eq!(tasks.len(), 3);
}

#[test]
fn test_list_orders_most_recently_updated_first() {
    let (_temp_file, mut db) = create_test_db();

    let first = db
        .create_task(&create_params("First"))
        .expect("Failed to create task");
    let second = db
        .create_task(&create_params("Second"))
        .expect("Failed to create task");

    // Touching the older task moves it to the front
    db.update_task(
        first.id,
        &TaskPatch {
            description: Some("touched".to_string()),
            ..Default::default()
        },
    )
    .expect("Failed to update task");

    let tasks = db.list_tasks().expect("Failed to list tasks");
    assert_eq!(tasks[0].id, first.id);
    assert_eq!(tasks[1].id, second.id);
}

#[test]
fn test_update_task_merges_partial_patch() {
    let (_temp_file, mut db) = create_test_db();

    let task = db
        .create_task(&CreateTask {
            title: "Original".to_string(),
            description: "Keep me".to_string(),
        })
        .expect("Failed to create task");

    let updated = db
        .update_task(
            task.id,
            &TaskPatch {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .expect("Failed to update task");

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.description, "Keep me");
    assert!(updated.updated_at >= task.updated_at);
}

#[test]
fn test_update_task_persists_worksheet() {
    let (_temp_file, mut db) = create_test_db();

    let task = db
        .create_task(&create_params("Worksheet"))
        .expect("Failed to create task");

    let mut data = StepData::default();
    data.set(Field::Idea(0), "first idea")
        .expect("Failed to set idea");
    data.set(Field::TargetUsers, "developers")
        .expect("Failed to set field");

    db.update_task(
        task.id,
        &TaskPatch {
            step_data: Some(data.clone()),
            ..Default::default()
        },
    )
    .expect("Failed to update task");

    let retrieved = db
        .get_task(task.id)
        .expect("Failed to get task")
        .expect("Task should exist");

    assert_eq!(retrieved.step_data, data);
    // Step 1 completes from content alone; step 2 is still partial
    let expected: std::collections::BTreeSet<u8> = [1u8].into_iter().collect();
    assert_eq!(retrieved.completed_steps(), expected);
    assert_eq!(retrieved.progress(), 1);
}

#[test]
fn test_update_nonexistent_task() {
    let (_temp_file, mut db) = create_test_db();

    let existing = db
        .create_task(&create_params("Survivor"))
        .expect("Failed to create task");

    let result = db.update_task(
        999,
        &TaskPatch {
            title: Some("Ghost".to_string()),
            ..Default::default()
        },
    );
    assert!(result.is_err());

    match result.unwrap_err() {
        WizardError::TaskNotFound { id } => assert_eq!(id, 999),
        other => panic!("Expected TaskNotFound error, got {other:?}"),
    }

    // Other records are untouched
    let retrieved = db
        .get_task(existing.id)
        .expect("Failed to get task")
        .expect("Task should exist");
    assert_eq!(retrieved.title, "Survivor");
}

#[test]
fn test_delete_task() {
    let (_temp_file, mut db) = create_test_db();

    let task = db
        .create_task(&create_params("Doomed"))
        .expect("Failed to create task");

    db.delete_task(task.id).expect("Failed to delete task");

    assert!(db
        .get_task(task.id)
        .expect("Failed to get task")
        .is_none());
}

#[test]
fn test_delete_is_idempotent() {
    let (_temp_file, mut db) = create_test_db();

    let task = db
        .create_task(&create_params("Twice"))
        .expect("Failed to create task");

    db.delete_task(task.id).expect("Failed to delete task");
    // Deleting an already-deleted id succeeds
    db.delete_task(task.id)
        .expect("Second delete should succeed");
    db.delete_task(12345)
        .expect("Deleting an unknown id should succeed");
}

#[test]
fn test_duplicate_task_titles_allowed() {
    let (_temp_file, mut db) = create_test_db();

    let task1 = db
        .create_task(&create_params("Duplicate Title"))
        .expect("Failed to create first task");
    let task2 = db
        .create_task(&create_params("Duplicate Title"))
        .expect("Failed to create second task");

    assert_ne!(task1.id, task2.id);
    assert_eq!(task1.title, task2.title);
}

#[test]
fn test_tasks_persist_across_reopen() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

    let task_id = {
        let mut db = Database::new(temp_file.path()).expect("Failed to create database");
        let task = db
            .create_task(&create_params("Durable"))
            .expect("Failed to create task");

        let mut data = StepData::default();
        data.set(Field::Idea(0), "survives restart")
            .expect("Failed to set idea");
        db.update_task(
            task.id,
            &TaskPatch {
                step_data: Some(data),
                ..Default::default()
            },
        )
        .expect("Failed to update task");

        task.id
    };

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let task = db
        .get_task(task_id)
        .expect("Failed to get task")
        .expect("Task should survive reopen");

    assert_eq!(task.title, "Durable");
    assert_eq!(task.step_data.step1[0], "survives restart");
}

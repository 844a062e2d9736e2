mod common;

use common::create_test_wizard;
use outline_core::{
    filter_tasks,
    models::{Field, TaskSummary},
    params::{CreateTask, UpdateTask},
    WizardBuilder,
};

#[tokio::test]
async fn test_complete_worksheet_workflow() {
    let (_temp_dir, mut wizard) = create_test_wizard().await;

    // Create a task
    let task = wizard
        .create_task(&CreateTask {
            title: "Integration Test".to_string(),
            description: "Testing the complete workflow".to_string(),
        })
        .await
        .expect("Failed to create task");

    assert_eq!(wizard.current_task_id(), Some(task.id));
    assert_eq!(wizard.current_step(), 1);
    assert_eq!(wizard.progress(), 0);

    // Step 1: brainstorm
    wizard
        .edit_field(Field::Idea(0), "a shared shopping list")
        .expect("Failed to edit idea");
    wizard.add_idea("a recipe planner");
    let step = wizard.advance_step().await.expect("Failed to advance");
    assert_eq!(step, 2);

    // Step 2: users and benefits
    wizard
        .edit_field(Field::TargetUsers, "busy households")
        .expect("Failed to edit field");
    wizard
        .edit_field(Field::UsageScenarios, "weekly grocery planning")
        .expect("Failed to edit field");
    wizard
        .edit_field(Field::Benefits, "no more duplicate purchases")
        .expect("Failed to edit field");
    wizard.advance_step().await.expect("Failed to advance");

    // Step 3: usage scenario
    wizard
        .edit_field(Field::UsageScenes, "adding items while commuting")
        .expect("Failed to edit field");
    wizard
        .edit_field(Field::Explanation, "a list that syncs across phones")
        .expect("Failed to edit field");
    wizard.advance_step().await.expect("Failed to advance");

    // Step 4: peer review
    wizard
        .edit_field(Field::Feedback, "partner found it intuitive")
        .expect("Failed to edit field");
    wizard
        .edit_field(Field::Improvements, "add quantity per item")
        .expect("Failed to edit field");
    wizard
        .edit_field(Field::FinalCheck, "ready to build")
        .expect("Failed to edit field");
    let committed = wizard.commit().await.expect("Failed to commit");
    assert!(committed);

    assert_eq!(wizard.progress(), 4);
    assert!(wizard.is_finished());

    // The durable record agrees with the buffer
    let stored = wizard
        .current_task()
        .expect("Task should be selected");
    assert!(stored.is_finished());
    assert_eq!(stored.step_data.step1.len(), 2);
}

#[tokio::test]
async fn test_edits_survive_rebuild() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let task_id = {
        let mut wizard = WizardBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .await
            .expect("Failed to create wizard");

        let task = wizard
            .create_task(&CreateTask {
                title: "Durable".to_string(),
                description: String::new(),
            })
            .await
            .expect("Failed to create task");

        wizard
            .edit_field(Field::Idea(0), "persisted idea")
            .expect("Failed to edit idea");
        wizard.commit().await.expect("Failed to commit");

        task.id
    };

    // A fresh wizard over the same file sees the committed work
    let wizard = WizardBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to rebuild wizard");

    assert_eq!(wizard.current_task_id(), Some(task_id));
    assert_eq!(wizard.buffer().step1[0], "persisted idea");
    assert_eq!(wizard.progress(), 1);
}

#[tokio::test]
async fn test_clearing_a_field_retracts_completion() {
    let (_temp_dir, mut wizard) = create_test_wizard().await;

    wizard
        .create_task(&CreateTask {
            title: "Retraction".to_string(),
            description: String::new(),
        })
        .await
        .expect("Failed to create task");

    wizard
        .edit_field(Field::Idea(0), "only idea")
        .expect("Failed to edit idea");
    wizard.commit().await.expect("Failed to commit");
    assert_eq!(wizard.progress(), 1);

    wizard
        .edit_field(Field::Idea(0), "")
        .expect("Failed to clear idea");
    wizard.commit().await.expect("Failed to commit");

    // Completion is derived from content, so the step un-completes
    assert_eq!(wizard.progress(), 0);
    let stored = wizard.current_task().expect("Task should be selected");
    assert_eq!(stored.progress(), 0);
}

#[tokio::test]
async fn test_switching_tasks_keeps_worksheets_separate() {
    let (_temp_dir, mut wizard) = create_test_wizard().await;

    let first = wizard
        .create_task(&CreateTask {
            title: "First".to_string(),
            description: String::new(),
        })
        .await
        .expect("Failed to create task");
    let second = wizard
        .create_task(&CreateTask {
            title: "Second".to_string(),
            description: String::new(),
        })
        .await
        .expect("Failed to create task");

    // Work on the second task (selected by creation)
    assert_eq!(wizard.current_task_id(), Some(second.id));
    wizard
        .edit_field(Field::Idea(0), "belongs to second")
        .expect("Failed to edit idea");
    wizard.commit().await.expect("Failed to commit");

    // Switching loads the first task's blank worksheet
    wizard.select_task(first.id);
    assert_eq!(wizard.buffer().step1[0], "");
    assert_eq!(wizard.current_step(), 1);

    // And switching back restores the second task's content
    wizard.select_task(second.id);
    assert_eq!(wizard.buffer().step1[0], "belongs to second");
}

#[tokio::test]
async fn test_rename_and_delete_round_trip() {
    let (_temp_dir, mut wizard) = create_test_wizard().await;

    let keep = wizard
        .create_task(&CreateTask {
            title: "Keeper".to_string(),
            description: String::new(),
        })
        .await
        .expect("Failed to create task");
    let doomed = wizard
        .create_task(&CreateTask {
            title: "Doomed".to_string(),
            description: String::new(),
        })
        .await
        .expect("Failed to create task");

    let renamed = wizard
        .update_task(&UpdateTask {
            id: doomed.id,
            title: Some("Condemned".to_string()),
            description: None,
        })
        .await
        .expect("Failed to update task")
        .expect("Task should still exist");
    assert_eq!(renamed.title, "Condemned");

    wizard
        .delete_task(doomed.id)
        .await
        .expect("Failed to delete task");

    assert_eq!(wizard.tasks().len(), 1);
    assert_eq!(wizard.current_task_id(), Some(keep.id));
}

#[tokio::test]
async fn test_filter_over_wizard_tasks() {
    let (_temp_dir, mut wizard) = create_test_wizard().await;

    wizard
        .create_task(&CreateTask {
            title: "Shopping list app".to_string(),
            description: String::new(),
        })
        .await
        .expect("Failed to create task");
    wizard
        .create_task(&CreateTask {
            title: "Workout tracker".to_string(),
            description: "shopping for gyms".to_string(),
        })
        .await
        .expect("Failed to create task");
    wizard
        .create_task(&CreateTask {
            title: "Budget planner".to_string(),
            description: String::new(),
        })
        .await
        .expect("Failed to create task");

    // Case-insensitive substring match over title and description
    let matches = filter_tasks(wizard.tasks(), "SHOPPING");
    assert_eq!(matches.len(), 2);

    let summaries: Vec<TaskSummary> = matches.iter().map(|t| TaskSummary::from(*t)).collect();
    assert!(summaries.iter().all(|s| s.total_steps == 4));

    assert!(filter_tasks(wizard.tasks(), "").len() == 3);
    assert!(filter_tasks(wizard.tasks(), "nothing matches this").is_empty());
}

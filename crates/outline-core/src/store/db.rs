//! SQLite persistence for the task store.
//!
//! Handles the database connection, schema management, and task CRUD
//! queries. The step worksheet is stored as a JSON text column so the full
//! nested record round-trips without loss.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};

use crate::{
    error::{Result, StoreResultExt, WizardError},
    models::{completion, StepData, Task},
    params::CreateTask,
    store::TaskPatch,
};

const INSERT_TASK_SQL: &str = "INSERT INTO tasks (title, description, step_data, progress, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TASK_SQL: &str =
    "SELECT id, title, description, step_data, created_at, updated_at FROM tasks WHERE id = ?1";
const LIST_TASKS_SQL: &str = "SELECT id, title, description, step_data, created_at, updated_at FROM tasks ORDER BY updated_at DESC, id DESC";
const UPDATE_TASK_SQL: &str = "UPDATE tasks SET title = ?1, description = ?2, step_data = ?3, progress = ?4, updated_at = ?5 WHERE id = ?6";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).store_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initializes the database schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .store_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Check if the progress column exists in the tasks table
        let has_progress_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('tasks') WHERE name = 'progress'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        // Add progress column if it doesn't exist
        if !has_progress_column {
            self.connection
                .execute(
                    "ALTER TABLE tasks ADD COLUMN progress INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .store_context("Failed to add progress column to tasks table")?;
        }

        Ok(())
    }

    /// Creates a new task with an all-blank worksheet.
    pub fn create_task(&mut self, params: &CreateTask) -> Result<Task> {
        params.validate()?;

        let tx = self
            .connection
            .transaction()
            .store_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        let step_data = StepData::default();
        let step_json = serde_json::to_string(&step_data)?;
        let progress = completion::progress(&step_data);

        tx.execute(
            INSERT_TASK_SQL,
            params![
                &params.title,
                &params.description,
                &step_json,
                progress,
                &now_str,
                &now_str
            ],
        )
        .store_context("Failed to insert task")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().store_context("Failed to commit transaction")?;

        Ok(Task {
            id,
            title: params.title.clone(),
            description: params.description.clone(),
            step_data,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a task by its ID.
    pub fn get_task(&self, id: u64) -> Result<Option<Task>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASK_SQL)
            .store_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], task_from_row)
            .optional()
            .store_context("Failed to query task")
    }

    /// Lists all tasks, most recently updated first.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        let mut stmt = self
            .connection
            .prepare(LIST_TASKS_SQL)
            .store_context("Failed to prepare query")?;

        let tasks = stmt
            .query_map([], task_from_row)
            .store_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .store_context("Failed to fetch tasks")?;

        Ok(tasks)
    }

    /// Applies a partial merge-write to a task and returns the merged
    /// record. Fails with `TaskNotFound` if the id no longer exists.
    pub fn update_task(&mut self, id: u64, patch: &TaskPatch) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .store_context("Failed to begin transaction")?;

        let existing = tx
            .query_row(SELECT_TASK_SQL, params![id as i64], task_from_row)
            .optional()
            .store_context("Failed to query task")?;

        let Some(mut task) = existing else {
            return Err(WizardError::TaskNotFound { id });
        };

        if let Some(ref title) = patch.title {
            task.title = title.clone();
        }
        if let Some(ref description) = patch.description {
            task.description = description.clone();
        }
        if let Some(ref step_data) = patch.step_data {
            task.step_data = step_data.clone();
            task.step_data.normalize();
        }
        task.updated_at = Timestamp::now();

        let step_json = serde_json::to_string(&task.step_data)?;
        let progress = completion::progress(&task.step_data);

        tx.execute(
            UPDATE_TASK_SQL,
            params![
                &task.title,
                &task.description,
                &step_json,
                progress,
                task.updated_at.to_string(),
                id as i64
            ],
        )
        .store_context("Failed to update task")?;

        tx.commit().store_context("Failed to commit transaction")?;

        Ok(task)
    }

    /// Deletes a task. Deleting an id that no longer exists is not an
    /// error.
    pub fn delete_task(&mut self, id: u64) -> Result<()> {
        self.connection
            .execute(DELETE_TASK_SQL, params![id as i64])
            .store_context("Failed to delete task")?;

        Ok(())
    }
}

/// Maps a task row (id, title, description, step_data, created_at,
/// updated_at) into a `Task`.
fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    let step_json: String = row.get(3)?;
    let mut step_data: StepData = serde_json::from_str(&step_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
    step_data.normalize();

    Ok(Task {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        description: row.get(2)?,
        step_data,
        created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
        })?,
        updated_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
        })?,
    })
}

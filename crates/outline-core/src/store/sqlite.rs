//! SQLite-backed task store.
//!
//! Wraps the blocking [`Database`] operations in `spawn_blocking` so the
//! store's async surface never blocks the runtime. Each operation opens its
//! own connection against the shared database file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::task;

use crate::{
    error::{Result, WizardError},
    models::Task,
    params::CreateTask,
    store::{Database, TaskPatch, TaskStore},
};

/// Durable task store backed by a SQLite database file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Creates a store for the given database path. The schema is
    /// initialized lazily on first use.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    /// The path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

fn join_error(e: task::JoinError) -> WizardError {
    WizardError::Configuration {
        message: format!("Task join error: {e}"),
    }
}

#[async_trait]
impl TaskStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Task>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_tasks()
        })
        .await
        .map_err(join_error)?
    }

    async fn get(&self, id: u64) -> Result<Option<Task>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_task(id)
        })
        .await
        .map_err(join_error)?
    }

    async fn create(&self, params: &CreateTask) -> Result<Task> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_task(&params)
        })
        .await
        .map_err(join_error)?
    }

    async fn update(&self, id: u64, patch: &TaskPatch) -> Result<Task> {
        let db_path = self.db_path.clone();
        let patch = patch.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_task(id, &patch)
        })
        .await
        .map_err(join_error)?
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_task(id)
        })
        .await
        .map_err(join_error)?
    }
}

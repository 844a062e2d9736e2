//! Task store adapter: persistence boundary for tasks.
//!
//! The wizard controller talks to persistence exclusively through the
//! [`TaskStore`] trait. Any remote document database, local file, or
//! in-memory map can back it, provided ordering-by-recency and
//! partial-merge-update semantics hold. Two implementations ship with the
//! crate: [`SqliteStore`] (durable, file-backed) and [`MemoryStore`]
//! (process-local map, used heavily in tests).
//!
//! Every `create`/`update`/`delete` is an externally visible, durable
//! mutation; the controller's in-memory task collection is a read-through
//! cache of the store, never an independent source of truth.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{StepData, Task},
    params::CreateTask,
};

pub mod db;
pub mod memory;
pub mod sqlite;

pub use db::Database;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Partial merge-write for [`TaskStore::update`].
///
/// Only supplied fields change; unset fields retain their prior value. The
/// store stamps `updated_at` on every update regardless of which fields are
/// present.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    /// New title, if changing
    pub title: Option<String>,
    /// New description, if changing
    pub description: Option<String>,
    /// New step worksheet, if changing
    pub step_data: Option<StepData>,
}

/// Pluggable persistent document store for tasks.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Lists all tasks, most recently updated first.
    ///
    /// # Errors
    ///
    /// * `WizardError::StoreUnavailable` - transport or storage failure
    async fn list(&self) -> Result<Vec<Task>>;

    /// Retrieves a single task by ID, or `None` if it does not exist.
    async fn get(&self, id: u64) -> Result<Option<Task>>;

    /// Creates a new task with an all-blank worksheet. The store assigns
    /// the identifier.
    ///
    /// # Errors
    ///
    /// * `WizardError::InvalidInput` - blank title
    /// * `WizardError::StoreUnavailable` - transport or storage failure
    async fn create(&self, params: &CreateTask) -> Result<Task>;

    /// Applies a partial merge-write and returns the updated task.
    /// `updated_at` is stamped to the time of the call.
    ///
    /// # Errors
    ///
    /// * `WizardError::TaskNotFound` - the id no longer exists
    /// * `WizardError::StoreUnavailable` - transport or storage failure
    async fn update(&self, id: u64, patch: &TaskPatch) -> Result<Task>;

    /// Deletes a task. Idempotent: deleting an already-deleted id succeeds.
    async fn delete(&self, id: u64) -> Result<()>;
}

//! In-memory task store.
//!
//! A process-local map realization of [`TaskStore`], useful for tests and
//! for running the wizard without a configured database. Semantics match
//! the SQLite store: recency ordering on list, partial merge on update,
//! idempotent delete.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use jiff::Timestamp;

use crate::{
    error::{Result, WizardError},
    models::{StepData, Task},
    params::CreateTask,
    store::{TaskPatch, TaskStore},
};

#[derive(Default)]
struct Inner {
    tasks: HashMap<u64, Task>,
    next_id: u64,
}

/// Task store backed by an in-process map.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means a panic elsewhere; the map itself is
        // still usable.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Task>> {
        let inner = self.lock();
        let mut tasks: Vec<Task> = inner.tasks.values().cloned().collect();
        // Most recently updated first; id breaks ties for a stable order
        tasks.sort_by(|a, b| (b.updated_at, b.id).cmp(&(a.updated_at, a.id)));
        Ok(tasks)
    }

    async fn get(&self, id: u64) -> Result<Option<Task>> {
        Ok(self.lock().tasks.get(&id).cloned())
    }

    async fn create(&self, params: &CreateTask) -> Result<Task> {
        params.validate()?;

        let mut inner = self.lock();
        inner.next_id += 1;
        let now = Timestamp::now();
        let task = Task {
            id: inner.next_id,
            title: params.title.clone(),
            description: params.description.clone(),
            step_data: StepData::default(),
            created_at: now,
            updated_at: now,
        };
        inner.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: u64, patch: &TaskPatch) -> Result<Task> {
        let mut inner = self.lock();
        let Some(task) = inner.tasks.get_mut(&id) else {
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

        Ok(task.clone())
    }

    async fn delete(&self, id: u64) -> Result<()> {
        // Idempotent: removing an absent id is fine
        self.lock().tasks.remove(&id);
        Ok(())
    }
}

//! Task lifecycle operations for the Wizard.

use log::warn;

use super::{StepCursor, Wizard};
use crate::{
    error::Result,
    models::{StepData, Task},
    params::{CreateTask, UpdateTask},
    store::TaskPatch,
};

impl Wizard {
    /// Reloads the task collection from the store.
    ///
    /// An unavailable store degrades to an empty collection with a logged
    /// warning; the next user action retries naturally. The current
    /// selection is kept when its task still exists, otherwise the most
    /// recently updated task is selected.
    pub async fn refresh(&mut self) -> Result<()> {
        match self.store.list().await {
            Ok(tasks) => self.tasks = tasks,
            Err(e) if e.is_unavailable() => {
                warn!("Task store unavailable, continuing with an empty list: {e}");
                self.tasks.clear();
            }
            Err(e) => return Err(e),
        }

        match self.current_task_id {
            Some(id) if self.tasks.iter().any(|t| t.id == id) => self.select_task(id),
            _ => self.select_fallback(),
        }

        Ok(())
    }

    /// Selects a task and seeds the edit buffer from its worksheet (a deep
    /// copy, never aliasing the cached task). Resets the cursor to step 1.
    /// Silently a no-op when the id is not in the collection.
    pub fn select_task(&mut self, id: u64) {
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
            return;
        };
        self.buffer = task.step_data.clone();
        self.current_task_id = Some(id);
        self.cursor = StepCursor::new();
    }

    /// Creates a task through the store and selects it.
    ///
    /// No local task exists until the store confirms creation, so a failed
    /// create leaves the session unchanged.
    pub async fn create_task(&mut self, params: &CreateTask) -> Result<Task> {
        let task = self.store.create(params).await?;
        let id = task.id;
        self.tasks.insert(0, task.clone());
        self.select_task(id);
        Ok(task)
    }

    /// Updates a task's title/description metadata.
    ///
    /// Returns the updated task, or `None` when the task had vanished from
    /// the store (recovered by fallback selection, not an error).
    pub async fn update_task(&mut self, params: &UpdateTask) -> Result<Option<Task>> {
        let patch = TaskPatch {
            title: params.title.clone(),
            description: params.description.clone(),
            step_data: None,
        };

        match self.store.update(params.id, &patch).await {
            Ok(task) => {
                self.cache_updated(task.clone());
                Ok(Some(task))
            }
            Err(e) if e.is_not_found() => {
                warn!("Task {} vanished from the store during update", params.id);
                self.forget_task(params.id);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Deletes a task and, when it was selected, reselects the most
    /// recently updated remaining task (or clears the selection).
    pub async fn delete_task(&mut self, id: u64) -> Result<()> {
        self.store.delete(id).await?;
        self.forget_task(id);
        Ok(())
    }

    /// Drops a task from the local cache and repairs the selection.
    pub(crate) fn forget_task(&mut self, id: u64) {
        self.tasks.retain(|t| t.id != id);
        if self.current_task_id == Some(id) {
            self.select_fallback();
        }
    }

    /// Replaces the cached copy of an updated task, keeping the collection
    /// ordered most-recently-updated first.
    pub(crate) fn cache_updated(&mut self, task: Task) {
        self.tasks.retain(|t| t.id != task.id);
        self.tasks.insert(0, task);
    }

    /// Selects the most recently updated task, or clears the selection when
    /// the collection is empty.
    pub(crate) fn select_fallback(&mut self) {
        let next = self
            .tasks
            .iter()
            .max_by_key(|t| (t.updated_at, t.id))
            .map(|t| t.id);

        match next {
            Some(id) => self.select_task(id),
            None => {
                self.current_task_id = None;
                self.buffer = StepData::default();
                self.cursor = StepCursor::new();
            }
        }
    }
}

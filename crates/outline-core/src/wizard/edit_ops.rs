//! Buffer editing, commit, and step navigation for the Wizard.

use std::collections::BTreeSet;

use log::warn;

use super::Wizard;
use crate::{
    error::Result,
    models::{completion, Field},
    store::TaskPatch,
};

impl Wizard {
    /// Writes a value into the edit buffer. Local only: nothing is
    /// persisted until [`Wizard::commit`].
    pub fn edit_field(&mut self, field: Field, value: &str) -> Result<()> {
        self.buffer.set(field, value)
    }

    /// Appends a new idea slot to the buffer's step 1.
    pub fn add_idea(&mut self, value: &str) {
        self.buffer.push_idea(value);
    }

    /// Removes an idea slot from the buffer. The last remaining slot cannot
    /// be removed.
    pub fn remove_idea(&mut self, index: usize) -> Result<()> {
        self.buffer.remove_idea(index)?;
        Ok(())
    }

    /// Persists the edit buffer for the current task.
    ///
    /// Idempotent: committing the same buffer twice produces the same
    /// persisted worksheet and the same completed-step set. Returns false
    /// when nothing was persisted (no selection, or the task vanished and
    /// fallback selection took over). A failed store call leaves the buffer
    /// untouched.
    pub async fn commit(&mut self) -> Result<bool> {
        let Some(id) = self.current_task_id else {
            return Ok(false);
        };

        let patch = TaskPatch {
            title: None,
            description: None,
            step_data: Some(self.buffer.clone()),
        };

        match self.store.update(id, &patch).await {
            Ok(task) => {
                self.cache_updated(task);
                Ok(true)
            }
            Err(e) if e.is_not_found() => {
                warn!("Task {id} vanished from the store during commit");
                self.forget_task(id);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Commits the buffer, then moves to the next step. At step 4 the
    /// cursor stays put (terminal state, shown with the completion summary
    /// once all steps are done).
    pub async fn advance_step(&mut self) -> Result<u8> {
        self.commit().await?;
        self.cursor.advance();
        Ok(self.cursor.current())
    }

    /// Moves back one step without committing (pure navigation). At step 1
    /// the cursor stays put.
    pub fn retreat_step(&mut self) -> u8 {
        self.cursor.retreat();
        self.cursor.current()
    }

    /// Jumps directly to a step (1-4), regardless of completion. Steps are
    /// browsable out of order.
    pub fn goto_step(&mut self, step: u8) -> Result<()> {
        self.cursor.set(step)
    }

    /// Completed step numbers, derived from the current edit buffer.
    pub fn completed_steps(&self) -> BTreeSet<u8> {
        completion::completed_steps(&self.buffer)
    }

    /// Number of completed steps (0-4) in the current edit buffer.
    pub fn progress(&self) -> u8 {
        completion::progress(&self.buffer)
    }

    /// True once all four steps of the current buffer are complete. This is
    /// the "finished" signal used for the export/summary view.
    pub fn is_finished(&self) -> bool {
        completion::is_finished(&self.buffer)
    }
}

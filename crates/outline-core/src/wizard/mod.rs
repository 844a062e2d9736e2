//! Wizard controller: the editing session over the task collection.
//!
//! The [`Wizard`] owns the current task selection, the step cursor, and the
//! local edit buffer, and drives synchronization between the buffer and the
//! pluggable [`TaskStore`](crate::store::TaskStore). At most one wizard is
//! active per user session; the store is treated as last-write-wins on
//! update, with no optimistic locking.
//!
//! ## Synchronization contract
//!
//! - Field edits mutate only the local buffer and never block.
//! - [`Wizard::commit`] persists the buffer through the store and is
//!   idempotent: committing the same buffer twice yields the same persisted
//!   state.
//! - Store failures are absorbed at this boundary: a vanished task triggers
//!   silent fallback selection, an unreachable store degrades to a warning.
//!   Neither corrupts the buffer.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use outline_core::{params::CreateTask, store::MemoryStore, Field, WizardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new()
//!     .with_store(Arc::new(MemoryStore::new()))
//!     .build()
//!     .await?;
//!
//! let task = wizard
//!     .create_task(&CreateTask {
//!         title: "Note-taking app".to_string(),
//!         description: String::new(),
//!     })
//!     .await?;
//!
//! wizard.edit_field(Field::Idea(0), "quick capture from anywhere")?;
//! wizard.advance_step().await?;
//! assert_eq!(wizard.current_step(), 2);
//! assert!(wizard.completed_steps().contains(&1));
//! # let _ = task;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::{
    error::{Result, WizardError},
    models::{completion::STEP_COUNT, StepData, Task},
    store::TaskStore,
};

pub mod builder;
pub mod edit_ops;
pub mod task_ops;


pub use builder::WizardBuilder;

/// Current position in the four-step flow (1-4).
///
/// Transitions are ±1 via advance/retreat, clamped at both ends; direct
/// jumps go through [`StepCursor::set`] (step-tab navigation, always
/// allowed regardless of completion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor(u8);

impl StepCursor {
    /// Cursor positioned at step 1.
    pub fn new() -> Self {
        Self(1)
    }

    /// The current step number (1-4).
    pub fn current(&self) -> u8 {
        self.0
    }

    /// Moves forward one step. Returns false when already at the last step.
    pub fn advance(&mut self) -> bool {
        if self.0 < STEP_COUNT {
            self.0 += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one step. Returns false when already at step 1.
    pub fn retreat(&mut self) -> bool {
        if self.0 > 1 {
            self.0 -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps directly to a step (1-4).
    pub fn set(&mut self, step: u8) -> Result<()> {
        if (1..=STEP_COUNT).contains(&step) {
            self.0 = step;
            Ok(())
        } else {
            Err(WizardError::invalid_input(
                "step",
                format!("Step must be between 1 and {STEP_COUNT}, got {step}"),
            ))
        }
    }
}

impl Default for StepCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// The wizard controller.
pub struct Wizard {
    pub(crate) store: Arc<dyn TaskStore>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) current_task_id: Option<u64>,
    pub(crate) cursor: StepCursor,
    pub(crate) buffer: StepData,
}

impl Wizard {
    /// Creates a wizard over the given store with nothing selected.
    pub(crate) fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            tasks: Vec::new(),
            current_task_id: None,
            cursor: StepCursor::new(),
            buffer: StepData::default(),
        }
    }

    /// The cached task collection, most recently updated first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// ID of the currently selected task, if any.
    pub fn current_task_id(&self) -> Option<u64> {
        self.current_task_id
    }

    /// The currently selected task, if any.
    pub fn current_task(&self) -> Option<&Task> {
        let id = self.current_task_id?;
        self.tasks.iter().find(|task| task.id == id)
    }

    /// The current step number (1-4).
    pub fn current_step(&self) -> u8 {
        self.cursor.current()
    }

    /// The local edit buffer.
    pub fn buffer(&self) -> &StepData {
        &self.buffer
    }
}

//! Parameter structures for Outline operations
//!
//! Shared parameter structures used across interfaces (CLI and any future
//! surface) without framework-specific derives. Interface layers wrap these
//! with their own derives (clap args, etc.) and convert via `.into()` or
//! accessor methods, keeping the core interface-agnostic.

use serde::{Deserialize, Serialize};

/// Parameters for creating a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// Title of the task (required, must not be blank)
    pub title: String,
    /// Short description of the task (may be empty)
    #[serde(default)]
    pub description: String,
}

impl CreateTask {
    /// Validate the creation parameters.
    ///
    /// # Errors
    ///
    /// * `WizardError::InvalidInput` - when the title is blank after trimming
    pub fn validate(&self) -> crate::Result<()> {
        if self.title.trim().is_empty() {
            return Err(crate::WizardError::invalid_input(
                "title",
                "Title must not be blank",
            ));
        }
        Ok(())
    }
}

/// Parameters for updating a task's metadata.
///
/// Only supplied fields change; `None` fields retain their prior value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// Task ID to update (required)
    pub id: u64,
    /// New title for the task
    pub title: Option<String>,
    /// New description for the task
    pub description: Option<String>,
}

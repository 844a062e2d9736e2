//! Task model definition and related functionality.

use std::collections::BTreeSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{completion, StepData};

/// A requirements-definition task: metadata plus the owned step worksheet.
///
/// Completion and progress are intentionally not stored fields; they are
/// derived from `step_data` on every read so they can never drift from the
/// worksheet content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier, assigned by the store on creation
    pub id: u64,

    /// Short user-supplied title
    pub title: String,

    /// Short user-supplied description (may be empty)
    pub description: String,

    /// Answers for the four wizard steps
    pub step_data: StepData,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Task {
    /// Completed step numbers, recomputed from the current worksheet.
    pub fn completed_steps(&self) -> BTreeSet<u8> {
        completion::completed_steps(&self.step_data)
    }

    /// Number of completed steps (0-4).
    pub fn progress(&self) -> u8 {
        completion::progress(&self.step_data)
    }

    /// Progress as a display percentage (0-100).
    pub fn percent(&self) -> u8 {
        completion::percent(&self.step_data)
    }

    /// True once all four steps are complete.
    pub fn is_finished(&self) -> bool {
        completion::is_finished(&self.step_data)
    }
}

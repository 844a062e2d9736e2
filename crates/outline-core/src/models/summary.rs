//! Task summary types for list display.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{completion, Task};

/// Summary information about a task with derived progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Task ID
    pub id: u64,
    /// Title of the task
    pub title: String,
    /// Short description of the task
    pub description: String,
    /// Number of completed steps (derived)
    pub progress: u8,
    /// Total number of wizard steps
    pub total_steps: u8,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
}

impl From<&Task> for TaskSummary {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            progress: task.progress(),
            total_steps: completion::STEP_COUNT,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

//! Data models for tasks and their step worksheets.
//!
//! This module contains the core domain models of the requirements wizard:
//! the [`StepData`] record holding the answers for the four fixed steps, the
//! [`Task`] aggregate owning one worksheet, and the derived-completion
//! functions in [`completion`]. Display implementations live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation.
//!
//! Completion is derived, never stored: [`completion::completed_steps`] is
//! the only code path that decides whether a step is done, and every caller
//! recomputes it from the current worksheet.

pub mod completion;
pub mod step_data;
pub mod steps_meta;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use step_data::{Field, PeerReview, ScenarioSketch, StepData, UserAnalysis};
pub use steps_meta::{step_info, StepInfo, STEPS};
pub use summary::TaskSummary;
pub use task::Task;

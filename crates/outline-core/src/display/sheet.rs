//! Export rendering for a completed requirements worksheet.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::Task;

/// Renders a task's worksheet as a standalone requirements document,
/// suitable for exporting once all four steps are complete.
///
/// Unlike the plain [`Task`] display, blank idea slots are omitted and a
/// completion banner is shown only for finished tasks.
pub struct RequirementsSheet<'a>(pub &'a Task);

impl<'a> fmt::Display for RequirementsSheet<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = self.0;

        writeln!(f, "# Requirements: {}", task.title)?;
        writeln!(f)?;

        if !task.description.is_empty() {
            writeln!(f, "{}", task.description)?;
            writeln!(f)?;
        }

        writeln!(f, "- Last updated: {}", LocalDateTime(&task.updated_at))?;

        writeln!(f)?;
        writeln!(f, "## Ideas")?;
        writeln!(f)?;
        for idea in &task.step_data.step1 {
            if !idea.trim().is_empty() {
                writeln!(f, "- {idea}")?;
            }
        }

        let analysis = &task.step_data.step2;
        writeln!(f)?;
        writeln!(f, "## Users and benefits")?;
        writeln!(f)?;
        writeln!(f, "### Target users")?;
        writeln!(f)?;
        writeln!(f, "{}", analysis.target_users)?;
        writeln!(f)?;
        writeln!(f, "### Usage scenarios")?;
        writeln!(f)?;
        writeln!(f, "{}", analysis.usage_scenarios)?;
        writeln!(f)?;
        writeln!(f, "### Benefits")?;
        writeln!(f)?;
        writeln!(f, "{}", analysis.benefits)?;

        let sketch = &task.step_data.step3;
        writeln!(f)?;
        writeln!(f, "## Usage scenario")?;
        writeln!(f)?;
        writeln!(f, "{}", sketch.usage_scenes)?;
        writeln!(f)?;
        writeln!(f, "### How to explain it")?;
        writeln!(f)?;
        writeln!(f, "{}", sketch.explanation)?;

        let review = &task.step_data.step4;
        writeln!(f)?;
        writeln!(f, "## Review")?;
        writeln!(f)?;
        writeln!(f, "### Feedback")?;
        writeln!(f)?;
        writeln!(f, "{}", review.feedback)?;
        writeln!(f)?;
        writeln!(f, "### Improvements")?;
        writeln!(f)?;
        writeln!(f, "{}", review.improvements)?;
        writeln!(f)?;
        writeln!(f, "### Final check")?;
        writeln!(f)?;
        writeln!(f, "{}", review.final_check)?;

        if task.is_finished() {
            writeln!(f)?;
            writeln!(f, "All four steps are complete.")?;
        }

        Ok(())
    }
}

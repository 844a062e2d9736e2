//! Display implementations for domain models.
//!
//! Markdown-formatted output with completion icons, separated from the
//! model definitions to keep data structures free of presentation logic.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{completion, step_info, StepData, Task, TaskSummary};

/// Consistent completion icon for a step.
pub(crate) fn step_icon(done: bool) -> &'static str {
    if done {
        "✓ Done"
    } else {
        "○ Todo"
    }
}

fn prose(value: &str) -> &str {
    if value.trim().is_empty() {
        "_(blank)_"
    } else {
        value
    }
}

/// Writes the four worksheet steps as markdown sections with completion
/// icons and labeled fields.
pub(crate) fn fmt_worksheet(data: &StepData, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let completed = completion::completed_steps(data);

    for info in &crate::models::STEPS {
        writeln!(f)?;
        writeln!(
            f,
            "## Step {}: {} ({})",
            info.number,
            info.title,
            step_icon(completed.contains(&info.number))
        )?;
        writeln!(f)?;

        match info.number {
            1 => {
                for idea in &data.step1 {
                    writeln!(f, "- {}", prose(idea))?;
                }
            }
            2 => {
                writeln!(f, "- **Target users**: {}", prose(&data.step2.target_users))?;
                writeln!(
                    f,
                    "- **Usage scenarios**: {}",
                    prose(&data.step2.usage_scenarios)
                )?;
                writeln!(f, "- **Benefits**: {}", prose(&data.step2.benefits))?;
            }
            3 => {
                writeln!(f, "- **Usage scenes**: {}", prose(&data.step3.usage_scenes))?;
                writeln!(f, "- **Explanation**: {}", prose(&data.step3.explanation))?;
            }
            _ => {
                writeln!(f, "- **Feedback**: {}", prose(&data.step4.feedback))?;
                writeln!(f, "- **Improvements**: {}", prose(&data.step4.improvements))?;
                writeln!(f, "- **Final check**: {}", prose(&data.step4.final_check))?;
            }
        }
    }

    Ok(())
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(
            f,
            "- Progress: {}/{} ({}%)",
            self.progress(),
            completion::STEP_COUNT,
            self.percent()
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        fmt_worksheet(&self.step_data, f)?;

        if self.is_finished() {
            writeln!(f)?;
            writeln!(f, "All steps complete. The requirements are defined!")?;
        }

        Ok(())
    }
}

impl fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/{})",
            self.title, self.id, self.progress, self.total_steps
        )?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "- **Description**: {}", self.description)?;
        }

        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)?;

        Ok(())
    }
}

/// Formats the header line for one step, e.g. `Step 2: User perspective`.
pub fn step_header(number: u8) -> Option<String> {
    step_info(number).map(|info| format!("Step {}: {}", info.number, info.title))
}

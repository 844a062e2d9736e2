//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::TaskSummary;

/// Newtype wrapper for displaying collections of task summaries.
///
/// Provides clean Display formatting for task lists without title handling,
/// allowing consumers to handle titles separately. Handles empty
/// collections gracefully.
pub struct TaskSummaries(pub Vec<TaskSummary>);

impl TaskSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of task summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the task summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, TaskSummary> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a TaskSummaries {
    type Item = &'a TaskSummary;
    type IntoIter = std::slice::Iter<'a, TaskSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TaskSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}

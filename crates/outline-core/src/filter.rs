//! Search filtering over the task collection.
//!
//! The list view model: a pure function over the shared task collection,
//! independent of persistence. Upstream ordering (most-recently-updated
//! first) is preserved.

use crate::models::Task;

/// Filters tasks by a case-insensitive substring match against title or
/// description. An empty query returns all tasks unchanged.
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    if query.is_empty() {
        return tasks.iter().collect();
    }

    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            task.title.to_lowercase().contains(&needle)
                || task.description.to_lowercase().contains(&needle)
        })
        .collect()
}

//! Derived step completion.
//!
//! Completion is never stored: it is always recomputed from the current
//! [`StepData`] by [`completed_steps`], which is the single source of truth.
//! Clearing a required field therefore un-completes its step.

use std::collections::BTreeSet;

use super::StepData;

/// Number of fixed wizard steps.
pub const STEP_COUNT: u8 = 4;

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Returns the set of completed step numbers (subset of {1, 2, 3, 4}).
///
/// Step 1 is complete when at least one idea slot is non-blank after
/// trimming; steps 2-4 require every field of the step to be non-blank.
pub fn completed_steps(data: &StepData) -> BTreeSet<u8> {
    let mut completed = BTreeSet::new();

    if data.step1.iter().any(|idea| filled(idea)) {
        completed.insert(1);
    }

    if filled(&data.step2.target_users)
        && filled(&data.step2.usage_scenarios)
        && filled(&data.step2.benefits)
    {
        completed.insert(2);
    }

    if filled(&data.step3.usage_scenes) && filled(&data.step3.explanation) {
        completed.insert(3);
    }

    if filled(&data.step4.feedback)
        && filled(&data.step4.improvements)
        && filled(&data.step4.final_check)
    {
        completed.insert(4);
    }

    completed
}

/// Number of completed steps (0-4).
pub fn progress(data: &StepData) -> u8 {
    completed_steps(data).len() as u8
}

/// Progress as a display percentage (0-100).
pub fn percent(data: &StepData) -> u8 {
    // Widen first: 4 * 100 does not fit in u8
    (u32::from(progress(data)) * 100 / u32::from(STEP_COUNT)) as u8
}

/// True once all four steps are complete.
pub fn is_finished(data: &StepData) -> bool {
    progress(data) == STEP_COUNT
}

//! Fixed metadata for the four wizard steps.

/// Title and guidance text for one wizard step.
#[derive(Debug, Clone, Copy)]
pub struct StepInfo {
    /// Step number (1-4)
    pub number: u8,
    /// Short step title
    pub title: &'static str,
    /// One-line guidance shown with the step
    pub description: &'static str,
}

/// The four fixed steps, in order.
pub const STEPS: [StepInfo; 4] = [
    StepInfo {
        number: 1,
        title: "Idea brainstorm",
        description: "Jot down the ideas from planning as a rough bullet list",
    },
    StepInfo {
        number: 2,
        title: "User perspective",
        description: "Dig deeper by imagining who would use it, and how",
    },
    StepInfo {
        number: 3,
        title: "Usage scenario",
        description: "Sketch an actual usage scene, or explain it to someone",
    },
    StepInfo {
        number: 4,
        title: "Peer review",
        description: "Check from someone else's viewpoint whether it comes across",
    },
];

/// Looks up the metadata for a step number (1-4).
pub fn step_info(number: u8) -> Option<&'static StepInfo> {
    STEPS.get(number.checked_sub(1)? as usize)
}

//! Step data model: the answers for the four-step requirements worksheet.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WizardError};

/// Answers for step 2: who the product is for and why they would use it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAnalysis {
    /// Who the target users are
    pub target_users: String,
    /// In which situations the product gets used
    pub usage_scenarios: String,
    /// What the users gain from it
    pub benefits: String,
}

/// Answers for step 3: a concrete usage scene, written out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioSketch {
    /// A concrete scene describing the product in use
    pub usage_scenes: String,
    /// How you would explain the product to someone else
    pub explanation: String,
}

/// Answers for step 4: the peer-review checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeerReview {
    /// Feedback collected from other people
    pub feedback: String,
    /// Improvements identified from that feedback
    pub improvements: String,
    /// Final check that the requirements come across clearly
    pub final_check: String,
}

/// The nested record holding all answers for the four fixed wizard steps.
///
/// Every field is always serialized, even when blank, so a store can
/// distinguish "not yet filled" from "absent". Step 1 keeps at least one
/// (possibly blank) idea slot at all times; [`StepData::remove_idea`]
/// refuses to delete the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepData {
    /// Free-form idea list; order is display order, blank entries are
    /// unfilled slots
    #[serde(default = "one_blank_slot")]
    pub step1: Vec<String>,
    /// User/benefit analysis
    #[serde(default)]
    pub step2: UserAnalysis,
    /// Usage scenario sketch
    #[serde(default)]
    pub step3: ScenarioSketch,
    /// Peer-review checklist
    #[serde(default)]
    pub step4: PeerReview,
}

fn one_blank_slot() -> Vec<String> {
    vec![String::new()]
}

impl Default for StepData {
    fn default() -> Self {
        Self {
            step1: one_blank_slot(),
            step2: UserAnalysis::default(),
            step3: ScenarioSketch::default(),
            step4: PeerReview::default(),
        }
    }
}

impl StepData {
    /// Restores the minimum-one-slot invariant, e.g. after deserializing a
    /// record written by another client.
    pub fn normalize(&mut self) {
        if self.step1.is_empty() {
            self.step1.push(String::new());
        }
    }

    /// Writes a value into the addressed field. This is the single entry
    /// point all form edits funnel through.
    pub fn set(&mut self, field: Field, value: &str) -> Result<()> {
        match field {
            Field::Idea(index) => return self.set_idea(index, value),
            Field::TargetUsers => self.step2.target_users = value.to_string(),
            Field::UsageScenarios => self.step2.usage_scenarios = value.to_string(),
            Field::Benefits => self.step2.benefits = value.to_string(),
            Field::UsageScenes => self.step3.usage_scenes = value.to_string(),
            Field::Explanation => self.step3.explanation = value.to_string(),
            Field::Feedback => self.step4.feedback = value.to_string(),
            Field::Improvements => self.step4.improvements = value.to_string(),
            Field::FinalCheck => self.step4.final_check = value.to_string(),
        }
        Ok(())
    }

    /// Reads the current value of the addressed field. Returns `None` for an
    /// idea index that is out of range.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Idea(index) => self.step1.get(index).map(String::as_str),
            Field::TargetUsers => Some(&self.step2.target_users),
            Field::UsageScenarios => Some(&self.step2.usage_scenarios),
            Field::Benefits => Some(&self.step2.benefits),
            Field::UsageScenes => Some(&self.step3.usage_scenes),
            Field::Explanation => Some(&self.step3.explanation),
            Field::Feedback => Some(&self.step4.feedback),
            Field::Improvements => Some(&self.step4.improvements),
            Field::FinalCheck => Some(&self.step4.final_check),
        }
    }

    /// Appends a new idea slot to step 1.
    pub fn push_idea(&mut self, value: &str) {
        self.step1.push(value.to_string());
    }

    /// Overwrites the idea slot at `index`.
    pub fn set_idea(&mut self, index: usize, value: &str) -> Result<()> {
        match self.step1.get_mut(index) {
            Some(slot) => {
                *slot = value.to_string();
                Ok(())
            }
            None => Err(WizardError::invalid_input(
                "idea",
                format!("No idea slot at index {index}"),
            )),
        }
    }

    /// Removes the idea slot at `index`. The last remaining slot cannot be
    /// removed.
    pub fn remove_idea(&mut self, index: usize) -> Result<String> {
        if index >= self.step1.len() {
            return Err(WizardError::invalid_input(
                "idea",
                format!("No idea slot at index {index}"),
            ));
        }
        if self.step1.len() == 1 {
            return Err(WizardError::invalid_input(
                "idea",
                "At least one idea slot must remain",
            ));
        }
        Ok(self.step1.remove(index))
    }
}

/// Typed address of a single editable field in the worksheet.
///
/// `Idea` carries the slot index within step 1; all other variants map to
/// exactly one prose field of steps 2-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Idea slot in step 1, by index
    Idea(usize),
    /// Step 2: target users
    TargetUsers,
    /// Step 2: usage scenarios
    UsageScenarios,
    /// Step 2: user benefits
    Benefits,
    /// Step 3: concrete usage scenes
    UsageScenes,
    /// Step 3: explanation for others
    Explanation,
    /// Step 4: collected feedback
    Feedback,
    /// Step 4: identified improvements
    Improvements,
    /// Step 4: final clarity check
    FinalCheck,
}

impl Field {
    /// The wizard step (1-4) this field belongs to.
    pub fn step(&self) -> u8 {
        match self {
            Field::Idea(_) => 1,
            Field::TargetUsers | Field::UsageScenarios | Field::Benefits => 2,
            Field::UsageScenes | Field::Explanation => 3,
            Field::Feedback | Field::Improvements | Field::FinalCheck => 4,
        }
    }

    /// Stable kebab-case name, matching the CLI spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Idea(_) => "idea",
            Field::TargetUsers => "target-users",
            Field::UsageScenarios => "usage-scenarios",
            Field::Benefits => "benefits",
            Field::UsageScenes => "usage-scenes",
            Field::Explanation => "explanation",
            Field::Feedback => "feedback",
            Field::Improvements => "improvements",
            Field::FinalCheck => "final-check",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    /// Parses the kebab-case (or snake_case) field name. Idea slots are not
    /// addressable by name alone since they carry an index.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "target-users" => Ok(Field::TargetUsers),
            "usage-scenarios" => Ok(Field::UsageScenarios),
            "benefits" => Ok(Field::Benefits),
            "usage-scenes" => Ok(Field::UsageScenes),
            "explanation" => Ok(Field::Explanation),
            "feedback" => Ok(Field::Feedback),
            "improvements" => Ok(Field::Improvements),
            "final-check" => Ok(Field::FinalCheck),
            _ => Err(format!("Invalid field name: {s}")),
        }
    }
}

use std::collections::BTreeSet;
use std::str::FromStr;

use jiff::Timestamp;

use super::completion::{completed_steps, is_finished, percent, progress};
use super::*;

fn steps(numbers: &[u8]) -> BTreeSet<u8> {
    numbers.iter().copied().collect()
}

/// A worksheet with every field of every step filled in.
fn filled_data() -> StepData {
    let mut data = StepData::default();
    data.set_idea(0, "idea A").unwrap();
    data.set(Field::TargetUsers, "users").unwrap();
    data.set(Field::UsageScenarios, "scenario").unwrap();
    data.set(Field::Benefits, "benefit").unwrap();
    data.set(Field::UsageScenes, "scene").unwrap();
    data.set(Field::Explanation, "explain").unwrap();
    data.set(Field::Feedback, "fb").unwrap();
    data.set(Field::Improvements, "improve").unwrap();
    data.set(Field::FinalCheck, "check").unwrap();
    data
}

#[test]
fn test_default_step_data_shape() {
    let data = StepData::default();
    assert_eq!(data.step1, vec![String::new()]);
    assert!(data.step2.target_users.is_empty());
    assert!(data.step3.explanation.is_empty());
    assert!(data.step4.final_check.is_empty());
}

#[test]
fn test_blank_data_has_no_completed_steps() {
    let data = StepData::default();
    assert_eq!(completed_steps(&data), steps(&[]));
    assert_eq!(progress(&data), 0);
    assert_eq!(percent(&data), 0);
    assert!(!is_finished(&data));
}

#[test]
fn test_single_idea_completes_only_step_one() {
    let mut data = StepData::default();
    data.set_idea(0, "an idea").unwrap();
    assert_eq!(completed_steps(&data), steps(&[1]));
}

#[test]
fn test_whitespace_only_idea_does_not_complete_step_one() {
    let mut data = StepData::default();
    data.set_idea(0, "   \t ").unwrap();
    assert_eq!(completed_steps(&data), steps(&[]));
}

#[test]
fn test_one_filled_slot_among_blanks_completes_step_one() {
    let mut data = StepData::default();
    data.push_idea("");
    data.push_idea("the one real idea");
    assert_eq!(completed_steps(&data), steps(&[1]));
}

#[test]
fn test_partial_step_two_is_incomplete() {
    let mut data = StepData::default();
    data.set(Field::TargetUsers, "users").unwrap();
    data.set(Field::UsageScenarios, "scenario").unwrap();
    // benefits still blank
    assert_eq!(completed_steps(&data), steps(&[]));

    data.set(Field::Benefits, "benefit").unwrap();
    assert_eq!(completed_steps(&data), steps(&[2]));
}

#[test]
fn test_fully_filled_data_completes_all_steps() {
    let data = filled_data();
    assert_eq!(completed_steps(&data), steps(&[1, 2, 3, 4]));
    assert_eq!(progress(&data), 4);
    assert_eq!(percent(&data), 100);
    assert!(is_finished(&data));
}

#[test]
fn test_percent_at_each_progress_level() {
    let mut data = StepData::default();
    assert_eq!(percent(&data), 0);

    data.set_idea(0, "idea").unwrap();
    assert_eq!(percent(&data), 25);

    data.set(Field::TargetUsers, "users").unwrap();
    data.set(Field::UsageScenarios, "scenario").unwrap();
    data.set(Field::Benefits, "benefit").unwrap();
    assert_eq!(percent(&data), 50);

    assert_eq!(percent(&filled_data()), 100);
}

#[test]
fn test_clearing_a_field_retracts_completion() {
    let mut data = filled_data();
    assert!(completed_steps(&data).contains(&3));

    data.set(Field::Explanation, "").unwrap();
    assert_eq!(completed_steps(&data), steps(&[1, 2, 4]));
}

#[test]
fn test_remove_last_idea_slot_is_refused() {
    let mut data = StepData::default();
    let err = data.remove_idea(0).unwrap_err();
    assert!(matches!(
        err,
        crate::WizardError::InvalidInput { ref field, .. } if field == "idea"
    ));
    assert_eq!(data.step1.len(), 1);
}

#[test]
fn test_remove_idea_slot() {
    let mut data = StepData::default();
    data.set_idea(0, "first").unwrap();
    data.push_idea("second");

    let removed = data.remove_idea(0).unwrap();
    assert_eq!(removed, "first");
    assert_eq!(data.step1, vec!["second".to_string()]);
}

#[test]
fn test_set_idea_out_of_range() {
    let mut data = StepData::default();
    assert!(data.set_idea(5, "nope").is_err());
}

#[test]
fn test_normalize_restores_minimum_slot() {
    let mut data = StepData::default();
    data.step1.clear();
    data.normalize();
    assert_eq!(data.step1, vec![String::new()]);
}

#[test]
fn test_step_data_serializes_all_fields_when_blank() {
    let json = serde_json::to_value(StepData::default()).unwrap();
    assert_eq!(json["step1"], serde_json::json!([""]));
    assert_eq!(json["step2"]["targetUsers"], "");
    assert_eq!(json["step2"]["usageScenarios"], "");
    assert_eq!(json["step2"]["benefits"], "");
    assert_eq!(json["step3"]["usageScenes"], "");
    assert_eq!(json["step3"]["explanation"], "");
    assert_eq!(json["step4"]["feedback"], "");
    assert_eq!(json["step4"]["improvements"], "");
    assert_eq!(json["step4"]["finalCheck"], "");
}

#[test]
fn test_step_data_round_trip() {
    let data = filled_data();
    let json = serde_json::to_string(&data).unwrap();
    let back: StepData = serde_json::from_str(&json).unwrap();
    assert_eq!(back, data);
}

#[test]
fn test_step_data_deserializes_missing_sections_to_defaults() {
    let back: StepData = serde_json::from_str("{}").unwrap();
    assert_eq!(back, StepData::default());
}

#[test]
fn test_field_parsing() {
    assert_eq!(Field::from_str("target-users").unwrap(), Field::TargetUsers);
    assert_eq!(Field::from_str("usage_scenes").unwrap(), Field::UsageScenes);
    assert_eq!(Field::from_str("FINAL-CHECK").unwrap(), Field::FinalCheck);
    assert!(Field::from_str("idea").is_err());
    assert!(Field::from_str("bogus").is_err());
}

#[test]
fn test_field_step_mapping() {
    assert_eq!(Field::Idea(3).step(), 1);
    assert_eq!(Field::Benefits.step(), 2);
    assert_eq!(Field::Explanation.step(), 3);
    assert_eq!(Field::Feedback.step(), 4);
}

#[test]
fn test_field_get_and_set_agree() {
    let mut data = StepData::default();
    for field in [
        Field::TargetUsers,
        Field::UsageScenarios,
        Field::Benefits,
        Field::UsageScenes,
        Field::Explanation,
        Field::Feedback,
        Field::Improvements,
        Field::FinalCheck,
    ] {
        data.set(field, "value").unwrap();
        assert_eq!(data.get(field), Some("value"));
    }
    assert_eq!(data.get(Field::Idea(9)), None);
}

#[test]
fn test_task_summary_from_task() {
    let task = Task {
        id: 7,
        title: "Note app".to_string(),
        description: "A note-taking app".to_string(),
        step_data: filled_data(),
        created_at: Timestamp::now(),
        updated_at: Timestamp::now(),
    };

    let summary = TaskSummary::from(&task);
    assert_eq!(summary.id, 7);
    assert_eq!(summary.progress, 4);
    assert_eq!(summary.total_steps, 4);
}

#[test]
fn test_step_info_lookup() {
    assert_eq!(step_info(1).unwrap().title, "Idea brainstorm");
    assert_eq!(step_info(4).unwrap().number, 4);
    assert!(step_info(0).is_none());
    assert!(step_info(5).is_none());
}

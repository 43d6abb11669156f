use household_form::Harness;
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::{FileFailurePersistence, TestCaseResult};

const FORM_PROPTEST_REGRESSION_FILE: &str = "tests/proptest-regressions/form_property_fuzz_test.txt";
const DEFAULT_FORM_PROPTEST_CASES: u32 = 128;

fn form_proptest_cases() -> u32 {
    std::env::var("HOUSEHOLD_FORM_PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_FORM_PROPTEST_CASES)
}

#[derive(Clone, Debug)]
enum UiAction {
    TypeAge(String),
    TypeRel(String),
    SetSmoker(bool),
    ClickAdd,
    RemoveNth(usize),
    ClickSubmit,
}

// Age texts whose validity is known up front: positive numbers pass, the
// rest fail the positivity check.
fn age_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        (1u32..=120).prop_map(|age| age.to_string()),
        Just("2.5".to_string()),
        Just(String::new()),
        Just("0".to_string()),
        Just("-4".to_string()),
        Just("abc".to_string()),
    ]
    .boxed()
}

fn age_is_valid(age: &str) -> bool {
    age.trim().parse::<f64>().map(|n| n > 0.0).unwrap_or(false)
}

fn rel_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        Just(String::new()),
        Just("parent".to_string()),
        Just("child".to_string()),
        Just("spouse".to_string()),
    ]
    .boxed()
}

fn ui_action_strategy() -> BoxedStrategy<UiAction> {
    prop_oneof![
        4 => age_strategy().prop_map(UiAction::TypeAge),
        4 => rel_strategy().prop_map(UiAction::TypeRel),
        2 => any::<bool>().prop_map(UiAction::SetSmoker),
        4 => Just(UiAction::ClickAdd),
        2 => (0usize..8).prop_map(UiAction::RemoveNth),
        1 => Just(UiAction::ClickSubmit),
    ]
    .boxed()
}

fn ui_action_sequence_strategy() -> BoxedStrategy<Vec<UiAction>> {
    vec(ui_action_strategy(), 1..=32).boxed()
}

#[derive(Clone, Debug, Default)]
struct Model {
    age: String,
    rel: String,
    smoker: bool,
    members: Vec<(String, String, bool)>,
}

fn assert_form_matches_model(actions: &[UiAction]) -> TestCaseResult {
    let mut harness = Harness::household();
    let mut model = Model::default();

    for (step, action) in actions.iter().enumerate() {
        let outcome = match action {
            UiAction::TypeAge(text) => {
                model.age = text.clone();
                harness.type_text("age", text)
            }
            UiAction::TypeRel(text) => {
                model.rel = text.clone();
                harness.type_text("rel", text)
            }
            UiAction::SetSmoker(checked) => {
                model.smoker = *checked;
                harness.set_checked("smoker", *checked)
            }
            UiAction::ClickAdd => {
                if age_is_valid(&model.age) && !model.rel.is_empty() {
                    model
                        .members
                        .push((model.age.clone(), model.rel.clone(), model.smoker));
                    model.age.clear();
                    model.rel.clear();
                    model.smoker = false;
                }
                harness.click_add().map(|_| ())
            }
            UiAction::RemoveNth(position) => {
                if *position >= model.members.len() {
                    continue;
                }
                model.members.remove(*position);
                let member = harness.surface().list_items()[*position].member;
                harness.click_remove(member)
            }
            UiAction::ClickSubmit => harness.click_submit().map(|_| ()),
        };

        prop_assert!(
            outcome.is_ok(),
            "action failed at step {step}: {action:?}, error={:?}, actions={actions:?}",
            outcome.err()
        );

        prop_assert_eq!(
            harness.member_count(),
            model.members.len(),
            "state count diverged at step {}: {:?}",
            step,
            action
        );
        prop_assert_eq!(
            harness.rendered_count(),
            harness.member_count(),
            "rendered list out of sync at step {}: {:?}",
            step,
            action
        );
    }

    let json = harness
        .click_submit()
        .map_err(|err| proptest::test_runner::TestCaseError::fail(format!("{err:?}")))?;
    let parsed: serde_json::Value = serde_json::from_str(&json)
        .map_err(|err| proptest::test_runner::TestCaseError::fail(format!("{err:?}")))?;
    let array = parsed.as_array().expect("submit output is a JSON array");
    prop_assert_eq!(array.len(), model.members.len());

    for (entry, (age, rel, smoker)) in array.iter().zip(&model.members) {
        prop_assert_eq!(entry["age"].as_str(), Some(age.as_str()));
        prop_assert_eq!(entry["rel"].as_str(), Some(rel.as_str()));
        prop_assert_eq!(entry["smoker"].as_bool(), Some(*smoker));
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: form_proptest_cases(),
        failure_persistence: Some(Box::new(
            FileFailurePersistence::Direct(FORM_PROPTEST_REGRESSION_FILE),
        )),
        .. ProptestConfig::default()
    })]

    #[test]
    fn form_actions_keep_state_and_surface_in_sync(actions in ui_action_sequence_strategy()) {
        assert_form_matches_model(&actions)?;
    }
}

use super::*;

#[derive(Default)]
struct RecordingEffects {
    alerts: Vec<String>,
    clears: usize,
}

impl GuardEffects for RecordingEffects {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }

    fn clear_selection(&mut self) {
        self.clears += 1;
    }
}

fn change(state: &mut UploadFormState, name: Option<&str>) -> (SelectionOutcome, RecordingEffects) {
    let mut fx = RecordingEffects::default();
    let outcome = state.select(name);
    outcome.apply(&mut fx);
    (outcome, fx)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn submit_enabled_by_default() {
    assert!(UploadFormState::default().submit_enabled);
}

// =============================================================
// File selection
// =============================================================

#[test]
fn accepted_extensions_enable_submit_in_any_case() {
    for name in ["data.csv", "data.CSV", "scores.json", "Scores.JsOn"] {
        let mut state = UploadFormState { submit_enabled: false };
        let (outcome, fx) = change(&mut state, Some(name));
        assert!(matches!(outcome, SelectionOutcome::Accepted { .. }), "{name}");
        assert!(state.submit_enabled, "{name}");
        assert!(fx.alerts.is_empty(), "{name}");
        assert_eq!(fx.clears, 0, "{name}");
    }
}

#[test]
fn data_upper_csv_is_accepted_as_csv() {
    let mut state = UploadFormState::default();
    let (outcome, fx) = change(&mut state, Some("data.CSV"));
    assert_eq!(outcome, SelectionOutcome::Accepted { extension: "csv".into() });
    assert!(state.submit_enabled);
    assert!(fx.alerts.is_empty());
}

#[test]
fn rejected_extension_alerts_once_clears_and_disables() {
    for name in ["notes.txt", "sheet.xlsx", "README", "report."] {
        let mut state = UploadFormState::default();
        let (outcome, fx) = change(&mut state, Some(name));
        assert!(matches!(outcome, SelectionOutcome::Rejected { .. }), "{name}");
        assert!(!state.submit_enabled, "{name}");
        assert_eq!(fx.alerts, vec![INVALID_TYPE_MESSAGE.to_owned()], "{name}");
        assert_eq!(fx.clears, 1, "{name}");
    }
}

#[test]
fn tar_gz_is_rejected_as_gz() {
    let mut state = UploadFormState::default();
    let (outcome, fx) = change(&mut state, Some("archive.tar.gz"));
    assert_eq!(outcome, SelectionOutcome::Rejected { extension: "gz".into() });
    assert!(!state.submit_enabled);
    assert_eq!(fx.alerts, vec!["Please upload only CSV or JSON files.".to_owned()]);
    assert_eq!(fx.clears, 1);
}

#[test]
fn accepted_after_rejected_re_enables_submit() {
    let mut state = UploadFormState::default();
    change(&mut state, Some("archive.zip"));
    assert!(!state.submit_enabled);
    change(&mut state, Some("budget.json"));
    assert!(state.submit_enabled);
}

#[test]
fn empty_selection_keeps_previous_submit_state() {
    let mut disabled = UploadFormState { submit_enabled: false };
    let (outcome, fx) = change(&mut disabled, None);
    assert_eq!(outcome, SelectionOutcome::Empty);
    assert!(!disabled.submit_enabled);
    assert!(fx.alerts.is_empty());
    assert_eq!(fx.clears, 0);

    let mut enabled = UploadFormState::default();
    change(&mut enabled, None);
    assert!(enabled.submit_enabled);
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_with_no_file_is_blocked_with_one_alert() {
    let state = UploadFormState::default();
    let outcome = state.submit(0);
    let mut fx = RecordingEffects::default();
    outcome.apply(&mut fx);

    assert_eq!(outcome, SubmitOutcome::Blocked);
    assert!(outcome.should_prevent_default());
    assert_eq!(fx.alerts, vec![MISSING_FILE_MESSAGE.to_owned()]);
    assert_eq!(fx.clears, 0);
}

#[test]
fn submit_with_file_proceeds_silently() {
    let mut state = UploadFormState::default();
    change(&mut state, Some("institutions.csv"));
    let outcome = state.submit(1);
    let mut fx = RecordingEffects::default();
    outcome.apply(&mut fx);

    assert_eq!(outcome, SubmitOutcome::Proceed);
    assert!(!outcome.should_prevent_default());
    assert!(fx.alerts.is_empty());
}

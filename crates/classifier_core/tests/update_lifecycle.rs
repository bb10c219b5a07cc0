use classifier_core::{
    update, AppState, ClientError, Effect, Msg, Prediction, ServerStatus, Status, SAMPLES,
};

fn init_logging() {
    client_logging::initialize_for_tests();
}

fn failed_state() -> AppState {
    let (state, _) = update(AppState::new(), Msg::InputChanged("headline".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let request_id = state.in_flight_request().expect("in flight");
    let (state, _) = update(
        state,
        Msg::ClassificationFinished {
            request_id,
            outcome: Err(ClientError::ServerReported("boom".to_string())),
        },
    );
    state
}

#[test]
fn mount_resets_form_and_checks_health() {
    init_logging();
    let (state, effects) = update(failed_state(), Msg::Mounted);

    assert_eq!(effects, vec![Effect::CheckHealth]);
    assert_eq!(state.input(), "");
    assert_eq!(state.status(), Status::Idle);
    assert!(state.result().is_none());
    assert!(state.error().is_none());
    assert_eq!(state.server_status(), ServerStatus::Checking);
    assert_eq!(state.view().server_label, "Checking...");
}

#[test]
fn completion_after_remount_is_dropped() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputChanged("headline".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let request_id = state.in_flight_request().expect("in flight");

    let (state, _) = update(state, Msg::Mounted);
    let (state, _) = update(
        state,
        Msg::ClassificationFinished {
            request_id,
            outcome: Ok(Prediction {
                label: "Sport".to_string(),
                confidence: Some(0.4),
            }),
        },
    );

    assert_eq!(state.status(), Status::Idle);
    assert!(state.result().is_none());
}

#[test]
fn loading_sample_clears_result_and_error() {
    init_logging();
    let (state, effects) = update(failed_state(), Msg::SampleLoaded(2));

    assert!(effects.is_empty());
    assert_eq!(state.input(), SAMPLES[2].text);
    assert_eq!(state.status(), Status::Idle);
    assert!(state.error().is_none());
    assert!(state.result().is_none());
    assert!(state.view().can_submit);
}

#[test]
fn loading_sample_after_success_hides_previous_result() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputChanged("headline".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let request_id = state.in_flight_request().expect("in flight");
    let (state, _) = update(
        state,
        Msg::ClassificationFinished {
            request_id,
            outcome: Ok(Prediction {
                label: "Sport".to_string(),
                confidence: Some(0.91),
            }),
        },
    );
    assert_eq!(state.status(), Status::Success);
    assert!(state.view().result.is_some());

    let (state, effects) = update(state, Msg::SampleLoaded(1));

    assert!(effects.is_empty());
    assert_eq!(state.input(), SAMPLES[1].text);
    assert_eq!(state.status(), Status::Idle);
    assert!(state.result().is_none());
    assert!(state.error().is_none());
    let view = state.view();
    assert_eq!(view.result, None);
    assert_eq!(view.error, None);
}

#[test]
fn unknown_sample_index_is_ignored() {
    init_logging();
    let before = failed_state();
    let (after, effects) = update(before.clone(), Msg::SampleLoaded(SAMPLES.len()));

    assert!(effects.is_empty());
    assert_eq!(before, after);
}

#[test]
fn sample_is_ignored_while_submitting() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputChanged("headline".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(state, Msg::SampleLoaded(0));

    assert_eq!(state.input(), "headline");
    assert_eq!(state.status(), Status::Submitting);
}

#[test]
fn health_results_drive_indicator() {
    init_logging();
    let cases = [
        (ServerStatus::Online, true, "Online"),
        (ServerStatus::Degraded, true, "Online"),
        (ServerStatus::Offline, false, "Offline"),
    ];
    for (server, online, label) in cases {
        let (state, effects) = update(AppState::new(), Msg::HealthChecked(server));
        assert!(effects.is_empty());
        let view = state.view();
        assert_eq!(view.server, server);
        assert_eq!(view.server_online, online);
        assert_eq!(view.server_label, label);
    }
}

#[test]
fn health_result_does_not_touch_form() {
    init_logging();
    let before = failed_state();
    let (after, _) = update(before.clone(), Msg::HealthChecked(ServerStatus::Offline));

    assert_eq!(after.status(), before.status());
    assert_eq!(after.error(), before.error());
}

#[test]
fn dirty_flag_tracks_changes() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::InputChanged("a".to_string()));
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::InputChanged("a".to_string()));
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::HealthChecked(ServerStatus::Checking));
    assert!(!state.consume_dirty());
}

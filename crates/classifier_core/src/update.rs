use crate::{AppState, Effect, Msg, SAMPLES};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            state.reset_for_mount();
            vec![Effect::CheckHealth]
        }
        Msg::InputChanged(text) => {
            // The text box is disabled while a request is out.
            if !state.is_submitting() {
                state.set_input(text);
            }
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.is_submitting() {
                return (state, Vec::new());
            }
            let text = state.input().trim();
            if text.is_empty() {
                state.fail_validation();
                return (state, Vec::new());
            }
            let text = text.to_owned();
            let request_id = state.begin_submission(text.clone());
            vec![Effect::Classify { request_id, text }]
        }
        Msg::SampleLoaded(index) => {
            if let Some(sample) = SAMPLES.get(index) {
                if !state.is_submitting() {
                    state.load_sample(sample.text);
                }
            }
            Vec::new()
        }
        Msg::ClassificationFinished {
            request_id,
            outcome,
        } => {
            state.finish_submission(request_id, outcome);
            Vec::new()
        }
        Msg::HealthChecked(server) => {
            state.set_server_status(server);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

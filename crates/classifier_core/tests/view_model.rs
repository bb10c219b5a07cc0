use classifier_core::{format_confidence, AppState, ClientError, SAMPLES};

#[test]
fn confidence_is_rendered_with_one_decimal() {
    assert_eq!(format_confidence(0.873), "87.3%");
    assert_eq!(format_confidence(1.0), "100.0%");
    assert_eq!(format_confidence(0.0), "0.0%");
    assert_eq!(format_confidence(0.85), "85.0%");
}

#[test]
fn fresh_view_is_idle_and_not_submittable() {
    let view = AppState::new().view();

    assert!(!view.loading);
    assert!(!view.can_submit);
    assert!(view.inputs_enabled);
    assert_eq!(view.submit_label, "Classify Text");
    assert_eq!(view.server_label, "Checking...");
    assert!(!view.server_online);
    assert_eq!(view.samples.len(), SAMPLES.len());
}

#[test]
fn connectivity_message_without_known_url() {
    assert_eq!(
        ClientError::Connectivity.user_message(""),
        "Failed to connect to server. Make sure the classification API is running."
    );
}

#[test]
fn samples_cover_each_category() {
    let labels: Vec<_> = SAMPLES.iter().map(|sample| sample.label).collect();
    assert_eq!(labels, ["International", "Business", "Sport"]);
    assert!(SAMPLES.iter().all(|sample| !sample.text.trim().is_empty()));
}

#[test]
fn every_sample_describes_its_category() {
    let descriptions: Vec<_> = SAMPLES.iter().map(|sample| sample.description).collect();
    assert_eq!(
        descriptions,
        [
            "World news & global events",
            "Economy & corporate news",
            "Sports & athletic events",
        ]
    );
}

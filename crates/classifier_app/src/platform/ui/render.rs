use classifier_core::{ClientViewModel, Msg, ResultView, ServerStatus};
use eframe::egui::{self, Frame, Margin, RichText, Stroke};

use super::style::*;

pub fn server_indicator(ui: &mut egui::Ui, view: &ClientViewModel) {
    let color = match view.server {
        ServerStatus::Checking => CHECKING,
        _ if view.server_online => ONLINE,
        _ => OFFLINE,
    };
    ui.label(format!("Server: {}", view.server_label));
    ui.label(RichText::new("●").color(color));
}

pub fn form(
    ui: &mut egui::Ui,
    view: &ClientViewModel,
    draft: &mut String,
    intents: &mut Vec<Msg>,
) {
    ui.add_space(12.0);
    ui.label(RichText::new("Enter text to classify:").strong());
    ui.add_space(4.0);

    let response = ui.add_enabled(
        view.inputs_enabled,
        egui::TextEdit::multiline(draft)
            .hint_text("Type or paste text here to classify...")
            .desired_rows(INPUT_ROWS)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        intents.push(Msg::InputChanged(draft.clone()));
    }

    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("Quick samples:").color(MUTED_TEXT));
        for (index, sample) in view.samples.iter().enumerate() {
            if ui
                .add_enabled(view.inputs_enabled, egui::Button::new(sample.label))
                .clicked()
            {
                intents.push(Msg::SampleLoaded(index));
            }
        }
    });

    ui.add_space(8.0);
    let submit = egui::Button::new(RichText::new(view.submit_label).strong())
        .min_size(egui::vec2(ui.available_width(), SUBMIT_HEIGHT));
    if ui.add_enabled(view.can_submit, submit).clicked() {
        intents.push(Msg::SubmitClicked);
    }
    if view.loading {
        ui.add_space(6.0);
        ui.spinner();
    }
}

pub fn error_box(ui: &mut egui::Ui, message: &str) {
    Frame::new()
        .fill(ERROR_FILL)
        .stroke(Stroke::new(1.0, ERROR_TEXT))
        .corner_radius(4.0)
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("Error: {message}")).color(ERROR_TEXT));
        });
}

pub fn result_card(ui: &mut egui::Ui, result: &ResultView) {
    ui.label(RichText::new("Classification Result").heading());
    ui.add_space(8.0);

    Frame::new()
        .fill(RESULT_FILL)
        .corner_radius(8.0)
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Category").color(RESULT_TEXT));
                    ui.label(RichText::new(&result.label).size(26.0).strong().color(RESULT_TEXT));
                });
                if let Some(confidence) = &result.confidence {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new("Confidence").color(RESULT_TEXT));
                            ui.label(
                                RichText::new(confidence)
                                    .size(26.0)
                                    .strong()
                                    .color(RESULT_TEXT),
                            );
                        });
                    });
                }
            });
        });

    ui.add_space(8.0);
    Frame::new()
        .stroke(Stroke::new(1.0, MUTED_TEXT))
        .corner_radius(4.0)
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Input Text:").strong());
            ui.label(&result.text);
        });
}

/// Legend of the categories the service predicts, one card per sample.
pub fn category_cards(ui: &mut egui::Ui, view: &ClientViewModel) {
    ui.columns(view.samples.len().max(1), |columns| {
        for (ui, sample) in columns.iter_mut().zip(view.samples) {
            Frame::new()
                .stroke(Stroke::new(1.0, MUTED_TEXT))
                .corner_radius(6.0)
                .inner_margin(Margin::same(10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(sample.label).strong());
                    ui.label(RichText::new(sample.description).small().color(MUTED_TEXT));
                });
        }
    });
}

pub fn footer(ui: &mut egui::Ui) {
    ui.label(
        RichText::new("Predictions come from the configured classification service.")
            .small()
            .color(MUTED_TEXT),
    );
}

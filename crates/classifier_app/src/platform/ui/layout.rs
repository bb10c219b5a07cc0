use classifier_core::{ClientViewModel, Msg};
use eframe::egui;

use super::render;
use super::style::CONTENT_WIDTH;

/// Lays out the window: header with the server indicator, the form, the
/// category legend and a footer.
///
/// Returns the user intents raised this frame, in the order they happened.
pub fn show(ctx: &egui::Context, view: &ClientViewModel, draft: &mut String) -> Vec<Msg> {
    let mut intents = Vec::new();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading("Text Classifier");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                render::server_indicator(ui, view);
            });
        });
        ui.add_space(6.0);
    });

    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.vertical_centered(|ui| render::footer(ui));
        ui.add_space(4.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(CONTENT_WIDTH);
                render::form(ui, view, draft, &mut intents);
                if let Some(message) = &view.error {
                    ui.add_space(12.0);
                    render::error_box(ui, message);
                }
                if let Some(result) = &view.result {
                    ui.add_space(16.0);
                    render::result_card(ui, result);
                }
                ui.add_space(20.0);
                render::category_cards(ui, view);
            });
        });
    });

    intents
}

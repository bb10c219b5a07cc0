use std::path::Path;
use std::sync::mpsc;

use classifier_core::{update, AppState, ClientViewModel, Msg};
use classifier_engine::EngineError;
use client_logging::{client_info, client_warn};
use eframe::egui;
use thiserror::Error;

use super::config::{load_config, AppConfig};
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

pub fn run_app() -> Result<(), AppError> {
    let loaded = load_config(Path::new("."));
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::initialize(if config.log_to_file {
        LogDestination::TerminalAndFile
    } else {
        LogDestination::Terminal
    });
    if let Err(err) = &loaded {
        client_warn!("Using default configuration: {}", err);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 720.0])
            .with_min_inner_size(ui::style::MIN_WINDOW_SIZE)
            .with_title(ui::style::WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        ui::style::WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            ui::fonts::install(&cc.egui_ctx, config.font_path.as_deref());
            let app = ClassifierApp::new(&config, cc.egui_ctx.clone())?;
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

struct ClassifierApp {
    state: AppState,
    view: ClientViewModel,
    /// Backing buffer for the text box; mirrors the state's input.
    draft: String,
    effects: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl ClassifierApp {
    fn new(config: &AppConfig, ctx: egui::Context) -> Result<Self, EngineError> {
        let service = config.service_config();
        let state = AppState::with_service_url(service.base_url.clone());
        let (msg_tx, msg_rx) = mpsc::channel();
        let effects = EffectRunner::new(service, msg_tx, ctx)?;

        let mut app = Self {
            view: state.view(),
            state,
            draft: String::new(),
            effects,
            msg_rx,
        };
        client_info!("Classifier window mounted");
        app.dispatch(Msg::Mounted);
        Ok(app)
    }

    fn process_pending_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
            if self.draft != self.view.input {
                self.draft.clone_from(&self.view.input);
            }
        }
        self.state = state;
        self.effects.run(effects);
    }
}

impl eframe::App for ClassifierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_pending_messages();
        let intents = ui::layout::show(ctx, &self.view, &mut self.draft);
        for msg in intents {
            self.dispatch(msg);
        }
    }
}

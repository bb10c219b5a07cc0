use eframe::egui::{Color32, Vec2};

pub const WINDOW_TITLE: &str = "Text Classifier";
pub const MIN_WINDOW_SIZE: Vec2 = Vec2::new(560.0, 480.0);
pub const CONTENT_WIDTH: f32 = 720.0;
pub const INPUT_ROWS: usize = 6;
pub const SUBMIT_HEIGHT: f32 = 40.0;

pub const ONLINE: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
pub const OFFLINE: Color32 = Color32::from_rgb(0xF4, 0x43, 0x36);
pub const CHECKING: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);

pub const ERROR_FILL: Color32 = Color32::from_rgb(0xFF, 0xEB, 0xEE);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xC6, 0x28, 0x28);
pub const RESULT_FILL: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
pub const RESULT_TEXT: Color32 = Color32::WHITE;
pub const MUTED_TEXT: Color32 = Color32::from_rgb(0x75, 0x75, 0x75);

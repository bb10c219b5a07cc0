#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod platform;

fn main() -> Result<(), platform::AppError> {
    platform::run_app()
}

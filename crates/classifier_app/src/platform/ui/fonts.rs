use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use client_logging::{client_info, client_warn};
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const SINHALA_FONT: &str = "sinhala";

/// Where common desktop installs keep a font with Sinhala coverage.
const SYSTEM_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansSinhala-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansSinhala-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansSinhala-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSerifSinhala-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Sinhala Sangam MN.ttc",
    "/Library/Fonts/NotoSansSinhala-Regular.ttf",
    "C:\\Windows\\Fonts\\Nirmala.ttf",
    "C:\\Windows\\Fonts\\iskpota.ttf",
];

/// egui's bundled fonts have no Sinhala glyphs. Registers a system (or
/// configured) font as a fallback so sample headlines and echoed input render.
pub fn install(ctx: &egui::Context, configured: Option<&Path>) {
    let candidates: Vec<&Path> = SYSTEM_CANDIDATES.iter().map(Path::new).collect();
    let Some(path) = find_font(configured, &candidates) else {
        client_warn!("No Sinhala font found; Sinhala text will render as boxes");
        return;
    };
    match fs::read(&path) {
        Ok(bytes) => {
            client_info!("Using {:?} for Sinhala text", path);
            ctx.set_fonts(with_fallback(bytes));
        }
        Err(err) => client_warn!("Failed to read font {:?}: {}", path, err),
    }
}

/// The configured path wins when it exists; otherwise the first existing candidate.
pub(crate) fn find_font(configured: Option<&Path>, candidates: &[&Path]) -> Option<PathBuf> {
    if let Some(path) = configured {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        client_warn!("Configured font {:?} does not exist", path);
    }
    candidates
        .iter()
        .find(|path| path.is_file())
        .map(|path| path.to_path_buf())
}

/// Default definitions with `bytes` appended to both families, so the bundled
/// fonts still draw Latin text and the extra font only fills missing glyphs.
pub(crate) fn with_fallback(bytes: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(SINHALA_FONT.to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(SINHALA_FONT.to_owned());
    }
    fonts
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn configured_font_takes_precedence() {
        let temp = TempDir::new().unwrap();
        let configured = temp.path().join("custom.ttf");
        let system = temp.path().join("system.ttf");
        fs::write(&configured, b"x").unwrap();
        fs::write(&system, b"x").unwrap();

        let found = find_font(Some(&configured), &[system.as_path()]);
        assert_eq!(found, Some(configured));
    }

    #[test]
    fn missing_configured_font_falls_back_to_first_existing_candidate() {
        let temp = TempDir::new().unwrap();
        let absent = temp.path().join("absent.ttf");
        let second = temp.path().join("second.ttf");
        fs::write(&second, b"x").unwrap();

        let found = find_font(Some(&absent), &[absent.as_path(), second.as_path()]);
        assert_eq!(found, Some(second));
    }

    #[test]
    fn no_font_available() {
        let temp = TempDir::new().unwrap();
        let absent = temp.path().join("absent.ttf");
        assert_eq!(find_font(None, &[absent.as_path()]), None);
        assert_eq!(find_font(None, &[temp.path()]), None);
    }

    #[test]
    fn fallback_font_is_appended_after_bundled_fonts() {
        let defaults = FontDefinitions::default();
        let fonts = with_fallback(vec![0u8; 4]);

        assert!(fonts.font_data.contains_key(SINHALA_FONT));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            let names = &fonts.families[&family];
            assert_eq!(names.last().map(String::as_str), Some(SINHALA_FONT));
            assert_eq!(names[..names.len() - 1], defaults.families[&family][..]);
        }
    }
}

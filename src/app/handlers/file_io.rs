//! Handler für Bild- und ROI-Dateien.

use std::path::PathBuf;

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Öffnet einen Bildstapel.
pub fn open_images(state: &mut AppState, paths: &[PathBuf]) -> anyhow::Result<()> {
    use_cases::file_io::open_images(state, paths)
}

/// Speichert alle ROIs.
pub fn save_rois(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::save_rois(state, &path)
}

/// Lädt ROIs aus einer Datei.
pub fn load_rois(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_rois(state, &path)
}

/// Übernimmt neue Laufzeit-Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options;
}

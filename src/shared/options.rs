//! Zentrale Konfiguration für den Spect ROI Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{RoiColor, SelectionType};

// ── Selektion ───────────────────────────────────────────────────────

/// Standard-Deckkraft der ROIs (0.0 bis 1.0).
pub const DEFAULT_ALPHA: f64 = 1.0;
/// Standard-Farbe neuer Bildstapel.
pub const DEFAULT_COLOR: RoiColor = RoiColor::Red;
/// Standard-Selektionsform neuer Bildstapel.
pub const DEFAULT_SELECTION: SelectionType = SelectionType::FilledRectangle;

// ── Viewport ────────────────────────────────────────────────────────

/// Zoom-Änderung pro Mausrad-Raste.
pub const ZOOM_STEP: f64 = 1.0;
/// Verschiebung des Pan-Zentrums pro Pfeiltaste in Pixeln.
pub const PAN_STEP: f64 = 1.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spect_roi_editor.toml` neben der Binary gespeichert.
/// Fehlende Felder erhalten ihren Standardwert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Deckkraft neuer ROIs
    pub default_alpha: f64,
    /// Farbe beim Öffnen eines Bildstapels
    pub default_color: RoiColor,
    /// Selektionsform beim Öffnen eines Bildstapels
    pub default_selection: SelectionType,

    // ── Viewport ────────────────────────────────────────────────
    /// Zoom-Änderung pro Mausrad-Raste
    pub zoom_step: f64,
    /// Pan-Verschiebung pro Pfeiltaste
    pub pan_step: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_alpha: DEFAULT_ALPHA,
            default_color: DEFAULT_COLOR,
            default_selection: DEFAULT_SELECTION,

            zoom_step: ZOOM_STEP,
            pan_step: PAN_STEP,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Gibt Default zurück bei Fehler.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad der Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spect_roi_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spect_roi_editor.toml")
    }
}

//! Application State: zentrale Datenhaltung.

use std::path::PathBuf;

use super::tools::RoiTool;
use super::CommandLog;
use crate::core::{ImageSet, ViewId, ViewSet};
use crate::shared::EditorOptions;

/// Laufende Zeichen-Geste mit der Ansicht, in der sie begonnen wurde.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiGesture {
    /// Ansicht, deren Pan-Fenster die Zeigerkoordinaten beschreibt
    pub view: ViewId,
    /// Werkzeug mit den bisher gesammelten Punkten
    pub tool: RoiTool,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Temporäre Statusnachricht (z.B. Warnung bei zu wenigen Polygon-Ecken)
    pub status_message: Option<String>,
    /// Pfad der zuletzt gespeicherten oder geladenen ROI-Datei
    pub current_roi_path: Option<PathBuf>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            status_message: None,
            current_roi_path: None,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Geöffneter Bildstapel mit Subsets (None = keine Bilder geladen)
    pub views: Option<ViewSet>,
    /// Ansicht, auf die sich Bildauswahl und Statusanzeige beziehen
    pub active_view: ViewId,
    /// Laufende Zeichen-Geste
    pub gesture: Option<RoiGesture>,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            views: None,
            active_view: ViewId::Parent,
            gesture: None,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
        }
    }

    /// Gibt `true` zurück, solange eine Geste läuft.
    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    /// Bildstapel einer Ansicht.
    pub fn view(&self, id: ViewId) -> Option<&ImageSet> {
        self.views.as_ref().and_then(|views| views.view(id))
    }

    /// Bildstapel der aktiven Ansicht.
    pub fn active_set(&self) -> Option<&ImageSet> {
        self.view(self.active_view)
    }

    /// Anzahl offener Ansichten (Eltern + Subsets), 0 ohne Bilder.
    pub fn view_count(&self) -> usize {
        self.views.as_ref().map_or(0, ViewSet::view_count)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

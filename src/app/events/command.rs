use std::path::PathBuf;

use glam::DVec2;

use crate::core::{Transforms, ViewId};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Bildstapel öffnen
    OpenImages { paths: Vec<PathBuf> },

    // ── Zeichnen ──
    /// Neue Geste in einer Ansicht beginnen
    StartRoi { view: ViewId, pos: DVec2 },
    /// Laufende Geste um einen Punkt fortsetzen
    ContinueRoi { pos: DVec2 },
    /// Vorschau der laufenden Geste nachführen
    ExtendRoi { pos: DVec2 },
    /// Laufende Geste beenden und Pixel einfärben bzw. löschen
    StopRoi,
    /// Laufende Geste ohne Ergebnis verwerfen
    AbandonRoi,

    // ── Viewport ──
    /// Zoom-Faktor einer Ansicht setzen
    SetZoom { view: ViewId, zoom: f64 },
    /// Pan-Zentrum einer Ansicht setzen
    SetCenter { view: ViewId, pos: DVec2 },
    /// Pan-Zentrum auf Bildmitte zurücksetzen
    ResetCenter { view: ViewId },

    // ── Ansichten ──
    /// Aktive Ansicht setzen
    SetActiveView { view: ViewId },
    /// Bild einer Ansicht wählen
    SelectImage { view: ViewId, index: usize },
    /// Subset anlegen
    CreateSubset,
    /// Subset entfernen
    RemoveSubset { index: usize },
    /// Simultan-Modus setzen
    SetSimultaneous { enabled: bool },

    // ── Selektions-Einstellungen (alle Ansichten) ──
    /// Farbindex setzen
    SetColorIndex { index: isize },
    /// Formindex setzen
    SetSelectionIndex { index: isize },
    /// Deckkraft (0.0 bis 1.0) setzen
    SetAlpha { alpha: f64 },
    /// Achsen-Transformationen setzen
    SetTransforms { transforms: Transforms },
    /// ROIs der aktuellen Farbe löschen
    ClearColor,
    /// Alle ROIs löschen
    ClearAll,

    // ── Datei-I/O ──
    /// ROI-Datei schreiben
    SaveRois { path: PathBuf },
    /// ROI-Datei laden
    LoadRois { path: PathBuf },

    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}

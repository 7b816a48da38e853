use std::path::PathBuf;

use glam::DVec2;

use crate::core::ViewId;
use crate::shared::EditorOptions;

/// Maustaste eines Zeiger-Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste: Geste beginnen oder fortsetzen
    Primary,
    /// Rechte Taste: Geste beenden
    Secondary,
}

/// Richtung einer Pfeiltaste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

impl PanDirection {
    /// Einheitsvektor in Bildkoordinaten (y wächst nach oben).
    pub fn unit(self) -> DVec2 {
        match self {
            PanDirection::Left => DVec2::NEG_X,
            PanDirection::Right => DVec2::X,
            PanDirection::Up => DVec2::Y,
            PanDirection::Down => DVec2::NEG_Y,
        }
    }
}

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Bilddateien öffnen (ersetzt den aktuellen Stapel)
    OpenImagesRequested { paths: Vec<PathBuf> },

    // ── Zeiger im Pan-Fenster ──
    /// Maustaste im Pan-Fenster gedrückt (Pan-lokale Koordinaten)
    PointerPressed {
        view: ViewId,
        pos: DVec2,
        button: PointerButton,
    },
    /// Zeiger im Pan-Fenster bewegt
    PointerMoved { view: ViewId, pos: DVec2 },

    // ── Viewport ──
    /// Mausrad in der Übersicht (positiv = hineinzoomen)
    ScrollZoom { view: ViewId, notches: f64 },
    /// Zoom-Faktor direkt eingegeben
    ZoomEntered { view: ViewId, zoom: f64 },
    /// Pfeiltaste in der Übersicht
    ArrowKeyPressed {
        view: ViewId,
        direction: PanDirection,
    },
    /// Klick oder Ziehen in der Übersicht (Vollbild-Koordinaten)
    OverviewClicked { view: ViewId, pos: DVec2 },
    /// Pan-Zentrum auf Bildmitte zurücksetzen
    ResetCenterRequested { view: ViewId },

    // ── Ansichten ──
    /// Andere Ansicht aktivieren
    ActiveViewSelected { view: ViewId },
    /// Anderes Bild des Stapels anzeigen
    ImageSelected { view: ViewId, index: usize },
    /// Neues Subset anlegen
    CreateSubsetRequested,
    /// Subset entfernen
    RemoveSubsetRequested { index: usize },
    /// Simultan-Modus umschalten
    SimultaneousToggled { enabled: bool },

    // ── Selektions-Einstellungen ──
    /// Farbindex gewählt (wird modulo Farbanzahl genommen)
    ColorSelected { index: isize },
    /// Formindex gewählt (wird modulo Formanzahl genommen)
    SelectionTypeSelected { index: isize },
    /// Alpha-Regler in Prozent (0–100)
    AlphaChanged { percent: f64 },
    /// Horizontal spiegeln
    FlipXToggled { enabled: bool },
    /// Vertikal spiegeln
    FlipYToggled { enabled: bool },
    /// Achsen tauschen
    SwapXyToggled { enabled: bool },
    /// ROIs der aktuellen Farbe löschen
    ClearCurrentColorRequested,
    /// Alle ROIs löschen
    ClearAllRequested,

    // ── Datei-I/O ──
    /// ROIs in eine NPZ-Datei speichern
    SaveRoisRequested { path: PathBuf },
    /// ROIs aus einer NPZ-Datei laden
    LoadRoisRequested { path: PathBuf },

    /// Optionen übernehmen
    OptionsChanged { options: EditorOptions },
}

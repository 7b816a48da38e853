//! Handler für Zeichen-Gesten.

use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ViewId;

/// Beginnt eine Geste in einer Ansicht.
pub fn start(state: &mut AppState, view: ViewId, pos: DVec2) {
    use_cases::drawing::start_roi(state, view, pos);
}

/// Setzt die laufende Geste fort.
pub fn continue_at(state: &mut AppState, pos: DVec2) {
    use_cases::drawing::continue_roi(state, pos);
}

/// Führt die Vorschau der laufenden Geste nach.
pub fn extend(state: &mut AppState, pos: DVec2) {
    use_cases::drawing::extend_roi(state, pos);
}

/// Beendet die laufende Geste.
pub fn stop(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::drawing::stop_roi(state)
}

/// Verwirft die laufende Geste.
pub fn abandon(state: &mut AppState) {
    use_cases::drawing::abandon_roi(state);
}

//! Handler für Viewport und Ansichten.

use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ViewId;

/// Setzt den Zoom und propagiert ungültige Werte als Fehler.
pub fn set_zoom(state: &mut AppState, view: ViewId, zoom: f64) -> anyhow::Result<()> {
    use_cases::viewport::set_zoom(state, view, zoom)
}

/// Setzt das Pan-Zentrum und propagiert Punkte außerhalb des Bildes als Fehler.
pub fn set_center(state: &mut AppState, view: ViewId, pos: DVec2) -> anyhow::Result<()> {
    use_cases::viewport::set_center(state, view, pos)
}

pub fn reset_center(state: &mut AppState, view: ViewId) -> anyhow::Result<()> {
    use_cases::viewport::reset_center(state, view)
}

pub fn set_active_view(state: &mut AppState, view: ViewId) {
    use_cases::views::set_active_view(state, view);
}

pub fn select_image(state: &mut AppState, view: ViewId, index: usize) {
    use_cases::views::select_image(state, view, index);
}

/// Legt ein Subset an.
pub fn create_subset(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::views::create_subset(state)
}

pub fn remove_subset(state: &mut AppState, index: usize) {
    use_cases::views::remove_subset(state, index);
}

/// Schaltet den Simultan-Modus.
pub fn set_simultaneous(state: &mut AppState, enabled: bool) {
    use_cases::views::set_simultaneous(state, enabled);
}

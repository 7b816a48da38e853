//! Handler für Selektions-Einstellungen (Farbe, Form, Deckkraft, Transformationen).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Transforms;

pub fn set_color_index(state: &mut AppState, index: isize) {
    use_cases::settings::set_color_index(state, index);
}

pub fn set_selection_index(state: &mut AppState, index: isize) {
    use_cases::settings::set_selection_index(state, index);
}

pub fn set_alpha(state: &mut AppState, alpha: f64) {
    use_cases::settings::set_alpha(state, alpha);
}

pub fn set_transforms(state: &mut AppState, transforms: Transforms) {
    use_cases::settings::set_transforms(state, transforms);
}

/// Löscht die ROIs der aktuellen Farbe.
pub fn clear_color(state: &mut AppState) {
    use_cases::settings::clear_color(state);
}

/// Löscht alle ROIs.
pub fn clear_all(state: &mut AppState) {
    use_cases::settings::clear_all(state);
}

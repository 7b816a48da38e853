//! Use-Cases für Selektions-Einstellungen, die für alle Ansichten gelten.

use crate::app::AppState;
use crate::core::{ImageSet, Transforms};

fn for_each_view(state: &mut AppState, apply: impl FnMut(&mut ImageSet)) {
    if let Some(views) = state.views.as_mut() {
        views.for_each_view_mut(apply);
    }
}

/// Setzt den Farbindex (modulo Farbanzahl).
pub fn set_color_index(state: &mut AppState, index: isize) {
    for_each_view(state, |set| set.set_color_index(index));
}

/// Setzt den Formindex (modulo Formanzahl).
pub fn set_selection_index(state: &mut AppState, index: isize) {
    for_each_view(state, |set| set.set_selection_index(index));
}

/// Setzt die Deckkraft und färbt bestehende ROIs mit neuem Alpha um.
pub fn set_alpha(state: &mut AppState, alpha: f64) {
    let alpha = alpha.clamp(0.0, 1.0);
    for_each_view(state, |set| set.set_alpha(alpha));
}

pub fn set_transforms(state: &mut AppState, transforms: Transforms) {
    for_each_view(state, |set| set.set_transforms(transforms));
}

/// Löscht in jeder Ansicht die ROIs ihrer aktuellen Farbe.
pub fn clear_color(state: &mut AppState) {
    for_each_view(state, |set| set.delete_rois_with_color(set.color()));
}

/// Löscht alle ROIs in allen Ansichten.
pub fn clear_all(state: &mut AppState) {
    for_each_view(state, ImageSet::delete_all_rois);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PixelCoord, RoiColor, SpectImage, ViewId, ViewSet};

    fn state_with_subset() -> AppState {
        let image = SpectImage::from_raw("a.png", 4, 4, vec![0.0; 16])
            .expect("Testbild sollte gültig sein");
        let mut views = ViewSet::new(ImageSet::new(vec![image]).expect("Bildstapel sollte gültig sein"));
        views.create_subset();
        let mut state = AppState::new();
        state.views = Some(views);
        state
    }

    #[test]
    fn color_index_reaches_every_view() {
        let mut state = state_with_subset();

        set_color_index(&mut state, -1);

        for view in [ViewId::Parent, ViewId::Subset(0)] {
            assert_eq!(state.view(view).map(|s| s.color()), Some(RoiColor::Eraser));
        }
    }

    #[test]
    fn clear_color_keeps_other_colors() {
        let mut state = state_with_subset();
        if let Some(views) = state.views.as_mut() {
            views.add_roi(ViewId::Parent, &[PixelCoord::new(0, 0)], RoiColor::Red);
            views.add_roi(ViewId::Parent, &[PixelCoord::new(1, 1)], RoiColor::Brown);
        }

        clear_color(&mut state);

        let parent = state.view(ViewId::Parent).expect("Eltern-Ansicht vorhanden");
        assert!(parent.coordinates_of_color(RoiColor::Red).is_empty());
        assert_eq!(parent.coordinates_of_color(RoiColor::Brown), vec![PixelCoord::new(1, 1)]);
    }

    #[test]
    fn alpha_rewrites_painted_pixels() {
        let mut state = state_with_subset();
        if let Some(views) = state.views.as_mut() {
            views.add_roi(ViewId::Parent, &[PixelCoord::new(2, 3)], RoiColor::Red);
        }

        set_alpha(&mut state, 0.5);

        let parent = state.view(ViewId::Parent).expect("Eltern-Ansicht vorhanden");
        assert_eq!(parent.raster().pixel(PixelCoord::new(2, 3))[3], 127.5);
        assert_eq!(parent.coordinates_of_color(RoiColor::Red), vec![PixelCoord::new(2, 3)]);
    }
}

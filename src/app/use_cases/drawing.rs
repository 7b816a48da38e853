//! Use-Cases für Zeichen-Gesten: Start, Fortsetzen, Vorschau, Abschluss.

use glam::DVec2;

use crate::app::state::RoiGesture;
use crate::app::tools::{RoiTool, SnapGrid};
use crate::app::AppState;
use crate::core::{ImageSet, RoiError, ViewId};

/// Zeigerposition auf das Pan-Fenster der Ansicht begrenzen.
fn clamp_pointer(set: &ImageSet, pos: DVec2) -> DVec2 {
    set.viewport().clamp_to_pan(pos)
}

/// Beginnt eine Geste mit der Selektionsform der Ansicht.
///
/// Eine unbeendete Geste wird dabei verworfen.
pub fn start_roi(state: &mut AppState, view: ViewId, pos: DVec2) {
    let Some(set) = state.view(view) else {
        log::warn!("{} existiert nicht, Geste ignoriert", view);
        return;
    };
    let (height, width) = set.shape();
    let point = clamp_pointer(set, pos);
    let tool = RoiTool::start(set.selection_type(), point, SnapGrid::new(width, height));

    log::debug!("{:?}-Geste in {} bei {:?}", tool.selection_type(), view, point);
    state.gesture = Some(RoiGesture { view, tool });
}

/// Klick während einer Geste.
pub fn continue_roi(state: &mut AppState, pos: DVec2) {
    let Some(gesture) = state.gesture.as_mut() else {
        return;
    };
    let Some(set) = state.views.as_ref().and_then(|views| views.view(gesture.view)) else {
        return;
    };
    gesture.tool.continue_at(clamp_pointer(set, pos));
}

/// Mausbewegung während einer Geste.
pub fn extend_roi(state: &mut AppState, pos: DVec2) {
    let Some(gesture) = state.gesture.as_mut() else {
        return;
    };
    let Some(set) = state.views.as_ref().and_then(|views| views.view(gesture.view)) else {
        return;
    };
    gesture.tool.extend(clamp_pointer(set, pos));
}

/// Beendet die Geste und färbt die Pixel ein bzw. löscht sie beim Radierer.
///
/// Ein Polygon mit zu wenigen Eckpunkten wird mit Warnung verworfen.
pub fn stop_roi(state: &mut AppState) -> anyhow::Result<()> {
    let Some(RoiGesture { view, tool }) = state.gesture.take() else {
        return Ok(());
    };
    let Some(views) = state.views.as_mut() else {
        return Ok(());
    };

    let result = match tool.stop() {
        Ok(result) => result,
        Err(e @ RoiError::InsufficientVertices { .. }) => {
            log::warn!("{}", e);
            state.ui.status_message = Some(e.to_string());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let Some(set) = views.view(view) else {
        return Ok(());
    };
    let (height, width) = set.shape();
    let delta = set.viewport().full_view_delta();
    let color = set.color();
    let pixels = result.into_pixels(delta, height, width);

    if set.is_erasing() {
        views.erase_roi(view, &pixels);
        log::debug!("{} Pixel in {} gelöscht", pixels.len(), view);
    } else {
        views.add_roi(view, &pixels, color);
        log::debug!("{} Pixel in {} als {} markiert", pixels.len(), view, color);
    }
    state.ui.status_message = None;
    Ok(())
}

/// Verwirft eine laufende Geste ohne Ergebnis.
pub fn abandon_roi(state: &mut AppState) {
    if let Some(gesture) = state.gesture.take() {
        log::debug!("Unbeendete Geste in {} verworfen", gesture.view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PixelCoord, RoiColor, SelectionType, SpectImage, ViewSet};

    fn state(height: usize, width: usize) -> AppState {
        let image = SpectImage::from_raw("a.png", height, width, vec![0.0; height * width])
            .expect("Testbild sollte gültig sein");
        let set = ImageSet::new(vec![image]).expect("Bildstapel sollte gültig sein");
        let mut state = AppState::new();
        state.views = Some(ViewSet::new(set));
        state
    }

    fn set_selection(state: &mut AppState, kind: SelectionType) {
        if let Some(views) = state.views.as_mut() {
            views.for_each_view_mut(|set| set.set_selection_index(kind.index() as isize));
        }
    }

    #[test]
    fn rectangle_gesture_paints_pixels() {
        let mut state = state(16, 16);

        start_roi(&mut state, ViewId::Parent, DVec2::new(2.5, 3.5));
        extend_roi(&mut state, DVec2::new(3.5, 4.5));
        stop_roi(&mut state).expect("Abschluss sollte gelingen");

        let red = state
            .view(ViewId::Parent)
            .map(|set| set.coordinates_of_color(RoiColor::Red))
            .unwrap_or_default();
        assert_eq!(
            red,
            vec![
                PixelCoord::new(4, 3),
                PixelCoord::new(4, 4),
                PixelCoord::new(5, 3),
                PixelCoord::new(5, 4)
            ]
        );
        assert!(!state.is_drawing());
    }

    #[test]
    fn polygon_with_two_vertices_only_warns() {
        let mut state = state(16, 16);
        set_selection(&mut state, SelectionType::FilledPolygon);

        start_roi(&mut state, ViewId::Parent, DVec2::new(2.5, 2.5));
        continue_roi(&mut state, DVec2::new(6.5, 6.5));
        stop_roi(&mut state).expect("zu wenige Eckpunkte sind kein Fehler");

        assert!(!state.is_drawing());
        assert!(state.ui.status_message.is_some());
        assert!(state
            .view(ViewId::Parent)
            .is_some_and(|set| set.raster().all_roi_coordinates().is_empty()));
    }

    #[test]
    fn pointer_is_clamped_into_the_pan() {
        let mut state = state(8, 8);
        set_selection(&mut state, SelectionType::Pencil);

        start_roi(&mut state, ViewId::Parent, DVec2::new(-20.0, 100.0));
        stop_roi(&mut state).expect("Abschluss sollte gelingen");

        let red = state
            .view(ViewId::Parent)
            .map(|set| set.coordinates_of_color(RoiColor::Red))
            .unwrap_or_default();
        assert_eq!(red, vec![PixelCoord::new(7, 0)]);
    }

    #[test]
    fn abandon_discards_gesture() {
        let mut state = state(8, 8);
        start_roi(&mut state, ViewId::Parent, DVec2::new(1.5, 1.5));

        abandon_roi(&mut state);
        stop_roi(&mut state).expect("ohne Geste passiert nichts");

        assert!(state
            .view(ViewId::Parent)
            .is_some_and(|set| set.raster().all_roi_coordinates().is_empty()));
    }
}

//! Use-Case-Funktionen für Zoom und Pan-Zentrum einer Ansicht.

use anyhow::Context;
use glam::DVec2;

use crate::app::AppState;
use crate::core::{ImageSet, ViewId};

fn view_mut(state: &mut AppState, view: ViewId) -> anyhow::Result<&mut ImageSet> {
    state
        .views
        .as_mut()
        .and_then(|views| views.view_mut(view))
        .with_context(|| format!("{} existiert nicht", view))
}

/// Setzt den Zoom; Werte unter 1.0 werden abgewiesen, der alte Zoom bleibt.
pub fn set_zoom(state: &mut AppState, view: ViewId, zoom: f64) -> anyhow::Result<()> {
    let set = view_mut(state, view)?;
    if let Err(e) = set.set_zoom(zoom) {
        log::warn!("{}: {}", view, e);
        return Err(e.into());
    }
    log::debug!("{}: Zoom {}, Zentrum {:?}", view, set.zoom(), set.center());
    Ok(())
}

/// Verschiebt das Pan-Zentrum; Punkte außerhalb des Bildes werden abgewiesen.
pub fn set_center(state: &mut AppState, view: ViewId, pos: DVec2) -> anyhow::Result<()> {
    let set = view_mut(state, view)?;
    if let Err(e) = set.set_center(pos) {
        log::warn!("{}: {}", view, e);
        return Err(e.into());
    }
    Ok(())
}

/// Setzt das Pan-Zentrum auf die Bildmitte.
pub fn reset_center(state: &mut AppState, view: ViewId) -> anyhow::Result<()> {
    view_mut(state, view)?.reset_center();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RoiError, SpectImage, ViewSet};
    use approx::assert_relative_eq;

    fn state() -> AppState {
        let image = SpectImage::from_raw("a.png", 64, 32, vec![0.0; 64 * 32])
            .expect("Testbild sollte gültig sein");
        let set = ImageSet::new(vec![image]).expect("Bildstapel sollte gültig sein");
        let mut state = AppState::new();
        state.views = Some(ViewSet::new(set));
        state
    }

    #[test]
    fn invalid_zoom_keeps_previous_value() {
        let mut state = state();
        set_zoom(&mut state, ViewId::Parent, 2.0).expect("Zoom 2 ist gültig");

        let err = set_zoom(&mut state, ViewId::Parent, 0.5).expect_err("Zoom < 1 abgewiesen");

        assert_eq!(
            err.downcast_ref::<RoiError>(),
            Some(&RoiError::InvalidZoom { requested: 0.5 })
        );
        assert_relative_eq!(state.view(ViewId::Parent).map_or(0.0, |s| s.zoom()), 2.0);
    }

    #[test]
    fn center_outside_image_is_rejected() {
        let mut state = state();

        let result = set_center(&mut state, ViewId::Parent, DVec2::new(100.0, 5.0));

        assert!(result.is_err());
        assert_eq!(
            state.view(ViewId::Parent).map(|s| s.center()),
            Some(DVec2::new(16.0, 32.0))
        );
    }

    #[test]
    fn unknown_view_is_an_error() {
        let mut state = state();
        assert!(reset_center(&mut state, ViewId::Subset(3)).is_err());
    }
}

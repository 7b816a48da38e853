//! Use-Cases für Ansichten: Subsets, Simultan-Modus, aktive Ansicht, Bildwahl.

use crate::app::AppState;
use crate::core::ViewId;

/// Legt ein Subset an und aktiviert es.
pub fn create_subset(state: &mut AppState) -> anyhow::Result<()> {
    let Some(views) = state.views.as_mut() else {
        anyhow::bail!("Keine Bilder geladen");
    };
    state.active_view = views.create_subset();
    Ok(())
}

/// Entfernt ein Subset; war es aktiv, wird die Eltern-Ansicht aktiv.
///
/// Eine Geste im entfernten Subset wird verworfen, eine in einem
/// nachfolgenden Subset rückt mit ihm nach.
pub fn remove_subset(state: &mut AppState, index: usize) {
    let Some(views) = state.views.as_mut() else {
        return;
    };
    if views.remove_subset(index).is_none() {
        log::warn!("Subset {} existiert nicht", index);
        return;
    }
    log::info!("{} entfernt", ViewId::Subset(index));
    state.active_view = match state.active_view {
        ViewId::Subset(active) if active == index => ViewId::Parent,
        ViewId::Subset(active) if active > index => ViewId::Subset(active - 1),
        other => other,
    };
    if let Some(gesture) = state.gesture.as_mut() {
        match gesture.view {
            ViewId::Subset(view) if view == index => {
                log::debug!("Geste in {} verworfen", gesture.view);
                state.gesture = None;
            }
            ViewId::Subset(view) if view > index => gesture.view = ViewId::Subset(view - 1),
            _ => {}
        }
    }
}

/// Schaltet den Simultan-Modus.
pub fn set_simultaneous(state: &mut AppState, enabled: bool) {
    if let Some(views) = state.views.as_mut() {
        views.set_simultaneous(enabled);
        log::info!(
            "Simultan-Modus {}",
            if enabled { "aktiv" } else { "aus" }
        );
    }
}

/// Aktiviert eine existierende Ansicht.
pub fn set_active_view(state: &mut AppState, view: ViewId) {
    if state.view(view).is_some() {
        state.active_view = view;
    } else {
        log::warn!("{} existiert nicht", view);
    }
}

/// Wählt das angezeigte Bild einer Ansicht.
pub fn select_image(state: &mut AppState, view: ViewId, index: usize) {
    let selected = state
        .views
        .as_mut()
        .and_then(|views| views.view_mut(view))
        .is_some_and(|set| set.select_image(index));
    if !selected {
        log::warn!("Bild {} in {} nicht wählbar", index, view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ImageSet, SpectImage, ViewSet};

    fn state() -> AppState {
        let images = ["a.png", "b.png"]
            .iter()
            .map(|name| {
                SpectImage::from_raw(*name, 4, 4, vec![0.0; 16]).expect("Testbild sollte gültig sein")
            })
            .collect();
        let set = ImageSet::new(images).expect("Bildstapel sollte gültig sein");
        let mut state = AppState::new();
        state.views = Some(ViewSet::new(set));
        state
    }

    #[test]
    fn removing_active_subset_falls_back_to_parent() {
        let mut state = state();
        create_subset(&mut state).expect("Subset sollte anlegbar sein");
        assert_eq!(state.active_view, ViewId::Subset(0));

        remove_subset(&mut state, 0);

        assert_eq!(state.active_view, ViewId::Parent);
        assert_eq!(state.view_count(), 1);
    }

    #[test]
    fn removing_subset_abandons_its_gesture() {
        let mut state = state();
        create_subset(&mut state).expect("Subset sollte anlegbar sein");
        crate::app::use_cases::drawing::start_roi(
            &mut state,
            ViewId::Subset(0),
            glam::DVec2::new(1.5, 1.5),
        );
        assert!(state.is_drawing());

        remove_subset(&mut state, 0);

        assert!(!state.is_drawing());
        crate::app::use_cases::drawing::stop_roi(&mut state)
            .expect("stop_roi sollte ohne Fehler durchlaufen");
        assert!(state
            .view(ViewId::Parent)
            .is_some_and(|set| set.coordinates_of_color(set.color()).is_empty()));
    }

    #[test]
    fn removing_earlier_subset_moves_gesture_along() {
        let mut state = state();
        create_subset(&mut state).expect("Subset sollte anlegbar sein");
        create_subset(&mut state).expect("Subset sollte anlegbar sein");
        crate::app::use_cases::drawing::start_roi(
            &mut state,
            ViewId::Subset(1),
            glam::DVec2::new(1.5, 1.5),
        );

        remove_subset(&mut state, 0);

        assert_eq!(
            state.gesture.as_ref().map(|gesture| gesture.view),
            Some(ViewId::Subset(0))
        );
    }

    #[test]
    fn select_image_is_per_view() {
        let mut state = state();
        create_subset(&mut state).expect("Subset sollte anlegbar sein");

        select_image(&mut state, ViewId::Subset(0), 1);
        select_image(&mut state, ViewId::Parent, 7);

        assert_eq!(state.view(ViewId::Subset(0)).map(|s| s.current_image_index()), Some(1));
        assert_eq!(state.view(ViewId::Parent).map(|s| s.current_image_index()), Some(0));
    }

    #[test]
    fn create_subset_without_images_fails() {
        let mut state = AppState::new();
        assert!(create_subset(&mut state).is_err());
    }
}

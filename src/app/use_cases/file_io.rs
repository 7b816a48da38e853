//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::app::AppState;
use crate::archive::{self, RoiArchive};
use crate::core::{ImageSet, PixelCoord, RoiColor, ViewId, ViewSet};

/// Öffnet einen Bildstapel und ersetzt alle bisherigen Ansichten.
///
/// Farbe, Form und Deckkraft kommen aus den Optionen.
pub fn open_images(state: &mut AppState, paths: &[PathBuf]) -> anyhow::Result<()> {
    let mut set = ImageSet::open(paths).context("Bildstapel konnte nicht geöffnet werden")?;
    set.set_color(state.options.default_color);
    set.set_selection_index(state.options.default_selection.index() as isize);
    set.set_alpha(state.options.default_alpha.clamp(0.0, 1.0));

    let (height, width) = set.shape();
    let msg = format!("{} Bilder geöffnet ({}×{})", set.images().len(), height, width);
    log::info!("{}", msg);

    state.views = Some(ViewSet::new(set));
    state.active_view = ViewId::Parent;
    state.gesture = None;
    state.ui.current_roi_path = None;
    state.ui.status_message = Some(msg);
    Ok(())
}

/// Stellt das Archiv aus dem aktuellen Zustand aller Ansichten zusammen.
pub fn build_archive(views: &ViewSet) -> RoiArchive {
    RoiArchive {
        masks: views.export_all(),
        files: views.parent().file_names(),
        shape: views.parent().shape(),
        views: views.view_count(),
    }
}

/// Speichert alle ROIs aller Ansichten als NPZ-Datei.
pub fn save_rois(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let Some(views) = state.views.as_ref() else {
        anyhow::bail!("Keine Bilder geladen, nichts zu speichern");
    };
    archive::write_roi_archive(path, &build_archive(views))?;

    state.ui.current_roi_path = Some(path.to_path_buf());
    state.ui.status_message = Some(format!("ROIs gespeichert: {}", path.display()));
    Ok(())
}

/// Eine vorbereitete Einfärbung aus dem Archiv.
struct MaskEdit {
    view: ViewId,
    color: RoiColor,
    coords: Vec<PixelCoord>,
}

/// Lädt ROIs aus einer NPZ-Datei.
///
/// Das Archiv wird vollständig gelesen und geprüft, bevor ein Raster
/// verändert wird. Eltern-Masken laufen über den Simultan-Modus,
/// Subset-Masken werden direkt auf das jeweilige Subset angewendet.
pub fn load_rois(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let Some(views) = state.views.as_mut() else {
        anyhow::bail!("Keine Bilder geladen, ROI-Datei kann nicht zugeordnet werden");
    };

    let roi_archive = archive::read_roi_archive(path)?;
    roi_archive.check_compatible(&views.parent().file_names(), views.parent().shape())?;

    let view_count = archive::restored_view_count(roi_archive.views, views.view_count());
    let edits: Vec<MaskEdit> = RoiColor::selectable()
        .flat_map(|color| {
            let parent = std::iter::once(ViewId::Parent);
            let subsets = (0..view_count - 1).map(ViewId::Subset);
            parent.chain(subsets).map(move |view| (color, view))
        })
        .filter_map(|(color, view)| {
            let mask = roi_archive.mask(&ViewSet::mask_key(color, view))?;
            let coords = mask.coords();
            (!coords.is_empty()).then_some(MaskEdit {
                view,
                color,
                coords,
            })
        })
        .collect();

    for edit in &edits {
        match edit.view {
            ViewId::Parent => {
                views.add_roi(ViewId::Parent, &edit.coords, edit.color);
            }
            subset => {
                if let Some(set) = views.view_mut(subset) {
                    set.add_coords(&edit.coords, edit.color);
                }
            }
        }
    }

    let msg = format!(
        "ROIs geladen: {} ({} Masken, {} Ansichten)",
        path.display(),
        edits.len(),
        view_count
    );
    log::info!("{}", msg);
    state.ui.current_roi_path = Some(path.to_path_buf());
    state.ui.status_message = Some(msg);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArchiveIncompatibility, RoiError, SpectImage};

    fn state(names: &[&str], height: usize, width: usize) -> AppState {
        let images = names
            .iter()
            .map(|name| {
                SpectImage::from_raw(*name, height, width, vec![0.0; height * width])
                    .expect("Testbild sollte gültig sein")
            })
            .collect();
        let mut state = AppState::new();
        state.views = Some(ViewSet::new(
            ImageSet::new(images).expect("Bildstapel sollte gültig sein"),
        ));
        state
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("spect_roi_editor_{}.npz", name))
    }

    #[test]
    fn saved_rois_load_into_fresh_views() {
        let path = temp_path("use_case_roundtrip");
        let mut source = state(&["a.png", "b.png"], 6, 5);
        if let Some(views) = source.views.as_mut() {
            views.create_subset();
            views.add_roi(ViewId::Parent, &[PixelCoord::new(1, 2)], RoiColor::Red);
            views.add_roi(ViewId::Subset(0), &[PixelCoord::new(5, 4)], RoiColor::Purple);
        }
        save_rois(&mut source, &path).expect("Speichern sollte gelingen");

        let mut target = state(&["a.png", "b.png"], 6, 5);
        if let Some(views) = target.views.as_mut() {
            views.create_subset();
        }
        load_rois(&mut target, &path).expect("Laden sollte gelingen");
        let _ = std::fs::remove_file(&path);

        let parent = target.view(ViewId::Parent).expect("Eltern-Ansicht vorhanden");
        let subset = target.view(ViewId::Subset(0)).expect("Subset vorhanden");
        assert_eq!(parent.coordinates_of_color(RoiColor::Red), vec![PixelCoord::new(1, 2)]);
        assert_eq!(subset.coordinates_of_color(RoiColor::Purple), vec![PixelCoord::new(5, 4)]);
        assert!(parent.coordinates_of_color(RoiColor::Purple).is_empty());
    }

    #[test]
    fn single_view_session_restores_only_parent() {
        let path = temp_path("use_case_single_view");
        let mut source = state(&["a.png"], 4, 4);
        if let Some(views) = source.views.as_mut() {
            views.create_subset();
            views.add_roi(ViewId::Subset(0), &[PixelCoord::new(0, 0)], RoiColor::Teal);
        }
        save_rois(&mut source, &path).expect("Speichern sollte gelingen");

        let mut target = state(&["a.png"], 4, 4);
        load_rois(&mut target, &path).expect("Laden sollte gelingen");
        let _ = std::fs::remove_file(&path);

        let parent = target.view(ViewId::Parent).expect("Eltern-Ansicht vorhanden");
        assert!(parent.raster().all_roi_coordinates().is_empty());
    }

    #[test]
    fn incompatible_archive_changes_nothing() {
        let path = temp_path("use_case_shape_mismatch");
        let mut source = state(&["a.png"], 4, 4);
        if let Some(views) = source.views.as_mut() {
            views.add_roi(ViewId::Parent, &[PixelCoord::new(0, 0)], RoiColor::Red);
        }
        save_rois(&mut source, &path).expect("Speichern sollte gelingen");

        let mut target = state(&["a.png"], 5, 4);
        let err = load_rois(&mut target, &path).expect_err("Form passt nicht");
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            err.downcast_ref::<RoiError>(),
            Some(RoiError::IncompatibleArchive(
                ArchiveIncompatibility::ShapeMismatch { .. }
            ))
        ));
        let parent = target.view(ViewId::Parent).expect("Eltern-Ansicht vorhanden");
        assert!(parent.raster().all_roi_coordinates().is_empty());
    }
}

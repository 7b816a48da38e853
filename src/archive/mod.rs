//! Persistente ROI-Dateien im NPZ-Format.
//!
//! Ein NPZ-Archiv ist ein ZIP-Container mit einem NPY-Array pro Eintrag:
//! eine Bool-Maske `H × W` pro Farbe und Ansicht, dazu `files`, `shape`, `views`.

pub mod npy;
pub mod reader;
pub mod writer;

use indexmap::IndexMap;

use crate::core::{ArchiveIncompatibility, BoolMask, RoiError};

pub use reader::read_roi_archive;
pub use writer::write_roi_archive;

/// Dateiendung von ROI-Dateien.
pub const ROI_FILE_EXTENSION: &str = "npz";

/// Eintrag mit den Basis-Dateinamen der Bilder.
pub const FILES_KEY: &str = "files";
/// Eintrag mit der Bildform `(H, W)`.
pub const SHAPE_KEY: &str = "shape";
/// Eintrag mit der Anzahl gespeicherter Ansichten.
pub const VIEWS_KEY: &str = "views";

/// Inhalt einer ROI-Datei.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiArchive {
    /// Masken nach Schlüssel (`red`, `red2`, ...)
    pub masks: IndexMap<String, BoolMask>,
    /// Basis-Dateinamen der Bilder beim Speichern
    pub files: Vec<String>,
    /// Bildform `(H, W)`
    pub shape: (usize, usize),
    /// Anzahl Ansichten (Eltern + Subsets) beim Speichern
    pub views: usize,
}

impl RoiArchive {
    /// Prüft das Archiv gegen den geöffneten Bildstapel.
    ///
    /// Reihenfolge: alle Dateinamen geöffnet, danach Form identisch.
    pub fn check_compatible(
        &self,
        open_files: &[String],
        shape: (usize, usize),
    ) -> Result<(), RoiError> {
        if let Some(unknown) = self.files.iter().find(|f| !open_files.contains(f)) {
            return Err(ArchiveIncompatibility::UnknownFile {
                name: unknown.clone(),
            }
            .into());
        }
        if self.shape != shape {
            return Err(ArchiveIncompatibility::ShapeMismatch {
                expected: shape,
                found: self.shape,
            }
            .into());
        }
        Ok(())
    }

    /// Maske zu einem Schlüssel; fehlende Einträge gelten als leer.
    pub fn mask(&self, key: &str) -> Option<&BoolMask> {
        self.masks.get(key)
    }
}

/// Anzahl wiederherzustellender Ansichten (inkl. Eltern).
///
/// Nur wenn Datei und aktuelle Sitzung mehrere Ansichten haben, werden
/// `min(gespeichert, aktuell)` Ansichten geladen, sonst nur die Eltern-Ansicht.
pub fn restored_view_count(stored_views: usize, current_views: usize) -> usize {
    if stored_views > 1 && current_views > 1 {
        stored_views.min(current_views)
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archive(files: &[&str], shape: (usize, usize)) -> RoiArchive {
        RoiArchive {
            masks: IndexMap::new(),
            files: files.iter().map(|f| f.to_string()).collect(),
            shape,
            views: 1,
        }
    }

    #[test]
    fn restored_view_count_needs_multiple_views_on_both_sides() {
        assert_eq!(restored_view_count(1, 3), 1);
        assert_eq!(restored_view_count(3, 1), 1);
        assert_eq!(restored_view_count(3, 2), 2);
        assert_eq!(restored_view_count(2, 4), 2);
    }

    #[test]
    fn check_compatible_reports_unknown_file_before_shape() {
        let open = vec!["a.png".to_string()];
        let result = archive(&["b.png"], (1, 1)).check_compatible(&open, (64, 32));
        assert_eq!(
            result,
            Err(RoiError::IncompatibleArchive(ArchiveIncompatibility::UnknownFile {
                name: "b.png".into()
            }))
        );
    }

    #[test]
    fn check_compatible_rejects_other_shape() {
        let open = vec!["a.png".to_string(), "b.png".to_string()];
        let result = archive(&["b.png"], (32, 32)).check_compatible(&open, (64, 32));
        assert!(matches!(
            result,
            Err(RoiError::IncompatibleArchive(
                ArchiveIncompatibility::ShapeMismatch { .. }
            ))
        ));
        assert!(archive(&["a.png"], (64, 32)).check_compatible(&open, (64, 32)).is_ok());
    }
}

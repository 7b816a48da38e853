//! Reader für ROI-Dateien (NPZ).
//!
//! Alle Einträge werden vollständig gelesen und geprüft, bevor ein
//! Aufrufer irgendetwas am Selektionsraster ändert.

use std::io::{BufReader, Read, Seek};
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;

use super::npy::{self, NpyArray, NpyData};
use super::{RoiArchive, FILES_KEY, ROI_FILE_EXTENSION, SHAPE_KEY, VIEWS_KEY};
use crate::core::{ArchiveIncompatibility, BoolMask, RoiError};

/// Prüft die Dateiendung einer ROI-Datei.
pub fn check_extension(path: &Path) -> Result<(), RoiError> {
    let matches = path
        .extension()
        .is_some_and(|ext| ext == ROI_FILE_EXTENSION);
    if matches {
        Ok(())
    } else {
        Err(ArchiveIncompatibility::NotAnArchive {
            path: path.display().to_string(),
        }
        .into())
    }
}

/// Obergrenze für die Vorab-Reservierung; die Eintragsgröße stammt aus der Datei.
const MAX_PREALLOC: usize = 64 * 1024 * 1024;

fn malformed(reason: impl Into<String>) -> RoiError {
    ArchiveIncompatibility::malformed(reason).into()
}

/// Liest ein Archiv aus einem seekbaren Reader.
pub fn read_roi_archive_from<R: Read + Seek>(reader: R) -> Result<RoiArchive, RoiError> {
    let mut zip =
        zip::ZipArchive::new(reader).map_err(|e| malformed(format!("Ungültiges ZIP: {}", e)))?;

    let mut arrays: IndexMap<String, NpyArray> = IndexMap::new();
    for index in 0..zip.len() {
        let mut entry = zip
            .by_index(index)
            .map_err(|e| malformed(format!("Eintrag {} nicht lesbar: {}", index, e)))?;
        if !entry.is_file() {
            continue;
        }
        let name = entry.name().to_string();
        let key = name.strip_suffix(".npy").unwrap_or(&name).to_string();

        let capacity = usize::try_from(entry.size()).map_or(0, |size| size.min(MAX_PREALLOC));
        let mut buffer = Vec::with_capacity(capacity);
        entry
            .read_to_end(&mut buffer)
            .map_err(|e| malformed(format!("Eintrag '{}' nicht entpackbar: {}", name, e)))?;
        let array = npy::decode(&buffer)?;
        if !array.is_consistent() {
            return Err(malformed(format!("Eintrag '{}' hat falsche Länge", key)));
        }
        arrays.insert(key, array);
    }

    let files = match arrays.shift_remove(FILES_KEY) {
        Some(NpyArray {
            data: NpyData::Unicode(names),
            ..
        }) => names,
        _ => return Err(malformed("Eintrag 'files' fehlt oder ist kein Text-Array")),
    };

    let shape = match arrays.shift_remove(SHAPE_KEY) {
        Some(NpyArray {
            data: NpyData::Int64(dims),
            ..
        }) if dims.len() == 2 && dims.iter().all(|&d| d >= 0) => (dims[0] as usize, dims[1] as usize),
        _ => return Err(malformed("Eintrag 'shape' fehlt oder ist ungültig")),
    };

    let views = match arrays.shift_remove(VIEWS_KEY) {
        Some(NpyArray {
            data: NpyData::Int64(values),
            ..
        }) if values.len() == 1 && values[0] >= 1 => values[0] as usize,
        _ => return Err(malformed("Eintrag 'views' fehlt oder ist ungültig")),
    };

    let mut masks = IndexMap::new();
    for (key, array) in arrays {
        let NpyArray {
            shape: dims,
            data: NpyData::Bool(cells),
        } = array
        else {
            return Err(malformed(format!("Maske '{}' ist kein Bool-Array", key)));
        };
        if dims != [shape.0, shape.1] {
            return Err(malformed(format!(
                "Maske '{}' hat Form {:?} statt {:?}",
                key, dims, shape
            )));
        }
        let mask = BoolMask::from_cells(shape.0, shape.1, cells)
            .ok_or_else(|| malformed(format!("Maske '{}' hat falsche Länge", key)))?;
        masks.insert(key, mask);
    }

    Ok(RoiArchive {
        masks,
        files,
        shape,
        views,
    })
}

/// Liest eine ROI-Datei; die Endung wird vor dem Öffnen geprüft.
pub fn read_roi_archive(path: &Path) -> Result<RoiArchive> {
    check_extension(path)?;
    let file = std::fs::File::open(path)
        .with_context(|| format!("ROI-Datei nicht gefunden: {}", path.display()))?;
    let archive = read_roi_archive_from(BufReader::new(file))
        .with_context(|| format!("ROI-Datei nicht lesbar: {}", path.display()))?;

    log::info!(
        "ROI-Datei geladen: {} ({} Masken, {} Ansichten)",
        path.display(),
        archive.masks.len(),
        archive.views
    );
    Ok(archive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::writer::write_roi_archive_to;
    use crate::core::PixelCoord;
    use std::io::{Cursor, Write};

    fn sample_archive() -> RoiArchive {
        let mut masks = IndexMap::new();
        masks.insert(
            "red".to_string(),
            BoolMask::from_coords(4, 3, &[PixelCoord::new(1, 2)]),
        );
        masks.insert("red2".to_string(), BoolMask::new(4, 3));
        RoiArchive {
            masks,
            files: vec!["a.png".to_string(), "b.png".to_string()],
            shape: (4, 3),
            views: 2,
        }
    }

    #[test]
    fn written_archive_reads_back() {
        let archive = sample_archive();
        let cursor = write_roi_archive_to(Cursor::new(Vec::new()), &archive).expect("schreibbar");

        let restored = read_roi_archive_from(Cursor::new(cursor.into_inner())).expect("lesbar");

        assert_eq!(restored, archive);
    }

    #[test]
    fn check_extension_rejects_other_files() {
        assert!(check_extension(Path::new("rois.npz")).is_ok());
        assert_eq!(
            check_extension(Path::new("rois.txt")),
            Err(RoiError::IncompatibleArchive(ArchiveIncompatibility::NotAnArchive {
                path: "rois.txt".into()
            }))
        );
    }

    #[test]
    fn read_roi_archive_rejects_extension_before_opening() {
        let err = read_roi_archive(Path::new("does-not-exist.png")).expect_err("Endung falsch");
        assert!(matches!(
            err.downcast_ref::<RoiError>(),
            Some(RoiError::IncompatibleArchive(
                ArchiveIncompatibility::NotAnArchive { .. }
            ))
        ));
    }

    #[test]
    fn missing_metadata_is_malformed() {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("red.npy", zip::write::SimpleFileOptions::default())
            .expect("Eintrag anlegbar");
        zip.write_all(&npy::encode(&NpyArray::bool_2d(1, 1, vec![true])))
            .expect("schreibbar");
        let bytes = zip.finish().expect("abschließbar").into_inner();

        let result = read_roi_archive_from(Cursor::new(bytes));

        assert!(matches!(
            result,
            Err(RoiError::IncompatibleArchive(ArchiveIncompatibility::Malformed { .. }))
        ));
    }

    #[test]
    fn mask_with_wrong_shape_is_malformed() {
        let mut archive = sample_archive();
        archive
            .masks
            .insert("brown".to_string(), BoolMask::new(2, 2));
        let cursor = write_roi_archive_to(Cursor::new(Vec::new()), &archive).expect("schreibbar");

        let result = read_roi_archive_from(Cursor::new(cursor.into_inner()));

        assert!(result.is_err());
    }

    fn npy_bytes(header: &str, payload: &[u8]) -> Vec<u8> {
        let mut bytes = b"\x93NUMPY".to_vec();
        bytes.extend_from_slice(&[1, 0]);
        bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn member_with_overflowing_length_is_malformed() {
        let member = npy_bytes(
            "{'descr': '<i8', 'fortran_order': False, 'shape': (3074457345618258603,), }",
            &[0; 16],
        );
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("red.npy", zip::write::SimpleFileOptions::default())
            .expect("Eintrag anlegbar");
        zip.write_all(&member).expect("schreibbar");
        let bytes = zip.finish().expect("abschließbar").into_inner();

        let result = read_roi_archive_from(Cursor::new(bytes));

        assert!(matches!(
            result,
            Err(RoiError::IncompatibleArchive(ArchiveIncompatibility::Malformed { .. }))
        ));
    }
}

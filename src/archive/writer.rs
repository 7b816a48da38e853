//! Writer für ROI-Dateien (NPZ).

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::npy::{self, NpyArray};
use super::{RoiArchive, FILES_KEY, SHAPE_KEY, VIEWS_KEY};

/// Serialisiert ein Archiv in einen beliebigen seekbaren Writer.
pub fn write_roi_archive_to<W: Write + std::io::Seek>(
    writer: W,
    archive: &RoiArchive,
) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut add = |name: &str, array: &NpyArray| -> Result<()> {
        zip.start_file(format!("{}.npy", name), options)
            .with_context(|| format!("Eintrag '{}' nicht anlegbar", name))?;
        zip.write_all(&npy::encode(array))
            .with_context(|| format!("Eintrag '{}' nicht schreibbar", name))?;
        Ok(())
    };

    for (key, mask) in &archive.masks {
        let (height, width) = mask.shape();
        add(key, &NpyArray::bool_2d(height, width, mask.cells().to_vec()))?;
    }
    add(FILES_KEY, &NpyArray::unicode_1d(archive.files.clone()))?;
    add(
        SHAPE_KEY,
        &NpyArray::int64_1d(vec![archive.shape.0 as i64, archive.shape.1 as i64]),
    )?;
    add(VIEWS_KEY, &NpyArray::int64_scalar(archive.views as i64))?;

    zip.finish().context("ZIP-Archiv nicht abschließbar")
}

/// Schreibt eine ROI-Datei.
pub fn write_roi_archive(path: &Path, archive: &RoiArchive) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("ROI-Datei nicht anlegbar: {}", path.display()))?;
    write_roi_archive_to(BufWriter::new(file), archive)?
        .flush()
        .with_context(|| format!("ROI-Datei nicht schreibbar: {}", path.display()))?;

    log::info!(
        "ROI-Datei gespeichert: {} ({} Masken, {} Ansichten)",
        path.display(),
        archive.masks.len(),
        archive.views
    );
    Ok(())
}

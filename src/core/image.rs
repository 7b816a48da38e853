//! Einzelnes Grauwert-Bild eines Bildstapels.

use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use image::ImageReader;

use super::pixel_grid::PanSlice;

/// Einkanaliges Float-Bild mit Basis-Dateinamen.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectImage {
    name: String,
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl SpectImage {
    /// Erstellt ein Bild aus zeilenweisen Rohdaten.
    pub fn from_raw(
        name: impl Into<String>,
        height: usize,
        width: usize,
        data: Vec<f32>,
    ) -> Result<Self> {
        let name = name.into();
        if data.len() != height * width {
            bail!(
                "Bild '{}': {} Werte passen nicht zu {}×{}",
                name,
                data.len(),
                height,
                width
            );
        }
        Ok(Self {
            name,
            height,
            width,
            data,
        })
    }

    /// Lädt ein Bild und wandelt es in Grauwerte (Luma, f32) um.
    ///
    /// Unterstützte Formate: PNG, JPEG, TIFF
    pub fn open(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Bild nicht gefunden: {}", path.display()))?;
        let decoded = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .with_context(|| format!("Format-Erkennung fehlgeschlagen für: {}", path.display()))?
            .decode()
            .with_context(|| format!("Fehler beim Dekodieren: {}", path.display()))?;

        let luma = decoded.to_luma32f();
        let (width, height) = luma.dimensions();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        log::info!("Bild geladen: {} ({}×{})", name, width, height);
        Self::from_raw(name, height as usize, width as usize, luma.into_raw())
    }

    /// Basis-Dateiname.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Form `(H, W)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Grauwert an `(row, col)`.
    pub fn value(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    /// Beschneidet das Bild auf die linke obere Region `height × width`.
    pub fn crop(&mut self, height: usize, width: usize) {
        let height = height.min(self.height);
        let width = width.min(self.width);
        if (height, width) == (self.height, self.width) {
            return;
        }

        let mut cropped = Vec::with_capacity(height * width);
        for row in 0..height {
            let start = row * self.width;
            cropped.extend_from_slice(&self.data[start..start + width]);
        }
        self.data = cropped;
        self.height = height;
        self.width = width;
    }

    /// Ausschnitt im Pan-Fenster, zeilenweise.
    pub fn window(&self, slice: &PanSlice) -> Vec<f32> {
        let rows = slice.rows.start.min(self.height)..slice.rows.end.min(self.height);
        let cols = slice.cols.start.min(self.width)..slice.cols.end.min(self.width);
        rows.flat_map(|row| {
            let start = row * self.width;
            self.data[start + cols.start..start + cols.end].iter().copied()
        })
        .collect()
    }
}

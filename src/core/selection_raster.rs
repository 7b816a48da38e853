//! RGBA-Selektionsraster einer Bildansicht.
//!
//! Pro Pixel ein `[r, g, b, a]` auf der Skala 0–255. Ein Pixel trägt
//! höchstens eine Farbe; spätere Schreibzugriffe überschreiben frühere.
//! Farbabfragen vergleichen den RGBA-Wert exakt mit dem aktuellen Alpha.

use super::color::RoiColor;
use super::mask::BoolMask;
use super::pixel_grid::{PanSlice, PixelCoord};

/// Transparentes (nicht selektiertes) Pixel.
pub const TRANSPARENT: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

/// RGBA-Raster `(H, W, 4)` mit gemeinsamem Alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRaster {
    height: usize,
    width: usize,
    alpha: f64,
    pixels: Vec<[f64; 4]>,
}

impl SelectionRaster {
    /// Vollständig transparentes Raster mit Alpha 1.0.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            alpha: 1.0,
            pixels: vec![TRANSPARENT; height * width],
        }
    }

    /// Form `(H, W)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Aktueller Alpha-Wert in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Alpha auf der Skala 0–255.
    pub fn alpha255(&self) -> f64 {
        self.alpha * 255.0
    }

    /// Linearer Index; Koordinaten außerhalb des Rasters sind ein Programmierfehler.
    fn index(&self, coord: PixelCoord) -> usize {
        assert!(
            coord.row < self.height && coord.col < self.width,
            "Pixel ({}, {}) außerhalb des Rasters {}×{}",
            coord.row,
            coord.col,
            self.height,
            self.width
        );
        coord.row * self.width + coord.col
    }

    /// RGBA-Wert eines Pixels.
    pub fn pixel(&self, coord: PixelCoord) -> [f64; 4] {
        self.pixels[self.index(coord)]
    }

    fn write(&mut self, coords: &[PixelCoord], rgba: [f64; 4]) {
        for &coord in coords {
            let index = self.index(coord);
            self.pixels[index] = rgba;
        }
    }

    /// Färbt alle Koordinaten mit der Farbe und dem aktuellen Alpha ein.
    pub fn add(&mut self, coords: &[PixelCoord], color: RoiColor) {
        let rgba = color.rgba255(self.alpha);
        self.write(coords, rgba);
    }

    /// Setzt alle Koordinaten auf transparent, unabhängig von der Farbe.
    pub fn erase(&mut self, coords: &[PixelCoord]) {
        self.write(coords, TRANSPARENT);
    }

    /// Alle Pixel, deren RGBA exakt der Farbe beim aktuellen Alpha entspricht.
    pub fn coordinates_of(&self, color: RoiColor) -> Vec<PixelCoord> {
        let rgba = color.rgba255(self.alpha);
        self.coords_where(|pixel| *pixel == rgba)
    }

    /// Alle Pixel, die zu irgendeiner ROI gehören.
    pub fn all_roi_coordinates(&self) -> Vec<PixelCoord> {
        self.coords_where(|pixel| *pixel != TRANSPARENT)
    }

    fn coords_where(&self, predicate: impl Fn(&[f64; 4]) -> bool) -> Vec<PixelCoord> {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, pixel)| predicate(pixel))
            .map(|(index, _)| PixelCoord::new(index / self.width, index % self.width))
            .collect()
    }

    /// Setzt ein neues Alpha und überschreibt den Alpha-Kanal aller ROI-Pixel.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
        let alpha255 = self.alpha255();
        for pixel in self.pixels.iter_mut().filter(|p| **p != TRANSPARENT) {
            pixel[3] = alpha255;
        }
    }

    /// Löscht alle ROIs.
    pub fn delete_all(&mut self) {
        let coords = self.all_roi_coordinates();
        self.erase(&coords);
    }

    /// Löscht alle Pixel einer Farbe.
    pub fn delete_color(&mut self, color: RoiColor) {
        let coords = self.coordinates_of(color);
        self.erase(&coords);
    }

    /// Maske mit `true` an allen Pixeln der Farbe.
    pub fn export_mask(&self, color: RoiColor) -> BoolMask {
        BoolMask::from_coords(self.height, self.width, &self.coordinates_of(color))
    }

    /// Übernimmt Pixel und Alpha eines anderen Rasters gleicher Form als tiefe Kopie.
    pub fn copy_from(&mut self, other: &SelectionRaster) {
        self.clone_from(other);
    }

    /// Ausschnitt des Rasters im Pan-Fenster, zeilenweise.
    pub fn window(&self, slice: &PanSlice) -> Vec<[f64; 4]> {
        let rows = slice.rows.start.min(self.height)..slice.rows.end.min(self.height);
        let cols = slice.cols.start.min(self.width)..slice.cols.end.min(self.width);
        rows.flat_map(|row| {
            let start = row * self.width;
            self.pixels[start + cols.start..start + cols.end].iter().copied()
        })
        .collect()
    }
}

//! Bildstapel einer Ansicht mit Viewport, Farbzustand und Selektionsraster.
//!
//! Ein Subset teilt die Bildliste des Elternstapels über `Arc`,
//! besitzt aber ein eigenes, unabhängiges Selektionsraster.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Result};
use glam::DVec2;

use super::color::RoiColor;
use super::error::RoiError;
use super::image::SpectImage;
use super::mask::BoolMask;
use super::pixel_grid::{PanEdges, PanSlice, PixelCoord};
use super::selection_raster::SelectionRaster;
use super::selection_type::SelectionType;
use super::viewport::Viewport;

/// Achsen-Transformationen der Anzeige.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transforms {
    /// x-Achse spiegeln
    pub flip_x: bool,
    /// y-Achse spiegeln
    pub flip_y: bool,
    /// x und y vertauschen
    pub swap_xy: bool,
}

/// Bildstapel einer Ansicht.
#[derive(Debug, Clone)]
pub struct ImageSet {
    images: Arc<Vec<SpectImage>>,
    current_image_index: usize,
    color: RoiColor,
    selection_type: SelectionType,
    viewport: Viewport,
    transforms: Transforms,
    raster: SelectionRaster,
}

impl ImageSet {
    /// Erstellt einen Bildstapel; alle Bilder werden auf die kleinste gemeinsame Form beschnitten.
    pub fn new(mut images: Vec<SpectImage>) -> Result<Self> {
        let Some((height, width)) = images.iter().map(SpectImage::shape).reduce(|a, b| {
            (a.0.min(b.0), a.1.min(b.1))
        }) else {
            bail!("Bildstapel benötigt mindestens ein Bild");
        };

        for image in &mut images {
            image.crop(height, width);
        }

        Ok(Self {
            images: Arc::new(images),
            current_image_index: 0,
            color: RoiColor::Red,
            selection_type: SelectionType::default(),
            viewport: Viewport::new(width, height),
            transforms: Transforms::default(),
            raster: SelectionRaster::new(height, width),
        })
    }

    /// Lädt alle Bilder; nicht lesbare Dateien werden mit Warnung übersprungen.
    pub fn open<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let images: Vec<SpectImage> = paths
            .iter()
            .filter_map(|path| match SpectImage::open(path.as_ref()) {
                Ok(image) => Some(image),
                Err(e) => {
                    log::warn!("Bild {} nicht lesbar: {:#}", path.as_ref().display(), e);
                    None
                }
            })
            .collect();
        Self::new(images)
    }

    /// Erstellt ein Subset: gleiche Bilder, kopierter Anzeigezustand, leeres Raster.
    pub fn subset(&self) -> Self {
        let (height, width) = self.shape();
        let mut raster = SelectionRaster::new(height, width);
        raster.set_alpha(self.alpha());
        Self {
            images: Arc::clone(&self.images),
            current_image_index: self.current_image_index,
            color: self.color,
            selection_type: self.selection_type,
            viewport: self.viewport.clone(),
            transforms: self.transforms,
            raster,
        }
    }

    /// `true`, wenn beide Stapel dieselbe Bildliste teilen.
    pub fn shares_images_with(&self, other: &ImageSet) -> bool {
        Arc::ptr_eq(&self.images, &other.images)
    }

    // ── Bilder ──────────────────────────────────────────────────────

    /// Alle Bilder des Stapels.
    pub fn images(&self) -> &[SpectImage] {
        &self.images
    }

    /// Basis-Dateinamen aller Bilder.
    pub fn file_names(&self) -> Vec<String> {
        self.images.iter().map(|i| i.name().to_string()).collect()
    }

    /// Gemeinsame Form `(H, W)`.
    pub fn shape(&self) -> (usize, usize) {
        self.raster.shape()
    }

    pub fn current_image_index(&self) -> usize {
        self.current_image_index
    }

    /// Wählt das angezeigte Bild; `false` bei ungültigem Index.
    pub fn select_image(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current_image_index = index;
        true
    }

    /// Aktuell angezeigtes Bild.
    pub fn current_image(&self) -> &SpectImage {
        &self.images[self.current_image_index]
    }

    // ── Farbe und Formtyp ───────────────────────────────────────────

    /// Aktuelle ROI-Farbe.
    pub fn color(&self) -> RoiColor {
        self.color
    }

    /// Setzt die Farbe über einen (auch negativen) Index, modulo Tabellenlänge.
    pub fn set_color_index(&mut self, index: isize) {
        self.color = RoiColor::from_index_wrapping(index);
    }

    pub fn set_color(&mut self, color: RoiColor) {
        self.color = color;
    }

    /// `true`, wenn mit dem Radierer gezeichnet wird.
    pub fn is_erasing(&self) -> bool {
        self.color.is_eraser()
    }

    /// Aktueller Formtyp.
    pub fn selection_type(&self) -> SelectionType {
        self.selection_type
    }

    /// Setzt den Formtyp über einen (auch negativen) Index, modulo 3.
    pub fn set_selection_index(&mut self, index: isize) {
        self.selection_type = SelectionType::from_index_wrapping(index);
    }

    // ── Viewport ────────────────────────────────────────────────────

    /// Zoom/Pan-Zustand.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    /// Setzt den Zoom (>= 1.0).
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), RoiError> {
        self.viewport.set_zoom(zoom)
    }

    pub fn center(&self) -> DVec2 {
        self.viewport.center()
    }

    /// Setzt das Pan-Zentrum; Punkte außerhalb des Bildes werden abgelehnt.
    pub fn set_center(&mut self, point: DVec2) -> Result<(), RoiError> {
        self.viewport.set_center(point)
    }

    pub fn reset_center(&mut self) {
        self.viewport.reset_center();
    }

    /// Kanten des Pan-Fensters.
    pub fn edges(&self) -> PanEdges {
        self.viewport.edges()
    }

    /// Zeilen-/Spaltenbereich des Pan-Fensters.
    pub fn pan_slice(&self) -> PanSlice {
        self.viewport.pan_slice()
    }

    /// Grauwerte des aktuellen Bildes im Pan-Fenster.
    pub fn pan_image_window(&self) -> Vec<f32> {
        self.current_image().window(&self.pan_slice())
    }

    /// RGBA-Werte des Selektionsrasters im Pan-Fenster.
    pub fn pan_roi_window(&self) -> Vec<[f64; 4]> {
        self.raster.window(&self.pan_slice())
    }

    // ── Transformationen ────────────────────────────────────────────

    pub fn transforms(&self) -> Transforms {
        self.transforms
    }

    pub fn set_transforms(&mut self, transforms: Transforms) {
        self.transforms = transforms;
    }

    // ── Selektionsraster ────────────────────────────────────────────

    /// Lesezugriff auf das Selektionsraster.
    pub fn raster(&self) -> &SelectionRaster {
        &self.raster
    }

    /// Ersetzt das eigene Raster durch eine tiefe Kopie.
    pub fn copy_raster_from(&mut self, other: &SelectionRaster) {
        self.raster.copy_from(other);
    }

    pub fn alpha(&self) -> f64 {
        self.raster.alpha()
    }

    /// Setzt Alpha und passt die Deckkraft aller ROI-Pixel an.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.raster.set_alpha(alpha);
    }

    /// Färbt Koordinaten ein; der Radierer löscht stattdessen.
    pub fn add_coords(&mut self, coords: &[PixelCoord], color: RoiColor) {
        if color.is_eraser() {
            self.raster.erase(coords);
        } else {
            self.raster.add(coords, color);
        }
    }

    /// Löscht Koordinaten unabhängig von ihrer Farbe.
    pub fn erase_coords(&mut self, coords: &[PixelCoord]) {
        self.raster.erase(coords);
    }

    /// Pixel, die exakt die Farbe beim aktuellen Alpha tragen.
    pub fn coordinates_of_color(&self, color: RoiColor) -> Vec<PixelCoord> {
        self.raster.coordinates_of(color)
    }

    pub fn delete_rois_with_color(&mut self, color: RoiColor) {
        self.raster.delete_color(color);
    }

    pub fn delete_all_rois(&mut self) {
        self.raster.delete_all();
    }

    /// Exportmaske einer Farbe.
    pub fn export_mask(&self, color: RoiColor) -> BoolMask {
        self.raster.export_mask(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_set(height: usize, width: usize) -> ImageSet {
        let image = SpectImage::from_raw("a.png", height, width, vec![0.0; height * width])
            .expect("Größe passt");
        ImageSet::new(vec![image]).expect("Bildstapel gültig")
    }

    #[test]
    fn new_crops_images_to_common_shape() {
        let a = SpectImage::from_raw("a.png", 64, 40, vec![1.0; 64 * 40]).expect("Größe passt");
        let b = SpectImage::from_raw("b.png", 70, 32, vec![2.0; 70 * 32]).expect("Größe passt");

        let set = ImageSet::new(vec![a, b]).expect("Bildstapel gültig");

        assert_eq!(set.shape(), (64, 32));
        assert!(set.images().iter().all(|i| i.shape() == (64, 32)));
        assert_eq!(set.file_names(), vec!["a.png", "b.png"]);
        assert_eq!(set.center(), DVec2::new(16.0, 32.0));
    }

    #[test]
    fn new_without_images_fails() {
        assert!(ImageSet::new(Vec::new()).is_err());
    }

    #[test]
    fn subset_shares_images_but_not_raster() {
        let mut parent = test_set(64, 32);
        parent.set_zoom(2.0).expect("Zoom gültig");
        parent.set_color_index(3);
        parent.set_alpha(0.5);
        parent.add_coords(&[PixelCoord::new(1, 1)], RoiColor::Red);

        let subset = parent.subset();

        assert!(subset.shares_images_with(&parent));
        assert_eq!(subset.zoom(), 2.0);
        assert_eq!(subset.color(), RoiColor::LightCyan);
        assert_eq!(subset.alpha(), 0.5);
        assert!(subset.raster().all_roi_coordinates().is_empty());
    }

    #[test]
    fn eraser_color_routes_add_to_erase() {
        let mut set = test_set(8, 8);
        let coords = [PixelCoord::new(2, 3)];
        set.add_coords(&coords, RoiColor::Red);

        set.add_coords(&coords, RoiColor::Eraser);

        assert!(set.raster().all_roi_coordinates().is_empty());
    }

    #[test]
    fn select_image_rejects_invalid_index() {
        let mut set = test_set(8, 8);
        assert!(set.select_image(0));
        assert!(!set.select_image(1));
        assert_eq!(set.current_image_index(), 0);
    }

    #[test]
    fn pan_windows_follow_zoom() {
        let mut set = test_set(64, 32);
        set.set_zoom(2.0).expect("Zoom gültig");
        set.set_center(DVec2::new(24.0, 48.0)).expect("Zentrum im Bild");
        set.add_coords(&[PixelCoord::new(32, 16)], RoiColor::Red);

        assert_eq!(set.pan_image_window().len(), 32 * 16);
        let roi = set.pan_roi_window();
        assert_eq!(roi.len(), 32 * 16);
        assert_eq!(roi[0], [255.0, 0.0, 0.0, 255.0]);
    }
}

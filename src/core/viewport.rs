//! Viewport-Zustand: Zoom und Pan-Zentrum über einem Bild fester Größe.

use glam::DVec2;

use super::error::RoiError;
use super::pixel_grid::{self, PanEdges, PanSlice};

/// Zoom und Pan-Zentrum eines Bildstapels.
///
/// Das Zentrum wird stets so begrenzt, dass das Pan-Fenster im Bild bleibt.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    width: usize,
    height: usize,
    zoom: f64,
    center: DVec2,
}

impl Viewport {
    /// Kleinster erlaubter Zoom: bei 1.0 passt das ganze Bild ins Pan-Fenster.
    pub const ZOOM_MIN: f64 = 1.0;

    /// Erstellt einen Viewport mit Zoom 1.0, zentriert auf das Bild.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            zoom: Self::ZOOM_MIN,
            center: Self::image_center_of(width, height),
        }
    }

    fn image_center_of(width: usize, height: usize) -> DVec2 {
        DVec2::new(width as f64 / 2.0, height as f64 / 2.0)
    }

    /// Bildbreite in Pixeln.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bildhöhe in Pixeln.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Aktueller Zoom-Faktor.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Setzt den Zoom und begrenzt das Zentrum neu.
    ///
    /// Werte unter 1.0 (und NaN) werden abgelehnt, der alte Zoom bleibt.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), RoiError> {
        if !(zoom >= Self::ZOOM_MIN) {
            return Err(RoiError::InvalidZoom { requested: zoom });
        }
        self.zoom = zoom;
        if let Ok(center) = self.clamped(self.center) {
            self.center = center;
        }
        Ok(())
    }

    /// Pan-Zentrum in Vollbild-Koordinaten.
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Setzt das Pan-Zentrum; das Fenster wird an Bildkanten verschoben.
    pub fn set_center(&mut self, point: DVec2) -> Result<(), RoiError> {
        self.center = self.clamped(point)?;
        Ok(())
    }

    fn clamped(&self, point: DVec2) -> Result<DVec2, RoiError> {
        pixel_grid::clamp_center(
            point,
            self.width,
            self.height,
            self.pan_width(),
            self.pan_height(),
        )
    }

    /// Setzt das Zentrum auf die Bildmitte zurück.
    pub fn reset_center(&mut self) {
        self.center = self.image_center();
    }

    /// Bildmitte `(W/2, H/2)`.
    pub fn image_center(&self) -> DVec2 {
        Self::image_center_of(self.width, self.height)
    }

    /// Halbe Bildausdehnung `(W/2, H/2)` als Radius.
    pub fn image_radius(&self) -> DVec2 {
        self.image_center()
    }

    /// Halbe Breite des Pan-Fensters.
    pub fn pan_width(&self) -> f64 {
        pixel_grid::pan_width(self.zoom, self.width)
    }

    /// Halbe Höhe des Pan-Fensters.
    pub fn pan_height(&self) -> f64 {
        pixel_grid::pan_height(self.zoom, self.height)
    }

    /// Gerundete Kanten des Pan-Fensters.
    pub fn edges(&self) -> PanEdges {
        pixel_grid::pan_edges(self.center, self.pan_width(), self.pan_height())
    }

    /// Zeilen-/Spaltenbereich des Pan-Fensters.
    pub fn pan_slice(&self) -> PanSlice {
        self.edges().slice()
    }

    /// Versatz, um eine Pan-lokale Form in Vollbild-Koordinaten zu verschieben.
    pub fn full_view_delta(&self) -> DVec2 {
        pixel_grid::full_view_delta(
            self.image_center(),
            self.center,
            DVec2::new(self.pan_width(), self.pan_height()),
            self.image_radius(),
        )
    }

    /// Begrenzt eine Zeiger-Position auf das aktuelle Pan-Fenster.
    pub fn clamp_to_pan(&self, point: DVec2) -> DVec2 {
        pixel_grid::clamp_to_pan(point, self.pan_width(), self.pan_height())
    }
}

//! ROI-Werkzeuge für Rechteck, Polygon und Stift.
//!
//! Ein Werkzeug lebt nur während einer Zeichen-Geste. Es sammelt eingerastete
//! Punkte in Pan-lokalen Koordinaten und liefert beim Beenden ein
//! `ToolResult` als reine Daten; das Einfärben erfolgt zentral im Use-Case.

/// Stift-Werkzeug (Einzelpixel).
pub mod pencil;
/// Polygon-Werkzeug mit Live-Vorschaupunkt.
pub mod polygon;
/// Rechteck-Werkzeug mit Ankerpixel.
pub mod rectangle;

use std::collections::BTreeSet;

use glam::DVec2;

use crate::core::{
    rasterize_translated, snap_to_pixel, PixelCoord, RoiError, SelectionType, TranslationGuard,
};

pub use pencil::PencilTool;
pub use polygon::PolygonTool;
pub use rectangle::RectangleTool;

// ── Typen ────────────────────────────────────────────────────────

/// Bildgröße, gegen die Zeigerpositionen eingerastet werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapGrid {
    pub width: usize,
    pub height: usize,
}

impl SnapGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Rastet einen Punkt auf die Pixelkante ein.
    pub fn snap(&self, point: DVec2) -> DVec2 {
        snap_to_pixel(point, self.width, self.height)
    }
}

/// Ergebnis einer beendeten Geste in Pan-lokalen Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResult {
    /// Geschlossene Form, wird per Ray-Casting rasterisiert
    Shape(Vec<DVec2>),
    /// Stiftpunkte, jeder Punkt ist bereits genau ein Pixel
    Points(Vec<DVec2>),
}

impl ToolResult {
    /// Verschiebt das Ergebnis um `delta` ins Vollbild und liefert die Pixel.
    ///
    /// Pixel außerhalb von `height × width` entfallen.
    pub fn into_pixels(self, delta: DVec2, height: usize, width: usize) -> Vec<PixelCoord> {
        let inside = |coord: &PixelCoord| coord.row < height && coord.col < width;
        match self {
            ToolResult::Shape(mut vertices) => rasterize_translated(&mut vertices, delta)
                .into_iter()
                .filter(inside)
                .collect(),
            ToolResult::Points(mut points) => {
                let moved = TranslationGuard::new(&mut points, delta);
                let unique: BTreeSet<PixelCoord> = moved
                    .iter()
                    .filter_map(|point| pencil_pixel(*point))
                    .filter(inside)
                    .collect();
                unique.into_iter().collect()
            }
        }
    }
}

/// Zeile aus dem ganzzahligen Anteil von `y`, Spalte aufgerundet aus `x`.
fn pencil_pixel(point: DVec2) -> Option<PixelCoord> {
    let row = point.y.trunc();
    let col = point.x.ceil();
    if row < 0.0 || col < 0.0 {
        return None;
    }
    Some(PixelCoord::new(row as usize, col as usize))
}

/// Aktive Zeichen-Geste. Die Menge der Formen ist geschlossen.
#[derive(Debug, Clone, PartialEq)]
pub enum RoiTool {
    Polygon(PolygonTool),
    Rectangle(RectangleTool),
    Pencil(PencilTool),
}

impl RoiTool {
    /// Startet eine Geste der gewählten Form am Zeigerpunkt.
    pub fn start(kind: SelectionType, point: DVec2, grid: SnapGrid) -> Self {
        match kind {
            SelectionType::FilledPolygon => RoiTool::Polygon(PolygonTool::start(point, grid)),
            SelectionType::FilledRectangle => {
                RoiTool::Rectangle(RectangleTool::start(point, grid))
            }
            SelectionType::Pencil => RoiTool::Pencil(PencilTool::start(point, grid)),
        }
    }

    /// Formtyp der Geste.
    pub fn selection_type(&self) -> SelectionType {
        match self {
            RoiTool::Polygon(_) => SelectionType::FilledPolygon,
            RoiTool::Rectangle(_) => SelectionType::FilledRectangle,
            RoiTool::Pencil(_) => SelectionType::Pencil,
        }
    }

    /// Weiterer Klick: Polygon-Eckpunkt oder Stiftpixel; beim Rechteck wirkungslos.
    pub fn continue_at(&mut self, point: DVec2) {
        match self {
            RoiTool::Polygon(tool) => tool.continue_at(point),
            RoiTool::Rectangle(_) => {}
            RoiTool::Pencil(tool) => tool.continue_at(point),
        }
    }

    /// Mausbewegung: Polygon-Vorschau oder Rechteck-Ausdehnung; beim Stift wirkungslos.
    pub fn extend(&mut self, point: DVec2) {
        match self {
            RoiTool::Polygon(tool) => tool.extend(point),
            RoiTool::Rectangle(tool) => tool.extend(point),
            RoiTool::Pencil(_) => {}
        }
    }

    /// Punkte für die Vorschau-Darstellung.
    pub fn preview(&self) -> Vec<DVec2> {
        match self {
            RoiTool::Polygon(tool) => tool.points().to_vec(),
            RoiTool::Rectangle(tool) => tool.corners().to_vec(),
            RoiTool::Pencil(tool) => tool.points().to_vec(),
        }
    }

    /// Beendet die Geste.
    pub fn stop(self) -> Result<ToolResult, RoiError> {
        match self {
            RoiTool::Polygon(tool) => tool.stop().map(ToolResult::Shape),
            RoiTool::Rectangle(tool) => Ok(ToolResult::Shape(tool.stop())),
            RoiTool::Pencil(tool) => Ok(ToolResult::Points(tool.stop())),
        }
    }
}

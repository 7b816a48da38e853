//! Polygon-Werkzeug: Eckpunkte per Klick, Live-Vorschau per Mausbewegung.

use glam::DVec2;

use super::SnapGrid;
use crate::core::RoiError;

/// Zustand eines entstehenden Polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonTool {
    grid: SnapGrid,
    /// Eckpunkte in Einfügereihenfolge, ggf. mit Vorschaupunkt am Ende
    points: Vec<DVec2>,
    has_temp_point: bool,
}

impl PolygonTool {
    /// Beginnt ein Polygon mit einem eingerasteten Eckpunkt.
    pub fn start(point: DVec2, grid: SnapGrid) -> Self {
        Self {
            grid,
            points: vec![grid.snap(point)],
            has_temp_point: false,
        }
    }

    /// Setzt einen festen Eckpunkt.
    ///
    /// Ein zuvor gesetzter Vorschaupunkt bleibt als Eckpunkt stehen.
    pub fn continue_at(&mut self, point: DVec2) {
        self.points.push(self.grid.snap(point));
        self.has_temp_point = false;
    }

    /// Setzt den Vorschaupunkt an die Zeigerposition.
    pub fn extend(&mut self, point: DVec2) {
        self.points.push(self.grid.snap(point));
        if self.points.len() > 2 && self.has_temp_point {
            let previous = self.points.len() - 2;
            self.points.remove(previous);
        }
        self.has_temp_point = true;
    }

    /// Aktuelle Eckpunkte inklusive Vorschaupunkt.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn has_temp_point(&self) -> bool {
        self.has_temp_point
    }

    /// Schließt das Polygon; der Vorschaupunkt entfällt.
    pub fn stop(mut self) -> Result<Vec<DVec2>, RoiError> {
        if self.has_temp_point {
            self.points.pop();
        }
        if self.points.len() <= 2 {
            return Err(RoiError::InsufficientVertices {
                count: self.points.len(),
            });
        }
        Ok(self.points)
    }
}

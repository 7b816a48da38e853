//! Rechteck-Werkzeug: fester Ankerpixel, gegenüberliegende Ecke folgt dem Zeiger.

use glam::DVec2;

use super::SnapGrid;

/// Zustand eines entstehenden Rechtecks.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleTool {
    grid: SnapGrid,
    anchor: DVec2,
    min: DVec2,
    max: DVec2,
}

/// Achsenweise Ausdehnung: ab dem Anker nach vorn inklusive Zeigerpixel,
/// davor bis einschließlich Ankerpixel.
fn extend_axis(point: f64, anchor: f64) -> (f64, f64) {
    if point >= anchor {
        (anchor, point + 1.0)
    } else {
        (point, anchor + 1.0)
    }
}

impl RectangleTool {
    /// Beginnt ein 1×1-Rechteck am eingerasteten Startpixel.
    pub fn start(point: DVec2, grid: SnapGrid) -> Self {
        let anchor = grid.snap(point);
        Self {
            grid,
            anchor,
            min: anchor,
            max: anchor + DVec2::ONE,
        }
    }

    /// Berechnet die gegenüberliegende Ecke aus der Zeigerposition neu.
    pub fn extend(&mut self, point: DVec2) {
        let point = self.grid.snap(point);
        let (x1, x2) = extend_axis(point.x, self.anchor.x);
        let (y1, y2) = extend_axis(point.y, self.anchor.y);
        self.min = DVec2::new(x1, y1);
        self.max = DVec2::new(x2, y2);
    }

    pub fn anchor(&self) -> DVec2 {
        self.anchor
    }

    /// Eckpunkte im Umlaufsinn `(x1,y1) (x2,y1) (x2,y2) (x1,y2)`.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.min,
            DVec2::new(self.max.x, self.min.y),
            self.max,
            DVec2::new(self.min.x, self.max.y),
        ]
    }

    /// Schließt das Rechteck mit der zuletzt berechneten Ausdehnung.
    pub fn stop(self) -> Vec<DVec2> {
        self.corners().to_vec()
    }
}

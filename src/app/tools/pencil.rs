//! Stift-Werkzeug: wählt einzelne Pixel aus.

use glam::DVec2;

use super::SnapGrid;

/// Versatz vom eingerasteten Punkt zur gespeicherten Stiftposition.
const CENTER_SHIFT: f64 = 0.5;

/// Gesammelte Stiftpunkte einer Geste.
#[derive(Debug, Clone, PartialEq)]
pub struct PencilTool {
    grid: SnapGrid,
    points: Vec<DVec2>,
}

impl PencilTool {
    /// Beginnt mit dem ersten Stiftpunkt.
    pub fn start(point: DVec2, grid: SnapGrid) -> Self {
        let mut tool = Self {
            grid,
            points: Vec::new(),
        };
        tool.add_point(point);
        tool
    }

    /// Fügt einen weiteren Stiftpunkt hinzu.
    pub fn continue_at(&mut self, point: DVec2) {
        self.add_point(point);
    }

    fn add_point(&mut self, point: DVec2) {
        self.points
            .push(self.grid.snap(point) + DVec2::splat(CENTER_SHIFT));
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Beendet die Geste und liefert die gespeicherten Positionen.
    pub fn stop(self) -> Vec<DVec2> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_snapped_and_shifted() {
        let mut tool = PencilTool::start(DVec2::new(3.5, 1.5), SnapGrid::new(16, 16));
        tool.continue_at(DVec2::new(4.6, 6.6));

        assert_eq!(
            tool.stop(),
            vec![DVec2::new(4.0, 2.0), DVec2::new(5.0, 7.0)]
        );
    }
}

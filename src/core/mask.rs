//! Boolesche Pixelmaske `H × W` für Export und Import von ROIs.

use super::pixel_grid::PixelCoord;

/// Zeilenweise gespeicherte boolesche Maske.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolMask {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl BoolMask {
    /// Leere Maske (alle Pixel `false`).
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![false; height * width],
        }
    }

    /// Baut eine Maske aus vorhandenen Zellen; `None` bei falscher Länge.
    pub fn from_cells(height: usize, width: usize, cells: Vec<bool>) -> Option<Self> {
        (cells.len() == height * width).then_some(Self {
            height,
            width,
            cells,
        })
    }

    /// Maske mit `true` an allen angegebenen Koordinaten.
    pub fn from_coords(height: usize, width: usize, coords: &[PixelCoord]) -> Self {
        let mut mask = Self::new(height, width);
        for &coord in coords {
            mask.set(coord, true);
        }
        mask
    }

    /// Form `(H, W)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn index(&self, coord: PixelCoord) -> usize {
        assert!(
            coord.row < self.height && coord.col < self.width,
            "Pixel ({}, {}) außerhalb der Maske {}×{}",
            coord.row,
            coord.col,
            self.height,
            self.width
        );
        coord.row * self.width + coord.col
    }

    /// Wert an einer Pixel-Koordinate.
    pub fn get(&self, coord: PixelCoord) -> bool {
        self.cells[self.index(coord)]
    }

    /// Setzt den Wert an einer Pixel-Koordinate.
    pub fn set(&mut self, coord: PixelCoord, value: bool) {
        let index = self.index(coord);
        self.cells[index] = value;
    }

    /// Zellen in Zeilenreihenfolge.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Anzahl gesetzter Pixel.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&value| value).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Gesetzte Pixel, zeilenweise sortiert.
    pub fn coords(&self) -> Vec<PixelCoord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &value)| value)
            .map(|(index, _)| PixelCoord::new(index / self.width, index % self.width))
            .collect()
    }
}

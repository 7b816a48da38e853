//! Rasterisierung geschlossener Formen per Ray-Casting.
//!
//! Eine Form wird über ihrer Bounding-Box auf ganzzahlige Gitterpunkte
//! getestet. Gitterpunkt `(x, y)` steht für Pixel `(row = y, col = x)`.

use std::ops::{Deref, Range};

use glam::DVec2;

use super::pixel_grid::PixelCoord;

/// Ganzzahlige Bounding-Box einer Form: `floor` unten, `ceil` oben (exklusiv).
pub fn bounding_grid(vertices: &[DVec2]) -> Option<(Range<i64>, Range<i64>)> {
    let first = *vertices.first()?;
    let (min, max) = vertices
        .iter()
        .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)));

    let x = min.x.floor() as i64..max.x.ceil() as i64;
    let y = min.y.floor() as i64..max.y.ceil() as i64;
    Some((x, y))
}

/// Ray-Casting-Test für einen Punkt.
///
/// Zwei Varianten zählen Kantenschnitte links vom Punkt, einmal mit `<`
/// und einmal mit `<=`. Ein Punkt gilt als enthalten, wenn eine der beiden
/// Varianten eine ungerade Anzahl liefert; dadurch zählen Randpunkte mit.
pub fn point_in_shape(vertices: &[DVec2], point: DVec2) -> bool {
    let Some(&last) = vertices.last() else {
        return false;
    };

    let (xa, ya) = (point.x, point.y);
    let mut strict = false;
    let mut inclusive = false;
    let mut previous = last;

    for &current in vertices {
        let (xi, yi) = (current.x, current.y);
        let (xj, yj) = (previous.x, previous.y);

        let straddles = (yi < ya && yj >= ya) || (yj < ya && yi >= ya);
        if straddles && (xi <= xa || xj <= xa) {
            let crossing = xi + (ya - yi) / (yj - yi) * (xj - xi);
            strict ^= crossing < xa;
            inclusive ^= crossing <= xa;
        }

        previous = current;
    }

    strict || inclusive
}

/// Boolesche Enthaltensein-Maske über dem Gitter einer Form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainmentMask {
    x_range: Range<i64>,
    y_range: Range<i64>,
    cells: Vec<bool>,
}

impl ContainmentMask {
    /// Testet jeden Gitterpunkt der Bounding-Box gegen die Form.
    pub fn from_shape(vertices: &[DVec2]) -> Self {
        let Some((x_range, y_range)) = bounding_grid(vertices) else {
            return Self {
                x_range: 0..0,
                y_range: 0..0,
                cells: Vec::new(),
            };
        };

        let mut cells = Vec::with_capacity(x_range.clone().count() * y_range.clone().count());
        for y in y_range.clone() {
            for x in x_range.clone() {
                cells.push(point_in_shape(vertices, DVec2::new(x as f64, y as f64)));
            }
        }

        Self {
            x_range,
            y_range,
            cells,
        }
    }

    /// Spaltenbereich (x) des Gitters.
    pub fn x_range(&self) -> Range<i64> {
        self.x_range.clone()
    }

    /// Zeilenbereich (y) des Gitters.
    pub fn y_range(&self) -> Range<i64> {
        self.y_range.clone()
    }

    /// `true`, wenn Gitterpunkt `(x, y)` in der Form liegt. Außerhalb des Gitters `false`.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        if !self.x_range.contains(&x) || !self.y_range.contains(&y) {
            return false;
        }
        let width = self.x_range.clone().count();
        let index = (y - self.y_range.start) as usize * width + (x - self.x_range.start) as usize;
        self.cells[index]
    }

    /// Anzahl enthaltener Gitterpunkte.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&inside| inside).count()
    }

    /// Enthaltene Punkte als Pixel-Koordinaten, zeilenweise sortiert.
    ///
    /// Punkte mit negativer Zeile oder Spalte haben kein Pixel und entfallen.
    pub fn pixels(&self) -> Vec<PixelCoord> {
        let width = self.x_range.clone().count();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &inside)| inside)
            .filter_map(|(index, _)| {
                let x = self.x_range.start + (index % width) as i64;
                let y = self.y_range.start + (index / width) as i64;
                let col = usize::try_from(x).ok()?;
                let row = usize::try_from(y).ok()?;
                Some(PixelCoord::new(row, col))
            })
            .collect()
    }
}

/// Rasterisiert eine geschlossene Form zu Pixel-Koordinaten.
pub fn rasterize(vertices: &[DVec2]) -> Vec<PixelCoord> {
    let mask = ContainmentMask::from_shape(vertices);
    log::debug!(
        "Rasterisiere {} Eckpunkte über {}×{} Gitter: {} Pixel",
        vertices.len(),
        mask.x_range.clone().count(),
        mask.y_range.clone().count(),
        mask.count()
    );
    mask.pixels()
}

/// Verschiebt Punkte für die Lebensdauer des Guards um `delta`.
///
/// Beim Drop werden die ursprünglichen Positionen exakt wiederhergestellt,
/// auch bei vorzeitigem Verlassen des Scopes.
pub struct TranslationGuard<'a> {
    points: &'a mut [DVec2],
    original: Vec<DVec2>,
}

impl<'a> TranslationGuard<'a> {
    /// Verschiebt alle Punkte um `delta`.
    pub fn new(points: &'a mut [DVec2], delta: DVec2) -> Self {
        let original = points.to_vec();
        for point in points.iter_mut() {
            *point += delta;
        }
        Self { points, original }
    }
}

impl Deref for TranslationGuard<'_> {
    type Target = [DVec2];

    fn deref(&self) -> &[DVec2] {
        self.points
    }
}

impl Drop for TranslationGuard<'_> {
    fn drop(&mut self) {
        self.points.copy_from_slice(&self.original);
    }
}

/// Verschiebt eine Pan-lokale Form temporär um `delta` und rasterisiert sie.
pub fn rasterize_translated(vertices: &mut [DVec2], delta: DVec2) -> Vec<PixelCoord> {
    let moved = TranslationGuard::new(vertices, delta);
    rasterize(&moved)
}

//! Pixel-Raster und Koordinatenmodell.
//!
//! Reine Funktionen zwischen kontinuierlichen Zeiger-Koordinaten,
//! eingerasteten Pixel-Koordinaten, Pan-lokalen Koordinaten und
//! Vollbild-Koordinaten.
//!
//! Konvention: Pixel `(row, col)` belegt das Quadrat um `(col, row)` mit
//! halboffener Ausdehnung `[col-0.5, col+0.5) × [row-0.5, row+0.5)`.

use glam::DVec2;

use super::error::RoiError;

/// Ganzzahlige Pixel-Koordinate in das Selektionsraster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelCoord {
    /// Zeile (Bild-y)
    pub row: usize,
    /// Spalte (Bild-x)
    pub col: usize,
}

impl PixelCoord {
    /// Erstellt eine Pixel-Koordinate aus Zeile und Spalte.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for PixelCoord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Gerundete Kanten des Pan-Fensters in Vollbild-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanEdges {
    /// Linke Kante (x)
    pub left: i64,
    /// Untere Kante (y)
    pub bottom: i64,
    /// Rechte Kante (x, exklusiv)
    pub right: i64,
    /// Obere Kante (y, exklusiv)
    pub top: i64,
}

impl PanEdges {
    /// Zeilen- und Spaltenbereich, mit dem ein Vollbild-Raster
    /// auf das Pan-Fenster zugeschnitten wird.
    pub fn slice(&self) -> PanSlice {
        let clamp = |value: i64| value.max(0) as usize;
        PanSlice {
            rows: clamp(self.bottom)..clamp(self.top),
            cols: clamp(self.left)..clamp(self.right),
        }
    }
}

/// Zeilen-/Spaltenbereich des Pan-Fensters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanSlice {
    /// Zeilenbereich (y)
    pub rows: std::ops::Range<usize>,
    /// Spaltenbereich (x)
    pub cols: std::ops::Range<usize>,
}

impl PanSlice {
    /// Anzahl Zeilen × Spalten.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }
}

/// Rastet eine Koordinate auf die Achse eines Pixel-Rasters ein.
///
/// `extent` ist die Bildausdehnung der Achse in Pixeln.
fn snap_axis(value: f64, extent: f64) -> f64 {
    if value <= 0.0 {
        return -0.5;
    }
    if value >= extent - 1.0 {
        return extent - 1.5;
    }

    let lo = value.floor();
    let hi = value.ceil();
    if hi - value <= 0.5 {
        lo + 0.5
    } else {
        lo - 0.5
    }
}

/// Rastet eine Zeiger-Koordinate auf die Pixel-Koordinate ein.
///
/// Werte `<= 0` werden auf den Außenrand `-0.5` gesetzt, Werte am oberen
/// Rand auf `extent - 1.5`. Gleichstände gehen an das niedrigere Pixel.
pub fn snap_to_pixel(point: DVec2, image_width: usize, image_height: usize) -> DVec2 {
    DVec2::new(
        snap_axis(point.x, image_width as f64),
        snap_axis(point.y, image_height as f64),
    )
}

/// Halbe Breite des Pan-Fensters: `image_width / 2 / zoom`.
pub fn pan_width(zoom: f64, image_width: usize) -> f64 {
    image_width as f64 / 2.0 / zoom
}

/// Halbe Höhe des Pan-Fensters: `image_height / 2 / zoom`.
pub fn pan_height(zoom: f64, image_height: usize) -> f64 {
    image_height as f64 / 2.0 / zoom
}

/// Prüft, ob ein Punkt inklusive Halbpixel-Rand im Bild liegt.
pub fn point_in_image(point: DVec2, image_width: usize, image_height: usize) -> bool {
    let in_width = (-0.5..=image_width as f64 + 0.5).contains(&point.x);
    let in_height = (-0.5..=image_height as f64 + 0.5).contains(&point.y);
    in_width && in_height
}

/// Begrenzt ein Pan-Zentrum so, dass das Pan-Fenster im Bild bleibt.
///
/// Horizontal gilt `[0, W]`, vertikal `[-0.5, H + 0.5]`.
/// Punkte außerhalb des Bildes werden mit [`RoiError::PointOutsideImage`] abgelehnt.
pub fn clamp_center(
    point: DVec2,
    image_width: usize,
    image_height: usize,
    pan_width: f64,
    pan_height: f64,
) -> Result<DVec2, RoiError> {
    if !point_in_image(point, image_width, image_height) {
        return Err(RoiError::PointOutsideImage {
            x: point.x,
            y: point.y,
        });
    }

    let width = image_width as f64;
    let height = image_height as f64;

    let x = if point.x - pan_width < 0.0 {
        pan_width
    } else if point.x + pan_width > width {
        width - pan_width
    } else {
        point.x
    };

    let y = if point.y - pan_height < -0.5 {
        pan_height
    } else if point.y + pan_height > height + 0.5 {
        height - pan_height
    } else {
        point.y
    };

    Ok(DVec2::new(x, y))
}

/// Kanten des Pan-Fensters, gerundet wie beim Anzeigen (Halbwerte zur geraden Zahl).
pub fn pan_edges(center: DVec2, pan_width: f64, pan_height: f64) -> PanEdges {
    let round = |value: f64| value.round_ties_even() as i64;
    PanEdges {
        left: round(center.x - pan_width),
        bottom: round(center.y - pan_height),
        right: round(center.x + pan_width),
        top: round(center.y + pan_height),
    }
}

/// Versatz von Pan-lokalen zu Vollbild-Koordinaten.
///
/// `dx = (x_radius - pan_width) + (pan_center.x - image_center.x)`, `dy` analog.
pub fn full_view_delta(
    image_center: DVec2,
    pan_center: DVec2,
    pan_size: DVec2,
    image_radius: DVec2,
) -> DVec2 {
    (image_radius - pan_size) + (pan_center - image_center)
}

/// Begrenzt Zeiger-Koordinaten auf das Pan-Fenster
/// `[-0.5, 2·pan_width − 1] × [-0.5, 2·pan_height − 1]`.
pub fn clamp_to_pan(point: DVec2, pan_width: f64, pan_height: f64) -> DVec2 {
    let right = (pan_width * 2.0 - 1.0).max(-0.5);
    let top = (pan_height * 2.0 - 1.0).max(-0.5);
    DVec2::new(point.x.clamp(-0.5, right), point.y.clamp(-0.5, top))
}

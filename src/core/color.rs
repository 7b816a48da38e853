//! Feste Farbtabelle der ROI-Labels.
//!
//! 14 auswählbare Farben plus der reservierte Eintrag `eraser`,
//! der beim Zeichnen Pixel löscht statt sie einzufärben.

use serde::{Deserialize, Serialize};

/// Farb-Label einer ROI. Reihenfolge entspricht dem Farbindex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoiColor {
    /// Rot
    Red,
    /// Braun
    Brown,
    /// Hellblau
    LightBlue,
    /// Helles Cyan
    LightCyan,
    /// Dunkelgrün
    DarkGreen,
    /// Gelb
    Yellow,
    /// Rosa
    Pink,
    /// Petrol
    Teal,
    /// Goldrute
    Goldenrod,
    /// Siena
    Sienna,
    /// Dunkelblau
    DarkBlue,
    /// Karmesin
    Crimson,
    /// Kastanienbraun
    Maroon,
    /// Violett
    Purple,
    /// Radierer (löscht Pixel)
    Eraser,
}

impl RoiColor {
    /// Alle Einträge in Index-Reihenfolge (inkl. Radierer).
    pub const ALL: [RoiColor; 15] = [
        RoiColor::Red,
        RoiColor::Brown,
        RoiColor::LightBlue,
        RoiColor::LightCyan,
        RoiColor::DarkGreen,
        RoiColor::Yellow,
        RoiColor::Pink,
        RoiColor::Teal,
        RoiColor::Goldenrod,
        RoiColor::Sienna,
        RoiColor::DarkBlue,
        RoiColor::Crimson,
        RoiColor::Maroon,
        RoiColor::Purple,
        RoiColor::Eraser,
    ];

    /// Anzahl der Einträge in der Farbtabelle.
    pub const COUNT: usize = Self::ALL.len();

    /// Farben, die als ROI gespeichert und exportiert werden (ohne Radierer).
    pub fn selectable() -> impl Iterator<Item = RoiColor> {
        Self::ALL.into_iter().filter(|color| !color.is_eraser())
    }

    /// Name der Farbe, wie er in ROI-Dateien als Schlüssel verwendet wird.
    pub fn name(self) -> &'static str {
        match self {
            RoiColor::Red => "red",
            RoiColor::Brown => "brown",
            RoiColor::LightBlue => "lightblue",
            RoiColor::LightCyan => "lightcyan",
            RoiColor::DarkGreen => "darkgreen",
            RoiColor::Yellow => "yellow",
            RoiColor::Pink => "pink",
            RoiColor::Teal => "teal",
            RoiColor::Goldenrod => "goldenrod",
            RoiColor::Sienna => "sienna",
            RoiColor::DarkBlue => "darkblue",
            RoiColor::Crimson => "crimson",
            RoiColor::Maroon => "maroon",
            RoiColor::Purple => "purple",
            RoiColor::Eraser => "eraser",
        }
    }

    /// Sucht eine Farbe anhand ihres Namens.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name() == name)
    }

    /// Position in der Farbtabelle.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&color| color == self)
            .unwrap_or_default()
    }

    /// Farbe zu einem beliebigen (auch negativen) Index, modulo Tabellenlänge.
    pub fn from_index_wrapping(index: isize) -> Self {
        Self::ALL[index.rem_euclid(Self::COUNT as isize) as usize]
    }

    /// `true` für den Radierer-Eintrag.
    pub fn is_eraser(self) -> bool {
        self == RoiColor::Eraser
    }

    /// RGB-Werte auf der Skala 0–255.
    pub fn rgb255(self) -> [f64; 3] {
        match self {
            RoiColor::Red => [255.0, 0.0, 0.0],
            RoiColor::Brown => [165.0, 42.0, 42.0],
            RoiColor::LightBlue => [173.0, 216.0, 230.0],
            RoiColor::LightCyan => [224.0, 255.0, 255.0],
            RoiColor::DarkGreen => [0.0, 100.0, 0.0],
            RoiColor::Yellow => [255.0, 255.0, 0.0],
            RoiColor::Pink => [255.0, 192.0, 203.0],
            RoiColor::Teal => [0.0, 0.50196 * 255.0, 0.50196 * 255.0],
            RoiColor::Goldenrod => [218.0, 165.0, 32.0],
            RoiColor::Sienna => [160.0, 82.0, 45.0],
            RoiColor::DarkBlue => [0.0, 0.0, 139.0],
            RoiColor::Crimson => [0.86275 * 255.0, 0.07843 * 255.0, 0.23529 * 255.0],
            RoiColor::Maroon => [176.0, 48.0, 96.0],
            RoiColor::Purple => [160.0, 32.0, 240.0],
            RoiColor::Eraser => [0.0, 0.0, 0.0],
        }
    }

    /// RGBA-Wert (0–255) für einen Alpha-Wert in `[0, 1]`.
    pub fn rgba255(self, alpha: f64) -> [f64; 4] {
        let [r, g, b] = self.rgb255();
        [r, g, b, alpha * 255.0]
    }
}

impl std::fmt::Display for RoiColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn color_table_has_fixed_order() {
        assert_eq!(RoiColor::COUNT, 15);
        assert_eq!(RoiColor::ALL[0], RoiColor::Red);
        assert_eq!(RoiColor::ALL[13], RoiColor::Purple);
        assert_eq!(RoiColor::ALL[14], RoiColor::Eraser);
        assert_eq!(RoiColor::selectable().count(), 14);
    }

    #[test]
    fn index_wraps_in_both_directions() {
        assert_eq!(RoiColor::from_index_wrapping(15), RoiColor::Red);
        assert_eq!(RoiColor::from_index_wrapping(-1), RoiColor::Eraser);
        assert_eq!(RoiColor::from_index_wrapping(16), RoiColor::Brown);
        assert_eq!(RoiColor::Teal.index(), 7);
    }

    #[test]
    fn names_round_trip() {
        for color in RoiColor::ALL {
            assert_eq!(RoiColor::from_name(color.name()), Some(color));
        }
        assert_eq!(RoiColor::from_name("magenta"), None);
    }

    #[test]
    fn rgb255_matches_reference_values() {
        assert_eq!(RoiColor::Brown.rgb255(), [165.0, 42.0, 42.0]);
        assert_eq!(RoiColor::Purple.rgb255(), [160.0, 32.0, 240.0]);

        let teal = RoiColor::Teal.rgb255();
        assert_relative_eq!(teal[1], 127.9998, epsilon = 1e-4);

        let crimson = RoiColor::Crimson.rgb255();
        assert_relative_eq!(crimson[0], 220.0012, epsilon = 1e-3);
        assert_relative_eq!(crimson[1], 19.9996, epsilon = 1e-3);
        assert_relative_eq!(crimson[2], 59.999, epsilon = 1e-3);
    }

    #[test]
    fn rgba255_scales_alpha() {
        assert_eq!(
            RoiColor::Brown.rgba255(0.75),
            [165.0, 42.0, 42.0, 191.25]
        );
        assert_eq!(RoiColor::Eraser.rgba255(0.25), [0.0, 0.0, 0.0, 63.75]);
    }
}

//! Art der ROI-Form, die beim nächsten Zeichnen entsteht.

use serde::{Deserialize, Serialize};

/// Formtyp einer neuen ROI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectionType {
    /// Gefülltes Rechteck
    #[default]
    FilledRectangle,
    /// Gefülltes Polygon
    FilledPolygon,
    /// Einzelne Pixel (Stift)
    Pencil,
}

impl SelectionType {
    /// Alle Formtypen in Index-Reihenfolge.
    pub const ALL: [SelectionType; 3] = [
        SelectionType::FilledRectangle,
        SelectionType::FilledPolygon,
        SelectionType::Pencil,
    ];

    /// Formtyp zu einem beliebigen (auch negativen) Index, modulo 3.
    pub fn from_index_wrapping(index: isize) -> Self {
        Self::ALL[index.rem_euclid(Self::ALL.len() as isize) as usize]
    }

    /// Position in [`SelectionType::ALL`].
    pub fn index(self) -> usize {
        match self {
            SelectionType::FilledRectangle => 0,
            SelectionType::FilledPolygon => 1,
            SelectionType::Pencil => 2,
        }
    }

    /// Anzeigename.
    pub fn label(self) -> &'static str {
        match self {
            SelectionType::FilledRectangle => "filled rectangle",
            SelectionType::FilledPolygon => "filled polygon",
            SelectionType::Pencil => "pencil",
        }
    }
}

//! Fehlertypen der ROI-Domäne.
//!
//! Alle Fehler nutzen `thiserror`; der Application-Layer reicht sie per `?`
//! als `anyhow::Error` weiter.

use thiserror::Error;

/// Fehler beim Zeichnen, Navigieren oder Laden von ROIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoiError {
    /// Polygon wurde mit weniger als drei Eckpunkten geschlossen
    #[error("Polygon benötigt mindestens 3 Eckpunkte, vorhanden: {count}")]
    InsufficientVertices {
        /// Anzahl der verbliebenen Eckpunkte
        count: usize,
    },

    /// Zoom-Faktor kleiner als 1.0 angefordert
    #[error("Ungültiger Zoom-Faktor {requested} (Minimum 1.0)")]
    InvalidZoom {
        /// Angeforderter Zoom
        requested: f64,
    },

    /// Pan-Zentrum liegt außerhalb des Bildes
    #[error("Punkt ({x}, {y}) liegt außerhalb des Bildes")]
    PointOutsideImage {
        /// X-Koordinate
        x: f64,
        /// Y-Koordinate
        y: f64,
    },

    /// ROI-Datei passt nicht zum geöffneten Bildstapel
    #[error("Inkompatible ROI-Datei: {0}")]
    IncompatibleArchive(#[from] ArchiveIncompatibility),
}

/// Grund, warum eine ROI-Datei abgelehnt wurde.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArchiveIncompatibility {
    /// Falsche Dateiendung
    #[error("{path} ist keine ROI-Auswahldatei")]
    NotAnArchive {
        /// Pfad der abgelehnten Datei
        path: String,
    },

    /// Gespeicherter Dateiname gehört zu keinem geöffneten Bild
    #[error("{name} ist kein geöffnetes Bild")]
    UnknownFile {
        /// Basis-Dateiname aus dem Archiv
        name: String,
    },

    /// Bildform weicht ab
    #[error("Bildform {found:?} passt nicht zur geöffneten Form {expected:?}")]
    ShapeMismatch {
        /// Form des geöffneten Bildstapels (H, W)
        expected: (usize, usize),
        /// Form aus dem Archiv
        found: (usize, usize),
    },

    /// Archiv oder Array-Eintrag nicht lesbar
    #[error("Archiv beschädigt: {reason}")]
    Malformed {
        /// Beschreibung des Problems
        reason: String,
    },
}

impl ArchiveIncompatibility {
    /// Kurzform für [`ArchiveIncompatibility::Malformed`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

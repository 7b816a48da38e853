//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die `app` und die Binary teilen.

pub mod options;

pub use options::EditorOptions;
pub use options::{PAN_STEP, ZOOM_STEP};

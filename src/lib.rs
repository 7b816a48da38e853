//! Spect ROI Editor Library.
//! Geometrie, Rasterisierung und Viewport-Logik für ROI-Auswahl auf Spektralbildern,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod archive;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, PanDirection, PointerButton, RoiGesture,
    UiState,
};
pub use archive::{read_roi_archive, write_roi_archive, RoiArchive};
pub use core::{
    BoolMask, ImageSet, PixelCoord, RoiColor, RoiError, SelectionRaster, SelectionType,
    SpectImage, Transforms, ViewId, ViewSet, Viewport,
};
pub use shared::EditorOptions;

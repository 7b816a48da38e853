//! Core-Domänentypen: Pixel-Raster, Viewport, Rasterisierung, Selektionsraster, Bildstapel.

pub mod color;
pub mod error;
pub mod image;
pub mod image_set;
pub mod mask;
/// Reine Koordinatenfunktionen
///
/// Einrasten von Zeiger-Koordinaten, Pan-Größe, Zentrums-Begrenzung
/// und Versatz zwischen Pan- und Vollbild-Koordinaten.
pub mod pixel_grid;
pub mod rasterize;
pub mod selection_raster;
pub mod selection_type;
pub mod view_set;
pub mod viewport;

pub use color::RoiColor;
pub use error::{ArchiveIncompatibility, RoiError};
pub use image::SpectImage;
pub use image_set::{ImageSet, Transforms};
pub use mask::BoolMask;
pub use pixel_grid::{snap_to_pixel, PanEdges, PanSlice, PixelCoord};
pub use rasterize::{rasterize, rasterize_translated, ContainmentMask, TranslationGuard};
pub use selection_raster::SelectionRaster;
pub use selection_type::SelectionType;
pub use view_set::{ViewId, ViewSet};
pub use viewport::Viewport;

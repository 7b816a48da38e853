//! Verbund aus Eltern-Bildstapel und Subsets mit Simultan-Modus.
//!
//! Im Simultan-Modus wird jede Änderung am Selektionsraster explizit auf
//! alle Ansichten wiederholt; jedes Raster bleibt eine eigene tiefe Kopie.

use indexmap::IndexMap;

use super::color::RoiColor;
use super::image_set::ImageSet;
use super::mask::BoolMask;
use super::pixel_grid::PixelCoord;

/// Adresse einer Ansicht im Verbund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewId {
    /// Eltern-Bildstapel (Ansicht 1)
    #[default]
    Parent,
    /// Subset mit Index in der Subset-Liste
    Subset(usize),
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewId::Parent => write!(f, "Ansicht 1"),
            ViewId::Subset(index) => write!(f, "Ansicht {}", index + 2),
        }
    }
}

/// Eltern-Bildstapel plus Subsets.
#[derive(Debug, Clone)]
pub struct ViewSet {
    parent: ImageSet,
    subsets: Vec<ImageSet>,
    simultaneous: bool,
}

impl ViewSet {
    /// Verbund mit nur einer Ansicht.
    pub fn new(parent: ImageSet) -> Self {
        Self {
            parent,
            subsets: Vec::new(),
            simultaneous: false,
        }
    }

    pub fn parent(&self) -> &ImageSet {
        &self.parent
    }

    pub fn subsets(&self) -> &[ImageSet] {
        &self.subsets
    }

    /// Anzahl Ansichten (Eltern + Subsets).
    pub fn view_count(&self) -> usize {
        1 + self.subsets.len()
    }

    /// Ansicht zu einer Adresse.
    pub fn view(&self, id: ViewId) -> Option<&ImageSet> {
        match id {
            ViewId::Parent => Some(&self.parent),
            ViewId::Subset(index) => self.subsets.get(index),
        }
    }

    /// Veränderbare Ansicht zu einer Adresse.
    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut ImageSet> {
        match id {
            ViewId::Parent => Some(&mut self.parent),
            ViewId::Subset(index) => self.subsets.get_mut(index),
        }
    }

    /// Alle gültigen Adressen in Reihenfolge.
    pub fn view_ids(&self) -> impl Iterator<Item = ViewId> {
        std::iter::once(ViewId::Parent).chain((0..self.subsets.len()).map(ViewId::Subset))
    }

    /// Wendet `apply` auf Eltern und alle Subsets an.
    pub fn for_each_view_mut(&mut self, mut apply: impl FnMut(&mut ImageSet)) {
        apply(&mut self.parent);
        for subset in &mut self.subsets {
            apply(subset);
        }
    }

    /// Legt ein Subset des Eltern-Stapels an und liefert seine Adresse.
    ///
    /// Bei aktivem Simultan-Modus startet es mit einer Kopie des Eltern-Rasters.
    pub fn create_subset(&mut self) -> ViewId {
        let mut subset = self.parent.subset();
        if self.simultaneous {
            subset.copy_raster_from(self.parent.raster());
        }
        self.subsets.push(subset);
        let id = ViewId::Subset(self.subsets.len() - 1);
        log::info!("{} angelegt", id);
        id
    }

    /// Entfernt ein Subset; nachfolgende Subsets rücken auf.
    pub fn remove_subset(&mut self, index: usize) -> Option<ImageSet> {
        (index < self.subsets.len()).then(|| self.subsets.remove(index))
    }

    pub fn is_simultaneous(&self) -> bool {
        self.simultaneous
    }

    /// Schaltet den Simultan-Modus.
    ///
    /// Beim Einschalten erhält jedes Subset eine Kopie des Eltern-Rasters.
    /// Beim Ausschalten bleiben gespiegelte Pixel erhalten.
    pub fn set_simultaneous(&mut self, enabled: bool) {
        self.simultaneous = enabled;
        if enabled {
            let source = self.parent.raster().clone();
            for subset in &mut self.subsets {
                subset.copy_raster_from(&source);
            }
        }
    }

    /// Färbt Koordinaten in der Ausgangsansicht ein, im Simultan-Modus in allen.
    ///
    /// Liefert `false`, wenn die Ausgangsansicht nicht existiert.
    pub fn add_roi(&mut self, origin: ViewId, coords: &[PixelCoord], color: RoiColor) -> bool {
        self.replay(origin, |set| set.add_coords(coords, color))
    }

    /// Löscht Koordinaten in der Ausgangsansicht, im Simultan-Modus in allen.
    pub fn erase_roi(&mut self, origin: ViewId, coords: &[PixelCoord]) -> bool {
        self.replay(origin, |set| set.erase_coords(coords))
    }

    fn replay(&mut self, origin: ViewId, mut edit: impl FnMut(&mut ImageSet)) -> bool {
        if self.view(origin).is_none() {
            return false;
        }
        if self.simultaneous {
            self.for_each_view_mut(edit);
        } else if let Some(set) = self.view_mut(origin) {
            edit(set);
        }
        true
    }

    /// Schlüssel einer Exportmaske: Farbname, für Subset `i` mit Suffix `i + 2`.
    pub fn mask_key(color: RoiColor, view: ViewId) -> String {
        match view {
            ViewId::Parent => color.name().to_string(),
            ViewId::Subset(index) => format!("{}{}", color.name(), index + 2),
        }
    }

    /// Eine Maske pro (Farbe, Ansicht) über die ganze Farbtabelle, Radierer eingeschlossen.
    pub fn export_all(&self) -> IndexMap<String, BoolMask> {
        let mut masks = IndexMap::new();
        for color in RoiColor::ALL {
            for id in self.view_ids() {
                if let Some(set) = self.view(id) {
                    masks.insert(Self::mask_key(color, id), set.export_mask(color));
                }
            }
        }
        masks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SpectImage;

    fn view_set(subsets: usize) -> ViewSet {
        let image = SpectImage::from_raw("a.png", 64, 32, vec![0.0; 64 * 32]).expect("Größe passt");
        let mut views = ViewSet::new(ImageSet::new(vec![image]).expect("Bildstapel gültig"));
        for _ in 0..subsets {
            views.create_subset();
        }
        views
    }

    const TARGET: [PixelCoord; 1] = [PixelCoord::new(42, 12)];

    #[test]
    fn add_without_simultaneous_touches_only_origin() {
        let mut views = view_set(1);

        assert!(views.add_roi(ViewId::Parent, &TARGET, RoiColor::Red));

        assert_eq!(views.parent().raster().pixel(TARGET[0]), [255.0, 0.0, 0.0, 255.0]);
        assert!(views.subsets()[0].raster().all_roi_coordinates().is_empty());
    }

    #[test]
    fn simultaneous_mirrors_edits_in_both_directions() {
        let mut views = view_set(2);
        views.set_simultaneous(true);

        views.add_roi(ViewId::Parent, &TARGET, RoiColor::Red);
        for id in views.view_ids().collect::<Vec<_>>() {
            let set = views.view(id).expect("Ansicht existiert");
            assert_eq!(set.coordinates_of_color(RoiColor::Red), TARGET.to_vec(), "{id}");
        }

        views.erase_roi(ViewId::Subset(1), &TARGET);
        assert!(views.parent().raster().all_roi_coordinates().is_empty());
        assert!(views.subsets()[0].raster().all_roi_coordinates().is_empty());
    }

    #[test]
    fn enabling_simultaneous_copies_parent_raster() {
        let mut views = view_set(1);
        views.add_roi(ViewId::Parent, &TARGET, RoiColor::Purple);

        views.set_simultaneous(true);

        assert_eq!(views.subsets()[0].raster(), views.parent().raster());
    }

    #[test]
    fn disabling_simultaneous_keeps_mirrored_pixels() {
        let mut views = view_set(1);
        views.set_simultaneous(true);
        views.add_roi(ViewId::Parent, &TARGET, RoiColor::Red);

        views.set_simultaneous(false);
        views.add_roi(ViewId::Parent, &TARGET, RoiColor::Brown);

        assert_eq!(views.parent().coordinates_of_color(RoiColor::Brown), TARGET.to_vec());
        assert_eq!(views.subsets()[0].coordinates_of_color(RoiColor::Red), TARGET.to_vec());
    }

    #[test]
    fn add_to_unknown_view_is_rejected() {
        let mut views = view_set(0);
        assert!(!views.add_roi(ViewId::Subset(0), &TARGET, RoiColor::Red));
    }

    #[test]
    fn export_all_keys_subsets_with_view_number() {
        let mut views = view_set(2);
        views.add_roi(ViewId::Subset(1), &TARGET, RoiColor::Teal);

        let masks = views.export_all();

        assert_eq!(masks.len(), RoiColor::COUNT * 3);
        assert_eq!(masks.get_index(0).map(|(k, _)| k.as_str()), Some("red"));
        assert_eq!(masks.get_index(1).map(|(k, _)| k.as_str()), Some("red2"));
        for key in ["eraser", "eraser2", "eraser3"] {
            assert!(masks[key].is_empty(), "{} sollte leer exportiert werden", key);
        }
        assert_eq!(masks["teal3"].coords(), TARGET.to_vec());
        assert!(masks["teal"].is_empty());
    }

    #[test]
    fn remove_subset_shifts_following_views() {
        let mut views = view_set(2);
        views.add_roi(ViewId::Subset(1), &TARGET, RoiColor::Red);

        assert!(views.remove_subset(0).is_some());
        assert!(views.remove_subset(5).is_none());

        assert_eq!(views.view_count(), 2);
        assert_eq!(views.subsets()[0].coordinates_of_color(RoiColor::Red), TARGET.to_vec());
    }
}

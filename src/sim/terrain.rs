//! Terrain model
//!
//! Space is classified per query: any overlap with a loaded water region is
//! `Water`, everything else inside the canvas is implicitly `Land`. The
//! region list is replaced wholesale on level load — there is no partial
//! update.

use serde::{Deserialize, Serialize};

use super::geom::Rect;

/// Terrain classification for a queried bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerrainKind {
    Land,
    Water,
}

/// Water regions plus canvas bounds for the current level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terrain {
    water: Vec<Rect>,
    canvas_w: f32,
    canvas_h: f32,
}

impl Terrain {
    pub fn new(water: Vec<Rect>, canvas_w: f32, canvas_h: f32) -> Self {
        Self {
            water,
            canvas_w,
            canvas_h,
        }
    }

    /// Classify a bounding box: `Water` iff it overlaps any water region
    pub fn classify(&self, bounds: &Rect) -> TerrainKind {
        if self.water.iter().any(|w| w.overlaps(bounds)) {
            TerrainKind::Water
        } else {
            TerrainKind::Land
        }
    }

    /// Number of water regions the bounds overlap
    ///
    /// The escape rules compare this count before and after a proposed move.
    pub fn water_overlap_count(&self, bounds: &Rect) -> usize {
        self.water.iter().filter(|w| w.overlaps(bounds)).count()
    }

    /// Whether the bounds lie entirely inside the canvas
    #[inline]
    pub fn in_bounds(&self, bounds: &Rect) -> bool {
        bounds.within(self.canvas_w, self.canvas_h)
    }

    /// Water region list for the rendering collaborator
    pub fn water_regions(&self) -> &[Rect] {
        &self.water
    }

    pub fn canvas_size(&self) -> (f32, f32) {
        (self.canvas_w, self.canvas_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terrain() -> Terrain {
        Terrain::new(
            vec![
                Rect::new(100.0, 100.0, 100.0, 100.0),
                Rect::new(300.0, 50.0, 50.0, 50.0),
            ],
            800.0,
            600.0,
        )
    }

    #[test]
    fn test_classify_land_and_water() {
        let t = terrain();
        assert_eq!(t.classify(&Rect::new(0.0, 0.0, 25.0, 25.0)), TerrainKind::Land);
        assert_eq!(
            t.classify(&Rect::new(150.0, 150.0, 25.0, 25.0)),
            TerrainKind::Water
        );
        // Partial overlap counts as water
        assert_eq!(
            t.classify(&Rect::new(90.0, 90.0, 25.0, 25.0)),
            TerrainKind::Water
        );
    }

    #[test]
    fn test_edge_contact_is_land() {
        let t = terrain();
        // Touching the left edge of the water rect at x=100 is not an overlap
        assert_eq!(
            t.classify(&Rect::new(75.0, 100.0, 25.0, 25.0)),
            TerrainKind::Land
        );
    }

    #[test]
    fn test_water_overlap_count() {
        let t = terrain();
        assert_eq!(t.water_overlap_count(&Rect::new(0.0, 0.0, 25.0, 25.0)), 0);
        assert_eq!(
            t.water_overlap_count(&Rect::new(150.0, 150.0, 25.0, 25.0)),
            1
        );
        // Box spanning both regions
        assert_eq!(
            t.water_overlap_count(&Rect::new(90.0, 60.0, 250.0, 100.0)),
            2
        );
    }
}

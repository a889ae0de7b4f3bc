//! Movement and collision resolution
//!
//! The single authority for "may this entity occupy that position now".
//! Canvas-bounds rejection happens first at the call site; the rules here
//! decide terrain legality:
//!
//! 1. Escape bias: an entity already overlapping water may always move to a
//!    position overlapping none, bridge or no bridge. A bunny stranded by a
//!    withdrawn bridge must never soft-lock.
//! 2. Entering water requires the snake to be bridging with at least one
//!    segment under the proposed bounds.
//! 3. Land-to-land movement is unrestricted.
//!
//! A last-resort fallback lets a water-trapped entity take any move that
//! strictly reduces how many water regions it overlaps, even without bridge
//! coverage. It takes precedence over the bridge requirement and never
//! overrides a bounds rejection.

use super::entity::Snake;
use super::geom::Rect;
use super::terrain::Terrain;

/// Terrain-and-bridge legality of a proposed bunny move.
///
/// `current` and `proposed` are the bunny's bounds before and after the
/// step. Bounds must already be inside the canvas.
pub fn can_bunny_move_to(
    current: &Rect,
    proposed: &Rect,
    snake: &Snake,
    terrain: &Terrain,
) -> bool {
    let current_overlaps = terrain.water_overlap_count(current);
    let proposed_overlaps = terrain.water_overlap_count(proposed);

    // Escape bias: water to dry land is always legal
    if current_overlaps > 0 && proposed_overlaps == 0 {
        return true;
    }

    if proposed_overlaps > 0 {
        if snake.supports(proposed) {
            return true;
        }
        // Water-trap fallback: allow anything that strictly reduces overlap
        return proposed_overlaps < current_overlaps;
    }

    true
}

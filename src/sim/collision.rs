//! Axis-separated AABB collision resolution
//!
//! Platformer convention: overlaps are corrected one axis at a time, Y before
//! X, re-testing from the already-corrected position. Combined with per-axis
//! integration in the tick this stops diagonal tunneling through tile
//! corners.

use super::entity::{Body, ContactFlags, EntityId};

/// Strict AABB overlap test; an exact touch does not count, so resting
/// contact never jitters from repeated micro-corrections
pub fn overlaps(a: &Body, b: &Body) -> bool {
    let x_gap = (a.position.x - b.position.x).abs() - (a.width + b.width) / 2.0;
    let y_gap = (a.position.y - b.position.y).abs() - (a.height + b.height) / 2.0;
    x_gap < 0.0 && y_gap < 0.0
}

/// Clear a body's contact flags for a fresh resolution pass
pub fn reset_contacts(body: &mut Body) {
    body.touching = ContactFlags::default();
}

/// Resolve a single candidate along Y.
///
/// `factor` scales the push-out: 1.0 fully separates the bodies and kills
/// the vertical velocity, 0.0 is detect-only (flags and `last_hit` are still
/// recorded). Returns whether contact was made.
pub fn resolve_y(moving: &mut Body, candidate: &Body, id: EntityId, factor: f32) -> bool {
    if !moving.is_active || !candidate.is_active || !overlaps(moving, candidate) {
        return false;
    }

    let dy = moving.position.y - candidate.position.y;
    let overlap = (moving.height + candidate.height) / 2.0 - dy.abs();
    if dy > 0.0 {
        // Candidate below: push up, we are standing on it
        moving.position.y += overlap * factor;
        moving.touching.bottom = true;
    } else {
        // Candidate above: push down
        moving.position.y -= overlap * factor;
        moving.touching.top = true;
    }
    if factor > 0.0 {
        moving.velocity.y = 0.0;
    }
    moving.last_hit = Some(id);
    true
}

/// Resolve a single candidate along X, from the possibly Y-corrected position
pub fn resolve_x(moving: &mut Body, candidate: &Body, id: EntityId, factor: f32) -> bool {
    if !moving.is_active || !candidate.is_active || !overlaps(moving, candidate) {
        return false;
    }

    let dx = moving.position.x - candidate.position.x;
    let overlap = (moving.width + candidate.width) / 2.0 - dx.abs();
    if dx > 0.0 {
        // Candidate on the left: push right
        moving.position.x += overlap * factor;
        moving.touching.left = true;
    } else {
        moving.position.x -= overlap * factor;
        moving.touching.right = true;
    }
    if factor > 0.0 {
        moving.velocity.x = 0.0;
    }
    moving.last_hit = Some(id);
    true
}

/// Resolution axis for a body pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Classify an overlap by its shallow axis.
///
/// Per-axis integration keeps platform penetrations tiny on the axis just
/// integrated, so the fixed Y-then-X order is safe there. Two free bodies
/// can overlap deeply on one axis before the pair is ever examined; there
/// the contact belongs to the axis of least penetration, so a grazing side
/// hit is never mistaken for a landing. Ties go to Y.
pub fn shallow_axis(a: &Body, b: &Body) -> Option<Axis> {
    if !overlaps(a, b) {
        return None;
    }
    let x_overlap = (a.width + b.width) / 2.0 - (a.position.x - b.position.x).abs();
    let y_overlap = (a.height + b.height) / 2.0 - (a.position.y - b.position.y).abs();
    if y_overlap <= x_overlap {
        Some(Axis::Y)
    } else {
        Some(Axis::X)
    }
}

/// Run the Y pass across a candidate set
pub fn resolve_set_y<'a, I>(moving: &mut Body, candidates: I, factor: f32)
where
    I: IntoIterator<Item = (EntityId, &'a Body)>,
{
    for (id, candidate) in candidates {
        resolve_y(moving, candidate, id, factor);
    }
}

/// Run the X pass across a candidate set
pub fn resolve_set_x<'a, I>(moving: &mut Body, candidates: I, factor: f32)
where
    I: IntoIterator<Item = (EntityId, &'a Body)>,
{
    for (id, candidate) in candidates {
        resolve_x(moving, candidate, id, factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;
    use proptest::prelude::*;

    fn tile(x: f32, y: f32) -> Body {
        Body::new(vec3(x, y, 0.0), 1.0, 1.0)
    }

    fn mover(x: f32, y: f32) -> Body {
        Body::new(vec3(x, y, 0.0), 0.7, 0.8)
    }

    const TILE_ID: EntityId = EntityId::Platform(0);

    #[test]
    fn test_landing_pushes_up_and_sets_bottom() {
        let floor = tile(0.0, -3.25);
        let mut body = mover(0.0, -2.5);
        body.velocity.y = -2.0;

        assert!(resolve_y(&mut body, &floor, TILE_ID, 1.0));
        // Resting exactly on the tile top: tile half 0.5 + body half 0.4
        assert!((body.position.y - (-2.35)).abs() < 1e-5);
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.touching.bottom);
        assert!(!body.touching.top);
        assert_eq!(body.last_hit, Some(TILE_ID));
    }

    #[test]
    fn test_ceiling_pushes_down_and_sets_top() {
        let ceiling = tile(0.0, 0.0);
        let mut body = mover(0.0, -0.7);
        body.velocity.y = 3.0;

        assert!(resolve_y(&mut body, &ceiling, TILE_ID, 1.0));
        assert!(body.touching.top);
        assert!(body.position.y < -0.7);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_side_contact_sets_left_right() {
        let wall = tile(1.0, 0.0);
        let mut body = mover(0.3, 0.0);
        body.velocity.x = 1.0;

        assert!(resolve_x(&mut body, &wall, TILE_ID, 1.0));
        assert!(body.touching.right);
        assert!(body.position.x < 0.3);

        let mut body = mover(1.7, 0.0);
        assert!(resolve_x(&mut body, &wall, TILE_ID, 1.0));
        assert!(body.touching.left);
        assert!(body.position.x > 1.7);
    }

    #[test]
    fn test_exact_touch_is_not_resolved() {
        let floor = tile(0.0, -3.25);
        // Bottom of body exactly on top of tile: centers 0.9 apart
        let mut body = mover(0.0, -2.35);
        assert!(!resolve_y(&mut body, &floor, TILE_ID, 1.0));
        assert!(!body.touching.bottom);
        assert_eq!(body.position.y, -2.35);
    }

    #[test]
    fn test_inactive_bodies_are_skipped() {
        let mut floor = tile(0.0, -3.25);
        floor.is_active = false;
        let mut body = mover(0.0, -2.8);
        assert!(!resolve_y(&mut body, &floor, TILE_ID, 1.0));

        let floor = tile(0.0, -3.25);
        let mut body = mover(0.0, -2.8);
        body.is_active = false;
        let before = body.position;
        assert!(!resolve_y(&mut body, &floor, TILE_ID, 1.0));
        assert_eq!(body.position, before);
    }

    #[test]
    fn test_detect_only_sets_flags_without_moving() {
        let other = tile(0.5, 0.0);
        let mut body = mover(0.0, 0.0);
        body.velocity.x = 1.0;

        assert!(resolve_x(&mut body, &other, TILE_ID, 0.0));
        assert!(body.touching.right);
        assert_eq!(body.position.x, 0.0);
        assert_eq!(body.velocity.x, 1.0);
        assert_eq!(body.last_hit, Some(TILE_ID));
    }

    #[test]
    fn test_corner_hit_resolves_y_first() {
        // Diagonal approach into a tile corner: the Y pass separates first,
        // after which the X pass sees no overlap
        let corner = tile(1.0, -1.0);
        let mut body = mover(0.25, -0.25);
        body.velocity = vec3(2.0, -2.0, 0.0);

        resolve_y(&mut body, &corner, TILE_ID, 1.0);
        assert!(body.touching.top || body.touching.bottom);
        let hit_x = resolve_x(&mut body, &corner, TILE_ID, 1.0);
        assert!(!hit_x);
        assert!(!overlaps(&body, &corner));
    }

    #[test]
    fn test_shallow_axis_classification() {
        let other = tile(0.0, 0.0);

        // Bodies nearly level, barely overlapping in X: a side contact
        let body = mover(0.8, 0.1);
        assert_eq!(shallow_axis(&body, &other), Some(Axis::X));

        // Body dropping onto the tile top: a vertical contact
        let body = mover(0.1, 0.85);
        assert_eq!(shallow_axis(&body, &other), Some(Axis::Y));

        // Separated pair
        let body = mover(3.0, 0.0);
        assert_eq!(shallow_axis(&body, &other), None);
    }

    proptest! {
        /// Re-running resolution on an unchanged configuration makes no
        /// meaningful correction: the first full push separates the bodies up
        /// to rounding, so a second pass moves nothing beyond float residue
        #[test]
        fn prop_resolution_is_idempotent(
            bx in -2.0f32..2.0,
            by in -2.0f32..2.0,
        ) {
            let candidate = tile(0.0, 0.0);
            let mut body = mover(bx, by);

            resolve_y(&mut body, &candidate, TILE_ID, 1.0);
            resolve_x(&mut body, &candidate, TILE_ID, 1.0);
            let settled = body.position;
            let flags = body.touching;

            resolve_y(&mut body, &candidate, TILE_ID, 1.0);
            resolve_x(&mut body, &candidate, TILE_ID, 1.0);
            prop_assert!((body.position - settled).length() < 1e-4);
            prop_assert_eq!(body.touching, flags);
        }

        /// A body overlapping a tile never ends a Y+X pass still meaningfully
        /// inside it; only sub-epsilon float residue may remain
        #[test]
        fn prop_full_pass_separates(
            bx in -0.8f32..0.8,
            by in -0.8f32..0.8,
        ) {
            let candidate = tile(0.0, 0.0);
            let mut body = mover(bx, by);

            resolve_y(&mut body, &candidate, TILE_ID, 1.0);
            resolve_x(&mut body, &candidate, TILE_ID, 1.0);

            let x_overlap = (body.width + candidate.width) / 2.0
                - (body.position.x - candidate.position.x).abs();
            let y_overlap = (body.height + candidate.height) / 2.0
                - (body.position.y - candidate.position.y).abs();
            prop_assert!(x_overlap.min(y_overlap) < 1e-4);
        }
    }
}

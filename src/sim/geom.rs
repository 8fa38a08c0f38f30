//! Axis-aligned rectangle geometry
//!
//! Entities carry a center-anchored bounding rect; everything the engine
//! knows about space (containment, overlap, aiming) is answered here.

use glam::Vec2;

/// A center-anchored axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Standard rectangle intersection. Rects that merely touch along an
    /// edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Per-axis containment check against an `arena_w` x `arena_h` arena.
///
/// Returns `(horizontal_in, vertical_in)`. Callers that clip (the avatar)
/// revert a move when either axis is out; callers that despawn (projectiles,
/// hazards) drop the entity instead.
pub fn within_bounds(rect: &Rect, arena_w: f32, arena_h: f32) -> (bool, bool) {
    let horizontal = rect.left() >= 0.0 && rect.right() <= arena_w;
    let vertical = rect.top() >= 0.0 && rect.bottom() <= arena_h;
    (horizontal, vertical)
}

/// Unit vector from `origin`'s center toward `target`'s center.
///
/// `None` when the centers coincide; the caller picks a fallback direction.
pub fn direction_between(origin: &Rect, target: &Rect) -> Option<Vec2> {
    let diff = target.center - origin.center;
    let norm = diff.length();
    if norm == 0.0 { None } else { Some(diff / norm) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(cx: f32, cy: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(cx, cy), Vec2::new(w, h))
    }

    #[test]
    fn fully_inside_is_in_bounds_on_both_axes() {
        let r = rect(100.0, 100.0, 20.0, 20.0);
        assert_eq!(within_bounds(&r, 1100.0, 650.0), (true, true));
    }

    #[test]
    fn crossing_left_edge_fails_horizontal_only() {
        let r = rect(5.0, 100.0, 20.0, 20.0);
        assert_eq!(within_bounds(&r, 1100.0, 650.0), (false, true));
    }

    #[test]
    fn crossing_bottom_edge_fails_vertical_only() {
        let r = rect(100.0, 645.0, 20.0, 20.0);
        assert_eq!(within_bounds(&r, 1100.0, 650.0), (true, false));
    }

    #[test]
    fn flush_against_edge_still_counts_as_inside() {
        let r = rect(10.0, 10.0, 20.0, 20.0);
        assert_eq!(within_bounds(&r, 1100.0, 650.0), (true, true));
    }

    #[test]
    fn overlap_detects_intersection_and_rejects_touching() {
        let a = rect(0.0, 0.0, 20.0, 20.0);
        let b = rect(15.0, 0.0, 20.0, 20.0);
        let touching = rect(20.0, 0.0, 20.0, 20.0);
        let apart = rect(50.0, 0.0, 20.0, 20.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn direction_is_a_unit_vector() {
        let from = rect(0.0, 0.0, 10.0, 10.0);
        let to = rect(30.0, 40.0, 10.0, 10.0);
        let dir = direction_between(&from, &to).unwrap();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 0.6).abs() < 1e-6);
        assert!((dir.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn coincident_centers_have_no_direction() {
        let a = rect(10.0, 10.0, 4.0, 4.0);
        let b = rect(10.0, 10.0, 90.0, 90.0);
        assert!(direction_between(&a, &b).is_none());
    }
}

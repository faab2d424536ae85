use super::Vec2;

/// Axis-aligned rectangle in whole pixels (top-left origin).
///
/// Width and height are unsigned; a rect with a zero side covers no pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of the given size at the origin.
    #[inline]
    pub const fn from_size(w: u32, h: u32) -> Self {
        Self::new(0, 0, w, h)
    }

    /// Same size, moved so its top-left corner sits at `(x, y)`.
    #[inline]
    pub const fn at(self, x: i32, y: i32) -> Self {
        Self::new(x, y, self.w, self.h)
    }

    /// Moves the top-left corner to a float position.
    ///
    /// Fractional parts are truncated toward zero, matching how pixel
    /// placement treats float coordinates.
    #[inline]
    pub fn placed_at(self, pos: Vec2) -> Self {
        self.at(pos.x as i32, pos.y as i32)
    }

    #[inline]
    pub const fn right(self) -> i64 {
        self.x as i64 + self.w as i64
    }

    #[inline]
    pub const fn bottom(self) -> i64 {
        self.y as i64 + self.h as i64
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, x: i32, y: i32) -> bool {
        let (x, y) = (x as i64, y as i64);
        x >= self.x as i64 && y >= self.y as i64 && x < self.right() && y < self.bottom()
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = (self.x as i64).max(other.x as i64);
        let y0 = (self.y as i64).max(other.y as i64);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0 as i32, y0 as i32, (x1 - x0) as u32, (y1 - y0) as u32))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: u32, h: u32) -> Rect { Rect::new(x, y, w, h) }

    // ── placement ─────────────────────────────────────────────────────────

    #[test]
    fn placed_at_truncates_toward_zero() {
        let rect = Rect::from_size(4, 4).placed_at(Vec2::new(10.9, -2.7));
        assert_eq!(rect, r(10, -2, 4, 4));
    }

    #[test]
    fn at_keeps_size() {
        assert_eq!(r(1, 2, 30, 40).at(-5, 6), r(-5, 6, 30, 40));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0, 0, 10, 10).contains(0, 0));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0, 0, 10, 10).contains(10, 10));
        assert!(r(0, 0, 10, 10).contains(9, 9));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        assert_eq!(r(0, 0, 10, 10).intersect(r(5, 5, 10, 10)), Some(r(5, 5, 5, 5)));
    }

    #[test]
    fn intersect_negative_origin_clips() {
        assert_eq!(r(-3, -3, 5, 5).intersect(r(0, 0, 100, 100)), Some(r(0, 0, 2, 2)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        assert!(r(0, 0, 10, 10).intersect(r(10, 0, 10, 10)).is_none());
    }

    #[test]
    fn is_empty_zero_side() {
        assert!(r(0, 0, 0, 5).is_empty());
        assert!(!r(0, 0, 1, 1).is_empty());
    }
}

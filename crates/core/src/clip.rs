//! Cohen-Sutherland line clipping against an axis-aligned rectangle.
//!
//! Clipping runs in continuous (pre-rounding) pixel space. Endpoints are only
//! rounded to integer cells after a segment has been accepted.

/// A point in continuous pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned clip rectangle, inclusive on all four edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

/// Outcode bits.
pub const LEFT: u8 = 0b0001;
pub const RIGHT: u8 = 0b0010;
pub const BOTTOM: u8 = 0b0100;
pub const TOP: u8 = 0b1000;

/// Each endpoint crosses at most one vertical and one horizontal edge.
const MAX_BOUNDARY_MOVES: usize = 4;

impl Aabb {
    pub const fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Self {
        Self { xmin, ymin, xmax, ymax }
    }

    /// `[0, W-1] x [0, H-1]`, the cell centers of a `width x height` canvas.
    pub fn for_canvas(width: u32, height: u32) -> Self {
        Self::new(
            0.0,
            0.0,
            width.saturating_sub(1) as f32,
            height.saturating_sub(1) as f32,
        )
    }

    /// Classify `p` relative to this rectangle.
    pub fn outcode(&self, p: Point) -> u8 {
        let mut code = 0;
        if p.x < self.xmin {
            code |= LEFT;
        } else if p.x > self.xmax {
            code |= RIGHT;
        }
        if p.y < self.ymin {
            code |= BOTTOM;
        } else if p.y > self.ymax {
            code |= TOP;
        }
        code
    }

    pub fn contains(&self, p: Point) -> bool {
        self.outcode(p) == 0
    }

    /// Clip the segment `p0-p1` to this rectangle.
    ///
    /// Returns `None` when no part of the segment lies inside or when an
    /// endpoint is NaN or infinite. A segment that is already inside is
    /// returned unchanged.
    pub fn clip(&self, mut p0: Point, mut p1: Point) -> Option<(Point, Point)> {
        if !(p0.is_finite() && p1.is_finite()) {
            return None;
        }

        let mut code0 = self.outcode(p0);
        let mut code1 = self.outcode(p1);

        for _ in 0..MAX_BOUNDARY_MOVES {
            if code0 | code1 == 0 {
                return Some((p0, p1));
            }
            if code0 & code1 != 0 {
                return None;
            }

            let (out, moving_p0) = if code0 != 0 { (code0, true) } else { (code1, false) };
            let p = self.intersect(p0, p1, out);

            if moving_p0 {
                p0 = p;
                code0 = self.outcode(p0);
            } else {
                p1 = p;
                code1 = self.outcode(p1);
            }
        }

        // Float error can leave an endpoint hovering just outside a corner.
        (code0 | code1 == 0).then_some((p0, p1))
    }

    /// Point on the line through `p0`, `p1` lying on the edge flagged in `out`.
    fn intersect(&self, p0: Point, p1: Point, out: u8) -> Point {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;

        if out & TOP != 0 {
            Point::new(p0.x + dx * (self.ymax - p0.y) / dy, self.ymax)
        } else if out & BOTTOM != 0 {
            Point::new(p0.x + dx * (self.ymin - p0.y) / dy, self.ymin)
        } else if out & RIGHT != 0 {
            Point::new(self.xmax, p0.y + dy * (self.xmax - p0.x) / dx)
        } else {
            Point::new(self.xmin, p0.y + dy * (self.xmin - p0.x) / dx)
        }
    }
}

/// Round to the nearest integer, halves toward positive infinity.
#[inline]
pub fn round_half_up(v: f32) -> i64 {
    (v + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn canvas_box() -> Aabb {
        // 10x5 canvas
        Aabb::for_canvas(10, 5)
    }

    #[test]
    fn outcodes_follow_bit_layout() {
        let b = canvas_box();
        assert_eq!(b.outcode(Point::new(4.0, 2.0)), 0);
        assert_eq!(b.outcode(Point::new(-1.0, 2.0)), LEFT);
        assert_eq!(b.outcode(Point::new(10.0, 2.0)), RIGHT);
        assert_eq!(b.outcode(Point::new(4.0, -0.5)), BOTTOM);
        assert_eq!(b.outcode(Point::new(4.0, 4.5)), TOP);
        assert_eq!(b.outcode(Point::new(-3.0, 9.0)), LEFT | TOP);
        // Edges are inside.
        assert_eq!(b.outcode(Point::new(9.0, 4.0)), 0);
        assert_eq!(b.outcode(Point::new(0.0, 0.0)), 0);
    }

    #[test]
    fn inside_segment_is_returned_unchanged() {
        let b = canvas_box();
        let p0 = Point::new(0.3, 1.7);
        let p1 = Point::new(8.9, 3.1);
        let (a, c) = b.clip(p0, p1).unwrap();
        assert_eq!(a.x.to_bits(), p0.x.to_bits());
        assert_eq!(a.y.to_bits(), p0.y.to_bits());
        assert_eq!(c.x.to_bits(), p1.x.to_bits());
        assert_eq!(c.y.to_bits(), p1.y.to_bits());
    }

    #[test]
    fn horizontal_segment_just_below_height_is_rejected() {
        // y == H is one past the last row.
        let b = Aabb::for_canvas(10, 5);
        assert!(b.clip(Point::new(0.0, 5.0), Point::new(9.0, 5.0)).is_none());
    }

    #[test]
    fn segment_fully_on_one_side_is_rejected() {
        let b = canvas_box();
        assert!(b.clip(Point::new(-5.0, 0.0), Point::new(-1.0, 4.0)).is_none());
        assert!(b.clip(Point::new(12.0, -3.0), Point::new(20.0, 1.0)).is_none());
    }

    #[test]
    fn single_crossing_lands_on_boundary() {
        let b = canvas_box();
        let (p0, p1) = b.clip(Point::new(4.0, 2.0), Point::new(14.0, 2.0)).unwrap();
        assert_eq!(p0, Point::new(4.0, 2.0));
        assert!((p1.x - b.xmax).abs() < EPS);
        assert!((p1.y - 2.0).abs() < EPS);

        let (p0, _) = b.clip(Point::new(2.0, -4.0), Point::new(2.0, 3.0)).unwrap();
        assert!((p0.y - b.ymin).abs() < EPS);
        assert!((p0.x - 2.0).abs() < EPS);
    }

    #[test]
    fn diagonal_through_box_is_clipped_on_both_ends() {
        let b = Aabb::new(0.0, 0.0, 4.0, 4.0);
        let (p0, p1) = b.clip(Point::new(-2.0, -2.0), Point::new(6.0, 6.0)).unwrap();
        assert!((p0.x - 0.0).abs() < EPS && (p0.y - 0.0).abs() < EPS);
        assert!((p1.x - 4.0).abs() < EPS && (p1.y - 4.0).abs() < EPS);
    }

    #[test]
    fn segment_missing_a_corner_is_rejected() {
        let b = Aabb::new(0.0, 0.0, 4.0, 4.0);
        // Passes above the top-right corner without touching the box.
        assert!(b.clip(Point::new(3.0, 6.0), Point::new(6.0, 3.5)).is_none());
    }

    #[test]
    fn non_finite_endpoints_are_rejected() {
        let b = canvas_box();
        let inside = Point::new(4.0, 2.0);
        assert!(b.clip(Point::new(f32::NAN, 2.0), inside).is_none());
        assert!(b.clip(inside, Point::new(3.0, f32::NAN)).is_none());
        assert!(b.clip(Point::new(f32::INFINITY, 2.0), inside).is_none());
        assert!(b.clip(Point::new(0.0, f32::NEG_INFINITY), Point::new(0.0, f32::INFINITY)).is_none());
    }

    #[test]
    fn round_half_up_rounds_halves_up() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(2.0), 2);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-0.51), -1);
    }

    fn coord() -> impl Strategy<Value = f32> {
        (-4000i32..4000i32).prop_map(|v| v as f32 * 0.05)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2_000))]

        #[test]
        fn clip_terminates_and_stays_inside(
            x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord(),
            w in 1u32..120, h in 1u32..60,
        ) {
            let b = Aabb::for_canvas(w, h);
            if let Some((p0, p1)) = b.clip(Point::new(x0, y0), Point::new(x1, y1)) {
                for p in [p0, p1] {
                    prop_assert!(p.x >= b.xmin && p.x <= b.xmax);
                    prop_assert!(p.y >= b.ymin && p.y <= b.ymax);
                }
            }
        }

        #[test]
        fn inside_endpoints_are_always_accepted(
            x0 in 0.0f32..=9.0, y0 in 0.0f32..=4.0, x1 in 0.0f32..=9.0, y1 in 0.0f32..=4.0,
        ) {
            let b = canvas_box();
            prop_assert_eq!(
                b.clip(Point::new(x0, y0), Point::new(x1, y1)),
                Some((Point::new(x0, y0), Point::new(x1, y1)))
            );
        }
    }
}

//! Basic 2D value types and tolerances.
//!
//! - `FlowCfg`: centralizes epsilons for equality, box fitting and slopes.
//! - `Size`, `Rect`: plain values with epsilon-tolerant `PartialEq`.
//! - `Aff2`: 2D affine map used to place paths in a layout frame.
//! - `ApproxEq`: tolerant comparison for scalars, points and the types above.

use nalgebra::{Matrix2, Vector2};

/// A point in layout coordinates (`y` grows downward).
pub type Point = Vector2<f64>;

/// Default equality tolerance.
pub const EPS: f64 = 1e-9;

/// Layout configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct FlowCfg {
    /// Tolerance for value equality and candidate windows.
    pub eps_eq: f64,
    /// Slack when comparing a box width against a corridor span, and the
    /// amount a box is shrunk before checking it against live edges.
    pub eps_fit: f64,
    /// Slope differences below this are treated as parallel walls.
    pub eps_slope: f64,
}

impl Default for FlowCfg {
    fn default() -> Self {
        Self {
            eps_eq: EPS,
            eps_fit: 1e-7,
            eps_slope: 1e-12,
        }
    }
}

/// Epsilon-tolerant equality.
pub trait ApproxEq {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool;

    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, EPS)
    }
}

impl ApproxEq for f64 {
    #[inline]
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        (self - other).abs() <= eps
    }
}

impl ApproxEq for Point {
    #[inline]
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.x.approx_eq_eps(&other.x, eps) && self.y.approx_eq_eps(&other.y, eps)
    }
}

/// Width and height of a box.
#[derive(Clone, Copy, Debug, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl ApproxEq for Size {
    #[inline]
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.width.approx_eq_eps(&other.width, eps) && self.height.approx_eq_eps(&other.height, eps)
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

/// Axis-aligned rectangle; `origin` is the top-left corner.
#[derive(Clone, Copy, Debug)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Default for Rect {
    fn default() -> Self {
        Self {
            origin: Point::zeros(),
            size: Size::default(),
        }
    }
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }
    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Corners in order top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x(), self.min_y()),
            Point::new(self.max_x(), self.min_y()),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.min_x(), self.max_y()),
        ]
    }

    /// Shrink by `d` on every side (grow for negative `d`).
    pub fn inset(&self, d: f64) -> Rect {
        Rect::new(
            self.origin.x + d,
            self.origin.y + d,
            self.size.width - 2.0 * d,
            self.size.height - 2.0 * d,
        )
    }

    /// Interiors overlap by more than `eps` along both axes.
    pub fn overlaps_eps(&self, other: &Rect, eps: f64) -> bool {
        self.min_x() + eps < other.max_x()
            && other.min_x() + eps < self.max_x()
            && self.min_y() + eps < other.max_y()
            && other.min_y() + eps < self.max_y()
    }

    /// Smallest rectangle covering all `points`; `None` when empty.
    pub fn bounding(points: &[Point]) -> Option<Rect> {
        let first = points.first()?;
        let (mut x0, mut y0, mut x1, mut y1) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            x0 = x0.min(p.x);
            y0 = y0.min(p.y);
            x1 = x1.max(p.x);
            y1 = y1.max(p.y);
        }
        Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
    }
}

impl ApproxEq for Rect {
    #[inline]
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.origin.approx_eq_eps(&other.origin, eps) && self.size.approx_eq_eps(&other.size, eps)
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug)]
pub struct Aff2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Aff2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::new(dx, dy),
        }
    }
    #[inline]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            m: Matrix2::new(sx, 0.0, 0.0, sy),
            t: Vector2::zeros(),
        }
    }
    /// Rotation by `theta` radians about the origin.
    #[inline]
    pub fn rotation(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            m: Matrix2::new(c, -s, s, c),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        self.m * p + self.t
    }
    /// `self ∘ inner`: apply `inner` first.
    #[inline]
    pub fn compose(&self, inner: &Aff2) -> Aff2 {
        Aff2 {
            m: self.m * inner.m,
            t: self.m * inner.t + self.t,
        }
    }
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
}

impl ApproxEq for Aff2 {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        (self.m - other.m).amax() <= eps && (self.t - other.t).amax() <= eps
    }
}

//! Adaptive orientation predicates for 2, 3 and 4 points.
//!
//! Each predicate evaluates the determinant in floating point first and
//! returns its sign when it clears a forward error bound. Inside the bound the
//! determinant is recomputed exactly with expansions.

use super::expansion::Expansion;
use crate::geom2::Point;

/// Half an ulp of 1.0.
const EPSILON: f64 = f64::EPSILON * 0.5;
const CCW_ERRBOUND_A: f64 = (3.0 + 16.0 * EPSILON) * EPSILON;
const ICC_ERRBOUND_A: f64 = (10.0 + 96.0 * EPSILON) * EPSILON;

/// Sign of an orientation determinant.
///
/// `CounterClockwise` means a positive determinant in the usual math frame
/// (`y` up). In screen coordinates (`y` down) the same triangle appears
/// clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    #[inline]
    fn from_sign(s: i32) -> Self {
        match s {
            s if s > 0 => Orientation::CounterClockwise,
            s if s < 0 => Orientation::Clockwise,
            _ => Orientation::Collinear,
        }
    }
    #[inline]
    fn from_f64(d: f64) -> Self {
        if d > 0.0 {
            Orientation::CounterClockwise
        } else if d < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
    /// -1, 0 or 1.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
            Orientation::CounterClockwise => 1,
        }
    }
    #[inline]
    pub fn reversed(self) -> Self {
        Orientation::from_sign(-self.sign())
    }
}

/// Exact sign of the cross product `a × b`.
pub fn orientation_2pt(a: Point, b: Point) -> Orientation {
    let det = Expansion::from_product(a.x, b.y).diff(&Expansion::from_product(a.y, b.x));
    Orientation::from_sign(det.sign())
}

/// Exact sign of the doubled area of triangle `a, b, c`.
pub fn orientation_3pt(a: Point, b: Point, c: Point) -> Orientation {
    let det_left = (a.x - c.x) * (b.y - c.y);
    let det_right = (a.y - c.y) * (b.x - c.x);
    let det = det_left - det_right;
    let err_bound = CCW_ERRBOUND_A * (det_left.abs() + det_right.abs());
    if det > err_bound || -det > err_bound {
        return Orientation::from_f64(det);
    }
    orient3_exact(a, b, c)
}

fn orient3_exact(a: Point, b: Point, c: Point) -> Orientation {
    let acx = Expansion::from_diff(a.x, c.x);
    let bcy = Expansion::from_diff(b.y, c.y);
    let acy = Expansion::from_diff(a.y, c.y);
    let bcx = Expansion::from_diff(b.x, c.x);
    let det = acx.product(&bcy).diff(&acy.product(&bcx));
    Orientation::from_sign(det.sign())
}

/// Exact in-circle sign: `CounterClockwise` when `d` lies inside the circle
/// through `a, b, c` taken counter-clockwise (math frame), `Collinear` when
/// the four points are cocircular.
pub fn orientation_4pt(a: Point, b: Point, c: Point, d: Point) -> Orientation {
    let adx = a.x - d.x;
    let ady = a.y - d.y;
    let bdx = b.x - d.x;
    let bdy = b.y - d.y;
    let cdx = c.x - d.x;
    let cdy = c.y - d.y;

    let bdxcdy = bdx * cdy;
    let cdxbdy = cdx * bdy;
    let alift = adx * adx + ady * ady;

    let cdxady = cdx * ady;
    let adxcdy = adx * cdy;
    let blift = bdx * bdx + bdy * bdy;

    let adxbdy = adx * bdy;
    let bdxady = bdx * ady;
    let clift = cdx * cdx + cdy * cdy;

    let det = alift * (bdxcdy - cdxbdy) + blift * (cdxady - adxcdy) + clift * (adxbdy - bdxady);
    let permanent = (bdxcdy.abs() + cdxbdy.abs()) * alift
        + (cdxady.abs() + adxcdy.abs()) * blift
        + (adxbdy.abs() + bdxady.abs()) * clift;
    let err_bound = ICC_ERRBOUND_A * permanent;
    if det > err_bound || -det > err_bound {
        return Orientation::from_f64(det);
    }
    incircle_exact(a, b, c, d)
}

fn incircle_exact(a: Point, b: Point, c: Point, d: Point) -> Orientation {
    let adx = Expansion::from_diff(a.x, d.x);
    let ady = Expansion::from_diff(a.y, d.y);
    let bdx = Expansion::from_diff(b.x, d.x);
    let bdy = Expansion::from_diff(b.y, d.y);
    let cdx = Expansion::from_diff(c.x, d.x);
    let cdy = Expansion::from_diff(c.y, d.y);

    let lift = |x: &Expansion, y: &Expansion| x.product(x).sum(&y.product(y));
    let cross = |x1: &Expansion, y1: &Expansion, x2: &Expansion, y2: &Expansion| {
        x1.product(y2).diff(&x2.product(y1))
    };

    let a_term = lift(&adx, &ady).product(&cross(&bdx, &bdy, &cdx, &cdy));
    let b_term = lift(&bdx, &bdy).product(&cross(&cdx, &cdy, &adx, &ady));
    let c_term = lift(&cdx, &cdy).product(&cross(&adx, &ady, &bdx, &bdy));
    let det = a_term.sum(&b_term).sum(&c_term);
    Orientation::from_sign(det.sign())
}

//! Point-in-polygon and segment tests driven by `orientation_3pt`.

use super::orient::{orientation_3pt, Orientation};
use crate::error::Result;
use crate::geom2::{Path, Point, Rect};

/// Winding-number containment for a single closed contour.
///
/// Points on the boundary are inside. Every edge decision goes through the
/// exact orientation predicate, so the answer agrees with the polygon's own
/// edges even for points a rounding error away from them.
pub fn contains(vertices: &[Point], p: Point) -> bool {
    let n = vertices.len();
    if n == 0 {
        return false;
    }
    let mut winding = 0i32;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        if on_segment(a, b, p) {
            return true;
        }
        if a.y <= p.y {
            if b.y > p.y && orientation_3pt(a, b, p) == Orientation::CounterClockwise {
                winding += 1;
            }
        } else if b.y <= p.y && orientation_3pt(a, b, p) == Orientation::Clockwise {
            winding -= 1;
        }
    }
    winding != 0
}

/// `contains` for a path; curves and several contours are rejected.
pub fn path_contains(path: &Path, p: Point) -> Result<bool> {
    let vertices = path.single_contour()?;
    Ok(contains(&vertices, p))
}

/// `p` lies on the closed segment `a b`.
pub fn on_segment(a: Point, b: Point, p: Point) -> bool {
    orientation_3pt(a, b, p) == Orientation::Collinear && within_box(a, b, p)
}

#[inline]
fn within_box(a: Point, b: Point, p: Point) -> bool {
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}

/// Closed segments `p1 p2` and `q1 q2` share at least one point.
pub fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let o1 = orientation_3pt(p1, p2, q1).sign();
    let o2 = orientation_3pt(p1, p2, q2).sign();
    let o3 = orientation_3pt(q1, q2, p1).sign();
    let o4 = orientation_3pt(q1, q2, p2).sign();
    if o1 * o2 < 0 && o3 * o4 < 0 {
        return true;
    }
    (o1 == 0 && within_box(p1, p2, q1))
        || (o2 == 0 && within_box(p1, p2, q2))
        || (o3 == 0 && within_box(q1, q2, p1))
        || (o4 == 0 && within_box(q1, q2, p2))
}

/// Segment `a b` touches the closed rectangle `r`.
pub fn segment_meets_rect(a: Point, b: Point, r: &Rect) -> bool {
    let inside = |p: Point| r.min_x() <= p.x && p.x <= r.max_x() && r.min_y() <= p.y && p.y <= r.max_y();
    if inside(a) || inside(b) {
        return true;
    }
    if a.x.max(b.x) < r.min_x()
        || a.x.min(b.x) > r.max_x()
        || a.y.max(b.y) < r.min_y()
        || a.y.min(b.y) > r.max_y()
    {
        return false;
    }
    let c = r.corners();
    (0..4).any(|i| segments_intersect(a, b, c[i], c[(i + 1) % 4]))
}

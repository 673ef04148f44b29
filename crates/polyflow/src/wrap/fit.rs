//! Box fitting inside the current slices.
//!
//! Candidate heights come from three generators: the slice top, every wall
//! vertex (with the box hanging from or resting on it), and the corner-core
//! solutions where the box touches one edge of each wall. Each candidate is
//! checked against the slice span; the first that leaves room wins.

use tracing::trace;

use super::engine::WordWrap;
use crate::error::Result;
use crate::geom2::{Point, Rect, Size};
use crate::robust::segment_meets_rect;
use crate::sweep::{EventArena, Slice, SweepEvent};

/// Height at which a box of `size` touches both `left` and `right`.
///
/// Each wall is extended to its supporting line. A left wall leaning right
/// (`dx/dy >= 0`) meets the box at its bottom-left corner, otherwise at its
/// top-left; the right wall mirrors that. `None` when the walls are parallel
/// within `eps_slope` or the solution is not finite.
pub fn point_for_box_in_corner_core(
    left: &SweepEvent,
    right: &SweepEvent,
    size: Size,
    eps_slope: f64,
) -> Option<Point> {
    let (w, h) = (size.width, size.height);
    let sl = left.slope();
    let sr = right.slope();
    let a = if sl < 0.0 { 0.0 } else { 1.0 };
    let b = if sr > 0.0 { 0.0 } else { 1.0 };
    let d = sr - sl;
    if d.abs() < eps_slope {
        return None;
    }
    let y = (w - right.p0.x + right.p0.y * sr - b * h * sr + left.p0.x - left.p0.y * sl
        + a * h * sl)
        / d;
    if !y.is_finite() {
        return None;
    }
    Some(Point::new(left.x_at(y + a * h), y))
}

/// Heights where a box of height `h` touches a vertex of `ev` with its top
/// or its bottom edge.
pub fn point_for_box_at_edge(ev: &SweepEvent, h: f64) -> [f64; 4] {
    [ev.p0.y, ev.p0.y - h, ev.p1.y, ev.p1.y - h]
}

/// Highest usable height of `slice` at or below `y_lo`.
pub fn point_for_box_at_top(slice: &Slice, arena: &EventArena, y_lo: f64) -> Option<f64> {
    Some(y_lo.max(slice.top(arena)?))
}

impl WordWrap {
    /// Topmost origin for a box of `size` in `slice` with `y` in `[y_lo, y_hi]`.
    pub fn point_for_box_in_slice(
        &self,
        slice: &Slice,
        size: Size,
        y_lo: f64,
        y_hi: f64,
    ) -> Option<Point> {
        let arena = &self.arena;
        let cfg = &self.cfg;
        let mut ys = vec![point_for_box_at_top(slice, arena, y_lo)?];
        for &l in &slice.left.events {
            for &r in &slice.right.events {
                if let Some(p) =
                    point_for_box_in_corner_core(&arena[l], &arena[r], size, cfg.eps_slope)
                {
                    ys.push(p.y);
                }
            }
        }
        for &id in slice.left.events.iter().chain(&slice.right.events) {
            ys.extend(point_for_box_at_edge(&arena[id], size.height));
        }
        ys.retain(|y| y.is_finite() && *y >= y_lo - cfg.eps_eq && *y <= y_hi + cfg.eps_eq);
        ys.sort_by(|a, b| a.total_cmp(b));
        ys.dedup();

        for y in ys {
            let y = y.clamp(y_lo, y_hi);
            let Some((l, r)) = slice.span(arena, y, y + size.height) else {
                continue;
            };
            if r - l < size.width - cfg.eps_fit {
                continue;
            }
            let rect = Rect::from_origin_size(Point::new(l, y), size);
            if self.within_slices(&rect) {
                trace!(x = l, y, "candidate accepted");
                return Some(rect.origin);
            }
        }
        None
    }

    /// No wall of any slice reaches into `rect` by more than the fit tolerance.
    pub fn within_slices(&self, rect: &Rect) -> bool {
        let inner = rect.inset(self.cfg.eps_fit);
        if inner.size.width <= 0.0 || inner.size.height <= 0.0 {
            return true;
        }
        !self
            .slices
            .iter()
            .flat_map(|s| s.left.events.iter().chain(&s.right.events))
            .any(|&id| {
                let ev = &self.arena[id];
                segment_meets_rect(ev.p0, ev.p1, &inner)
            })
    }

    /// Topmost origin for a box of `size` at or below `cursor`, over all
    /// slices, with the index of the slice that takes it. Steps the cursor
    /// down by the box height until something fits or the polygon is
    /// exhausted.
    pub fn point_for_box_in_slices(
        &mut self,
        size: Size,
        mut cursor: f64,
    ) -> Result<Option<(usize, Point)>> {
        let h = size.height;
        while cursor + h <= self.bottom + self.cfg.eps_eq {
            self.extend_slices(cursor, size)?;
            if self.slices.is_empty() && self.buffer.is_empty() {
                return Ok(None);
            }
            let y_lo = cursor;
            let y_hi = (cursor + h).min(self.horizon - h);
            if y_hi >= y_lo {
                let mut best: Option<(usize, Point)> = None;
                for (k, slice) in self.slices.iter().enumerate() {
                    if let Some(p) = self.point_for_box_in_slice(slice, size, y_lo, y_hi) {
                        if best.map_or(true, |(_, b)| p.y < b.y) {
                            best = Some((k, p));
                        }
                    }
                }
                if best.is_some() {
                    return Ok(best);
                }
            }
            cursor += h;
        }
        Ok(None)
    }
}

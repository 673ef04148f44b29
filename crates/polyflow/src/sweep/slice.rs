//! Chains and slices: the vertical corridors of the polygon.
//!
//! A `Chain` is a contiguous, y-monotone run of events stored as arena ids.
//! A `Slice` pairs a left and a right chain; the corridor between them is
//! interior for every y both chains cover.

use super::event::{EventArena, EventId, JointId};
use crate::error::Result;
use crate::geom2::Point;
use crate::robust::{orientation_3pt, Orientation};

/// The chain ends at a local bottom of the boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Closure {
    pub joint: JointId,
    pub y: f64,
}

/// Contiguous downward edge list of one corridor wall.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chain {
    pub events: Vec<EventId>,
    pub closure: Option<Closure>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: Vec<EventId>, closure: Option<Closure>) -> Self {
        Self { events, closure }
    }

    /// Append `id`; the chain closes when the event ends at a local bottom.
    pub fn push(&mut self, arena: &EventArena, id: EventId) {
        self.events.push(id);
        let ev = &arena[id];
        self.closure = match (ev.terminal, ev.bottom) {
            (true, Some(joint)) => Some(Closure {
                joint,
                y: ev.p1.y,
            }),
            _ => None,
        };
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn last(&self) -> Option<EventId> {
        self.events.last().copied()
    }

    pub fn top(&self, arena: &EventArena) -> Option<f64> {
        self.events.first().map(|&id| arena[id].p0.y)
    }

    pub fn bottom(&self, arena: &EventArena) -> Option<f64> {
        self.events.last().map(|&id| arena[id].p1.y)
    }

    /// The chain spans `[y0, y1]` completely.
    pub fn covers(&self, arena: &EventArena, y0: f64, y1: f64) -> bool {
        match (self.top(arena), self.bottom(arena)) {
            (Some(top), Some(bottom)) => top <= y0 && bottom >= y1,
            _ => false,
        }
    }

    /// Joint an open chain continues from.
    pub fn open_end(&self, arena: &EventArena) -> Option<JointId> {
        if self.closure.is_some() {
            return None;
        }
        self.last().and_then(|id| arena[id].bottom)
    }

    /// Edge at height `y`, preferring the one that continues below `y`.
    pub fn edge_at(&self, arena: &EventArena, y: f64) -> Option<EventId> {
        let mut ending = None;
        for &id in &self.events {
            let ev = &arena[id];
            if ev.p0.y <= y && y < ev.p1.y {
                return Some(id);
            }
            if ev.p1.y == y {
                ending = Some(id);
            }
        }
        ending
    }

    /// Event lists above and below `y`, splitting the edge that crosses it.
    pub fn split_at(&self, arena: &mut EventArena, y: f64) -> Result<(Vec<EventId>, Vec<EventId>)> {
        let mut upper = Vec::new();
        let mut lower = Vec::new();
        for &id in &self.events {
            let ev = arena[id];
            if ev.p1.y <= y {
                upper.push(id);
            } else if ev.p0.y >= y {
                lower.push(id);
            } else {
                let (a, b) = arena.split(id, y)?;
                upper.push(a);
                lower.push(b);
            }
        }
        Ok((upper, lower))
    }

    /// Drop everything above `y`. The last event always survives, so a chain
    /// that ends above `y` keeps its end joint. Returns whether anything changed.
    pub fn trim_above(&mut self, arena: &mut EventArena, y: f64) -> Result<bool> {
        let Some(last) = self.last() else {
            return Ok(false);
        };
        match self.events.iter().position(|&id| arena[id].p1.y > y) {
            None => {
                if self.events.len() == 1 {
                    return Ok(false);
                }
                self.events = vec![last];
                Ok(true)
            }
            Some(k) => {
                self.events.drain(..k);
                let first = self.events[0];
                if arena[first].p0.y < y {
                    let (_, lower) = arena[first].split_at(y)?;
                    self.events[0] = arena.push(lower);
                    return Ok(true);
                }
                Ok(k > 0)
            }
        }
    }
}

/// Indices into a slice's chains bracketing a y-band: the first and the last
/// edge of each wall that overlaps the band's interior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CornerEvents {
    pub left_top: Option<usize>,
    pub left_bottom: Option<usize>,
    pub right_top: Option<usize>,
    pub right_bottom: Option<usize>,
}

fn bracket(chain: &Chain, arena: &EventArena, y0: f64, y1: f64) -> (Option<usize>, Option<usize>) {
    let top = chain.events.iter().position(|&id| arena[id].p1.y > y0);
    let bottom = chain.events.iter().rposition(|&id| arena[id].p0.y < y1);
    match (top, bottom) {
        (Some(t), Some(b)) if t <= b => (Some(t), Some(b)),
        _ => (None, None),
    }
}

/// A vertical corridor between two walls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slice {
    pub left: Chain,
    pub right: Chain,
}

impl Slice {
    pub fn new(left: Chain, right: Chain) -> Self {
        Self { left, right }
    }

    /// Highest y both walls reach.
    pub fn top(&self, arena: &EventArena) -> Option<f64> {
        Some(self.left.top(arena)?.max(self.right.top(arena)?))
    }

    /// Both walls end at the same local bottom.
    pub fn closed_joint(&self) -> Option<Closure> {
        match (self.left.closure, self.right.closure) {
            (Some(l), Some(r)) if l.joint == r.joint => Some(l),
            _ => None,
        }
    }

    pub fn corner_events(&self, arena: &EventArena, y0: f64, y1: f64) -> CornerEvents {
        let (left_top, left_bottom) = bracket(&self.left, arena, y0, y1);
        let (right_top, right_bottom) = bracket(&self.right, arena, y0, y1);
        CornerEvents {
            left_top,
            left_bottom,
            right_top,
            right_bottom,
        }
    }

    /// Usable horizontal interval `(L, R)` for the band `[y0, y1]`: the
    /// innermost wall positions over the whole band.
    pub fn span(&self, arena: &EventArena, y0: f64, y1: f64) -> Option<(f64, f64)> {
        if !(self.left.covers(arena, y0, y1) && self.right.covers(arena, y0, y1)) {
            return None;
        }
        let corners = self.corner_events(arena, y0, y1);
        let wall_x = |id: &EventId| {
            let ev = &arena[*id];
            (ev.x_at(y0.max(ev.p0.y)), ev.x_at(y1.min(ev.p1.y)))
        };
        let mut l = f64::NEG_INFINITY;
        for id in &self.left.events[corners.left_top?..=corners.left_bottom?] {
            let (a, b) = wall_x(id);
            l = l.max(a).max(b);
        }
        let mut r = f64::INFINITY;
        for id in &self.right.events[corners.right_top?..=corners.right_bottom?] {
            let (a, b) = wall_x(id);
            r = r.min(a).min(b);
        }
        Some((l, r))
    }

    /// `p` lies strictly between the walls at its own height.
    pub fn contains_point(&self, arena: &EventArena, p: Point) -> bool {
        let (Some(l), Some(r)) = (self.left.edge_at(arena, p.y), self.right.edge_at(arena, p.y)) else {
            return false;
        };
        let (l, r) = (&arena[l], &arena[r]);
        orientation_3pt(l.p0, l.p1, p) == Orientation::Clockwise
            && orientation_3pt(r.p0, r.p1, p) == Orientation::CounterClockwise
    }

    /// Re-cut the walls so `left[i]` and `right[i]` cover the same y-range.
    ///
    /// Both walls are first trimmed to the lower of their two tops. A wall
    /// reduced to its last event (it ends above the other's top) is left
    /// unpaired. Returns whether anything changed.
    pub fn level(&mut self, arena: &mut EventArena) -> Result<bool> {
        let (Some(lt), Some(rt)) = (self.left.top(arena), self.right.top(arena)) else {
            return Ok(false);
        };
        let ys = lt.max(rt);
        let mut changed = self.left.trim_above(arena, ys)?;
        changed |= self.right.trim_above(arena, ys)?;
        if self.left.top(arena) != self.right.top(arena) {
            return Ok(changed);
        }
        let mut i = 0;
        while i < self.left.len() && i < self.right.len() {
            let l = arena[self.left.events[i]];
            let r = arena[self.right.events[i]];
            if l.p1.y < r.p1.y {
                let (a, b) = arena.split(self.right.events[i], l.p1.y)?;
                self.right.events.splice(i..=i, [a, b]);
                changed = true;
            } else if r.p1.y < l.p1.y {
                let (a, b) = arena.split(self.left.events[i], r.p1.y)?;
                self.left.events.splice(i..=i, [a, b]);
                changed = true;
            }
            i += 1;
        }
        Ok(changed)
    }

    /// Paired edges share their y-range up to the shorter wall.
    pub fn is_level(&self, arena: &EventArena) -> bool {
        self.left
            .events
            .iter()
            .zip(&self.right.events)
            .all(|(&l, &r)| arena[l].p0.y == arena[r].p0.y && arena[l].p1.y == arena[r].p1.y)
    }
}

//! Sweep events and the per-layout event arena.

use std::cmp::Ordering;

use crate::error::{FlowError, Result};
use crate::geom2::Point;
use crate::robust::{orientation_3pt, Orientation};

/// Run of consecutive polygon vertices sharing one `y`.
///
/// Two events meet at a joint exactly when they are adjacent on the boundary
/// (possibly through horizontal edges, which produce no events).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JointId(pub usize);

/// Index into an `EventArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub usize);

/// A boundary edge oriented downward (`p0.y < p1.y`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepEvent {
    pub p0: Point,
    pub p1: Point,
    /// Joint at `p0`; `None` for the lower piece of a split edge.
    pub top: Option<JointId>,
    /// Joint at `p1`; `None` for the upper piece of a split edge.
    pub bottom: Option<JointId>,
    /// No boundary continues below `p1` from this joint.
    pub terminal: bool,
}

impl SweepEvent {
    /// Event for the edge `a b`, reoriented downward. Horizontal edges have no event.
    pub fn from_edge(a: Point, b: Point) -> Option<Self> {
        let (p0, p1) = match a.y.partial_cmp(&b.y)? {
            Ordering::Less => (a, b),
            Ordering::Greater => (b, a),
            Ordering::Equal => return None,
        };
        Some(Self {
            p0,
            p1,
            top: None,
            bottom: None,
            terminal: false,
        })
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.p1.y - self.p0.y
    }

    /// `dx/dy` along the edge.
    #[inline]
    pub fn slope(&self) -> f64 {
        (self.p1.x - self.p0.x) / (self.p1.y - self.p0.y)
    }

    /// `x` of the supporting line at height `y`; endpoints are returned exactly.
    #[inline]
    pub fn x_at(&self, y: f64) -> f64 {
        if y == self.p0.y {
            self.p0.x
        } else if y == self.p1.y {
            self.p1.x
        } else {
            self.p0.x + (y - self.p0.y) * (self.p1.x - self.p0.x) / (self.p1.y - self.p0.y)
        }
    }

    /// Cut the edge with the horizontal probe line at `y`.
    ///
    /// The cut point gets `y` exactly. The upper piece keeps the top joint,
    /// the lower piece keeps the bottom joint and the terminal flag.
    pub fn split_at(&self, y: f64) -> Result<(SweepEvent, SweepEvent)> {
        if !(self.p0.y < y && y < self.p1.y) {
            return Err(FlowError::MissingIntersection { y });
        }
        let cut = Point::new(self.x_at(y), y);
        let upper = SweepEvent {
            p0: self.p0,
            p1: cut,
            top: self.top,
            bottom: None,
            terminal: false,
        };
        let lower = SweepEvent {
            p0: cut,
            p1: self.p1,
            top: None,
            bottom: self.bottom,
            terminal: self.terminal,
        };
        Ok((upper, lower))
    }

    /// Sweep order: by `p0.y`, then `p0.x`, then clockwise turn for events
    /// sharing a start point.
    pub fn sweep_cmp(&self, other: &SweepEvent) -> Ordering {
        let by_y = self.p0.y.partial_cmp(&other.p0.y).unwrap_or(Ordering::Equal);
        let by_x = self.p0.x.partial_cmp(&other.p0.x).unwrap_or(Ordering::Equal);
        by_y.then(by_x)
            .then_with(|| match orientation_3pt(self.p0, self.p1, other.p1) {
                Orientation::Clockwise => Ordering::Less,
                Orientation::CounterClockwise => Ordering::Greater,
                Orientation::Collinear => Ordering::Equal,
            })
    }
}

/// Owner of every event a layout has consumed, including split pieces.
#[derive(Clone, Debug, Default)]
pub struct EventArena {
    events: Vec<SweepEvent>,
}

impl EventArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ev: SweepEvent) -> EventId {
        self.events.push(ev);
        EventId(self.events.len() - 1)
    }

    #[inline]
    pub fn get(&self, id: EventId) -> &SweepEvent {
        &self.events[id.0]
    }

    /// Split `id` at `y` into two new arena entries.
    pub fn split(&mut self, id: EventId, y: f64) -> Result<(EventId, EventId)> {
        let (upper, lower) = self.get(id).split_at(y)?;
        Ok((self.push(upper), self.push(lower)))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl std::ops::Index<EventId> for EventArena {
    type Output = SweepEvent;

    #[inline]
    fn index(&self, id: EventId) -> &SweepEvent {
        self.get(id)
    }
}

//! Pending sweep events of one polygon.

use std::cmp::Ordering;

use super::event::{JointId, SweepEvent};
use crate::error::Result;
use crate::geom2::{Path, Point};

/// Not-yet-consumed events, kept sorted in descending sweep order so the
/// next event sits at the end.
///
/// Built once per polygon and only ever drained.
#[derive(Clone, Debug, Default)]
pub struct SweepBuffer {
    pending: Vec<SweepEvent>,
}

impl SweepBuffer {
    /// Events of the single contour of `path`; curves and several contours
    /// are rejected.
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::from_vertices(&path.single_contour()?))
    }

    /// Events of the closed polygon through `pts`.
    ///
    /// Horizontal edges produce no event; the vertices they connect share a
    /// joint. An event is terminal when its bottom joint is a local bottom,
    /// i.e. both of the joint's edges come from above.
    pub fn from_vertices(pts: &[Point]) -> Self {
        let mut buffer = SweepBuffer::default();
        let n = pts.len();
        let prev = |i: usize| pts[(i + n - 1) % n];
        // Start the joint walk at the beginning of a run of equal y.
        let Some(start) = (0..n).find(|&i| prev(i).y != pts[i].y) else {
            return buffer;
        };
        let mut joint = vec![JointId(0); n];
        let mut next_joint = 0usize;
        for k in 0..n {
            let i = (start + k) % n;
            if k > 0 && prev(i).y != pts[i].y {
                next_joint += 1;
            }
            joint[i] = JointId(next_joint);
        }

        let mut events = Vec::with_capacity(n);
        for i in 0..n {
            let j = (i + 1) % n;
            if let Some(mut ev) = SweepEvent::from_edge(pts[i], pts[j]) {
                let (top, bottom) = if pts[i].y < pts[j].y {
                    (joint[i], joint[j])
                } else {
                    (joint[j], joint[i])
                };
                ev.top = Some(top);
                ev.bottom = Some(bottom);
                events.push(ev);
            }
        }
        let mut bottoms = vec![0u8; next_joint + 1];
        for ev in &events {
            if let Some(JointId(b)) = ev.bottom {
                bottoms[b] += 1;
            }
        }
        for mut ev in events {
            ev.terminal = ev.bottom.is_some_and(|JointId(b)| bottoms[b] == 2);
            buffer.insert(ev);
        }
        buffer
    }

    /// Sorted insertion (binary search).
    pub fn insert(&mut self, ev: SweepEvent) {
        let at = self
            .pending
            .partition_point(|e| e.sweep_cmp(&ev) != Ordering::Less);
        self.pending.insert(at, ev);
    }

    /// Next event in sweep order.
    #[inline]
    pub fn peek(&self) -> Option<&SweepEvent> {
        self.pending.last()
    }

    #[inline]
    pub fn pop(&mut self) -> Option<SweepEvent> {
        self.pending.pop()
    }

    /// Remove and return the pending event that starts at `joint`.
    pub fn take_partner(&mut self, joint: JointId) -> Option<SweepEvent> {
        let at = self.pending.iter().position(|e| e.top == Some(joint))?;
        Some(self.pending.remove(at))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending events in sweep order.
    pub fn iter(&self) -> impl Iterator<Item = &SweepEvent> {
        self.pending.iter().rev()
    }
}

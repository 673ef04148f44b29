//! Slice maintenance for `WordWrap`.
//!
//! The slice list is valid from the layout cursor down to the horizon. Each
//! `extend_slices` call pulls the events that start within reach, resolves
//! corridors that closed above the cursor, drops consumed history, and levels
//! what remains.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{FlowError, Result};
use crate::geom2::{FlowCfg, Path, Rect, Size};
use crate::sweep::{Chain, EventArena, Slice, SweepBuffer, SweepEvent};

/// Layout engine for one polygon.
///
/// Owns the sweep buffer, the event arena and the slice list; nothing is
/// shared with other instances.
#[derive(Clone, Debug)]
pub struct WordWrap {
    pub(crate) cfg: FlowCfg,
    pub(crate) top: f64,
    pub(crate) bottom: f64,
    initial: SweepBuffer,
    pub(crate) buffer: SweepBuffer,
    pub(crate) arena: EventArena,
    pub(crate) slices: Vec<Slice>,
    pub(crate) horizon: f64,
}

impl WordWrap {
    /// Engine for the single straight-edged contour of `path`.
    pub fn new(path: &Path) -> Result<Self> {
        Self::with_cfg(path, FlowCfg::default())
    }

    pub fn with_cfg(path: &Path, cfg: FlowCfg) -> Result<Self> {
        let vertices = path.single_contour()?;
        let buffer = SweepBuffer::from_vertices(&vertices);
        let (top, bottom) =
            Rect::bounding(&vertices).map_or((0.0, 0.0), |r| (r.min_y(), r.max_y()));
        debug!(events = buffer.len(), top, bottom, "sweep buffer built");
        Ok(Self {
            cfg,
            top,
            bottom,
            initial: buffer.clone(),
            buffer,
            arena: EventArena::new(),
            slices: Vec::new(),
            horizon: top,
        })
    }

    /// Forget all layout progress.
    pub fn reset(&mut self) {
        self.buffer = self.initial.clone();
        self.arena.clear();
        self.slices.clear();
        self.horizon = self.top;
    }

    #[inline]
    pub fn cfg(&self) -> &FlowCfg {
        &self.cfg
    }
    #[inline]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }
    #[inline]
    pub fn arena(&self) -> &EventArena {
        &self.arena
    }
    /// Events not yet consumed.
    #[inline]
    pub fn pending_events(&self) -> usize {
        self.buffer.len()
    }
    /// Lowest y the current slice list is valid for.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }
    /// Vertical extent of the polygon.
    #[inline]
    pub fn vertical_bounds(&self) -> (f64, f64) {
        (self.top, self.bottom)
    }

    fn nearest_closure(&self) -> f64 {
        self.slices
            .iter()
            .flat_map(|s| [s.left.closure, s.right.closure])
            .flatten()
            .map(|c| c.y)
            .fold(f64::INFINITY, f64::min)
    }

    /// Bring the slice list up to date for a box of `size` at `cursor`.
    pub fn extend_slices(&mut self, cursor: f64, size: Size) -> Result<()> {
        let lookahead = cursor + 2.0 * size.height;
        let mut closure_y;
        loop {
            closure_y = self.nearest_closure();
            let event_y = self.buffer.peek().map_or(f64::INFINITY, |e| e.p0.y);
            if closure_y <= cursor && closure_y <= event_y {
                self.merge_and_drop_slices(closure_y)?;
                continue;
            }
            if event_y <= lookahead && event_y < closure_y {
                if let Some(ev) = self.buffer.pop() {
                    self.append_event(ev)?;
                    continue;
                }
            }
            break;
        }
        let closure_limit = if closure_y > cursor { closure_y } else { lookahead };
        self.horizon = lookahead.min(closure_limit).min(self.bottom);
        self.drop_events_in_slices(cursor)?;
        self.level_slices_horizontally()?;
        Ok(())
    }

    /// Continue an open wall ending at the event's top joint, or start a slice.
    fn append_event(&mut self, ev: SweepEvent) -> Result<()> {
        if let Some(top) = ev.top {
            let arena = &mut self.arena;
            for slice in &mut self.slices {
                for chain in [&mut slice.left, &mut slice.right] {
                    if chain.open_end(arena) == Some(top) {
                        let id = arena.push(ev);
                        chain.push(arena, id);
                        return Ok(());
                    }
                }
            }
        }
        self.append_event_as_new_slice(ev)
    }

    /// `ev` starts at a local top: pair it with the other edge leaving that
    /// top, then either split the slice the top pokes into or insert a new
    /// slice in left-to-right position.
    pub fn append_event_as_new_slice(&mut self, ev: SweepEvent) -> Result<()> {
        let unpaired = FlowError::UnpairedEvent {
            x: ev.p0.x,
            y: ev.p0.y,
        };
        let partner = match ev.top {
            Some(joint) => self.buffer.take_partner(joint).ok_or(unpaired)?,
            None => return Err(unpaired),
        };
        let (a, b) = if ev.sweep_cmp(&partner) != Ordering::Greater {
            (ev, partner)
        } else {
            (partner, ev)
        };
        let p = a.p0;

        if let Some(k) = self
            .slices
            .iter()
            .position(|s| s.contains_point(&self.arena, p))
        {
            let (upper, mut lower) = self.slices[k].right.split_at(&mut self.arena, p.y)?;
            if lower.is_empty() {
                lower.extend(self.slices[k].right.last());
            }
            let old = std::mem::take(&mut self.slices[k]);
            let a_id = self.arena.push(a);
            let b_id = self.arena.push(b);
            let mut right = Chain::from_events(upper, None);
            right.push(&self.arena, a_id);
            let mut left = Chain::new();
            left.push(&self.arena, b_id);
            let first = Slice::new(old.left, right);
            let second = Slice::new(left, Chain::from_events(lower, old.right.closure));
            self.slices.splice(k..=k, [first, second]);
            debug!(x = p.x, y = p.y, slice = k, count = self.slices.len(), "slice split");
            return Ok(());
        }

        let at = self
            .slices
            .iter()
            .filter(|s| reference_x(s, &self.arena, p.y).is_some_and(|x| x < p.x))
            .count();
        let a_id = self.arena.push(a);
        let b_id = self.arena.push(b);
        let mut left = Chain::new();
        left.push(&self.arena, a_id);
        let mut right = Chain::new();
        right.push(&self.arena, b_id);
        self.slices.insert(at, Slice::new(left, right));
        debug!(x = p.x, y = p.y, slice = at, count = self.slices.len(), "slice opened");
        Ok(())
    }

    /// Level every slice; returns whether any slice changed.
    pub fn level_slices_horizontally(&mut self) -> Result<bool> {
        let mut changed = false;
        for slice in &mut self.slices {
            changed |= slice.level(&mut self.arena)?;
        }
        Ok(changed)
    }

    /// Resolve every corridor that closed at or above `y`.
    ///
    /// A slice whose walls meet at one local bottom is dropped. Two
    /// neighbours whose facing walls meet are merged and trimmed at the
    /// meeting height. Any other closure at or above `y` means the walls
    /// cannot be reconciled.
    pub fn merge_and_drop_slices(&mut self, y: f64) -> Result<()> {
        loop {
            if let Some(k) = self
                .slices
                .iter()
                .position(|s| s.closed_joint().is_some_and(|c| c.y <= y))
            {
                self.slices.remove(k);
                debug!(y, slice = k, count = self.slices.len(), "slice dropped");
                continue;
            }
            let facing = self.slices.windows(2).position(|w| {
                match (w[0].right.closure, w[1].left.closure) {
                    (Some(r), Some(l)) => r.joint == l.joint && r.y <= y,
                    _ => false,
                }
            });
            if let Some(k) = facing {
                let second = self.slices.remove(k + 1);
                let first = std::mem::take(&mut self.slices[k]);
                let meet = first.right.closure.map_or(y, |c| c.y);
                let mut merged = Slice::new(first.left, second.right);
                merged.left.trim_above(&mut self.arena, meet)?;
                merged.right.trim_above(&mut self.arena, meet)?;
                self.slices[k] = merged;
                debug!(y = meet, slice = k, count = self.slices.len(), "slices merged");
                continue;
            }
            break;
        }
        let dangling = self
            .slices
            .iter()
            .flat_map(|s| [s.left.closure, s.right.closure])
            .flatten()
            .find(|c| c.y <= y);
        match dangling {
            Some(c) => Err(FlowError::DanglingBoundary { y: c.y }),
            None => Ok(()),
        }
    }

    /// Drop wall history above `cursor`.
    pub fn drop_events_in_slices(&mut self, cursor: f64) -> Result<()> {
        for slice in &mut self.slices {
            slice.left.trim_above(&mut self.arena, cursor)?;
            slice.right.trim_above(&mut self.arena, cursor)?;
        }
        Ok(())
    }
}

/// Wall position used to order a new slice against an existing one.
fn reference_x(slice: &Slice, arena: &EventArena, y: f64) -> Option<f64> {
    let chain = if slice.right.is_empty() {
        &slice.left
    } else {
        &slice.right
    };
    let yy = y.max(chain.top(arena)?).min(chain.bottom(arena)?);
    let id = chain.edge_at(arena, yy)?;
    Some(arena[id].x_at(yy))
}

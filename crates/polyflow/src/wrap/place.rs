//! The placement loop: rows of boxes, left to right, top to bottom.

use tracing::debug;

use super::engine::WordWrap;
use super::source::WordSource;
use crate::error::{FlowError, Result};
use crate::geom2::{Point, Size};

/// Summary of one `place_word_boxes` run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WrapOutcome {
    /// Boxes that received a position.
    pub placed: usize,
    /// Rows started.
    pub lines: usize,
    /// Every box of the source was placed.
    pub complete: bool,
}

/// The row currently being filled.
#[derive(Clone, Copy, Debug)]
struct Row {
    y: f64,
    /// Where the next box may start.
    x: f64,
    height: f64,
}

fn check_size(size: Size) -> Result<Size> {
    let ok = size.width.is_finite()
        && size.height.is_finite()
        && size.width >= 0.0
        && size.height > 0.0;
    if ok {
        Ok(size)
    } else {
        Err(FlowError::InvalidBoxSize {
            width: size.width,
            height: size.height,
        })
    }
}

impl WordWrap {
    /// Lay out every box `source` yields.
    ///
    /// A box first tries the open row, continuing in the current slice or
    /// jumping to a slice further right. When nothing on the row takes it, the
    /// row is closed and the box is searched for below it. Layout stops early
    /// when a box fits nowhere in the rest of the polygon.
    pub fn place_word_boxes<S: WordSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<WrapOutcome> {
        self.reset();
        source.reset();
        let space = source.space();
        let mut outcome = WrapOutcome {
            complete: true,
            ..WrapOutcome::default()
        };
        let mut cursor = self.top;
        let mut row: Option<Row> = None;

        while let Some(size) = source.pull_box() {
            let size = check_size(size)?;
            if let Some(r) = row {
                if let Some((x, (left, right))) = self.fit_on_row(r, size)? {
                    // Jumped to another slice.
                    let prev_right = r.x - space;
                    let eps = self.cfg.eps_fit;
                    if !(left <= prev_right + eps && prev_right <= right + eps) {
                        source.end_of_slice();
                    }
                    source.place_box(Point::new(x, r.y));
                    outcome.placed += 1;
                    row = Some(Row {
                        y: r.y,
                        x: x + size.width + space,
                        height: r.height.max(size.height),
                    });
                    continue;
                }
                source.end_of_slice();
                source.end_of_line();
                cursor = r.y + r.height;
            }
            match self.point_for_box_in_slices(size, cursor)? {
                Some((_, p)) => {
                    source.place_box(p);
                    outcome.placed += 1;
                    outcome.lines += 1;
                    row = Some(Row {
                        y: p.y,
                        x: p.x + size.width + space,
                        height: size.height,
                    });
                }
                None => {
                    outcome.complete = false;
                    break;
                }
            }
        }
        source.end_of_wrap();
        debug!(
            placed = outcome.placed,
            lines = outcome.lines,
            complete = outcome.complete,
            "layout finished"
        );
        Ok(outcome)
    }

    /// Leftmost `x` on the open row for a box of `size`, with the span of the
    /// slice that takes it.
    fn fit_on_row(&mut self, row: Row, size: Size) -> Result<Option<(f64, (f64, f64))>> {
        self.extend_slices(row.y, size)?;
        let eps = self.cfg.eps_fit;
        if row.y + size.height > self.horizon + self.cfg.eps_eq {
            return Ok(None);
        }
        for slice in &self.slices {
            let Some((l, r)) = slice.span(&self.arena, row.y, row.y + size.height) else {
                continue;
            };
            if r < row.x {
                continue;
            }
            let x = row.x.max(l);
            if x + size.width <= r + eps {
                return Ok(Some((x, (l, r))));
            }
        }
        Ok(None)
    }
}

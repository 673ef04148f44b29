//! Straight-edged paths as tagged segments.
//!
//! `Curve` is representable so callers can pass their paths through
//! unchanged, but every operation that needs vertices rejects it with
//! `FlowError::UnsupportedCurve`.

use super::types::{Aff2, Point, Rect};
use crate::error::{FlowError, Result};

/// One path command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Move(Point),
    Line(Point),
    Curve { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

/// Ordered list of segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Closed polygon through `points` in order.
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Path::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
            path.close();
        }
        path
    }

    /// Closed rectangle, clockwise on screen.
    pub fn rect(r: Rect) -> Self {
        Path::polygon(&r.corners())
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(Segment::Move(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(Segment::Line(p));
        self
    }

    pub fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> &mut Self {
        self.segments.push(Segment::Curve { ctrl1, ctrl2, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(Segment::Close);
        self
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Vertex lists, one per subpath.
    ///
    /// Consecutive duplicate vertices are collapsed and an explicit return to
    /// the start vertex is dropped, so every contour is an open vertex cycle.
    /// NaN or infinite vertices are rejected.
    pub fn contours(&self) -> Result<Vec<Vec<Point>>> {
        let mut out = Vec::new();
        let mut current: Option<Vec<Point>> = None;
        for (index, seg) in self.segments.iter().enumerate() {
            if let Segment::Move(p) | Segment::Line(p) = *seg {
                if !(p.x.is_finite() && p.y.is_finite()) {
                    return Err(FlowError::NonFiniteVertex { index });
                }
            }
            match *seg {
                Segment::Move(p) => {
                    if let Some(c) = current.take() {
                        push_contour(&mut out, c);
                    }
                    current = Some(vec![p]);
                }
                Segment::Line(p) => match current.as_mut() {
                    Some(c) => c.push(p),
                    None => return Err(FlowError::MissingMove { index }),
                },
                Segment::Curve { .. } => return Err(FlowError::UnsupportedCurve { index }),
                Segment::Close => {
                    if let Some(c) = current.take() {
                        push_contour(&mut out, c);
                    }
                }
            }
        }
        if let Some(c) = current.take() {
            push_contour(&mut out, c);
        }
        Ok(out)
    }

    /// The vertices of the only contour; an empty path yields no vertices.
    pub fn single_contour(&self) -> Result<Vec<Point>> {
        let mut contours = self.contours()?;
        match contours.len() {
            0 => Ok(Vec::new()),
            1 => Ok(contours.swap_remove(0)),
            count => Err(FlowError::MultipleContours { count }),
        }
    }

    /// Bounding box of all vertices; `None` for an empty path.
    pub fn bounds(&self) -> Result<Option<Rect>> {
        let pts: Vec<Point> = self.contours()?.into_iter().flatten().collect();
        Ok(Rect::bounding(&pts))
    }

    /// Image of the path under `f` (control points included).
    pub fn transformed(&self, f: &Aff2) -> Path {
        let segments = self
            .segments
            .iter()
            .map(|seg| match *seg {
                Segment::Move(p) => Segment::Move(f.apply(p)),
                Segment::Line(p) => Segment::Line(f.apply(p)),
                Segment::Curve { ctrl1, ctrl2, to } => Segment::Curve {
                    ctrl1: f.apply(ctrl1),
                    ctrl2: f.apply(ctrl2),
                    to: f.apply(to),
                },
                Segment::Close => Segment::Close,
            })
            .collect();
        Path { segments }
    }
}

fn push_contour(out: &mut Vec<Vec<Point>>, mut c: Vec<Point>) {
    c.dedup();
    if c.len() > 1 && c.first() == c.last() {
        c.pop();
    }
    if !c.is_empty() {
        out.push(c);
    }
}

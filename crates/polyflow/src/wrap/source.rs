//! The caller side of a layout: box sizes in, positions and flags out.

use crate::geom2::{Point, Rect, Size};

/// Capability the layout engine consumes.
///
/// The engine pulls one box at a time, reports where it landed, and marks
/// layout boundaries on the most recently placed box. A box that does not
/// fit on the current row is retried on the next one; it is never pulled twice.
pub trait WordSource {
    /// Rewind to the first box.
    fn reset(&mut self);
    /// Size of the next box, or `None` when exhausted.
    fn pull_box(&mut self) -> Option<Size>;
    /// Final top-left position of the last pulled box.
    fn place_box(&mut self, origin: Point);
    /// The next box goes into another corridor.
    fn end_of_slice(&mut self);
    /// The next box starts a new row.
    fn end_of_line(&mut self);
    /// Nothing follows.
    fn end_of_wrap(&mut self);
    /// Horizontal gap between consecutive boxes on a row.
    fn space(&self) -> f64;
}

/// A caller box: size, payload, and the position and flags the engine sets.
#[derive(Clone, Debug, PartialEq)]
pub struct WordBox<P> {
    pub rect: Rect,
    pub payload: P,
    pub placed: bool,
    pub end_of_line: bool,
    pub end_of_slice: bool,
    pub end_of_wrap: bool,
}

impl<P> WordBox<P> {
    pub fn new(size: Size, payload: P) -> Self {
        Self {
            rect: Rect::from_origin_size(Point::zeros(), size),
            payload,
            placed: false,
            end_of_line: false,
            end_of_slice: false,
            end_of_wrap: false,
        }
    }

    fn clear(&mut self) {
        self.rect.origin = Point::zeros();
        self.placed = false;
        self.end_of_line = false;
        self.end_of_slice = false;
        self.end_of_wrap = false;
    }
}

/// `WordSource` over an owned list of boxes.
#[derive(Clone, Debug)]
pub struct BoxList<P> {
    boxes: Vec<WordBox<P>>,
    space: f64,
    next: usize,
    last_placed: Option<usize>,
}

impl<P> BoxList<P> {
    pub fn new(space: f64) -> Self {
        Self::with_boxes(Vec::new(), space)
    }

    pub fn with_boxes(boxes: Vec<WordBox<P>>, space: f64) -> Self {
        Self {
            boxes,
            space,
            next: 0,
            last_placed: None,
        }
    }

    pub fn push(&mut self, size: Size, payload: P) {
        self.boxes.push(WordBox::new(size, payload));
    }

    #[inline]
    pub fn boxes(&self) -> &[WordBox<P>] {
        &self.boxes
    }

    pub fn into_boxes(self) -> Vec<WordBox<P>> {
        self.boxes
    }

    /// Boxes the last layout placed, in placement order.
    pub fn placed(&self) -> impl Iterator<Item = &WordBox<P>> {
        self.boxes.iter().filter(|b| b.placed)
    }

    fn mark(&mut self, f: impl FnOnce(&mut WordBox<P>)) {
        if let Some(i) = self.last_placed {
            f(&mut self.boxes[i]);
        }
    }
}

impl BoxList<()> {
    /// Payload-free boxes from bare sizes.
    pub fn from_sizes(sizes: impl IntoIterator<Item = Size>, space: f64) -> Self {
        Self::with_boxes(sizes.into_iter().map(|s| WordBox::new(s, ())).collect(), space)
    }
}

impl<P> WordSource for BoxList<P> {
    fn reset(&mut self) {
        self.next = 0;
        self.last_placed = None;
        for b in &mut self.boxes {
            b.clear();
        }
    }

    fn pull_box(&mut self) -> Option<Size> {
        let size = self.boxes.get(self.next)?.rect.size;
        self.next += 1;
        Some(size)
    }

    fn place_box(&mut self, origin: Point) {
        let Some(i) = self.next.checked_sub(1) else {
            return;
        };
        let b = &mut self.boxes[i];
        b.rect.origin = origin;
        b.placed = true;
        self.last_placed = Some(i);
    }

    fn end_of_slice(&mut self) {
        self.mark(|b| b.end_of_slice = true);
    }

    fn end_of_line(&mut self) {
        self.mark(|b| b.end_of_line = true);
    }

    fn end_of_wrap(&mut self) {
        self.mark(|b| b.end_of_wrap = true);
    }

    fn space(&self) -> f64 {
        self.space
    }
}

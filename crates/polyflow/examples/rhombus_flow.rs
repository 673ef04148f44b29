//! Flow a handful of words into a rhombus and print where they land.
//!
//! Usage:
//!   cargo run -p polyflow --example rhombus_flow
//!   cargo run -p polyflow --example rhombus_flow -- 120
//!
//! The optional argument is the number of words (default 60).

use polyflow::prelude::*;

fn main() -> Result<(), FlowError> {
    let count: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(60);
    let rhombus = Path::polygon(&[
        Point::new(200.0, 40.0),
        Point::new(400.0, 180.0),
        Point::new(150.0, 250.0),
        Point::new(20.0, 100.0),
    ]);
    let mut boxes = BoxList::new(4.0);
    for i in 0..count {
        let letters = 2 + (i * 7) % 6;
        boxes.push(Size::new(letters as f64 * 8.0, 18.0), format!("w{i}"));
    }

    let mut wrap = WordWrap::new(&rhombus)?;
    let outcome = wrap.place_word_boxes(&mut boxes)?;
    for b in boxes.placed() {
        let mut flags = String::new();
        if b.end_of_slice {
            flags.push_str(" slice");
        }
        if b.end_of_line {
            flags.push_str(" line");
        }
        if b.end_of_wrap {
            flags.push_str(" wrap");
        }
        println!(
            "{:>5} at ({:8.3}, {:8.3}) {:>5.1}x{:<5.1}{flags}",
            b.payload, b.rect.origin.x, b.rect.origin.y, b.rect.size.width, b.rect.size.height
        );
    }
    println!(
        "placed {} of {count} words on {} lines (complete: {})",
        outcome.placed, outcome.lines, outcome.complete
    );
    Ok(())
}

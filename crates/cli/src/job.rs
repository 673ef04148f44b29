use anyhow::{ensure, Context, Result};
use polyflow::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path as FsPath;

/// Placement of the polygon in the layout frame: scale, then rotate, then translate.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Transform {
    #[serde(default)]
    pub translate: Option<[f64; 2]>,
    #[serde(default)]
    pub scale: Option<[f64; 2]>,
    /// Radians.
    #[serde(default)]
    pub rotate: Option<f64>,
}

impl Transform {
    pub fn to_aff2(&self) -> Aff2 {
        let [sx, sy] = self.scale.unwrap_or([1.0, 1.0]);
        let [dx, dy] = self.translate.unwrap_or([0.0, 0.0]);
        let rot = Aff2::rotation(self.rotate.unwrap_or(0.0));
        Aff2::translation(dx, dy).compose(&rot.compose(&Aff2::scaling(sx, sy)))
    }
}

/// A layout job as read from disk.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Job {
    pub polygon: Vec<[f64; 2]>,
    #[serde(default)]
    pub text: String,
    pub char_width: f64,
    pub line_height: f64,
    #[serde(default)]
    pub space: f64,
    #[serde(default)]
    pub transform: Option<Transform>,
}

impl Job {
    pub fn read(path: &FsPath) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading job {}", path.display()))?;
        let job: Job = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing job {}", path.display()))?;
        ensure!(
            job.char_width > 0.0 && job.line_height > 0.0,
            "char_width and line_height must be positive"
        );
        Ok(job)
    }

    /// The polygon in the layout frame.
    pub fn path(&self) -> Path {
        let pts: Vec<Point> = self.polygon.iter().map(|&[x, y]| Point::new(x, y)).collect();
        let path = Path::polygon(&pts);
        match &self.transform {
            Some(t) => path.transformed(&t.to_aff2()),
            None => path,
        }
    }

    /// One box per whitespace-separated word, `chars * char_width` wide.
    pub fn word_boxes(&self) -> BoxList<String> {
        let mut boxes = BoxList::new(self.space);
        for word in self.text.split_whitespace() {
            let width = word.chars().count() as f64 * self.char_width;
            boxes.push(Size::new(width, self.line_height), word.to_string());
        }
        boxes
    }
}

#[derive(Debug, Serialize)]
pub struct PlacedWord {
    pub word: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub end_of_line: bool,
    pub end_of_slice: bool,
    pub end_of_wrap: bool,
}

/// Output document of `flow`.
#[derive(Debug, Serialize)]
pub struct FlowResult {
    pub boxes: Vec<PlacedWord>,
    pub placed: usize,
    pub lines: usize,
    pub complete: bool,
}

/// Run the layout for `job`.
pub fn flow(job: &Job) -> Result<FlowResult> {
    let mut wrap = WordWrap::new(&job.path()).context("building layout engine")?;
    let mut boxes = job.word_boxes();
    let outcome = wrap.place_word_boxes(&mut boxes).context("placing words")?;
    let placed = boxes
        .into_boxes()
        .into_iter()
        .filter(|b| b.placed)
        .map(|b| PlacedWord {
            word: b.payload,
            x: b.rect.origin.x,
            y: b.rect.origin.y,
            width: b.rect.size.width,
            height: b.rect.size.height,
            end_of_line: b.end_of_line,
            end_of_slice: b.end_of_slice,
            end_of_wrap: b.end_of_wrap,
        })
        .collect();
    Ok(FlowResult {
        boxes: placed,
        placed: outcome.placed,
        lines: outcome.lines,
        complete: outcome.complete,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn square_job(text: &str) -> Job {
        Job {
            polygon: vec![[20.0, 20.0], [80.0, 20.0], [80.0, 80.0], [20.0, 80.0]],
            text: text.to_string(),
            char_width: 10.0,
            line_height: 20.0,
            space: 0.0,
            transform: None,
        }
    }

    #[test]
    fn words_are_measured_per_char() {
        let job = square_job("four ab  xy\nq");
        let boxes = job.word_boxes();
        let widths: Vec<f64> = boxes.boxes().iter().map(|b| b.rect.size.width).collect();
        assert_eq!(widths, vec![40.0, 20.0, 20.0, 10.0]);
        assert_eq!(boxes.boxes()[1].payload, "ab");
    }

    #[test]
    fn flow_fills_the_square() {
        let job = square_job("four ab four ab four ab four");
        let res = flow(&job).unwrap();
        assert_eq!(res.placed, 6);
        assert!(!res.complete);
        assert_eq!(res.boxes[0].word, "four");
        assert_eq!((res.boxes[0].x, res.boxes[0].y), (20.0, 20.0));
        assert!(res.boxes[5].end_of_wrap);
    }

    #[test]
    fn transform_moves_the_polygon() {
        let mut job = square_job("four");
        job.transform = Some(Transform {
            translate: Some([100.0, 0.0]),
            ..Transform::default()
        });
        let res = flow(&job).unwrap();
        assert_eq!((res.boxes[0].x, res.boxes[0].y), (120.0, 20.0));
    }

    #[test]
    fn read_rejects_bad_metrics() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("job.json");
        fs::write(
            &path,
            r#"{"polygon": [[0,0],[10,0],[10,10]], "char_width": 0, "line_height": 10}"#,
        )
        .unwrap();
        assert!(Job::read(&path).is_err());
        fs::write(
            &path,
            r#"{"polygon": [[0,0],[10,0],[10,10]], "char_width": 2, "line_height": 10}"#,
        )
        .unwrap();
        let job = Job::read(&path).unwrap();
        assert_eq!(job.space, 0.0);
        assert!(job.text.is_empty());
    }
}

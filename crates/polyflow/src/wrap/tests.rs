use super::*;
use crate::error::FlowError;
use crate::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use crate::geom2::{ApproxEq, Path, Point, Rect, Size};
use crate::robust::{contains, segment_meets_rect};
use crate::sweep::SweepEvent;
use nalgebra::vector;
use proptest::prelude::*;

fn polygon(pts: &[(f64, f64)]) -> Path {
    let pts: Vec<Point> = pts.iter().map(|&(x, y)| vector![x, y]).collect();
    Path::polygon(&pts)
}

/// 40x20 and 20x20 boxes, alternating.
fn alternating(n: usize) -> BoxList<()> {
    let sizes = (0..n).map(|i| {
        if i % 2 == 0 {
            Size::new(40.0, 20.0)
        } else {
            Size::new(20.0, 20.0)
        }
    });
    BoxList::from_sizes(sizes, 0.0)
}

fn run(path: &Path, boxes: &mut BoxList<()>) -> WrapOutcome {
    let mut wrap = WordWrap::new(path).unwrap();
    wrap.place_word_boxes(boxes).unwrap()
}

fn flags(b: &WordBox<()>) -> (bool, bool, bool) {
    (b.end_of_line, b.end_of_slice, b.end_of_wrap)
}

fn near(p: Point, x: f64, y: f64) -> bool {
    (p.x - x).abs() < 1e-3 && (p.y - y).abs() < 1e-3
}

/// Every placed box lies inside the polygon and no two overlap.
fn assert_valid_layout(path: &Path, boxes: &BoxList<()>) {
    let pts = path.single_contour().unwrap();
    let placed: Vec<Rect> = boxes.placed().map(|b| b.rect).collect();
    for (i, r) in placed.iter().enumerate() {
        let center = r.origin + vector![r.size.width / 2.0, r.size.height / 2.0];
        assert!(contains(&pts, center), "box {i} {r:?} center outside");
        let inner = r.inset(1e-6);
        if inner.size.width > 0.0 {
            for c in inner.corners() {
                assert!(contains(&pts, c), "box {i} {r:?} corner {c:?} outside");
            }
            for k in 0..pts.len() {
                let (a, b) = (pts[k], pts[(k + 1) % pts.len()]);
                assert!(!segment_meets_rect(a, b, &inner), "box {i} {r:?} crosses edge {a:?} {b:?}");
            }
        }
        for (j, o) in placed[..i].iter().enumerate() {
            assert!(!r.overlaps_eps(o, 1e-6), "box {i} {r:?} overlaps box {j} {o:?}");
        }
    }
}

fn star5(cx: f64, cy: f64, ro: f64, ri: f64) -> Path {
    let round3 = |v: f64| (v * 1000.0).round() / 1000.0;
    let pts: Vec<Point> = (0..10)
        .map(|k| {
            let a = -std::f64::consts::FRAC_PI_2 + k as f64 * std::f64::consts::PI / 5.0;
            let r = if k % 2 == 0 { ro } else { ri };
            vector![round3(cx + r * a.cos()), round3(cy + r * a.sin())]
        })
        .collect();
    Path::polygon(&pts)
}

fn crown() -> Path {
    polygon(&[
        (0.0, 0.0),
        (400.0, 0.0),
        (400.0, 300.0),
        (320.0, 300.0),
        (280.0, 100.0),
        (240.0, 300.0),
        (160.0, 300.0),
        (120.0, 100.0),
        (80.0, 300.0),
        (0.0, 300.0),
    ])
}

fn notch() -> Path {
    polygon(&[
        (0.0, 0.0),
        (150.0, 0.0),
        (200.0, 150.0),
        (250.0, 0.0),
        (400.0, 0.0),
        (400.0, 300.0),
        (0.0, 300.0),
    ])
}

/// Both walls kink at y=150, the same height as the apex of the spike rising
/// from the bottom edge.
fn kinked_spike() -> Path {
    polygon(&[
        (0.0, 0.0),
        (400.0, 0.0),
        (360.0, 150.0),
        (400.0, 300.0),
        (250.0, 300.0),
        (200.0, 150.0),
        (150.0, 300.0),
        (0.0, 300.0),
        (40.0, 150.0),
    ])
}

fn bowtie() -> Path {
    polygon(&[
        (0.0, 0.0),
        (150.0, 0.0),
        (200.0, 120.0),
        (250.0, 0.0),
        (400.0, 0.0),
        (400.0, 300.0),
        (250.0, 300.0),
        (200.0, 180.0),
        (150.0, 300.0),
        (0.0, 300.0),
    ])
}

#[test]
fn square_fills_three_rows() {
    let path = polygon(&[(20.0, 20.0), (80.0, 20.0), (80.0, 80.0), (20.0, 80.0)]);
    let mut boxes = alternating(400);
    let out = run(&path, &mut boxes);
    assert_eq!(
        out,
        WrapOutcome {
            placed: 6,
            lines: 3,
            complete: false
        }
    );
    let b = boxes.boxes();
    assert_eq!(b[0].rect, Rect::new(20.0, 20.0, 40.0, 20.0));
    assert_eq!(b[1].rect, Rect::new(60.0, 20.0, 20.0, 20.0));
    assert_eq!(b[5].rect, Rect::new(60.0, 60.0, 20.0, 20.0));
    assert!(!b[6].placed);
    assert_eq!(flags(&b[0]), (false, false, false));
    assert_eq!(flags(&b[1]), (true, true, false));
    assert_eq!(flags(&b[3]), (true, true, false));
    assert_eq!(flags(&b[5]), (true, true, true));
    assert_valid_layout(&path, &boxes);
}

#[test]
fn rhombus_tucks_boxes_into_corners() {
    let path = polygon(&[(200.0, 40.0), (400.0, 180.0), (150.0, 250.0), (20.0, 100.0)]);
    let mut boxes = alternating(400);
    let out = run(&path, &mut boxes);
    assert_eq!(out.placed, 52);
    assert!(!out.complete);
    let b = boxes.boxes();
    assert!(near(b[0].rect.origin, 172.9032, 49.0323), "{:?}", b[0].rect);
    assert!(near(b[51].rect.origin, 171.8280, 209.0323), "{:?}", b[51].rect);
    assert_eq!(flags(&b[51]), (true, true, true));
    assert_valid_layout(&path, &boxes);
}

#[test]
fn triangles_agree_on_count() {
    let cases = [
        (vec![(200.0, 20.0), (380.0, 300.0), (20.0, 300.0)], (180.0, 51.1111), (338.5714, 271.1111)),
        (vec![(380.0, 20.0), (380.0, 300.0), (20.0, 300.0)], (340.0, 51.1111), (357.1429, 271.1111)),
        (vec![(20.0, 20.0), (380.0, 300.0), (20.0, 300.0)], (20.0, 51.1111), (320.0, 271.1111)),
    ];
    for (pts, first, last) in cases {
        let path = polygon(&pts);
        let mut boxes = alternating(400);
        let out = run(&path, &mut boxes);
        assert_eq!(out.placed, 68, "{pts:?}");
        let b = boxes.boxes();
        assert!(near(b[0].rect.origin, first.0, first.1), "{pts:?} {:?}", b[0].rect);
        assert!(near(b[67].rect.origin, last.0, last.1), "{pts:?} {:?}", b[67].rect);
        assert_valid_layout(&path, &boxes);
    }
}

#[test]
fn orientation_of_the_contour_does_not_matter() {
    let path = bowtie();
    let mut rev_pts = path.single_contour().unwrap();
    rev_pts.reverse();
    let rev = Path::polygon(&rev_pts);
    let mut a = alternating(400);
    let mut b = alternating(400);
    assert_eq!(run(&path, &mut a), run(&rev, &mut b));
    for (x, y) in a.placed().zip(b.placed()) {
        assert!(x.rect.approx_eq(&y.rect));
    }
}

#[test]
fn crown_splits_rows_across_three_teeth() {
    let path = crown();
    let mut boxes = alternating(400);
    let out = run(&path, &mut boxes);
    assert_eq!(out.placed, 150);
    let b = boxes.boxes();
    // Full-width rows above the teeth.
    assert_eq!(flags(&b[12]), (true, true, false));
    assert!(near(b[12].rect.origin, 360.0, 0.0));
    // First row through the teeth: three slices.
    assert!(near(b[65].rect.origin, 0.0, 100.0));
    assert!(near(b[67].rect.origin, 60.0, 100.0));
    assert_eq!(flags(&b[67]), (false, true, false));
    assert!(near(b[71].rect.origin, 224.0, 100.0));
    assert_eq!(flags(&b[71]), (false, true, false));
    assert!(near(b[74].rect.origin, 344.0, 100.0));
    assert_eq!(flags(&b[74]), (true, true, false));
    assert!(near(b[149].rect.origin, 360.0, 280.0));
    assert_eq!(flags(&b[149]), (true, true, true));
    assert_valid_layout(&path, &boxes);
}

#[test]
fn star_rows_jump_between_points() {
    let path = star5(300.0, 250.0, 200.0, 80.0);
    let mut boxes = alternating(400);
    let out = run(&path, &mut boxes);
    assert_eq!(out.placed, 54);
    let b = boxes.boxes();
    assert!(near(b[0].rect.origin, 280.0, 107.5374), "{:?}", b[0].rect);
    assert_eq!(flags(&b[0]), (true, true, false));
    assert!(near(b[51].rect.origin, 201.8856, 347.5374), "{:?}", b[51].rect);
    assert_eq!(flags(&b[51]), (false, true, false));
    assert!(near(b[52].rect.origin, 353.9440, 347.5374), "{:?}", b[52].rect);
    assert_eq!(flags(&b[52]), (true, true, false));
    assert_valid_layout(&path, &boxes);
}

#[test]
fn spike_apex_level_with_wall_kinks() {
    let path = kinked_spike();
    let mut boxes = alternating(400);
    let out = run(&path, &mut boxes);
    assert_eq!(out.placed, 138);
    assert!(!out.complete);
    let b = boxes.boxes();
    assert!(near(b[0].rect.origin, 16.0 / 3.0, 0.0));
    assert!(near(b[77].rect.origin, 952.0 / 3.0, 120.0));
    assert_eq!(flags(&b[77]), (true, true, false));
    // The row straddling the apex stays left of it.
    assert!(near(b[81].rect.origin, 140.0, 140.0));
    assert_eq!(flags(&b[81]), (true, true, false));
    // Below the apex each row jumps across the spike.
    assert!(near(b[85].rect.origin, 412.0 / 3.0, 160.0));
    assert_eq!(flags(&b[85]), (false, true, false));
    assert!(near(b[89].rect.origin, 310.0, 160.0));
    assert_eq!(flags(&b[89]), (true, true, false));
    assert!(near(b[137].rect.origin, 350.0, 280.0));
    assert_eq!(flags(&b[137]), (true, true, true));
    for i in 82..138 {
        let r = b[i].rect;
        assert!(r.max_x() <= 200.0 || r.min_x() >= 200.0, "box {i} {r:?} straddles the spike");
    }
    assert_valid_layout(&path, &boxes);

    let mut rev = alternating(400);
    let pts: Vec<Point> = path.single_contour().unwrap().into_iter().rev().collect();
    assert_eq!(run(&Path::polygon(&pts), &mut rev).placed, 138);
    for (a, r) in boxes.placed().zip(rev.placed()) {
        assert!(a.rect.origin.approx_eq(&r.rect.origin));
    }
}

#[test]
fn notch_closes_and_merges_back() {
    let path = notch();
    let mut boxes = alternating(400);
    let out = run(&path, &mut boxes);
    assert_eq!(out.placed, 161);
    let b = boxes.boxes();
    for i in 58..70 {
        assert!((b[i].rect.origin.y - 120.0).abs() < 1e-9, "box {i}");
    }
    assert!(near(b[63].rect.origin, 160.0, 120.0));
    assert_eq!(flags(&b[63]), (false, true, false));
    // Below the notch tip the row is a single slice again.
    assert!(near(b[70].rect.origin, 0.0, 160.0));
    for i in 70..82 {
        assert_eq!(flags(&b[i]), (false, false, false), "box {i}");
    }
    assert!(near(b[82].rect.origin, 360.0, 160.0));
    assert_eq!(flags(&b[82]), (true, true, false));
    assert_valid_layout(&path, &boxes);
}

#[test]
fn bowtie_splits_merges_and_splits_again() {
    let path = bowtie();
    let mut boxes = alternating(400);
    let out = run(&path, &mut boxes);
    assert_eq!(out.placed, 160);
    let b = boxes.boxes();
    assert!(near(b[41].rect.origin, 160.0, 80.0));
    assert_eq!(flags(&b[41]), (false, true, false));
    assert!(near(b[60].rect.origin, 0.0, 120.0));
    for i in 60..72 {
        assert_eq!(flags(&b[i]), (false, false, false), "box {i}");
    }
    assert!(near(b[72].rect.origin, 360.0, 120.0));
    assert_eq!(flags(&b[72]), (true, true, false));
    assert!(near(b[104].rect.origin, 140.0, 180.0));
    assert_eq!(flags(&b[104]), (false, true, false));
    assert!(near(b[159].rect.origin, 350.0, 280.0));
    assert_eq!(flags(&b[159]), (true, true, true));
    assert_valid_layout(&path, &boxes);
}

#[test]
fn slices_follow_the_cursor() {
    let mut wrap = WordWrap::new(&crown()).unwrap();
    let size = Size::new(20.0, 20.0);
    assert_eq!(wrap.pending_events(), 6);
    wrap.extend_slices(0.0, size).unwrap();
    assert_eq!(wrap.slices().len(), 1);
    assert_eq!(wrap.pending_events(), 4);
    assert_eq!(wrap.horizon(), 40.0);
    wrap.extend_slices(100.0, size).unwrap();
    assert_eq!(wrap.slices().len(), 3);
    assert_eq!(wrap.pending_events(), 0);
    let spans: Vec<_> = wrap
        .slices()
        .iter()
        .map(|s| s.span(wrap.arena(), 100.0, 120.0).unwrap())
        .collect();
    assert_eq!(spans, vec![(0.0, 116.0), (124.0, 276.0), (284.0, 400.0)]);

    let mut wrap = WordWrap::new(&notch()).unwrap();
    for cursor in [0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 120.0] {
        wrap.extend_slices(cursor, size).unwrap();
        assert_eq!(wrap.slices().len(), 2);
    }
    // The corridor closure caps the horizon.
    assert_eq!(wrap.horizon(), 150.0);
    wrap.extend_slices(140.0, size).unwrap();
    wrap.extend_slices(160.0, size).unwrap();
    assert_eq!(wrap.slices().len(), 1);
    assert_eq!(wrap.slices()[0].span(wrap.arena(), 160.0, 180.0), Some((0.0, 400.0)));
}

#[test]
fn topmost_point_picks_the_first_slice_that_fits() {
    let path = crown();
    let mut wrap = WordWrap::new(&path).unwrap();
    let (k, p) = wrap.point_for_box_in_slices(Size::new(20.0, 20.0), 100.0).unwrap().unwrap();
    assert_eq!(k, 0);
    assert_eq!(p, vector![0.0, 100.0]);

    let mut wrap = WordWrap::new(&path).unwrap();
    let (k, p) = wrap.point_for_box_in_slices(Size::new(130.0, 20.0), 100.0).unwrap().unwrap();
    assert_eq!(k, 1);
    assert!(near(p, 124.0, 100.0));
    // No corridor below the tooth tips is 200 wide.
    let mut wrap = WordWrap::new(&path).unwrap();
    assert_eq!(wrap.point_for_box_in_slices(Size::new(200.0, 20.0), 100.0).unwrap(), None);
}

#[test]
fn merge_then_split_on_bowtie() {
    let mut wrap = WordWrap::new(&bowtie()).unwrap();
    let size = Size::new(20.0, 20.0);
    let mut counts = Vec::new();
    for k in 0..15 {
        wrap.extend_slices(k as f64 * 20.0, size).unwrap();
        counts.push(wrap.slices().len());
    }
    assert_eq!(counts, vec![2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 2, 2]);
    let (l, r) = wrap.slices()[0].span(wrap.arena(), 280.0, 300.0).unwrap();
    assert_eq!((l, r), (0.0, 150.0));
}

#[test]
fn corner_core_matches_hand_solution() {
    // Walls x = 100 - y (leaning left) and x = 100 + y (leaning right).
    let left = SweepEvent::from_edge(vector![100.0, 0.0], vector![0.0, 100.0]).unwrap();
    let right = SweepEvent::from_edge(vector![100.0, 0.0], vector![200.0, 100.0]).unwrap();
    let p = point_for_box_in_corner_core(&left, &right, Size::new(40.0, 10.0), 1e-12).unwrap();
    // Top corners touch: 100 + y - (100 - y) = 40.
    assert!((p.y - 20.0).abs() < 1e-12);
    assert!((p.x - 80.0).abs() < 1e-12);
    let parallel = SweepEvent::from_edge(vector![150.0, 0.0], vector![50.0, 100.0]).unwrap();
    assert!(point_for_box_in_corner_core(&left, &parallel, Size::new(40.0, 10.0), 1e-12).is_none());
    assert_eq!(point_for_box_at_edge(&left, 10.0), [0.0, -10.0, 100.0, 90.0]);
}

#[test]
fn oversized_and_zero_width_boxes() {
    let path = polygon(&[(20.0, 20.0), (80.0, 20.0), (80.0, 80.0), (20.0, 80.0)]);
    let mut wide = BoxList::from_sizes([Size::new(100.0, 10.0)], 0.0);
    let out = run(&path, &mut wide);
    assert_eq!(out, WrapOutcome::default());
    assert!(wide.placed().next().is_none());

    let mut thin = BoxList::from_sizes(vec![Size::new(0.0, 20.0); 3], 0.0);
    let out = run(&path, &mut thin);
    assert_eq!(out.placed, 3);
    assert!(out.complete);
    assert!(thin.placed().all(|b| b.rect.origin == vector![20.0, 20.0]));
}

#[test]
fn space_separates_boxes_on_a_row() {
    let path = polygon(&[(20.0, 20.0), (80.0, 20.0), (80.0, 80.0), (20.0, 80.0)]);
    let mut boxes = BoxList::from_sizes(vec![Size::new(20.0, 20.0); 10], 10.0);
    let out = run(&path, &mut boxes);
    assert_eq!(out.placed, 6);
    let xs: Vec<f64> = boxes.placed().map(|b| b.rect.origin.x).collect();
    assert_eq!(xs, vec![20.0, 50.0, 20.0, 50.0, 20.0, 50.0]);
}

#[test]
fn empty_source_and_empty_path() {
    let path = polygon(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
    let mut none: BoxList<()> = BoxList::new(0.0);
    let out = run(&path, &mut none);
    assert_eq!(
        out,
        WrapOutcome {
            placed: 0,
            lines: 0,
            complete: true
        }
    );

    let mut boxes = alternating(3);
    let out = run(&Path::new(), &mut boxes);
    assert_eq!(out.placed, 0);
    assert!(!out.complete);
}

#[test]
fn rejects_bad_input() {
    let mut curved = Path::new();
    curved
        .move_to(vector![0.0, 0.0])
        .curve_to(vector![10.0, 0.0], vector![10.0, 10.0], vector![0.0, 10.0])
        .close();
    assert!(matches!(WordWrap::new(&curved), Err(FlowError::UnsupportedCurve { .. })));

    let mut two = polygon(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    two.move_to(vector![20.0, 0.0])
        .line_to(vector![30.0, 0.0])
        .line_to(vector![30.0, 10.0])
        .close();
    assert_eq!(WordWrap::new(&two).unwrap_err(), FlowError::MultipleContours { count: 2 });

    let nan = polygon(&[(0.0, 0.0), (f64::NAN, 50.0), (100.0, 100.0), (0.0, 100.0)]);
    assert_eq!(WordWrap::new(&nan).unwrap_err(), FlowError::NonFiniteVertex { index: 1 });
    let inf = polygon(&[(0.0, 0.0), (f64::NAN, 50.0), (100.0, f64::INFINITY), (0.0, 100.0)]);
    assert!(matches!(WordWrap::new(&inf), Err(FlowError::NonFiniteVertex { .. })));
    let below = polygon(&[(0.0, 0.0), (50.0, 0.0), (100.0, f64::INFINITY), (0.0, 100.0)]);
    let err = WordWrap::new(&below).unwrap_err();
    assert_eq!(err, FlowError::NonFiniteVertex { index: 2 });
    assert!(!err.is_invariant_violation());

    let path = polygon(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]);
    let mut wrap = WordWrap::new(&path).unwrap();
    for size in [Size::new(10.0, 0.0), Size::new(-1.0, 10.0), Size::new(f64::NAN, 10.0)] {
        let mut boxes = BoxList::from_sizes([Size::new(10.0, 10.0), size], 0.0);
        let err = wrap.place_word_boxes(&mut boxes).unwrap_err();
        assert!(matches!(err, FlowError::InvalidBoxSize { .. }), "{err:?}");
        assert!(!err.is_invariant_violation());
    }
}

#[test]
fn layout_is_repeatable() {
    let path = crown();
    let mut wrap = WordWrap::new(&path).unwrap();
    let mut boxes = alternating(200);
    let first = wrap.place_word_boxes(&mut boxes).unwrap();
    let rects: Vec<Rect> = boxes.placed().map(|b| b.rect).collect();
    let second = wrap.place_word_boxes(&mut boxes).unwrap();
    assert_eq!(first, second);
    let again: Vec<Rect> = boxes.placed().map(|b| b.rect).collect();
    assert_eq!(rects, again);
    assert_eq!(boxes.boxes().iter().filter(|b| b.end_of_wrap).count(), 1);
}

#[test]
fn trait_object_source() {
    let path = polygon(&[(20.0, 20.0), (80.0, 20.0), (80.0, 80.0), (20.0, 80.0)]);
    let mut boxes = alternating(4);
    let source: &mut dyn WordSource = &mut boxes;
    let out = WordWrap::new(&path).unwrap().place_word_boxes(source).unwrap();
    assert_eq!(out.placed, 4);
    assert!(out.complete);
    assert!(boxes.boxes()[3].end_of_wrap);
}

fn arb_size() -> impl Strategy<Value = Size> {
    (
        prop::sample::select(vec![3.0, 6.0, 10.0, 20.0, 13.5]),
        prop::sample::select(vec![3.0, 5.0, 8.0, 12.25]),
    )
        .prop_map(|(w, h)| Size::new(w, h))
}

fn arb_star() -> impl Strategy<Value = Path> {
    (any::<u64>(), 0u64..64, 3usize..24, any::<bool>()).prop_map(|(seed, index, n, snap)| {
        let cfg = StarCfg {
            vertex_count: VertexCount::Fixed(n),
            base_radius: 100.0,
            snap: if snap { 1.0 } else { 0.0 },
            ..StarCfg::default()
        };
        draw_star_polygon(cfg, ReplayToken { seed, index })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Placed boxes stay inside the polygon and never overlap.
    #[test]
    fn random_stars_layout_is_valid(
        path in arb_star(),
        sizes in prop::collection::vec(arb_size(), 1..300),
        space in prop::sample::select(vec![0.0, 1.0, 2.5]),
    ) {
        prop_assume!(path.single_contour().unwrap().len() >= 3);
        let mut wrap = WordWrap::new(&path).unwrap();
        let mut boxes = BoxList::from_sizes(sizes, space);
        let out = wrap.place_word_boxes(&mut boxes).unwrap();
        prop_assert_eq!(out.placed, boxes.placed().count());
        prop_assert!(out.lines <= out.placed);
        assert_valid_layout(&path, &boxes);
        // Leveling a leveled slice list changes nothing.
        prop_assert!(!wrap.level_slices_horizontally().unwrap());
    }

    /// Events are consumed in sweep order and never come back.
    #[test]
    fn sweep_consumption_is_monotone(path in arb_star(), size in arb_size()) {
        prop_assume!(path.single_contour().unwrap().len() >= 3);
        let mut wrap = WordWrap::new(&path).unwrap();
        let (top, bottom) = wrap.vertical_bounds();
        let mut pending = wrap.pending_events();
        let mut cursor = top;
        while cursor + size.height <= bottom {
            wrap.extend_slices(cursor, size).unwrap();
            prop_assert!(wrap.pending_events() <= pending);
            prop_assert!(wrap.horizon() <= bottom);
            for s in wrap.slices() {
                if let (Some(l), Some(r)) = (s.left.top(wrap.arena()), s.right.top(wrap.arena())) {
                    prop_assert!(l >= cursor || s.left.len() == 1);
                    prop_assert!(r >= cursor || s.right.len() == 1);
                }
            }
            pending = wrap.pending_events();
            cursor += size.height;
        }
    }
}

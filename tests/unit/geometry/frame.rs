use super::*;

fn frame() -> Viewport {
    Viewport::new(800.0, 600.0).unwrap()
}

fn assert_outside(ends: [Point; 2], v: Viewport) {
    for p in ends {
        assert!(!v.contains(p), "{p:?} is inside the frame");
    }
}

#[test]
fn degenerate_input_is_returned_unchanged() {
    let p = Point::new(120.0, 45.5);
    assert_eq!(frame_intersection(p, p, frame()), [p, p]);
}

#[test]
fn horizontal_line_uses_magnitude_multiplier() {
    // t = (370 + 0) / 10 = 37 -> 10 * 5 = 50.
    let v = Viewport::new(370.0, 100.0).unwrap();
    let ends = frame_intersection(Point::new(0.0, 20.0), Point::new(10.0, 20.0), v);
    assert_eq!(ends, [Point::new(500.0, 20.0), Point::new(-500.0, 20.0)]);
}

#[test]
fn vertical_line_keeps_x() {
    let ends = frame_intersection(Point::new(300.0, 100.0), Point::new(300.0, 140.0), frame());
    assert_eq!(ends[0].x, 300.0);
    assert_eq!(ends[1].x, 300.0);
    assert!(ends[0].y > 600.0);
    assert!(ends[1].y < 0.0);
}

#[test]
fn diagonal_line_clears_frame_and_stays_on_line() {
    let a = Point::new(100.0, 100.0);
    let b = Point::new(200.0, 150.0);
    let ends = frame_intersection(a, b, frame());
    assert_outside(ends, frame());
    for p in ends {
        // Collinear with a and b.
        let cross = (b - a).cross(p - a);
        assert!(cross.abs() < 1e-6 * (p - a).hypot().max(1.0));
    }
}

#[test]
fn swapping_inputs_swaps_output_order() {
    let a = Point::new(10.0, 300.0);
    let b = Point::new(11.0, 290.0);
    let ab = frame_intersection(a, b, frame());
    let ba = frame_intersection(b, a, frame());
    assert_eq!(ab, [ba[1], ba[0]]);
}

#[test]
fn first_point_lies_beyond_b() {
    let a = Point::new(400.0, 300.0);
    let b = Point::new(390.0, 300.0);
    let ends = frame_intersection(a, b, frame());
    assert!(ends[0].x < 0.0);
    assert!(ends[1].x > 800.0);
}

#[test]
fn short_segments_near_the_origin_still_clear_the_frame() {
    let v = frame();
    let cases = [
        (Point::new(10.0, 10.0), Point::new(11.0, 10.0)),
        (Point::new(10.0, 10.0), Point::new(10.0, 11.0)),
        (Point::new(799.0, 1.0), Point::new(798.0, 2.0)),
        (Point::new(400.0, 300.0), Point::new(400.1, 300.05)),
        (Point::new(0.0, 0.0), Point::new(3.0, 7.0)),
    ];
    for (a, b) in cases {
        assert_outside(frame_intersection(a, b, v), v);
        assert_outside(frame_intersection(b, a, v), v);
    }
}

#[test]
fn tiny_delta_overflowing_the_overshoot_is_returned_unchanged() {
    // t = 800 / 1e-305 = 8e307, escalated past f64::MAX.
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1e-305, 0.0);
    assert!(overshoot_multiplier(8e307).is_infinite());
    assert_eq!(frame_intersection(a, b, frame()), [a, b]);
    assert_eq!(frame_intersection(b, a, frame()), [b, a]);
}

use super::*;

#[test]
fn scrub_range_contains_inclusive_bounds() {
    let r = ScrubRange::symmetric(5).unwrap();
    assert!(r.contains(ScrubPosition(-5)));
    assert!(r.contains(ScrubPosition(0)));
    assert!(r.contains(ScrubPosition(5)));
    assert!(!r.contains(ScrubPosition(6)));
    assert!(!r.contains(ScrubPosition(-6)));
    assert_eq!(r.len(), 11);
    assert_eq!(r.positions().count(), 11);
}

#[test]
fn scrub_range_clamps_and_rejects_negative() {
    let r = ScrubRange::symmetric(2).unwrap();
    assert_eq!(r.clamp(ScrubPosition(9)), ScrubPosition(2));
    assert_eq!(r.clamp(ScrubPosition(-9)), ScrubPosition(-2));
    assert!(ScrubRange::symmetric(-1).is_err());

    let zero = ScrubRange::symmetric(0).unwrap();
    assert_eq!(zero.positions().collect::<Vec<_>>(), vec![ScrubPosition::ZERO]);
}

#[test]
fn viewport_requires_positive_extents() {
    assert!(Viewport::new(100.0, 50.0).is_ok());
    assert!(Viewport::new(0.0, 50.0).is_err());
    assert!(Viewport::new(100.0, f64::NAN).is_err());
}

#[test]
fn projection_plane_parses_text_fields() {
    let p = ProjectionPlane::parse_fields(" 1", "0.5", "-2 ").unwrap();
    assert_eq!(p, ProjectionPlane::new(1.0, 0.5, -2.0));

    assert!(ProjectionPlane::parse_fields("1", "abc", "2").is_err());
    assert!(ProjectionPlane::parse_fields("1", "", "2").is_err());
    assert!(ProjectionPlane::parse_fields("inf", "0", "2").is_err());
}

#[test]
fn projection_plane_serializes_as_triple() {
    let p = ProjectionPlane::default();
    assert_eq!(serde_json::to_string(&p).unwrap(), "[0.0,0.0,1.0]");
    let back: ProjectionPlane = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(back, ProjectionPlane::new(1.0, 2.0, 3.0));
    assert!(!p.is_zero());
    assert!(ProjectionPlane::new(0.0, 0.0, 0.0).is_zero());
}

#[test]
fn viewport_contains_is_closed() {
    let v = Viewport::new(10.0, 5.0).unwrap();
    assert!(v.contains(Point::new(0.0, 0.0)));
    assert!(v.contains(Point::new(10.0, 5.0)));
    assert!(!v.contains(Point::new(10.5, 2.0)));
    assert!(!v.contains(Point::new(2.0, -0.1)));
}

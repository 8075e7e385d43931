use super::*;

fn style() -> LayerStyle {
    LayerStyle {
        viewport: Viewport::default(),
        marker_radius: 2.5,
    }
}

fn tri() -> (Vec<Point>, Vec<Point>) {
    (
        vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(0.0, 100.0)],
        vec![Point::new(10.0, 10.0), Point::new(90.0, 10.0), Point::new(10.0, 90.0)],
    )
}

#[test]
fn flags_only_without_overlays() {
    let (ps, qs) = tri();
    let data = LayerData {
        points: &ps,
        directions: &qs,
        ..LayerData::default()
    };
    let layers = build_layers(data, &Overlays::default(), style());
    assert_eq!(layers.len(), Family::DATA_BOUND.len());
    assert_eq!(layers[&Family::FlagPoint].len(), 3);
    assert_eq!(layers[&Family::FlagLine].len(), 3);
    for f in [Family::HelperLines, Family::MiddleTriangles, Family::InnerPoints] {
        assert!(layers[&f].is_empty(), "{f} should be empty");
    }
}

#[test]
fn flag_lines_leave_the_viewport() {
    let (ps, qs) = tri();
    let vp = Viewport::default();
    for shape in ps.iter().zip(&qs).map(|(p, q)| infinite_line(*p, *q, vp)) {
        let Shape::Segment { from, to } = shape else {
            panic!("expected a segment");
        };
        assert!(!vp.contains(from));
        assert!(!vp.contains(to));
    }
}

#[test]
fn middle_fan_covers_inner_indices() {
    let ps: Vec<Point> = (0..5).map(|i| Point::new(f64::from(i), 0.0)).collect();
    let fan = middle_fan(&ps);
    assert_eq!(fan.len(), 3);
    assert_eq!(
        fan[2],
        Shape::Polygon {
            vertices: vec![ps[0], ps[3], ps[4]]
        }
    );
    assert!(middle_fan(&ps[..2]).is_empty());
    assert!(middle_fan(&[]).is_empty());
}

#[test]
fn helper_segments_need_three_flags() {
    let (ps, qs) = tri();
    let segs = helper_segments(&ps, &qs);
    assert_eq!(
        segs[0],
        Shape::Segment {
            from: ps[0],
            to: qs[2]
        }
    );
    assert_eq!(
        segs[1],
        Shape::Segment {
            from: ps[1],
            to: qs[0]
        }
    );
    let four: Vec<Point> = ps.iter().copied().chain([Point::new(5.0, 5.0)]).collect();
    assert!(helper_segments(&four, &four).is_empty());
}

#[test]
fn overlays_pull_in_frame_data() {
    let (ps, qs) = tri();
    let inner = vec![ps.clone(), qs.clone()];
    let hull = vec![ps[0], ps[1], ps[2]];
    let ellipse = vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
    let data = LayerData {
        points: &ps,
        directions: &qs,
        inner_points: &inner,
        convex_hull: Some(&hull),
        ellipse: Some(&ellipse),
    };
    let mut overlays = Overlays::default();
    for o in [
        Overlay::Inner,
        Overlay::Middle,
        Overlay::Helper,
        Overlay::ConvexHull,
        Overlay::Ellipse,
    ] {
        overlays.set(o, true);
    }
    let layers = build_layers(data, &overlays, style());
    assert_eq!(layers[&Family::InnerTriangles].len(), 2);
    assert_eq!(layers[&Family::InnerPoints].len(), 6);
    assert_eq!(layers[&Family::MiddleTriangles].len(), 1);
    assert_eq!(layers[&Family::MiddlePoints].len(), 3);
    assert_eq!(layers[&Family::HelperLines].len(), 3);
    assert_eq!(layers[&Family::ConvexHull].len(), 1);
    assert_eq!(layers[&Family::Ellipse].len(), 1);
}

#[test]
fn empty_hull_draws_nothing() {
    let (ps, qs) = tri();
    let hull: Vec<Point> = Vec::new();
    let data = LayerData {
        points: &ps,
        directions: &qs,
        convex_hull: Some(&hull),
        ..LayerData::default()
    };
    let mut overlays = Overlays::default();
    overlays.set(Overlay::ConvexHull, true);
    assert!(build_layers(data, &overlays, style())[&Family::ConvexHull].is_empty());
}

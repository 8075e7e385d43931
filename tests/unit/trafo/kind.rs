use super::*;

#[test]
fn family_depends_on_count() {
    assert!(TrafoKind::family_for(0).is_empty());
    assert!(TrafoKind::family_for(2).is_empty());
    assert_eq!(TrafoKind::family_for(3), &[TrafoKind::Erupt]);
    assert_eq!(TrafoKind::family_for(4).len(), 4);
    assert_eq!(TrafoKind::family_for(5), &[TrafoKind::NoTrafo]);
    assert_eq!(TrafoKind::family_for(8), &[TrafoKind::NoTrafo]);
}

#[test]
fn default_kind_follows_selection_rule() {
    assert_eq!(TrafoKind::default_for(2), None);
    assert_eq!(TrafoKind::default_for(3), Some(TrafoKind::Erupt));
    assert_eq!(TrafoKind::default_for(4), Some(TrafoKind::Shear));
    assert_eq!(TrafoKind::default_for(7), Some(TrafoKind::NoTrafo));
}

#[test]
fn names_round_trip_through_from_str_and_serde() {
    for k in TrafoKind::ALL {
        assert_eq!(k.as_str().parse::<TrafoKind>().unwrap(), k);
        let json = serde_json::to_string(&k).unwrap();
        assert_eq!(json, format!("\"{}\"", k.as_str()));
    }
    assert!("twist".parse::<TrafoKind>().is_err());
}

#[test]
fn conditioned_counts_and_ellipse_support() {
    assert!(!TrafoKind::is_conditioned(2));
    assert!(TrafoKind::is_conditioned(3));
    assert!(TrafoKind::is_conditioned(4));
    assert!(!TrafoKind::is_conditioned(5));
    assert!(TrafoKind::Shear.supports_ellipse());
    assert!(!TrafoKind::Bulge.supports_ellipse());
}

#[test]
fn kind_range_accepts_legacy_field_names() {
    let r: KindRange = serde_json::from_str(r#"{"trafo_range": 1000, "t_step": 0.01}"#).unwrap();
    assert_eq!(r.range, 1000);
    assert_eq!(r.step, 0.01);
    assert_eq!(r.scrub_range().unwrap().len(), 2001);
}

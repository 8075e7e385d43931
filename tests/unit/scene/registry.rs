use super::*;
use crate::foundation::core::Point;
use crate::scene::primitive::Role;

fn markers(n: usize, y: f64) -> Vec<Shape> {
    (0..n)
        .map(|i| Shape::Marker {
            center: Point::new(i as f64, y),
            radius: 2.5,
        })
        .collect()
}

#[test]
fn reconcile_creates_then_is_idempotent() {
    let mut reg = SceneRegistry::new();
    let first = reg.reconcile(Family::FlagPoint, markers(3, 0.0));
    assert_eq!(
        first,
        ReconcileStats {
            created: 3,
            updated: 0,
            destroyed: 0
        }
    );
    assert_eq!(reg.drain_ops().len(), 3);

    let again = reg.reconcile(Family::FlagPoint, markers(3, 0.0));
    assert_eq!(again.created, 0);
    assert_eq!(again.destroyed, 0);
    assert_eq!(again.updated, 3);
    assert!(reg.drain_ops().is_empty());
    assert_eq!(reg.len(Family::FlagPoint), 3);
}

#[test]
fn reconcile_updates_changed_geometry_in_place() {
    let mut reg = SceneRegistry::new();
    reg.reconcile(Family::FlagPoint, markers(2, 0.0));
    reg.drain_ops();

    let mut shapes = markers(2, 0.0);
    shapes[1] = Shape::Marker {
        center: Point::new(9.0, 9.0),
        radius: 2.5,
    };
    reg.reconcile(Family::FlagPoint, shapes);
    let ops = reg.drain_ops();
    assert_eq!(ops.len(), 1);
    match &ops[0] {
        SceneOp::Update { id, primitive } => {
            assert_eq!(id.index, 1);
            assert_eq!(
                primitive.shape,
                Shape::Marker {
                    center: Point::new(9.0, 9.0),
                    radius: 2.5
                }
            );
        }
        other => panic!("unexpected op {other:?}"),
    }
}

#[test]
fn shrinking_destroys_exactly_the_surplus_highest_first() {
    let mut reg = SceneRegistry::new();
    reg.reconcile(Family::InnerPoints, markers(5, 0.0));
    reg.drain_ops();

    let stats = reg.reconcile(Family::InnerPoints, markers(2, 1.0));
    assert_eq!(stats.destroyed, 3);
    assert_eq!(stats.created, 0);
    assert_eq!(reg.len(Family::InnerPoints), 2);

    let destroyed: Vec<usize> = reg
        .drain_ops()
        .into_iter()
        .filter_map(|op| match op {
            SceneOp::Destroy { id } => Some(id.index),
            _ => None,
        })
        .collect();
    assert_eq!(destroyed, vec![4, 3, 2]);
}

#[test]
fn empty_data_tears_the_family_down() {
    let mut reg = SceneRegistry::new();
    reg.reconcile(Family::HelperLines, markers(3, 0.0));
    reg.reconcile(Family::FlagPoint, markers(1, 0.0));
    assert_eq!(reg.teardown(Family::HelperLines), 3);
    assert_eq!(reg.len(Family::HelperLines), 0);
    assert_eq!(reg.total(), 1);
    assert!(reg.families().all(|(f, _)| f != Family::HelperLines));
    assert_eq!(reg.teardown(Family::HelperLines), 0);
}

#[test]
fn promote_moves_and_restyles() {
    let mut reg = SceneRegistry::new();
    reg.reconcile(Family::FlagPoint, markers(2, 0.0));
    reg.reconcile(Family::PreviewPoint, markers(1, 7.0));
    assert_eq!(reg.family(Family::PreviewPoint)[0].role, Role::Preview);
    reg.drain_ops();

    assert_eq!(reg.promote(Family::PreviewPoint, Family::FlagPoint), 1);
    assert_eq!(reg.len(Family::PreviewPoint), 0);
    assert_eq!(reg.len(Family::FlagPoint), 3);
    let promoted = &reg.family(Family::FlagPoint)[2];
    assert_eq!(promoted.role, Role::Committed);

    let ops = reg.drain_ops();
    assert_eq!(
        ops,
        vec![SceneOp::Promote {
            from: PrimitiveId {
                family: Family::PreviewPoint,
                index: 0
            },
            to: PrimitiveId {
                family: Family::FlagPoint,
                index: 2
            },
        }]
    );
    assert_eq!(reg.promote(Family::PreviewPoint, Family::FlagPoint), 0);
}

#[test]
fn snapshot_uses_family_keys() {
    let mut reg = SceneRegistry::new();
    reg.reconcile(Family::MiddleTriangles, markers(1, 0.0));
    let snap = reg.snapshot();
    assert_eq!(snap.keys().copied().collect::<Vec<_>>(), vec!["p_line"]);
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["p_line"][0]["role"], "middle");
    assert_eq!(json["p_line"][0]["shape"]["type"], "marker");
}

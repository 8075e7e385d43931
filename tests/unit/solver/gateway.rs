use super::*;
use crate::foundation::core::{Point, ProjectionPlane};

fn request(n: usize) -> SolverRequest {
    SolverRequest {
        points: (0..n).map(|i| Point::new(i as f64, 0.0)).collect(),
        directions: (0..n).map(|i| Point::new(i as f64, 1.0)).collect(),
        projection_plane: ProjectionPlane::default(),
        previous_projection_plane: None,
    }
}

#[test]
fn queued_solver_records_requests_and_replays_fifo() {
    let mut solver = QueuedSolver::with_responses([
        SolverResponse::Failure { code: 1 },
        SolverResponse::Failure { code: 2 },
    ]);
    solver.dispatch(&request(3)).unwrap();
    assert_eq!(solver.requests().len(), 1);
    assert_eq!(solver.requests()[0].count(), 3);

    assert_eq!(
        solver.next_response(),
        Some(SolverResponse::Failure { code: 1 })
    );
    assert_eq!(solver.pending_responses(), 1);
}

#[test]
fn failed_dispatch_is_not_recorded() {
    let mut solver = QueuedSolver::new();
    solver.fail_next_dispatch("offline");
    let err = solver.dispatch(&request(3)).unwrap_err();
    assert!(err.to_string().contains("offline"));
    assert!(solver.requests().is_empty());

    solver.dispatch(&request(3)).unwrap();
    assert_eq!(solver.requests().len(), 1);
}

#[test]
fn error_messages_fall_back_to_code() {
    let table = ErrorMessages::default().with(3, "Three flags are collinear.");
    assert_eq!(table.message_for(1), "The tuple of flags is not positive.");
    assert_eq!(table.message_for(3), "Three flags are collinear.");
    assert_eq!(table.message_for(42), "solver reported error code 42");
}

#[test]
fn error_messages_deserialize_from_a_json_object() {
    let table: ErrorMessages = serde_json::from_str(r#"{"2": "bad plane"}"#).unwrap();
    assert_eq!(table.message_for(2), "bad plane");
    assert_eq!(table.message_for(1), "solver reported error code 1");
}

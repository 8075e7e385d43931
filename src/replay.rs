//! Drive an [`EditingSession`] from a recorded event script.
//!
//! Solver answers come from a queue: whenever an event leaves a request outstanding, the next
//! queued response is delivered before the following event runs.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::SessionOpts;
use crate::editor::mode::Mode;
use crate::editor::overlays::Overlay;
use crate::editor::session::EditingSession;
use crate::editor::ui::{RecordingUi, UiEvent};
use crate::foundation::core::{Point, ScrubPosition};
use crate::foundation::error::{FlagError, FlagResult};
use crate::scene::primitive::Primitive;
use crate::solver::gateway::{ErrorMessages, QueuedSolver};
use crate::solver::wire::SolverResponse;
use crate::trafo::kind::TrafoKind;

/// One user action of a script.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// "Add flags".
    Start,
    /// Pointer moved to `at`.
    Move {
        /// Canvas position `[x, y]`.
        at: [f64; 2],
    },
    /// Click at `at`.
    Click {
        /// Canvas position `[x, y]`.
        at: [f64; 2],
    },
    /// "Finish".
    Submit,
    /// Slider moved.
    Scrub {
        /// Target position.
        to: i32,
    },
    /// Transformation kind picked.
    Select {
        /// Kind name.
        kind: TrafoKind,
    },
    /// Overlay checkbox toggled.
    Overlay {
        /// Which overlay.
        overlay: Overlay,
        /// New state.
        on: bool,
    },
    /// Projection plane form submitted with raw field text.
    Plane {
        /// X field.
        x: String,
        /// Y field.
        y: String,
        /// Z field.
        z: String,
    },
    /// "Reset transformation".
    Reset,
}

/// Error raised by one script step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepError {
    /// Zero-based event index.
    pub step: usize,
    /// Error text.
    pub message: String,
}

/// Final state of a replayed session.
#[derive(Clone, Debug, Serialize)]
pub struct ReplayReport {
    /// Mode after the last event.
    pub mode: Mode,
    /// Committed flag count.
    pub count: usize,
    /// Active transformation kind.
    pub active_kind: Option<TrafoKind>,
    /// Slider position.
    pub scrub: ScrubPosition,
    /// Slider label.
    pub display_value: Option<f64>,
    /// Requests dispatched to the solver.
    pub requests: usize,
    /// Queued responses never consumed.
    pub unused_responses: usize,
    /// Step errors in order; none of them stop the replay.
    pub errors: Vec<StepError>,
    /// UI hook calls in order.
    pub ui_events: Vec<UiEvent>,
    /// Final scene, family key to primitives.
    pub scene: BTreeMap<&'static str, Vec<Primitive>>,
}

/// Read a script (a JSON array of events) from disk.
pub fn load_script(path: impl AsRef<Path>) -> FlagResult<Vec<ScriptEvent>> {
    let path = path.as_ref();
    let f = File::open(path)
        .map_err(|e| FlagError::validation(format!("open script '{}': {e}", path.display())))?;
    serde_json::from_reader(BufReader::new(f))
        .map_err(|e| FlagError::serde(format!("parse script JSON: {e}")))
}

/// Read recorded solver responses: a single response object or an array of them.
pub fn load_responses(path: impl AsRef<Path>) -> FlagResult<Vec<SolverResponse>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| {
        FlagError::validation(format!("open solver responses '{}': {e}", path.display()))
    })?;
    let value: serde_json::Value = serde_json::from_reader(BufReader::new(f))
        .map_err(|e| FlagError::serde(format!("parse solver responses JSON: {e}")))?;
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(SolverResponse::from_value)
            .collect(),
        single => Ok(vec![SolverResponse::from_value(single)?]),
    }
}

/// Run `events` against a fresh session answered from `responses`.
#[tracing::instrument(skip_all, fields(events = events.len(), responses = responses.len()))]
pub fn replay(
    opts: SessionOpts,
    messages: ErrorMessages,
    events: &[ScriptEvent],
    responses: Vec<SolverResponse>,
) -> FlagResult<ReplayReport> {
    let mut session = EditingSession::new(
        opts,
        messages,
        RecordingUi::new(),
        QueuedSolver::with_responses(responses),
    )?;
    let mut errors = Vec::new();

    for (step, event) in events.iter().enumerate() {
        if let Err(err) = apply(&mut session, event) {
            tracing::debug!(step, %err, "script step failed");
            errors.push(StepError {
                step,
                message: err.to_string(),
            });
        }
        if session.is_waiting() {
            let Some(response) = session.gateway_mut().next_response() else {
                tracing::warn!(step, "request left unanswered: response queue is empty");
                break;
            };
            if let Err(err) = session.on_solver_response(response) {
                errors.push(StepError {
                    step,
                    message: err.to_string(),
                });
            }
        }
    }

    Ok(ReplayReport {
        mode: session.mode(),
        count: session.flags().count(),
        active_kind: session.active_kind(),
        scrub: session.scrub(),
        display_value: session.display_value(),
        requests: session.gateway().requests().len(),
        unused_responses: session.gateway().pending_responses(),
        errors,
        ui_events: session.ui().events().to_vec(),
        scene: session.scene().snapshot(),
    })
}

fn apply(
    session: &mut EditingSession<RecordingUi, QueuedSolver>,
    event: &ScriptEvent,
) -> FlagResult<()> {
    match event {
        ScriptEvent::Start => session.start_adding(),
        ScriptEvent::Move { at: [x, y] } => {
            session.pointer_move(Point::new(*x, *y));
            Ok(())
        }
        ScriptEvent::Click { at: [x, y] } => session.pointer_click(Point::new(*x, *y)),
        ScriptEvent::Submit => session.submit().map(drop),
        ScriptEvent::Scrub { to } => session.scrub_to(ScrubPosition(*to)),
        ScriptEvent::Select { kind } => session.select_kind(*kind).map(drop),
        ScriptEvent::Overlay { overlay, on } => session.set_overlay(*overlay, *on).map(drop),
        ScriptEvent::Plane { x, y, z } => session.submit_projection_plane(x, y, z).map(drop),
        ScriptEvent::Reset => session.reset_scrub(),
    }
}

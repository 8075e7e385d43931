//! Flag Transformator: interactive flag configurations and their solver-driven transformations.
//!
//! A user places flags (a point plus a second point on its line) on a 2D canvas, submits them to
//! a remote solver, and scrubs through the family of transformations the solver returns while
//! toggling construction overlays. This crate is the rendering-agnostic core:
//!
//! - Drive an [`EditingSession`] with pointer, slider and form events
//! - Hand [`SolverRequest`]s to a [`SolverGateway`] and feed the answers back
//! - Apply the drained [`SceneOp`]s to whatever surface draws the scene
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Session options.
pub mod config;
pub(crate) mod editor;
pub(crate) mod flags;
pub(crate) mod geometry;
/// Scripted session replay.
pub mod replay;
pub(crate) mod scene;
pub(crate) mod solver;
pub(crate) mod trafo;

pub use crate::foundation::core::{
    Point, ProjectionPlane, ScrubPosition, ScrubRange, Vec2, Viewport,
};
pub use crate::foundation::error::{FlagError, FlagResult};

pub use crate::config::SessionOpts;
pub use crate::editor::mode::{Gesture, Mode};
pub use crate::editor::overlays::{Overlay, Overlays};
pub use crate::editor::session::{EditingSession, ResponseOutcome};
pub use crate::editor::ui::{RecordingUi, UiEvent, UiHooks};
pub use crate::flags::model::FlagSet;
pub use crate::flags::plane::PlaneState;
pub use crate::geometry::frame::frame_intersection;
pub use crate::scene::layers::{LayerData, LayerStyle, build_layers};
pub use crate::scene::primitive::{Family, Primitive, PrimitiveId, Role, Shape};
pub use crate::scene::registry::{ReconcileStats, SceneOp, SceneRegistry};
pub use crate::solver::gateway::{ErrorMessages, QueuedSolver, SolverGateway};
pub use crate::solver::wire::{SolverPayload, SolverRequest, SolverResponse};
pub use crate::trafo::cache::{FrameKey, TrafoCache};
pub use crate::trafo::frame::TrafoFrame;
pub use crate::trafo::kind::{KindRange, TrafoKind};

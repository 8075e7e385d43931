use crate::config::SessionOpts;
use crate::editor::mode::{Gesture, HINT_LOADING, Mode};
use crate::editor::overlays::{Overlay, Overlays};
use crate::editor::ui::UiHooks;
use crate::flags::model::FlagSet;
use crate::flags::plane::PlaneState;
use crate::foundation::core::{Point, ProjectionPlane, ScrubPosition, ScrubRange};
use crate::foundation::error::{FlagError, FlagResult};
use crate::scene::layers::{LayerData, LayerStyle, build_layers, infinite_line};
use crate::scene::primitive::{Family, Shape};
use crate::scene::registry::{ReconcileStats, SceneOp, SceneRegistry};
use crate::solver::gateway::{ErrorMessages, SolverGateway};
use crate::solver::wire::{SolverPayload, SolverRequest, SolverResponse};
use crate::trafo::cache::TrafoCache;
use crate::trafo::kind::TrafoKind;

/// What happened to a solver response handed to [`EditingSession::on_solver_response`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// Data ingested; `kind` is now active.
    Applied {
        /// Kind selected by the ingest rule.
        kind: TrafoKind,
    },
    /// No request was outstanding, so the response was dropped.
    Ignored,
}

#[derive(Clone, Copy, Debug)]
struct PendingRequest {
    count: usize,
    plane_only: bool,
}

/// The editing session: flag entry, solver round trips, slider scrubbing and scene upkeep.
///
/// Owns every piece of mutable state (flags, cache, scene, mode) and talks to the outside only
/// through its [`UiHooks`] and [`SolverGateway`]. All methods run to completion; the one
/// suspension point is the solver round trip, which is split into [`EditingSession::submit`] and
/// [`EditingSession::on_solver_response`]. While a request is outstanding pointer input is
/// ignored and every other mutating action fails with [`FlagError::Mode`].
pub struct EditingSession<U, G> {
    opts: SessionOpts,
    messages: ErrorMessages,
    ui: U,
    gateway: G,
    flags: FlagSet,
    plane: PlaneState,
    cache: TrafoCache,
    scene: SceneRegistry,
    mode: Mode,
    gesture: Gesture,
    overlays: Overlays,
    scrub: ScrubPosition,
    baseline_count: usize,
    pending: Option<PendingRequest>,
}

impl<U: UiHooks, G: SolverGateway> EditingSession<U, G> {
    /// Create a session in `Standard` mode with no flags.
    pub fn new(opts: SessionOpts, messages: ErrorMessages, ui: U, gateway: G) -> FlagResult<Self> {
        opts.validate()?;
        Ok(Self {
            flags: FlagSet::new(opts.max_flags),
            plane: PlaneState::new(opts.initial_projection_plane),
            opts,
            messages,
            ui,
            gateway,
            cache: TrafoCache::new(),
            scene: SceneRegistry::new(),
            mode: Mode::Standard,
            gesture: Gesture::default(),
            overlays: Overlays::default(),
            scrub: ScrubPosition::ZERO,
            baseline_count: 0,
            pending: None,
        })
    }

    /// Active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Committed flags (displayed coordinates once a frame is active).
    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    /// Cached transformation data.
    pub fn cache(&self) -> &TrafoCache {
        &self.cache
    }

    /// Retained scene.
    pub fn scene(&self) -> &SceneRegistry {
        &self.scene
    }

    /// Overlays switched on by the user.
    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    /// Current slider position.
    pub fn scrub(&self) -> ScrubPosition {
        self.scrub
    }

    /// Projection plane state.
    pub fn plane(&self) -> &PlaneState {
        &self.plane
    }

    /// Options the session was created with.
    pub fn opts(&self) -> &SessionOpts {
        &self.opts
    }

    /// UI hooks.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Mutable UI hooks.
    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Solver gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Mutable solver gateway, e.g. to pop a queued response.
    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    /// Kind whose frames are displayed, once a response has been ingested.
    pub fn active_kind(&self) -> Option<TrafoKind> {
        self.cache.active_kind()
    }

    /// Slider bounds of the active kind.
    pub fn scrub_range(&self) -> Option<ScrubRange> {
        self.cache.scrub_range()
    }

    /// Return `true` while a solver request is outstanding.
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Slider label of the current scrub position.
    pub fn display_value(&self) -> Option<f64> {
        self.cache.display_value(self.scrub)
    }

    /// Scene changes recorded since the last call.
    pub fn drain_scene_ops(&mut self) -> Vec<SceneOp> {
        self.scene.drain_ops()
    }

    /// "Add flags": enter flag entry from `Standard`.
    pub fn start_adding(&mut self) -> FlagResult<()> {
        self.ensure_idle()?;
        if self.mode != Mode::Standard {
            return Err(FlagError::mode(format!(
                "flag entry can only start in standard mode (mode is {})",
                self.mode
            )));
        }
        self.enter_adding_flags();
        Ok(())
    }

    /// Track the pointer; redraws the point or line preview.
    pub fn pointer_move(&mut self, pos: Point) {
        if self.pending.is_some() {
            return;
        }
        match self.mode {
            Mode::AddingPoint => {
                self.gesture.live = Some(pos);
                let marker = self.marker(pos);
                self.scene.reconcile(Family::PreviewPoint, vec![marker]);
            }
            Mode::AddingLine => {
                self.gesture.live = Some(pos);
                if let Some(fixed) = self.gesture.fixed {
                    let line = infinite_line(fixed, pos, self.opts.viewport);
                    self.scene.reconcile(Family::PreviewLine, vec![line]);
                }
            }
            Mode::Standard | Mode::AddingFlags => {}
        }
    }

    /// Click on the canvas.
    ///
    /// The first click of a flag fixes its point, the second its direction and commits the flag.
    /// A second click on a full set discards the preview, submits what is committed and returns
    /// [`FlagError::FlagLimit`]; the flag set is left untouched.
    pub fn pointer_click(&mut self, pos: Point) -> FlagResult<()> {
        if self.pending.is_some() {
            return Ok(());
        }
        match self.mode {
            Mode::AddingPoint => {
                self.gesture = Gesture {
                    fixed: Some(pos),
                    live: Some(pos),
                };
                let marker = self.marker(pos);
                self.scene.reconcile(Family::PreviewPoint, vec![marker]);
                self.set_mode(Mode::AddingLine);
                Ok(())
            }
            Mode::AddingLine => {
                let fixed = self
                    .gesture
                    .fixed
                    .ok_or_else(|| FlagError::mode("line click without a fixed point"))?;
                self.gesture.live = Some(pos);
                if self.flags.is_full() {
                    return self.reject_over_limit();
                }
                let line = infinite_line(fixed, pos, self.opts.viewport);
                self.scene.reconcile(Family::PreviewLine, vec![line]);
                let count = self.flags.push(fixed, pos)?;
                self.scene.promote(Family::PreviewPoint, Family::FlagPoint);
                self.scene.promote(Family::PreviewLine, Family::FlagLine);
                tracing::debug!(count, "flag committed");
                self.gesture.clear();
                self.set_mode(Mode::AddingPoint);
                self.refresh_scene();
                Ok(())
            }
            Mode::Standard | Mode::AddingFlags => Ok(()),
        }
    }

    /// "Finish": send new flags to the solver, or return to `Standard` when there is nothing to send.
    ///
    /// Returns `true` when a request was dispatched.
    #[tracing::instrument(skip(self), fields(count = self.flags.count(), baseline = self.baseline_count))]
    pub fn submit(&mut self) -> FlagResult<bool> {
        self.ensure_idle()?;
        if !self.mode.is_adding_flags() {
            return Err(FlagError::mode(format!("nothing to submit in {} mode", self.mode)));
        }
        let count = self.flags.count();
        if count > self.baseline_count && count > 2 {
            self.dispatch(false)?;
            return Ok(true);
        }
        tracing::debug!("no new flags to transform");
        self.enter_standard();
        self.refresh_scene();
        Ok(false)
    }

    /// Deliver the answer to the outstanding request.
    ///
    /// A non-zero error code, or data that does not cover the submitted flags, discards all flags
    /// and cached frames, surfaces the message and restarts flag entry; the error is returned after
    /// the session has been reset.
    #[tracing::instrument(skip_all)]
    pub fn on_solver_response(&mut self, response: SolverResponse) -> FlagResult<ResponseOutcome> {
        let Some(pending) = self.pending.take() else {
            tracing::warn!("dropping solver response: no request outstanding");
            return Ok(ResponseOutcome::Ignored);
        };
        self.ui.hide_loading_indicator();

        match response {
            SolverResponse::Failure { code } => {
                let err = FlagError::Solver {
                    code,
                    message: self.messages.message_for(code),
                };
                Err(self.reset_after_error(err))
            }
            SolverResponse::Success(payload) => match self.apply_payload(payload, pending) {
                Ok(kind) => Ok(ResponseOutcome::Applied { kind }),
                Err(err) => Err(self.reset_after_error(err)),
            },
        }
    }

    /// Move the slider to `pos` and display that frame.
    pub fn scrub_to(&mut self, pos: ScrubPosition) -> FlagResult<()> {
        self.ensure_standard()?;
        let frame = self.cache.active_frame(pos)?;
        self.flags.adopt(&frame.primary_points, &frame.secondary_points)?;
        self.scrub = pos;
        self.refresh_scene();
        Ok(())
    }

    /// "Reset transformation": back to scrub position 0.
    pub fn reset_scrub(&mut self) -> FlagResult<()> {
        self.scrub_to(ScrubPosition::ZERO)
    }

    /// Switch the displayed transformation family.
    ///
    /// The scrub position is clamped into the new range; the ellipse overlay is switched off for
    /// kinds that have none. An uningested kind is rejected and nothing changes.
    pub fn select_kind(&mut self, kind: TrafoKind) -> FlagResult<ScrubRange> {
        self.ensure_standard()?;
        let range = self.cache.select(kind)?;
        self.scrub = range.clamp(self.scrub);
        if !kind.supports_ellipse() {
            self.overlays.set(Overlay::Ellipse, false);
        }
        self.adopt_active_frame()?;
        self.refresh_scene();
        Ok(range)
    }

    /// Toggle an overlay; returns `true` when its state changed.
    pub fn set_overlay(&mut self, overlay: Overlay, on: bool) -> FlagResult<bool> {
        self.ensure_standard()?;
        if on
            && overlay == Overlay::Ellipse
            && !self.active_kind().is_some_and(TrafoKind::supports_ellipse)
        {
            return Err(FlagError::mode(
                "the ellipse overlay is only available for the shear transformation",
            ));
        }
        let changed = self.overlays.set(overlay, on);
        if changed {
            self.refresh_scene();
        }
        Ok(changed)
    }

    /// Parse the three plane fields and apply them; see [`EditingSession::set_projection_plane`].
    ///
    /// Invalid input is reported through the UI and leaves everything unchanged.
    pub fn submit_projection_plane(&mut self, x: &str, y: &str, z: &str) -> FlagResult<bool> {
        self.ensure_standard()?;
        let plane = match ProjectionPlane::parse_fields(x, y, z) {
            Ok(p) => p,
            Err(err) => {
                tracing::warn!(%err, "rejecting projection plane input");
                self.ui.report_error(&err.user_message());
                return Err(err);
            }
        };
        self.set_projection_plane(plane)
    }

    /// Install a new projection plane, keeping the old one as `previous`.
    ///
    /// With more than two flags the plane is sent to the solver right away (plane-only request,
    /// scrub position kept); returns `true` in that case.
    #[tracing::instrument(skip(self))]
    pub fn set_projection_plane(&mut self, plane: ProjectionPlane) -> FlagResult<bool> {
        self.ensure_standard()?;
        if plane.is_zero() {
            let err = FlagError::validation("the projection plane must not be the zero vector");
            self.ui.report_error(&err.user_message());
            return Err(err);
        }
        let prior = self.plane;
        self.plane.replace(plane);
        if self.flags.count() > 2 {
            if let Err(err) = self.dispatch(true) {
                self.plane = prior;
                return Err(err);
            }
            return Ok(true);
        }
        Ok(false)
    }

    /// Rebuild every data-bound family from the current flags and frame.
    pub fn refresh_scene(&mut self) -> ReconcileStats {
        let frame = self
            .cache
            .active_frame(self.scrub)
            .ok()
            .filter(|f| f.count() == self.flags.count());
        let data = LayerData {
            points: self.flags.points(),
            directions: self.flags.directions(),
            inner_points: frame.map(|f| f.inner_points.as_slice()).unwrap_or(&[]),
            convex_hull: frame.and_then(|f| f.convex_hull.as_deref()),
            ellipse: frame.and_then(|f| f.ellipse.as_deref()),
        };
        let mut overlays = self.overlays.clone();
        if !self.active_kind().is_some_and(TrafoKind::supports_ellipse) {
            overlays.set(Overlay::Ellipse, false);
        }
        let style = LayerStyle {
            viewport: self.opts.viewport,
            marker_radius: self.opts.marker_radius,
        };

        let mut stats = ReconcileStats::default();
        for (family, shapes) in build_layers(data, &overlays, style) {
            stats += self.scene.reconcile(family, shapes);
        }
        stats
    }

    fn marker(&self, center: Point) -> Shape {
        Shape::Marker {
            center,
            radius: self.opts.marker_radius,
        }
    }

    fn ensure_idle(&self) -> FlagResult<()> {
        if self.pending.is_some() {
            return Err(FlagError::mode("a solver request is outstanding"));
        }
        Ok(())
    }

    fn ensure_standard(&self) -> FlagResult<()> {
        self.ensure_idle()?;
        if self.mode != Mode::Standard {
            return Err(FlagError::mode(format!(
                "action requires standard mode (mode is {})",
                self.mode
            )));
        }
        Ok(())
    }

    fn set_mode(&mut self, mode: Mode) {
        tracing::debug!(from = %self.mode, to = %mode, "mode transition");
        self.mode = mode;
        self.ui.report_mode_hint(mode.hint(self.flags.count()));
    }

    fn discard_previews(&mut self) {
        self.scene.teardown(Family::PreviewPoint);
        self.scene.teardown(Family::PreviewLine);
        self.gesture.clear();
    }

    fn enter_standard(&mut self) {
        self.discard_previews();
        self.ui.show_editing_controls();
        self.set_mode(Mode::Standard);
    }

    fn enter_adding_flags(&mut self) {
        tracing::debug!(from = %self.mode, to = %Mode::AddingFlags, "mode transition");
        self.mode = Mode::AddingFlags;
        self.overlays.clear();
        self.scrub = ScrubPosition::ZERO;
        if let Err(err) = self.adopt_active_frame() {
            tracing::debug!(%err, "no base frame to restore");
        }
        self.baseline_count = self.flags.count();
        self.ui.hide_editing_controls();
        self.discard_previews();
        self.refresh_scene();
        self.set_mode(Mode::AddingPoint);
    }

    fn adopt_active_frame(&mut self) -> FlagResult<()> {
        let frame = self.cache.active_frame(self.scrub)?;
        self.flags.adopt(&frame.primary_points, &frame.secondary_points)
    }

    fn reject_over_limit(&mut self) -> FlagResult<()> {
        let err = FlagError::FlagLimit {
            max: self.flags.max_flags(),
        };
        tracing::warn!(max = self.flags.max_flags(), "flag limit reached");
        self.discard_previews();
        self.ui.report_error(&err.user_message());
        if let Err(submit_err) = self.submit() {
            tracing::warn!(%submit_err, "submit after flag limit failed");
        }
        Err(err)
    }

    fn dispatch(&mut self, plane_only: bool) -> FlagResult<()> {
        let request = SolverRequest {
            points: self.flags.points().to_vec(),
            directions: self.flags.directions().to_vec(),
            projection_plane: self.plane.current(),
            previous_projection_plane: self.plane.previous(),
        };
        if !plane_only {
            self.cache.clear();
        }
        self.discard_previews();
        self.ui.hide_editing_controls();
        self.ui.show_loading_indicator();
        self.ui.report_mode_hint(HINT_LOADING);

        match self.gateway.dispatch(&request) {
            Ok(()) => {
                tracing::debug!(count = request.count(), plane_only, "solver request dispatched");
                self.pending = Some(PendingRequest {
                    count: request.count(),
                    plane_only,
                });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "solver request could not be dispatched");
                self.ui.hide_loading_indicator();
                self.ui.report_error(&err.user_message());
                if plane_only {
                    self.enter_standard();
                } else {
                    self.set_mode(Mode::AddingPoint);
                }
                Err(err)
            }
        }
    }

    fn apply_payload(
        &mut self,
        payload: SolverPayload,
        pending: PendingRequest,
    ) -> FlagResult<TrafoKind> {
        let kind = self.cache.ingest(payload, pending.count)?;
        self.scrub = match (pending.plane_only, self.cache.scrub_range()) {
            (true, Some(range)) => range.clamp(self.scrub),
            _ => ScrubPosition::ZERO,
        };
        self.adopt_active_frame()?;
        if !kind.supports_ellipse() {
            self.overlays.set(Overlay::Ellipse, false);
        }
        self.enter_standard();
        self.refresh_scene();
        tracing::debug!(%kind, scrub = %self.scrub, "transformation data applied");
        Ok(kind)
    }

    fn reset_after_error(&mut self, err: FlagError) -> FlagError {
        tracing::warn!(%err, "resetting session after solver error");
        self.ui.report_error(&err.user_message());
        self.flags.clear();
        self.cache.clear();
        self.scrub = ScrubPosition::ZERO;
        self.enter_adding_flags();
        err
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/session.rs"]
mod tests;

use crate::foundation::core::ProjectionPlane;

/// Current projection plane plus the one it replaced.
///
/// The previous value lets the solver rotate already-transformed points back when only the plane
/// changed between two requests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneState {
    current: ProjectionPlane,
    previous: Option<ProjectionPlane>,
}

impl PlaneState {
    /// Start with `initial` and no history.
    pub fn new(initial: ProjectionPlane) -> Self {
        Self {
            current: initial,
            previous: None,
        }
    }

    /// Plane sent with the next request.
    pub fn current(&self) -> ProjectionPlane {
        self.current
    }

    /// Plane in effect before the last [`PlaneState::replace`], if any.
    pub fn previous(&self) -> Option<ProjectionPlane> {
        self.previous
    }

    /// Install `next`, retaining the old value as `previous`.
    pub fn replace(&mut self, next: ProjectionPlane) {
        self.previous = Some(self.current);
        self.current = next;
    }
}

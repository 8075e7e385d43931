use serde::Serialize;

use crate::foundation::core::Point;

/// One cached solver answer for a `(kind, scrub position)` pair.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TrafoFrame {
    /// Flag points to display (`ps`); replaces the committed points.
    pub primary_points: Vec<Point>,
    /// Second point on each flag line (`qs`); used as the live direction points.
    pub secondary_points: Vec<Point>,
    /// Inner construction per triangle of the triangulation (`us`).
    pub inner_points: Vec<Vec<Point>>,
    /// Convex hull of the configuration, when the solver provides one.
    pub convex_hull: Option<Vec<Point>>,
    /// Sampled conic through the flags (shear family only).
    pub ellipse: Option<Vec<Point>>,
}

impl TrafoFrame {
    /// Number of flags the frame describes.
    pub fn count(&self) -> usize {
        self.primary_points.len()
    }
}

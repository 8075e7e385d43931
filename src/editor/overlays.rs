use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Optional construction drawn on top of the flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    /// Inner triangles (`us`) with their vertex markers.
    Inner,
    /// Middle-triangle fan with markers on the flag points.
    Middle,
    /// Helper segments of a three-flag configuration.
    Helper,
    /// Shear ellipse.
    Ellipse,
    /// Filled convex hull.
    ConvexHull,
}

/// Set of overlays currently switched on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Overlays {
    on: BTreeSet<Overlay>,
}

impl Overlays {
    /// Return `true` when `overlay` is on.
    pub fn is_on(&self, overlay: Overlay) -> bool {
        self.on.contains(&overlay)
    }

    /// Switch `overlay` on or off; returns `true` when the state changed.
    pub fn set(&mut self, overlay: Overlay, on: bool) -> bool {
        if on {
            self.on.insert(overlay)
        } else {
            self.on.remove(&overlay)
        }
    }

    /// Switch everything off.
    pub fn clear(&mut self) {
        self.on.clear();
    }

    /// Overlays that are on, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Overlay> + '_ {
        self.on.iter().copied()
    }
}

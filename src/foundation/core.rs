use crate::foundation::error::{FlagError, FlagResult};

pub use kurbo::{Point, Vec2};

/// Integer slider position indexing into a kind's cached frames.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ScrubPosition(pub i32);

impl ScrubPosition {
    /// The neutral slider position every kind defines.
    pub const ZERO: Self = Self(0);
}

impl std::fmt::Display for ScrubPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive, symmetric slider bound `[-range, +range]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScrubRange {
    /// Inclusive lower bound.
    pub min: ScrubPosition,
    /// Inclusive upper bound.
    pub max: ScrubPosition,
}

impl ScrubRange {
    /// Build `[-range, +range]`; negative ranges are rejected.
    pub fn symmetric(range: i32) -> FlagResult<Self> {
        if range < 0 {
            return Err(FlagError::validation("scrub range must be >= 0"));
        }
        Ok(Self {
            min: ScrubPosition(-range),
            max: ScrubPosition(range),
        })
    }

    /// Return `true` when `pos` lies inside the inclusive bounds.
    pub fn contains(self, pos: ScrubPosition) -> bool {
        self.min <= pos && pos <= self.max
    }

    /// Clamp a position into the bounds.
    pub fn clamp(self, pos: ScrubPosition) -> ScrubPosition {
        ScrubPosition(pos.0.clamp(self.min.0, self.max.0))
    }

    /// Every whole position from `min` to `max`.
    pub fn positions(self) -> impl Iterator<Item = ScrubPosition> {
        (self.min.0..=self.max.0).map(ScrubPosition)
    }

    /// Number of positions in the range.
    pub fn len(self) -> usize {
        (i64::from(self.max.0) - i64::from(self.min.0) + 1) as usize
    }
}

/// Visible rendering frame (the canvas), in canvas units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Frame width.
    pub width: f64,
    /// Frame height.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport with positive, finite extents.
    pub fn new(width: f64, height: f64) -> FlagResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(FlagError::validation(
                "viewport width and height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Return `true` when `p` lies inside the closed frame `[0, width] x [0, height]`.
    pub fn contains(self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 600.0,
        }
    }
}

/// Plane used by the solver to embed the 2D configuration in 3D.
///
/// Serialized as an `[x, y, z]` triple.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct ProjectionPlane {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl ProjectionPlane {
    /// Build a plane from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Parse the three text fields of the plane form.
    ///
    /// Surrounding whitespace is ignored; anything else that is not a finite number is rejected.
    pub fn parse_fields(x: &str, y: &str, z: &str) -> FlagResult<Self> {
        fn field(s: &str) -> Option<f64> {
            s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
        }

        match (field(x), field(y), field(z)) {
            (Some(x), Some(y), Some(z)) => Ok(Self { x, y, z }),
            _ => Err(FlagError::validation(
                "One of the projection plane inputs is not a proper number!",
            )),
        }
    }

    /// Return `true` for the all-zero vector, which does not define a plane.
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl Default for ProjectionPlane {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

impl From<[f64; 3]> for ProjectionPlane {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<ProjectionPlane> for [f64; 3] {
    fn from(p: ProjectionPlane) -> Self {
        [p.x, p.y, p.z]
    }
}

impl std::fmt::Display for ProjectionPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

use serde::Serialize;

use crate::foundation::core::Point;
use crate::trafo::kind::TrafoKind;

/// Hint shown while the user places a flag point.
pub const HINT_ADD_POINT: &str = "Click to add point. Click 'finish' to finish adding more flags.";
/// Hint shown while the user places a flag direction.
pub const HINT_ADD_LINE: &str = "Click to add line.";
/// Hint shown while a solver request is outstanding.
pub const HINT_LOADING: &str = "Loading transformation data. May take up to 25s.";
/// Hint shown in standard mode when a transformation applies.
pub const HINT_TRANSFORM: &str = "Move slider to transform.";

/// Active editing mode.
///
/// `AddingFlags` is the entry state of flag entry and is left for `AddingPoint` within the same
/// action, so it is observable only between those two steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Pointer input ignored; slider and overlays active.
    #[default]
    Standard,
    /// Flag entry started.
    AddingFlags,
    /// Next click fixes a flag point.
    AddingPoint,
    /// Next click fixes the flag direction.
    AddingLine,
}

impl Mode {
    /// Return `true` for the flag-entry states (`AddingFlags` and its sub-modes).
    pub fn is_adding_flags(self) -> bool {
        matches!(self, Self::AddingFlags | Self::AddingPoint | Self::AddingLine)
    }

    /// Hint text for this mode given the committed flag count.
    pub fn hint(self, count: usize) -> &'static str {
        match self {
            Self::AddingFlags | Self::AddingPoint => HINT_ADD_POINT,
            Self::AddingLine => HINT_ADD_LINE,
            Self::Standard if TrafoKind::is_conditioned(count) => HINT_TRANSFORM,
            Self::Standard => "",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard",
            Self::AddingFlags => "adding_flags",
            Self::AddingPoint => "adding_point",
            Self::AddingLine => "adding_line",
        })
    }
}

/// Per-gesture coordinates, cleared whenever flag entry ends.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gesture {
    /// Point fixed by the first click of the flag in progress.
    pub fixed: Option<Point>,
    /// Last pointer position.
    pub live: Option<Point>,
}

impl Gesture {
    /// Forget both coordinates.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

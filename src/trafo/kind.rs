use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::ScrubRange;
use crate::foundation::error::{FlagError, FlagResult};

/// Transformation family returned by the solver.
///
/// Which kinds exist depends on the number of flags: one for three flags, four for four flags and
/// a single fallback beyond that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrafoKind {
    /// Eruption flow on the single triangle of three flags.
    #[serde(rename = "erupt")]
    Erupt,
    /// Shear flow on a quadrilateral (default for four flags).
    #[serde(rename = "shear")]
    Shear,
    /// Bulge flow on a quadrilateral.
    #[serde(rename = "bulge")]
    Bulge,
    /// Eruption with opposite signs on the two triangles of a quadrilateral.
    #[serde(rename = "eruptmp")]
    EruptMp,
    /// Eruption with equal signs on the two triangles of a quadrilateral.
    #[serde(rename = "eruptpp")]
    EruptPp,
    /// Identity family used when no special transformation applies.
    #[serde(rename = "no_trafo")]
    NoTrafo,
}

const THREE_FLAG_KINDS: &[TrafoKind] = &[TrafoKind::Erupt];
const FOUR_FLAG_KINDS: &[TrafoKind] = &[
    TrafoKind::Shear,
    TrafoKind::Bulge,
    TrafoKind::EruptMp,
    TrafoKind::EruptPp,
];
const FALLBACK_KINDS: &[TrafoKind] = &[TrafoKind::NoTrafo];

impl TrafoKind {
    /// Every kind, in declaration order.
    pub const ALL: [TrafoKind; 6] = [
        TrafoKind::Erupt,
        TrafoKind::Shear,
        TrafoKind::Bulge,
        TrafoKind::EruptMp,
        TrafoKind::EruptPp,
        TrafoKind::NoTrafo,
    ];

    /// Wire name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Erupt => "erupt",
            Self::Shear => "shear",
            Self::Bulge => "bulge",
            Self::EruptMp => "eruptmp",
            Self::EruptPp => "eruptpp",
            Self::NoTrafo => "no_trafo",
        }
    }

    /// Kinds the solver computes for `count` flags; the first one is the default.
    ///
    /// Empty below three flags, where nothing is ever submitted.
    pub fn family_for(count: usize) -> &'static [TrafoKind] {
        match count {
            0..=2 => &[],
            3 => THREE_FLAG_KINDS,
            4 => FOUR_FLAG_KINDS,
            _ => FALLBACK_KINDS,
        }
    }

    /// Kind made active right after ingesting a response for `count` flags.
    pub fn default_for(count: usize) -> Option<TrafoKind> {
        Self::family_for(count).first().copied()
    }

    /// Return `true` when `count` has a special (non-fallback) transformation.
    pub fn is_conditioned(count: usize) -> bool {
        matches!(count, 3 | 4)
    }

    /// Only the shear family carries an ellipse overlay.
    pub fn supports_ellipse(self) -> bool {
        self == Self::Shear
    }
}

impl std::fmt::Display for TrafoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrafoKind {
    type Err = FlagError;

    fn from_str(s: &str) -> FlagResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| FlagError::validation(format!("unknown transformation kind '{s}'")))
    }
}

/// Slider bound and scale for one kind, as announced by the solver.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct KindRange {
    /// Symmetric integer bound: the slider spans `[-range, +range]`.
    #[serde(alias = "trafo_range")]
    pub range: i32,
    /// Factor applied to the slider position for display.
    #[serde(alias = "t_step")]
    pub step: f64,
}

impl KindRange {
    /// Slider bounds for this kind.
    pub fn scrub_range(self) -> FlagResult<ScrubRange> {
        ScrubRange::symmetric(self.range)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trafo/kind.rs"]
mod tests;

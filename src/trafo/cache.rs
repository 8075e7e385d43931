use std::collections::{BTreeMap, HashMap};

use crate::foundation::core::{ScrubPosition, ScrubRange};
use crate::foundation::error::{FlagError, FlagResult};
use crate::foundation::math::round_to_tenth;
use crate::solver::wire::SolverPayload;
use crate::trafo::frame::TrafoFrame;
use crate::trafo::kind::{KindRange, TrafoKind};

/// Typed cache key replacing the solver's numeric-string scrub keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameKey {
    /// Transformation family.
    pub kind: TrafoKind,
    /// Whole slider position.
    pub scrub: ScrubPosition,
}

/// Frames of one solver round trip, keyed by `(kind, scrub position)`.
///
/// After a successful [`TrafoCache::ingest`] every whole position in `[-range, +range]` of every
/// ingested kind is present. A new submission clears the whole cache.
#[derive(Debug, Default)]
pub struct TrafoCache {
    ranges: BTreeMap<TrafoKind, KindRange>,
    frames: HashMap<FrameKey, TrafoFrame>,
    active: Option<(TrafoKind, ScrubRange)>,
}

impl TrafoCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `true` when nothing is ingested.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of cached frames across all kinds.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Drop every kind and frame.
    pub fn clear(&mut self) {
        self.ranges.clear();
        self.frames.clear();
        self.active = None;
    }

    /// Ingested kinds in stable order.
    pub fn kinds(&self) -> impl Iterator<Item = TrafoKind> + '_ {
        self.ranges.keys().copied()
    }

    /// Range/step entry for `kind`, if ingested.
    pub fn kind_range(&self, kind: TrafoKind) -> Option<KindRange> {
        self.ranges.get(&kind).copied()
    }

    /// Currently selected kind.
    pub fn active_kind(&self) -> Option<TrafoKind> {
        self.active.map(|(k, _)| k)
    }

    /// Valid slider bounds of the selected kind.
    pub fn scrub_range(&self) -> Option<ScrubRange> {
        self.active.map(|(_, r)| r)
    }

    /// Populate the cache from a successful solver payload for `count` flags.
    ///
    /// Every kind of [`TrafoKind::family_for`]`(count)` must carry a range entry and a complete,
    /// correctly sized frame table; kinds outside that family are ignored. Validation happens
    /// before anything is replaced, so a rejected payload leaves the cache untouched. On success the
    /// default kind for `count` is selected and returned.
    #[tracing::instrument(skip(self, payload))]
    pub fn ingest(&mut self, payload: SolverPayload, count: usize) -> FlagResult<TrafoKind> {
        let default = TrafoKind::default_for(count).ok_or_else(|| {
            FlagError::cache(format!("no transformation family for {count} flags"))
        })?;

        let SolverPayload {
            ranges: payload_ranges,
            frames: mut payload_frames,
        } = payload;

        let mut ranges = BTreeMap::new();
        let mut frames = HashMap::new();
        for &kind in TrafoKind::family_for(count) {
            let entry = payload_ranges
                .get(&kind)
                .copied()
                .ok_or_else(|| FlagError::cache(format!("no range entry for kind '{kind}'")))?;
            let bounds = entry.scrub_range()?;
            let mut table = payload_frames
                .remove(&kind)
                .ok_or_else(|| FlagError::cache(format!("no frames for kind '{kind}'")))?;

            for scrub in bounds.positions() {
                let frame = table.remove(&scrub).ok_or_else(|| {
                    FlagError::cache(format!("kind '{kind}' has no frame at scrub {scrub}"))
                })?;
                if frame.count() != count {
                    return Err(FlagError::cache(format!(
                        "kind '{kind}' frame at scrub {scrub} has {} points, expected {count}",
                        frame.count()
                    )));
                }
                frames.insert(FrameKey { kind, scrub }, frame);
            }
            ranges.insert(kind, entry);
        }
        for kind in payload_frames.keys() {
            tracing::debug!(%kind, count, "ignoring frames outside the family for this count");
        }

        self.ranges = ranges;
        self.frames = frames;
        self.active = None;
        self.select(default)?;
        tracing::debug!(frames = self.frames.len(), %default, "ingested transformation data");
        Ok(default)
    }

    /// Make `kind` the active family and return its slider bounds.
    ///
    /// Unknown kinds are rejected and the prior selection is kept.
    pub fn select(&mut self, kind: TrafoKind) -> FlagResult<ScrubRange> {
        let Some(entry) = self.ranges.get(&kind) else {
            tracing::warn!(%kind, "rejecting selection of a kind that was not ingested");
            return Err(FlagError::cache(format!("kind '{kind}' is not cached")));
        };
        let bounds = entry.scrub_range()?;
        self.active = Some((kind, bounds));
        Ok(bounds)
    }

    /// Cached frame for `(kind, scrub)`.
    ///
    /// Positions outside the kind's range are rejected, never clamped.
    pub fn lookup(&self, kind: TrafoKind, scrub: ScrubPosition) -> FlagResult<&TrafoFrame> {
        let entry = self
            .ranges
            .get(&kind)
            .ok_or_else(|| FlagError::cache(format!("kind '{kind}' is not cached")))?;
        let bounds = entry.scrub_range()?;
        if !bounds.contains(scrub) {
            return Err(FlagError::cache(format!(
                "scrub {scrub} is outside [{}, {}] for kind '{kind}'",
                bounds.min, bounds.max
            )));
        }
        self.frames
            .get(&FrameKey { kind, scrub })
            .ok_or_else(|| FlagError::cache(format!("kind '{kind}' has no frame at scrub {scrub}")))
    }

    /// Frame of the active kind at `scrub`.
    pub fn active_frame(&self, scrub: ScrubPosition) -> FlagResult<&TrafoFrame> {
        let kind = self
            .active_kind()
            .ok_or_else(|| FlagError::cache("no transformation kind is selected"))?;
        self.lookup(kind, scrub)
    }

    /// Slider label for `scrub` under the active kind: `scrub * step`, one decimal.
    pub fn display_value(&self, scrub: ScrubPosition) -> Option<f64> {
        let kind = self.active_kind()?;
        let step = self.ranges.get(&kind)?.step;
        Some(round_to_tenth(f64::from(scrub.0) * step))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trafo/cache.rs"]
mod tests;

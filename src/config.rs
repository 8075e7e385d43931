//! Session options.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{ProjectionPlane, Viewport};
use crate::foundation::error::{FlagError, FlagResult};

/// Tunables of an [`crate::EditingSession`].
///
/// Every field has a default, so a JSON file only needs the fields it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOpts {
    /// Upper bound on committed flags.
    pub max_flags: usize,
    /// Rendering frame.
    pub viewport: Viewport,
    /// Radius of point markers.
    pub marker_radius: f64,
    /// Projection plane sent with the first request.
    pub initial_projection_plane: ProjectionPlane,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            max_flags: 8,
            viewport: Viewport::default(),
            marker_radius: 2.5,
            initial_projection_plane: ProjectionPlane::default(),
        }
    }
}

impl SessionOpts {
    /// Check value ranges.
    pub fn validate(&self) -> FlagResult<()> {
        if self.max_flags < 3 {
            return Err(FlagError::validation(format!(
                "max_flags must be >= 3 (got {})",
                self.max_flags
            )));
        }
        Viewport::new(self.viewport.width, self.viewport.height)?;
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(FlagError::validation("marker_radius must be finite and > 0"));
        }
        let p = self.initial_projection_plane;
        if ![p.x, p.y, p.z].iter().all(|v| v.is_finite()) || p.is_zero() {
            return Err(FlagError::validation(
                "initial_projection_plane must be a finite non-zero vector",
            ));
        }
        Ok(())
    }

    /// Parse and validate options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlagResult<Self> {
        let opts: Self = serde_json::from_reader(r)
            .map_err(|e| FlagError::serde(format!("parse session options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Parse and validate options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FlagResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlagError::validation(format!("open session options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

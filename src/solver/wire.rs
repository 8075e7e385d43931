use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Point, ProjectionPlane, ScrubPosition};
use crate::foundation::error::{FlagError, FlagResult};
use crate::trafo::frame::TrafoFrame;
use crate::trafo::kind::{KindRange, TrafoKind};

/// Wire point: serialized as `[x, y]`, deserialized from `[x, y]` or `{ "x": .., "y": .. }`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PointDef(Point);

impl Serialize for PointDef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        [self.0.x, self.0.y].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PointDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 2]),
            Obj { x: f64, y: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => Ok(Self(Point::new(x, y))),
            Repr::Obj { x, y } => Ok(Self(Point::new(x, y))),
        }
    }
}

fn unwrap_points(defs: Vec<PointDef>) -> Vec<Point> {
    defs.into_iter().map(|p| p.0).collect()
}

mod point_pairs {
    use super::{PointDef, unwrap_points};
    use crate::foundation::core::Point;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(points: &[Point], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(points.iter().map(|&p| PointDef(p)))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Point>, D::Error> {
        Vec::<PointDef>::deserialize(d).map(unwrap_points)
    }
}

/// Outbound solver request.
///
/// Field names follow the solver contract; the legacy short names (`ps`, `ds`, `pplane`,
/// `oldpplane`) are accepted when reading a recorded request back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverRequest {
    /// Flag points.
    #[serde(with = "point_pairs", alias = "ps")]
    pub points: Vec<Point>,
    /// Direction points, parallel to `points`.
    #[serde(with = "point_pairs", alias = "ds")]
    pub directions: Vec<Point>,
    /// Plane for this request.
    #[serde(alias = "pplane")]
    pub projection_plane: ProjectionPlane,
    /// Plane of the previous request when only the plane changed.
    #[serde(default, alias = "oldpplane")]
    pub previous_projection_plane: Option<ProjectionPlane>,
}

impl SolverRequest {
    /// Number of flags carried by the request.
    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// Serialize to the JSON body sent to the solver.
    pub fn to_json(&self) -> FlagResult<String> {
        serde_json::to_string(self).map_err(|e| FlagError::serde(format!("encode request: {e}")))
    }
}

/// Parsed transformation data of a successful response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolverPayload {
    /// Range/step per kind.
    pub ranges: BTreeMap<TrafoKind, KindRange>,
    /// Frames per kind, keyed by scrub position.
    pub frames: BTreeMap<TrafoKind, BTreeMap<ScrubPosition, TrafoFrame>>,
}

impl SolverPayload {
    /// Declare the range/step of `kind`.
    pub fn set_range(&mut self, kind: TrafoKind, range: KindRange) {
        self.ranges.insert(kind, range);
    }

    /// Store one frame.
    pub fn insert_frame(&mut self, kind: TrafoKind, scrub: ScrubPosition, frame: TrafoFrame) {
        self.frames.entry(kind).or_default().insert(scrub, frame);
    }
}

/// Inbound solver response.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverResponse {
    /// `error == 0` with transformation data.
    Success(SolverPayload),
    /// Non-zero `error` code; the message table is owned by the caller.
    Failure {
        /// Raw solver error code.
        code: u32,
    },
}

#[derive(Deserialize)]
struct ResponseEnvelope {
    error: u32,
    #[serde(default, rename = "rangeTable", alias = "trafo_range")]
    range_table: BTreeMap<String, KindRange>,
    #[serde(default)]
    ellipse: Option<Vec<PointDef>>,
    #[serde(flatten)]
    rest: BTreeMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct FrameDef {
    #[serde(alias = "primaryPoints")]
    ps: Vec<PointDef>,
    #[serde(alias = "secondaryPoints")]
    qs: Vec<PointDef>,
    #[serde(default, alias = "innerPoints")]
    us: Vec<Vec<PointDef>>,
    #[serde(default, alias = "convexHull")]
    convex: Option<Vec<PointDef>>,
    #[serde(default)]
    ellipse: Option<Vec<PointDef>>,
}

impl From<FrameDef> for TrafoFrame {
    fn from(def: FrameDef) -> Self {
        Self {
            primary_points: unwrap_points(def.ps),
            secondary_points: unwrap_points(def.qs),
            inner_points: def.us.into_iter().map(unwrap_points).collect(),
            convex_hull: def.convex.map(unwrap_points),
            ellipse: def.ellipse.map(unwrap_points),
        }
    }
}

impl SolverResponse {
    /// Parse a response from a JSON value.
    ///
    /// Top-level keys that do not name a transformation kind (the solver echoes the request) are
    /// ignored. A top-level `ellipse` is attached to every shear frame without one of its own.
    pub fn from_value(value: serde_json::Value) -> FlagResult<Self> {
        let env: ResponseEnvelope = serde_json::from_value(value)
            .map_err(|e| FlagError::serde(format!("parse solver response: {e}")))?;
        if env.error != 0 {
            return Ok(Self::Failure { code: env.error });
        }

        let mut payload = SolverPayload::default();
        for (name, range) in env.range_table {
            match name.parse::<TrafoKind>() {
                Ok(kind) => payload.set_range(kind, range),
                Err(_) => tracing::debug!(%name, "ignoring range entry for unknown kind"),
            }
        }

        let shared_ellipse = env.ellipse.map(unwrap_points);
        for (name, block) in env.rest {
            let Ok(kind) = name.parse::<TrafoKind>() else {
                continue;
            };
            let table: BTreeMap<String, FrameDef> = serde_json::from_value(block)
                .map_err(|e| FlagError::serde(format!("parse frames of kind '{kind}': {e}")))?;
            for (key, def) in table {
                let scrub = key.trim().parse::<i32>().map(ScrubPosition).map_err(|_| {
                    FlagError::serde(format!(
                        "scrub key '{key}' of kind '{kind}' is not an integer"
                    ))
                })?;
                let mut frame = TrafoFrame::from(def);
                if frame.ellipse.is_none() && kind.supports_ellipse() {
                    frame.ellipse = shared_ellipse.clone();
                }
                payload.insert_frame(kind, scrub, frame);
            }
        }
        Ok(Self::Success(payload))
    }

    /// Parse a response from JSON text.
    pub fn from_json_str(s: &str) -> FlagResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)
            .map_err(|e| FlagError::serde(format!("parse solver response JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Parse a response from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlagResult<Self> {
        let value: serde_json::Value = serde_json::from_reader(r)
            .map_err(|e| FlagError::serde(format!("parse solver response JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Parse a recorded response from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FlagResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlagError::validation(format!("open solver response '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/solver/wire.rs"]
mod tests;

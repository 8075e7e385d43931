use serde::Serialize;

use crate::foundation::core::Point;

/// Named group of primitives bound positionally to one data array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    /// Hovering point marker while placing a flag point.
    PreviewPoint,
    /// Hovering infinite line while placing a flag direction.
    PreviewLine,
    /// Committed flag points.
    FlagPoint,
    /// Committed flag lines.
    FlagLine,
    /// Markers of the inner constructions.
    InnerPoints,
    /// One closed polygon per inner construction.
    InnerTriangles,
    /// Markers of the middle-triangle fan.
    MiddlePoints,
    /// Fan `(p[0], p[i], p[i + 1])` over the flag points.
    MiddleTriangles,
    /// Segments `p[i] -> q[(i + 2) mod 3]` for three flags.
    HelperLines,
    /// Closed outline of the shear ellipse.
    Ellipse,
    /// Filled convex hull.
    ConvexHull,
}

impl Family {
    /// Families rebuilt from the displayable arrays on every refresh, in paint order.
    pub const DATA_BOUND: [Family; 9] = [
        Family::ConvexHull,
        Family::Ellipse,
        Family::HelperLines,
        Family::InnerTriangles,
        Family::InnerPoints,
        Family::MiddleTriangles,
        Family::MiddlePoints,
        Family::FlagLine,
        Family::FlagPoint,
    ];

    /// Stable identifier of the family.
    pub fn key(self) -> &'static str {
        match self {
            Self::PreviewPoint => "newpoint",
            Self::PreviewLine => "newline",
            Self::FlagPoint => "point",
            Self::FlagLine => "line",
            Self::InnerPoints => "u_point",
            Self::InnerTriangles => "u_line",
            Self::MiddlePoints => "p_point",
            Self::MiddleTriangles => "p_line",
            Self::HelperLines => "helper_line",
            Self::Ellipse => "ellipse",
            Self::ConvexHull => "convex",
        }
    }

    /// Role given to primitives created in this family.
    pub fn default_role(self) -> Role {
        match self {
            Self::PreviewPoint | Self::PreviewLine => Role::Preview,
            Self::FlagPoint | Self::FlagLine => Role::Committed,
            Self::InnerPoints | Self::InnerTriangles => Role::Inner,
            Self::MiddlePoints | Self::MiddleTriangles => Role::Middle,
            Self::HelperLines | Self::Ellipse => Role::Helper,
            Self::ConvexHull => Role::Hull,
        }
    }
}

impl Serialize for Family {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Styling class of a primitive; colors are up to the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Not yet committed input.
    Preview,
    /// Committed flag geometry.
    Committed,
    /// Inner construction overlay.
    Inner,
    /// Middle triangle overlay.
    Middle,
    /// Helper lines and ellipse.
    Helper,
    /// Translucent filled hull.
    Hull,
}

impl Role {
    /// Return `true` when polygons of this role are filled rather than outlined.
    pub fn is_filled(self) -> bool {
        self == Self::Hull
    }
}

/// Geometric attributes of a primitive.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Circle marker.
    Marker {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
    },
    /// Straight segment.
    Segment {
        /// First endpoint.
        from: Point,
        /// Second endpoint.
        to: Point,
    },
    /// Closed polygon through the vertices, in order.
    Polygon {
        /// Vertex list.
        vertices: Vec<Point>,
    },
}

/// One rendered element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Primitive {
    /// Styling class.
    pub role: Role,
    /// Geometry.
    pub shape: Shape,
}

/// Stable identifier `family/index` of a primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PrimitiveId {
    /// Owning family.
    pub family: Family,
    /// Position in the family's data array.
    pub index: usize,
}

impl std::fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.family, self.index)
    }
}

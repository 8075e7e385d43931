use std::collections::BTreeMap;

use crate::editor::overlays::{Overlay, Overlays};
use crate::foundation::core::{Point, Viewport};
use crate::geometry::frame::frame_intersection;
use crate::scene::primitive::{Family, Shape};

/// Displayable arrays a scene refresh is built from.
///
/// Before the first solver answer only `points` and `directions` are set; afterwards they hold the
/// active frame's primary and secondary points and the optional arrays come from the same frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayerData<'a> {
    /// Flag points.
    pub points: &'a [Point],
    /// Second point on each flag line.
    pub directions: &'a [Point],
    /// Inner constructions, one group per polygon.
    pub inner_points: &'a [Vec<Point>],
    /// Convex hull vertices.
    pub convex_hull: Option<&'a [Point]>,
    /// Ellipse samples.
    pub ellipse: Option<&'a [Point]>,
}

/// Geometry parameters shared by every layer.
#[derive(Clone, Copy, Debug)]
pub struct LayerStyle {
    /// Rendering frame used to stretch flag lines past the visible area.
    pub viewport: Viewport,
    /// Radius of point markers.
    pub marker_radius: f64,
}

/// Compute the shapes of every data-bound family.
///
/// Every family in [`Family::DATA_BOUND`] is present in the result; families whose overlay is off
/// or whose data is missing map to an empty list so reconciliation tears them down.
pub fn build_layers(
    data: LayerData<'_>,
    overlays: &Overlays,
    style: LayerStyle,
) -> BTreeMap<Family, Vec<Shape>> {
    let mut out: BTreeMap<Family, Vec<Shape>> = Family::DATA_BOUND
        .iter()
        .map(|f| (*f, Vec::new()))
        .collect();

    let marker = |p: &Point| Shape::Marker {
        center: *p,
        radius: style.marker_radius,
    };

    out.insert(Family::FlagPoint, data.points.iter().map(marker).collect());
    out.insert(
        Family::FlagLine,
        data.points
            .iter()
            .zip(data.directions)
            .map(|(p, d)| infinite_line(*p, *d, style.viewport))
            .collect(),
    );

    if overlays.is_on(Overlay::Inner) {
        out.insert(
            Family::InnerTriangles,
            data.inner_points
                .iter()
                .filter(|g| !g.is_empty())
                .map(|g| Shape::Polygon {
                    vertices: g.clone(),
                })
                .collect(),
        );
        out.insert(
            Family::InnerPoints,
            data.inner_points.iter().flatten().map(marker).collect(),
        );
    }

    if overlays.is_on(Overlay::Middle) {
        out.insert(Family::MiddleTriangles, middle_fan(data.points));
        out.insert(Family::MiddlePoints, data.points.iter().map(marker).collect());
    }

    if overlays.is_on(Overlay::Helper) {
        out.insert(
            Family::HelperLines,
            helper_segments(data.points, data.directions),
        );
    }

    if overlays.is_on(Overlay::ConvexHull)
        && let Some(hull) = data.convex_hull.filter(|h| !h.is_empty())
    {
        out.insert(
            Family::ConvexHull,
            vec![Shape::Polygon {
                vertices: hull.to_vec(),
            }],
        );
    }

    if overlays.is_on(Overlay::Ellipse)
        && let Some(ellipse) = data.ellipse.filter(|e| !e.is_empty())
    {
        out.insert(
            Family::Ellipse,
            vec![Shape::Polygon {
                vertices: ellipse.to_vec(),
            }],
        );
    }

    out
}

/// Segment through `p` and `d` reaching past the viewport on both sides.
pub fn infinite_line(p: Point, d: Point, viewport: Viewport) -> Shape {
    let [from, to] = frame_intersection(p, d, viewport);
    Shape::Segment { from, to }
}

/// Triangles `(p[0], p[i], p[i + 1])` for `i` in `1..n - 1`.
pub fn middle_fan(points: &[Point]) -> Vec<Shape> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    points
        .windows(2)
        .skip(1)
        .map(|w| Shape::Polygon {
            vertices: vec![first, w[0], w[1]],
        })
        .collect()
}

/// Segments `p[i] -> q[(i + 2) mod 3]`; empty unless exactly three flags participate.
pub fn helper_segments(primary: &[Point], secondary: &[Point]) -> Vec<Shape> {
    if primary.len() != 3 || secondary.len() != 3 {
        return Vec::new();
    }
    (0..3)
        .map(|i| Shape::Segment {
            from: primary[i],
            to: secondary[(i + 2) % 3],
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layers.rs"]
mod tests;

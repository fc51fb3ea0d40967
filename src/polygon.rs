//! Polygons stored as tables of pre-rotated orientation views.
//!
//! Rotating a polygon per collision test would cost a sin/cos per vertex per
//! call, so each polygon instead carries a fixed number of views sampled at
//! evenly spaced angles. A queried direction snaps to the nearest sampled
//! view by table lookup. View tables are immutable after construction and
//! safe to share across worker threads.

use std::f32::consts::TAU;

use glam::Vec2;
use thiserror::Error;

use crate::collider::Aabb;
use crate::primitives::EPSILON;

/// Error building a polygon view table.
#[derive(Debug, Error)]
pub enum PolygonError {
    #[error("polygon outline needs at least 3 vertices, got {0}")]
    DegenerateOutline(usize),
    #[error("polygon view count must be non-zero")]
    NoViews,
}

/// One discretized orientation of a polygon.
///
/// Vertices are in object-local space, already rotated for this view's
/// representative angle, and consistently wound (either CW or CCW). The
/// outline need not be convex.
#[derive(Debug, Clone)]
pub struct PolygonView {
    vertices: Vec<Vec2>,
    bbox: Aabb,
}

impl PolygonView {
    /// Build a view, computing the local bounding box once up front.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        let bbox = Aabb::from_points(&vertices);
        Self { vertices, bbox }
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Local-space bounding box, computed at construction.
    pub fn bbox(&self) -> Aabb {
        self.bbox
    }

    /// Iterate the edges `(Vi, Vi+1)`, wrapping around to close the outline.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Winding-angle point-in-polygon test.
    ///
    /// Sums the signed angle subtended at the query point by every edge of
    /// the view translated by `world_offset`. For a simple polygon the sum
    /// is +-2pi inside and 0 outside; anything below the tolerance counts as
    /// outside. Valid for concave outlines. Outlines with fewer than three
    /// vertices contain nothing.
    pub fn contains(&self, world_offset: Vec2, point: Vec2) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        // Accumulated in f64: per-edge f32 atan2 error grows with the vertex
        // count and would swamp the tolerance on high-vertex outlines.
        let mut winding = 0.0f64;
        for (a, b) in self.edges() {
            let v = (world_offset + a - point).as_dvec2();
            let w = (world_offset + b - point).as_dvec2();
            winding += v.perp_dot(w).atan2(v.dot(w));
        }
        winding.abs() > f64::from(EPSILON)
    }
}

/// A polygon as a fixed table of pre-rotated views, selected by nearest
/// angle. Immutable once built.
#[derive(Debug, Clone)]
pub struct Polygon {
    views: Vec<PolygonView>,
    sector_width: f32,
    sector_offset: f32,
}

impl Polygon {
    /// Build from pre-rotated vertex lists, one per evenly spaced sample
    /// angle starting at zero.
    ///
    /// An empty list is accepted: the resulting polygon has no views and
    /// never collides.
    pub fn from_views(views: Vec<Vec<Vec2>>) -> Self {
        let sector_width = if views.is_empty() {
            TAU
        } else {
            TAU / views.len() as f32
        };
        Self {
            views: views.into_iter().map(PolygonView::new).collect(),
            sector_width,
            sector_offset: sector_width * 0.5,
        }
    }

    /// Generate `num_views` views by rotating a base outline.
    ///
    /// This is the offline step run when an entity type loads, not per
    /// collision test.
    pub fn generate(base: &[Vec2], num_views: usize) -> Result<Self, PolygonError> {
        if base.len() < 3 {
            return Err(PolygonError::DegenerateOutline(base.len()));
        }
        if num_views == 0 {
            return Err(PolygonError::NoViews);
        }
        let sector = TAU / num_views as f32;
        let views = (0..num_views)
            .map(|i| rotate_vertices(base, sector * i as f32))
            .collect();
        Ok(Self::from_views(views))
    }

    pub fn num_views(&self) -> usize {
        self.views.len()
    }

    pub fn views(&self) -> &[PolygonView] {
        &self.views
    }

    /// Angular width of each view's responsibility.
    pub fn sector_width(&self) -> f32 {
        self.sector_width
    }

    /// Select the view responsible for `direction` (radians, `[0, 2pi)`).
    ///
    /// Pure table lookup; the half-sector offset snaps the direction to the
    /// *nearest* sampled angle rather than the one whose start angle
    /// precedes it. Directions outside the range are a caller bug: debug
    /// builds assert, release builds normalize with `rem_euclid`. Returns
    /// `None` for a polygon with no views.
    pub fn select_view(&self, direction: f32) -> Option<&PolygonView> {
        if self.views.is_empty() {
            return None;
        }
        debug_assert!(
            (0.0..TAU).contains(&direction),
            "direction {direction} outside [0, 2pi)"
        );
        let direction = direction.rem_euclid(TAU);
        let index =
            ((direction + self.sector_offset) / self.sector_width) as usize % self.views.len();
        Some(&self.views[index])
    }
}

/// Rotate an outline by `angle` radians about the local origin.
pub fn rotate_vertices(vertices: &[Vec2], angle: f32) -> Vec<Vec2> {
    let (sin, cos) = angle.sin_cos();
    vertices
        .iter()
        .map(|v| Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_point_in_square() {
        let view = PolygonView::new(square());
        assert!(view.contains(Vec2::ZERO, Vec2::new(5.0, 5.0)));
        assert!(!view.contains(Vec2::ZERO, Vec2::new(-1.0, 5.0)));
        assert!(!view.contains(Vec2::ZERO, Vec2::new(15.0, 5.0)));
    }

    #[test]
    fn test_point_in_square_with_offset() {
        let view = PolygonView::new(square());
        let offset = Vec2::new(100.0, 100.0);
        assert!(view.contains(offset, Vec2::new(105.0, 105.0)));
        assert!(!view.contains(offset, Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_point_in_concave_polygon() {
        // A "U" shape: points in the notch are outside.
        let view = PolygonView::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(7.0, 10.0),
            Vec2::new(7.0, 3.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(3.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]);
        assert!(view.contains(Vec2::ZERO, Vec2::new(1.5, 5.0)));
        assert!(view.contains(Vec2::ZERO, Vec2::new(5.0, 1.5)));
        assert!(!view.contains(Vec2::ZERO, Vec2::new(5.0, 7.0)));
    }

    #[test]
    fn test_point_near_many_vertex_outline() {
        // 256 edges accumulate enough rounding to demand the widened sum.
        let vertices: Vec<Vec2> = (0..256)
            .map(|i| {
                let angle = TAU * i as f32 / 256.0;
                Vec2::new(10.0 * angle.cos(), 10.0 * angle.sin())
            })
            .collect();
        let view = PolygonView::new(vertices);
        assert!(!view.contains(Vec2::ZERO, Vec2::new(0.0, 10.2)));
        assert!(view.contains(Vec2::ZERO, Vec2::new(0.0, 9.8)));
    }

    #[test]
    fn test_view_bbox() {
        let view = PolygonView::new(square());
        assert_eq!(view.bbox().min, Vec2::ZERO);
        assert_eq!(view.bbox().max, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_degenerate_view_contains_nothing() {
        let view = PolygonView::new(vec![Vec2::ZERO, Vec2::new(5.0, 0.0)]);
        assert!(!view.contains(Vec2::ZERO, Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn test_select_view_nearest() {
        let polygon = Polygon::generate(&square(), 4).unwrap();
        let sector = polygon.sector_width();

        // Directions near zero snap to view 0.
        assert!(std::ptr::eq(
            polygon.select_view(0.0).unwrap(),
            &polygon.views()[0]
        ));
        assert!(std::ptr::eq(
            polygon.select_view(sector * 0.49).unwrap(),
            &polygon.views()[0]
        ));
        // Past the half-sector boundary the next view takes over.
        assert!(std::ptr::eq(
            polygon.select_view(sector * 0.51).unwrap(),
            &polygon.views()[1]
        ));
        assert!(std::ptr::eq(
            polygon.select_view(FRAC_PI_2).unwrap(),
            &polygon.views()[1]
        ));
        // The last half sector wraps back to view 0.
        assert!(std::ptr::eq(
            polygon.select_view(TAU - sector * 0.25).unwrap(),
            &polygon.views()[0]
        ));
    }

    #[test]
    fn test_select_view_empty_polygon() {
        let polygon = Polygon::from_views(Vec::new());
        assert!(polygon.select_view(0.0).is_none());
    }

    #[test]
    fn test_generate_rotates_views() {
        let polygon = Polygon::generate(&square(), 4).unwrap();
        assert_eq!(polygon.num_views(), 4);

        // Quarter-turn view: the square rotates into the second quadrant.
        let quarter = &polygon.views()[1];
        assert!(quarter.bbox().min.x < -9.9);
        assert!(quarter.bbox().max.y > 9.9);
    }

    #[test]
    fn test_generate_rejects_degenerate_input() {
        assert!(matches!(
            Polygon::generate(&[Vec2::ZERO, Vec2::X], 8),
            Err(PolygonError::DegenerateOutline(2))
        ));
        assert!(matches!(
            Polygon::generate(&square(), 0),
            Err(PolygonError::NoViews)
        ));
    }

    #[test]
    fn test_rotate_vertices_quarter_turn() {
        let rotated = rotate_vertices(&[Vec2::new(1.0, 0.0)], FRAC_PI_2);
        assert!(rotated[0].distance(Vec2::new(0.0, 1.0)) < 1e-6);
    }
}

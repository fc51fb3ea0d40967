//! Shape instances and world-space bounding volumes.

use glam::Vec2;

use crate::polygon::Polygon;
use crate::sprite::Sprite;

/// Axis-aligned bounding box used for broad-phase rejection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a center point and half extents.
    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Tightest box around a point set. An empty slice yields a degenerate
    /// box at the origin.
    pub fn from_points(points: &[Vec2]) -> Self {
        let Some((&first, rest)) = points.split_first() else {
            return Self {
                min: Vec2::ZERO,
                max: Vec2::ZERO,
            };
        };
        let mut min = first;
        let mut max = first;
        for &p in rest {
            min = min.min(p);
            max = max.max(p);
        }
        Self { min, max }
    }

    /// A zero-extent box at a single point.
    pub fn point(at: Vec2) -> Self {
        Self { min: at, max: at }
    }

    /// The box shifted by `offset`.
    pub fn translate(self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Test whether two boxes overlap. Touching edges count.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Overlap rectangle of two boxes, if any.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min.x <= max.x && min.y <= max.y).then_some(Aabb { min, max })
    }
}

/// A shape instance: a shape reference plus its world placement.
///
/// All coordinates are world-space. Sprite and polygon centers locate the
/// middle of the frame or the polygon's local origin respectively.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    /// A sprite frame centered at `center`.
    Sprite { sprite: Sprite<'a>, center: Vec2 },
    /// A polygon at `center`, facing `direction` radians in `[0, 2pi)`.
    Polygon {
        polygon: &'a Polygon,
        center: Vec2,
        direction: f32,
    },
    /// A finite line segment between two world points.
    Segment { start: Vec2, end: Vec2 },
    /// A circle of `radius` around `center`.
    Circle { center: Vec2, radius: f32 },
}

impl Shape<'_> {
    /// World-space bounding box for broad-phase rejection.
    ///
    /// A polygon with no views yields a degenerate point box at its center;
    /// the pair tests reject such polygons before the box is ever used.
    pub fn aabb(&self) -> Aabb {
        match self {
            Shape::Sprite { sprite, center } => {
                Aabb::from_center_half_extents(*center, sprite.half_extents())
            }
            Shape::Polygon {
                polygon,
                center,
                direction,
            } => polygon
                .select_view(*direction)
                .map(|view| view.bbox().translate(*center))
                .unwrap_or_else(|| Aabb::point(*center)),
            Shape::Segment { start, end } => Aabb::from_points(&[*start, *end]),
            Shape::Circle { center, radius } => {
                Aabb::from_center_half_extents(*center, Vec2::splat(radius.max(0.0)))
            }
        }
    }
}

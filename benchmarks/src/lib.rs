//! Shared setup helpers for the clash2d benchmarks.

use std::f32::consts::TAU;

use clash2d::{Frame, OpacityMap, Polygon, Sprite};
use glam::Vec2;

/// Checkerboard transparency: roughly half the pixels opaque, forcing the
/// pixel-scan loops to keep iterating instead of exiting on the first pixel.
pub struct CheckerMap {
    pub width: u32,
    pub height: u32,
}

impl OpacityMap for CheckerMap {
    fn frame_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn is_opaque(&self, _frame: Frame, x: u32, y: u32) -> bool {
        (x + y) % 2 == 0
    }
}

/// A sprite over a checkerboard map.
pub fn checker_sprite(map: &CheckerMap) -> Sprite<'_> {
    Sprite::new(map, Frame::default())
}

/// Vertices of a regular polygon around the local origin.
pub fn regular_outline(sides: usize, radius: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let angle = TAU * i as f32 / sides as f32;
            Vec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// A concave star outline, alternating inner and outer radii.
pub fn star_outline(points: usize, inner: f32, outer: f32) -> Vec<Vec2> {
    (0..points * 2)
        .map(|i| {
            let angle = TAU * i as f32 / (points * 2) as f32;
            let radius = if i % 2 == 0 { outer } else { inner };
            Vec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// A view table generated from a regular outline.
pub fn regular_polygon(sides: usize, radius: f32, views: usize) -> anyhow::Result<Polygon> {
    Ok(Polygon::generate(&regular_outline(sides, radius), views)?)
}

/// A view table generated from a star outline.
pub fn star_polygon(points: usize, inner: f32, outer: f32, views: usize) -> anyhow::Result<Polygon> {
    Ok(Polygon::generate(&star_outline(points, inner, outer), views)?)
}

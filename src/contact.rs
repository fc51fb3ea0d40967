//! Contact data returned by the shape-pair tests.

use glam::Vec2;

/// Up to two world-space contact points produced by a single pair test.
///
/// The tests never report more than two points, even where a concave polygon
/// would admit further crossings; see the notes in [`crate::narrowphase`].
/// Stored inline so the hot paths allocate nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Contacts {
    points: [Vec2; 2],
    count: u8,
}

impl Contacts {
    /// Maximum number of points a pair test reports.
    pub const CAPACITY: usize = 2;

    /// Create an empty contact set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding a single point.
    pub fn one(point: Vec2) -> Self {
        let mut contacts = Self::new();
        contacts.push(point);
        contacts
    }

    /// Create a set holding two points.
    pub fn two(a: Vec2, b: Vec2) -> Self {
        let mut contacts = Self::new();
        contacts.push(a);
        contacts.push(b);
        contacts
    }

    /// Append a point. Points past the capacity of two are dropped.
    pub fn push(&mut self, point: Vec2) {
        if (self.count as usize) < Self::CAPACITY {
            self.points[self.count as usize] = point;
            self.count += 1;
        }
    }

    /// Number of points in the set.
    pub fn len(&self) -> usize {
        self.count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether the set already holds two points.
    pub fn is_full(&self) -> bool {
        self.count as usize == Self::CAPACITY
    }

    /// The stored points, in the order they were found.
    pub fn points(&self) -> &[Vec2] {
        &self.points[..self.count as usize]
    }

    /// The first point, if any.
    pub fn first(&self) -> Option<Vec2> {
        (self.count > 0).then(|| self.points[0])
    }
}

//! clash2d - 2D collision detection for sprite games
//!
//! Exact shape-pair tests for the kinds of objects a 2D game moves around:
//! sprites with per-pixel transparency, convex or concave polygons stored as
//! pre-rotated orientation views, line segments, and circles.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **primitives** - segment/segment, segment/circle, circle/circle math
//! 2. **polygon** - view tables, nearest-angle selection, winding-angle test
//! 3. **sprite** - frame descriptors and the opacity capability
//! 4. **collider** - shape instances and world-space bounding boxes
//! 5. **narrowphase** - the shape-pair test suite and pair dispatch
//! 6. **contact** - the 0..2 point contact result
//!
//! Every test is a pure function of immutable inputs: polygon view tables
//! and opacity maps are read-only after construction and may be shared
//! freely across worker threads. Broad-phase candidate generation (spatial
//! indexing) is a collaborator concern; this crate answers only "do these
//! two shapes intersect, and where".
//!
//! Malformed gameplay data never panics here: degenerate segments, circles,
//! and polygons, as well as sprites with missing transparency data, all
//! degrade to "no collision".

pub mod collider;
pub mod contact;
pub mod narrowphase;
pub mod polygon;
pub mod primitives;
pub mod sprite;

// Re-export commonly used types
pub use collider::{Aabb, Shape};
pub use contact::Contacts;
pub use narrowphase::{
    circle_polygon, circle_sprite, detect_collision, polygon_polygon, segment_polygon,
    segment_sprite, sprite_polygon, sprite_sprite,
};
pub use polygon::{rotate_vertices, Polygon, PolygonError, PolygonView};
pub use primitives::{
    circle_circle_contact, circle_overlap_area, circles_overlap, segment_circle, segment_segment,
    SegmentIntersection,
};
pub use sprite::{Frame, OpacityMap, Sprite};

// Re-export glam for convenience
pub use glam;

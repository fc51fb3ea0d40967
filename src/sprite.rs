//! Sprite frame descriptors and the per-pixel opacity capability consumed
//! from the asset layer.

use std::fmt;
use std::sync::Once;

use glam::Vec2;

/// Atlas frame coordinates (column, row) selecting one frame of a sprite
/// sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub col: u32,
    pub row: u32,
}

impl Frame {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Per-pixel transparency lookup provided by the rendering/asset layer.
///
/// `y` is a row index in atlas storage order. Frames are stored bottom-up,
/// so row 0 is the bottom row of the frame. Implementations must answer
/// `false` for out-of-range pixels; the collision code additionally clamps
/// its queries to the frame rectangle so a conforming map is never read out
/// of bounds.
pub trait OpacityMap {
    /// Pixel dimensions of a single frame.
    fn frame_size(&self) -> (u32, u32);

    /// Whether the pixel at `(x, y)` of the given frame is opaque.
    fn is_opaque(&self, frame: Frame, x: u32, y: u32) -> bool;

    /// Whether transparency data is present at all. A sprite without it is
    /// a configuration error and never collides.
    fn has_opacity_data(&self) -> bool {
        true
    }
}

static MISSING_OPACITY_WARNING: Once = Once::new();

/// A sprite frame instance referencing collaborator-owned transparency
/// data.
#[derive(Clone, Copy)]
pub struct Sprite<'a> {
    map: &'a dyn OpacityMap,
    frame: Frame,
}

impl<'a> Sprite<'a> {
    pub fn new(map: &'a dyn OpacityMap, frame: Frame) -> Self {
        Self { map, frame }
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Frame half-extents in pixels, for world-space bounds.
    pub fn half_extents(&self) -> Vec2 {
        let (w, h) = self.map.frame_size();
        Vec2::new(w as f32 * 0.5, h as f32 * 0.5)
    }

    /// Query opacity at frame-local coordinates with `y` growing upward.
    ///
    /// Atlas frames are stored bottom-up, matching the local axis, so the
    /// local row maps straight to the stored row. Out-of-range coordinates
    /// read as transparent. A sprite whose map reports missing transparency
    /// data also reads as fully transparent; that configuration error is
    /// logged once per process.
    pub fn is_opaque_at(&self, x: i32, y: i32) -> bool {
        if !self.map.has_opacity_data() {
            let frame = self.frame;
            MISSING_OPACITY_WARNING.call_once(|| {
                tracing::warn!(
                    frame_col = frame.col,
                    frame_row = frame.row,
                    "sprite has no transparency data; treating as fully transparent"
                );
            });
            return false;
        }
        let (w, h) = self.map.frame_size();
        if x < 0 || y < 0 || x >= w as i32 || y >= h as i32 {
            return false;
        }
        self.map.is_opaque(self.frame, x as u32, y as u32)
    }
}

impl fmt::Debug for Sprite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.map.frame_size();
        f.debug_struct("Sprite")
            .field("frame", &self.frame)
            .field("frame_size", &(w, h))
            .finish()
    }
}

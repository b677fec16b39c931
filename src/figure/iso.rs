//! Isometric blocks: projection, depth ordering and face geometry.
//!
//! World axes: `x` runs towards the mount's head, `y` towards the viewer and `z` up. A block is
//! an axis-aligned box given by its minimum corner and its extents.

use lyon::math::{point, Point};
use smallvec::SmallVec;

use crate::Color;

/// `cos(30°)`
const COS_30: f32 = 0.866_025_4;
/// `sin(30°)`
const SIN_30: f32 = 0.5;

/// Weight of the ground-plane distance in the depth key.
const DEPTH_PLANE_WEIGHT: f32 = 1.0;
/// Weight of the height in the depth key; small so it only separates stacked parts.
const DEPTH_HEIGHT_WEIGHT: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub label: &'static str,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    pub d: f32,
    pub h: f32,
    pub color: Color,
    /// Corner the depth key is taken from. Equals the origin unless the part animates.
    rest: (f32, f32, f32),
}

impl Block {
    pub fn new(
        label: &'static str,
        origin: (f32, f32, f32),
        extents: (f32, f32, f32),
        color: Color,
    ) -> Self {
        Self {
            label,
            x: origin.0,
            y: origin.1,
            z: origin.2,
            w: extents.0,
            d: extents.1,
            h: extents.2,
            color,
            rest: origin,
        }
    }

    /// Sorts the block by `rest` instead of its current origin, so an animated part keeps its
    /// place in the draw order while it moves.
    pub fn resting_at(mut self, rest: (f32, f32, f32)) -> Self {
        self.rest = rest;
        self
    }

    /// Larger keys are closer to the viewer and drawn later.
    pub fn depth_key(&self) -> f32 {
        let (x, y, z) = self.rest;
        (x + y) * DEPTH_PLANE_WEIGHT + z * DEPTH_HEIGHT_WEIGHT
    }

    /// The three visible faces, projected. Each face lists its corners in order.
    pub fn faces(&self) -> BlockFaces {
        let Block {
            x, y, z, w, d, h, ..
        } = *self;
        BlockFaces {
            top: [
                project(x, y, z + h),
                project(x + w, y, z + h),
                project(x + w, y + d, z + h),
                project(x, y + d, z + h),
            ],
            left: [
                project(x, y + d, z),
                project(x + w, y + d, z),
                project(x + w, y + d, z + h),
                project(x, y + d, z + h),
            ],
            right: [
                project(x + w, y, z),
                project(x + w, y + d, z),
                project(x + w, y + d, z + h),
                project(x + w, y, z + h),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockFaces {
    pub top: [Point; 4],
    /// The face looking towards `+y`.
    pub left: [Point; 4],
    /// The face looking towards `+x`.
    pub right: [Point; 4],
}

/// Per-frame list of blocks, in insertion order.
pub type PartList = SmallVec<[Block; 64]>;

pub fn project(x: f32, y: f32, z: f32) -> Point {
    point((x - y) * COS_30, (x + y) * SIN_30 - z)
}

/// Indices of `parts` in back-to-front order. Ties on the depth key keep insertion order, so
/// the order is total and identical for identical input.
pub fn draw_order(parts: &[Block]) -> SmallVec<[usize; 64]> {
    let mut order: SmallVec<[usize; 64]> = (0..parts.len()).collect();
    order.sort_by(|&a, &b| {
        parts[a]
            .depth_key()
            .total_cmp(&parts[b].depth_key())
            .then(a.cmp(&b))
    });
    order
}

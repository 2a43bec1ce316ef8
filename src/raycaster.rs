//! The ray casting core - marches one ray per screen column through the
//! occupancy grid and turns each hit into a projected wall span.

use crate::{Grid, Projection};

/// Prevents a division by zero for a hit right on top of the player.
const DEPTH_EPSILON: f64 = 1e-4;
/// Raw depth advances in steps of 2 world units - the classic speed vs
/// wall-edge precision trade-off.
const DEPTH_STEP: f64 = 2.0;

/// A first wall hit along one ray.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RayHit {
    /// Raw euclidean depth, before fisheye correction.
    pub depth: f64,
    /// Grid coordinates of the wall cell that was hit.
    pub cell: (i32, i32),
}

/// One projected wall column, ready to be drawn.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WallSpan {
    pub ray: usize,
    pub x: i32,
    pub width: i32,
    pub top: i32,
    pub height: i32,
    /// Fisheye-corrected depth - drives the distance shading.
    pub depth: f64,
    /// Set when this ray hit a different cell than the previous hit,
    /// marking a wall corner/face transition.
    pub edge: bool,
}

/// Set up per frame, for casting all rays from the same pose.
pub struct RayCaster<'a> {
    grid: &'a Grid,
    proj: &'a Projection,
    origin_x: f64,
    origin_y: f64,
    heading: f64,
}

impl<'a> RayCaster<'a> {
    pub fn new(grid: &'a Grid, proj: &'a Projection, origin: (f64, f64), heading: f64) -> Self {
        Self {
            grid,
            proj,
            origin_x: origin.0,
            origin_y: origin.1,
            heading,
        }
    }

    /// Cast every ray across the field of view and project the hits into
    /// wall spans, vertically centered on `mid_y`. Rays that leave the
    /// grid without a hit simply yield no span for their column.
    pub fn cast_all(&self, mid_y: i32) -> Vec<WallSpan> {
        let mut spans = Vec::with_capacity(self.proj.num_rays);
        let mut cur_angle = self.heading - self.proj.fov / 2.0;
        let mut prev_cell: Option<(i32, i32)> = None;

        for ray in 0..self.proj.num_rays {
            if let Some(hit) = self.cast_single(cur_angle) {
                let depth = correct_fisheye(hit.depth, self.heading, cur_angle);
                let height = projected_height(self.proj.proj_coeff, depth) as i32;
                let edge = prev_cell.is_some() && prev_cell != Some(hit.cell);
                prev_cell = Some(hit.cell);
                spans.push(WallSpan {
                    ray,
                    x: ((ray as f64) * self.proj.column_scale) as i32,
                    width: self.proj.column_scale.ceil() as i32,
                    top: mid_y - height / 2,
                    height,
                    depth,
                    edge,
                });
            }
            cur_angle += self.proj.delta_angle;
        }
        spans
    }

    /// March a single ray outwards, probing the grid every [`DEPTH_STEP`]
    /// world units, until the first wall cell or `max_depth`.
    pub fn cast_single(&self, angle: f64) -> Option<RayHit> {
        let (sin_a, cos_a) = angle.sin_cos();
        let mut depth = 1.0;
        while depth < self.proj.max_depth {
            let cx = ((self.origin_x + depth * cos_a) / self.proj.cell_size).floor() as i32;
            let cy = ((self.origin_y + depth * sin_a) / self.proj.cell_size).floor() as i32;
            if self.grid.is_wall(cx, cy) {
                return Some(RayHit { depth, cell: (cx, cy) });
            }
            depth += DEPTH_STEP;
        }
        None
    }
}

/// Remove the fisheye curvature: radial depth becomes the perpendicular
/// distance to the projection plane. Identity for the center ray.
#[inline]
pub fn correct_fisheye(raw_depth: f64, heading: f64, ray_angle: f64) -> f64 {
    raw_depth * (heading - ray_angle).cos()
}

/// Projected wall height - inversely proportional to the corrected depth.
#[inline]
pub fn projected_height(proj_coeff: f64, depth_corrected: f64) -> f64 {
    proj_coeff / (depth_corrected + DEPTH_EPSILON)
}

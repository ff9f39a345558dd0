/// Screen-space projector.
///
/// Maps world-space AABBs and points through a view-projection matrix
/// into a square integer grid that is independent of the real viewport
/// resolution. Clip-space `[-1, 1]` maps to `[0, grid_size]`, then every
/// coordinate is clamped to `[0, grid_size - 1]`.
///
/// There is no frustum test here: geometry outside the view degenerates
/// onto the grid border instead of being dropped. Non-finite values
/// (points on or behind the camera plane) saturate and clamp the same way.

use glam::{Mat4, Vec3};
use crate::config::SilhouetteConfig;
use crate::scene::AABB;

/// Screen-space footprint of an occluder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedRect {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
    /// Nearest normalized device depth among the 8 corners (not clamped)
    pub z: f32,
}

impl ProjectedRect {
    /// Inclusive containment of a grid point
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// Screen-space anchor of a displayer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: u16,
    pub y: u16,
    /// Normalized device depth (not clamped)
    pub z: f32,
}

/// Projects into the quantized grid for one camera.
#[derive(Debug, Clone, Copy)]
pub struct ScreenProjector {
    view_projection: Mat4,
    half_grid: f32,
    max_coord: i32,
}

impl ScreenProjector {
    pub fn new(view_projection: Mat4, config: &SilhouetteConfig) -> Self {
        Self {
            view_projection,
            half_grid: config.half_grid() as f32,
            max_coord: i32::from(config.max_coord()),
        }
    }

    pub fn view_projection(&self) -> &Mat4 {
        &self.view_projection
    }

    /// Project all 8 corners and reduce them to a clamped rectangle and nearest depth.
    pub fn project_aabb(&self, aabb: &AABB) -> ProjectedRect {
        let (mut x0, mut y0) = (i32::MAX, i32::MAX);
        let (mut x1, mut y1) = (i32::MIN, i32::MIN);
        let mut z0 = f32::MAX;

        for corner in aabb.corners() {
            let ndc = self.to_ndc(corner);
            let gx = self.quantize(ndc.x);
            let gy = self.quantize(ndc.y);
            x0 = x0.min(gx);
            y0 = y0.min(gy);
            x1 = x1.max(gx);
            y1 = y1.max(gy);
            // f32::min ignores NaN, so a degenerate corner never wins
            z0 = z0.min(ndc.z);
        }

        ProjectedRect {
            x0: self.clamp(x0),
            y0: self.clamp(y0),
            x1: self.clamp(x1),
            y1: self.clamp(y1),
            z: z0,
        }
    }

    /// Project a single world-space point.
    pub fn project_point(&self, point: Vec3) -> ProjectedPoint {
        let ndc = self.to_ndc(point);
        ProjectedPoint {
            x: self.clamp(self.quantize(ndc.x)),
            y: self.clamp(self.quantize(ndc.y)),
            z: ndc.z,
        }
    }

    /// Transform to clip space and perspective-divide.
    fn to_ndc(&self, point: Vec3) -> Vec3 {
        let clip = self.view_projection * point.extend(1.0);
        clip.truncate() / clip.w
    }

    /// `half + round(half * ndc)`, saturating (NaN becomes 0).
    fn quantize(&self, ndc: f32) -> i32 {
        (self.half_grid + (self.half_grid * ndc).round()) as i32
    }

    fn clamp(&self, coord: i32) -> u16 {
        coord.clamp(0, self.max_coord) as u16
    }
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;

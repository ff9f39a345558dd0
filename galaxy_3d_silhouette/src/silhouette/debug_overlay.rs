/// Debug overlay for the silhouette pass.
///
/// Draws what `compute_submissions` recorded: the world bounds of every
/// model occluder (3D outlines) and its screen-space rectangle in grid
/// coordinates. Purely observational.

use glam::{Mat4, Vec3};
use crate::camera::Camera;
use crate::error::Result;
use crate::scene::AABB;

/// RGBA color, components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Occluder rectangle that paired with at least one displayer
pub const COLOR_RENDERED: Color = Color::new(1.0, 1.0, 0.0, 1.0);
/// Occluder rectangle that paired with nothing
pub const COLOR_NOT_RENDERED: Color = Color::new(0.2, 0.2, 0.0, 1.0);
/// World bounds of shadow-casting models
pub const COLOR_BOUNDS: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Screen-space rectangle of one occluder, in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugRect {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
    pub color: Color,
}

impl DebugRect {
    /// Closed outline: 4 corners plus the first one again
    pub fn line_strip(&self) -> [[u16; 2]; 5] {
        [
            [self.x0, self.y0],
            [self.x1, self.y0],
            [self.x1, self.y1],
            [self.x0, self.y1],
            [self.x0, self.y0],
        ]
    }
}

/// World-space bounds of one occluder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugBounds {
    pub bounds: AABB,
    pub color: Color,
}

impl DebugBounds {
    /// The 12 box edges as a line list (24 vertices)
    pub fn line_list(&self) -> [Vec3; 24] {
        let corners = self.bounds.corners();
        let mut vertices = [Vec3::ZERO; 24];
        for (i, (a, b)) in AABB::EDGES.iter().enumerate() {
            vertices[i * 2] = corners[*a];
            vertices[i * 2 + 1] = corners[*b];
        }
        vertices
    }
}

/// Shader/draw service used by the overlay.
///
/// Implemented by the renderer backend. Depth writes and face culling
/// are expected to be off between `begin_overlay` and `end_overlay`.
pub trait DebugDraw {
    fn begin_overlay(&mut self) -> Result<()>;

    fn end_overlay(&mut self) -> Result<()>;

    /// Upload the transform uniform used by subsequent draws
    fn set_transform(&mut self, transform: &Mat4) -> Result<()>;

    /// Upload the color uniform used by subsequent draws
    fn set_color(&mut self, color: Color) -> Result<()>;

    /// Draw a connected line strip of 2D grid points (z = 0)
    fn draw_line_strip(&mut self, vertices: &[[u16; 2]]) -> Result<()>;

    /// Draw independent 3D segments (pairs of vertices)
    fn draw_lines(&mut self, vertices: &[Vec3]) -> Result<()>;
}

/// Orthographic projection mapping the `[0, grid_size]` square to clip space.
pub fn grid_projection(grid_size: u16) -> Mat4 {
    let size = f32::from(grid_size);
    Mat4::orthographic_rh_gl(0.0, size, 0.0, size, -1.0, 1000.0)
}

/// Draw recorded bounds with the camera transform, then rectangles with the grid projection.
///
/// `end_overlay` is always called once `begin_overlay` succeeded; the first
/// error wins.
pub fn render_overlays(
    camera: &Camera,
    grid_size: u16,
    bounds: &[DebugBounds],
    rects: &[DebugRect],
    draw: &mut dyn DebugDraw,
) -> Result<()> {
    draw.begin_overlay()?;
    let result = draw_recorded(camera, grid_size, bounds, rects, draw);
    let end = draw.end_overlay();
    result.and(end)
}

fn draw_recorded(
    camera: &Camera,
    grid_size: u16,
    bounds: &[DebugBounds],
    rects: &[DebugRect],
    draw: &mut dyn DebugDraw,
) -> Result<()> {
    if !bounds.is_empty() {
        draw.set_transform(&camera.view_projection_matrix())?;
        for b in bounds {
            draw.set_color(b.color)?;
            draw.draw_lines(&b.line_list())?;
        }
    }

    if !rects.is_empty() {
        draw.set_transform(&grid_projection(grid_size))?;
        for r in rects {
            draw.set_color(r.color)?;
            draw.draw_line_strip(&r.line_strip())?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "debug_overlay_tests.rs"]
mod tests;

/// Mock DebugDraw for unit tests (no GPU required)
///
/// Records every call so tests can check what the overlay would draw.

#[cfg(test)]
use glam::{Mat4, Vec3};
#[cfg(test)]
use crate::error::Result;
#[cfg(test)]
use crate::engine_bail;
#[cfg(test)]
use super::debug_overlay::{Color, DebugDraw};

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Begin,
    End,
    Transform(Mat4),
    Color(Color),
    LineStrip(Vec<[u16; 2]>),
    Lines(Vec<Vec3>),
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingDebugDraw {
    pub calls: Vec<DrawCall>,
    /// Fail the N-th draw call (0-based), to test error paths
    pub fail_draw_at: Option<usize>,
    draws: usize,
}

#[cfg(test)]
impl RecordingDebugDraw {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(draw_index: usize) -> Self {
        Self { fail_draw_at: Some(draw_index), ..Self::default() }
    }

    pub fn line_strips(&self) -> Vec<&Vec<[u16; 2]>> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::LineStrip(v) => Some(v),
            _ => None,
        }).collect()
    }

    pub fn line_lists(&self) -> Vec<&Vec<Vec3>> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Lines(v) => Some(v),
            _ => None,
        }).collect()
    }

    fn count_draw(&mut self) -> Result<()> {
        let index = self.draws;
        self.draws += 1;
        if self.fail_draw_at == Some(index) {
            engine_bail!("galaxy3d::mock", BackendError, "draw {} rejected", index);
        }
        Ok(())
    }
}

#[cfg(test)]
impl DebugDraw for RecordingDebugDraw {
    fn begin_overlay(&mut self) -> Result<()> {
        self.calls.push(DrawCall::Begin);
        Ok(())
    }

    fn end_overlay(&mut self) -> Result<()> {
        self.calls.push(DrawCall::End);
        Ok(())
    }

    fn set_transform(&mut self, transform: &Mat4) -> Result<()> {
        self.calls.push(DrawCall::Transform(*transform));
        Ok(())
    }

    fn set_color(&mut self, color: Color) -> Result<()> {
        self.calls.push(DrawCall::Color(color));
        Ok(())
    }

    fn draw_line_strip(&mut self, vertices: &[[u16; 2]]) -> Result<()> {
        self.count_draw()?;
        self.calls.push(DrawCall::LineStrip(vertices.to_vec()));
        Ok(())
    }

    fn draw_lines(&mut self, vertices: &[Vec3]) -> Result<()> {
        self.count_draw()?;
        self.calls.push(DrawCall::Lines(vertices.to_vec()));
        Ok(())
    }
}

/// Silhouette renderer configuration.
///
/// Descriptor-style settings handed to `SilhouetteRenderer::new()`.
/// The grid size is shared by the projector, the sweep, and the
/// debug overlay, so it is fixed for the renderer's lifetime.

use crate::error::Result;
use crate::engine_bail;

/// Side of the square quantization grid used when nothing else is configured.
pub const DEFAULT_GRID_SIZE: u16 = 4096;

/// Largest accepted grid side (keeps `grid_size - 1` and every grid coordinate in `u16`).
pub const MAX_GRID_SIZE: u16 = 32768;

/// Settings for a `SilhouetteRenderer`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SilhouetteConfig {
    /// Side of the screen-space grid; coordinates are clamped to `[0, grid_size - 1]`
    pub grid_size: u16,
    /// Record debug rectangles/bounds during `compute_submissions`
    pub debug_enabled: bool,
}

impl SilhouetteConfig {
    /// Default configuration: 4096 grid, debug off
    pub fn new() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            debug_enabled: false,
        }
    }

    pub fn with_grid_size(mut self, grid_size: u16) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// Half the grid side: clip-space 0 maps here
    pub fn half_grid(&self) -> i32 {
        i32::from(self.grid_size / 2)
    }

    /// Largest valid grid coordinate
    pub fn max_coord(&self) -> u16 {
        self.grid_size - 1
    }

    /// Check the configuration before it is used.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the grid size is odd, smaller than 2,
    /// or larger than `MAX_GRID_SIZE`.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < 2 || self.grid_size > MAX_GRID_SIZE {
            engine_bail!("galaxy3d::SilhouetteConfig", InvalidConfig,
                "grid_size {} out of range [2, {}]", self.grid_size, MAX_GRID_SIZE);
        }
        if self.grid_size % 2 != 0 {
            engine_bail!("galaxy3d::SilhouetteConfig", InvalidConfig,
                "grid_size {} must be even", self.grid_size);
        }
        Ok(())
    }
}

impl Default for SilhouetteConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

//! Silhouette pass
//!
//! Projection to the screen grid, sorted sweep events, the sweep itself,
//! and the per-frame renderer that ties them together.

mod projector;
mod entry;
mod active_set;
mod sweep;
mod debug_overlay;
mod silhouette_renderer;

#[cfg(test)]
mod mock_debug_draw;

pub use projector::{ScreenProjector, ProjectedRect, ProjectedPoint};
pub use entry::{Entry, EntryKind, build_entries, sort_entries};
pub use active_set::ActiveSet;
pub use sweep::{sweep, Occluder, Displayer, SweepStats};
pub use debug_overlay::{
    Color, DebugRect, DebugBounds, DebugDraw, grid_projection, render_overlays,
    COLOR_RENDERED, COLOR_NOT_RENDERED, COLOR_BOUNDS,
};
pub use silhouette_renderer::{SilhouetteRenderer, SilhouetteStats};

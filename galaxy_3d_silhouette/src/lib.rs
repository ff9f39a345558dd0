/*!
# Galaxy 3D Silhouette

Screen-space shadow pairing for the Galaxy 3D engine.

Each frame the caller registers shadow occluders (terrain patches and
models) and shadow displayers (models), then asks which of them actually
matter: an occluder is kept when at least one displayer lies inside its
projected screen rectangle at a depth greater than or equal to the
occluder's nearest depth, and a displayer is kept when it lies behind at
least one occluder. Terrain patches are always kept.

## Architecture

- **SilhouetteRenderer**: per-frame submission lists, pairing, and hand-off
- **ScreenProjector**: world bounds/points to integer grid coordinates
- **sweep**: sorted-event sweep line with an active occluder set
- **SceneCollector**: caller-side sink for the visible handles
- **DebugDraw**: optional overlay of the projected rectangles and bounds

Models are referenced by `ModelKey` handles resolved through a
`ModelSource`; the renderer never owns scene data.
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod camera;
pub mod scene;
pub mod silhouette;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::{SilhouetteConfig, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};

    // Per-frame pairing entry point
    pub use crate::silhouette::SilhouetteRenderer;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Silhouette sub-module
    pub mod silhouette {
        pub use crate::silhouette::*;
    }
}

// Re-export math library at crate root
pub use glam;

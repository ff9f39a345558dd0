/// Silhouette renderer: per-frame occluder/displayer pairing.
///
/// Frame contract (single thread, strict order):
///
/// 1. `add_patch_occluder` / `add_model_occluder` / `add_displayer`, any number of times
/// 2. `compute_submissions` once
/// 3. `render_submit_occluders` / `render_submit_displayers` (and optionally
///    `render_debug_overlays`)
/// 4. `end_frame` once
///
/// Only handles are stored. Nothing survives `end_frame` except the
/// configuration.

use crate::camera::Camera;
use crate::config::SilhouetteConfig;
use crate::error::Result;
use crate::scene::{ModelKey, ModelSource, PatchKey, SceneCollector};
use crate::{engine_bail, engine_trace, engine_warn};
use super::debug_overlay::{
    render_overlays, DebugBounds, DebugDraw, DebugRect,
    COLOR_BOUNDS, COLOR_NOT_RENDERED, COLOR_RENDERED,
};
use super::entry::build_entries;
use super::projector::ScreenProjector;
use super::sweep::{sweep, Displayer, Occluder, SweepStats};

const SOURCE: &str = "galaxy3d::SilhouetteRenderer";

/// Counters for the last `compute_submissions`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SilhouetteStats {
    pub patch_occluders: usize,
    pub model_occluders: usize,
    pub displayers: usize,
    /// Submitted handles that no longer resolved to a model
    pub stale_handles: usize,
    pub visible_occluders: usize,
    pub visible_displayers: usize,
    pub sweep: SweepStats,
}

pub struct SilhouetteRenderer {
    config: SilhouetteConfig,

    submitted_patch_occluders: Vec<PatchKey>,
    submitted_model_occluders: Vec<ModelKey>,
    submitted_model_displayers: Vec<ModelKey>,

    visible_patch_occluders: Vec<PatchKey>,
    visible_model_occluders: Vec<ModelKey>,
    visible_model_displayers: Vec<ModelKey>,

    debug_bounds: Vec<DebugBounds>,
    debug_rects: Vec<DebugRect>,

    stats: SilhouetteStats,
    /// `compute_submissions` ran since the last `end_frame`
    computed: bool,
}

impl SilhouetteRenderer {
    /// Create a renderer with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration is rejected.
    pub fn new(config: SilhouetteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            submitted_patch_occluders: Vec::new(),
            submitted_model_occluders: Vec::new(),
            submitted_model_displayers: Vec::new(),
            visible_patch_occluders: Vec::new(),
            visible_model_occluders: Vec::new(),
            visible_model_displayers: Vec::new(),
            debug_bounds: Vec::new(),
            debug_rects: Vec::new(),
            stats: SilhouetteStats::default(),
            computed: false,
        })
    }

    pub fn config(&self) -> &SilhouetteConfig {
        &self.config
    }

    pub fn debug_enabled(&self) -> bool {
        self.config.debug_enabled
    }

    /// Toggle debug recording. Takes effect at the next `compute_submissions`.
    pub fn set_debug_enabled(&mut self, enabled: bool) {
        self.config.debug_enabled = enabled;
    }

    // ===== SUBMISSION =====

    /// Register a terrain patch. Patches skip the pairing test.
    pub fn add_patch_occluder(&mut self, patch: PatchKey) {
        self.warn_if_late("patch occluder");
        self.submitted_patch_occluders.push(patch);
    }

    /// Register a model that casts shadows.
    pub fn add_model_occluder(&mut self, model: ModelKey) {
        self.warn_if_late("model occluder");
        self.submitted_model_occluders.push(model);
    }

    /// Register a model that receives shadows.
    pub fn add_displayer(&mut self, model: ModelKey) {
        self.warn_if_late("displayer");
        self.submitted_model_displayers.push(model);
    }

    fn warn_if_late(&self, kind: &str) {
        if self.computed {
            engine_warn!(SOURCE,
                "{} submitted after compute_submissions; it is not part of this frame", kind);
        }
    }

    // ===== COMPUTATION =====

    /// Project every submission, run the sweep, and rebuild the visible sets.
    ///
    /// Handles that no longer resolve through `models` are skipped.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the sweep bookkeeping breaks, and
    /// `InvalidState` if a list is too large to index with `u32`. The
    /// visible sets are left empty in both cases.
    pub fn compute_submissions(&mut self, camera: &Camera, models: &dyn ModelSource) -> Result<()> {
        self.debug_bounds.clear();
        self.debug_rects.clear();
        self.visible_patch_occluders.clear();
        self.visible_model_occluders.clear();
        self.visible_model_displayers.clear();
        self.stats = SilhouetteStats::default();
        self.computed = true;

        if self.submitted_model_occluders.len() > u32::MAX as usize
            || self.submitted_model_displayers.len() > u32::MAX as usize
        {
            engine_bail!(SOURCE, InvalidState,
                "too many submissions ({} occluders, {} displayers)",
                self.submitted_model_occluders.len(), self.submitted_model_displayers.len());
        }

        let projector = ScreenProjector::new(camera.view_projection_matrix(), &self.config);
        let mut stale_handles = 0;

        let mut occluders = Vec::with_capacity(self.submitted_model_occluders.len());
        for &model in &self.submitted_model_occluders {
            let Some(bounds) = models.world_bounds(model) else {
                stale_handles += 1;
                continue;
            };
            if self.config.debug_enabled {
                self.debug_bounds.push(DebugBounds { bounds, color: COLOR_BOUNDS });
            }
            occluders.push(Occluder::new(model, projector.project_aabb(&bounds)));
        }

        let mut displayers = Vec::with_capacity(self.submitted_model_displayers.len());
        for &model in &self.submitted_model_displayers {
            let Some(position) = models.translation(model) else {
                stale_handles += 1;
                continue;
            };
            displayers.push(Displayer::new(model, projector.project_point(position)));
        }

        if stale_handles > 0 {
            engine_warn!(SOURCE, "{} stale model handles skipped", stale_handles);
        }

        let mut entries = build_entries(&occluders, &displayers);
        let sweep_stats = sweep(&mut entries, &mut occluders, &mut displayers)?;

        if self.config.debug_enabled {
            self.debug_rects.extend(occluders.iter().map(|o| DebugRect {
                x0: o.rect.x0,
                y0: o.rect.y0,
                x1: o.rect.x1,
                y1: o.rect.y1,
                color: if o.rendered { COLOR_RENDERED } else { COLOR_NOT_RENDERED },
            }));
        }

        // Terrain is always considered shadow-relevant
        self.visible_patch_occluders.extend_from_slice(&self.submitted_patch_occluders);
        self.visible_model_occluders.extend(
            occluders.iter().filter(|o| o.rendered).map(|o| o.model),
        );
        self.visible_model_displayers.extend(
            displayers.iter().filter(|d| d.rendered).map(|d| d.model),
        );

        self.stats = SilhouetteStats {
            patch_occluders: self.submitted_patch_occluders.len(),
            model_occluders: occluders.len(),
            displayers: displayers.len(),
            stale_handles,
            visible_occluders: self.visible_model_occluders.len(),
            visible_displayers: self.visible_model_displayers.len(),
            sweep: sweep_stats,
        };

        engine_trace!(SOURCE,
            "{} occluders ({} visible), {} displayers ({} visible), {} pair tests, peak active {}",
            self.stats.model_occluders, self.stats.visible_occluders,
            self.stats.displayers, self.stats.visible_displayers,
            sweep_stats.pair_tests, sweep_stats.max_active);

        Ok(())
    }

    // ===== CONSUMPTION =====

    /// Push visible patches (`submit`) then visible model occluders (`submit_non_recursive`).
    pub fn render_submit_occluders(&self, collector: &mut dyn SceneCollector) {
        for &patch in &self.visible_patch_occluders {
            collector.submit(patch);
        }
        for &model in &self.visible_model_occluders {
            collector.submit_non_recursive(model);
        }
    }

    /// Push visible displayers (`submit_non_recursive`).
    pub fn render_submit_displayers(&self, collector: &mut dyn SceneCollector) {
        for &model in &self.visible_model_displayers {
            collector.submit_non_recursive(model);
        }
    }

    /// Draw the recorded debug bounds and rectangles. No-op when debug is off.
    pub fn render_debug_overlays(&self, camera: &Camera, draw: &mut dyn DebugDraw) -> Result<()> {
        if !self.config.debug_enabled {
            return Ok(());
        }
        render_overlays(camera, self.config.grid_size, &self.debug_bounds, &self.debug_rects, draw)
    }

    /// Drop every handle submitted or computed this frame.
    pub fn end_frame(&mut self) {
        self.submitted_patch_occluders.clear();
        self.submitted_model_occluders.clear();
        self.submitted_model_displayers.clear();
        self.visible_patch_occluders.clear();
        self.visible_model_occluders.clear();
        self.visible_model_displayers.clear();
        self.debug_bounds.clear();
        self.debug_rects.clear();
        self.computed = false;
    }

    // ===== ACCESSORS =====

    pub fn submitted_patch_occluders(&self) -> &[PatchKey] {
        &self.submitted_patch_occluders
    }

    pub fn submitted_model_occluders(&self) -> &[ModelKey] {
        &self.submitted_model_occluders
    }

    pub fn submitted_displayers(&self) -> &[ModelKey] {
        &self.submitted_model_displayers
    }

    pub fn visible_patch_occluders(&self) -> &[PatchKey] {
        &self.visible_patch_occluders
    }

    pub fn visible_model_occluders(&self) -> &[ModelKey] {
        &self.visible_model_occluders
    }

    pub fn visible_displayers(&self) -> &[ModelKey] {
        &self.visible_model_displayers
    }

    pub fn debug_rects(&self) -> &[DebugRect] {
        &self.debug_rects
    }

    pub fn debug_bounds(&self) -> &[DebugBounds] {
        &self.debug_bounds
    }

    pub fn stats(&self) -> &SilhouetteStats {
        &self.stats
    }
}

#[cfg(test)]
#[path = "silhouette_renderer_tests.rs"]
mod tests;

/// Sweep-line pairing of occluders and displayers.
///
/// Events are sorted by x and scanned once. The active set tracks the
/// occluders whose x-interval contains the sweep position, so a point
/// event only needs a vertical and a depth test against them.

use crate::error::Result;
use crate::engine_bail;
use crate::scene::ModelKey;
use super::active_set::ActiveSet;
use super::entry::{sort_entries, Entry, EntryKind};
use super::projector::{ProjectedPoint, ProjectedRect};

/// A model occluder projected for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occluder {
    pub model: ModelKey,
    pub rect: ProjectedRect,
    /// Set once any displayer pairs with this occluder
    pub rendered: bool,
}

impl Occluder {
    pub fn new(model: ModelKey, rect: ProjectedRect) -> Self {
        Self { model, rect, rendered: false }
    }

    /// Vertical coverage and depth order; x coverage comes from the active set.
    ///
    /// The occluder must be at least as close to the camera as the displayer.
    pub fn can_shadow(&self, displayer: &Displayer) -> bool {
        displayer.point.y >= self.rect.y0
            && displayer.point.y <= self.rect.y1
            && displayer.point.z >= self.rect.z
    }
}

/// A model displayer projected for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displayer {
    pub model: ModelKey,
    pub point: ProjectedPoint,
    /// Set once any occluder pairs with this displayer
    pub rendered: bool,
}

impl Displayer {
    pub fn new(model: ModelKey, point: ProjectedPoint) -> Self {
        Self { model, point, rendered: false }
    }
}

/// Counters gathered during one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Number of events processed
    pub events: usize,
    /// Occluder/displayer tests performed at point events
    pub pair_tests: usize,
    /// Tests that passed
    pub pairs: usize,
    /// Largest active set seen
    pub max_active: usize,
}

/// Sort `entries` and run the sweep, setting `rendered` on every paired
/// occluder and displayer. Flags only ever go from false to true.
///
/// # Errors
///
/// Returns `InvariantViolation` if an event refers to an occluder or
/// displayer index out of range, closes an occluder that is not active,
/// or leaves occluders active at the end.
pub fn sweep(
    entries: &mut [Entry],
    occluders: &mut [Occluder],
    displayers: &mut [Displayer],
) -> Result<SweepStats> {
    sort_entries(entries);

    let mut stats = SweepStats { events: entries.len(), ..SweepStats::default() };
    let mut active = ActiveSet::new();

    for entry in entries.iter() {
        match entry.kind {
            EntryKind::RectIn => {
                if entry.id as usize >= occluders.len() {
                    engine_bail!("galaxy3d::Sweep", InvariantViolation,
                        "occluder event id {} out of range ({} occluders)", entry.id, occluders.len());
                }
                active.add(entry.id);
                stats.max_active = stats.max_active.max(active.len());
            }
            EntryKind::RectOut => active.remove(entry.id)?,
            EntryKind::Point => {
                let count = displayers.len();
                let Some(displayer) = displayers.get_mut(entry.id as usize) else {
                    engine_bail!("galaxy3d::Sweep", InvariantViolation,
                        "displayer event id {} out of range ({} displayers)", entry.id, count);
                };
                for &id in active.ids() {
                    // Active ids were range-checked when they opened
                    let Some(occluder) = occluders.get_mut(id as usize) else {
                        engine_bail!("galaxy3d::Sweep", InvariantViolation,
                            "active occluder id {} out of range", id);
                    };
                    stats.pair_tests += 1;
                    if occluder.can_shadow(displayer) {
                        displayer.rendered = true;
                        occluder.rendered = true;
                        stats.pairs += 1;
                    }
                }
            }
        }
    }

    if !active.is_empty() {
        engine_bail!("galaxy3d::Sweep", InvariantViolation,
            "{} occluders still active after the sweep", active.len());
    }

    Ok(stats)
}

#[cfg(test)]
#[path = "sweep_tests.rs"]
mod tests;

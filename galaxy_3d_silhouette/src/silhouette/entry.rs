/// Sweep events.
///
/// Each occluder opens at its left edge and closes at its right edge;
/// each displayer is a single point event. Events are plain values and
/// are thrown away once the sweep is over.

use rdst::{RadixKey, RadixSort};
use super::sweep::{Displayer, Occluder};

/// Event kind. The declaration order is the tie-break at equal `x`:
/// an occluder opening at `x` is active for a point at `x`, and an
/// occluder closing at `x` is still active for it (closed intervals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    RectIn = 0,
    Point = 1,
    RectOut = 2,
}

/// A single sweep event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Sweep coordinate
    pub x: u16,
    /// Occluder index for RectIn/RectOut, displayer index for Point
    pub id: u32,
    pub kind: EntryKind,
}

impl Entry {
    pub fn rect_in(x: u16, id: u32) -> Self {
        Self { x, id, kind: EntryKind::RectIn }
    }

    pub fn rect_out(x: u16, id: u32) -> Self {
        Self { x, id, kind: EntryKind::RectOut }
    }

    pub fn point(x: u16, id: u32) -> Self {
        Self { x, id, kind: EntryKind::Point }
    }

    /// Packed total order: x, then kind, then id.
    pub fn sort_key(&self) -> u64 {
        (u64::from(self.x) << 40) | ((self.kind as u64) << 32) | u64::from(self.id)
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl RadixKey for Entry {
    // x: 2 bytes, kind: 1 byte, id: 4 bytes
    const LEVELS: usize = 7;

    #[inline]
    fn get_level(&self, level: usize) -> u8 {
        (self.sort_key() >> (level * 8)) as u8
    }
}

/// Emit two events per occluder and one per displayer, in list order.
///
/// Indices must fit in `u32`; the caller checks list sizes first.
pub fn build_entries(occluders: &[Occluder], displayers: &[Displayer]) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(occluders.len() * 2 + displayers.len());

    for (i, occluder) in occluders.iter().enumerate() {
        let id = i as u32;
        entries.push(Entry::rect_in(occluder.rect.x0, id));
        entries.push(Entry::rect_out(occluder.rect.x1, id));
    }

    for (j, displayer) in displayers.iter().enumerate() {
        entries.push(Entry::point(displayer.point.x, j as u32));
    }

    entries
}

/// Sort ascending by the packed key (radix sort on the calling thread,
/// deterministic for identical input).
pub fn sort_entries(entries: &mut [Entry]) {
    entries.radix_sort_unstable();
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;

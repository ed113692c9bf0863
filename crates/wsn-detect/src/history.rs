//! Append-only per-thief detection log.

use crate::DetectionSet;

/// One [`DetectionSet`] per processed tick, oldest first.
///
/// There is no way to remove or reorder entries; the freeze decision is
/// always recomputed from the full log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectionHistory {
    entries: Vec<DetectionSet>,
}

impl DetectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the detections of the latest tick.
    pub fn push(&mut self, set: DetectionSet) {
        self.entries.push(set);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DetectionSet> {
        self.entries.get(index)
    }

    pub fn last(&self) -> Option<&DetectionSet> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DetectionSet> {
        self.entries.iter()
    }

    /// Indices of ticks in which at least `k` sensors saw the thief.
    pub fn qualifying_ticks(&self, k: usize) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.len() >= k)
            .map(|(i, _)| i)
    }

    pub fn qualifying_count(&self, k: usize) -> usize {
        self.entries.iter().filter(|s| s.len() >= k).count()
    }

    /// Set sizes of the qualifying ticks, oldest first.  This is what status
    /// displays show as `K=3+4+3`.
    pub fn qualifying_sizes(&self, k: usize) -> Vec<usize> {
        self.entries
            .iter()
            .map(DetectionSet::len)
            .filter(|&n| n >= k)
            .collect()
    }
}

impl FromIterator<DetectionSet> for DetectionHistory {
    fn from_iter<I: IntoIterator<Item = DetectionSet>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

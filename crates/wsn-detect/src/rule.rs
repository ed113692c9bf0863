//! The `FreezeRule` trait and the default counting implementation.

use wsn_core::SimConfig;

use crate::{DetectError, DetectResult, DetectionHistory, DetectionSet};

// ── Thresholds ────────────────────────────────────────────────────────────────

/// The two constants of the freeze rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    /// Minimum sensors in one tick for the tick to qualify (`K_DETECTION`).
    pub k_detection: usize,
    /// Qualifying ticks needed to freeze (`C_GROUPS`).
    pub c_groups: usize,
}

impl Thresholds {
    pub fn new(k_detection: usize, c_groups: usize) -> DetectResult<Self> {
        if k_detection == 0 {
            return Err(DetectError::ZeroDetectionThreshold);
        }
        if c_groups == 0 {
            return Err(DetectError::ZeroGroupThreshold);
        }
        Ok(Self { k_detection, c_groups })
    }

    pub fn from_config(config: &SimConfig) -> DetectResult<Self> {
        Self::new(config.k_detection, config.c_groups)
    }

    /// `true` if `set` is large enough to count as one group.
    #[inline]
    pub fn qualifies(&self, set: &DetectionSet) -> bool {
        set.len() >= self.k_detection
    }
}

// ── FreezeRule trait ──────────────────────────────────────────────────────────

/// Decides from a thief's full detection history whether it is frozen.
///
/// Implementations must be pure: the same history and thresholds always give
/// the same answer, and nothing is cached between calls.
pub trait FreezeRule: Send + Sync {
    /// Find `c_groups` distinct qualifying tick indices.
    ///
    /// Returns the indices of one valid assignment, or `None` if the history
    /// does not (yet) support a freeze.  Histories shorter than `c_groups`
    /// always return `None`.
    fn assign(&self, history: &DetectionHistory, thresholds: Thresholds) -> Option<Vec<usize>>;

    /// `true` if the thief must be frozen.
    fn evaluate(&self, history: &DetectionHistory, thresholds: Thresholds) -> bool {
        self.assign(history, thresholds).is_some()
    }
}

// ── CountingRule ──────────────────────────────────────────────────────────────

/// Counts qualifying ticks in one pass.  The default rule.
#[derive(Copy, Clone, Debug, Default)]
pub struct CountingRule;

impl FreezeRule for CountingRule {
    fn assign(&self, history: &DetectionHistory, thresholds: Thresholds) -> Option<Vec<usize>> {
        if history.len() < thresholds.c_groups {
            return None;
        }
        let picked: Vec<usize> = history
            .qualifying_ticks(thresholds.k_detection)
            .take(thresholds.c_groups)
            .collect();
        (picked.len() == thresholds.c_groups).then_some(picked)
    }

    fn evaluate(&self, history: &DetectionHistory, thresholds: Thresholds) -> bool {
        history.len() >= thresholds.c_groups
            && history.qualifying_count(thresholds.k_detection) >= thresholds.c_groups
    }
}

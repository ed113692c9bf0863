//! The set of sensors that saw a thief during one tick.

use std::collections::BTreeSet;
use std::fmt;

use wsn_core::SensorId;

/// Sensors that detected a thief in a single tick, in ascending id order.
///
/// May be empty: undetected ticks are still recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectionSet(BTreeSet<SensorId>);

impl DetectionSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn insert(&mut self, sensor: SensorId) -> bool {
        self.0.insert(sensor)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, sensor: SensorId) -> bool {
        self.0.contains(&sensor)
    }

    pub fn iter(&self) -> impl Iterator<Item = SensorId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<SensorId> for DetectionSet {
    fn from_iter<I: IntoIterator<Item = SensorId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DetectionSet {
    type Item = &'a SensorId;
    type IntoIter = std::collections::btree_set::Iter<'a, SensorId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for DetectionSet {
    /// `[0, 3, 4]` — raw sensor indices.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, s) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", s.0)?;
        }
        f.write_str("]")
    }
}

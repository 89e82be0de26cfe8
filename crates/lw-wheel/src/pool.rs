//! Wheel entries, pools and segment geometry

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};
use crate::palette::ColorToken;

/// Degrees in a full wheel turn
pub const FULL_TURN: f64 = 360.0;

/// One drawable number on the wheel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelEntry {
    /// Drawable value (unique within a pool)
    pub value: i64,
    /// Segment fill
    pub color: ColorToken,
    /// Label color, contrasting with `color`
    pub text_color: ColorToken,
}

/// Ordered set of remaining entries
///
/// Order defines the segment layout: entry `i` occupies
/// `[i * 360/N, (i + 1) * 360/N)` degrees clockwise from the pointer's zero
/// reference. Pools are replaced wholesale, never edited in place, since
/// colors depend on position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pool {
    entries: Vec<WheelEntry>,
}

impl Pool {
    pub(crate) fn from_entries(entries: Vec<WheelEntry>) -> Self {
        Self { entries }
    }

    /// Empty pool
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WheelEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&WheelEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WheelEntry> {
        self.entries.iter()
    }

    /// Values in display order (the persisted form)
    pub fn values(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.index_of(value).is_some()
    }

    /// Position of the first entry holding `value`
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.entries.iter().position(|e| e.value == value)
    }

    /// Fails on the first value that appears twice
    pub fn ensure_unique(&self) -> WheelResult<()> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(entry.value) {
                return Err(WheelError::DuplicateValue(entry.value));
            }
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // GEOMETRY
    // ═══════════════════════════════════════════════════════════════════════

    /// Angular width of one segment (`None` for an empty pool)
    pub fn segment_angle(&self) -> Option<f64> {
        if self.entries.is_empty() {
            None
        } else {
            Some(FULL_TURN / self.entries.len() as f64)
        }
    }

    /// `[start, end)` in degrees of the segment at `index`
    pub fn segment_span(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.entries.len() {
            return None;
        }
        let angle = self.segment_angle()?;
        Some((index as f64 * angle, (index + 1) as f64 * angle))
    }

    /// Angular center of the segment at `index`
    pub fn prize_center(&self, index: usize) -> Option<f64> {
        if index >= self.entries.len() {
            return None;
        }
        let angle = self.segment_angle()?;
        Some(index as f64 * angle + angle / 2.0)
    }

    /// Index of the segment under the fixed pointer when the wheel sits at
    /// absolute `rotation`
    ///
    /// A segment angle `a` is under the pointer when `(a + rotation) mod 360`
    /// is zero, so the pointer reads the pool at `-rotation mod 360`.
    pub fn segment_under_pointer(&self, rotation: f64) -> Option<usize> {
        let angle = self.segment_angle()?;
        let at = (-rotation).rem_euclid(FULL_TURN);
        let index = (at / angle).floor() as usize;
        Some(index.min(self.entries.len() - 1))
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a WheelEntry;
    type IntoIter = std::slice::Iter<'a, WheelEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

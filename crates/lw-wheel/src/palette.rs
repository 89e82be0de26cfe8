//! Segment colors
//!
//! Colors alternate by positional index: even segments take the primary fill
//! with secondary text, odd segments the reverse. A segment's color never
//! depends on its value, so re-painting the same order always gives the same
//! pairing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pool::{Pool, WheelEntry};

/// Red segment fill
pub const RED: &str = "#ef4444";
/// Cream segment fill
pub const CREAM: &str = "#FFFDD0";

/// A color token (CSS hex string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorToken {
    fn from(hex: &str) -> Self {
        Self::new(hex)
    }
}

/// Two-color alternating palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Fill of even segments, text of odd segments
    pub primary: ColorToken,
    /// Fill of odd segments, text of even segments
    pub secondary: ColorToken,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(RED, CREAM)
    }
}

impl Palette {
    pub fn new(primary: impl Into<ColorToken>, secondary: impl Into<ColorToken>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// `(color, text_color)` for the segment at `index`
    pub fn colors_for(&self, index: usize) -> (ColorToken, ColorToken) {
        if index % 2 == 0 {
            (self.primary.clone(), self.secondary.clone())
        } else {
            (self.secondary.clone(), self.primary.clone())
        }
    }

    /// Build a colored entry for `value` at position `index`
    pub fn entry(&self, index: usize, value: i64) -> WheelEntry {
        let (color, text_color) = self.colors_for(index);
        WheelEntry {
            value,
            color,
            text_color,
        }
    }

    /// Build a pool from ordered values, coloring each by its position
    pub fn paint<I>(&self, values: I) -> Pool
    where
        I: IntoIterator<Item = i64>,
    {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| self.entry(index, value))
            .collect();
        Pool::from_entries(entries)
    }
}

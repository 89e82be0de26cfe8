//! Pool generation

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};
use crate::palette::Palette;
use crate::pool::Pool;

/// First value of the default pool
pub const DEFAULT_START: i64 = 1;
/// Last value of the default pool (inclusive)
pub const DEFAULT_END: i64 = 33;
/// Largest range a generated pool may span
pub const MAX_POOL_SIZE: usize = 1000;

/// Check that `start..=end` is non-empty and at most [`MAX_POOL_SIZE`] long
pub fn check_range(start: i64, end: i64) -> WheelResult<()> {
    if start > end {
        return Err(WheelError::InvalidRange { start, end });
    }
    let len = i128::from(end) - i128::from(start) + 1;
    if len > MAX_POOL_SIZE as i128 {
        return Err(WheelError::RangeTooLarge {
            start,
            end,
            max: MAX_POOL_SIZE,
        });
    }
    Ok(())
}

/// Default range settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// First value of the default pool
    pub default_start: i64,
    /// Last value of the default pool (inclusive)
    pub default_end: i64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            default_start: DEFAULT_START,
            default_end: DEFAULT_END,
        }
    }
}

/// Builds colored pools from value lists or the default range
#[derive(Debug, Clone, Default)]
pub struct PoolGenerator {
    palette: Palette,
    range: PoolConfig,
}

impl PoolGenerator {
    pub fn new(palette: Palette, range: PoolConfig) -> Self {
        Self { palette, range }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Build a pool from `initial_values` in the given order, or the default
    /// range when the list is empty
    ///
    /// Uniqueness is not checked here; see [`Pool::ensure_unique`].
    pub fn generate(&self, initial_values: &[i64]) -> Pool {
        if initial_values.is_empty() {
            self.default_pool()
        } else {
            self.palette.paint(initial_values.iter().copied())
        }
    }

    /// The configured default range, in ascending order
    ///
    /// The range is trusted; [`crate::WheelConfig::validate`] bounds it.
    pub fn default_pool(&self) -> Pool {
        let PoolConfig {
            default_start,
            default_end,
        } = self.range;
        self.palette.paint(default_start..=default_end)
    }

    /// Inclusive range pool
    pub fn range(&self, start: i64, end: i64) -> WheelResult<Pool> {
        check_range(start, end)?;
        Ok(self.palette.paint(start..=end))
    }
}

/// Build a pool with the default palette; an empty list yields 1..=33
pub fn generate_numbers(initial_values: &[i64]) -> Pool {
    PoolGenerator::default().generate(initial_values)
}

/// Inclusive range pool with the default palette
pub fn generate_range(start: i64, end: i64) -> WheelResult<Pool> {
    PoolGenerator::default().range(start, end)
}

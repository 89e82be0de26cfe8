//! Rotation planning
//!
//! Computes the absolute wheel rotation that brings a chosen segment's center
//! under the fixed pointer, after a number of purely decorative full turns.
//!
//! ```text
//! prize_center  = i * a + a / 2                 (a = 360 / N)
//! tentative     = current + 360 * spin_count
//! alignment     = (prize_center + tentative) mod 360
//! rotation      = tentative - alignment         => (prize_center + rotation) mod 360 == 0
//! ```
//!
//! Rotation is cumulative and never wraps, so each spin continues forward
//! from wherever the previous one stopped.

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};
use crate::pool::{FULL_TURN, Pool};

/// Normalized charge intensity in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Force(f64);

impl Force {
    /// Full charge
    pub const FULL: Force = Force(1.0);

    /// Clamp a raw reading into `[0, 1]`; NaN reads as no charge
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            Self(0.0)
        } else {
            Self(raw.clamp(0.0, 1.0))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Force {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<f64> for Force {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

/// Spin tuning: extra turns and animation length as functions of force
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinProfile {
    /// Full turns at the lowest effective force
    pub min_spins: f64,
    /// Full turns at full force
    pub max_spins: f64,
    /// Animation length at the lowest effective force (seconds)
    pub min_duration_secs: f64,
    /// Animation length at full force (seconds)
    pub max_duration_secs: f64,
    /// Floor applied to force so every spin is visible
    pub min_force: f64,
}

impl SpinProfile {
    /// Force-aware profile: 2..15 turns over 2.5..10 s
    pub fn charged() -> Self {
        Self {
            min_spins: 2.0,
            max_spins: 15.0,
            min_duration_secs: 2.5,
            max_duration_secs: 10.0,
            min_force: 0.1,
        }
    }

    /// Fixed profile: always 5 turns over 4 s, force has no effect
    pub fn classic() -> Self {
        Self {
            min_spins: 5.0,
            max_spins: 5.0,
            min_duration_secs: 4.0,
            max_duration_secs: 4.0,
            min_force: 0.1,
        }
    }

    /// Force after applying the visibility floor
    pub fn effective_force(&self, force: Force) -> f64 {
        force.value().clamp(self.min_force, 1.0)
    }

    /// Decorative full turns for `force`
    pub fn spin_count(&self, force: Force) -> f64 {
        let f = self.effective_force(force);
        self.min_spins + (self.max_spins - self.min_spins) * f
    }

    /// Animation length for `force`
    pub fn duration_secs(&self, force: Force) -> f64 {
        let f = self.effective_force(force);
        self.min_duration_secs + (self.max_duration_secs - self.min_duration_secs) * f
    }

    /// Plan the spin that lands `selected_value` under the pointer
    ///
    /// `force` of `None` is full force. Callers skip planning entirely when
    /// one entry remains and reveal it directly.
    pub fn plan(
        &self,
        selected_value: i64,
        pool: &Pool,
        current_rotation: f64,
        force: Option<f64>,
    ) -> WheelResult<RotationPlan> {
        let target_index = pool
            .index_of(selected_value)
            .ok_or(WheelError::ValueNotFound(selected_value))?;
        let prize_center = pool.prize_center(target_index).ok_or(WheelError::EmptyPool)?;

        let force = force.map(Force::new).unwrap_or_default();
        let spin_count = self.spin_count(force);

        let tentative = current_rotation + FULL_TURN * spin_count;
        let alignment = (prize_center + tentative).rem_euclid(FULL_TURN);
        let rotation = tentative - alignment;

        log::debug!(
            "Planned rotation {:.2}° (from {:.2}°, {:.2} turns) for value {} at index {}",
            rotation,
            current_rotation,
            spin_count,
            selected_value,
            target_index
        );

        Ok(RotationPlan {
            rotation,
            duration_secs: self.duration_secs(force),
            spin_count,
            target_index,
            force: self.effective_force(force),
        })
    }
}

impl Default for SpinProfile {
    fn default() -> Self {
        Self::charged()
    }
}

/// Output of the planner for one spin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationPlan {
    /// New absolute wheel rotation (degrees)
    pub rotation: f64,
    /// Animation length (seconds)
    pub duration_secs: f64,
    /// Decorative full turns included in the rotation
    pub spin_count: f64,
    /// Index of the landing segment in the planned-against pool
    pub target_index: usize,
    /// Force after clamping
    pub force: f64,
}

impl RotationPlan {
    /// Rotation that keeps a center overlay upright while the wheel turns
    pub fn counter_rotation(&self) -> f64 {
        -self.rotation
    }
}

/// Plan with the default force-aware profile
pub fn calculate_rotation(
    selected_value: i64,
    pool: &Pool,
    current_rotation: f64,
    force: Option<f64>,
) -> WheelResult<RotationPlan> {
    SpinProfile::default().plan(selected_value, pool, current_rotation, force)
}

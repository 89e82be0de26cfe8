//! Wheel session
//!
//! Owns the pool, the cumulative rotation and the storage slot, and
//! serializes the presentation-facing calls:
//!
//! ```text
//! spin(force) ──> pending value ──> confirm(value) ──> reduced pool ──> store
//!      │                                                     │
//!      └── rejected while a value is pending                 └── Exhausted at 0
//! ```
//!
//! Rotation lives only in memory and starts at 0 on every restore.

use lw_wheel::{
    Pool, PoolGenerator, RotationPlan, WheelConfig, remove_and_reshuffle_with,
    select_random_number,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};
use crate::event::{Observers, SubscriptionId, WheelEvent};
use crate::store::{PoolStore, clear_pool, load_pool, save_pool};

/// Result of a spin request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinOutcome {
    /// Animate to `plan.rotation` over `plan.duration_secs`, then reveal `value`
    Animated { value: i64, plan: RotationPlan },
    /// Only one entry was left: reveal it without spinning
    Immediate { value: i64 },
}

impl SpinOutcome {
    pub fn value(&self) -> i64 {
        match self {
            SpinOutcome::Animated { value, .. } | SpinOutcome::Immediate { value } => *value,
        }
    }

    pub fn plan(&self) -> Option<&RotationPlan> {
        match self {
            SpinOutcome::Animated { plan, .. } => Some(plan),
            SpinOutcome::Immediate { .. } => None,
        }
    }
}

/// Session statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Values drawn (animated or immediate)
    pub spins: u64,
    /// Draws confirmed and removed
    pub confirmed: u64,
    /// Draws cancelled before confirmation
    pub cancelled: u64,
    pub restarts: u64,
}

/// Stateful wrapper around the pure wheel core
pub struct WheelSession<S: PoolStore> {
    config: WheelConfig,
    generator: PoolGenerator,
    store: S,
    pool: Pool,
    /// Cumulative absolute rotation (degrees), never wrapped
    rotation: f64,
    /// Drawn value awaiting confirmation
    pending: Option<i64>,
    rng: StdRng,
    observers: Observers,
    stats: SessionStats,
}

impl<S: PoolStore> WheelSession<S> {
    /// Restore from `store`, falling back to the default pool
    ///
    /// The restored pool is written back, so a malformed or duplicate slot
    /// is replaced right away rather than on the first confirmation.
    pub fn restore(store: S, config: WheelConfig) -> SessionResult<Self> {
        Self::restore_with_rng(store, config, StdRng::from_os_rng())
    }

    /// [`Self::restore`] with a reproducible random stream
    pub fn seeded(store: S, config: WheelConfig, seed: u64) -> SessionResult<Self> {
        Self::restore_with_rng(store, config, StdRng::seed_from_u64(seed))
    }

    pub fn restore_with_rng(store: S, config: WheelConfig, rng: StdRng) -> SessionResult<Self> {
        Self::check_config(&config)?;
        let generator = config.generator();
        let pool = load_pool(&store, &generator);
        save_pool(&store, &pool);
        Ok(Self::assemble(config, generator, store, pool, rng))
    }

    /// Start from a custom value list, replacing whatever is stored
    ///
    /// Duplicate values are rejected; an empty list yields the default pool.
    pub fn with_values(
        store: S,
        config: WheelConfig,
        values: &[i64],
        rng: StdRng,
    ) -> SessionResult<Self> {
        Self::check_config(&config)?;
        let generator = config.generator();
        let pool = generator.generate(values);
        pool.ensure_unique()?;
        save_pool(&store, &pool);
        log::info!("Started wheel with {} custom numbers", pool.len());
        Ok(Self::assemble(config, generator, store, pool, rng))
    }

    /// Configs built in code bypass YAML loading, so every constructor
    /// validates again
    fn check_config(config: &WheelConfig) -> SessionResult<()> {
        config.validate().map_err(|e| {
            log::warn!("Rejected wheel config: {}", e);
            SessionError::InvalidConfig(e.to_string())
        })
    }

    fn assemble(
        config: WheelConfig,
        generator: PoolGenerator,
        store: S,
        pool: Pool,
        rng: StdRng,
    ) -> Self {
        Self {
            config,
            generator,
            store,
            pool,
            rotation: 0.0,
            pending: None,
            rng,
            observers: Observers::new(),
            stats: SessionStats::default(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty()
    }

    /// Current absolute rotation (degrees)
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Value drawn but not yet confirmed
    pub fn pending(&self) -> Option<i64> {
        self.pending
    }

    /// A spin is in flight until its value is confirmed or cancelled
    pub fn is_spinning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ═══════════════════════════════════════════════════════════════════════
    // OBSERVERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&WheelEvent<'_>) + Send + Sync + 'static,
    {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SPIN FLOW
    // ═══════════════════════════════════════════════════════════════════════

    /// Draw a value and plan the rotation that lands on it
    ///
    /// `force` is the charge in `[0, 1]`; `None` is full force. Fails while a
    /// previous draw awaits confirmation and when no entries remain.
    pub fn spin(&mut self, force: Option<f64>) -> SessionResult<SpinOutcome> {
        if self.pool.is_empty() {
            return Err(SessionError::Exhausted);
        }
        if let Some(pending) = self.pending {
            return Err(SessionError::SpinInProgress(pending));
        }

        let value = select_random_number(&self.pool, &mut self.rng)?.value;

        let outcome = if self.pool.len() == 1 {
            SpinOutcome::Immediate { value }
        } else {
            let plan = self
                .config
                .spin
                .plan(value, &self.pool, self.rotation, force)?;
            self.rotation = plan.rotation;
            SpinOutcome::Animated { value, plan }
        };

        self.pending = Some(value);
        self.stats.spins += 1;
        self.observers.notify(&WheelEvent::SpinStarted {
            value,
            plan: outcome.plan().copied(),
        });
        Ok(outcome)
    }

    /// Remove the pending value and reshuffle the rest
    pub fn confirm(&mut self, value: i64) -> SessionResult<&Pool> {
        let pending = self.pending.ok_or(SessionError::NoPendingSelection)?;
        if pending != value {
            return Err(SessionError::SelectionMismatch {
                pending,
                requested: value,
            });
        }

        self.pending = None;
        self.pool = remove_and_reshuffle_with(
            &self.pool,
            value,
            self.generator.palette(),
            &mut self.rng,
        );
        self.stats.confirmed += 1;

        save_pool(&self.store, &self.pool);
        self.observers.notify(&WheelEvent::PoolChanged(&self.pool));

        if self.pool.is_empty() {
            log::info!("All wheel numbers drawn");
            self.observers.notify(&WheelEvent::Exhausted);
        }

        Ok(&self.pool)
    }

    /// Drop the pending draw without removing it
    ///
    /// The wheel keeps its rotation; the next spin continues from there.
    pub fn cancel(&mut self) -> Option<i64> {
        let cancelled = self.pending.take();
        if let Some(value) = cancelled {
            log::debug!("Cancelled pending value {}", value);
            self.stats.cancelled += 1;
        }
        cancelled
    }

    /// Regenerate the default pool and clear storage
    pub fn restart(&mut self) -> &Pool {
        self.pending = None;
        self.pool = self.generator.default_pool();
        self.stats.restarts += 1;

        clear_pool(&self.store);
        log::info!("Wheel restarted with {} numbers", self.pool.len());

        self.observers.notify(&WheelEvent::Restarted);
        self.observers.notify(&WheelEvent::PoolChanged(&self.pool));
        &self.pool
    }
}

impl<S: PoolStore + std::fmt::Debug> std::fmt::Debug for WheelSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelSession")
            .field("store", &self.store)
            .field("remaining", &self.pool.len())
            .field("rotation", &self.rotation)
            .field("pending", &self.pending)
            .field("observers", &self.observers)
            .field("stats", &self.stats)
            .finish()
    }
}

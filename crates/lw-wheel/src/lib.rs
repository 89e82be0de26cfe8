//! # lw-wheel — Number pool and spin planning for the lucky wheel
//!
//! Pure, synchronous core of a raffle wheel: a pool of unique numbers drawn
//! one at a time. Rendering, animation and audio live elsewhere and consume
//! the outputs here (selected value, absolute rotation, duration).
//!
//! ## Components
//!
//! - **Generator**: ordered pool from a value list or the default 1..=33 range
//! - **Selector**: uniform random draw
//! - **Rotation Planner**: absolute rotation (and duration) landing a value's
//!   segment under the pointer, scaled by charge force
//! - **Reducer**: remove a drawn value by identity, reshuffle, recolor
//!
//! ## Flow
//!
//! ```text
//! PoolGenerator ──> Pool
//!                    │
//!                    ├── select_random_number ──> WheelEntry
//!                    │                                │
//!                    │         SpinProfile::plan <────┘
//!                    │               │
//!                    │               v
//!                    │         RotationPlan (rotation, duration)
//!                    │
//!                    └── remove_and_reshuffle(value) ──> next Pool
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod palette;
pub mod pool;
pub mod reducer;
pub mod rotation;
pub mod selector;

pub use config::*;
pub use error::*;
pub use generator::*;
pub use palette::*;
pub use pool::*;
pub use reducer::*;
pub use rotation::*;
pub use selector::*;

//! # lw-state — Persistence and spin session for the lucky wheel
//!
//! Stateful layer on top of `lw-wheel`:
//!
//! - **Store**: single-slot persistence of the remaining values
//!   (`JsonFileStore`, `MemoryStore`), with recovery to the default pool
//! - **Session**: spin / confirm / cancel / restart flow with a re-entrancy
//!   guard and monotonic rotation
//! - **Events**: observer registry for presentation layers
//!
//! ## Example
//!
//! ```no_run
//! use lw_state::{JsonFileStore, WheelSession};
//! use lw_wheel::WheelConfig;
//!
//! let config = WheelConfig::default();
//! let store = JsonFileStore::from_config(&config.storage);
//! let mut session = WheelSession::restore(store, config)?;
//!
//! let outcome = session.spin(Some(0.8))?;
//! // ...animate to outcome.plan(), then:
//! session.confirm(outcome.value())?;
//! # Ok::<(), lw_state::SessionError>(())
//! ```

pub mod error;
pub mod event;
pub mod session;
pub mod store;

pub use error::*;
pub use event::*;
pub use session::*;
pub use store::*;

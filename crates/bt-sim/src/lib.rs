//! `bt-sim` — cycle loop orchestrator for the brace-topia model.
//!
//! # One cycle
//!
//! ```text
//! for cycle in 0..=limit (or forever):
//!   1. evaluate   recompute every agent's happiness from the layout as it
//!                 stands at the start of the cycle
//!   2. aggregate  average happiness over occupied cells (absent if none)
//!   3. relocate   cycle >= 1 only:
//!                   clear moved flags
//!                   list empty cells row-major, shuffle (Fisher-Yates)
//!                   scan row-major; each unmoved unhappy agent takes the
//!                   next shuffled vacancy until the list runs out
//!   4. report     snapshot + CycleReport to the observer
//! ```
//!
//! # Quick-start
//!
//! ```rust
//! use bt_core::SimConfig;
//! use bt_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::from_fractions(15, 0.5, 0.2, 0.6)
//!     .unwrap()
//!     .with_cycle_limit(Some(10));
//! let mut sim = SimBuilder::new(config).build().unwrap();
//! sim.run(&mut NoopObserver).unwrap();
//! assert!(sim.is_terminated());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod relocation;
pub mod sim;
pub mod vacancy;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use relocation::{Relocation, RelocationEngine};
pub use sim::{CycleReport, Sim, SimState};
pub use vacancy::VacancyIndex;

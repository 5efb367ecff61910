//! # FL-03 Transaction Observer
//!
//! Tracks a submitted transaction to a terminal outcome over an unreliable
//! RPC surface.
//!
//! ## Purpose
//!
//! A submitted transaction is invisible (404) until the network confirms
//! it, and confirmation can land as a real execution or as a fee-only
//! record of a rejected one. The observer polls the confirmed-transaction
//! endpoint on a fixed interval, classifies the outcome, and enriches it
//! best-effort with block height and the original unconfirmed id - all
//! under two independently enforced budgets (wall-clock timeout and attempt
//! count), where the stricter one wins.
//!
//! ## Module Structure
//!
//! ```text
//! fl-03-tx-observer/
//! ├── domain/          # TransactionStatus, PollState machine, errors
//! ├── application/     # TransactionObserver polling driver
//! ├── clock.rs         # Clock port (TokioClock / ManualClock)
//! └── config.rs        # ObserverConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod clock;
pub mod config;
pub mod domain;

pub use application::TransactionObserver;
pub use clock::{Clock, ManualClock, TokioClock};
pub use config::ObserverConfig;
pub use domain::{classify_confirmed, ObserverError, PollEvent, PollState, TransactionStatus};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

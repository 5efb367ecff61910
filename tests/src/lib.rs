//! # Frostline Test Suite
//!
//! Unified test crate containing cross-subsystem integration flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── proving_flow.rs    # snapshot → tree → witness choreography
//!     └── observer_flow.rs   # submit-then-watch choreography
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p frost-tests
//!
//! # By category
//! cargo test -p frost-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;

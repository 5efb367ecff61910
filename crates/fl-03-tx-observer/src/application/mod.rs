//! Application services for transaction observation.

pub mod observer;

pub use observer::TransactionObserver;

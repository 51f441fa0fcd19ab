//! Shared response log for past and in-flight requests.
//!
//! # Responsibility
//! - Normalize resource locations into stable cache keys.
//! - Correlate log entries with the UI state observing their results.
//!
//! # Invariants
//! - The store holds at most one entry per normalized resource location.
//! - Entries are only reachable through accessor methods, never as a live
//!   container.

mod aggregator;
mod resource;
mod store;

pub use aggregator::AggregatorHandle;
pub use resource::ResourceSpecification;
pub use store::{EventStore, LogEntry};

//! Transport seam for hypermedia fetches.
//!
//! # Responsibility
//! - Define the contract display models dispatch requests through.
//!
//! # Invariants
//! - Dispatch is non-blocking; results reach the UI via the aggregator, not
//!   via a return value.

use crate::event::AggregatorHandle;
use crate::model::wire::{Link, Method};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure to dispatch one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub method: Method,
    pub href: String,
    pub message: String,
}

impl TransportError {
    pub fn new(method: Method, href: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            method,
            href: href.into(),
            message: message.into(),
        }
    }
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} failed: {}",
            self.method.operation(),
            self.href,
            self.message
        )
    }
}

impl Error for TransportError {}

/// HTTP fetch abstraction.
///
/// Implementations perform the verb encoded in the link's method field
/// against its href and route the eventual response to the UI state bound to
/// `aggregator`. An `Ok` return only means the request was dispatched.
pub trait ResourceProxy {
    fn fetch(&self, link: &Link, aggregator: &AggregatorHandle) -> Result<(), TransportError>;
}

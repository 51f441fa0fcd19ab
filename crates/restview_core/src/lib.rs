//! Core display-model logic for RestView.
//! This crate is the single source of truth for save/undo invariants.

pub mod event;
pub mod layout;
pub mod logging;
pub mod model;
pub mod transport;

pub use event::{AggregatorHandle, EventStore, LogEntry, ResourceSpecification};
pub use layout::Layout;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::collection::CollectionDM;
pub use model::exposer::Exposer;
pub use model::object_dm::{DmError, DmResult, ObjectDM, SyncState};
pub use model::property::Property;
pub use model::wire::{
    Link, Member, MemberKind, Method, ResultObject, ResultRepresentation, TObject,
};
pub use transport::{ResourceProxy, TransportError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

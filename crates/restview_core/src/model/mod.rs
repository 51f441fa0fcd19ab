//! Client-side display models for remote domain objects.
//!
//! # Responsibility
//! - Define the wire types consumed from the server and their projections.
//! - Own the object display model and its save/undo protocol.
//!
//! # Invariants
//! - Each display model holds at most one canonical snapshot at a time.
//! - Projections (properties) are derived data, never the source of truth.

pub mod collection;
pub mod exposer;
pub mod object_dm;
pub mod property;
pub mod wire;

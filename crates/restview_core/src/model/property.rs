//! Renderable property projection.
//!
//! # Responsibility
//! - Map one member descriptor into the read-projection the layout renders.
//!
//! # Invariants
//! - The projection is total, deterministic and side-effect free.
//! - Every source field is preserved verbatim; only the display title is
//!   derived (defaults to the member id).

use crate::model::wire::{Link, Member, MemberKind};
use serde_json::Value;

/// Read-projection of a member descriptor, consumed by the layout.
///
/// Derived data only; the owning snapshot stays the source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: String,
    pub kind: MemberKind,
    pub links: Vec<Link>,
    pub optional: bool,
    /// Display label, defaulted to the member id.
    pub title: String,
    pub value: Option<Value>,
    pub extensions: Value,
    pub format: Option<String>,
    pub disabled_reason: Option<String>,
}

impl Property {
    /// Projects one member descriptor into a renderable property.
    pub fn from_member(m: &Member) -> Self {
        Self {
            id: m.id.clone(),
            kind: m.kind,
            links: m.links.clone(),
            optional: m.optional,
            title: m.id.clone(),
            value: m.value.clone(),
            extensions: m.extensions.clone(),
            format: m.format.clone(),
            disabled_reason: m.disabled_reason.clone(),
        }
    }
}

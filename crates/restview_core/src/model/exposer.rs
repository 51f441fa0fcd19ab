//! Snapshot adapter with a local edit overlay.
//!
//! # Responsibility
//! - Wrap the canonical snapshot and expose keyed member-value access.
//! - Record pending local edits without mutating the committed snapshot.
//!
//! # Invariants
//! - The delegate snapshot is immutable while wrapped.
//! - `reset()` discards every staged edit and nothing else.

use crate::model::wire::TObject;
use serde_json::Value;
use std::collections::BTreeMap;

/// Adapter over the committed snapshot plus staged, uncommitted member edits.
#[derive(Debug, Clone)]
pub struct Exposer {
    delegate: TObject,
    overlay: BTreeMap<String, Value>,
}

impl Exposer {
    pub fn new(delegate: TObject) -> Self {
        Self {
            delegate,
            overlay: BTreeMap::new(),
        }
    }

    /// Returns the committed snapshot.
    pub fn delegate(&self) -> &TObject {
        &self.delegate
    }

    /// Returns the effective value for one member: staged edit first,
    /// committed value otherwise.
    pub fn member_value(&self, member_id: &str) -> Option<&Value> {
        if let Some(staged) = self.overlay.get(member_id) {
            return Some(staged);
        }
        self.delegate
            .members
            .get(member_id)
            .and_then(|m| m.value.as_ref())
    }

    /// Stages a local edit for one member.
    ///
    /// Returns `false` when the member does not exist on the snapshot; the
    /// overlay is left untouched in that case.
    pub fn stage(&mut self, member_id: &str, value: Value) -> bool {
        if !self.delegate.members.contains_key(member_id) {
            return false;
        }
        self.overlay.insert(member_id.to_string(), value);
        true
    }

    /// True when at least one staged edit is pending.
    pub fn has_pending_edits(&self) -> bool {
        !self.overlay.is_empty()
    }

    /// Discards every staged edit, restoring the committed snapshot view.
    pub fn reset(&mut self) {
        self.overlay.clear();
    }
}

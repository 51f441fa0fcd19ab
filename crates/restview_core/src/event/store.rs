//! Response-log entries and the process-wide store.

use crate::event::aggregator::AggregatorHandle;
use crate::event::resource::ResourceSpecification;
use std::collections::BTreeMap;

/// One response-log entry for a resource location.
#[derive(Debug, Clone)]
pub struct LogEntry {
    resource: ResourceSpecification,
    reload: bool,
    aggregator: Option<AggregatorHandle>,
}

impl LogEntry {
    fn new(resource: ResourceSpecification) -> Self {
        Self {
            resource,
            reload: false,
            aggregator: None,
        }
    }

    pub fn resource(&self) -> &ResourceSpecification {
        &self.resource
    }

    /// Marks the entry so the next fetch bypasses the cached response.
    pub fn set_reload(&mut self) {
        self.reload = true;
    }

    /// Clears the reload marker once the refreshed response landed.
    pub fn clear_reload(&mut self) {
        self.reload = false;
    }

    pub fn needs_reload(&self) -> bool {
        self.reload
    }

    /// Binds the UI correlation handle observing this resource.
    pub fn bind_aggregator(&mut self, aggregator: AggregatorHandle) {
        self.aggregator = Some(aggregator);
    }

    pub fn aggregator(&self) -> Option<&AggregatorHandle> {
        self.aggregator.as_ref()
    }
}

/// Process-wide response log keyed by normalized resource location.
///
/// Shared by every display model of a session; on the single-threaded UI
/// loop it is handed around as `Rc<RefCell<EventStore>>`.
#[derive(Debug, Default)]
pub struct EventStore {
    entries: BTreeMap<ResourceSpecification, LogEntry>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for `resource`, creating an empty one when absent.
    pub fn log_entry(&mut self, resource: ResourceSpecification) -> &mut LogEntry {
        self.entries
            .entry(resource.clone())
            .or_insert_with(|| LogEntry::new(resource))
    }

    /// Looks up the entry for `resource`.
    pub fn find_by(&self, resource: &ResourceSpecification) -> Option<&LogEntry> {
        self.entries.get(resource)
    }

    /// Looks up the entry for `resource` for mutation.
    pub fn find_by_mut(&mut self, resource: &ResourceSpecification) -> Option<&mut LogEntry> {
        self.entries.get_mut(resource)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Object display model and its edit/save/undo protocol.
//!
//! # Responsibility
//! - Hold the client-side representation of one remote domain object.
//! - Gate when the object is ready to be handed to the rendering layer.
//! - Run the write-then-refresh synchronization against the backend.
//!
//! # Invariants
//! - `collection_models` entries are unique by id, insertion order preserved.
//! - A new snapshot fully replaces the old one.
//! - The sync state leaves `Dirty` only through `save()` or `undo()`.
//! - `save()` dispatches the write strictly before the refresh read; both
//!   share one response-log key.

use crate::event::{AggregatorHandle, EventStore, ResourceSpecification};
use crate::layout::Layout;
use crate::model::collection::CollectionDM;
use crate::model::exposer::Exposer;
use crate::model::property::Property;
use crate::model::wire::{Link, ResultObject, TObject};
use crate::transport::{ResourceProxy, TransportError};
use log::{debug, info, warn};
use serde_json::Value;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type DmResult<T> = Result<T, DmError>;

/// Display-model error surfaced to the owning view.
#[derive(Debug)]
pub enum DmError {
    /// A lookup by id or resource location found nothing.
    NotFound(String),
    /// A response-log entry or projection lacks its correlation handle.
    MissingCorrelation(String),
    /// No object snapshot has been loaded yet.
    NotLoaded,
    /// A request could not be dispatched.
    Transport(TransportError),
}

impl Display for DmError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "not found: {what}"),
            Self::MissingCorrelation(what) => write!(f, "missing correlation: {what}"),
            Self::NotLoaded => write!(f, "no object snapshot loaded"),
            Self::Transport(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DmError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TransportError> for DmError {
    fn from(value: TransportError) -> Self {
        Self::Transport(value)
    }
}

/// Synchronization state of one display model.
///
/// The save protocol is a two-phase saga: the write ack and the refreshed
/// read are confirmed separately, and either failure returns the model to
/// `Dirty` with its staged edits intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No local edits pending.
    Clean,
    /// Local edits exist that are not confirmed written.
    Dirty,
    /// Write and refresh dispatched; write ack outstanding.
    AwaitingWriteAck,
    /// Write acknowledged; refreshed read outstanding.
    AwaitingRefresh,
}

impl Display for SyncState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Clean => "clean",
            Self::Dirty => "dirty",
            Self::AwaitingWriteAck => "awaiting_write_ack",
            Self::AwaitingRefresh => "awaiting_refresh",
        };
        write!(f, "{name}")
    }
}

/// Display model for one remote domain object.
///
/// Collaborators are injected at construction: the shared response log, the
/// transport, and the (optional) rendering layout. The model never resolves
/// them from ambient session state.
pub struct ObjectDM {
    title: String,
    layout: Option<Box<dyn Layout>>,
    collection_models: Vec<CollectionDM>,
    data: Option<Exposer>,
    rendered: bool,
    state: SyncState,
    event_store: Rc<RefCell<EventStore>>,
    proxy: Rc<dyn ResourceProxy>,
}

impl ObjectDM {
    pub fn new(
        title: impl Into<String>,
        layout: Option<Box<dyn Layout>>,
        event_store: Rc<RefCell<EventStore>>,
        proxy: Rc<dyn ResourceProxy>,
    ) -> Self {
        Self {
            title: title.into(),
            layout,
            collection_models: Vec::new(),
            data: None,
            rendered: false,
            state: SyncState::Clean,
            event_store,
            proxy,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Registers a sub-collection display model.
    ///
    /// Idempotent by id: a model whose id is already registered is dropped
    /// without touching the existing entry.
    pub fn add_collection_model(&mut self, model: CollectionDM) {
        let exists = self
            .collection_models
            .iter()
            .any(|existing| existing.id() == model.id());
        if !exists {
            self.collection_models.push(model);
        }
    }

    /// Looks up one sub-collection display model by id.
    pub fn collection_display_model_for(&self, id: &str) -> DmResult<&CollectionDM> {
        self.collection_models
            .iter()
            .find(|model| model.id() == id)
            .ok_or_else(|| DmError::NotFound(format!("collection model `{id}`")))
    }

    /// Iterates registered sub-collection models in insertion order.
    pub fn collection_models(&self) -> impl Iterator<Item = &CollectionDM> {
        self.collection_models.iter()
    }

    /// Conjunctive render gate; conditions are checked in order and the
    /// layout's own readiness is queried last.
    pub fn ready_to_render(&self) -> bool {
        if self.data.is_none() {
            return false;
        }
        if self.rendered {
            return false;
        }
        let Some(layout) = self.layout.as_ref() else {
            return false;
        };
        if self.collection_models.is_empty() {
            return false;
        }
        layout.ready_to_render()
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Records that the model was handed to the rendering layer.
    pub fn mark_rendered(&mut self) {
        self.rendered = true;
    }

    /// Stores a raw object representation as the current snapshot and
    /// projects its property members into the layout.
    ///
    /// The snapshot replaces any previous one before projection starts. With
    /// a layout attached, `aggregator` and `referrer` are mandatory for the
    /// provenance tagging of each projected property.
    pub fn add_data(
        &mut self,
        obj: TObject,
        aggregator: Option<&AggregatorHandle>,
        referrer: Option<&str>,
    ) -> DmResult<()> {
        self.data = Some(Exposer::new(obj));
        let Some(layout) = self.layout.as_mut() else {
            return Ok(());
        };
        let aggregator = aggregator.ok_or_else(|| {
            DmError::MissingCorrelation("aggregator required to project properties".to_string())
        })?;
        let referrer = referrer.ok_or_else(|| {
            DmError::MissingCorrelation("referrer required to project properties".to_string())
        })?;
        if let Some(exposer) = self.data.as_ref() {
            for member in exposer.delegate().properties() {
                layout.add_object_property(Property::from_member(member), aggregator, referrer);
            }
        }
        Ok(())
    }

    /// Adapts a server result payload into the canonical snapshot and
    /// delegates to [`Self::add_data`].
    ///
    /// No aggregator or referrer is available on this path, so it fails with
    /// [`DmError::MissingCorrelation`] when a layout insists on projecting.
    pub fn add_result(&mut self, result_object: ResultObject) -> DmResult<()> {
        let obj = TObject::from_result(result_object);
        self.add_data(obj, None, None)
    }

    /// Returns the committed object snapshot.
    pub fn object(&self) -> DmResult<&TObject> {
        self.data
            .as_ref()
            .map(Exposer::delegate)
            .ok_or(DmError::NotLoaded)
    }

    /// Returns the snapshot adapter, including staged edits.
    pub fn data(&self) -> Option<&Exposer> {
        self.data.as_ref()
    }

    /// Stages a local member edit and marks the model dirty.
    pub fn stage_edit(&mut self, member_id: &str, value: Value) -> DmResult<()> {
        let exposer = self.data.as_mut().ok_or(DmError::NotLoaded)?;
        if !exposer.stage(member_id, value) {
            return Err(DmError::NotFound(format!("member `{member_id}`")));
        }
        self.set_dirty(true);
        Ok(())
    }

    /// External edit notification; the only way the dirty flag is raised.
    pub fn set_dirty(&mut self, value: bool) {
        self.state = if value {
            SyncState::Dirty
        } else {
            SyncState::Clean
        };
    }

    pub fn is_dirty(&self) -> bool {
        self.state == SyncState::Dirty
    }

    pub fn sync_state(&self) -> SyncState {
        self.state
    }

    /// Pushes pending edits to the backend and schedules a refresh.
    ///
    /// No-op unless the model is dirty. When dirty, in strict order: the
    /// snapshot's first link is the canonical resource location; its
    /// response-log entry is marked for forced reload; the write is
    /// dispatched, then immediately the refresh read, both correlated to the
    /// aggregator bound to that entry.
    ///
    /// # Errors
    /// - [`DmError::NotLoaded`] when no snapshot was ever loaded.
    /// - [`DmError::NotFound`] when the snapshot has no links or the
    ///   response log has no entry for the location.
    /// - [`DmError::MissingCorrelation`] when the entry has no aggregator.
    /// - [`DmError::Transport`] when a dispatch fails; a failed write leaves
    ///   the model dirty, a failed refresh dispatch does not (the write is
    ///   already on the wire and its ack is still expected).
    pub fn save(&mut self) -> DmResult<()> {
        if self.state != SyncState::Dirty {
            debug!(
                "event=save_skipped module=object_dm status=ok state={} title={}",
                self.state, self.title
            );
            return Ok(());
        }

        let exposer = self.data.as_ref().ok_or(DmError::NotLoaded)?;
        let get_link = exposer
            .delegate()
            .primary_link()
            .cloned()
            .ok_or_else(|| DmError::NotFound("primary link of object snapshot".to_string()))?;
        let resource = ResourceSpecification::new(&get_link.href);

        // WATCHOUT: the write and the refresh read share this cache key. The
        // reload marker set here must be consumed by the read dispatched
        // after the write; reordering the two fetches breaks the refresh.
        let aggregator = {
            let mut store = self.event_store.borrow_mut();
            let entry = store
                .find_by_mut(&resource)
                .ok_or_else(|| DmError::NotFound(format!("log entry for {resource}")))?;
            entry.set_reload();
            entry
                .aggregator()
                .cloned()
                .ok_or_else(|| DmError::MissingCorrelation(resource.location().to_string()))?
        };

        let put_link = Link::write(get_link.href.as_str());
        self.proxy.fetch(&put_link, &aggregator)?;
        self.state = SyncState::AwaitingWriteAck;
        info!(
            "event=save_dispatched module=object_dm status=ok href={} aggregator={}",
            get_link.href, aggregator
        );

        if let Err(err) = self.proxy.fetch(&get_link, &aggregator) {
            // The write is already out; keep waiting for its ack.
            warn!(
                "event=refresh_dispatch_failed module=object_dm status=error href={} error={}",
                get_link.href, err
            );
            return Err(DmError::Transport(err));
        }
        Ok(())
    }

    /// Confirms or rejects the write phase of an in-flight save.
    pub fn on_write_ack(&mut self, ok: bool) {
        if self.state != SyncState::AwaitingWriteAck {
            return;
        }
        if ok {
            self.state = SyncState::AwaitingRefresh;
        } else {
            warn!(
                "event=write_rejected module=object_dm status=error title={}",
                self.title
            );
            self.state = SyncState::Dirty;
        }
    }

    /// Confirms or rejects the refresh phase of an in-flight save.
    pub fn on_refresh(&mut self, ok: bool) {
        if self.state != SyncState::AwaitingRefresh {
            return;
        }
        if ok {
            if let Some(exposer) = self.data.as_mut() {
                exposer.reset();
            }
            self.state = SyncState::Clean;
        } else {
            warn!(
                "event=refresh_failed module=object_dm status=error title={}",
                self.title
            );
            self.state = SyncState::Dirty;
        }
    }

    /// Discards pending local edits and restores the committed snapshot.
    ///
    /// No-op unless the model is dirty.
    pub fn undo(&mut self) {
        if self.state != SyncState::Dirty {
            return;
        }
        if let Some(exposer) = self.data.as_mut() {
            exposer.reset();
        }
        self.state = SyncState::Clean;
        debug!(
            "event=undo module=object_dm status=ok title={}",
            self.title
        );
    }
}

//! Sub-collection display model.

/// Display model for one collection member of a remote object.
///
/// Opaque to the object display model beyond its stable id; the id keys the
/// registry owned by [`crate::model::object_dm::ObjectDM`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDM {
    id: String,
    title: String,
}

impl CollectionDM {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

//! Rendering seam consumed by display models.

use crate::event::AggregatorHandle;
use crate::model::property::Property;

/// Widget-tree contract the object display model projects into.
///
/// The concrete tree lives outside this crate; the display model only adds
/// renderable properties, tagged with the request correlation and the
/// referring resource for provenance, and asks whether the tree itself is
/// ready to render.
pub trait Layout {
    /// Registers one renderable property with the tree.
    fn add_object_property(
        &mut self,
        property: Property,
        aggregator: &AggregatorHandle,
        referrer: &str,
    );

    /// Reports the tree's own readiness.
    fn ready_to_render(&self) -> bool;
}

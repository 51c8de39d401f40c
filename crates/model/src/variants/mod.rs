//! Concrete element variants.
//!
//! Each variant owns a `const` capability set composed by `union` from one of
//! the base sets below. Composition through `union` is what keeps capability
//! sets monotonic: a variant can add tokens on top of its base, but there is
//! no subtraction path. A variant that fits none of the base sets declares
//! its own set from scratch and is a distinct variant, not a refinement (see
//! [`shape::RoutingHandle`] and [`shape::Placeholder`]).

use crate::capability::CapabilitySet;

pub mod edge;
pub mod label;
pub mod node;
pub mod shape;

pub use edge::{ConnectPolicy, ConnectableEdge};
pub use label::{ConnectableEditableLabel, ConnectionPoint, EditableLabel, LabelNode, StaticLabel};
pub use node::LabeledNode;
pub use shape::{Compartment, Graph, Icon, Placeholder, RoutingHandle};

/// Base capabilities of rectangular nodes.
pub const NODE_CAPS: CapabilitySet = CapabilitySet::SELECT
	.union(CapabilitySet::MOVE)
	.union(CapabilitySet::DELETE)
	.union(CapabilitySet::BOUNDS)
	.union(CapabilitySet::LAYOUT_CONTAINER)
	.union(CapabilitySet::FADE)
	.union(CapabilitySet::HOVER_FEEDBACK)
	.union(CapabilitySet::POPUP);

/// Base capabilities of routable edges.
pub const EDGE_CAPS: CapabilitySet = CapabilitySet::EDIT
	.union(CapabilitySet::DELETE)
	.union(CapabilitySet::SELECT)
	.union(CapabilitySet::FADE)
	.union(CapabilitySet::HOVER_FEEDBACK);

/// Base capabilities of text labels.
pub const LABEL_CAPS: CapabilitySet = CapabilitySet::BOUNDS
	.union(CapabilitySet::ALIGNABLE)
	.union(CapabilitySet::LAYOUTABLE_CHILD)
	.union(CapabilitySet::FADE);

/// Base capabilities of non-interactive shapes (icons, compartments).
pub const SHAPE_CAPS: CapabilitySet = CapabilitySet::BOUNDS
	.union(CapabilitySet::LAYOUT_CONTAINER)
	.union(CapabilitySet::LAYOUTABLE_CHILD)
	.union(CapabilitySet::FADE);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::element::ElementSeed;

	/// Every variant built on a base set still contains that base set: the
	/// union composition path cannot drop inherited capabilities.
	#[test]
	fn test_capability_monotonicity() {
		let cases: &[(&str, CapabilitySet, CapabilitySet)] = &[
			("LabeledNode", node::LABELED_NODE_CAPS, NODE_CAPS),
			("ConnectableEdge", edge::CONNECTABLE_EDGE_CAPS, EDGE_CAPS),
			("EditableLabel", label::EDITABLE_LABEL_CAPS, LABEL_CAPS),
			(
				"ConnectableEditableLabel",
				label::CONNECTABLE_EDITABLE_LABEL_CAPS,
				LABEL_CAPS,
			),
			("ConnectionPoint", label::CONNECTION_POINT_CAPS, LABEL_CAPS),
			("StaticLabel", label::STATIC_LABEL_CAPS, LABEL_CAPS),
			("LabelNode", label::LABEL_NODE_CAPS, LABEL_CAPS),
			("Icon", shape::ICON_CAPS, SHAPE_CAPS),
			("Compartment", shape::COMPARTMENT_CAPS, SHAPE_CAPS),
		];
		for (name, derived, base) in cases {
			assert!(
				derived.contains(*base),
				"{name} dropped capabilities from its base set"
			);
		}
	}

	/// Instances of one variant always report the identical, statically
	/// computed set; construction never grows a shared set (the original
	/// implementation pushed into a shared feature array from a constructor,
	/// which this layer deliberately does not reproduce).
	#[test]
	fn test_capability_set_is_per_variant_not_per_instance() {
		use crate::element::Element;

		let first = ConnectableEditableLabel::construct(ElementSeed::new("ep1", "label:extensionpoint"));
		let second = ConnectableEditableLabel::construct(ElementSeed::new("ep2", "label:extensionpoint"));
		assert_eq!(first.capabilities(), second.capabilities());
		assert_eq!(first.capabilities(), label::CONNECTABLE_EDITABLE_LABEL_CAPS);

		let third = ConnectableEditableLabel::construct(ElementSeed::new("ep3", "label:extensionpoint"));
		assert_eq!(third.capabilities(), label::CONNECTABLE_EDITABLE_LABEL_CAPS);
	}
}

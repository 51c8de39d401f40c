//! Labeled node variant.

use crate::capability::{Capability, CapabilitySet};
use crate::element::{Element, ElementSeed, LabelText};
use crate::types;
use crate::variants::NODE_CAPS;

/// Capabilities of [`LabeledNode`].
pub const LABELED_NODE_CAPS: CapabilitySet = NODE_CAPS
	.union(CapabilitySet::NAME)
	.union(CapabilitySet::WITH_EDITABLE_LABEL);

/// Rectangular node whose name lives in a nested heading label.
///
/// Classes, packages, components, comments, actors and use cases all
/// materialize as this variant; they differ only in type id and renderer.
#[derive(Debug)]
pub struct LabeledNode {
	id: String,
	type_id: String,
	children: Vec<Box<dyn Element>>,
	/// Whether the node is part of the selection.
	pub selected: bool,
	/// Whether hover feedback is currently shown.
	pub hover_feedback: bool,
	/// Render opacity, 0.0..=1.0.
	pub opacity: f32,
}

impl LabeledNode {
	/// Variant constructor for the type binding registry.
	pub fn construct(seed: ElementSeed) -> Box<dyn Element> {
		Box::new(Self {
			id: seed.id,
			type_id: seed.type_id,
			children: seed.children,
			selected: false,
			hover_feedback: false,
			opacity: 1.0,
		})
	}

	/// Locates the heading label: a `comp:header` child holding a
	/// `label:heading` child that supports label editing.
	///
	/// The walk is exactly two levels deep and never recurses. A corrupted
	/// containment graph (missing header, wrong label type, even a cycle
	/// introduced by a bad document patch) therefore cannot hang name
	/// resolution; the walk simply comes up empty and callers fall back.
	fn heading_label(&self) -> Option<&dyn Element> {
		let header = self
			.children
			.iter()
			.find(|child| child.type_id() == types::COMPARTMENT_HEADER)?;
		let label = header
			.children()
			.iter()
			.find(|child| child.type_id() == types::LABEL_HEADING)?;
		label
			.supports(Capability::EditableLabel)
			.then(|| label.as_ref())
	}
}

impl Element for LabeledNode {
	fn id(&self) -> &str {
		&self.id
	}

	fn type_id(&self) -> &str {
		&self.type_id
	}

	fn capabilities(&self) -> CapabilitySet {
		LABELED_NODE_CAPS
	}

	fn children(&self) -> &[Box<dyn Element>] {
		&self.children
	}

	fn editable_label(&self) -> Option<&LabelText> {
		self.heading_label().and_then(Element::editable_label)
	}

	fn children_mut(&mut self) -> &mut [Box<dyn Element>] {
		&mut self.children
	}

	fn editable_label_mut(&mut self) -> Option<&mut LabelText> {
		let header = self
			.children
			.iter_mut()
			.find(|child| child.type_id() == types::COMPARTMENT_HEADER)?;
		let label = header
			.children_mut()
			.iter_mut()
			.find(|child| child.type_id() == types::LABEL_HEADING)?;
		if label.supports(Capability::EditableLabel) {
			label.editable_label_mut()
		} else {
			None
		}
	}

	fn name(&self) -> Option<&str> {
		match self.editable_label() {
			Some(label) => Some(label.text.as_str()),
			None => Some(self.id.as_str()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::variants::{Compartment, EditableLabel};

	fn node_with_heading(text: &str) -> Box<dyn Element> {
		let label = EditableLabel::construct(
			ElementSeed::new("n1_name", types::LABEL_HEADING).with_text(text),
		);
		let header =
			Compartment::construct(ElementSeed::new("n1_header", types::COMPARTMENT_HEADER).with_child(label));
		LabeledNode::construct(ElementSeed::new("n1", types::CLASS).with_child(header))
	}

	#[test]
	fn test_name_resolves_through_header() {
		let node = node_with_heading("Order");
		assert_eq!(node.name(), Some("Order"));
		assert_eq!(node.editable_label().map(|l| l.text.as_str()), Some("Order"));
	}

	/// A labeled node with no header child resolves its name to the instance
	/// id instead of failing.
	#[test]
	fn test_name_falls_back_to_id_without_header() {
		let node = LabeledNode::construct(ElementSeed::new("n2", types::CLASS));
		assert_eq!(node.editable_label(), None);
		assert_eq!(node.name(), Some("n2"));
	}

	/// A header whose label is not an editable heading is skipped.
	#[test]
	fn test_name_ignores_non_heading_labels() {
		let stray = EditableLabel::construct(
			ElementSeed::new("n3_txt", types::LABEL_TEXT).with_text("not a heading"),
		);
		let header =
			Compartment::construct(ElementSeed::new("n3_header", types::COMPARTMENT_HEADER).with_child(stray));
		let node = LabeledNode::construct(ElementSeed::new("n3", types::CLASS).with_child(header));
		assert_eq!(node.editable_label(), None);
		assert_eq!(node.name(), Some("n3"));
	}

	#[test]
	fn test_supports_composed_capabilities() {
		let node = node_with_heading("Order");
		assert!(node.supports(Capability::Select));
		assert!(node.supports(Capability::Name));
		assert!(node.supports(Capability::WithEditableLabel));
		assert!(!node.supports(Capability::Connectable));
	}
}

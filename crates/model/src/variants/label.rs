//! Label variants.

use crate::capability::CapabilitySet;
use crate::element::{Connectable, ConnectRole, Element, ElementSeed, LabelText};
use crate::variants::LABEL_CAPS;
use crate::variants::edge::ConnectPolicy;

/// Capabilities of [`EditableLabel`].
pub const EDITABLE_LABEL_CAPS: CapabilitySet = LABEL_CAPS.union(CapabilitySet::EDITABLE_LABEL);

/// Capabilities of [`ConnectableEditableLabel`].
pub const CONNECTABLE_EDITABLE_LABEL_CAPS: CapabilitySet = LABEL_CAPS
	.union(CapabilitySet::EDITABLE_LABEL)
	.union(CapabilitySet::CONNECTABLE);

/// Capabilities of [`ConnectionPoint`].
pub const CONNECTION_POINT_CAPS: CapabilitySet = LABEL_CAPS.union(CapabilitySet::CONNECTABLE);

/// Capabilities of [`LabelNode`].
pub const LABEL_NODE_CAPS: CapabilitySet = LABEL_CAPS
	.union(CapabilitySet::SELECT)
	.union(CapabilitySet::EDITABLE_LABEL)
	.union(CapabilitySet::POPUP)
	.union(CapabilitySet::DELETE)
	.union(CapabilitySet::HOVER_FEEDBACK);

/// Capabilities of [`StaticLabel`].
pub const STATIC_LABEL_CAPS: CapabilitySet = LABEL_CAPS;

/// Non-editable text label (icon slots, fixed annotations).
#[derive(Debug)]
pub struct StaticLabel {
	id: String,
	type_id: String,
	/// Displayed text.
	pub text: String,
}

impl StaticLabel {
	/// Variant constructor for the type binding registry.
	pub fn construct(seed: ElementSeed) -> Box<dyn Element> {
		Box::new(Self {
			id: seed.id,
			type_id: seed.type_id,
			text: seed.text.unwrap_or_default(),
		})
	}
}

impl Element for StaticLabel {
	fn id(&self) -> &str {
		&self.id
	}

	fn type_id(&self) -> &str {
		&self.type_id
	}

	fn capabilities(&self) -> CapabilitySet {
		STATIC_LABEL_CAPS
	}
}

/// Plain editable text label.
///
/// Single-line and multi-line labels share this variant; the registry binds
/// them through [`EditableLabel::construct`] and
/// [`EditableLabel::construct_multiline`] respectively.
#[derive(Debug)]
pub struct EditableLabel {
	id: String,
	type_id: String,
	label: LabelText,
}

impl EditableLabel {
	/// Variant constructor for single-line labels.
	pub fn construct(seed: ElementSeed) -> Box<dyn Element> {
		Box::new(Self {
			id: seed.id,
			type_id: seed.type_id,
			label: LabelText::new(seed.text.unwrap_or_default()),
		})
	}

	/// Variant constructor for multi-line labels (comment bodies).
	pub fn construct_multiline(seed: ElementSeed) -> Box<dyn Element> {
		Box::new(Self {
			id: seed.id,
			type_id: seed.type_id,
			label: LabelText::multiline(seed.text.unwrap_or_default()),
		})
	}
}

impl Element for EditableLabel {
	fn id(&self) -> &str {
		&self.id
	}

	fn type_id(&self) -> &str {
		&self.type_id
	}

	fn capabilities(&self) -> CapabilitySet {
		EDITABLE_LABEL_CAPS
	}

	fn editable_label(&self) -> Option<&LabelText> {
		Some(&self.label)
	}

	fn editable_label_mut(&mut self) -> Option<&mut LabelText> {
		Some(&mut self.label)
	}
}

/// Editable label that can also serve as an edge endpoint (extension points).
#[derive(Debug)]
pub struct ConnectableEditableLabel {
	id: String,
	type_id: String,
	label: LabelText,
	policy: Option<ConnectPolicy>,
}

impl ConnectableEditableLabel {
	/// Variant constructor for the type binding registry.
	pub fn construct(seed: ElementSeed) -> Box<dyn Element> {
		Box::new(Self {
			id: seed.id,
			type_id: seed.type_id,
			label: LabelText::new(seed.text.unwrap_or_default()),
			policy: None,
		})
	}
}

impl Connectable for ConnectableEditableLabel {
	fn can_connect(&self, peer: &dyn Element, role: ConnectRole) -> bool {
		match self.policy {
			Some(policy) => policy(peer, role),
			None => true,
		}
	}
}

impl Element for ConnectableEditableLabel {
	fn id(&self) -> &str {
		&self.id
	}

	fn type_id(&self) -> &str {
		&self.type_id
	}

	fn capabilities(&self) -> CapabilitySet {
		CONNECTABLE_EDITABLE_LABEL_CAPS
	}

	fn editable_label(&self) -> Option<&LabelText> {
		Some(&self.label)
	}

	fn editable_label_mut(&mut self) -> Option<&mut LabelText> {
		Some(&mut self.label)
	}

	fn connectable(&self) -> Option<&dyn Connectable> {
		Some(self)
	}
}

/// Fixed attachment point on a use case boundary.
#[derive(Debug)]
pub struct ConnectionPoint {
	id: String,
	type_id: String,
	policy: Option<ConnectPolicy>,
	/// Whether the point is part of the selection.
	pub selected: bool,
	/// Whether hover feedback is currently shown. Off by default; connection
	/// points highlight only through the connection tool.
	pub hover_feedback: bool,
	/// Render opacity, 0.0..=1.0.
	pub opacity: f32,
}

impl ConnectionPoint {
	/// Variant constructor for the type binding registry.
	pub fn construct(seed: ElementSeed) -> Box<dyn Element> {
		Box::new(Self {
			id: seed.id,
			type_id: seed.type_id,
			policy: None,
			selected: false,
			hover_feedback: false,
			opacity: 1.0,
		})
	}
}

impl Connectable for ConnectionPoint {
	fn can_connect(&self, peer: &dyn Element, role: ConnectRole) -> bool {
		match self.policy {
			Some(policy) => policy(peer, role),
			None => true,
		}
	}
}

impl Element for ConnectionPoint {
	fn id(&self) -> &str {
		&self.id
	}

	fn type_id(&self) -> &str {
		&self.type_id
	}

	fn capabilities(&self) -> CapabilitySet {
		CONNECTION_POINT_CAPS
	}

	fn connectable(&self) -> Option<&dyn Connectable> {
		Some(self)
	}
}

/// Selectable, deletable label row with an optional leading image
/// (property rows in a class body).
#[derive(Debug)]
pub struct LabelNode {
	id: String,
	type_id: String,
	label: LabelText,
	/// Image shown before the text, if any.
	pub image: Option<&'static str>,
	/// Whether the row is part of the selection.
	pub selected: bool,
	/// Whether hover feedback is currently shown.
	pub hover_feedback: bool,
}

impl LabelNode {
	/// Variant constructor for plain label rows.
	pub fn construct(seed: ElementSeed) -> Box<dyn Element> {
		Self::with_image(seed, None)
	}

	/// Variant constructor for property rows.
	pub fn construct_property(seed: ElementSeed) -> Box<dyn Element> {
		Self::with_image(seed, Some("Property.svg"))
	}

	fn with_image(seed: ElementSeed, image: Option<&'static str>) -> Box<dyn Element> {
		Box::new(Self {
			id: seed.id,
			type_id: seed.type_id,
			label: LabelText::new(seed.text.unwrap_or_default()),
			image,
			selected: false,
			hover_feedback: false,
		})
	}
}

impl Element for LabelNode {
	fn id(&self) -> &str {
		&self.id
	}

	fn type_id(&self) -> &str {
		&self.type_id
	}

	fn capabilities(&self) -> CapabilitySet {
		LABEL_NODE_CAPS
	}

	fn editable_label(&self) -> Option<&LabelText> {
		Some(&self.label)
	}

	fn editable_label_mut(&mut self) -> Option<&mut LabelText> {
		Some(&mut self.label)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::capability::Capability;
	use crate::types;

	#[test]
	fn test_editable_label_carries_text() {
		let mut label = EditableLabel::construct(
			ElementSeed::new("l1", types::LABEL_NAME).with_text("getTotal()"),
		);
		assert!(label.supports(Capability::EditableLabel));
		assert_eq!(label.editable_label().map(|l| l.text.as_str()), Some("getTotal()"));
		assert!(!label.editable_label().expect("label payload").is_multiline);

		label.editable_label_mut().expect("label payload").text = "getSum()".into();
		assert_eq!(label.editable_label().map(|l| l.text.as_str()), Some("getSum()"));
	}

	#[test]
	fn test_multiline_constructor_sets_flag() {
		let body = EditableLabel::construct_multiline(
			ElementSeed::new("c1_body", types::COMMENT_BODY).with_text("line one\nline two"),
		);
		assert!(body.editable_label().expect("label payload").is_multiline);
	}

	/// Extension point labels are both editable and connectable, and the
	/// default endpoint policy is permissive.
	#[test]
	fn test_connectable_editable_label() {
		let ep = ConnectableEditableLabel::construct(
			ElementSeed::new("ep1", types::EXTENSION_POINT).with_text("payment declined"),
		);
		assert!(ep.supports(Capability::EditableLabel));
		assert!(ep.supports(Capability::Connectable));

		let peer = EditableLabel::construct(ElementSeed::new("l2", types::LABEL_TEXT));
		let connectable = ep.connectable().expect("extension point is connectable");
		assert!(connectable.can_connect(peer.as_ref(), ConnectRole::Target));
	}

	#[test]
	fn test_connection_point_is_not_editable() {
		let cp = ConnectionPoint::construct(ElementSeed::new("cp1", types::CONNECTION_POINT));
		assert!(cp.supports(Capability::Connectable));
		assert!(!cp.supports(Capability::EditableLabel));
		assert_eq!(cp.editable_label(), None);
	}

	#[test]
	fn test_property_row_image_and_capabilities() {
		let row = LabelNode::construct_property(
			ElementSeed::new("p1", types::PROPERTY).with_text("total: int"),
		);
		assert!(row.supports(Capability::Select));
		assert!(row.supports(Capability::Delete));
		assert!(row.supports(Capability::Popup));
		assert!(row.supports(Capability::EditableLabel));
	}
}

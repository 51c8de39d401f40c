//! Connectable edge variant.

use crate::capability::CapabilitySet;
use crate::element::{Connectable, ConnectRole, Element, ElementSeed};
use crate::variants::EDGE_CAPS;

/// Capabilities of [`ConnectableEdge`].
pub const CONNECTABLE_EDGE_CAPS: CapabilitySet = EDGE_CAPS.union(CapabilitySet::CONNECTABLE);

/// Structural admission rule for edge endpoints.
pub type ConnectPolicy = fn(peer: &dyn Element, role: ConnectRole) -> bool;

/// Routable edge that can serve as an endpoint itself.
///
/// Associations, includes, extends and generalizations all materialize as
/// this variant.
#[derive(Debug)]
pub struct ConnectableEdge {
	id: String,
	type_id: String,
	children: Vec<Box<dyn Element>>,
	policy: Option<ConnectPolicy>,
	/// Whether the edge is part of the selection.
	pub selected: bool,
	/// Whether hover feedback is currently shown.
	pub hover_feedback: bool,
	/// Render opacity, 0.0..=1.0.
	pub opacity: f32,
}

impl ConnectableEdge {
	/// Variant constructor for the type binding registry.
	pub fn construct(seed: ElementSeed) -> Box<dyn Element> {
		Box::new(Self {
			id: seed.id,
			type_id: seed.type_id,
			children: seed.children,
			policy: None,
			selected: false,
			hover_feedback: true,
			opacity: 1.0,
		})
	}

	/// Installs a structural endpoint rule.
	///
	/// Without one, [`Connectable::can_connect`] is permissive for every peer
	/// and role. No shipped variant installs a policy yet; this is the hook
	/// for rules like rejecting self-loops or enforcing type compatibility.
	pub fn with_policy(mut self: Box<Self>, policy: ConnectPolicy) -> Box<Self> {
		self.policy = Some(policy);
		self
	}
}

impl Connectable for ConnectableEdge {
	fn can_connect(&self, peer: &dyn Element, role: ConnectRole) -> bool {
		match self.policy {
			Some(policy) => policy(peer, role),
			None => true,
		}
	}
}

impl Element for ConnectableEdge {
	fn id(&self) -> &str {
		&self.id
	}

	fn type_id(&self) -> &str {
		&self.type_id
	}

	fn capabilities(&self) -> CapabilitySet {
		CONNECTABLE_EDGE_CAPS
	}

	fn children(&self) -> &[Box<dyn Element>] {
		&self.children
	}

	fn children_mut(&mut self) -> &mut [Box<dyn Element>] {
		&mut self.children
	}

	fn connectable(&self) -> Option<&dyn Connectable> {
		Some(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::capability::Capability;
	use crate::types;
	use crate::variants::LabeledNode;

	/// The default endpoint policy admits any peer in either role.
	#[test]
	fn test_can_connect_is_permissive_by_default() {
		let edge = ConnectableEdge::construct(ElementSeed::new("e1", types::ASSOCIATION));
		let peer = LabeledNode::construct(ElementSeed::new("n1", types::CLASS));

		let connectable = edge.connectable().expect("edge supports connectable");
		assert!(connectable.can_connect(peer.as_ref(), ConnectRole::Source));
		assert!(connectable.can_connect(peer.as_ref(), ConnectRole::Target));
	}

	#[test]
	fn test_policy_hook_overrides_default() {
		let edge = ConnectableEdge {
			id: "e2".into(),
			type_id: types::GENERALIZATION.into(),
			children: Vec::new(),
			policy: None,
			selected: false,
			hover_feedback: true,
			opacity: 1.0,
		};
		let edge = Box::new(edge).with_policy(|_, role| role == ConnectRole::Source);
		let peer = LabeledNode::construct(ElementSeed::new("n1", types::CLASS));

		assert!(edge.can_connect(peer.as_ref(), ConnectRole::Source));
		assert!(!edge.can_connect(peer.as_ref(), ConnectRole::Target));
	}

	#[test]
	fn test_edge_capabilities() {
		let edge = ConnectableEdge::construct(ElementSeed::new("e3", types::INCLUDE));
		assert!(edge.supports(Capability::Connectable));
		assert!(edge.supports(Capability::Edit));
		assert!(edge.supports(Capability::Delete));
		assert!(!edge.supports(Capability::EditableLabel));
	}
}

//! Structural shapes: icons, compartments, the graph root, routing handles,
//! and the placeholder for unresolvable elements.

use crate::capability::CapabilitySet;
use crate::element::{Element, ElementSeed};
use crate::variants::SHAPE_CAPS;

/// Capabilities of [`Icon`].
pub const ICON_CAPS: CapabilitySet = SHAPE_CAPS;

/// Capabilities of [`Compartment`].
pub const COMPARTMENT_CAPS: CapabilitySet = SHAPE_CAPS;

/// Capabilities of [`Graph`].
pub const GRAPH_CAPS: CapabilitySet =
	CapabilitySet::BOUNDS.union(CapabilitySet::LAYOUT_CONTAINER);

/// Capabilities of [`RoutingHandle`].
pub const ROUTING_HANDLE_CAPS: CapabilitySet =
	CapabilitySet::SELECT.union(CapabilitySet::MOVE);

/// Capabilities of [`Placeholder`].
pub const PLACEHOLDER_CAPS: CapabilitySet = CapabilitySet::BOUNDS.union(CapabilitySet::FADE);

/// Decorative image shape inside a node header.
///
/// Icons build on the shape base, not the node base: they are not selectable
/// or deletable on their own and go wherever their host node goes, so they
/// carry exactly the layout/fade behavior of a shape.
#[derive(Debug)]
pub struct Icon {
	id: String,
	type_id: String,
	/// Image asset drawn for this icon.
	pub icon_image: &'static str,
	/// Render opacity, 0.0..=1.0.
	pub opacity: f32,
}

impl Icon {
	/// Variant constructor for class icons.
	pub fn construct_class(seed: ElementSeed) -> Box<dyn Element> {
		Self::with_image(seed, "Class.svg")
	}

	/// Variant constructor for package icons.
	pub fn construct_package(seed: ElementSeed) -> Box<dyn Element> {
		Self::with_image(seed, "Package.gif")
	}

	/// Variant constructor for use case icons.
	pub fn construct_usecase(seed: ElementSeed) -> Box<dyn Element> {
		Self::with_image(seed, "UseCase.gif")
	}

	/// Variant constructor for actor icons.
	///
	/// TODO: ship dedicated actor artwork; the class glyph stands in until
	/// the icon set gains one.
	pub fn construct_actor(seed: ElementSeed) -> Box<dyn Element> {
		Self::with_image(seed, "Class.svg")
	}

	fn with_image(seed: ElementSeed, icon_image: &'static str) -> Box<dyn Element> {
		Box::new(Self {
			id: seed.id,
			type_id: seed.type_id,
			icon_image,
			opacity: 1.0,
		})
	}
}

impl Element for Icon {
	fn id(&self) -> &str {
		&self.id
	}

	fn type_id(&self) -> &str {
		&self.type_id
	}

	fn capabilities(&self) -> CapabilitySet {
		ICON_CAPS
	}
}

/// Structural container grouping labels and rows inside a node.
#[derive(Debug)]
pub struct Compartment {
	id: String,
	type_id: String,
	children: Vec<Box<dyn Element>>,
}

impl Compartment {
	/// Variant constructor for the type binding registry.
	pub fn construct(seed: ElementSeed) -> Box<dyn Element> {
		Box::new(Self {
			id: seed.id,
			type_id: seed.type_id,
			children: seed.children,
		})
	}
}

impl Element for Compartment {
	fn id(&self) -> &str {
		&self.id
	}

	fn type_id(&self) -> &str {
		&self.type_id
	}

	fn capabilities(&self) -> CapabilitySet {
		COMPARTMENT_CAPS
	}

	fn children(&self) -> &[Box<dyn Element>] {
		&self.children
	}

	fn children_mut(&mut self) -> &mut [Box<dyn Element>] {
		&mut self.children
	}
}

/// Diagram root element.
#[derive(Debug)]
pub struct Graph {
	id: String,
	type_id: String,
	children: Vec<Box<dyn Element>>,
}

impl Graph {
	/// Variant constructor for the type binding registry.
	pub fn construct(seed: ElementSeed) -> Box<dyn Element> {
		Box::new(Self {
			id: seed.id,
			type_id: seed.type_id,
			children: seed.children,
		})
	}
}

impl Element for Graph {
	fn id(&self) -> &str {
		&self.id
	}

	fn type_id(&self) -> &str {
		&self.type_id
	}

	fn capabilities(&self) -> CapabilitySet {
		GRAPH_CAPS
	}

	fn children(&self) -> &[Box<dyn Element>] {
		&self.children
	}

	fn children_mut(&mut self) -> &mut [Box<dyn Element>] {
		&mut self.children
	}
}

/// Draggable handle on an edge route.
#[derive(Debug)]
pub struct RoutingHandle {
	id: String,
	type_id: String,
	/// Whether the handle is part of the selection.
	pub selected: bool,
}

impl RoutingHandle {
	/// Variant constructor for the type binding registry.
	pub fn construct(seed: ElementSeed) -> Box<dyn Element> {
		Box::new(Self {
			id: seed.id,
			type_id: seed.type_id,
			selected: false,
		})
	}
}

impl Element for RoutingHandle {
	fn id(&self) -> &str {
		&self.id
	}

	fn type_id(&self) -> &str {
		&self.type_id
	}

	fn capabilities(&self) -> CapabilitySet {
		ROUTING_HANDLE_CAPS
	}
}

/// Error marker substituted for elements whose type id no loaded module
/// declared.
///
/// Materialization degrades to this variant per element instead of aborting
/// the document load; the offending type id is kept for display.
#[derive(Debug)]
pub struct Placeholder {
	id: String,
	type_id: String,
	children: Vec<Box<dyn Element>>,
}

impl Placeholder {
	/// Constructs a placeholder preserving the unresolved type id and any
	/// children that did materialize.
	pub fn construct(seed: ElementSeed) -> Box<dyn Element> {
		Box::new(Self {
			id: seed.id,
			type_id: seed.type_id,
			children: seed.children,
		})
	}

	/// The type id that failed to resolve.
	pub fn unresolved_type(&self) -> &str {
		&self.type_id
	}
}

impl Element for Placeholder {
	fn id(&self) -> &str {
		&self.id
	}

	fn type_id(&self) -> &str {
		&self.type_id
	}

	fn capabilities(&self) -> CapabilitySet {
		PLACEHOLDER_CAPS
	}

	fn children(&self) -> &[Box<dyn Element>] {
		&self.children
	}

	fn children_mut(&mut self) -> &mut [Box<dyn Element>] {
		&mut self.children
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::capability::Capability;
	use crate::types;

	/// Icons carry the shape base set verbatim; nothing node-like sneaks in.
	#[test]
	fn test_icon_is_layout_only() {
		let icon = Icon::construct_class(ElementSeed::new("i1", types::ICON_CLASS));
		assert_eq!(icon.capabilities(), crate::variants::SHAPE_CAPS);
		assert!(icon.supports(Capability::Bounds));
		assert!(icon.supports(Capability::LayoutableChild));
		assert!(icon.supports(Capability::Fade));
		assert!(!icon.supports(Capability::Select));
		assert!(!icon.supports(Capability::Delete));
	}

	#[test]
	fn test_placeholder_keeps_offending_type() {
		let ph = Placeholder {
			id: "x1".into(),
			type_id: "node:unknown".into(),
			children: Vec::new(),
		};
		assert_eq!(ph.unresolved_type(), "node:unknown");
		assert!(ph.supports(Capability::Bounds));
		assert!(!ph.supports(Capability::Select));
	}
}

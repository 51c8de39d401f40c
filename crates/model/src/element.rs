//! The element trait and capability accessor surface.
//!
//! Tools, feedback layers and the rendering collaborator interact with
//! diagram elements exclusively through [`Element`]: they query
//! [`Element::supports`] and then use the matching accessor. They must never
//! downcast to a concrete variant type; doing so would bypass the module
//! override model (a feature module may rebind a type id to a different
//! variant at assembly time).
//!
//! Accessors return `Option`, so "check `supports` then call" collapses into
//! one fallible call: an accessor returns `Some` exactly when the backing
//! capability is in the variant's set.

use core::fmt;

use crate::capability::{Capability, CapabilitySet};

/// Role a connectable element plays for a prospective edge endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectRole {
	/// The element would be the edge's source.
	Source,
	/// The element would be the edge's target.
	Target,
}

/// Text payload of an editable label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelText {
	/// Current label text.
	pub text: String,
	/// Whether the label edit widget should allow line breaks.
	pub is_multiline: bool,
}

impl LabelText {
	/// Creates a single-line label payload.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			is_multiline: false,
		}
	}

	/// Creates a multi-line label payload.
	pub fn multiline(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			is_multiline: true,
		}
	}
}

/// Endpoint admission predicate for connectable elements.
///
/// Pure: evaluated by the connection tool before an edge endpoint attaches,
/// with no side effects on either element.
pub trait Connectable {
	/// Returns true if `peer` may attach to this element in `role`.
	///
	/// The baseline policy is permissive. Variants that need structural rules
	/// (no self-loops, type compatibility) install a policy hook; none of the
	/// shipped variants do yet.
	fn can_connect(&self, peer: &dyn Element, role: ConnectRole) -> bool;
}

/// One live diagram element.
///
/// A variant's capability set is computed once at variant definition time and
/// is identical for every instance; only payload fields (text, selection,
/// hover, opacity) mutate during a session, and only under external tools.
/// Capability queries borrow, they never take ownership.
pub trait Element: fmt::Debug {
	/// Instance identifier from the document.
	fn id(&self) -> &str;

	/// Symbolic type identifier this instance was materialized from.
	fn type_id(&self) -> &str;

	/// The variant's static capability set.
	fn capabilities(&self) -> CapabilitySet;

	/// Returns true if this element supports `cap`.
	///
	/// Pure membership test over [`Element::capabilities`]; variants never
	/// override it, which keeps capability sets monotonic under composition.
	fn supports(&self, cap: Capability) -> bool {
		self.capabilities().contains(cap.as_set())
	}

	/// Child elements in the containment tree.
	fn children(&self) -> &[Box<dyn Element>] {
		&[]
	}

	/// Mutable access to the containment tree.
	fn children_mut(&mut self) -> &mut [Box<dyn Element>] {
		&mut []
	}

	/// The editable label payload, for variants supporting
	/// [`Capability::EditableLabel`] or [`Capability::WithEditableLabel`].
	fn editable_label(&self) -> Option<&LabelText> {
		None
	}

	/// Mutable access to the editable label payload.
	fn editable_label_mut(&mut self) -> Option<&mut LabelText> {
		None
	}

	/// The endpoint predicate, for variants supporting
	/// [`Capability::Connectable`].
	fn connectable(&self) -> Option<&dyn Connectable> {
		None
	}

	/// Human-readable name, for variants supporting [`Capability::Name`].
	fn name(&self) -> Option<&str> {
		None
	}
}

/// Construction input for one element variant.
///
/// The materialization boundary resolves a raw document element's type id,
/// materializes its children, and hands the rest to the variant constructor
/// as a seed.
#[derive(Debug)]
pub struct ElementSeed {
	/// Instance identifier from the document.
	pub id: String,
	/// Symbolic type identifier being materialized.
	pub type_id: String,
	/// Optional text payload (labels).
	pub text: Option<String>,
	/// Already-materialized children.
	pub children: Vec<Box<dyn Element>>,
}

impl ElementSeed {
	/// Creates a childless seed, mostly useful in tests.
	pub fn new(id: impl Into<String>, type_id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			type_id: type_id.into(),
			text: None,
			children: Vec::new(),
		}
	}

	/// Sets the text payload.
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.text = Some(text.into());
		self
	}

	/// Appends a child element.
	pub fn with_child(mut self, child: Box<dyn Element>) -> Self {
		self.children.push(child);
		self
	}
}

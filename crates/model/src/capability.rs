//! Capability tokens and capability sets.
//!
//! A capability names one orthogonal runtime behavior a diagram element may
//! support (selection, deletion, label editing, edge attachment, ...). Tools
//! and feedback layers query elements through [`Element::supports`] instead of
//! matching on concrete variant types, so the token set is the entire contract
//! between the model and its collaborators.
//!
//! Tokens are a closed enum: adding a behavior means adding a variant here and
//! a bit in [`CapabilitySet`]. Conflicting declarations of the same name are
//! therefore unrepresentable, and token equality is plain identity equality.
//!
//! [`Element::supports`]: crate::element::Element::supports

/// One runtime behavior a diagram element may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
	/// Element can be part of the selection.
	Select,
	/// Element can be removed from the diagram.
	Delete,
	/// Element's route can be edited (edges).
	Edit,
	/// Element is itself an editable text label.
	EditableLabel,
	/// Element owns a nested editable label (composite nodes).
	WithEditableLabel,
	/// Element can serve as an edge endpoint.
	Connectable,
	/// Element participates in fade in/out animations.
	Fade,
	/// Element shows hover feedback.
	HoverFeedback,
	/// Element reports bounds to the layout engine.
	Bounds,
	/// Element can be aligned relative to its siblings.
	Alignable,
	/// Element lays out its children (layout container).
	LayoutContainer,
	/// Element is positioned by its parent's layout.
	LayoutableChild,
	/// Element contributes a hover popup.
	Popup,
	/// Element can be dragged to a new position.
	Move,
	/// Element exposes a human-readable name.
	Name,
}

bitflags::bitflags! {
	/// A set of element capabilities.
	///
	/// Variant capability sets are `const`-composed from base sets at
	/// definition time; instances never grow or shrink their set.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct CapabilitySet: u32 {
		/// Element can be part of the selection.
		const SELECT = 1 << 0;
		/// Element can be removed from the diagram.
		const DELETE = 1 << 1;
		/// Element's route can be edited.
		const EDIT = 1 << 2;
		/// Element is itself an editable text label.
		const EDITABLE_LABEL = 1 << 3;
		/// Element owns a nested editable label.
		const WITH_EDITABLE_LABEL = 1 << 4;
		/// Element can serve as an edge endpoint.
		const CONNECTABLE = 1 << 5;
		/// Element participates in fade animations.
		const FADE = 1 << 6;
		/// Element shows hover feedback.
		const HOVER_FEEDBACK = 1 << 7;
		/// Element reports bounds to the layout engine.
		const BOUNDS = 1 << 8;
		/// Element can be aligned relative to its siblings.
		const ALIGNABLE = 1 << 9;
		/// Element lays out its children.
		const LAYOUT_CONTAINER = 1 << 10;
		/// Element is positioned by its parent's layout.
		const LAYOUTABLE_CHILD = 1 << 11;
		/// Element contributes a hover popup.
		const POPUP = 1 << 12;
		/// Element can be dragged to a new position.
		const MOVE = 1 << 13;
		/// Element exposes a human-readable name.
		const NAME = 1 << 14;
	}
}

impl Capability {
	/// Returns the bitflag for this capability.
	pub const fn as_set(self) -> CapabilitySet {
		match self {
			Self::Select => CapabilitySet::SELECT,
			Self::Delete => CapabilitySet::DELETE,
			Self::Edit => CapabilitySet::EDIT,
			Self::EditableLabel => CapabilitySet::EDITABLE_LABEL,
			Self::WithEditableLabel => CapabilitySet::WITH_EDITABLE_LABEL,
			Self::Connectable => CapabilitySet::CONNECTABLE,
			Self::Fade => CapabilitySet::FADE,
			Self::HoverFeedback => CapabilitySet::HOVER_FEEDBACK,
			Self::Bounds => CapabilitySet::BOUNDS,
			Self::Alignable => CapabilitySet::ALIGNABLE,
			Self::LayoutContainer => CapabilitySet::LAYOUT_CONTAINER,
			Self::LayoutableChild => CapabilitySet::LAYOUTABLE_CHILD,
			Self::Popup => CapabilitySet::POPUP,
			Self::Move => CapabilitySet::MOVE,
			Self::Name => CapabilitySet::NAME,
		}
	}

	/// Returns the canonical name of this capability.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Select => "select",
			Self::Delete => "delete",
			Self::Edit => "edit",
			Self::EditableLabel => "editable-label",
			Self::WithEditableLabel => "with-editable-label",
			Self::Connectable => "connectable",
			Self::Fade => "fade",
			Self::HoverFeedback => "hover-feedback",
			Self::Bounds => "bounds",
			Self::Alignable => "alignable",
			Self::LayoutContainer => "layout-container",
			Self::LayoutableChild => "layoutable-child",
			Self::Popup => "popup",
			Self::Move => "move",
			Self::Name => "name",
		}
	}

	/// Looks up a capability by its canonical name.
	///
	/// The same name always resolves to the same token; an unknown name is a
	/// configuration error at the call site, not a new declaration.
	pub fn from_name(name: &str) -> Option<Self> {
		ALL.iter().copied().find(|cap| cap.name() == name)
	}
}

/// Every declared capability, in bit order.
pub const ALL: &[Capability] = &[
	Capability::Select,
	Capability::Delete,
	Capability::Edit,
	Capability::EditableLabel,
	Capability::WithEditableLabel,
	Capability::Connectable,
	Capability::Fade,
	Capability::HoverFeedback,
	Capability::Bounds,
	Capability::Alignable,
	Capability::LayoutContainer,
	Capability::LayoutableChild,
	Capability::Popup,
	Capability::Move,
	Capability::Name,
];

impl From<Capability> for CapabilitySet {
	fn from(cap: Capability) -> Self {
		cap.as_set()
	}
}

impl FromIterator<Capability> for CapabilitySet {
	fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
		let mut set = CapabilitySet::empty();
		for cap in iter {
			set |= cap.as_set();
		}
		set
	}
}

impl core::fmt::Display for Capability {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// The same name always resolves to the same token; distinct names to
	/// distinct tokens.
	#[test]
	fn test_from_name_identity() {
		let a = Capability::from_name("editable-label").expect("known capability");
		let b = Capability::from_name("editable-label").expect("known capability");
		assert_eq!(a, b);

		let c = Capability::from_name("connectable").expect("known capability");
		assert_ne!(a, c);

		assert_eq!(Capability::from_name("no-such-capability"), None);
	}

	/// Every token round-trips through its canonical name and maps to a
	/// distinct bit.
	#[test]
	fn test_token_bits_are_distinct() {
		let mut seen = CapabilitySet::empty();
		for cap in ALL.iter().copied() {
			assert_eq!(Capability::from_name(cap.name()), Some(cap));
			assert!(
				!seen.intersects(cap.as_set()),
				"{cap} shares a bit with an earlier token"
			);
			seen |= cap.as_set();
		}
	}

	#[test]
	fn test_set_from_iterator() {
		let set: CapabilitySet = [Capability::Select, Capability::Delete].into_iter().collect();
		assert!(set.contains(CapabilitySet::SELECT | CapabilitySet::DELETE));
		assert!(!set.contains(CapabilitySet::FADE));
	}
}

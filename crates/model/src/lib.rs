//! Diagram element model: capability composition and element variants.
//!
//! This crate defines what a diagram element *is* at runtime: a variant with
//! a fixed, statically composed capability set, queried polymorphically
//! through [`Element::supports`] and capability accessors. Type-id binding
//! and feature-module assembly live in `trellis-registry`; rendering, layout
//! and synchronization are external collaborators that consume this surface.
//!
//! # Modules
//!
//! - [`capability`] - Capability tokens and bit sets
//! - [`element`] - The [`Element`] trait and accessor contracts
//! - [`variants`] - Concrete node/edge/label/shape variants
//! - [`raw`] - Serialized document element (materialization input)
//! - [`types`] - Symbolic type identifier vocabulary

pub mod capability;
pub mod element;
pub mod raw;
pub mod types;
pub mod variants;

pub use capability::{Capability, CapabilitySet};
pub use element::{Connectable, ConnectRole, Element, ElementSeed, LabelText};
pub use raw::RawElement;
pub use variants::{
	Compartment, ConnectPolicy, ConnectableEdge, ConnectableEditableLabel, ConnectionPoint,
	EditableLabel, Graph, Icon, LabelNode, LabeledNode, Placeholder, RoutingHandle, StaticLabel,
};

//! Type binding registry.
//!
//! Maps symbolic type identifiers to the variant constructor and renderer id
//! used to materialize and draw them. Populated through the
//! [`ContextBuilder`] during assembly, frozen afterwards: registration for a
//! type id that is already bound replaces the earlier binding
//! (last-writer-wins), which is the mechanism feature modules use to
//! override base behavior.
//!
//! [`ContextBuilder`]: crate::assemble::ContextBuilder

use rustc_hash::FxHashMap;
use trellis_model::{Element, ElementSeed};

use crate::error::{AssembleError, ResolveError};

/// Constructs one variant instance from a materialization seed.
pub type ElementCtor = fn(ElementSeed) -> Box<dyn Element>;

/// One entry of the type binding registry.
#[derive(Clone, Copy)]
pub struct TypeBinding {
	/// Symbolic type identifier, unique within one assembled registry.
	pub type_id: &'static str,
	/// Variant constructor invoked at materialization.
	pub ctor: ElementCtor,
	/// Renderer identifier handed to the rendering collaborator. Guaranteed
	/// non-empty for every binding an assembled registry returns.
	pub renderer: &'static str,
}

impl TypeBinding {
	/// Creates a new binding entry.
	pub const fn new(type_id: &'static str, ctor: ElementCtor, renderer: &'static str) -> Self {
		Self {
			type_id,
			ctor,
			renderer,
		}
	}
}

impl core::fmt::Debug for TypeBinding {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("TypeBinding")
			.field("type_id", &self.type_id)
			.field("renderer", &self.renderer)
			.finish()
	}
}

/// Accumulates bindings during assembly.
#[derive(Debug, Default)]
pub(crate) struct TypeRegistryBuilder {
	bindings: FxHashMap<&'static str, TypeBinding>,
}

impl TypeRegistryBuilder {
	/// Inserts a binding, replacing any existing binding for the same type id.
	///
	/// Empty ids are fatal configuration errors: catching them here keeps the
	/// resolve-side guarantee that a returned renderer id is never empty.
	pub(crate) fn register(&mut self, binding: TypeBinding) -> Result<(), AssembleError> {
		if binding.type_id.is_empty() {
			return Err(AssembleError::EmptyTypeId {
				renderer: binding.renderer,
			});
		}
		if binding.renderer.is_empty() {
			return Err(AssembleError::EmptyRenderer {
				type_id: binding.type_id,
			});
		}
		if let Some(previous) = self.bindings.insert(binding.type_id, binding) {
			tracing::debug!(
				type_id = binding.type_id,
				previous = previous.renderer,
				renderer = binding.renderer,
				"type binding overridden"
			);
		}
		Ok(())
	}

	pub(crate) fn freeze(self) -> TypeRegistry {
		TypeRegistry {
			bindings: self.bindings,
		}
	}
}

/// Frozen type binding registry of an assembled runtime context.
///
/// Read-only for the rest of the session; resolution never mutates.
#[derive(Debug)]
pub struct TypeRegistry {
	bindings: FxHashMap<&'static str, TypeBinding>,
}

impl TypeRegistry {
	/// Looks up the binding for `type_id`.
	///
	/// An unknown id is a recoverable error the materialization boundary
	/// turns into a placeholder element; it never panics.
	pub fn resolve(&self, type_id: &str) -> Result<&TypeBinding, ResolveError> {
		self.bindings.get(type_id).ok_or_else(|| ResolveError::UnknownType {
			type_id: type_id.to_string(),
		})
	}

	/// Returns true if `type_id` is bound.
	pub fn contains(&self, type_id: &str) -> bool {
		self.bindings.contains_key(type_id)
	}

	/// Number of bound type ids.
	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	/// Returns true if no type ids are bound.
	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}

	/// Iterates over all bindings, in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = &TypeBinding> {
		self.bindings.values()
	}
}

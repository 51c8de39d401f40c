//! Materialization boundary: serialized elements to live variants.
//!
//! This is where resolution errors are allowed to happen and required to be
//! contained: an element whose type id no loaded module declared degrades to
//! a [`Placeholder`] and is reported per element, while the rest of the
//! document loads normally.

use rustc_hash::FxHashMap;
use trellis_model::{Element, ElementSeed, Placeholder, RawElement};

use crate::assemble::RuntimeContext;
use crate::error::MaterializeError;

/// Renderer id used for placeholder elements, kept registered-by-convention
/// so the outbound renderer contract holds for degraded elements too.
pub const PLACEHOLDER_RENDERER: &str = "PlaceholderView";

/// One materialized element paired with the renderer id the rendering
/// collaborator should look up.
#[derive(Debug)]
pub struct MaterializedElement {
	/// The live element instance, owning its materialized children.
	pub element: Box<dyn Element>,
	/// Renderer identifier from the element's type binding; never empty.
	pub renderer: &'static str,
}

/// Result of materializing one document tree.
#[derive(Debug)]
pub struct MaterializedDocument {
	/// The document root.
	pub root: MaterializedElement,
	/// Renderer pairing for every element in the tree, keyed by element id.
	/// Degraded elements pair with [`PLACEHOLDER_RENDERER`].
	renderers: FxHashMap<String, &'static str>,
	/// Per-element degradation reports, in document order. Empty when every
	/// type id resolved.
	pub errors: Vec<MaterializeError>,
}

impl MaterializedDocument {
	/// Returns true if every element resolved to a registered binding.
	pub fn is_clean(&self) -> bool {
		self.errors.is_empty()
	}

	/// Renderer id paired with the element of the given id.
	///
	/// Defined for every element in the tree, placeholder substitutes
	/// included; no second registry lookup is needed for nested elements.
	pub fn renderer_of(&self, element_id: &str) -> Option<&'static str> {
		self.renderers.get(element_id).copied()
	}
}

/// Materializes a raw document tree against an assembled context.
///
/// Children are materialized before their parent and handed to the parent
/// variant's constructor as part of its seed. Each element's renderer pairing
/// is recorded on the document ([`MaterializedDocument::renderer_of`]) as it
/// resolves, so degraded elements keep a usable renderer id even though their
/// unresolved type id is not in the registry.
pub fn materialize(ctx: &RuntimeContext, raw: RawElement) -> MaterializedDocument {
	let mut renderers = FxHashMap::default();
	let mut errors = Vec::new();
	let root = materialize_element(ctx, raw, &mut renderers, &mut errors);
	MaterializedDocument {
		root,
		renderers,
		errors,
	}
}

fn materialize_element(
	ctx: &RuntimeContext,
	raw: RawElement,
	renderers: &mut FxHashMap<String, &'static str>,
	errors: &mut Vec<MaterializeError>,
) -> MaterializedElement {
	let RawElement {
		id,
		element_type,
		text,
		children,
	} = raw;

	let children = children
		.into_iter()
		.map(|child| materialize_element(ctx, child, renderers, errors).element)
		.collect();

	let seed = ElementSeed {
		id,
		type_id: element_type,
		text,
		children,
	};

	match ctx.types().resolve(&seed.type_id) {
		Ok(binding) => {
			renderers.insert(seed.id.clone(), binding.renderer);
			MaterializedElement {
				element: (binding.ctor)(seed),
				renderer: binding.renderer,
			}
		}
		Err(source) => {
			tracing::warn!(
				element = seed.id.as_str(),
				type_id = seed.type_id.as_str(),
				"unknown element type, substituting placeholder"
			);
			errors.push(MaterializeError {
				element_id: seed.id.clone(),
				source,
			});
			renderers.insert(seed.id.clone(), PLACEHOLDER_RENDERER);
			MaterializedElement {
				element: Placeholder::construct(seed),
				renderer: PLACEHOLDER_RENDERER,
			}
		}
	}
}

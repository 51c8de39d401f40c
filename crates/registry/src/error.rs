//! Error taxonomy for assembly, resolution and materialization.
//!
//! Assembly errors are configuration errors: they halt startup and are never
//! raised once a [`RuntimeContext`] exists. Resolution errors are recoverable
//! and reported per element at the materialization boundary.
//!
//! [`RuntimeContext`]: crate::assemble::RuntimeContext

use thiserror::Error;

/// Fatal configuration error raised while assembling feature modules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
	/// A module's registration function failed.
	#[error("module `{module}`: {source}")]
	Module {
		/// Name of the failing module.
		module: &'static str,
		/// Underlying configuration error.
		#[source]
		source: Box<AssembleError>,
	},
	/// A type binding was registered with an empty type id.
	#[error("type binding with empty type id (renderer `{renderer}`)")]
	EmptyTypeId {
		/// Renderer id of the offending binding.
		renderer: &'static str,
	},
	/// A type binding was registered with an empty renderer id.
	#[error("type binding for `{type_id}` has an empty renderer id")]
	EmptyRenderer {
		/// Type id of the offending binding.
		type_id: &'static str,
	},
}

impl AssembleError {
	/// Attaches the failing module's name, unless one is already attached.
	pub(crate) fn in_module(self, module: &'static str) -> Self {
		match self {
			err @ Self::Module { .. } => err,
			other => Self::Module {
				module,
				source: Box::new(other),
			},
		}
	}
}

/// Recoverable lookup failure against the assembled type registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
	/// The document referenced a type id no loaded module declared.
	#[error("no type binding for `{type_id}`")]
	UnknownType {
		/// The unresolved type id.
		type_id: String,
	},
}

/// Per-element failure report from the materialization boundary.
///
/// Carried alongside the degraded document, never thrown: a malformed
/// element must not abort the load of its siblings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("element `{element_id}`: {source}")]
pub struct MaterializeError {
	/// Id of the element that degraded to a placeholder.
	pub element_id: String,
	/// The resolution failure behind the degradation.
	#[source]
	pub source: ResolveError,
}

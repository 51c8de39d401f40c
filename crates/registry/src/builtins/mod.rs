//! Builtin feature modules.
//!
//! The shipped diagram vocabulary, split into independently loadable
//! modules: structural base types, class diagrams, use case diagrams. The
//! host assembles them (plus any of its own modules) in the order returned
//! by [`default_modules`]; a module appended after these may rebind any type
//! id to change its variant or renderer.

mod base;
mod class_diagram;
mod use_case_diagram;

pub use base::BASE;
pub use class_diagram::CLASS_DIAGRAM;
pub use use_case_diagram::USE_CASE_DIAGRAM;

use crate::module::FeatureModule;

/// The builtin modules in their intended load order.
pub fn default_modules() -> [FeatureModule; 3] {
	[BASE, CLASS_DIAGRAM, USE_CASE_DIAGRAM]
}

//! Feature module descriptor.

use crate::assemble::ContextBuilder;
use crate::error::AssembleError;

/// A named, independently testable unit of registration logic.
///
/// A module contributes type bindings and service singletons by mutating the
/// builder it is handed; it holds no state of its own and observes the
/// cumulative registrations of every module assembled before it. Registering
/// a type id an earlier module already bound is the supported way to
/// override that module's behavior.
pub struct FeatureModule {
	/// Module name, attached to configuration errors.
	pub name: &'static str,
	/// Registration function run once during assembly.
	pub register: fn(&mut ContextBuilder) -> Result<(), AssembleError>,
}

impl FeatureModule {
	/// Creates a new module descriptor.
	pub const fn new(
		name: &'static str,
		register: fn(&mut ContextBuilder) -> Result<(), AssembleError>,
	) -> Self {
		Self { name, register }
	}
}

impl core::fmt::Debug for FeatureModule {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("FeatureModule").field("name", &self.name).finish()
	}
}

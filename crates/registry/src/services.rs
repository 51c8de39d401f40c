//! Session-scoped service singletons.
//!
//! Feature modules publish singleton values (viewer options, feedback
//! providers, logger choices) keyed by their Rust type. Binding the same
//! type twice is override, not error, mirroring the type binding registry:
//! a later module deliberately replaces a base module's service.

use std::any::{Any, TypeId, type_name};

use rustc_hash::FxHashMap;

/// Accumulates service bindings during assembly.
#[derive(Default)]
pub(crate) struct ServiceMapBuilder {
	entries: FxHashMap<TypeId, Box<dyn Any>>,
}

impl core::fmt::Debug for ServiceMapBuilder {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("ServiceMapBuilder")
			.field("len", &self.entries.len())
			.finish()
	}
}

impl ServiceMapBuilder {
	/// Binds a singleton, replacing any earlier binding of the same type.
	pub(crate) fn bind<T: Any>(&mut self, service: T) {
		if self.entries.insert(TypeId::of::<T>(), Box::new(service)).is_some() {
			tracing::debug!(service = type_name::<T>(), "service binding overridden");
		}
	}

	pub(crate) fn freeze(self) -> ServiceMap {
		ServiceMap {
			entries: self.entries,
		}
	}
}

/// Frozen service singletons of an assembled runtime context.
#[derive(Default)]
pub struct ServiceMap {
	entries: FxHashMap<TypeId, Box<dyn Any>>,
}

impl core::fmt::Debug for ServiceMap {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("ServiceMap").field("len", &self.entries.len()).finish()
	}
}

impl ServiceMap {
	/// Returns the bound singleton of type `T`, if any module published one.
	pub fn get<T: Any>(&self) -> Option<&T> {
		self.entries.get(&TypeId::of::<T>()).and_then(|b| b.downcast_ref())
	}

	/// Returns true if a singleton of type `T` is bound.
	pub fn contains<T: Any>(&self) -> bool {
		self.entries.contains_key(&TypeId::of::<T>())
	}

	/// Number of bound services.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no services are bound.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Viewer configuration published by the base module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerOptions {
	/// Whether layout runs on the client rather than the model server.
	pub needs_client_layout: bool,
	/// DOM id of the host container the diagram mounts into.
	pub base_div: String,
}

impl Default for ViewerOptions {
	fn default() -> Self {
		Self {
			needs_client_layout: true,
			base_div: "diagram".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, PartialEq)]
	struct LogSink(&'static str);

	#[test]
	fn test_bind_and_get() {
		let mut builder = ServiceMapBuilder::default();
		builder.bind(ViewerOptions::default());
		builder.bind(LogSink("console"));

		let services = builder.freeze();
		assert_eq!(services.len(), 2);
		assert!(services.contains::<ViewerOptions>());
		assert_eq!(services.get::<LogSink>(), Some(&LogSink("console")));
		assert_eq!(services.get::<String>(), None);
	}

	/// A later binding of the same service type replaces the earlier one.
	#[test]
	fn test_rebind_overrides() {
		let mut builder = ServiceMapBuilder::default();
		builder.bind(LogSink("console"));
		builder.bind(LogSink("file"));

		let services = builder.freeze();
		assert_eq!(services.len(), 1);
		assert_eq!(services.get::<LogSink>(), Some(&LogSink("file")));
	}
}

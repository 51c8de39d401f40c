//! Module composition: assembling feature modules into a runtime context.

use std::any::Any;

use crate::bindings::{ElementCtor, TypeBinding, TypeRegistry, TypeRegistryBuilder};
use crate::error::AssembleError;
use crate::module::FeatureModule;
use crate::services::{ServiceMap, ServiceMapBuilder};

/// Mutable registration surface handed to feature modules.
///
/// Each module sees the cumulative state left by its predecessors, which is
/// what makes assembly order the override mechanism.
#[derive(Debug, Default)]
pub struct ContextBuilder {
	types: TypeRegistryBuilder,
	services: ServiceMapBuilder,
}

impl ContextBuilder {
	/// Binds `type_id` to a variant constructor and renderer, replacing any
	/// earlier binding for the same id.
	pub fn register_element(
		&mut self,
		type_id: &'static str,
		ctor: ElementCtor,
		renderer: &'static str,
	) -> Result<(), AssembleError> {
		self.types.register(TypeBinding::new(type_id, ctor, renderer))
	}

	/// Publishes a service singleton, replacing any earlier binding of the
	/// same type.
	pub fn bind_service<T: Any>(&mut self, service: T) {
		self.services.bind(service);
	}

	fn freeze(self) -> RuntimeContext {
		RuntimeContext {
			types: self.types.freeze(),
			services: self.services.freeze(),
		}
	}
}

/// The assembled, immutable runtime context of one editor session.
///
/// Created once at startup, read-only until the editor view is disposed.
/// Nothing in it is persisted; the diagram document itself lives with the
/// external synchronization collaborator.
#[derive(Debug)]
pub struct RuntimeContext {
	types: TypeRegistry,
	services: ServiceMap,
}

impl RuntimeContext {
	/// The type binding registry.
	pub fn types(&self) -> &TypeRegistry {
		&self.types
	}

	/// The service singletons.
	pub fn services(&self) -> &ServiceMap {
		&self.services
	}
}

/// Runs every module's registration in caller order and freezes the result.
///
/// Assembly is synchronous and total: the first failing module aborts with
/// its name attached and no context is exposed. Once this returns `Ok`, no
/// configuration error can surface at runtime.
pub fn assemble(modules: &[FeatureModule]) -> Result<RuntimeContext, AssembleError> {
	let mut builder = ContextBuilder::default();
	for module in modules {
		(module.register)(&mut builder).map_err(|err| err.in_module(module.name))?;
	}
	let context = builder.freeze();
	tracing::debug!(
		modules = modules.len(),
		bindings = context.types.len(),
		services = context.services.len(),
		"runtime context assembled"
	);
	Ok(context)
}

//! Type binding registry and feature module composition.
//!
//! This crate turns an ordered list of [`FeatureModule`]s into one immutable
//! [`RuntimeContext`]: a type binding registry mapping symbolic type ids to
//! (variant constructor, renderer) pairs, plus session service singletons.
//! Assembly order is the only override mechanism: a later module rebinding a
//! type id or service replaces the earlier binding.
//!
//! All registration happens during [`assemble`]; afterwards the context is
//! read-only for the session, so resolution and materialization need no
//! locking. Configuration errors surface at assembly, never at runtime;
//! unknown type ids at materialization degrade per element.
//!
//! # Modules
//!
//! - [`bindings`] - Type id to (constructor, renderer) registry
//! - [`services`] - Session service singletons
//! - [`module`] / [`assemble`] - Feature modules and their composition
//! - [`materialize`] - Document materialization boundary
//! - [`builtins`] - Shipped base/class/use-case modules

pub mod assemble;
pub mod bindings;
pub mod builtins;
pub mod error;
pub mod materialize;
pub mod module;
pub mod services;

pub use assemble::{ContextBuilder, RuntimeContext, assemble};
pub use bindings::{ElementCtor, TypeBinding, TypeRegistry};
pub use builtins::default_modules;
pub use error::{AssembleError, MaterializeError, ResolveError};
pub use materialize::{MaterializedDocument, MaterializedElement, materialize};
pub use module::FeatureModule;
pub use services::{ServiceMap, ViewerOptions};

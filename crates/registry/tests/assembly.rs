//! Assembly-order and override semantics across whole modules.

use pretty_assertions::assert_eq;
use trellis_model::types;
use trellis_model::variants::LabeledNode;
use trellis_registry::{
	AssembleError, ContextBuilder, FeatureModule, assemble, builtins, default_modules,
	services::ViewerOptions,
};

/// Theme module: rebinds the comment node to a dark renderer, overriding the
/// use case diagram module's binding for the same type id.
const DARK_THEME: FeatureModule = FeatureModule::new("dark-theme", |ctx| {
	ctx.register_element(types::COMMENT, LabeledNode::construct, "DarkCommentView")
});

#[test]
fn test_builtin_modules_assemble() {
	let context = assemble(&default_modules()).expect("builtin assembly succeeds");

	for type_id in [
		types::GRAPH,
		types::HTML,
		types::CLASS,
		types::PROPERTY,
		types::ASSOCIATION,
		types::PACKAGE,
		types::COMMENT,
		types::USECASE,
		types::EXTENSION_POINT,
		types::GENERALIZATION,
	] {
		assert!(context.types().contains(type_id), "missing binding for {type_id}");
	}
	assert!(context.services().contains::<ViewerOptions>());
}

/// A module loaded after the builtins overrides their binding for the same
/// type id; untouched bindings are unaffected.
#[test]
fn test_later_module_overrides_earlier_binding() {
	let modules = [
		builtins::BASE,
		builtins::CLASS_DIAGRAM,
		builtins::USE_CASE_DIAGRAM,
		DARK_THEME,
	];
	let context = assemble(&modules).expect("assembly succeeds");

	let comment = context.types().resolve(types::COMMENT).expect("comment stays bound");
	assert_eq!(comment.renderer, "DarkCommentView");

	let class = context.types().resolve(types::CLASS).expect("class stays bound");
	assert_eq!(class.renderer, "ClassNodeView");
}

/// Assembling `[m1, m2]` resolves exactly like running `m2`'s registration
/// directly after `m1`'s on one builder, for every type id either touches.
#[test]
fn test_override_determinism_matches_sequential_registration() {
	let composed = assemble(&[builtins::USE_CASE_DIAGRAM, DARK_THEME]).expect("assembly succeeds");

	fn sequential(ctx: &mut ContextBuilder) -> Result<(), AssembleError> {
		(builtins::USE_CASE_DIAGRAM.register)(ctx)?;
		(DARK_THEME.register)(ctx)
	}
	let fused = assemble(&[FeatureModule::new("fused", sequential)]).expect("assembly succeeds");

	assert_eq!(composed.types().len(), fused.types().len());
	for binding in composed.types().iter() {
		let other = fused
			.types()
			.resolve(binding.type_id)
			.expect("same type ids bound either way");
		assert_eq!(binding.renderer, other.renderer, "renderer differs for {}", binding.type_id);
	}
}

/// Module order is caller-specified configuration; swapping it swaps the
/// override winner.
#[test]
fn test_module_order_decides_winner() {
	let forward = assemble(&[builtins::USE_CASE_DIAGRAM, DARK_THEME]).expect("assembly succeeds");
	let backward = assemble(&[DARK_THEME, builtins::USE_CASE_DIAGRAM]).expect("assembly succeeds");

	assert_eq!(
		forward.types().resolve(types::COMMENT).expect("bound").renderer,
		"DarkCommentView"
	);
	assert_eq!(
		backward.types().resolve(types::COMMENT).expect("bound").renderer,
		"CommentNodeView"
	);
}

/// Every binding an assembled registry hands out carries a non-empty
/// renderer id.
#[test]
fn test_assembled_bindings_always_carry_a_renderer() {
	let context = assemble(&default_modules()).expect("builtin assembly succeeds");
	for binding in context.types().iter() {
		assert!(
			!binding.renderer.is_empty(),
			"binding for {} has an empty renderer",
			binding.type_id
		);
	}
}

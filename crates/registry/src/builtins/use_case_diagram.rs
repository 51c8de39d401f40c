//! Use case diagram module.

use trellis_model::types;
use trellis_model::variants::{
	ConnectableEdge, ConnectableEditableLabel, ConnectionPoint, EditableLabel, Icon, LabeledNode,
};

use crate::assemble::ContextBuilder;
use crate::error::AssembleError;
use crate::module::FeatureModule;

/// Packages, components, comments, actors, use cases and their edges.
pub const USE_CASE_DIAGRAM: FeatureModule = FeatureModule::new("use-case-diagram", register);

fn register(ctx: &mut ContextBuilder) -> Result<(), AssembleError> {
	ctx.register_element(types::PACKAGE, LabeledNode::construct, "PackageNodeView")?;
	ctx.register_element(types::ICON_PACKAGE, Icon::construct_package, "IconView")?;
	ctx.register_element(types::COMPONENT, LabeledNode::construct, "PackageNodeView")?;
	ctx.register_element(types::COMMENT, LabeledNode::construct, "CommentNodeView")?;
	ctx.register_element(types::COMMENT_BODY, EditableLabel::construct_multiline, "SLabelView")?;
	ctx.register_element(types::ACTOR, LabeledNode::construct, "ActorNodeView")?;
	ctx.register_element(types::ICON_ACTOR, Icon::construct_actor, "IconView")?;
	ctx.register_element(types::USECASE, LabeledNode::construct, "UseCaseNodeView")?;
	ctx.register_element(types::ICON_USECASE, Icon::construct_usecase, "IconView")?;
	ctx.register_element(
		types::EXTENSION_POINT,
		ConnectableEditableLabel::construct,
		"SLabelView",
	)?;
	ctx.register_element(types::CONNECTION_POINT, ConnectionPoint::construct, "SLabelView")?;
	ctx.register_element(types::INCLUDE, ConnectableEdge::construct, "DirectedEdgeView")?;
	ctx.register_element(types::EXTEND, ConnectableEdge::construct, "DirectedEdgeView")?;
	ctx.register_element(types::GENERALIZATION, ConnectableEdge::construct, "DirectedEdgeView")?;
	Ok(())
}

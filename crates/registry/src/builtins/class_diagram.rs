//! Class diagram module.

use trellis_model::types;
use trellis_model::variants::{
	ConnectableEdge, EditableLabel, Icon, LabelNode, LabeledNode, StaticLabel,
};

use crate::assemble::ContextBuilder;
use crate::error::AssembleError;
use crate::module::FeatureModule;

/// Classes, property rows, associations and their labels.
pub const CLASS_DIAGRAM: FeatureModule = FeatureModule::new("class-diagram", register);

fn register(ctx: &mut ContextBuilder) -> Result<(), AssembleError> {
	ctx.register_element(types::CLASS, LabeledNode::construct, "ClassNodeView")?;
	ctx.register_element(types::ICON_CLASS, Icon::construct_class, "IconView")?;
	ctx.register_element(types::LABEL_ICON, StaticLabel::construct, "SLabelView")?;
	ctx.register_element(types::PROPERTY, LabelNode::construct_property, "LabelNodeView")?;
	ctx.register_element(types::ASSOCIATION, ConnectableEdge::construct, "PolylineEdgeView")?;
	ctx.register_element(types::LABEL_EDGE_NAME, EditableLabel::construct, "SLabelView")?;
	ctx.register_element(
		types::LABEL_EDGE_MULTIPLICITY,
		EditableLabel::construct,
		"SLabelView",
	)?;
	Ok(())
}

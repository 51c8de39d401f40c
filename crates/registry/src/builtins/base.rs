//! Structural base module.

use trellis_model::types;
use trellis_model::variants::{Compartment, EditableLabel, Graph, RoutingHandle, StaticLabel};

use crate::assemble::ContextBuilder;
use crate::error::AssembleError;
use crate::module::FeatureModule;
use crate::services::ViewerOptions;

/// Graph and overlay roots, compartments, labels and routing handles, plus
/// the default viewer options. Every diagram kind builds on these bindings.
pub const BASE: FeatureModule = FeatureModule::new("base", register);

fn register(ctx: &mut ContextBuilder) -> Result<(), AssembleError> {
	ctx.bind_service(ViewerOptions::default());

	ctx.register_element(types::GRAPH, Graph::construct, "SGraphView")?;
	ctx.register_element(types::HTML, Graph::construct, "HtmlRootView")?;
	ctx.register_element(types::COMPARTMENT, Compartment::construct, "SCompartmentView")?;
	ctx.register_element(types::COMPARTMENT_HEADER, Compartment::construct, "SCompartmentView")?;
	ctx.register_element(types::LABEL_HEADING, EditableLabel::construct, "SLabelView")?;
	ctx.register_element(types::LABEL_NAME, EditableLabel::construct, "SLabelView")?;
	ctx.register_element(types::LABEL_TEXT, StaticLabel::construct, "SLabelView")?;
	ctx.register_element(types::ROUTING_POINT, RoutingHandle::construct, "SRoutingHandleView")?;
	ctx.register_element(
		types::VOLATILE_ROUTING_POINT,
		RoutingHandle::construct,
		"SRoutingHandleView",
	)?;
	Ok(())
}

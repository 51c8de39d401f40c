//! Symbolic type identifiers used in serialized diagram documents.
//!
//! These strings are the wire vocabulary shared with the server-side model
//! source; they are grouped by the feature module that binds them. The
//! structural markers [`COMPARTMENT_HEADER`] and [`LABEL_HEADING`] are also
//! load-bearing for name resolution on labeled nodes.

/// Diagram root.
pub const GRAPH: &str = "graph";
/// Root of host-rendered overlay content (popups, edit fields).
pub const HTML: &str = "html";
/// Generic structural compartment.
pub const COMPARTMENT: &str = "comp:comp";
/// Header compartment of a labeled node.
pub const COMPARTMENT_HEADER: &str = "comp:header";
/// Heading label inside a header compartment.
pub const LABEL_HEADING: &str = "label:heading";
/// Plain, non-editable text label.
pub const LABEL_TEXT: &str = "label:text";
/// Editable name label.
pub const LABEL_NAME: &str = "label:name";
/// Persistent edge routing handle.
pub const ROUTING_POINT: &str = "routing-point";
/// Transient routing handle shown while dragging.
pub const VOLATILE_ROUTING_POINT: &str = "volatile-routing-point";

/// Class node.
pub const CLASS: &str = "node:class";
/// Property row inside a class.
pub const PROPERTY: &str = "node:property";
/// Icon slot label of a class header.
pub const LABEL_ICON: &str = "label:icon";
/// Class icon.
pub const ICON_CLASS: &str = "icon:class";
/// Association edge.
pub const ASSOCIATION: &str = "edge:association";
/// Editable edge name label.
pub const LABEL_EDGE_NAME: &str = "label:edge-name";
/// Editable edge multiplicity label.
pub const LABEL_EDGE_MULTIPLICITY: &str = "label:edge-multiplicity";

/// Package node.
pub const PACKAGE: &str = "node:package";
/// Package icon.
pub const ICON_PACKAGE: &str = "icon:package";
/// Component node.
pub const COMPONENT: &str = "node:component";
/// Comment node.
pub const COMMENT: &str = "node:comment";
/// Multi-line comment body label.
pub const COMMENT_BODY: &str = "label:comment-body";
/// Actor node.
pub const ACTOR: &str = "node:actor";
/// Actor icon.
pub const ICON_ACTOR: &str = "icon:actor";
/// Use case node.
pub const USECASE: &str = "node:usecase";
/// Use case icon.
pub const ICON_USECASE: &str = "icon:usecase";
/// Extension point label of a use case.
pub const EXTENSION_POINT: &str = "label:extensionpoint";
/// Connection point label on a use case boundary.
pub const CONNECTION_POINT: &str = "label:connectionpoint";
/// Include edge.
pub const INCLUDE: &str = "edge:include";
/// Extend edge.
pub const EXTEND: &str = "edge:extend";
/// Generalization edge.
pub const GENERALIZATION: &str = "edge:generalization";

//! Serialized diagram element as received from the model source.
//!
//! The wire shape is owned by the external synchronization collaborator; this
//! layer only deserializes it. A [`RawElement`] carries everything needed to
//! materialize one element: its type id for registry lookup plus the payload
//! fields variant constructors read.

use serde::Deserialize;

/// One element of a serialized diagram document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawElement {
	/// Instance identifier, unique within the document.
	pub id: String,
	/// Symbolic type identifier, resolved against the type binding registry.
	#[serde(rename = "type")]
	pub element_type: String,
	/// Text payload for label elements.
	#[serde(default)]
	pub text: Option<String>,
	/// Nested elements in the containment tree.
	#[serde(default)]
	pub children: Vec<RawElement>,
}

impl RawElement {
	/// Creates a childless raw element, mostly useful in tests.
	pub fn new(id: impl Into<String>, element_type: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			element_type: element_type.into(),
			text: None,
			children: Vec::new(),
		}
	}

	/// Sets the text payload.
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.text = Some(text.into());
		self
	}

	/// Appends a child element.
	pub fn with_child(mut self, child: RawElement) -> Self {
		self.children.push(child);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_deserialize_nested_document() {
		let doc: RawElement = serde_json::from_value(serde_json::json!({
			"id": "class0",
			"type": "node:class",
			"children": [
				{
					"id": "class0_header",
					"type": "comp:header",
					"children": [
						{ "id": "class0_name", "type": "label:heading", "text": "Order" }
					]
				}
			]
		}))
		.expect("document deserializes");

		assert_eq!(doc.element_type, "node:class");
		assert_eq!(doc.children.len(), 1);
		let header = &doc.children[0];
		assert_eq!(header.element_type, "comp:header");
		assert_eq!(header.children[0].text.as_deref(), Some("Order"));
	}
}

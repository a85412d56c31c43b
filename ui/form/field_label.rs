use html::{element, Component, Node};

pub struct FieldLabel;

impl Component for FieldLabel {
	fn render(self, children: Vec<Node>) -> Node {
		element("label")
			.class("field-label")
			.children(children)
			.into()
	}
}

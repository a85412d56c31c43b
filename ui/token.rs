use html::{element, Component, Node};

pub struct Token {
	pub color: Option<String>,
}

impl Component for Token {
	fn render(self, children: Vec<Node>) -> Node {
		let style = self
			.color
			.map(|color| format!("background-color: {};", color));
		element("span")
			.class("token")
			.attribute("style", style)
			.children(children)
			.into()
	}
}

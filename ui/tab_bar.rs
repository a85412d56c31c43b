use html::{element, Component, Node};

pub struct TabBar;

impl Component for TabBar {
	fn render(self, children: Vec<Node>) -> Node {
		element("div").class("tab-bar").children(children).into()
	}
}

pub struct TabLink {
	pub href: String,
	pub selected: bool,
}

impl Component for TabLink {
	fn render(self, children: Vec<Node>) -> Node {
		let class = if self.selected {
			"tab-bar-tab tab-bar-tab-selected"
		} else {
			"tab-bar-tab"
		};
		element("div")
			.class(class)
			.child(
				element("a")
					.class("tab-bar-tab-link")
					.attribute("href", self.href)
					.children(children),
			)
			.into()
	}
}

use html::{element, Component, Node};

pub struct S1;

impl Component for S1 {
	fn render(self, children: Vec<Node>) -> Node {
		element("div").class("s1").children(children).into()
	}
}

pub struct S2;

impl Component for S2 {
	fn render(self, children: Vec<Node>) -> Node {
		element("div").class("s2").children(children).into()
	}
}

pub struct SpaceBetween;

impl Component for SpaceBetween {
	fn render(self, children: Vec<Node>) -> Node {
		element("div").class("space-between").children(children).into()
	}
}

#[derive(Default)]
pub struct H1 {
	pub center: bool,
}

impl Component for H1 {
	fn render(self, children: Vec<Node>) -> Node {
		element("h1")
			.class(if self.center { "h1 center" } else { "h1" })
			.children(children)
			.into()
	}
}

#[derive(Default)]
pub struct H2 {
	pub center: bool,
}

impl Component for H2 {
	fn render(self, children: Vec<Node>) -> Node {
		element("h2")
			.class(if self.center { "h2 center" } else { "h2" })
			.children(children)
			.into()
	}
}

pub struct P;

impl Component for P {
	fn render(self, children: Vec<Node>) -> Node {
		element("p").class("p").children(children).into()
	}
}

pub struct List;

impl Component for List {
	fn render(self, children: Vec<Node>) -> Node {
		element("ul")
			.class("list")
			.children(
				children
					.into_iter()
					.map(|child| element("li").child(child)),
			)
			.into()
	}
}

use html::{element, raw, void_element, Component, Node};

#[derive(Clone)]
pub struct PageInfo {
	pub title: String,
}

pub struct Document {
	pub page_info: PageInfo,
}

impl Component for Document {
	fn render(self, children: Vec<Node>) -> Node {
		let head = element("head")
			.child(void_element("meta").attribute("charset", "utf-8"))
			.child(
				void_element("meta")
					.attribute("content", "width=device-width, initial-scale=1")
					.attribute("name", "viewport"),
			)
			.child(element("title").child(format!("{} | AHRC", self.page_info.title)))
			.child(
				void_element("link")
					.attribute("href", "/styles.css")
					.attribute("rel", "stylesheet"),
			)
			.child(
				void_element("meta")
					.attribute(
						"content",
						"Irrigation scheduling, toxicity prediction and medical image analysis",
					)
					.attribute("name", "description"),
			);
		let document = element("html")
			.attribute("lang", "en")
			.child(head)
			.child(element("body").children(children));
		html::fragment(vec![raw("<!doctype html>"), document.into()])
	}
}

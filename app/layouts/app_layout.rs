use super::document::{Document, PageInfo};
use html::{element, Component, Node};

/// The flows listed in the topbar, in order.
pub const NAV_ITEMS: [(&str, &str); 6] = [
	("/irrigation", "Irrigation"),
	("/tube_well", "Tube Well"),
	("/toxicity", "Toxicity"),
	("/oct", "OCT"),
	("/cervical", "Cervical"),
	("/logs", "Logs"),
];

pub struct AppLayout {
	pub page_info: PageInfo,
	/// The href of the nav item to highlight.
	pub selected: Option<&'static str>,
}

impl Component for AppLayout {
	fn render(self, children: Vec<Node>) -> Node {
		let selected = self.selected;
		let nav_items = NAV_ITEMS.iter().map(|(href, title)| {
			let class = if selected == Some(*href) {
				"topbar-item topbar-item-selected"
			} else {
				"topbar-item"
			};
			element("a")
				.class(class)
				.attribute("href", *href)
				.child(*title)
		});
		let topbar = element("div")
			.class("topbar")
			.child(
				element("a")
					.class("topbar-title")
					.attribute("href", "/")
					.child("AHRC"),
			)
			.child(element("nav").class("topbar-items").children(nav_items));
		let layout = element("div")
			.class("app-layout-topbar-grid")
			.child(topbar)
			.child(element("main").class("app-layout").children(children));
		Document {
			page_info: self.page_info,
		}
		.render(vec![layout.into()])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_selected_nav_item() {
		let html = AppLayout {
			page_info: PageInfo {
				title: "Logs".to_owned(),
			},
			selected: Some("/logs"),
		}
		.render(vec!["body".into()])
		.render_to_string();
		assert!(html.starts_with("<!doctype html><html lang=\"en\"><head>"));
		assert!(html.contains("<title>Logs | AHRC</title>"));
		assert!(html.contains(r#"<a class="topbar-item topbar-item-selected" href="/logs">Logs</a>"#));
		assert!(html.contains(r#"<a class="topbar-item" href="/oct">OCT</a>"#));
		assert!(html.contains(r#"<main class="app-layout">body</main>"#));
	}
}

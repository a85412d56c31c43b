use html::{element, Component, Node};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Level {
	Info,
	Success,
	Warning,
	Danger,
}

pub struct Alert {
	pub level: Level,
	pub title: Option<String>,
}

impl Alert {
	pub fn new(level: Level) -> Alert {
		Alert { level, title: None }
	}

	pub fn title(mut self, title: impl Into<String>) -> Alert {
		self.title = Some(title.into());
		self
	}
}

impl Component for Alert {
	fn render(self, children: Vec<Node>) -> Node {
		let level_class = match self.level {
			Level::Info => "alert-level-info",
			Level::Success => "alert-level-success",
			Level::Warning => "alert-level-warning",
			Level::Danger => "alert-level-danger",
		};
		element("div")
			.class(format!("alert-wrapper {}", level_class))
			.attribute("role", "alert")
			.child(
				self.title
					.map(|title| element("div").class("alert-title").child(title)),
			)
			.children(children)
			.into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_danger_alert() {
		let node = Alert::new(Level::Danger)
			.title("Error")
			.render(vec!["failed to connect".into()]);
		insta::assert_snapshot!(
			node.render_to_string(),
			@r###"<div class="alert-wrapper alert-level-danger" role="alert"><div class="alert-title">Error</div>failed to connect</div>"###
		);
	}
}

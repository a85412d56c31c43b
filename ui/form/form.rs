use html::{element, Component, Node};

#[derive(Default)]
pub struct Form {
	pub action: Option<String>,
	pub enc_type: Option<String>,
	pub id: Option<String>,
	pub post: bool,
}

impl Form {
	pub fn post() -> Form {
		Form {
			post: true,
			..Default::default()
		}
	}

	/// A post form that can carry file uploads.
	pub fn multipart() -> Form {
		Form {
			post: true,
			enc_type: Some("multipart/form-data".to_owned()),
			..Default::default()
		}
	}

	pub fn action(mut self, action: impl Into<String>) -> Form {
		self.action = Some(action.into());
		self
	}
}

impl Component for Form {
	fn render(self, children: Vec<Node>) -> Node {
		element("form")
			.attribute("id", self.id)
			.attribute("action", self.action)
			.class("form")
			.attribute("enctype", self.enc_type)
			.attribute("method", if self.post { Some("post") } else { None })
			.children(children)
			.into()
	}
}

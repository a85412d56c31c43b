use super::FieldLabel;
use html::{element, void_element, Component, Node};

pub struct FileField {
	pub accept: Option<String>,
	pub label: Option<String>,
	pub name: String,
	pub required: bool,
}

impl FileField {
	pub fn new(name: impl Into<String>) -> FileField {
		FileField {
			accept: None,
			label: None,
			name: name.into(),
			required: false,
		}
	}

	pub fn accept(mut self, accept: impl Into<String>) -> FileField {
		self.accept = Some(accept.into());
		self
	}

	pub fn label(mut self, label: impl Into<String>) -> FileField {
		self.label = Some(label.into());
		self
	}

	pub fn required(mut self) -> FileField {
		self.required = true;
		self
	}

	pub fn render(self) -> Node {
		let input = void_element("input")
			.class("form-file-input")
			.attribute("accept", self.accept)
			.attribute("name", self.name)
			.attribute("required", self.required)
			.attribute("type", "file");
		let wrapper = element("div").class("form-file-wrapper").child(input);
		FieldLabel.render(vec![self.label.into(), wrapper.into()])
	}
}

use super::FieldLabel;
use html::{void_element, Component, Node};

#[derive(Clone, Copy)]
pub enum InputType {
	Text,
	Number,
	Date,
	Hidden,
}

pub struct TextField {
	pub input_type: InputType,
	pub label: Option<String>,
	pub name: String,
	pub placeholder: Option<String>,
	pub required: bool,
	pub step: Option<String>,
	pub value: Option<String>,
}

impl TextField {
	pub fn new(name: impl Into<String>) -> TextField {
		TextField {
			input_type: InputType::Text,
			label: None,
			name: name.into(),
			placeholder: None,
			required: false,
			step: None,
			value: None,
		}
	}

	/// A numeric input accepting any decimal.
	pub fn number(name: impl Into<String>) -> TextField {
		TextField {
			input_type: InputType::Number,
			step: Some("any".to_owned()),
			..TextField::new(name)
		}
	}

	pub fn date(name: impl Into<String>) -> TextField {
		TextField {
			input_type: InputType::Date,
			..TextField::new(name)
		}
	}

	pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> TextField {
		TextField {
			input_type: InputType::Hidden,
			value: Some(value.into()),
			..TextField::new(name)
		}
	}

	pub fn label(mut self, label: impl Into<String>) -> TextField {
		self.label = Some(label.into());
		self
	}

	pub fn placeholder(mut self, placeholder: impl Into<String>) -> TextField {
		self.placeholder = Some(placeholder.into());
		self
	}

	pub fn required(mut self) -> TextField {
		self.required = true;
		self
	}

	pub fn value(mut self, value: Option<String>) -> TextField {
		self.value = value;
		self
	}

	pub fn render(self) -> Node {
		let input_type = match self.input_type {
			InputType::Text => "text",
			InputType::Number => "number",
			InputType::Date => "date",
			InputType::Hidden => "hidden",
		};
		let input = void_element("input")
			.class("form-text-field")
			.attribute("name", self.name)
			.attribute("placeholder", self.placeholder)
			.attribute("required", self.required)
			.attribute("spellcheck", "false")
			.attribute("step", self.step)
			.attribute("type", input_type)
			.attribute("value", self.value);
		if let InputType::Hidden = self.input_type {
			return input.into();
		}
		FieldLabel.render(vec![self.label.into(), input.into()])
	}
}

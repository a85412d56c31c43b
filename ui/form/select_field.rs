use super::FieldLabel;
use html::{element, Component, Node};

#[derive(Clone)]
pub struct SelectFieldOption {
	pub text: String,
	pub value: String,
}

pub struct SelectField {
	pub label: Option<String>,
	pub name: String,
	pub options: Vec<SelectFieldOption>,
	pub required: bool,
	pub value: Option<String>,
}

impl SelectField {
	pub fn new(name: impl Into<String>, options: Vec<SelectFieldOption>) -> SelectField {
		SelectField {
			label: None,
			name: name.into(),
			options,
			required: false,
			value: None,
		}
	}

	pub fn label(mut self, label: impl Into<String>) -> SelectField {
		self.label = Some(label.into());
		self
	}

	pub fn required(mut self) -> SelectField {
		self.required = true;
		self
	}

	pub fn value(mut self, value: Option<String>) -> SelectField {
		self.value = value;
		self
	}

	pub fn render(self) -> Node {
		let value = self.value;
		let options = self.options.into_iter().map(|option| {
			let selected = value.as_deref() == Some(option.value.as_str());
			element("option")
				.attribute("value", option.value)
				.attribute("selected", selected)
				.child(option.text)
		});
		let select = element("select")
			.class("form-select")
			.attribute("name", self.name)
			.attribute("required", self.required)
			.children(options);
		FieldLabel.render(vec![self.label.into(), select.into()])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_selected_option() {
		let options = vec!["Drip", "Flood"]
			.into_iter()
			.map(|value| SelectFieldOption {
				text: value.to_owned(),
				value: value.to_owned(),
			})
			.collect();
		let node = SelectField::new("irrigationMethod", options)
			.value(Some("Flood".to_owned()))
			.render();
		insta::assert_snapshot!(
			node.render_to_string(),
			@r###"<label class="field-label"><select class="form-select" name="irrigationMethod"><option value="Drip">Drip</option><option value="Flood" selected>Flood</option></select></label>"###
		);
	}
}

use html::{element, Component, Node};

#[derive(Clone, Copy)]
pub enum ButtonType {
	Submit,
	Button,
	Reset,
}

pub struct Button {
	pub button_type: ButtonType,
	pub disabled: Option<bool>,
	pub href: Option<String>,
	pub name: Option<String>,
	pub value: Option<String>,
	pub color: Option<String>,
}

impl Button {
	pub fn submit() -> Button {
		Button {
			button_type: ButtonType::Submit,
			disabled: None,
			href: None,
			name: None,
			value: None,
			color: None,
		}
	}

	pub fn link(href: impl Into<String>) -> Button {
		Button {
			button_type: ButtonType::Button,
			href: Some(href.into()),
			..Button::submit()
		}
	}

	/// A submit button that also posts `name=value`, used to pick an action on forms with several buttons.
	pub fn action(name: impl Into<String>, value: impl Into<String>) -> Button {
		Button {
			name: Some(name.into()),
			value: Some(value.into()),
			..Button::submit()
		}
	}

	pub fn disabled(mut self, disabled: bool) -> Button {
		self.disabled = Some(disabled);
		self
	}

	pub fn color(mut self, color: impl Into<String>) -> Button {
		self.color = Some(color.into());
		self
	}
}

impl Component for Button {
	fn render(self, children: Vec<Node>) -> Node {
		let style = self
			.color
			.map(|color| format!("background-color: {};", color));
		if let Some(href) = self.href {
			element("a")
				.class("button")
				.attribute("href", href)
				.attribute("style", style)
				.children(children)
				.into()
		} else {
			let button_type = match self.button_type {
				ButtonType::Submit => "submit",
				ButtonType::Button => "button",
				ButtonType::Reset => "reset",
			};
			element("button")
				.class("button")
				.attribute("disabled", self.disabled)
				.attribute("name", self.name)
				.attribute("value", self.value)
				.attribute("style", style)
				.attribute("type", button_type)
				.children(children)
				.into()
		}
	}
}

use crate::pages::form_key_field;
use ahrc_app_common::cervical::{CancerClass, CancerDetectionResult, ValidationOutcome};
use ahrc_app_layouts::{app_layout::AppLayout, document::PageInfo};
use ahrc_ui as ui;
use html::{Component, Node};

#[derive(Default)]
pub struct Page {
	pub error: Option<String>,
	pub result: Option<CancerDetectionResult>,
	pub validation: Option<ValidationOutcome>,
}

impl Page {
	pub fn render(self) -> String {
		let error = self
			.error
			.map(|error| ui::Alert::new(ui::Level::Danger).render(vec![error.into()]));
		let validation = self.validation.map(|outcome| {
			let (level, title) = if outcome.success {
				(ui::Level::Success, "Prediction validated.")
			} else {
				(ui::Level::Danger, "The validation could not be saved.")
			};
			ui::Alert::new(level)
				.title(title)
				.render(vec![outcome.message.into()])
		});
		let form = ui::Form::multipart().action("/cervical").render(vec![
			form_key_field(),
			ui::FileField::new("file")
				.accept("image/*")
				.label("Cell Image")
				.required()
				.render(),
			ui::Button::submit().render(vec!["Analyze".into()]),
		]);
		let body = ui::S1.render(vec![
			ui::SpaceBetween.render(vec![
				ui::H1::default().render(vec!["Cervical Cancer Detection".into()]),
				ui::Button::link("/cervical/statistics").render(vec!["Statistics".into()]),
			]),
			error.into(),
			validation.into(),
			form,
			self.result.map(result).into(),
		]);
		AppLayout {
			page_info: PageInfo {
				title: "Cervical Cancer Detection".to_owned(),
			},
			selected: Some("/cervical"),
		}
		.render(vec![body])
		.render_to_string()
	}
}

fn result(result: CancerDetectionResult) -> Node {
	let CancerDetectionResult {
		predicted_class,
		message,
		filename,
		timestamp,
		error,
	} = result;
	let failure = error.map(|error| {
		ui::Alert::new(ui::Level::Danger)
			.title("The cervical cancer service could not analyze the image.")
			.render(vec![error.into()])
	});
	let class = CancerClass::parse(&predicted_class);
	let validate_form = class.map(|class| validate_form(&filename, class));
	let predicted_class = ui::Token {
		color: class.map(|class| class.color().to_owned()),
	}
	.render(vec![predicted_class.into()]);
	let rows = vec![
		vec!["Predicted Class".into(), predicted_class],
		vec!["Message".into(), message.into()],
		vec!["File".into(), filename.into()],
		vec!["Timestamp".into(), timestamp.into()],
	];
	ui::S2.render(vec![
		ui::H2::default().render(vec!["Result".into()]),
		failure.into(),
		ui::Table.render(ui::table_rows(&["Field", "Value"], rows)),
		validate_form.into(),
	])
}

/// Lets a reviewer correct the predicted class.
fn validate_form(file_name: &str, current_class: CancerClass) -> Node {
	let options = CancerClass::ALL
		.iter()
		.map(|class| ui::SelectFieldOption {
			text: class.as_str().to_owned(),
			value: class.as_str().to_owned(),
		})
		.collect();
	ui::Form::post().action("/cervical/validate").render(vec![
		ui::TextField::hidden("file_name", file_name.to_owned()).render(),
		ui::TextField::hidden("current_class", current_class.as_str()).render(),
		ui::SelectField::new("new_class", options)
			.label("Correct Class")
			.required()
			.value(Some(current_class.as_str().to_owned()))
			.render(),
		ui::Button::submit().render(vec!["Validate Prediction".into()]),
	])
}

use crate::pages::form_key_field;
use ahrc_app_common::toxicity::ToxicityResult;
use ahrc_app_layouts::{app_layout::AppLayout, document::PageInfo};
use ahrc_ui as ui;
use html::{Component, Node};

pub struct Page {
	pub file_number: Option<String>,
	pub error: Option<String>,
	pub result: Option<ToxicityResult>,
}

impl Page {
	pub fn render(self) -> String {
		let error = self
			.error
			.map(|error| ui::Alert::new(ui::Level::Danger).render(vec![error.into()]));
		let form = ui::Form::multipart().action("/toxicity").render(vec![
			form_key_field(),
			ui::TextField::new("fileNumber")
				.label("File Number")
				.placeholder("P-0001")
				.required()
				.value(self.file_number)
				.render(),
			ui::FileField::new("file")
				.accept(".xlsx,.xls,.csv")
				.label("Lab Results Spreadsheet")
				.required()
				.render(),
			ui::Button::submit().render(vec!["Predict".into()]),
		]);
		let body = ui::S1.render(vec![
			ui::H1::default().render(vec!["Toxicity Prediction".into()]),
			error.into(),
			form,
			self.result.map(result).into(),
		]);
		AppLayout {
			page_info: PageInfo {
				title: "Toxicity Prediction".to_owned(),
			},
			selected: Some("/toxicity"),
		}
		.render(vec![body])
		.render_to_string()
	}
}

fn result(result: ToxicityResult) -> Node {
	let failure = result.api_data.map(|api_data| {
		ui::Alert::new(ui::Level::Danger)
			.title("The toxicity service could not process the file.")
			.render(vec![api_data.error.into()])
	});
	let severity = if result.severity {
		ui::Token {
			color: Some("var(--red)".to_owned()),
		}
		.render(vec!["High".into()])
	} else {
		ui::Token {
			color: Some("var(--green)".to_owned()),
		}
		.render(vec!["Low".into()])
	};
	let confidence = result
		.confidence
		.map(|confidence| format!("{:.1}%", confidence * 100.0))
		.unwrap_or_else(|| "-".to_owned());
	let rows = vec![
		vec!["File Number".into(), result.file_number.into()],
		vec!["Prediction".into(), result.prediction.into()],
		vec!["Severity".into(), severity],
		vec!["Confidence".into(), confidence.into()],
		vec!["Timestamp".into(), result.timestamp.into()],
	];
	ui::S2.render(vec![
		ui::H2::default().render(vec!["Prediction".into()]),
		failure.into(),
		ui::Table.render(ui::table_rows(&["Field", "Value"], rows)),
	])
}

use crate::pages::form_key_field;
use ahrc_app_layouts::{app_layout::AppLayout, document::PageInfo};
use ahrc_irrigation::{ApiData, IrrigationForm, IrrigationMethod, PumpType, RainfedResult};
use ahrc_ui as ui;
use html::{element, fragment, Component, Node};

pub struct Page {
	pub form: IrrigationForm,
	pub error: Option<String>,
	pub result: Option<RainfedResult>,
}

impl Page {
	pub fn render(self) -> String {
		let result = self.result.map(|result| {
			let rows = vec![
				result_row("Turn On Pump", decision(result.turn_on_pump)),
				result_row("Pump Running Time", result.pump_running_time.into()),
				result_row("Crop", result.crop_name.into()),
				result_row("Cropped Area (acres)", result.cropped_area.to_string().into()),
				result_row(
					"Location",
					format!("{}, {}", result.latitude, result.longitude).into(),
				),
				result_row("Last Irrigation Date", result.last_irrigation_date.into()),
				result_row("Pump Type", result.pump_type.into()),
				result_row("Irrigation Method", result.irrigation_method.into()),
				result_row("Timestamp", result.timestamp.into()),
			];
			ui::S2.render(vec![
				ui::H2::default().render(vec!["Decision".into()]),
				source_alert(&result.api_data, "irrigation"),
				ui::Table.render(ui::table_rows(&["Field", "Value"], rows)),
			])
		});
		let mut fields = vec![form_key_field()];
		fields.extend(irrigation_fields(&self.form));
		fields.push(ui::Button::submit().render(vec!["Get Decision".into()]));
		let body = ui::S1.render(vec![
			ui::H1::default().render(vec!["Rainfed Irrigation".into()]),
			self.error.map(error_alert).into(),
			ui::Form::post()
				.action("/irrigation")
				.render(fields),
			result.into(),
		]);
		AppLayout {
			page_info: PageInfo {
				title: "Rainfed Irrigation".to_owned(),
			},
			selected: Some("/irrigation"),
		}
		.render(vec![body])
		.render_to_string()
	}
}

/// The inputs shared by the rainfed and tube well forms, filled with what the user entered.
pub fn irrigation_fields(form: &IrrigationForm) -> Vec<Node> {
	vec![
		ui::TextField::number("latitude")
			.label("Latitude")
			.placeholder("31.5204")
			.required()
			.value(form.latitude.clone())
			.render(),
		ui::TextField::number("longitude")
			.label("Longitude")
			.placeholder("74.3587")
			.required()
			.value(form.longitude.clone())
			.render(),
		ui::TextField::new("cropName")
			.label("Crop Name")
			.placeholder("Wheat")
			.required()
			.value(form.crop_name.clone())
			.render(),
		ui::TextField::number("croppedArea")
			.label("Cropped Area (acres)")
			.required()
			.value(form.cropped_area.clone())
			.render(),
		ui::TextField::date("sowingDate")
			.label("Sowing Date")
			.required()
			.value(form.sowing_date.clone())
			.render(),
		ui::TextField::number("basePeriod")
			.label("Base Period (days)")
			.required()
			.value(form.base_period.clone())
			.render(),
		ui::TextField::date("lastIrrigationDate")
			.label("Last Irrigation Date")
			.required()
			.value(form.last_irrigation_date.clone())
			.render(),
		ui::TextField::number("pumpHP")
			.label("Pump HP")
			.required()
			.value(form.pump_hp.clone())
			.render(),
		ui::TextField::number("pumpDischargeRate")
			.label("Pump Discharge Rate (liters/minute)")
			.required()
			.value(form.pump_discharge_rate.clone())
			.render(),
		ui::SelectField::new(
			"pumpType",
			choices(PumpType::ALL.iter().map(PumpType::as_str)),
		)
		.label("Pump Type")
		.required()
		.value(form.pump_type.clone())
		.render(),
		ui::SelectField::new(
			"irrigationMethod",
			choices(IrrigationMethod::ALL.iter().map(IrrigationMethod::as_str)),
		)
		.label("Irrigation Method")
		.required()
		.value(form.irrigation_method.clone())
		.render(),
	]
}

fn choices(values: impl Iterator<Item = &'static str>) -> Vec<ui::SelectFieldOption> {
	let placeholder = ui::SelectFieldOption {
		text: "Select".to_owned(),
		value: String::new(),
	};
	std::iter::once(placeholder)
		.chain(values.map(|value| ui::SelectFieldOption {
			text: value.to_owned(),
			value: value.to_owned(),
		}))
		.collect()
}

pub fn result_row(label: &'static str, value: Node) -> Vec<Node> {
	vec![label.into(), value]
}

fn decision(turn_on_pump: bool) -> Node {
	let (color, text) = if turn_on_pump {
		("var(--green)", "Yes")
	} else {
		("var(--gray)", "No")
	};
	ui::Token {
		color: Some(color.to_owned()),
	}
	.render(vec![text.into()])
}

fn error_alert(error: String) -> Node {
	ui::Alert::new(ui::Level::Danger).render(vec![error.into()])
}

/// Explains where a decision came from. A fallback decision is flagged with the reason the service could not be used, and an error the service reported alongside its decision is shown as a note.
pub fn source_alert(api_data: &ApiData, service: &'static str) -> Node {
	match api_data {
		ApiData::Fallback { error } => ui::Alert::new(ui::Level::Warning)
			.title(format!(
				"The {} service could not be reached, so this decision was made locally.",
				service
			))
			.render(vec![error.clone().into()]),
		ApiData::Backend(data) if data.is_null() => fragment(Vec::new()),
		ApiData::Backend(data) => {
			let note = api_data.backend_error().map(|error| {
				ui::Alert::new(ui::Level::Info)
					.title("Note")
					.render(vec![error.to_owned().into()])
			});
			let details = element("details")
				.class("api-data")
				.child(element("summary").child("Service response"))
				.child(element("pre").class("api-data-json").child(data.to_string()));
			fragment(vec![note.into(), details.into()])
		}
	}
}

use crate::pages::{
	form_key_field,
	irrigation::{irrigation_fields, result_row, source_alert},
};
use ahrc_app_layouts::{app_layout::AppLayout, document::PageInfo};
use ahrc_irrigation::{IrrigationForm, TubeWellResult};
use ahrc_ui as ui;
use html::Component;

pub struct Page {
	pub form: IrrigationForm,
	pub error: Option<String>,
	pub result: Option<TubeWellResult>,
}

impl Page {
	pub fn render(self) -> String {
		let result = self.result.map(|result| {
			let decision = if result.turn_on_pump { "Yes" } else { "No" };
			let rows = vec![
				result_row("Turn On Pump", decision.into()),
				result_row(
					"Irrigation Depth (mm)",
					result.pump_running_time.to_string().into(),
				),
				result_row("Crop", result.crop_name.into()),
				result_row("Cropped Area (acres)", result.cropped_area.to_string().into()),
				result_row(
					"Location",
					format!("{}, {}", result.latitude, result.longitude).into(),
				),
				result_row("Last Irrigation Date", result.last_irrigation_date.into()),
				result_row("Timestamp", result.timestamp.into()),
			];
			ui::S2.render(vec![
				ui::H2::default().render(vec!["Decision".into()]),
				source_alert(&result.api_data, "tube well"),
				ui::Table.render(ui::table_rows(&["Field", "Value"], rows)),
			])
		});
		let mut fields = vec![form_key_field()];
		fields.extend(irrigation_fields(&self.form));
		fields.push(
			ui::TextField::number("wellDepth")
				.label("Well Depth (m)")
				.required()
				.value(self.form.well_depth.clone())
				.render(),
		);
		fields.push(
			ui::TextField::number("wellRadius")
				.label("Well Radius (m)")
				.required()
				.value(self.form.well_radius.clone())
				.render(),
		);
		fields.push(ui::Button::submit().render(vec!["Get Decision".into()]));
		let error = self
			.error
			.map(|error| ui::Alert::new(ui::Level::Danger).render(vec![error.into()]));
		let body = ui::S1.render(vec![
			ui::H1::default().render(vec!["Tube Well Irrigation".into()]),
			error.into(),
			ui::Form::post().action("/tube_well").render(fields),
			result.into(),
		]);
		AppLayout {
			page_info: PageInfo {
				title: "Tube Well Irrigation".to_owned(),
			},
			selected: Some("/tube_well"),
		}
		.render(vec![body])
		.render_to_string()
	}
}

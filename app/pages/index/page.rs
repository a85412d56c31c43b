use ahrc_app_layouts::{app_layout::AppLayout, document::PageInfo};
use ahrc_ui as ui;
use html::{element, Component, Node};

const FLOWS: [(&str, &str, &str); 6] = [
	(
		"/irrigation",
		"Rainfed Irrigation",
		"Decide whether to run the pump and for how long.",
	),
	(
		"/tube_well",
		"Tube Well Irrigation",
		"Irrigation decisions for fields watered from a tube well.",
	),
	(
		"/toxicity",
		"Toxicity Prediction",
		"Upload a patient's lab spreadsheet to predict toxicity.",
	),
	(
		"/oct",
		"OCT Segmentation",
		"Segment an OCT scan and view the result.",
	),
	(
		"/cervical",
		"Cervical Cancer Detection",
		"Classify a cervical cell image and review predictions.",
	),
	(
		"/logs",
		"Logs",
		"Browse irrigation decisions, records and service status.",
	),
];

pub struct Page;

impl Page {
	pub fn render(self) -> String {
		let flows = FLOWS.iter().map(|(href, title, description)| -> Node {
			element("div")
				.class("flow-card")
				.child(
					element("a")
						.class("flow-card-title")
						.attribute("href", *href)
						.child(*title),
				)
				.child(ui::P.render(vec![(*description).into()]))
				.into()
		});
		let body = ui::S1.render(vec![
			ui::H1 { center: true }.render(vec!["AHRC".into()]),
			ui::P.render(vec![
				"Forms for the irrigation, toxicity and medical imaging services.".into(),
			]),
			element("div").class("flow-grid").children(flows).into(),
		]);
		AppLayout {
			page_info: PageInfo {
				title: "Home".to_owned(),
			},
			selected: None,
		}
		.render(vec![body])
		.render_to_string()
	}
}

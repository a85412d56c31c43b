use crate::pages::form_key_field;
use ahrc_app_common::segmentation::SegmentationResult;
use ahrc_app_layouts::{app_layout::AppLayout, document::PageInfo};
use ahrc_ui as ui;
use html::{Component, Node};

pub struct Page {
	pub error: Option<String>,
	pub result: Option<SegmentationResult>,
}

impl Page {
	pub fn render(self) -> String {
		let error = self
			.error
			.map(|error| ui::Alert::new(ui::Level::Danger).render(vec![error.into()]));
		let form = ui::Form::multipart().action("/oct").render(vec![
			form_key_field(),
			ui::FileField::new("file")
				.accept(".npy")
				.label("OCT Scan (.npy)")
				.required()
				.render(),
			ui::Button::submit().render(vec!["Segment".into()]),
		]);
		let body = ui::S1.render(vec![
			ui::H1::default().render(vec!["OCT Segmentation".into()]),
			error.into(),
			form,
			self.result.map(result).into(),
		]);
		AppLayout {
			page_info: PageInfo {
				title: "OCT Segmentation".to_owned(),
			},
			selected: Some("/oct"),
		}
		.render(vec![body])
		.render_to_string()
	}
}

fn result(result: SegmentationResult) -> Node {
	let content = match (result.image_url, result.error) {
		(Some(image_url), _) => ui::Img {
			alt: "segmented OCT scan".to_owned(),
			src: image_url,
		}
		.render(),
		(None, error) => ui::Alert::new(ui::Level::Danger)
			.title("Segmentation failed.")
			.render(vec![error.into()]),
	};
	ui::S2.render(vec![
		ui::H2::default().render(vec!["Segmentation".into()]),
		content,
	])
}

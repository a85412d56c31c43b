use crate::pages::html_response;
use ahrc_app_common::{
	cervical::{statistics, statistics_rows},
	Context,
};
use ahrc_app_layouts::{app_layout::AppLayout, document::PageInfo};
use ahrc_ui as ui;
use ahrc_util::error::Result;
use html::{Component, Node};

pub async fn get(
	context: &Context,
	_request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let content = match statistics(&context.dispatchers.cervical).await {
		Ok(statistics) => {
			let rows = statistics_rows(&statistics)
				.into_iter()
				.map(|(key, value)| vec![Node::from(key), Node::from(value)])
				.collect();
			ui::Table.render(ui::table_rows(&["Statistic", "Value"], rows))
		}
		Err(error) => {
			tracing::warn!(error = %error, "failed to load cervical statistics");
			ui::Alert::new(ui::Level::Danger)
				.title("The statistics could not be loaded.")
				.render(vec![error.to_string().into()])
		}
	};
	Ok(html_response(http::StatusCode::OK, render(content)))
}

fn render(content: Node) -> String {
	let body = ui::S1.render(vec![
		ui::SpaceBetween.render(vec![
			ui::H1::default().render(vec!["Model Statistics".into()]),
			ui::Button::link("/cervical").render(vec!["Back".into()]),
		]),
		content,
	]);
	AppLayout {
		page_info: PageInfo {
			title: "Cervical Statistics".to_owned(),
		},
		selected: Some("/cervical"),
	}
	.render(vec![body])
	.render_to_string()
}

#[cfg(test)]
mod tests {
	use crate::test::{context, get, json_backend, send, unreachable_context};

	#[tokio::test]
	async fn test_statistics_table() {
		let base_url = json_backend(200, r#"{"total_predictions":4,"by_class":{"Benign":3}}"#);
		let (status, _, body) = send(context(&base_url), get("/cervical/statistics")).await;
		assert_eq!(status, http::StatusCode::OK);
		assert!(body.contains(r#"<td class="table-cell">by_class.Benign</td><td class="table-cell">3</td>"#));
	}

	#[tokio::test]
	async fn test_unreachable_statistics() {
		let (status, _, body) = send(unreachable_context(), get("/cervical/statistics")).await;
		assert_eq!(status, http::StatusCode::OK);
		assert!(body.contains("failed to connect to the cervical cancer service"));
	}
}

use super::page::{Page, Tab, TabContent};
use crate::pages::html_response;
use ahrc_app_common::{logs, Context};
use ahrc_util::error::Result;
use std::collections::BTreeMap;

pub async fn get(
	context: &Context,
	_request: http::Request<hyper::Body>,
	search_params: Option<BTreeMap<String, String>>,
) -> Result<http::Response<hyper::Body>> {
	let tab = search_params
		.as_ref()
		.and_then(|search_params| search_params.get("tab"))
		.and_then(|tab| tab.parse().ok())
		.unwrap_or(Tab::Decisions);
	let page = Page {
		tab,
		content: load(context, tab).await,
		error: None,
	};
	Ok(html_response(http::StatusCode::OK, page.render()))
}

pub(super) async fn load(context: &Context, tab: Tab) -> TabContent {
	let dispatcher = &context.dispatchers.irrigation;
	match tab {
		Tab::Decisions => TabContent::Decisions(
			logs::decision_logs(dispatcher)
				.await
				.map_err(|error| error.to_string()),
		),
		Tab::Records => TabContent::Records(
			logs::records(dispatcher)
				.await
				.map_err(|error| error.to_string()),
		),
		Tab::Status => TabContent::Status(logs::system_status(dispatcher).await),
	}
}

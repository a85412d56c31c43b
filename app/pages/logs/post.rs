use super::{
	get::load,
	page::{Page, Tab},
};
use crate::pages::html_response;
use ahrc_app_common::{
	error::{redirect, Error},
	form::read_urlencoded,
	logs::{self, LogType, RecordId},
	Context,
};
use ahrc_util::error::Result;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum Action {
	ClearLogs { log_type: String },
	DeleteRecord { record_id: String },
}

pub async fn post(
	context: &Context,
	request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let action: Action = read_urlencoded(request).await?;
	let dispatcher = &context.dispatchers.irrigation;
	let (tab, result) = match action {
		Action::ClearLogs { log_type } => {
			let log_type: LogType = log_type.parse().map_err(|_| Error::BadRequest)?;
			let tab = match log_type {
				LogType::Records => Tab::Records,
				_ => Tab::Decisions,
			};
			(tab, logs::clear(dispatcher, log_type).await)
		}
		Action::DeleteRecord { record_id } => {
			let record_id: RecordId = record_id.parse().map_err(|_| Error::BadRequest)?;
			(Tab::Records, logs::delete_record(dispatcher, &record_id).await)
		}
	};
	match result {
		Ok(()) => Ok(redirect(tab.href())),
		Err(error) => {
			tracing::warn!(error = %error, "log action failed");
			let page = Page {
				tab,
				content: load(context, tab).await,
				error: Some(error.to_string()),
			};
			Ok(html_response(http::StatusCode::OK, page.render()))
		}
	}
}

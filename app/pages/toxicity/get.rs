use super::page::Page;
use crate::pages::html_response;
use ahrc_app_common::Context;
use ahrc_util::error::Result;

pub async fn get(
	_context: &Context,
	_request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let page = Page {
		file_number: None,
		error: None,
		result: None,
	};
	Ok(html_response(http::StatusCode::OK, page.render()))
}

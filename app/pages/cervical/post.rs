use super::page::Page;
use crate::pages::{html_response, DUPLICATE_SUBMISSION};
use ahrc_app_common::{cervical::analyze, form::read_multipart, submission::Submission, Context};
use ahrc_util::error::Result;
use chrono::Utc;

pub async fn post(
	context: &Context,
	request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let mut form = read_multipart(request).await?;
	let file = match form.take_file("file") {
		Some(file) => file,
		None => {
			let page = Page {
				error: Some("file is required".to_owned()),
				..Default::default()
			};
			return Ok(html_response(http::StatusCode::BAD_REQUEST, page.render()));
		}
	};
	let _submission = match context.submissions.acquire_for(form.field("formKey")) {
		Submission::Duplicate => {
			let page = Page {
				error: Some(DUPLICATE_SUBMISSION.to_owned()),
				..Default::default()
			};
			return Ok(html_response(http::StatusCode::CONFLICT, page.render()));
		}
		submission => submission,
	};
	let result = analyze(&context.dispatchers.cervical, file, Utc::now).await;
	let page = Page {
		result: Some(result),
		..Default::default()
	};
	Ok(html_response(http::StatusCode::OK, page.render()))
}

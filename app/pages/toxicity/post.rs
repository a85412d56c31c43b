use super::page::Page;
use crate::pages::{html_response, DUPLICATE_SUBMISSION};
use ahrc_app_common::{
	form::read_multipart,
	submission::Submission,
	toxicity::{analyze, ToxicityRequest},
	Context,
};
use ahrc_util::error::Result;
use chrono::Utc;

pub async fn post(
	context: &Context,
	request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let form = read_multipart(request).await?;
	let form_key = form.field("formKey").map(ToOwned::to_owned);
	let file_number = form.field("fileNumber").map(ToOwned::to_owned);
	let toxicity_request = match ToxicityRequest::from_form(form) {
		Ok(toxicity_request) => toxicity_request,
		Err(error) => {
			tracing::info!("rejected toxicity form: {}", error);
			let page = Page {
				file_number,
				error: Some(error.to_string()),
				result: None,
			};
			return Ok(html_response(http::StatusCode::BAD_REQUEST, page.render()));
		}
	};
	let _submission = match context.submissions.acquire_for(form_key.as_deref()) {
		Submission::Duplicate => {
			let page = Page {
				file_number,
				error: Some(DUPLICATE_SUBMISSION.to_owned()),
				result: None,
			};
			return Ok(html_response(http::StatusCode::CONFLICT, page.render()));
		}
		submission => submission,
	};
	let result = analyze(&context.dispatchers.toxicity, toxicity_request, Utc::now).await;
	let page = Page {
		file_number,
		error: None,
		result: Some(result),
	};
	Ok(html_response(http::StatusCode::OK, page.render()))
}

#[cfg(test)]
mod tests {
	use crate::test::{context, json_backend, post_multipart, send, unreachable_context};

	#[tokio::test]
	async fn test_prediction_is_rendered() {
		let base_url = json_backend(
			200,
			r#"{"file_number":"P-17","prediction":"High toxicity","severity":true,"confidence":0.915}"#,
		);
		let request = post_multipart(
			"/toxicity",
			&[("fileNumber", None, "P-17"), ("file", Some("labs.csv"), "a,b\n1,2")],
		);
		let (status, _, body) = send(context(&base_url), request).await;
		assert_eq!(status, http::StatusCode::OK);
		assert!(body.contains("High toxicity"));
		assert!(body.contains("91.5%"));
	}

	#[tokio::test]
	async fn test_missing_file_is_rejected() {
		let request = post_multipart("/toxicity", &[("fileNumber", None, "P-17")]);
		let (status, _, body) = send(unreachable_context(), request).await;
		assert_eq!(status, http::StatusCode::BAD_REQUEST);
		assert!(body.contains("file is required"));
		assert!(body.contains(r#"value="P-17""#));
	}

	#[tokio::test]
	async fn test_unreachable_backend_renders_error() {
		let request = post_multipart(
			"/toxicity",
			&[("fileNumber", None, "P-17"), ("file", Some("labs.csv"), "a,b")],
		);
		let (status, _, body) = send(unreachable_context(), request).await;
		assert_eq!(status, http::StatusCode::OK);
		assert!(body.contains("Error processing request"));
		assert!(body.contains("failed to connect to the toxicity service"));
	}
}

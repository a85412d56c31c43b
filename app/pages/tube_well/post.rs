use super::page::Page;
use crate::pages::{html_response, DUPLICATE_SUBMISSION};
use ahrc_app_common::{
	form::read_urlencoded, irrigation::process_tube_well, submission::Submission, Context,
};
use ahrc_irrigation::IrrigationForm;
use ahrc_util::error::Result;
use chrono::Utc;

pub async fn post(
	context: &Context,
	request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let form: IrrigationForm = read_urlencoded(request).await?;
	let tube_well_request = match form.validate_tube_well() {
		Ok(tube_well_request) => tube_well_request,
		Err(error) => {
			tracing::info!(field = error.field(), "rejected tube well form: {}", error);
			let page = Page {
				form,
				error: Some(error.to_string()),
				result: None,
			};
			return Ok(html_response(http::StatusCode::BAD_REQUEST, page.render()));
		}
	};
	let _submission = match context.submissions.acquire_for(form.form_key.as_deref()) {
		Submission::Duplicate => {
			let page = Page {
				form,
				error: Some(DUPLICATE_SUBMISSION.to_owned()),
				result: None,
			};
			return Ok(html_response(http::StatusCode::CONFLICT, page.render()));
		}
		submission => submission,
	};
	let result = process_tube_well(
		&context.dispatchers.tube_well,
		&tube_well_request,
		Utc::now,
	)
	.await;
	let page = Page {
		form,
		error: None,
		result: Some(result),
	};
	Ok(html_response(http::StatusCode::OK, page.render()))
}

#[cfg(test)]
mod tests {
	use crate::test::{post_form, send, unreachable_context};

	const FORM: &str = "latitude=31.5&longitude=74.25&cropName=Rice&croppedArea=3&sowingDate=2019-06-01&basePeriod=90&lastIrrigationDate=2020-01-01&pumpHP=7.5&pumpDischargeRate=250&pumpType=Turbine&irrigationMethod=Basin&wellDepth=60&wellRadius=0.15";

	#[tokio::test]
	async fn test_unreachable_backend_falls_back_to_depth() {
		let (status, _, body) = send(unreachable_context(), post_form("/tube_well", FORM)).await;
		assert_eq!(status, http::StatusCode::OK);
		assert!(body.contains("<td class=\"table-cell\">25</td>"));
		assert!(body.contains("failed to connect to the tube well service"));
	}

	#[tokio::test]
	async fn test_well_fields_are_validated() {
		let form = FORM.replace("&wellRadius=0.15", "");
		let (status, _, body) = send(unreachable_context(), post_form("/tube_well", &form)).await;
		assert_eq!(status, http::StatusCode::BAD_REQUEST);
		assert!(body.contains("wellRadius is required"));
		assert!(body.contains(r#"value="60""#));
	}
}

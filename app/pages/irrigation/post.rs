use super::page::Page;
use crate::pages::{html_response, DUPLICATE_SUBMISSION};
use ahrc_app_common::{
	form::read_urlencoded, irrigation::process_rainfed, submission::Submission, Context,
};
use ahrc_irrigation::IrrigationForm;
use ahrc_util::error::Result;
use chrono::Utc;

pub async fn post(
	context: &Context,
	request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let form: IrrigationForm = read_urlencoded(request).await?;
	let irrigation_request = match form.validate() {
		Ok(irrigation_request) => irrigation_request,
		Err(error) => {
			tracing::info!(field = error.field(), "rejected rainfed form: {}", error);
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
	let result = process_rainfed(
		&context.dispatchers.irrigation,
		&irrigation_request,
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
	use crate::test::{context, json_backend, post_form, send, unreachable_context};
	use ahrc_util::id::Id;

	const FORM: &str = "latitude=31.5&longitude=74.25&cropName=Wheat&croppedArea=2&sowingDate=2019-11-01&basePeriod=120&lastIrrigationDate=2020-01-01&pumpHP=5&pumpDischargeRate=100&pumpType=Submersible&irrigationMethod=Flood";

	#[tokio::test]
	async fn test_unreachable_backend_falls_back() {
		let (status, _, body) = send(unreachable_context(), post_form("/irrigation", FORM)).await;
		assert_eq!(status, http::StatusCode::OK);
		assert!(body.contains("33 hours 43 minutes"));
		assert!(body.contains("failed to connect to the irrigation service"));
		assert!(body.contains("alert-level-warning"));
	}

	#[tokio::test]
	async fn test_backend_result_is_rendered() {
		let base_url = json_backend(
			200,
			r#"{"latitude":"31.5","longitude":"74.25","croppedArea":2,"cropName":"Wheat","sowingDate":"2019-11-01","basePeriod":120,"lastIrrigationDate":"2020-01-01","pumpHP":5,"pumpDischargeRate":100,"pumpType":"Submersible","irrigationMethod":"Flood","turnOnPump":false,"pumpRunningTime":"1 hours 5 minutes"}"#,
		);
		let (status, _, body) = send(context(&base_url), post_form("/irrigation", FORM)).await;
		assert_eq!(status, http::StatusCode::OK);
		assert!(body.contains("1 hours 5 minutes"));
		assert!(!body.contains("alert-level-warning"));
	}

	#[tokio::test]
	async fn test_backend_error_is_rendered_as_a_note() {
		let base_url = json_backend(
			200,
			r#"{"latitude":"31.5","longitude":"74.25","croppedArea":2,"cropName":"Wheat","sowingDate":"2019-11-01","basePeriod":120,"lastIrrigationDate":"2020-01-01","pumpHP":5,"pumpDischargeRate":100,"pumpType":"Submersible","irrigationMethod":"Flood","turnOnPump":true,"pumpRunningTime":"2 hours 0 minutes","apiData":{"error":"Failed to fetch weather data: timeout"}}"#,
		);
		let (status, _, body) = send(context(&base_url), post_form("/irrigation", FORM)).await;
		assert_eq!(status, http::StatusCode::OK);
		assert!(body.contains("2 hours 0 minutes"));
		assert!(body.contains("alert-level-info"));
		assert!(body.contains("Failed to fetch weather data: timeout"));
		assert!(!body.contains("alert-level-warning"));
		assert!(!body.contains("could not be reached"));
	}

	#[tokio::test]
	async fn test_invalid_form_is_rendered_again() {
		let form = FORM.replace("pumpDischargeRate=100", "pumpDischargeRate=0");
		let (status, _, body) = send(unreachable_context(), post_form("/irrigation", &form)).await;
		assert_eq!(status, http::StatusCode::BAD_REQUEST);
		assert!(body.contains("alert-level-danger"));
		assert!(body.contains("pumpDischargeRate must be greater than zero"));
		assert!(body.contains(r#"value="Wheat""#));
	}

	#[tokio::test]
	async fn test_duplicate_submission_is_rejected() {
		let context = unreachable_context();
		let key = Id::new();
		let _in_flight = context.submissions.try_acquire(key).unwrap();
		let form = format!("{}&formKey={}", FORM, key);
		let (status, _, body) = send(context.clone(), post_form("/irrigation", &form)).await;
		assert_eq!(status, http::StatusCode::CONFLICT);
		assert!(body.contains("already being submitted"));
		assert!(context.submissions.is_in_flight(key));
	}

	#[tokio::test]
	async fn test_key_is_released_after_submission() {
		let context = unreachable_context();
		let key = Id::new();
		let form = format!("{}&formKey={}", FORM, key);
		let (status, _, _) = send(context.clone(), post_form("/irrigation", &form)).await;
		assert_eq!(status, http::StatusCode::OK);
		assert!(!context.submissions.is_in_flight(key));
	}
}

use super::page::Page;
use crate::pages::html_response;
use ahrc_app_common::{
	cervical::{validate_prediction, CancerClass, PredictionValidation},
	form::read_urlencoded,
	Context,
};
use ahrc_util::error::Result;
use serde::Deserialize;

#[derive(Deserialize)]
struct ValidateForm {
	file_name: String,
	current_class: String,
	new_class: String,
}

pub async fn post(
	context: &Context,
	request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let form: ValidateForm = read_urlencoded(request).await?;
	let new_class = match CancerClass::parse(&form.new_class) {
		Some(new_class) => new_class,
		None => {
			let choices: Vec<_> = CancerClass::ALL.iter().map(CancerClass::as_str).collect();
			let page = Page {
				error: Some(format!(
					"new_class must be one of {}, got \"{}\"",
					choices.join(", "),
					form.new_class
				)),
				..Default::default()
			};
			return Ok(html_response(http::StatusCode::BAD_REQUEST, page.render()));
		}
	};
	let validation = PredictionValidation {
		file_name: form.file_name,
		current_class: form.current_class,
		new_class: new_class.as_str().to_owned(),
	};
	let outcome = validate_prediction(&context.dispatchers.cervical, &validation).await;
	let page = Page {
		validation: Some(outcome),
		..Default::default()
	};
	Ok(html_response(http::StatusCode::OK, page.render()))
}

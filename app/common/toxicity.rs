use crate::{
	dispatch::{DispatchError, Dispatcher},
	form::{MultipartForm, Upload},
};
use ahrc_util::time::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub struct ToxicityRequest {
	pub file_number: String,
	pub file: Upload,
}

#[derive(Debug, Error, PartialEq)]
pub enum ToxicityFormError {
	#[error("fileNumber is required")]
	MissingFileNumber,
	#[error("file is required")]
	MissingFile,
}

impl ToxicityRequest {
	pub fn from_form(mut form: MultipartForm) -> Result<ToxicityRequest, ToxicityFormError> {
		let file_number = form
			.field("fileNumber")
			.map(str::trim)
			.filter(|file_number| !file_number.is_empty())
			.ok_or(ToxicityFormError::MissingFileNumber)?
			.to_owned();
		let file = form.take_file("file").ok_or(ToxicityFormError::MissingFile)?;
		Ok(ToxicityRequest { file_number, file })
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToxicityResult {
	pub file_number: String,
	pub prediction: String,
	pub severity: bool,
	/// A probability in [0, 1].
	pub confidence: Option<f64>,
	pub timestamp: String,
	#[serde(rename = "apiData", skip_serializing_if = "Option::is_none")]
	pub api_data: Option<ToxicityError>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToxicityError {
	pub error: String,
}

#[derive(Deserialize)]
struct PredictionResponse {
	prediction: String,
	severity: bool,
	#[serde(default)]
	confidence: Option<f64>,
}

/// Send the spreadsheet for prediction. Failures become a result carrying the error.
pub async fn analyze(
	dispatcher: &Dispatcher,
	request: ToxicityRequest,
	now: impl Fn() -> DateTime<Utc>,
) -> ToxicityResult {
	let file_number = request.file_number.clone();
	match dispatch(dispatcher, request).await {
		Ok(response) => ToxicityResult {
			file_number,
			prediction: response.prediction,
			severity: response.severity,
			confidence: response.confidence,
			timestamp: timestamp(now()),
			api_data: None,
		},
		Err(error) => {
			tracing::warn!(service = dispatcher.service(), error = %error, "toxicity prediction failed");
			ToxicityResult {
				file_number,
				prediction: "Error processing request".to_owned(),
				severity: false,
				confidence: None,
				timestamp: timestamp(now()),
				api_data: Some(ToxicityError {
					error: error.to_string(),
				}),
			}
		}
	}
}

async fn dispatch(
	dispatcher: &Dispatcher,
	request: ToxicityRequest,
) -> Result<PredictionResponse, DispatchError> {
	let form = reqwest::multipart::Form::new()
		.part("file", dispatcher.file_part(request.file)?)
		.text("file_number", request.file_number);
	let body = dispatcher.post_multipart("/predict", form).await?;
	let response: PredictionResponse = dispatcher.decode(&body)?;
	if let Some(confidence) = response.confidence {
		if !(0.0..=1.0).contains(&confidence) {
			return Err(dispatcher.invalid_response(serde::de::Error::custom(format!(
				"confidence {} is not a probability",
				confidence
			))));
		}
	}
	Ok(response)
}

use crate::{
	dispatch::{DispatchError, Dispatcher},
	form::Upload,
};
use ahrc_util::time::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The classes the cervical model predicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancerClass {
	Benign,
	Malignant,
	Suspicious,
}

impl CancerClass {
	pub const ALL: [CancerClass; 3] = [
		CancerClass::Benign,
		CancerClass::Malignant,
		CancerClass::Suspicious,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			CancerClass::Benign => "Benign",
			CancerClass::Malignant => "Malignant",
			CancerClass::Suspicious => "Suspicious",
		}
	}

	/// Parse a class name the way the model reports it, ignoring case.
	pub fn parse(value: &str) -> Option<CancerClass> {
		CancerClass::ALL
			.iter()
			.find(|class| class.as_str().eq_ignore_ascii_case(value))
			.copied()
	}

	pub fn color(&self) -> &'static str {
		match self {
			CancerClass::Benign => "var(--green)",
			CancerClass::Malignant => "var(--red)",
			CancerClass::Suspicious => "var(--orange)",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CancerDetectionResult {
	pub predicted_class: String,
	pub message: String,
	pub filename: String,
	pub timestamp: String,
	pub error: Option<String>,
}

#[derive(Deserialize)]
struct PredictResponse {
	predicted_class: String,
	message: String,
}

pub async fn analyze(
	dispatcher: &Dispatcher,
	file: Upload,
	now: impl Fn() -> DateTime<Utc>,
) -> CancerDetectionResult {
	let filename = file.file_name.clone();
	match dispatch_predict(dispatcher, file).await {
		Ok(response) => CancerDetectionResult {
			predicted_class: response.predicted_class,
			message: response.message,
			filename,
			timestamp: timestamp(now()),
			error: None,
		},
		Err(error) => {
			tracing::warn!(service = dispatcher.service(), error = %error, "cervical prediction failed");
			CancerDetectionResult {
				predicted_class: "Unknown".to_owned(),
				message: "Failed to analyze image".to_owned(),
				filename,
				timestamp: timestamp(now()),
				error: Some(error.to_string()),
			}
		}
	}
}

async fn dispatch_predict(
	dispatcher: &Dispatcher,
	file: Upload,
) -> Result<PredictResponse, DispatchError> {
	let form = reqwest::multipart::Form::new().part("file", dispatcher.file_part(file)?);
	let body = dispatcher.post_multipart("/predict", form).await?;
	dispatcher.decode(&body)
}

/// A correction of a prediction, sent back to the model's service.
#[derive(Clone, Debug, Serialize)]
pub struct PredictionValidation {
	pub file_name: String,
	pub current_class: String,
	pub new_class: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidationOutcome {
	pub success: bool,
	pub message: String,
}

#[derive(Deserialize)]
struct ValidateResponse {
	message: String,
}

pub async fn validate_prediction(
	dispatcher: &Dispatcher,
	validation: &PredictionValidation,
) -> ValidationOutcome {
	match dispatch_validate(dispatcher, validation).await {
		Ok(response) => ValidationOutcome {
			success: true,
			message: response.message,
		},
		Err(error) => {
			tracing::warn!(service = dispatcher.service(), error = %error, "prediction validation failed");
			ValidationOutcome {
				success: false,
				message: error.to_string(),
			}
		}
	}
}

async fn dispatch_validate(
	dispatcher: &Dispatcher,
	validation: &PredictionValidation,
) -> Result<ValidateResponse, DispatchError> {
	let body = dispatcher.post_json("/validate", validation).await?;
	dispatcher.decode(&body)
}

/// The model's statistics as the service reports them.
pub async fn statistics(
	dispatcher: &Dispatcher,
) -> Result<serde_json::Map<String, serde_json::Value>, DispatchError> {
	let body = dispatcher.get("/statistics").await?;
	dispatcher.decode(&body)
}

/// Flatten nested statistics into `(dotted.key, value)` rows.
pub fn statistics_rows(statistics: &serde_json::Map<String, serde_json::Value>) -> Vec<(String, String)> {
	fn visit(prefix: &str, value: &serde_json::Value, rows: &mut Vec<(String, String)>) {
		match value {
			serde_json::Value::Object(map) => {
				for (key, value) in map {
					let key = if prefix.is_empty() {
						key.clone()
					} else {
						format!("{}.{}", prefix, key)
					};
					visit(&key, value, rows);
				}
			}
			serde_json::Value::String(value) => rows.push((prefix.to_owned(), value.clone())),
			value => rows.push((prefix.to_owned(), value.to_string())),
		}
	}
	let mut rows = Vec::new();
	for (key, value) in statistics {
		visit(key, value, &mut rows);
	}
	rows
}

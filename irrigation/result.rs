use ahrc_util::time::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Where a result's decision came from. The backend's payload is authoritative. A fallback result carries the reason the backend could not be used.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiData {
	Fallback { error: String },
	Backend(Value),
}

impl Default for ApiData {
	fn default() -> ApiData {
		ApiData::Backend(Value::Null)
	}
}

/// Anything the backend sends as `apiData` is its own payload, even an object with only an `error` key.
impl<'de> Deserialize<'de> for ApiData {
	fn deserialize<D>(deserializer: D) -> Result<ApiData, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(ApiData::Backend(Value::deserialize(deserializer)?))
	}
}

impl ApiData {
	/// The reason the decision was made locally.
	pub fn error(&self) -> Option<&str> {
		match self {
			ApiData::Fallback { error } => Some(error),
			ApiData::Backend(_) => None,
		}
	}

	/// A note the backend attached to a decision it did make, such as a failed weather lookup.
	pub fn backend_error(&self) -> Option<&str> {
		match self {
			ApiData::Backend(data) => data.get("error").and_then(Value::as_str),
			ApiData::Fallback { .. } => None,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainfedResult {
	#[serde(deserialize_with = "string_or_number")]
	pub latitude: String,
	#[serde(deserialize_with = "string_or_number")]
	pub longitude: String,
	pub cropped_area: f64,
	pub crop_name: String,
	pub sowing_date: String,
	pub base_period: u32,
	pub last_irrigation_date: String,
	#[serde(rename = "pumpHP")]
	pub pump_hp: f64,
	pub pump_discharge_rate: f64,
	pub pump_type: String,
	pub irrigation_method: String,
	pub turn_on_pump: bool,
	/// Formatted as `H hours M minutes`.
	#[serde(deserialize_with = "string_or_number")]
	pub pump_running_time: String,
	#[serde(default)]
	pub timestamp: String,
	#[serde(default)]
	pub api_data: ApiData,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TubeWellResult {
	pub latitude: f64,
	pub longitude: f64,
	pub cropped_area: f64,
	pub crop_name: String,
	pub sowing_date: String,
	pub base_period: u32,
	pub last_irrigation_date: String,
	#[serde(rename = "pumpHP")]
	pub pump_hp: f64,
	pub pump_discharge_rate: f64,
	pub pump_type: String,
	pub irrigation_method: String,
	pub turn_on_pump: bool,
	/// Millimeters of irrigation depth.
	pub pump_running_time: f64,
	#[serde(default)]
	pub timestamp: String,
	#[serde(default)]
	pub api_data: ApiData,
}

impl RainfedResult {
	/// Decode a successful backend response and stamp it with `now`. The backend's `apiData` is kept as sent.
	pub fn from_backend(body: Value, now: DateTime<Utc>) -> serde_json::Result<RainfedResult> {
		let mut result: RainfedResult = serde_json::from_value(body)?;
		result.timestamp = timestamp(now);
		Ok(result)
	}
}

impl TubeWellResult {
	/// Decode a successful backend response and stamp it with `now`. The backend's `apiData` is kept as sent.
	pub fn from_backend(body: Value, now: DateTime<Utc>) -> serde_json::Result<TubeWellResult> {
		let mut result: TubeWellResult = serde_json::from_value(body)?;
		result.timestamp = timestamp(now);
		Ok(result)
	}
}

pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum StringOrNumber {
		String(String),
		Number(serde_json::Number),
	}
	Ok(match StringOrNumber::deserialize(deserializer)? {
		StringOrNumber::String(value) => value,
		StringOrNumber::Number(value) => value.to_string(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use serde_json::json;

	fn rainfed_body() -> Value {
		json!({
			"latitude": "31.5",
			"longitude": "74.25",
			"croppedArea": 2.0,
			"cropName": "Wheat",
			"sowingDate": "2024-11-01",
			"basePeriod": 120,
			"lastIrrigationDate": "2025-01-01",
			"pumpHP": 5.0,
			"pumpDischargeRate": 100.0,
			"pumpType": "Submersible",
			"irrigationMethod": "Flood",
			"turnOnPump": false,
			"pumpRunningTime": "1 hours 5 minutes",
			"timestamp": "2020-01-01T00:00:00",
		})
	}

	#[test]
	fn test_backend_values_pass_through() {
		let now = Utc.ymd(2025, 1, 3).and_hms(8, 0, 0);
		let body = rainfed_body();
		let result = RainfedResult::from_backend(body, now).unwrap();
		assert_eq!(result.crop_name, "Wheat");
		assert!(!result.turn_on_pump);
		assert_eq!(result.pump_running_time, "1 hours 5 minutes");
		assert_eq!(result.timestamp, "2025-01-03T08:00:00.000Z");
		assert_eq!(result.api_data, ApiData::Backend(Value::Null));
		assert_eq!(result.api_data.error(), None);
	}

	#[test]
	fn test_backend_api_data_error_stays_with_the_backend() {
		let now = Utc.ymd(2025, 1, 3).and_hms(8, 0, 0);
		let mut body = rainfed_body();
		body["apiData"] = json!({ "error": "Failed to fetch weather data: timeout" });
		let result = RainfedResult::from_backend(body, now).unwrap();
		assert_eq!(
			result.api_data,
			ApiData::Backend(json!({ "error": "Failed to fetch weather data: timeout" }))
		);
		assert_eq!(result.api_data.error(), None);
		assert_eq!(
			result.api_data.backend_error(),
			Some("Failed to fetch weather data: timeout")
		);
		let mut body = json!({
			"latitude": 31.5,
			"longitude": 74.25,
			"croppedArea": 2.0,
			"cropName": "Wheat",
			"sowingDate": "2024-11-01",
			"basePeriod": 120,
			"lastIrrigationDate": "2025-01-01",
			"pumpHP": 5.0,
			"pumpDischargeRate": 100.0,
			"pumpType": "Submersible",
			"irrigationMethod": "Flood",
			"turnOnPump": true,
			"pumpRunningTime": 12.5,
		});
		body["apiData"] = json!({ "et0": 4.2 });
		let result = TubeWellResult::from_backend(body, now).unwrap();
		assert_eq!(result.api_data, ApiData::Backend(json!({ "et0": 4.2 })));
		assert_eq!(result.api_data.backend_error(), None);
	}

	#[test]
	fn test_numeric_coordinates_are_accepted() {
		let now = Utc.ymd(2025, 1, 3).and_hms(8, 0, 0);
		let mut body = rainfed_body();
		body["latitude"] = json!(31.5);
		body["pumpRunningTime"] = json!(12.5);
		let result = RainfedResult::from_backend(body, now).unwrap();
		assert_eq!(result.latitude, "31.5");
		assert_eq!(result.pump_running_time, "12.5");
	}

	#[test]
	fn test_undecodable_body_is_rejected() {
		let now = Utc.ymd(2025, 1, 3).and_hms(8, 0, 0);
		let mut body = rainfed_body();
		body.as_object_mut().unwrap().remove("turnOnPump");
		assert!(RainfedResult::from_backend(body, now).is_err());
		assert!(TubeWellResult::from_backend(json!("ok"), now).is_err());
	}

	#[test]
	fn test_api_data_serialization() {
		let fallback = ApiData::Fallback {
			error: "failed to connect to the irrigation service".to_owned(),
		};
		insta::assert_snapshot!(
			serde_json::to_string(&fallback).unwrap(),
			@r###"{"error":"failed to connect to the irrigation service"}"###
		);
	}
}

use crate::result::string_or_number;
use serde::Deserialize;

/// A past decision as stored by the irrigation service.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationRecord {
	pub id: String,
	pub timestamp: String,
	#[serde(deserialize_with = "string_or_number")]
	pub latitude: String,
	#[serde(deserialize_with = "string_or_number")]
	pub longitude: String,
	pub crop_name: String,
	pub cropped_area: f64,
	pub last_irrigation_date: String,
	pub turn_on_pump: bool,
	#[serde(deserialize_with = "string_or_number")]
	pub pump_running_time: String,
	pub days_since_irrigation: i64,
	#[serde(default)]
	pub weather_data: Option<serde_json::Value>,
	#[serde(default)]
	pub notes: Option<String>,
}

#[test]
fn test_deserialize_record() {
	let record: IrrigationRecord = serde_json::from_str(
		r#"{
			"id": "rec-1",
			"timestamp": "2025-01-08T06:00:00",
			"latitude": 31.5,
			"longitude": "74.25",
			"cropName": "Wheat",
			"croppedArea": 2,
			"lastIrrigationDate": "2025-01-01",
			"turnOnPump": true,
			"pumpRunningTime": "33 hours 43 minutes",
			"daysSinceIrrigation": 7
		}"#,
	)
	.unwrap();
	assert_eq!(record.latitude, "31.5");
	assert_eq!(record.cropped_area, 2.0);
	assert_eq!(record.weather_data, None);
	assert_eq!(record.notes, None);
}

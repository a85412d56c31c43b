use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
	pub latitude: f64,
	pub longitude: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PumpType {
	Submersible,
	Centrifugal,
	Turbine,
	Jet,
	Other,
}

impl PumpType {
	pub const ALL: [PumpType; 5] = [
		PumpType::Submersible,
		PumpType::Centrifugal,
		PumpType::Turbine,
		PumpType::Jet,
		PumpType::Other,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			PumpType::Submersible => "Submersible",
			PumpType::Centrifugal => "Centrifugal",
			PumpType::Turbine => "Turbine",
			PumpType::Jet => "Jet",
			PumpType::Other => "Other",
		}
	}
}

impl std::str::FromStr for PumpType {
	type Err = ();
	fn from_str(s: &str) -> Result<PumpType, ()> {
		PumpType::ALL
			.iter()
			.find(|pump_type| pump_type.as_str() == s)
			.copied()
			.ok_or(())
	}
}

impl std::fmt::Display for PumpType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrrigationMethod {
	Drip,
	Sprinkler,
	Flood,
	Furrow,
	Basin,
	Other,
}

impl IrrigationMethod {
	pub const ALL: [IrrigationMethod; 6] = [
		IrrigationMethod::Drip,
		IrrigationMethod::Sprinkler,
		IrrigationMethod::Flood,
		IrrigationMethod::Furrow,
		IrrigationMethod::Basin,
		IrrigationMethod::Other,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			IrrigationMethod::Drip => "Drip",
			IrrigationMethod::Sprinkler => "Sprinkler",
			IrrigationMethod::Flood => "Flood",
			IrrigationMethod::Furrow => "Furrow",
			IrrigationMethod::Basin => "Basin",
			IrrigationMethod::Other => "Other",
		}
	}
}

impl std::str::FromStr for IrrigationMethod {
	type Err = ();
	fn from_str(s: &str) -> Result<IrrigationMethod, ()> {
		IrrigationMethod::ALL
			.iter()
			.find(|method| method.as_str() == s)
			.copied()
			.ok_or(())
	}
}

impl std::fmt::Display for IrrigationMethod {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// A validated irrigation request. Every numeric field is finite and positive.
#[derive(Clone, Debug, PartialEq)]
pub struct IrrigationRequest {
	pub location: Location,
	pub crop_name: String,
	/// acres
	pub cropped_area: f64,
	pub sowing_date: NaiveDate,
	/// days
	pub base_period: u32,
	pub last_irrigation_date: NaiveDate,
	pub pump_hp: f64,
	/// liters per minute
	pub pump_discharge_rate: f64,
	pub pump_type: PumpType,
	pub irrigation_method: IrrigationMethod,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TubeWell {
	pub well_depth: f64,
	pub well_radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TubeWellRequest {
	pub irrigation: IrrigationRequest,
	pub well: TubeWell,
}

/// The body posted to the rainfed service's `/process`. The coordinates travel as strings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RainfedProcessRequest<'a> {
	pub latitude: String,
	pub longitude: String,
	pub cropped_area: f64,
	pub crop_name: &'a str,
	pub sowing_date: NaiveDate,
	pub base_period: u32,
	pub last_irrigation_date: NaiveDate,
	#[serde(rename = "pumpHP")]
	pub pump_hp: f64,
	pub pump_discharge_rate: f64,
	pub pump_type: PumpType,
	pub irrigation_method: IrrigationMethod,
}

impl<'a> From<&'a IrrigationRequest> for RainfedProcessRequest<'a> {
	fn from(request: &'a IrrigationRequest) -> RainfedProcessRequest<'a> {
		RainfedProcessRequest {
			latitude: request.location.latitude.to_string(),
			longitude: request.location.longitude.to_string(),
			cropped_area: request.cropped_area,
			crop_name: &request.crop_name,
			sowing_date: request.sowing_date,
			base_period: request.base_period,
			last_irrigation_date: request.last_irrigation_date,
			pump_hp: request.pump_hp,
			pump_discharge_rate: request.pump_discharge_rate,
			pump_type: request.pump_type,
			irrigation_method: request.irrigation_method,
		}
	}
}

/// The body posted to the tube well service's `/process`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TubeWellProcessRequest<'a> {
	pub latitude: f64,
	pub longitude: f64,
	pub cropped_area: f64,
	pub crop_name: &'a str,
	pub sowing_date: NaiveDate,
	pub base_period: u32,
	pub last_irrigation_date: NaiveDate,
	#[serde(rename = "pumpHP")]
	pub pump_hp: f64,
	pub pump_discharge_rate: f64,
	pub well_depth: f64,
	pub well_radius: f64,
	pub pump_type: PumpType,
	pub irrigation_method: IrrigationMethod,
}

impl<'a> From<&'a TubeWellRequest> for TubeWellProcessRequest<'a> {
	fn from(request: &'a TubeWellRequest) -> TubeWellProcessRequest<'a> {
		let irrigation = &request.irrigation;
		TubeWellProcessRequest {
			latitude: irrigation.location.latitude,
			longitude: irrigation.location.longitude,
			cropped_area: irrigation.cropped_area,
			crop_name: &irrigation.crop_name,
			sowing_date: irrigation.sowing_date,
			base_period: irrigation.base_period,
			last_irrigation_date: irrigation.last_irrigation_date,
			pump_hp: irrigation.pump_hp,
			pump_discharge_rate: irrigation.pump_discharge_rate,
			well_depth: request.well.well_depth,
			well_radius: request.well.well_radius,
			pump_type: irrigation.pump_type,
			irrigation_method: irrigation.irrigation_method,
		}
	}
}

#[cfg(test)]
pub(crate) fn test_request() -> IrrigationRequest {
	IrrigationRequest {
		location: Location {
			latitude: 31.5,
			longitude: 74.25,
		},
		crop_name: "Wheat".to_owned(),
		cropped_area: 2.0,
		sowing_date: NaiveDate::from_ymd(2024, 11, 1),
		base_period: 120,
		last_irrigation_date: NaiveDate::from_ymd(2025, 1, 1),
		pump_hp: 5.0,
		pump_discharge_rate: 100.0,
		pump_type: PumpType::Submersible,
		irrigation_method: IrrigationMethod::Flood,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rainfed_wire_shape() {
		let request = test_request();
		let body = serde_json::to_string(&RainfedProcessRequest::from(&request)).unwrap();
		insta::assert_snapshot!(
			body,
			@r###"{"latitude":"31.5","longitude":"74.25","croppedArea":2.0,"cropName":"Wheat","sowingDate":"2024-11-01","basePeriod":120,"lastIrrigationDate":"2025-01-01","pumpHP":5.0,"pumpDischargeRate":100.0,"pumpType":"Submersible","irrigationMethod":"Flood"}"###
		);
	}

	#[test]
	fn test_tube_well_wire_shape() {
		let request = TubeWellRequest {
			irrigation: test_request(),
			well: TubeWell {
				well_depth: 60.0,
				well_radius: 0.15,
			},
		};
		let body = serde_json::to_value(&TubeWellProcessRequest::from(&request)).unwrap();
		assert_eq!(body["latitude"], serde_json::json!(31.5));
		assert_eq!(body["wellDepth"], serde_json::json!(60.0));
		assert_eq!(body["wellRadius"], serde_json::json!(0.15));
		assert_eq!(body["pumpType"], "Submersible");
	}

	#[test]
	fn test_choices_parse() {
		assert_eq!("Jet".parse::<PumpType>(), Ok(PumpType::Jet));
		assert!("jet".parse::<PumpType>().is_err());
		assert_eq!(
			"Basin".parse::<IrrigationMethod>(),
			Ok(IrrigationMethod::Basin)
		);
		assert!("Rain".parse::<IrrigationMethod>().is_err());
	}
}

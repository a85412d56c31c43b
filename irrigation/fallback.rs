use crate::{ApiData, IrrigationRequest, RainfedResult, TubeWellRequest, TubeWellResult};
use ahrc_util::time::timestamp;
use chrono::{DateTime, NaiveDate, Utc};

pub const SQUARE_METERS_PER_ACRE: f64 = 4046.86;
/// Depth of water applied by one irrigation, in millimeters. One millimeter over one square meter is one liter.
pub const IRRIGATION_DEPTH_MM: f64 = 25.0;
pub const FALLBACK_THRESHOLD_DAYS: i64 = 7;

const MILLISECONDS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days elapsed between midnight UTC of `last_irrigation_date` and `now`, rounded down. A date in the future gives a negative count.
pub fn days_since_irrigation(last_irrigation_date: NaiveDate, now: DateTime<Utc>) -> i64 {
	let midnight = DateTime::<Utc>::from_utc(last_irrigation_date.and_hms(0, 0, 0), Utc);
	(now - midnight)
		.num_milliseconds()
		.div_euclid(MILLISECONDS_PER_DAY)
}

pub fn should_irrigate(days_since_irrigation: i64) -> bool {
	days_since_irrigation >= FALLBACK_THRESHOLD_DAYS
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunningTime {
	pub hours: u64,
	pub minutes: u64,
}

impl RunningTime {
	pub const ZERO: RunningTime = RunningTime {
		hours: 0,
		minutes: 0,
	};

	/// Split a duration into whole hours and whole minutes, truncating any fraction.
	pub fn from_minutes(minutes: f64) -> RunningTime {
		RunningTime {
			hours: (minutes / 60.0).floor() as u64,
			minutes: (minutes % 60.0).floor() as u64,
		}
	}
}

impl std::fmt::Display for RunningTime {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} hours {} minutes", self.hours, self.minutes)
	}
}

/// How long the pump must run to apply the fixed depth over the cropped area.
pub fn rainfed_running_time(cropped_area: f64, pump_discharge_rate: f64) -> RunningTime {
	let liters = cropped_area * SQUARE_METERS_PER_ACRE * IRRIGATION_DEPTH_MM;
	RunningTime::from_minutes(liters / pump_discharge_rate)
}

/// Decide locally for the rainfed flow. `reason` describes why the backend could not be used.
pub fn rainfed_fallback(
	request: &IrrigationRequest,
	now: DateTime<Utc>,
	reason: String,
) -> RainfedResult {
	let turn_on_pump = should_irrigate(days_since_irrigation(request.last_irrigation_date, now));
	let running_time = if turn_on_pump {
		rainfed_running_time(request.cropped_area, request.pump_discharge_rate)
	} else {
		RunningTime::ZERO
	};
	RainfedResult {
		latitude: request.location.latitude.to_string(),
		longitude: request.location.longitude.to_string(),
		cropped_area: request.cropped_area,
		crop_name: request.crop_name.clone(),
		sowing_date: request.sowing_date.to_string(),
		base_period: request.base_period,
		last_irrigation_date: request.last_irrigation_date.to_string(),
		pump_hp: request.pump_hp,
		pump_discharge_rate: request.pump_discharge_rate,
		pump_type: request.pump_type.to_string(),
		irrigation_method: request.irrigation_method.to_string(),
		turn_on_pump,
		pump_running_time: running_time.to_string(),
		timestamp: timestamp(now),
		api_data: ApiData::Fallback { error: reason },
	}
}

/// Decide locally for the tube well flow. The running time is the irrigation depth in millimeters rather than a duration.
pub fn tube_well_fallback(
	request: &TubeWellRequest,
	now: DateTime<Utc>,
	reason: String,
) -> TubeWellResult {
	let irrigation = &request.irrigation;
	let turn_on_pump =
		should_irrigate(days_since_irrigation(irrigation.last_irrigation_date, now));
	TubeWellResult {
		latitude: irrigation.location.latitude,
		longitude: irrigation.location.longitude,
		cropped_area: irrigation.cropped_area,
		crop_name: irrigation.crop_name.clone(),
		sowing_date: irrigation.sowing_date.to_string(),
		base_period: irrigation.base_period,
		last_irrigation_date: irrigation.last_irrigation_date.to_string(),
		pump_hp: irrigation.pump_hp,
		pump_discharge_rate: irrigation.pump_discharge_rate,
		pump_type: irrigation.pump_type.to_string(),
		irrigation_method: irrigation.irrigation_method.to_string(),
		turn_on_pump,
		pump_running_time: if turn_on_pump { IRRIGATION_DEPTH_MM } else { 0.0 },
		timestamp: timestamp(now),
		api_data: ApiData::Fallback { error: reason },
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::request::test_request;
	use crate::TubeWell;
	use chrono::TimeZone;

	#[test]
	fn test_days_since_irrigation_boundary() {
		let last = NaiveDate::from_ymd(2025, 1, 1);
		let six_days = Utc.ymd(2025, 1, 7).and_hms_milli(23, 59, 59, 999);
		let seven_days = Utc.ymd(2025, 1, 8).and_hms(0, 0, 0);
		assert_eq!(days_since_irrigation(last, six_days), 6);
		assert!(!should_irrigate(days_since_irrigation(last, six_days)));
		assert_eq!(days_since_irrigation(last, seven_days), 7);
		assert!(should_irrigate(days_since_irrigation(last, seven_days)));
	}

	#[test]
	fn test_future_irrigation_date() {
		let last = NaiveDate::from_ymd(2025, 1, 10);
		let now = Utc.ymd(2025, 1, 9).and_hms(12, 0, 0);
		assert_eq!(days_since_irrigation(last, now), -1);
		assert!(!should_irrigate(-1));
	}

	#[test]
	fn test_running_time_is_floored() {
		insta::assert_snapshot!(rainfed_running_time(2.0, 100.0).to_string(), @"33 hours 43 minutes");
		assert_eq!(RunningTime::from_minutes(59.99), RunningTime { hours: 0, minutes: 59 });
	}

	#[test]
	fn test_rainfed_fallback() {
		let request = test_request();
		let now = Utc.ymd(2025, 1, 8).and_hms(6, 0, 0);
		let result = rainfed_fallback(&request, now, "bad input".to_owned());
		assert!(result.turn_on_pump);
		assert_eq!(result.pump_running_time, "33 hours 43 minutes");
		assert_eq!(result.latitude, "31.5");
		assert_eq!(result.last_irrigation_date, "2025-01-01");
		assert_eq!(result.timestamp, "2025-01-08T06:00:00.000Z");
		assert_eq!(result.api_data.error(), Some("bad input"));
		let early = Utc.ymd(2025, 1, 7).and_hms(6, 0, 0);
		let result = rainfed_fallback(&request, early, "bad input".to_owned());
		assert!(!result.turn_on_pump);
		assert_eq!(result.pump_running_time, "0 hours 0 minutes");
	}

	#[test]
	fn test_fallback_is_idempotent() {
		let request = test_request();
		let now = Utc.ymd(2025, 2, 1).and_hms(0, 0, 0);
		assert_eq!(
			rainfed_fallback(&request, now, "down".to_owned()),
			rainfed_fallback(&request, now, "down".to_owned()),
		);
	}

	#[test]
	fn test_tube_well_fallback() {
		let request = TubeWellRequest {
			irrigation: test_request(),
			well: TubeWell {
				well_depth: 60.0,
				well_radius: 0.15,
			},
		};
		let now = Utc.ymd(2025, 1, 20).and_hms(0, 0, 0);
		let result = tube_well_fallback(&request, now, "down".to_owned());
		assert!(result.turn_on_pump);
		assert_eq!(result.pump_running_time, 25.0);
		let now = Utc.ymd(2025, 1, 2).and_hms(0, 0, 0);
		let result = tube_well_fallback(&request, now, "down".to_owned());
		assert!(!result.turn_on_pump);
		assert_eq!(result.pump_running_time, 0.0);
	}
}

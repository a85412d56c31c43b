use crate::{IrrigationMethod, IrrigationRequest, Location, PumpType, TubeWell, TubeWellRequest};
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

/// The raw values submitted by the rainfed and tube well forms. Fields are kept as entered so an invalid form can be rendered again with the user's input.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationForm {
	pub form_key: Option<String>,
	pub latitude: Option<String>,
	pub longitude: Option<String>,
	pub crop_name: Option<String>,
	pub cropped_area: Option<String>,
	pub sowing_date: Option<String>,
	pub base_period: Option<String>,
	pub last_irrigation_date: Option<String>,
	#[serde(rename = "pumpHP")]
	pub pump_hp: Option<String>,
	pub pump_discharge_rate: Option<String>,
	pub pump_type: Option<String>,
	pub irrigation_method: Option<String>,
	pub well_depth: Option<String>,
	pub well_radius: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
	#[error("{field} is required")]
	Missing { field: &'static str },
	#[error("{field} must be a number, got \"{value}\"")]
	NotANumber { field: &'static str, value: String },
	#[error("{field} must be a whole number, got \"{value}\"")]
	NotAnInteger { field: &'static str, value: String },
	#[error("{field} must be greater than zero")]
	NotPositive { field: &'static str },
	#[error("{field} must be between {min} and {max}")]
	OutOfRange {
		field: &'static str,
		min: f64,
		max: f64,
	},
	#[error("{field} must be a date in YYYY-MM-DD format, got \"{value}\"")]
	InvalidDate { field: &'static str, value: String },
	#[error("{field} must be one of {choices}, got \"{value}\"")]
	UnknownChoice {
		field: &'static str,
		value: String,
		choices: String,
	},
}

impl ValidationError {
	/// The name of the form field that failed.
	pub fn field(&self) -> &'static str {
		match self {
			ValidationError::Missing { field }
			| ValidationError::NotANumber { field, .. }
			| ValidationError::NotAnInteger { field, .. }
			| ValidationError::NotPositive { field }
			| ValidationError::OutOfRange { field, .. }
			| ValidationError::InvalidDate { field, .. }
			| ValidationError::UnknownChoice { field, .. } => field,
		}
	}
}

impl IrrigationForm {
	/// Validate the fields shared by both irrigation flows, stopping at the first failure.
	pub fn validate(&self) -> Result<IrrigationRequest, ValidationError> {
		let latitude = in_range("latitude", &self.latitude, -90.0, 90.0)?;
		let longitude = in_range("longitude", &self.longitude, -180.0, 180.0)?;
		let crop_name = required("cropName", &self.crop_name)?.to_owned();
		let cropped_area = positive("croppedArea", &self.cropped_area)?;
		let sowing_date = date("sowingDate", &self.sowing_date)?;
		let base_period = positive_integer("basePeriod", &self.base_period)?;
		let last_irrigation_date = date("lastIrrigationDate", &self.last_irrigation_date)?;
		let pump_hp = positive("pumpHP", &self.pump_hp)?;
		let pump_discharge_rate = positive("pumpDischargeRate", &self.pump_discharge_rate)?;
		let pump_type = choice("pumpType", &self.pump_type, &PumpType::ALL, PumpType::as_str)?;
		let irrigation_method = choice(
			"irrigationMethod",
			&self.irrigation_method,
			&IrrigationMethod::ALL,
			IrrigationMethod::as_str,
		)?;
		Ok(IrrigationRequest {
			location: Location {
				latitude,
				longitude,
			},
			crop_name,
			cropped_area,
			sowing_date,
			base_period,
			last_irrigation_date,
			pump_hp,
			pump_discharge_rate,
			pump_type,
			irrigation_method,
		})
	}

	/// Validate the shared fields followed by the well dimensions.
	pub fn validate_tube_well(&self) -> Result<TubeWellRequest, ValidationError> {
		let irrigation = self.validate()?;
		let well_depth = positive("wellDepth", &self.well_depth)?;
		let well_radius = positive("wellRadius", &self.well_radius)?;
		Ok(TubeWellRequest {
			irrigation,
			well: TubeWell {
				well_depth,
				well_radius,
			},
		})
	}
}

fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, ValidationError> {
	match value.as_deref().map(str::trim) {
		Some(value) if !value.is_empty() => Ok(value),
		_ => Err(ValidationError::Missing { field }),
	}
}

fn number(field: &'static str, value: &Option<String>) -> Result<f64, ValidationError> {
	let value = required(field, value)?;
	match value.parse::<f64>() {
		Ok(number) if number.is_finite() => Ok(number),
		_ => Err(ValidationError::NotANumber {
			field,
			value: value.to_owned(),
		}),
	}
}

fn positive(field: &'static str, value: &Option<String>) -> Result<f64, ValidationError> {
	let number = number(field, value)?;
	if number <= 0.0 {
		return Err(ValidationError::NotPositive { field });
	}
	Ok(number)
}

fn positive_integer(field: &'static str, value: &Option<String>) -> Result<u32, ValidationError> {
	let value = required(field, value)?;
	let number = value
		.parse::<u32>()
		.map_err(|_| ValidationError::NotAnInteger {
			field,
			value: value.to_owned(),
		})?;
	if number == 0 {
		return Err(ValidationError::NotPositive { field });
	}
	Ok(number)
}

fn in_range(
	field: &'static str,
	value: &Option<String>,
	min: f64,
	max: f64,
) -> Result<f64, ValidationError> {
	let number = number(field, value)?;
	if number < min || number > max {
		return Err(ValidationError::OutOfRange { field, min, max });
	}
	Ok(number)
}

fn date(field: &'static str, value: &Option<String>) -> Result<NaiveDate, ValidationError> {
	let value = required(field, value)?;
	NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
		field,
		value: value.to_owned(),
	})
}

fn choice<T: Copy>(
	field: &'static str,
	value: &Option<String>,
	all: &[T],
	as_str: fn(&T) -> &'static str,
) -> Result<T, ValidationError> {
	let value = required(field, value)?;
	all.iter()
		.find(|choice| as_str(*choice) == value)
		.copied()
		.ok_or_else(|| ValidationError::UnknownChoice {
			field,
			value: value.to_owned(),
			choices: all.iter().map(as_str).collect::<Vec<_>>().join(", "),
		})
}

#[cfg(test)]
pub(crate) fn test_form() -> IrrigationForm {
	let value = |value: &str| Some(value.to_owned());
	IrrigationForm {
		form_key: None,
		latitude: value("31.5"),
		longitude: value("74.25"),
		crop_name: value("Wheat"),
		cropped_area: value("2"),
		sowing_date: value("2024-11-01"),
		base_period: value("120"),
		last_irrigation_date: value("2025-01-01"),
		pump_hp: value("5"),
		pump_discharge_rate: value("100"),
		pump_type: value("Submersible"),
		irrigation_method: value("Flood"),
		well_depth: value("60"),
		well_radius: value("0.15"),
	}
}

use crate::dispatch::{DispatchError, Dispatcher};
use ahrc_irrigation::IrrigationRecord;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogType {
	Api,
	Decisions,
	Records,
	All,
}

impl LogType {
	pub const ALL: [LogType; 4] = [LogType::Api, LogType::Decisions, LogType::Records, LogType::All];

	pub fn as_str(&self) -> &'static str {
		match self {
			LogType::Api => "api",
			LogType::Decisions => "decisions",
			LogType::Records => "records",
			LogType::All => "all",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			LogType::Api => "Clear API Logs",
			LogType::Decisions => "Clear Decision Logs",
			LogType::Records => "Clear All Records",
			LogType::All => "Clear All Logs",
		}
	}
}

impl std::str::FromStr for LogType {
	type Err = ();
	fn from_str(s: &str) -> Result<LogType, ()> {
		LogType::ALL
			.iter()
			.find(|log_type| log_type.as_str() == s)
			.copied()
			.ok_or(())
	}
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LogSizes {
	pub api_log_size_kb: f64,
	pub decision_log_size_kb: f64,
	pub record_file_size_kb: f64,
	pub record_count: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SystemStatus {
	pub status: String,
	pub timestamp: String,
	#[serde(default)]
	pub logs: LogSizes,
	#[serde(default)]
	pub error: Option<String>,
}

impl SystemStatus {
	/// Shown when the service could not report its status.
	pub fn unknown(error: String) -> SystemStatus {
		SystemStatus {
			status: "unknown".to_owned(),
			timestamp: String::new(),
			logs: LogSizes::default(),
			error: Some(error),
		}
	}
}

/// An identifier of a stored record, restricted to characters that are safe in a url path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordId(String);

impl std::str::FromStr for RecordId {
	type Err = ();
	fn from_str(s: &str) -> Result<RecordId, ()> {
		let valid = !s.is_empty()
			&& s.chars()
				.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
		if valid && s != "." && s != ".." {
			Ok(RecordId(s.to_owned()))
		} else {
			Err(())
		}
	}
}

impl std::fmt::Display for RecordId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

pub async fn decision_logs(dispatcher: &Dispatcher) -> Result<Vec<String>, DispatchError> {
	let body = dispatcher.get("/logs/decisions").await?;
	dispatcher.decode(&body)
}

pub async fn records(dispatcher: &Dispatcher) -> Result<Vec<IrrigationRecord>, DispatchError> {
	let body = dispatcher.get("/logs/records").await?;
	dispatcher.decode(&body)
}

pub async fn system_status(dispatcher: &Dispatcher) -> SystemStatus {
	let result = match dispatcher.get("/status").await {
		Ok(body) => dispatcher.decode(&body),
		Err(error) => Err(error),
	};
	result.unwrap_or_else(|error| SystemStatus::unknown(error.to_string()))
}

pub async fn clear(dispatcher: &Dispatcher, log_type: LogType) -> Result<(), DispatchError> {
	let path = format!("/logs/clear?log_type={}", log_type.as_str());
	dispatcher.delete(&path).await?;
	tracing::info!(log_type = log_type.as_str(), "cleared logs");
	Ok(())
}

pub async fn delete_record(dispatcher: &Dispatcher, record_id: &RecordId) -> Result<(), DispatchError> {
	let path = format!("/logs/records/{}", record_id);
	dispatcher.delete(&path).await?;
	tracing::info!(%record_id, "deleted record");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test::{dispatcher, fake_backend, unreachable_backend, Reply};

	#[test]
	fn test_record_id() {
		assert!("3f2a-11_b".parse::<RecordId>().is_ok());
		assert!("../status".parse::<RecordId>().is_err());
		assert!("a b".parse::<RecordId>().is_err());
		assert!("".parse::<RecordId>().is_err());
	}

	#[tokio::test]
	async fn test_clear_and_delete_paths() {
		let base_url = fake_backend(|request| {
			assert_eq!(request.method, http::Method::DELETE);
			match request.path_and_query.as_str() {
				"/logs/clear?log_type=decisions" | "/logs/records/rec-1" => Reply::json(200, "{}"),
				_ => Reply::json(404, r#"{"detail":"Record not found"}"#),
			}
		})
		.await;
		let dispatcher = dispatcher("irrigation", &base_url);
		clear(&dispatcher, LogType::Decisions).await.unwrap();
		delete_record(&dispatcher, &"rec-1".parse().unwrap()).await.unwrap();
		let error = delete_record(&dispatcher, &"rec-2".parse().unwrap())
			.await
			.unwrap_err();
		assert_eq!(error.to_string(), "Record not found");
	}

	#[tokio::test]
	async fn test_status_without_log_sizes() {
		let base_url = fake_backend(|_| {
			Reply::json(200, r#"{"status":"operational","timestamp":"2025-01-08T06:00:00","files_validated":true}"#)
		})
		.await;
		let status = system_status(&dispatcher("irrigation", &base_url)).await;
		assert_eq!(status.status, "operational");
		assert_eq!(status.logs, LogSizes::default());
	}

	#[tokio::test]
	async fn test_status_unknown_when_unreachable() {
		let status = system_status(&dispatcher("irrigation", &unreachable_backend())).await;
		assert_eq!(status.status, "unknown");
		assert_eq!(status.logs.record_count, 0);
		assert_eq!(
			status.error.as_deref(),
			Some("failed to connect to the irrigation service")
		);
	}

	#[tokio::test]
	async fn test_decision_logs() {
		let base_url = fake_backend(|_| Reply::json(200, r#"["2025-01-08 pump on","2025-01-09 pump off"]"#)).await;
		let logs = decision_logs(&dispatcher("irrigation", &base_url)).await.unwrap();
		assert_eq!(logs.len(), 2);
	}
}

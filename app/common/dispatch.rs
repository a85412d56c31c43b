use crate::form::Upload;
use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Instant;
use thiserror::Error;
use url::Url;

/// Why a call to a backend service did not produce a usable answer.
#[derive(Debug, Error)]
pub enum DispatchError {
	#[error("failed to connect to the {service} service")]
	Transport {
		service: &'static str,
		#[source]
		source: reqwest::Error,
	},
	#[error("failed to build the request to the {service} service")]
	Request {
		service: &'static str,
		#[source]
		source: reqwest::Error,
	},
	/// A non-2xx response. `detail` is the backend's own message when it sent one.
	#[error("{detail}")]
	Status { status: u16, detail: String },
	#[error("invalid response from the {service} service")]
	InvalidResponse {
		service: &'static str,
		#[source]
		source: serde_json::Error,
	},
}

/// Issues single HTTP calls to one backend service.
#[derive(Clone)]
pub struct Dispatcher {
	service: &'static str,
	base_url: Url,
	client: reqwest::Client,
}

impl Dispatcher {
	pub fn new(service: &'static str, base_url: Url, client: reqwest::Client) -> Dispatcher {
		Dispatcher {
			service,
			base_url,
			client,
		}
	}

	pub fn service(&self) -> &'static str {
		self.service
	}

	/// Join the base url and a path such as `/process` or `/logs/clear?log_type=api`.
	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
	}

	pub async fn post_json<T>(&self, path: &str, body: &T) -> Result<Bytes, DispatchError>
	where
		T: Serialize + ?Sized,
	{
		let url = self.url(path);
		self.send("POST", path, self.client.post(&url).json(body))
			.await
	}

	pub async fn post_multipart(
		&self,
		path: &str,
		form: reqwest::multipart::Form,
	) -> Result<Bytes, DispatchError> {
		let url = self.url(path);
		self.send("POST", path, self.client.post(&url).multipart(form))
			.await
	}

	pub async fn get(&self, path: &str) -> Result<Bytes, DispatchError> {
		let url = self.url(path);
		self.send("GET", path, self.client.get(&url)).await
	}

	pub async fn delete(&self, path: &str) -> Result<Bytes, DispatchError> {
		let url = self.url(path);
		self.send("DELETE", path, self.client.delete(&url)).await
	}

	/// Turn an uploaded file into a multipart part, keeping its name and content type.
	pub fn file_part(&self, upload: Upload) -> Result<reqwest::multipart::Part, DispatchError> {
		let mime = upload
			.content_type
			.unwrap_or_else(|| "application/octet-stream".to_owned());
		reqwest::multipart::Part::bytes(upload.data)
			.file_name(upload.file_name)
			.mime_str(&mime)
			.map_err(|source| DispatchError::Request {
				service: self.service,
				source,
			})
	}

	/// Decode a 2xx body into the shape the caller expects.
	pub fn decode<T>(&self, body: &[u8]) -> Result<T, DispatchError>
	where
		T: DeserializeOwned,
	{
		serde_json::from_slice(body).map_err(|source| self.invalid_response(source))
	}

	pub fn invalid_response(&self, source: serde_json::Error) -> DispatchError {
		DispatchError::InvalidResponse {
			service: self.service,
			source,
		}
	}

	async fn send(
		&self,
		method: &'static str,
		path: &str,
		request: reqwest::RequestBuilder,
	) -> Result<Bytes, DispatchError> {
		let start = Instant::now();
		let transport = |source| DispatchError::Transport {
			service: self.service,
			source,
		};
		let response = match request.send().await {
			Ok(response) => response,
			Err(error) => {
				tracing::warn!(
					service = self.service,
					method,
					path,
					error = %error,
					"backend unreachable"
				);
				return Err(transport(error));
			}
		};
		let status = response.status();
		let body = response.bytes().await.map_err(transport)?;
		tracing::info!(
			service = self.service,
			method,
			path,
			status = status.as_u16(),
			elapsed_ms = start.elapsed().as_millis() as u64,
			"dispatched"
		);
		if !status.is_success() {
			return Err(DispatchError::Status {
				status: status.as_u16(),
				detail: error_detail(&body)
					.unwrap_or_else(|| format!("request failed with status {}", status.as_u16())),
			});
		}
		Ok(body)
	}
}

/// The `detail` string of a JSON error body, if there is one.
fn error_detail(body: &[u8]) -> Option<String> {
	let body: serde_json::Value = serde_json::from_slice(body).ok()?;
	body.get("detail")?
		.as_str()
		.filter(|detail| !detail.is_empty())
		.map(ToOwned::to_owned)
}

use crate::error::Error;
use ahrc_util::error::Result;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// A file received in a multipart form.
#[derive(Clone, Debug)]
pub struct Upload {
	pub file_name: String,
	pub content_type: Option<String>,
	pub data: Vec<u8>,
}

/// The text fields and files of a multipart form.
#[derive(Debug, Default)]
pub struct MultipartForm {
	pub fields: BTreeMap<String, String>,
	pub files: BTreeMap<String, Upload>,
}

impl MultipartForm {
	pub fn field(&self, name: &str) -> Option<&str> {
		self.fields.get(name).map(String::as_str)
	}

	pub fn take_file(&mut self, name: &str) -> Option<Upload> {
		self.files.remove(name)
	}
}

/// Read an `application/x-www-form-urlencoded` body.
pub async fn read_urlencoded<T>(request: http::Request<hyper::Body>) -> Result<T>
where
	T: DeserializeOwned,
{
	let data = hyper::body::to_bytes(request.into_body())
		.await
		.map_err(|_| Error::BadRequest)?;
	let form = serde_urlencoded::from_bytes(&data).map_err(|_| Error::BadRequest)?;
	Ok(form)
}

/// Read a `multipart/form-data` body. A file input left empty by the browser is skipped.
pub async fn read_multipart(request: http::Request<hyper::Body>) -> Result<MultipartForm> {
	let boundary = request
		.headers()
		.get(http::header::CONTENT_TYPE)
		.and_then(|content_type| content_type.to_str().ok())
		.and_then(|content_type| multer::parse_boundary(content_type).ok())
		.ok_or(Error::BadRequest)?;
	let mut form = MultipartForm::default();
	let mut multipart = multer::Multipart::new(request.into_body(), boundary);
	while let Some(mut field) = multipart
		.next_field()
		.await
		.map_err(|_| Error::BadRequest)?
	{
		let name = match field.name() {
			Some(name) => name.to_owned(),
			None => return Err(Error::BadRequest.into()),
		};
		let file_name = field.file_name().map(ToOwned::to_owned);
		let content_type = field.content_type().map(|mime| mime.to_string());
		let mut data = Vec::new();
		while let Some(chunk) = field.chunk().await.map_err(|_| Error::BadRequest)? {
			data.extend_from_slice(&chunk);
		}
		match file_name {
			Some(file_name) => {
				if file_name.is_empty() && data.is_empty() {
					continue;
				}
				form.files.insert(
					name,
					Upload {
						file_name,
						content_type,
						data,
					},
				);
			}
			None => {
				let value = String::from_utf8(data).map_err(|_| Error::BadRequest)?;
				form.fields.insert(name, value);
			}
		}
	}
	Ok(form)
}

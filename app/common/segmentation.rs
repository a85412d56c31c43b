use crate::{
	dispatch::{DispatchError, Dispatcher},
	form::Upload,
};
use bytes::Bytes;

#[derive(Clone, Debug, PartialEq)]
pub struct SegmentationResult {
	pub success: bool,
	/// A `data:image/jpeg;base64,` uri of the segmented image.
	pub image_url: Option<String>,
	pub error: Option<String>,
}

pub fn image_data_url(image: &[u8]) -> String {
	format!("data:image/jpeg;base64,{}", base64::encode(image))
}

/// Send the scan for segmentation and return the image the service draws.
pub async fn segment(dispatcher: &Dispatcher, file: Upload) -> SegmentationResult {
	match dispatch(dispatcher, file).await {
		Ok(image) => SegmentationResult {
			success: true,
			image_url: Some(image_data_url(&image)),
			error: None,
		},
		Err(error) => {
			tracing::warn!(service = dispatcher.service(), error = %error, "segmentation failed");
			SegmentationResult {
				success: false,
				image_url: None,
				error: Some(error.to_string()),
			}
		}
	}
}

async fn dispatch(dispatcher: &Dispatcher, file: Upload) -> Result<Bytes, DispatchError> {
	let form = reqwest::multipart::Form::new().part("file", dispatcher.file_part(file)?);
	dispatcher.post_multipart("/segment", form).await
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test::{dispatcher, fake_backend, unreachable_backend, Reply};

	fn scan() -> Upload {
		Upload {
			file_name: "scan.npy".to_owned(),
			content_type: Some("application/octet-stream".to_owned()),
			data: vec![0x93, b'N', b'U', b'M', b'P', b'Y'],
		}
	}

	#[tokio::test]
	async fn test_image_is_returned_as_data_url() {
		let image = vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10];
		let reply = image.clone();
		let base_url = fake_backend(move |request| {
			assert_eq!(request.path_and_query, "/segment");
			Reply::bytes(200, reply.clone())
		})
		.await;
		let result = segment(&dispatcher("segmentation", &base_url), scan()).await;
		assert!(result.success);
		let image_url = result.image_url.unwrap();
		let encoded = image_url.strip_prefix("data:image/jpeg;base64,").unwrap();
		assert_eq!(base64::decode(encoded).unwrap(), image);
	}

	#[tokio::test]
	async fn test_detail_is_reported() {
		let base_url = fake_backend(|_| Reply::json(400, r#"{"detail":"File must be a .npy file"}"#)).await;
		let result = segment(&dispatcher("segmentation", &base_url), scan()).await;
		assert_eq!(
			result,
			SegmentationResult {
				success: false,
				image_url: None,
				error: Some("File must be a .npy file".to_owned()),
			}
		);
	}

	#[tokio::test]
	async fn test_unreachable() {
		let result = segment(&dispatcher("segmentation", &unreachable_backend()), scan()).await;
		assert_eq!(
			result.error.as_deref(),
			Some("failed to connect to the segmentation service")
		);
	}

	#[test]
	fn test_image_data_url() {
		insta::assert_snapshot!(image_data_url(b"jpeg"), @"data:image/jpeg;base64,anBlZw==");
	}
}

use ahrc_app_common::Context;
use ahrc_util::error::Result;

pub async fn get(
	_context: &Context,
	_request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let response = http::Response::builder()
		.status(http::StatusCode::OK)
		.body(hyper::Body::from("ok"))
		.unwrap();
	Ok(response)
}

use derive_more::{Display, Error};

#[derive(Display, Debug, Error)]
pub enum Error {
	BadRequest,
	NotFound,
	Conflict,
	ServiceUnavailable,
}

pub fn bad_request() -> http::Response<hyper::Body> {
	status_response(http::StatusCode::BAD_REQUEST, "bad request")
}

pub fn not_found() -> http::Response<hyper::Body> {
	status_response(http::StatusCode::NOT_FOUND, "not found")
}

pub fn conflict() -> http::Response<hyper::Body> {
	status_response(http::StatusCode::CONFLICT, "conflict")
}

pub fn service_unavailable() -> http::Response<hyper::Body> {
	status_response(http::StatusCode::SERVICE_UNAVAILABLE, "service unavailable")
}

pub fn redirect(location: &'static str) -> http::Response<hyper::Body> {
	http::Response::builder()
		.status(http::StatusCode::SEE_OTHER)
		.header(http::header::LOCATION, location)
		.body(hyper::Body::empty())
		.unwrap()
}

fn status_response(status: http::StatusCode, body: &'static str) -> http::Response<hyper::Body> {
	http::Response::builder()
		.status(status)
		.body(hyper::Body::from(body))
		.unwrap()
}

impl Error {
	pub fn into_response(self) -> http::Response<hyper::Body> {
		match self {
			Error::BadRequest => bad_request(),
			Error::NotFound => not_found(),
			Error::Conflict => conflict(),
			Error::ServiceUnavailable => service_unavailable(),
		}
	}
}

use ahrc_util::id::Id;
use html::Node;

pub mod cervical;
pub mod health;
pub mod index;
pub mod irrigation;
pub mod logs;
pub mod oct;
pub mod toxicity;
pub mod tube_well;

pub fn html_response(status: http::StatusCode, html: String) -> http::Response<hyper::Body> {
	http::Response::builder()
		.status(status)
		.header(http::header::CONTENT_TYPE, "text/html; charset=utf-8")
		.body(hyper::Body::from(html))
		.unwrap()
}

/// A hidden input carrying a fresh submission key. Every render gets a new key.
pub fn form_key_field() -> Node {
	ahrc_ui::TextField::hidden("formKey", Id::new().to_string()).render()
}

pub const DUPLICATE_SUBMISSION: &str =
	"This form is already being submitted. Wait for the first submission to finish.";

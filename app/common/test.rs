use bytes::Bytes;
use std::{net::SocketAddr, sync::Arc};

/// A request as seen by a fake backend.
#[derive(Clone, Debug)]
pub struct Received {
	pub method: http::Method,
	pub path_and_query: String,
	pub content_type: Option<String>,
	pub body: Bytes,
}

impl Received {
	pub fn json(&self) -> serde_json::Value {
		serde_json::from_slice(&self.body).unwrap()
	}
}

pub struct Reply {
	pub status: u16,
	pub content_type: &'static str,
	pub body: Vec<u8>,
}

impl Reply {
	pub fn json(status: u16, body: &str) -> Reply {
		Reply {
			status,
			content_type: "application/json",
			body: body.as_bytes().to_vec(),
		}
	}

	pub fn text(status: u16, body: &str) -> Reply {
		Reply {
			status,
			content_type: "text/plain",
			body: body.as_bytes().to_vec(),
		}
	}

	pub fn bytes(status: u16, body: Vec<u8>) -> Reply {
		Reply {
			status,
			content_type: "image/jpeg",
			body,
		}
	}
}

/// Start a backend on a free local port that answers every request with `handler`. Returns its base url.
pub async fn fake_backend<H>(handler: H) -> String
where
	H: Fn(Received) -> Reply + Send + Sync + 'static,
{
	let addr: SocketAddr = ([127, 0, 0, 1], 0).into();
	let (addr, server) = ahrc_util::serve::bind(
		addr,
		handler,
		|handler: Arc<H>, request: http::Request<hyper::Body>| async move {
			let (parts, body) = request.into_parts();
			let body = hyper::body::to_bytes(body).await.unwrap();
			let received = Received {
				method: parts.method,
				path_and_query: parts
					.uri
					.path_and_query()
					.map(|path_and_query| path_and_query.as_str().to_owned())
					.unwrap_or_default(),
				content_type: parts
					.headers
					.get(http::header::CONTENT_TYPE)
					.and_then(|value| value.to_str().ok())
					.map(ToOwned::to_owned),
				body,
			};
			let reply = handler(received);
			http::Response::builder()
				.status(reply.status)
				.header(http::header::CONTENT_TYPE, reply.content_type)
				.body(hyper::Body::from(reply.body))
				.unwrap()
		},
	)
	.unwrap();
	tokio::spawn(server);
	format!("http://{}", addr)
}

/// A base url nothing is listening on.
pub fn unreachable_backend() -> String {
	let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);
	format!("http://{}", addr)
}

pub fn dispatcher(service: &'static str, base_url: &str) -> crate::dispatch::Dispatcher {
	crate::dispatch::Dispatcher::new(service, base_url.parse().unwrap(), reqwest::Client::new())
}

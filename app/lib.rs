use ahrc_app_common::{error::Error, Context};
use ahrc_util::{err, error::Result};
use std::{collections::BTreeMap, sync::Arc};

pub use ahrc_app_common::{BackendUrls, Options};

mod pages;

const STYLES: &str = include_str!("static/styles.css");

#[allow(clippy::cognitive_complexity)]
async fn handle(
	context: Arc<Context>,
	request: http::Request<hyper::Body>,
) -> http::Response<hyper::Body> {
	let method = request.method().clone();
	let uri = request.uri().clone();
	let path = uri.path();
	let query = uri.query();
	let path_components: Vec<_> = path.split('/').skip(1).collect();
	let search_params: Option<BTreeMap<String, String>> = query.map(|search_params| {
		url::form_urlencoded::parse(search_params.as_bytes())
			.into_owned()
			.collect()
	});
	let context = context.as_ref();
	let result = match (&method, path_components.as_slice()) {
		(&http::Method::GET, &["health"]) => self::pages::health::get(context, request).await,
		(&http::Method::GET, &["styles.css"]) => styles(),
		(&http::Method::GET, &[""]) => self::pages::index::get(context, request).await,
		(&http::Method::GET, &["irrigation"]) => {
			self::pages::irrigation::get(context, request).await
		}
		(&http::Method::POST, &["irrigation"]) => {
			self::pages::irrigation::post(context, request).await
		}
		(&http::Method::GET, &["tube_well"]) => self::pages::tube_well::get(context, request).await,
		(&http::Method::POST, &["tube_well"]) => {
			self::pages::tube_well::post(context, request).await
		}
		(&http::Method::GET, &["toxicity"]) => self::pages::toxicity::get(context, request).await,
		(&http::Method::POST, &["toxicity"]) => {
			self::pages::toxicity::post(context, request).await
		}
		(&http::Method::GET, &["oct"]) => self::pages::oct::get(context, request).await,
		(&http::Method::POST, &["oct"]) => self::pages::oct::post(context, request).await,
		(&http::Method::GET, &["cervical"]) => self::pages::cervical::get(context, request).await,
		(&http::Method::POST, &["cervical"]) => {
			self::pages::cervical::post(context, request).await
		}
		(&http::Method::POST, &["cervical", "validate"]) => {
			self::pages::cervical::validate::post(context, request).await
		}
		(&http::Method::GET, &["cervical", "statistics"]) => {
			self::pages::cervical::statistics::get(context, request).await
		}
		(&http::Method::GET, &["logs"]) => {
			self::pages::logs::get(context, request, search_params).await
		}
		(&http::Method::POST, &["logs"]) => self::pages::logs::post(context, request).await,
		_ => Err(Error::NotFound.into()),
	};
	match result {
		Ok(response) => response,
		Err(error) => match error.downcast::<Error>() {
			Ok(error) => error.into_response(),
			Err(error) => {
				tracing::error!(%method, %path, "{:#}", error);
				http::Response::builder()
					.status(http::StatusCode::INTERNAL_SERVER_ERROR)
					.body(hyper::Body::from("internal server error"))
					.unwrap()
			}
		},
	}
}

fn styles() -> Result<http::Response<hyper::Body>> {
	let response = http::Response::builder()
		.status(http::StatusCode::OK)
		.header(http::header::CONTENT_TYPE, "text/css; charset=utf-8")
		.body(hyper::Body::from(STYLES))
		.unwrap();
	Ok(response)
}

pub fn run(options: Options) -> Result<()> {
	tokio::runtime::Builder::new_multi_thread()
		.enable_all()
		.build()?
		.block_on(run_impl(options))
}

async fn run_impl(options: Options) -> Result<()> {
	let host = options.host;
	let port = options.port;
	tracing::info!(backends = ?options.backends, "starting");
	let context = Context::new(options);
	ahrc_util::serve::serve(host, port, context, handle)
		.await
		.map_err(|error| err!("failed to serve on {}:{}: {}", host, port, error))?;
	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;
	use std::net::SocketAddr;

	/// A context whose backends are all `base_url`.
	pub fn context(base_url: &str) -> Arc<Context> {
		let url: url::Url = base_url.parse().unwrap();
		Arc::new(Context::new(Options {
			host: [127, 0, 0, 1].into(),
			port: 0,
			backends: BackendUrls {
				irrigation: url.clone(),
				tube_well: url.clone(),
				toxicity: url.clone(),
				oct: url.clone(),
				cervical: url,
			},
		}))
	}

	pub fn unreachable_context() -> Arc<Context> {
		let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = listener.local_addr().unwrap();
		drop(listener);
		context(&format!("http://{}", addr))
	}

	/// A backend answering every request with `status` and a json `body`, returning its base url.
	pub fn json_backend(status: u16, body: &'static str) -> String {
		let addr: SocketAddr = ([127, 0, 0, 1], 0).into();
		let (addr, server) = ahrc_util::serve::bind(addr, (), move |_, _| async move {
			http::Response::builder()
				.status(status)
				.header(http::header::CONTENT_TYPE, "application/json")
				.body(hyper::Body::from(body))
				.unwrap()
		})
		.unwrap();
		tokio::spawn(server);
		format!("http://{}", addr)
	}

	pub async fn send(
		context: Arc<Context>,
		request: http::Request<hyper::Body>,
	) -> (http::StatusCode, http::HeaderMap, String) {
		let response = handle(context, request).await;
		let status = response.status();
		let headers = response.headers().clone();
		let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
		(status, headers, String::from_utf8(body.to_vec()).unwrap())
	}

	pub fn get(uri: &str) -> http::Request<hyper::Body> {
		http::Request::builder()
			.method(http::Method::GET)
			.uri(uri)
			.body(hyper::Body::empty())
			.unwrap()
	}

	pub fn post_form(uri: &str, body: &str) -> http::Request<hyper::Body> {
		http::Request::builder()
			.method(http::Method::POST)
			.uri(uri)
			.header(
				http::header::CONTENT_TYPE,
				"application/x-www-form-urlencoded",
			)
			.body(hyper::Body::from(body.to_owned()))
			.unwrap()
	}

	pub fn post_multipart(uri: &str, parts: &[(&str, Option<&str>, &str)]) -> http::Request<hyper::Body> {
		let mut body = String::new();
		for (name, file_name, value) in parts {
			body.push_str("--X-BOUNDARY\r\n");
			match file_name {
				Some(file_name) => {
					body.push_str(&format!(
						"Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
						name, file_name
					));
				}
				None => {
					body.push_str(&format!(
						"Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
						name
					));
				}
			}
			body.push_str(value);
			body.push_str("\r\n");
		}
		body.push_str("--X-BOUNDARY--\r\n");
		http::Request::builder()
			.method(http::Method::POST)
			.uri(uri)
			.header(
				http::header::CONTENT_TYPE,
				"multipart/form-data; boundary=X-BOUNDARY",
			)
			.body(hyper::Body::from(body))
			.unwrap()
	}

	#[tokio::test]
	async fn test_routes() {
		let context = unreachable_context();
		let (status, _, body) = send(context.clone(), get("/")).await;
		assert_eq!(status, http::StatusCode::OK);
		assert!(body.contains(r#"href="/tube_well""#));
		let (status, _, _) = send(context.clone(), get("/health")).await;
		assert_eq!(status, http::StatusCode::OK);
		let (status, headers, _) = send(context.clone(), get("/styles.css")).await;
		assert_eq!(status, http::StatusCode::OK);
		assert_eq!(headers[http::header::CONTENT_TYPE], "text/css; charset=utf-8");
		let (status, _, body) = send(context.clone(), get("/nope")).await;
		assert_eq!(status, http::StatusCode::NOT_FOUND);
		assert_eq!(body, "not found");
		let (status, _, _) = send(context, post_form("/health", "")).await;
		assert_eq!(status, http::StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn test_form_pages_render() {
		let context = unreachable_context();
		for path in &["/irrigation", "/tube_well", "/toxicity", "/oct", "/cervical"] {
			let (status, _, body) = send(context.clone(), get(path)).await;
			assert_eq!(status, http::StatusCode::OK, "{}", path);
			assert!(body.contains(r#"name="formKey""#), "{}", path);
		}
	}
}

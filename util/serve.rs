use backtrace::Backtrace;
use futures::FutureExt;
use std::{
	cell::RefCell, convert::Infallible, future::Future, net::SocketAddr, panic::AssertUnwindSafe,
	sync::Arc, time::Instant,
};

// A task local that stores the panic message and backtrace if a panic occurs while handling a request.
tokio::task_local! {
	static PANIC_MESSAGE_AND_BACKTRACE: RefCell<Option<(String, Backtrace)>>;
}

/// Serve `request_handler` on `host:port` until the server fails.
pub async fn serve<C, H, F>(
	host: std::net::IpAddr,
	port: u16,
	request_handler_context: C,
	request_handler: H,
) -> hyper::Result<()>
where
	C: Send + Sync + 'static,
	H: Fn(Arc<C>, http::Request<hyper::Body>) -> F + Send + Sync + 'static,
	F: Future<Output = http::Response<hyper::Body>> + Send + 'static,
{
	let addr = SocketAddr::new(host, port);
	let (addr, server) = bind(addr, request_handler_context, request_handler)?;
	tracing::info!("🚀 serving on {}", addr);
	server.await
}

/// Bind a listener and return the address it is bound to along with the future that runs the server. Binding to port 0 picks a free port.
pub fn bind<C, H, F>(
	addr: SocketAddr,
	request_handler_context: C,
	request_handler: H,
) -> hyper::Result<(SocketAddr, impl Future<Output = hyper::Result<()>>)>
where
	C: Send + Sync + 'static,
	H: Fn(Arc<C>, http::Request<hyper::Body>) -> F + Send + Sync + 'static,
	F: Future<Output = http::Response<hyper::Body>> + Send + 'static,
{
	async fn service<C, H, F>(
		request_handler: Arc<H>,
		request_handler_context: Arc<C>,
		request: http::Request<hyper::Body>,
	) -> Result<http::Response<hyper::Body>, Infallible>
	where
		C: Send + Sync + 'static,
		H: Fn(Arc<C>, http::Request<hyper::Body>) -> F + Send + Sync + 'static,
		F: Future<Output = http::Response<hyper::Body>> + Send + 'static,
	{
		let start = Instant::now();
		let method = request.method().clone();
		let path = request.uri().path().to_owned();
		let result = AssertUnwindSafe(request_handler(request_handler_context, request))
			.catch_unwind()
			.await;
		let response = result.unwrap_or_else(|_| {
			let message = PANIC_MESSAGE_AND_BACKTRACE
				.try_with(|panic_message_and_backtrace| {
					panic_message_and_backtrace
						.borrow()
						.as_ref()
						.map(|(message, backtrace)| format!("{}\n{:?}", message, backtrace))
				})
				.ok()
				.flatten()
				.unwrap_or_default();
			tracing::error!(%method, %path, "request handler panicked: {}", message);
			let mut response = http::Response::new(hyper::Body::from("internal server error"));
			*response.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
			response
		});
		tracing::info!(
			%method,
			%path,
			status = response.status().as_u16(),
			elapsed_ms = start.elapsed().as_millis() as u64
		);
		Ok(response)
	}
	// Install a panic hook that records the panic message and backtrace for the request that panicked.
	let previous_hook = std::panic::take_hook();
	std::panic::set_hook(Box::new(move |panic_info| {
		let value = (panic_info.to_string(), Backtrace::new());
		let recorded = PANIC_MESSAGE_AND_BACKTRACE
			.try_with(|panic_message_and_backtrace| {
				panic_message_and_backtrace.borrow_mut().replace(value);
			})
			.is_ok();
		if !recorded {
			previous_hook(panic_info);
		}
	}));
	// Wrap the request handler and context with Arc to share them with each connection.
	let request_handler = Arc::new(request_handler);
	let request_handler_context = Arc::new(request_handler_context);
	let make_service = hyper::service::make_service_fn(move |_| {
		let request_handler = request_handler.clone();
		let request_handler_context = request_handler_context.clone();
		async move {
			Ok::<_, Infallible>(hyper::service::service_fn(move |request| {
				let request_handler = request_handler.clone();
				let request_handler_context = request_handler_context.clone();
				PANIC_MESSAGE_AND_BACKTRACE.scope(RefCell::new(None), async move {
					service(request_handler, request_handler_context, request).await
				})
			}))
		}
	});
	let server = hyper::Server::try_bind(&addr)?.serve(make_service);
	let addr = server.local_addr();
	Ok((addr, server))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_bind_serves_requests_on_a_free_port() {
		let addr: SocketAddr = ([127, 0, 0, 1], 0).into();
		let (addr, server) = bind(addr, (), |_, request| async move {
			http::Response::new(hyper::Body::from(request.uri().path().to_owned()))
		})
		.unwrap();
		tokio::spawn(server);
		assert_ne!(addr.port(), 0);
		let client = hyper::Client::new();
		let uri: hyper::Uri = format!("http://{}/hello", addr).parse().unwrap();
		let response = client.get(uri).await.unwrap();
		assert_eq!(response.status(), http::StatusCode::OK);
		let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
		assert_eq!(&body[..], b"/hello");
	}

	#[tokio::test]
	async fn test_panicking_handler_responds_with_500() {
		let addr: SocketAddr = ([127, 0, 0, 1], 0).into();
		let (addr, server) = bind(addr, (), |_, _| async move {
			if true {
				panic!("boom");
			}
			http::Response::new(hyper::Body::empty())
		})
		.unwrap();
		tokio::spawn(server);
		let client = hyper::Client::new();
		let uri: hyper::Uri = format!("http://{}/", addr).parse().unwrap();
		let response = client.get(uri).await.unwrap();
		assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
	}
}

use self::{dispatch::Dispatcher, submission::SubmissionLocks};
use url::Url;

pub mod cervical;
pub mod dispatch;
pub mod error;
pub mod form;
pub mod irrigation;
pub mod logs;
pub mod segmentation;
pub mod submission;
pub mod toxicity;

#[cfg(test)]
mod test;

pub struct Options {
	pub host: std::net::IpAddr,
	pub port: u16,
	pub backends: BackendUrls,
}

/// Base urls of the services each flow forwards to.
#[derive(Clone, Debug)]
pub struct BackendUrls {
	/// Serves the rainfed flow and the logs.
	pub irrigation: Url,
	pub tube_well: Url,
	pub toxicity: Url,
	pub oct: Url,
	pub cervical: Url,
}

pub struct Dispatchers {
	pub irrigation: Dispatcher,
	pub tube_well: Dispatcher,
	pub toxicity: Dispatcher,
	pub oct: Dispatcher,
	pub cervical: Dispatcher,
}

impl Dispatchers {
	pub fn new(backends: &BackendUrls) -> Dispatchers {
		let client = reqwest::Client::new();
		let dispatcher = |service, base_url: &Url| {
			Dispatcher::new(service, base_url.clone(), client.clone())
		};
		Dispatchers {
			irrigation: dispatcher("irrigation", &backends.irrigation),
			tube_well: dispatcher("tube well", &backends.tube_well),
			toxicity: dispatcher("toxicity", &backends.toxicity),
			oct: dispatcher("segmentation", &backends.oct),
			cervical: dispatcher("cervical cancer", &backends.cervical),
		}
	}
}

pub struct Context {
	pub options: Options,
	pub dispatchers: Dispatchers,
	pub submissions: SubmissionLocks,
}

impl Context {
	pub fn new(options: Options) -> Context {
		let dispatchers = Dispatchers::new(&options.backends);
		Context {
			options,
			dispatchers,
			submissions: SubmissionLocks::default(),
		}
	}
}

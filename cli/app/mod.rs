use crate::AppOptions;
use ahrc_app::{BackendUrls, Options};
use ahrc_util::error::Result;

pub(crate) fn app(options: AppOptions) -> Result<()> {
	let backends = BackendUrls {
		irrigation: options.irrigation_api_url,
		tube_well: options.tube_well_api_url,
		toxicity: options.toxicity_api_url,
		oct: options.oct_api_url,
		cervical: options.cervical_api_url,
	};
	ahrc_app::run(Options {
		host: options.host,
		port: options.port,
		backends,
	})
}

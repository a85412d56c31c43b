use crate::dispatch::{DispatchError, Dispatcher};
use ahrc_irrigation::{
	rainfed_fallback, tube_well_fallback, IrrigationRequest, RainfedProcessRequest, RainfedResult,
	TubeWellProcessRequest, TubeWellRequest, TubeWellResult,
};
use chrono::{DateTime, Utc};

/// Ask the rainfed service for a decision, deciding locally if it cannot answer. `now` is read once the outcome is known.
pub async fn process_rainfed(
	dispatcher: &Dispatcher,
	request: &IrrigationRequest,
	now: impl Fn() -> DateTime<Utc>,
) -> RainfedResult {
	let outcome = dispatch_rainfed(dispatcher, request).await.and_then(|body| {
		RainfedResult::from_backend(body, now()).map_err(|error| dispatcher.invalid_response(error))
	});
	match outcome {
		Ok(result) => result,
		Err(error) => {
			tracing::warn!(
				service = dispatcher.service(),
				error = %error,
				"using the local rainfed fallback"
			);
			rainfed_fallback(request, now(), error.to_string())
		}
	}
}

/// Ask the tube well service for a decision, deciding locally if it cannot answer. `now` is read once the outcome is known.
pub async fn process_tube_well(
	dispatcher: &Dispatcher,
	request: &TubeWellRequest,
	now: impl Fn() -> DateTime<Utc>,
) -> TubeWellResult {
	let outcome = dispatch_tube_well(dispatcher, request).await.and_then(|body| {
		TubeWellResult::from_backend(body, now()).map_err(|error| dispatcher.invalid_response(error))
	});
	match outcome {
		Ok(result) => result,
		Err(error) => {
			tracing::warn!(
				service = dispatcher.service(),
				error = %error,
				"using the local tube well fallback"
			);
			tube_well_fallback(request, now(), error.to_string())
		}
	}
}

async fn dispatch_rainfed(
	dispatcher: &Dispatcher,
	request: &IrrigationRequest,
) -> Result<serde_json::Value, DispatchError> {
	let body = dispatcher
		.post_json("/process", &RainfedProcessRequest::from(request))
		.await?;
	dispatcher.decode(&body)
}

async fn dispatch_tube_well(
	dispatcher: &Dispatcher,
	request: &TubeWellRequest,
) -> Result<serde_json::Value, DispatchError> {
	let body = dispatcher
		.post_json("/process", &TubeWellProcessRequest::from(request))
		.await?;
	dispatcher.decode(&body)
}

use ahrc_util::id::Id;
use std::{
	collections::HashSet,
	sync::{Arc, Mutex},
};

/// The submission keys of forms whose request is in flight. A key is admitted once until its guard is dropped.
#[derive(Clone, Default)]
pub struct SubmissionLocks {
	in_flight: Arc<Mutex<HashSet<Id>>>,
}

/// Releases its key when dropped, whether the request completed or its handler was cancelled.
pub struct SubmissionGuard {
	locks: SubmissionLocks,
	key: Id,
}

impl SubmissionLocks {
	pub fn try_acquire(&self, key: Id) -> Option<SubmissionGuard> {
		let mut in_flight = self
			.in_flight
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner());
		if !in_flight.insert(key) {
			return None;
		}
		Some(SubmissionGuard {
			locks: self.clone(),
			key,
		})
	}

	pub fn is_in_flight(&self, key: Id) -> bool {
		self.in_flight
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.contains(&key)
	}
}

impl Drop for SubmissionGuard {
	fn drop(&mut self) {
		self.locks
			.in_flight
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.remove(&self.key);
	}
}

/// The outcome of trying to lock a form's submission key.
pub enum Submission {
	/// The form carried no usable key, so nothing is locked.
	Unkeyed,
	Locked(SubmissionGuard),
	Duplicate,
}

impl SubmissionLocks {
	pub fn acquire_for(&self, form_key: Option<&str>) -> Submission {
		let key = match form_key.and_then(|form_key| form_key.parse::<Id>().ok()) {
			Some(key) => key,
			None => return Submission::Unkeyed,
		};
		match self.try_acquire(key) {
			Some(guard) => Submission::Locked(guard),
			None => {
				tracing::warn!(%key, "duplicate submission rejected");
				Submission::Duplicate
			}
		}
	}
}

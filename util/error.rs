pub use anyhow::{Error, Result};

/// Create an ad hoc error from a format string.
#[macro_export]
macro_rules! err {
	($($t:tt)*) => {
		$crate::error::Error::msg(format!($($t)*))
	};
}

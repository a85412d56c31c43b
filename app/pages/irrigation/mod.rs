mod get;
mod page;
mod post;

pub use self::get::get;
pub use self::page::{irrigation_fields, result_row, source_alert};
pub use self::post::post;

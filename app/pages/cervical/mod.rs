mod get;
mod page;
mod post;
pub mod statistics;
pub mod validate;

pub use self::get::get;
pub use self::post::post;

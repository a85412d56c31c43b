/*!
This crate holds the irrigation domain: the typed requests captured from the rainfed and tube well forms, their validation, the result shapes rendered back to the user, the fallback decision used when the irrigation service cannot answer, and the records the service keeps of past decisions.
*/

mod fallback;
mod form;
mod record;
mod request;
mod result;

pub use self::fallback::*;
pub use self::form::*;
pub use self::record::*;
pub use self::request::*;
pub use self::result::*;

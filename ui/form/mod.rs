mod field_label;
mod file_field;
mod form;
mod select_field;
mod text_field;

pub use self::field_label::*;
pub use self::file_field::*;
pub use self::form::*;
pub use self::select_field::*;
pub use self::text_field::*;

mod alert;
mod button;
mod form;
mod image;
mod layout;
mod tab_bar;
mod table;
mod token;

pub use self::alert::*;
pub use self::button::*;
pub use self::form::*;
pub use self::image::*;
pub use self::layout::*;
pub use self::tab_bar::*;
pub use self::table::*;
pub use self::token::*;

pub mod error;
pub mod id;
pub mod serve;
pub mod time;

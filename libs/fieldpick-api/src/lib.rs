// Lets `#[derive(Record)]` expand to `fieldpick_api::...` paths inside this crate's own tests.
extern crate self as fieldpick_api;

pub mod json;
pub mod mapping;
pub mod path;
pub mod record;
pub mod value;

pub use fieldpick_api_derive::Record;
pub use mapping::Mapping;
pub use path::FieldPath;
pub use record::{Record, ToValue};
pub use value::Value;

//! Field selection for structured records.
//!
//! A field spec is `"Source.Path"` or `"Source.Path->Dest.Path"`. Converting a
//! record keeps only the selected fields, written as nested mappings at their
//! destination paths.
//!
//! - `spec`: parse `"src->dst"` strings into [`FieldSpec`]
//! - `accessor`: read a value at a dot-notation path of a flattened record
//! - `builder`: write a value at a dot-notation path, creating parents
//! - `convert`: [`Converter`] and the `convert*` entry points

pub mod accessor;
pub mod builder;
pub mod convert;
pub mod error;
pub mod spec;

pub use convert::{
    convert, convert_or_error, convert_record, convert_record_or_error, convert_records,
    convert_records_or_error, ConvertOptions, Converter,
};
pub use error::{ErrorKind, SelectError};
pub use fieldpick_api::{FieldPath, Mapping, Value};
pub use spec::FieldSpec;

use serde::Deserialize;

use fieldpick_api::{Mapping, Record, ToValue, Value};

use crate::accessor;
use crate::builder;
use crate::error::SelectError;
use crate::spec::{self, FieldSpec};

/// Conversion options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Validate every field spec before reading any record.
    /// Empty path segments then fail with `InvalidSpec` up front instead of
    /// surfacing as lookup errors.
    pub strict_specs: bool,
}

/// Field selector built once from a list of field spec strings.
///
/// Every conversion flattens the record, then for each spec in order reads
/// the source path and writes it at the destination path. The first error
/// aborts the call and the partially built mapping is dropped.
#[derive(Debug, Clone)]
pub struct Converter {
    specs: Vec<FieldSpec>,
    options: ConvertOptions,
}

impl Converter {
    pub fn new<S: AsRef<str>>(specs: &[S]) -> Result<Self, SelectError> {
        Self::with_options(specs, ConvertOptions::default())
    }

    pub fn with_options<S: AsRef<str>>(
        specs: &[S],
        options: ConvertOptions,
    ) -> Result<Self, SelectError> {
        let specs = spec::parse_all(specs, options.strict_specs)?;
        Ok(Self { specs, options })
    }

    /// Build from already parsed specs. Validation is up to the caller.
    pub fn from_specs(specs: Vec<FieldSpec>) -> Self {
        Self {
            specs,
            options: ConvertOptions::default(),
        }
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    pub fn convert_record<R: Record + ?Sized>(&self, record: &R) -> Result<Mapping, SelectError> {
        tracing::debug!(fields = self.specs.len(), "converting record");
        self.convert_flattened(&record.flatten())
            .inspect_err(|e| tracing::debug!(error = %e, "record conversion failed"))
    }

    /// Convert each record independently. Output order matches input order;
    /// any failing element fails the whole batch.
    pub fn convert_records<R: Record>(&self, records: &[R]) -> Result<Vec<Mapping>, SelectError> {
        tracing::debug!(fields = self.specs.len(), records = records.len(), "converting records");
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                self.convert_flattened(&record.flatten())
                    .map_err(|e| e.in_element(index))
            })
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| tracing::debug!(error = %e, "collection conversion failed"))
    }

    /// Convert an already introspected value.
    ///
    /// - `Map` → one record, returns `Map`
    /// - `Array` → collection, every element must be a `Map`, returns `Array`
    /// - anything else → `NotARecord`
    pub fn convert_value(&self, value: &Value) -> Result<Value, SelectError> {
        let result = match value {
            Value::Map(flattened) => {
                tracing::debug!(fields = self.specs.len(), "converting record");
                self.convert_flattened(flattened).map(Value::Map)
            }
            Value::Array(items) => {
                tracing::debug!(fields = self.specs.len(), records = items.len(), "converting records");
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        self.convert_element(item)
                            .map_err(|e| e.in_element(index))
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array)
            }
            other => Err(SelectError::NotARecord {
                found: other.type_name(),
            }),
        };
        result.inspect_err(|e| tracing::debug!(error = %e, "conversion failed"))
    }

    /// Select fields out of a record that is already flattened.
    pub fn convert_flattened(&self, flattened: &Mapping) -> Result<Mapping, SelectError> {
        let mut dest = Mapping::new();
        for spec in &self.specs {
            let value = accessor::get(flattened, spec.source())?;
            tracing::trace!(spec = %spec, kind = value.type_name(), "selected field");
            builder::set(&mut dest, spec.dest(), value.clone())?;
        }
        Ok(dest)
    }

    fn convert_element(&self, item: &Value) -> Result<Value, SelectError> {
        match item {
            Value::Map(flattened) => self.convert_flattened(flattened).map(Value::Map),
            other => Err(SelectError::NotARecord {
                found: other.type_name(),
            }),
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Free functions
// ═══════════════════════════════════════════════════════════════

/// Select `fields` from `item`, a record or a slice/array/`Vec` of records.
///
/// Returns `Value::Map` for a single record and `Value::Array` of maps for a
/// collection. Prefer this over [`convert`] when `fields` comes from user input.
pub fn convert_or_error<T, S>(item: &T, fields: &[S]) -> Result<Value, SelectError>
where
    T: ToValue + ?Sized,
    S: AsRef<str>,
{
    Converter::new(fields)?.convert_value(&item.to_value())
}

/// Like [`convert_or_error`], but panics if a field cannot be found or set.
///
/// Intended for field lists fixed at compile time, where a failure is a typo.
///
/// ```ignore
/// let users = vec![User { id: "123".into(), some: ..., other: true }];
/// let out = convert(&users, &["ID", "Some.Nested.Field"]);
/// // [{ID: "123", Some: {Nested: {Field: "abc"}}}]
/// ```
pub fn convert<T, S>(item: &T, fields: &[S]) -> Value
where
    T: ToValue + ?Sized,
    S: AsRef<str>,
{
    match convert_or_error(item, fields) {
        Ok(value) => value,
        Err(e) => panic!("fieldpick::convert: {e}"),
    }
}

pub fn convert_record_or_error<R, S>(record: &R, fields: &[S]) -> Result<Mapping, SelectError>
where
    R: Record + ?Sized,
    S: AsRef<str>,
{
    Converter::new(fields)?.convert_record(record)
}

/// Typed single-record form of [`convert`].
pub fn convert_record<R, S>(record: &R, fields: &[S]) -> Mapping
where
    R: Record + ?Sized,
    S: AsRef<str>,
{
    match convert_record_or_error(record, fields) {
        Ok(map) => map,
        Err(e) => panic!("fieldpick::convert: {e}"),
    }
}

pub fn convert_records_or_error<R, S>(records: &[R], fields: &[S]) -> Result<Vec<Mapping>, SelectError>
where
    R: Record,
    S: AsRef<str>,
{
    Converter::new(fields)?.convert_records(records)
}

pub fn convert_records<R, S>(records: &[R], fields: &[S]) -> Vec<Mapping>
where
    R: Record,
    S: AsRef<str>,
{
    match convert_records_or_error(records, fields) {
        Ok(maps) => maps,
        Err(e) => panic!("fieldpick::convert: {e}"),
    }
}

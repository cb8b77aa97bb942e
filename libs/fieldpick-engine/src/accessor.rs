use fieldpick_api::{FieldPath, Mapping, Value};

use crate::error::SelectError;

/// Resolve `path` against a flattened record.
///
/// Every segment but the last must land on a mapping. The final value is
/// returned as-is, nested mappings included.
pub fn get<'a>(flattened: &'a Mapping, path: &FieldPath) -> Result<&'a Value, SelectError> {
    let (last, parents) = path.split_last().ok_or_else(|| SelectError::InvalidSpec {
        spec: String::new(),
        reason: "empty path",
    })?;

    let mut current = flattened;
    for segment in parents {
        let value = current
            .get(segment)
            .ok_or_else(|| not_found(path, segment))?;
        current = value.as_map().ok_or_else(|| SelectError::InvalidPath {
            path: path.to_string(),
            segment: segment.clone(),
            found: value.type_name(),
        })?;
    }

    current.get(last).ok_or_else(|| not_found(path, last))
}

fn not_found(path: &FieldPath, segment: &str) -> SelectError {
    SelectError::FieldNotFound {
        path: path.to_string(),
        segment: segment.to_string(),
    }
}

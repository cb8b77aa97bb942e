use fieldpick_api::{FieldPath, Mapping, Value};

use crate::error::SelectError;

/// Write `value` at `path` inside `dest`, creating intermediate mappings.
///
/// Absent or null intermediates become empty mappings; any other non-map
/// intermediate fails with `InvalidPath`. The final segment is overwritten
/// unconditionally, so the last write to a key wins.
pub fn set(dest: &mut Mapping, path: &FieldPath, value: Value) -> Result<(), SelectError> {
    let (last, parents) = path.split_last().ok_or_else(|| SelectError::InvalidSpec {
        spec: String::new(),
        reason: "empty path",
    })?;

    let mut current = dest;
    for segment in parents {
        current = current
            .child_or_insert(segment)
            .map_err(|found| SelectError::InvalidPath {
                path: path.to_string(),
                segment: segment.clone(),
                found,
            })?;
    }

    if let Some(previous) = current.insert(last.clone(), value) {
        tracing::trace!(path = %path, previous = previous.type_name(), "overwrote destination value");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn sets_top_level_key() {
        let mut dest = Mapping::new();
        set(&mut dest, &"ID".into(), Value::from("123")).unwrap();
        assert_eq!(dest.get("ID"), Some(&Value::from("123")));
        assert_eq!(dest.len(), 1);
    }

    #[test]
    fn auto_vivifies_intermediate_mappings() {
        let mut dest = Mapping::new();
        set(&mut dest, &"Renamed.Deep.Location".into(), Value::from("abc")).unwrap();

        let deep: Mapping = [("Location", "abc")].into_iter().collect();
        let mut renamed = Mapping::new();
        renamed.insert("Deep", deep);
        let mut expected = Mapping::new();
        expected.insert("Renamed", renamed);
        assert_eq!(dest, expected);
    }

    #[test]
    fn merges_into_existing_mapping() {
        let mut dest = Mapping::new();
        set(&mut dest, &"A.x".into(), Value::from(1_i64)).unwrap();
        set(&mut dest, &"A.y".into(), Value::from(2_i64)).unwrap();
        let a = dest.get("A").and_then(Value::as_map).unwrap();
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn last_write_wins() {
        let mut dest = Mapping::new();
        set(&mut dest, &"A.x".into(), Value::from(1_i64)).unwrap();
        set(&mut dest, &"A.x".into(), Value::from(2_i64)).unwrap();
        let a = dest.get("A").and_then(Value::as_map).unwrap();
        assert_eq!(a.get("x"), Some(&Value::Int64(2)));
    }

    #[test]
    fn replaces_null_intermediate() {
        let mut dest = Mapping::new();
        dest.insert("A", Value::Null);
        set(&mut dest, &"A.x".into(), Value::from(true)).unwrap();
        assert!(dest.get("A").is_some_and(Value::is_map));
    }

    #[test]
    fn scalar_intermediate_is_invalid_path() {
        let mut dest = Mapping::new();
        set(&mut dest, &"A".into(), Value::from("leaf")).unwrap();
        let err = set(&mut dest, &"A.x".into(), Value::from(1_i64)).unwrap_err();
        assert_eq!(
            err,
            SelectError::InvalidPath {
                path: "A.x".into(),
                segment: "A".into(),
                found: "string",
            }
        );
        assert_eq!(dest.get("A"), Some(&Value::from("leaf")));
    }

    #[test]
    fn empty_path_is_invalid_spec() {
        let mut dest = Mapping::new();
        let err = set(&mut dest, &FieldPath::default(), Value::Null).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSpec);
    }
}

use std::fmt;

/// Separator between segments of a dot-notation path.
pub const SEPARATOR: char = '.';

/// Dot-notation path into a mapping: `"Some.Nested.Field"` → `["Some", "Nested", "Field"]`.
///
/// Segments are kept verbatim, including empty ones (`"a..b"`).
/// Callers decide whether an empty segment is an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Split `path` on `.`. Never yields an empty path: `""` is one empty segment.
    pub fn parse(path: &str) -> Self {
        Self(path.split(SEPARATOR).map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_empty_segment(&self) -> bool {
        self.0.iter().any(String::is_empty)
    }

    /// `(last, parents)`, or `None` for an empty path.
    pub fn split_last(&self) -> Option<(&String, &[String])> {
        self.0.split_last()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

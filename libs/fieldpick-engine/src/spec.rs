use std::fmt;
use std::str::FromStr;

use fieldpick_api::FieldPath;

use crate::error::SelectError;

/// Operator separating source and destination paths: `"Some.Field->Renamed"`.
pub const RENAME_OPERATOR: &str = "->";

/// One parsed field selection: where to read from, where to write to.
///
/// Grammar: `path ["->" path]`, `path = segment ("." segment)*`.
/// Without a rename the destination equals the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    source: FieldPath,
    dest: FieldPath,
    renamed: bool,
}

impl FieldSpec {
    /// Parse without validating segments.
    ///
    /// Splits on the first `->` only. Empty segments are kept and surface later
    /// as lookup errors (or as `InvalidSpec` via [`FieldSpec::validate`]).
    pub fn parse(spec: &str) -> Self {
        match spec.split_once(RENAME_OPERATOR) {
            Some((from, to)) => Self {
                source: FieldPath::parse(from),
                dest: FieldPath::parse(to),
                renamed: true,
            },
            None => {
                let source = FieldPath::parse(spec);
                Self {
                    dest: source.clone(),
                    source,
                    renamed: false,
                }
            }
        }
    }

    pub fn source(&self) -> &FieldPath {
        &self.source
    }

    pub fn dest(&self) -> &FieldPath {
        &self.dest
    }

    pub fn is_renamed(&self) -> bool {
        self.renamed
    }

    /// Reject specs with an empty segment on either side of the rename.
    pub fn validate(&self) -> Result<(), SelectError> {
        let reason = if self.source.has_empty_segment() {
            "empty segment in source path"
        } else if self.dest.has_empty_segment() {
            "empty segment in destination path"
        } else {
            return Ok(());
        };
        Err(SelectError::InvalidSpec {
            spec: self.to_string(),
            reason,
        })
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.renamed {
            write!(f, "{}{RENAME_OPERATOR}{}", self.source, self.dest)
        } else {
            write!(f, "{}", self.source)
        }
    }
}

/// Strict parse: [`FieldSpec::parse`] followed by [`FieldSpec::validate`].
impl FromStr for FieldSpec {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = Self::parse(s);
        spec.validate()?;
        Ok(spec)
    }
}

/// Parse every spec in order. With `strict`, the first invalid one fails the batch.
pub fn parse_all<S: AsRef<str>>(specs: &[S], strict: bool) -> Result<Vec<FieldSpec>, SelectError> {
    specs
        .iter()
        .map(|s| {
            let spec = FieldSpec::parse(s.as_ref());
            if strict {
                spec.validate()?;
            }
            Ok(spec)
        })
        .collect()
}

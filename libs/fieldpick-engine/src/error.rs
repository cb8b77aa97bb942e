/// Category of a selection error, independent of where in a collection it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed field spec string (empty path segment).
    InvalidSpec,
    /// A source path segment does not exist.
    FieldNotFound,
    /// A segment indexes into a value that is not a mapping.
    InvalidPath,
    /// Top-level input is neither a record nor a collection of records.
    NotARecord,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectError {
    #[error("invalid field spec '{spec}': {reason}")]
    InvalidSpec { spec: String, reason: &'static str },

    #[error("field '{segment}' not found in path '{path}'")]
    FieldNotFound { path: String, segment: String },

    #[error("cannot index into {found} at '{segment}' in path '{path}'")]
    InvalidPath {
        path: String,
        segment: String,
        found: &'static str,
    },

    #[error("expected a record or a collection of records, found {found}")]
    NotARecord { found: &'static str },

    #[error("element {index}: {source}")]
    Element {
        index: usize,
        source: Box<SelectError>,
    },
}

impl SelectError {
    /// Kind of the underlying failure. `Element` reports the kind it wraps.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SelectError::InvalidSpec { .. } => ErrorKind::InvalidSpec,
            SelectError::FieldNotFound { .. } => ErrorKind::FieldNotFound,
            SelectError::InvalidPath { .. } => ErrorKind::InvalidPath,
            SelectError::NotARecord { .. } => ErrorKind::NotARecord,
            SelectError::Element { source, .. } => source.kind(),
        }
    }

    /// Attribute the error to element `index` of a collection.
    pub fn in_element(self, index: usize) -> Self {
        SelectError::Element {
            index,
            source: Box::new(self),
        }
    }
}

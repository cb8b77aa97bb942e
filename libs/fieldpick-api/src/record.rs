use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use crate::mapping::Mapping;
use crate::value::Value;

/// Conversion of a field value into the canonical `Value` tree.
///
/// Structured values (anything implementing `Record`) must expand into
/// `Value::Map` so that nested fields stay addressable by dot-notation.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// A structured value with named fields.
///
/// `flatten()` performs a deep expand: every structured sub-field becomes a
/// nested `Mapping`, at every depth, whether or not it is selected later.
/// Usually implemented with `#[derive(Record)]`.
pub trait Record {
    fn flatten(&self) -> Mapping;
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

macro_rules! to_value_signed {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Value {
                Value::Int64(*self as i64)
            }
        })*
    };
}

macro_rules! to_value_unsigned {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Value {
                Value::UInt64(*self as u64)
            }
        })*
    };
}

to_value_signed!(i8, i16, i32, i64, isize);
to_value_unsigned!(u8, u16, u32, u64, usize);

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float64(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float64(*self)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::Null
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for Mapping {
    fn to_value(&self) -> Value {
        Value::Map(self.clone())
    }
}

// ---------------------------------------------------------------------------
// Wrappers: pointers and optionals are transparent
// ---------------------------------------------------------------------------

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Rc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.clone(), v.to_value())).collect())
    }
}

impl<T: ToValue, S: BuildHasher> ToValue for HashMap<String, T, S> {
    fn to_value(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.clone(), v.to_value())).collect())
    }
}

// ---------------------------------------------------------------------------
// Record forwarding
// ---------------------------------------------------------------------------

impl Record for Mapping {
    fn flatten(&self) -> Mapping {
        self.clone()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn flatten(&self) -> Mapping {
        (**self).flatten()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn flatten(&self) -> Mapping {
        (**self).flatten()
    }
}

impl<R: Record + ?Sized> Record for Arc<R> {
    fn flatten(&self) -> Mapping {
        (**self).flatten()
    }
}

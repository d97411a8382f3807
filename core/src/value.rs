//! Scalar value type and conversions

use crate::error::ActionError;
use std::borrow::Cow;

//------------------------------------------------------------------------------
// Value Definition
//------------------------------------------------------------------------------

/// A scalar value accepted by the store.
///
/// The set of kinds is closed: integers, reals, text, byte sequences, and an
/// explicit NULL (distinct from "never set"). Booleans convert to `Integer`
/// 0/1. Kinds outside this set are rejected at the conversion boundary with
/// [`ActionError::InvalidArgument`], before any handler interaction.
#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Integer value (i64)
    Integer(i64),
    /// Real value (f64)
    Real(f64),
    /// Text value
    Text(String),
    /// Binary data
    Blob(Vec<u8>),
    /// NULL value
    #[default]
    Null,
}

impl Value {
    /// Returns true if this value is NULL.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the integer value if this is an INTEGER.
    #[inline]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the real value if this is a REAL.
    #[inline]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Real(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text value if this is TEXT.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the binary data if this is a BLOB.
    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Blob(value) => Some(value.as_slice()),
            _ => None,
        }
    }
}

/// The canonical string form used for positional selection arguments.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Text(text) => f.write_str(text),
            Value::Blob(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            Value::Null => Ok(()),
        }
    }
}

//------------------------------------------------------------------------------
// Infallible conversions
//------------------------------------------------------------------------------

/// Macro to implement From<integer> for Value (converts to INTEGER)
macro_rules! impl_from_int_for_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(value as i64)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Value::Integer(*value as i64)
                }
            }
        )*
    };
}

impl_from_int_for_value!(i8, i16, i32, i64, isize, u8, u16, u32, bool);

/// Macro to implement From<float> for Value (converts to REAL)
macro_rules! impl_from_float_for_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Real(value as f64)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Value::Real(*value as f64)
                }
            }
        )*
    };
}

impl_from_float_for_value!(f32, f64);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Value::Text(value.into_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Blob(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Blob(value.to_vec())
    }
}

impl From<Cow<'_, [u8]>> for Value {
    fn from(value: Cow<'_, [u8]>) -> Self {
        Value::Blob(value.into_owned())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

//------------------------------------------------------------------------------
// Fallible conversions
//------------------------------------------------------------------------------

/// Macro to implement TryFrom<integer> for Value for widths that may not fit
/// in the store's INTEGER representation.
macro_rules! impl_try_from_int_for_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<$ty> for Value {
                type Error = ActionError;

                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    i64::try_from(value).map(Value::Integer).map_err(|_| {
                        ActionError::InvalidArgument(format!(
                            "integer {value} is out of range for the store"
                        ))
                    })
                }
            }
        )*
    };
}

impl_try_from_int_for_value!(u64, u128, usize, i128);

#[cfg(feature = "serde")]
impl TryFrom<serde_json::Value> for Value {
    type Error = ActionError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(b.into()),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else if n.is_f64() {
                    n.as_f64().map(Value::Real).ok_or_else(|| {
                        ActionError::InvalidArgument(format!("number {n} is not representable"))
                    })
                } else {
                    Err(ActionError::InvalidArgument(format!(
                        "integer {n} is out of range for the store"
                    )))
                }
            }
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Array(_) => Err(ActionError::InvalidArgument(
                "arrays are not scalar store values".to_string(),
            )),
            serde_json::Value::Object(_) => Err(ActionError::InvalidArgument(
                "objects are not scalar store values".to_string(),
            )),
        }
    }
}

//------------------------------------------------------------------------------
// Driver conversions
//------------------------------------------------------------------------------

#[cfg(feature = "rusqlite")]
impl rusqlite::types::ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        use rusqlite::types::{ToSqlOutput, ValueRef};

        Ok(match self {
            Value::Integer(i) => ToSqlOutput::Borrowed(ValueRef::Integer(*i)),
            Value::Real(r) => ToSqlOutput::Borrowed(ValueRef::Real(*r)),
            Value::Text(text) => ToSqlOutput::Borrowed(ValueRef::Text(text.as_bytes())),
            Value::Blob(bytes) => ToSqlOutput::Borrowed(ValueRef::Blob(bytes)),
            Value::Null => ToSqlOutput::Borrowed(ValueRef::Null),
        })
    }
}

#[cfg(feature = "rusqlite")]
impl From<rusqlite::types::ValueRef<'_>> for Value {
    fn from(value: rusqlite::types::ValueRef<'_>) -> Self {
        use rusqlite::types::ValueRef;

        match value {
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(r) => Value::Real(r),
            ValueRef::Text(text) => Value::Text(String::from_utf8_lossy(text).into_owned()),
            ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
            ValueRef::Null => Value::Null,
        }
    }
}

#[cfg(feature = "rusqlite")]
impl rusqlite::types::FromSql for Value {
    fn column_result(
        value: rusqlite::types::ValueRef<'_>,
    ) -> rusqlite::types::FromSqlResult<Self> {
        Ok(Value::from(value))
    }
}

#[cfg(feature = "rusqlite")]
impl From<rusqlite::types::Value> for Value {
    fn from(value: rusqlite::types::Value) -> Self {
        match value {
            rusqlite::types::Value::Integer(i) => Value::Integer(i),
            rusqlite::types::Value::Real(r) => Value::Real(r),
            rusqlite::types::Value::Text(text) => Value::Text(text),
            rusqlite::types::Value::Blob(bytes) => Value::Blob(bytes),
            rusqlite::types::Value::Null => Value::Null,
        }
    }
}

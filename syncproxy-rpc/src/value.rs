//! Runtime representation of parameter values.
//!
//! This module provides the closed `Value` enum stored in a
//! [`ParameterStore`], along with the conversion traits typed accessors are
//! built on.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{AccessorConfig, CollectionCheck, NumericCoercion};
use crate::store::ParameterStore;

/// Runtime representation of any value a parameter store can hold.
///
/// There is no null variant: an unset field is a missing key.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),

    /// Nested key-value structure
    Store(ParameterStore),

    /// Ordered list, not necessarily homogeneous
    List(Vec<Value>),
}

/// Variant tag of a [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    Bool,
    Integer,
    Float,
    String,
    Store,
    List,
}

macro_rules! impl_scalar_accessors {
    ($($method:ident -> $variant:ident : $ty:ty),* $(,)?) => {
        impl Value {
            $(
                #[doc = concat!("Try to extract as ", stringify!($ty), ".")]
                pub fn $method(&self) -> Option<$ty> {
                    match self {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            )*
        }
    };
}

impl_scalar_accessors! {
    as_bool -> Bool: bool,
    as_i64 -> Integer: i64,
    as_f64 -> Float: f64,
}

impl Value {
    /// Try to extract as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to extract as a nested store reference.
    pub fn as_store(&self) -> Option<&ParameterStore> {
        match self {
            Value::Store(v) => Some(v),
            _ => None,
        }
    }

    /// Try to extract as a list reference.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// Try to extract as a mutable list reference.
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Store(_) => ValueKind::Store,
            Value::List(_) => ValueKind::List,
        }
    }

    /// Check if this value is a scalar or a string.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Value::Store(_) | Value::List(_))
    }
}

/// Trait for types that can be written into a parameter store.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Trait for types that can be read back from a parameter store.
///
/// Returns `None` whenever the stored shape does not match; never panics.
pub trait FromValue: Sized {
    fn from_value(value: &Value, config: &AccessorConfig) -> Option<Self>;
}

macro_rules! impl_value_conversions {
    ($($ty:ty => $variant:ident, $accessor:ident);* $(;)?) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }

            impl FromValue for $ty {
                fn from_value(v: &Value, _config: &AccessorConfig) -> Option<Self> {
                    v.$accessor()
                }
            }
        )*
    };
}

impl_value_conversions! {
    bool => Bool, as_bool;
    i64 => Integer, as_i64;
}

impl IntoValue for i32 {
    fn into_value(self) -> Value {
        Value::Integer(i64::from(self))
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl FromValue for f64 {
    fn from_value(v: &Value, config: &AccessorConfig) -> Option<Self> {
        match (v, config.numeric) {
            (Value::Float(f), _) => Some(*f),
            (Value::Integer(i), NumericCoercion::Widen) => Some(*i as f64),
            _ => None,
        }
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl FromValue for String {
    fn from_value(v: &Value, _config: &AccessorConfig) -> Option<Self> {
        v.as_str().map(|s| s.to_string())
    }
}

impl IntoValue for ParameterStore {
    fn into_value(self) -> Value {
        Value::Store(self)
    }
}

impl FromValue for ParameterStore {
    fn from_value(v: &Value, _config: &AccessorConfig) -> Option<Self> {
        v.as_store().cloned()
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl FromValue for Value {
    fn from_value(v: &Value, _config: &AccessorConfig) -> Option<Self> {
        Some(v.clone())
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(v: &Value, config: &AccessorConfig) -> Option<Self> {
        let list = v.as_list()?;
        let (first, rest) = list.split_first()?;
        let first = T::from_value(first, config)?;

        let mut out = Vec::with_capacity(list.len());
        out.push(first);
        match config.collections {
            CollectionCheck::FirstElement => {
                out.extend(rest.iter().filter_map(|item| T::from_value(item, config)));
            }
            CollectionCheck::AllElements => {
                for item in rest {
                    out.push(T::from_value(item, config)?);
                }
            }
        }
        Some(out)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<ParameterStore> for Value {
    fn from(v: ParameterStore) -> Self {
        Value::Store(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Integer(v) => serializer.serialize_i64(*v),
            Value::Float(v) if !v.is_finite() => Err(serde::ser::Error::custom(format!(
                "non-finite float {v} has no wire representation"
            ))),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::Store(v) => v.serialize(serializer),
            Value::List(v) => serializer.collect_seq(v),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, number, string, list or map")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(match i64::try_from(v) {
            Ok(v) => Value::Integer(v),
            Err(_) => Value::Float(v as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Value, A::Error> {
        ParameterStore::from_map_access(map).map(Value::Store)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

//! Generic typed accessors over a [`ParameterStore`].
//!
//! Every field of every RPC message goes through [`read`] and [`write`]:
//!
//! - a setter given `Some(v)` stores `v` under the field's wire key, and
//!   given `None` removes the key;
//! - a getter returns `None` when the key is missing *or* when the stored
//!   value does not have the declared shape. It never fails.
//!
//! Concrete messages only declare their fields as [`Field`] descriptors
//! (usually through `rpc_request!` / `rpc_struct!`) and get the contract for
//! free via [`Parameters`].

use std::fmt;
use std::marker::PhantomData;

use crate::config::AccessorConfig;
use crate::store::ParameterStore;
use crate::value::{FromValue, IntoValue};

/// A declared field: its wire key and its value type `T`.
pub struct Field<T> {
    key: &'static str,
    _ty: PhantomData<fn() -> T>,
}

impl<T> Field<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _ty: PhantomData,
        }
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("key", &self.key)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

/// Read a typed field. Missing and malformed values are both `None`.
pub fn read<T: FromValue>(
    store: &ParameterStore,
    field: Field<T>,
    config: &AccessorConfig,
) -> Option<T> {
    let raw = store.get(field.key)?;
    let value = T::from_value(raw, config);
    if value.is_none() {
        tracing::trace!(
            key = field.key,
            expected = std::any::type_name::<T>(),
            found = %raw.kind(),
            "ignoring malformed parameter"
        );
    }
    value
}

/// Write a typed field. `None` removes the key.
pub fn write<T: IntoValue>(store: &mut ParameterStore, field: Field<T>, value: Option<T>) {
    match value {
        Some(v) => {
            store.set(field.key, v);
        }
        None => {
            store.remove(field.key);
        }
    }
}

/// Store-backed objects with typed field access.
pub trait Parameters {
    fn store(&self) -> &ParameterStore;

    fn store_mut(&mut self) -> &mut ParameterStore;

    fn config(&self) -> &AccessorConfig {
        &AccessorConfig::DEFAULT
    }

    fn get_field<T: FromValue>(&self, field: Field<T>) -> Option<T> {
        read(self.store(), field, self.config())
    }

    fn set_field<T: IntoValue>(&mut self, field: Field<T>, value: Option<T>) {
        write(self.store_mut(), field, value)
    }

    fn has_field<T>(&self, field: Field<T>) -> bool {
        self.store().contains(field.key)
    }
}

impl Parameters for ParameterStore {
    fn store(&self) -> &ParameterStore {
        self
    }

    fn store_mut(&mut self) -> &mut ParameterStore {
        self
    }
}

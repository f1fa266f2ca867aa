//! Read-side policy for typed accessors.
//!
//! Setters never consult the configuration. Getters use it to decide how
//! strictly a raw store value must match the declared field type.

use serde::{Deserialize, Serialize};

/// How numeric fields treat a value stored under a different numeric variant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericCoercion {
    /// Float fields also accept integers, widened to `f64`.
    #[default]
    Widen,
    /// Only the exact declared variant is accepted.
    Strict,
}

/// How collection fields validate their elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionCheck {
    /// The list is accepted if its first element has the element type.
    /// Later elements that do not convert are skipped.
    #[default]
    FirstElement,
    /// Every element must have the element type, otherwise the field is absent.
    AllElements,
}

/// Accessor configuration carried by every store-backed message.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorConfig {
    pub numeric: NumericCoercion,
    pub collections: CollectionCheck,
}

impl AccessorConfig {
    pub const DEFAULT: AccessorConfig = AccessorConfig {
        numeric: NumericCoercion::Widen,
        collections: CollectionCheck::FirstElement,
    };

    /// Exact variant matching for numbers and every element of a collection.
    pub const STRICT: AccessorConfig = AccessorConfig {
        numeric: NumericCoercion::Strict,
        collections: CollectionCheck::AllElements,
    };

    pub fn with_numeric(mut self, numeric: NumericCoercion) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn with_collections(mut self, collections: CollectionCheck) -> Self {
        self.collections = collections;
        self
    }
}

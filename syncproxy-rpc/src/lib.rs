//! Typed RPC requests over an ordered, dynamically-typed parameter store.
//!
//! Every message travels as a [`ParameterStore`]: an insertion-ordered map
//! from wire key to [`Value`]. Typed wrappers such as [`SendLocation`] expose
//! one getter and one setter per field on top of that store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐
//! │  SendLocation   │────▶│   RpcMessage    │  name, role, correlation id
//! │  (typed fields) │     │   (identity)    │
//! └────────┬────────┘     └────────┬────────┘
//!          │                       │
//!          ▼                       ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │ Field<T> + read │────▶│ ParameterStore  │────▶ serde (any format)
//! │     / write     │     │   of Value      │
//! └─────────────────┘     └─────────────────┘
//! ```
//!
//! Getters never fail: a missing key and a value of the wrong shape both read
//! as `None`. Setters take an `Option`, and `None` removes the key.
//!
//! # Example
//!
//! ```
//! use syncproxy_rpc::{Parameters, SendLocation, Value};
//!
//! let mut msg = SendLocation::new();
//! msg.set_location_name(Some("Coffee Shop".to_string()));
//! assert_eq!(msg.location_name().as_deref(), Some("Coffee Shop"));
//!
//! msg.set_location_name(None);
//! assert_eq!(msg.location_name(), None);
//! assert!(!msg.store().contains("locationName"));
//!
//! // Malformed data reads as absent
//! msg.store_mut().set("latitudeDegrees", Value::from("not a number"));
//! assert_eq!(msg.latitude_degrees(), None);
//! ```

pub mod accessor;
pub mod config;
pub mod error;
mod macros;
pub mod message;
pub mod names;
pub mod rpc;
pub mod store;
pub mod value;

pub use accessor::{Field, Parameters};
pub use config::{AccessorConfig, CollectionCheck, NumericCoercion};
pub use error::RpcError;
pub use message::{MessageRole, RpcMessage};
pub use rpc::{Image, ImageType, SendLocation};
pub use store::ParameterStore;
pub use value::{FromValue, IntoValue, Value, ValueKind};

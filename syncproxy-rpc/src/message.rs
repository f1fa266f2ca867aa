//! RPC message identity and envelope handling.
//!
//! An [`RpcMessage`] is a function name, a role and the parameter store it
//! owns. On the wire the three travel together in a single store:
//!
//! ```text
//! {
//!   "request": {
//!     "name": "SendLocation",
//!     "correlationID": 7,          // only when set
//!     "parameters": { ... }
//!   }
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::accessor::Parameters;
use crate::config::AccessorConfig;
use crate::error::{Result, RpcError};
use crate::names;
use crate::store::ParameterStore;
use crate::value::Value;

/// Role of a message in the RPC exchange.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum MessageRole {
    Request,
    Response,
    Notification,
}

impl MessageRole {
    /// Envelope key under which a message of this role is stored.
    pub fn key(self) -> &'static str {
        self.into()
    }

    fn find_in(store: &ParameterStore) -> Option<Self> {
        store.keys().find_map(|key| key.parse().ok())
    }
}

/// A function name, role and exclusively owned parameter store.
#[derive(Clone, Debug, PartialEq)]
pub struct RpcMessage {
    function_name: String,
    role: MessageRole,
    correlation_id: Option<i64>,
    parameters: ParameterStore,
    config: AccessorConfig,
}

impl RpcMessage {
    pub fn new(function_name: impl Into<String>, role: MessageRole) -> Self {
        Self {
            function_name: function_name.into(),
            role,
            correlation_id: None,
            parameters: ParameterStore::new(),
            config: AccessorConfig::default(),
        }
    }

    pub fn request(function_name: impl Into<String>) -> Self {
        Self::new(function_name, MessageRole::Request)
    }

    pub fn with_config(mut self, config: AccessorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_role(mut self, role: MessageRole) -> Self {
        self.role = role;
        self
    }

    /// Wrap an envelope store decoded from the wire.
    ///
    /// The function name found in the store is adopted as-is. Parameter
    /// contents are not inspected; getters validate them on demand. Envelope
    /// damage is repaired with empty defaults and logged.
    pub fn from_store(mut store: ParameterStore) -> Self {
        let Some(role) = MessageRole::find_in(&store) else {
            tracing::warn!("store has no message role entry, treating it as an empty request");
            return Self::request(String::new());
        };

        let mut function = match store.remove(role.key()) {
            Some(Value::Store(function)) => function,
            other => {
                tracing::warn!(
                    %role,
                    found = ?other.as_ref().map(|v| v.kind()),
                    "message entry is not a store"
                );
                ParameterStore::new()
            }
        };

        let function_name = match function.remove(names::FUNCTION_NAME) {
            Some(Value::String(name)) => name,
            other => {
                tracing::warn!(
                    %role,
                    found = ?other.as_ref().map(|v| v.kind()),
                    "message has no usable function name"
                );
                String::new()
            }
        };

        let correlation_id = match function.remove(names::CORRELATION_ID) {
            Some(Value::Integer(id)) => Some(id),
            None => None,
            Some(other) => {
                tracing::warn!(
                    function = %function_name,
                    found = %other.kind(),
                    "ignoring malformed correlation id"
                );
                None
            }
        };

        let parameters = match function.remove(names::PARAMETERS) {
            Some(Value::Store(parameters)) => parameters,
            None => ParameterStore::new(),
            Some(other) => {
                tracing::warn!(
                    function = %function_name,
                    found = %other.kind(),
                    "ignoring malformed parameters entry"
                );
                ParameterStore::new()
            }
        };

        tracing::debug!(
            function = %function_name,
            %role,
            parameters = parameters.len(),
            "wrapped message store"
        );

        Self {
            function_name,
            role,
            correlation_id,
            parameters,
            config: AccessorConfig::default(),
        }
    }

    /// Strict counterpart of [`RpcMessage::from_store`]: any envelope damage is
    /// an error instead of being repaired.
    pub fn try_from_store(mut store: ParameterStore) -> Result<Self> {
        let role = MessageRole::find_in(&store).ok_or(RpcError::MissingEnvelope)?;

        let mut function = match store.remove(role.key()) {
            Some(Value::Store(function)) => function,
            Some(other) => {
                return Err(RpcError::MalformedEnvelope(format!(
                    "{role} entry is a {}",
                    other.kind()
                )));
            }
            None => return Err(RpcError::MissingEnvelope),
        };

        let function_name = match function.remove(names::FUNCTION_NAME) {
            Some(Value::String(name)) => name,
            Some(other) => {
                return Err(RpcError::MalformedEnvelope(format!(
                    "function name is a {}",
                    other.kind()
                )));
            }
            None => {
                return Err(RpcError::MalformedEnvelope(
                    "missing function name".to_string(),
                ));
            }
        };

        let correlation_id = match function.remove(names::CORRELATION_ID) {
            Some(Value::Integer(id)) => Some(id),
            Some(other) => {
                return Err(RpcError::MalformedEnvelope(format!(
                    "correlation id is a {}",
                    other.kind()
                )));
            }
            None => None,
        };

        let parameters = match function.remove(names::PARAMETERS) {
            Some(Value::Store(parameters)) => parameters,
            Some(other) => {
                return Err(RpcError::MalformedEnvelope(format!(
                    "parameters entry is a {}",
                    other.kind()
                )));
            }
            None => ParameterStore::new(),
        };

        Ok(Self {
            function_name,
            role,
            correlation_id,
            parameters,
            config: AccessorConfig::default(),
        })
    }

    /// Encode the message into its envelope store.
    pub fn to_store(&self) -> ParameterStore {
        self.clone().into_store()
    }

    pub fn into_store(self) -> ParameterStore {
        let mut function = ParameterStore::with_capacity(3);
        function.set(names::FUNCTION_NAME, self.function_name);
        if let Some(id) = self.correlation_id {
            function.set(names::CORRELATION_ID, id);
        }
        function.set(names::PARAMETERS, self.parameters);

        let mut store = ParameterStore::with_capacity(1);
        store.set(self.role.key(), function);
        store
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn correlation_id(&self) -> Option<i64> {
        self.correlation_id
    }

    pub fn set_correlation_id(&mut self, correlation_id: Option<i64>) {
        self.correlation_id = correlation_id;
    }

    pub fn parameters(&self) -> &ParameterStore {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut ParameterStore {
        &mut self.parameters
    }

    pub fn into_parameters(self) -> ParameterStore {
        self.parameters
    }

    /// Check the function name adopted at construction.
    pub fn expect_function(&self, expected: &str) -> Result<()> {
        if self.function_name == expected {
            Ok(())
        } else {
            Err(RpcError::FunctionMismatch {
                expected: expected.to_string(),
                found: self.function_name.clone(),
            })
        }
    }

    pub fn expect_role(&self, expected: MessageRole) -> Result<()> {
        if self.role == expected {
            Ok(())
        } else {
            Err(RpcError::RoleMismatch {
                expected,
                found: self.role,
            })
        }
    }
}

impl Parameters for RpcMessage {
    fn store(&self) -> &ParameterStore {
        &self.parameters
    }

    fn store_mut(&mut self) -> &mut ParameterStore {
        &mut self.parameters
    }

    fn config(&self) -> &AccessorConfig {
        &self.config
    }
}

impl From<RpcMessage> for ParameterStore {
    fn from(message: RpcMessage) -> Self {
        message.into_store()
    }
}

impl Serialize for RpcMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_store().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RpcMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let store = ParameterStore::deserialize(deserializer)?;
        RpcMessage::try_from_store(store).map_err(serde::de::Error::custom)
    }
}

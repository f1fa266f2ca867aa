//! Declaration macros for store-backed RPC types.
//!
//! Each field line `getter / setter: Type => WIRE_KEY` expands to a getter
//! returning `Option<Type>` and a setter taking `Option<Type>`, both routed
//! through [`crate::accessor::Parameters`].

/// Macro to generate typed getters and setters for declared fields.
#[doc(hidden)]
#[macro_export]
macro_rules! rpc_fields {
    ($(
        $(#[$meta:meta])*
        $getter:ident / $setter:ident : $ty:ty => $key:expr
    ),* $(,)?) => {
        /// Wire keys of every declared field, in declaration order.
        pub const FIELD_KEYS: &'static [&'static str] = &[$($key),*];

        $(
            $(#[$meta])*
            pub fn $getter(&self) -> Option<$ty> {
                <Self as $crate::accessor::Parameters>::get_field(
                    self,
                    $crate::accessor::Field::<$ty>::new($key),
                )
            }

            #[doc = concat!("Set or clear the value read by [`Self::", stringify!($getter), "`].")]
            pub fn $setter(&mut self, value: Option<$ty>) {
                <Self as $crate::accessor::Parameters>::set_field(
                    self,
                    $crate::accessor::Field::<$ty>::new($key),
                    value,
                )
            }
        )*
    };
}

/// Declare a nested RPC struct backed by its own [`crate::ParameterStore`].
///
/// On the wire the struct is a nested store, so it can itself be used as a
/// field type of another message.
#[macro_export]
macro_rules! rpc_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($fields:tt)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        $vis struct $name {
            store: $crate::ParameterStore,
            config: $crate::AccessorConfig,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap a store without validating its contents.
            pub fn from_store(store: $crate::ParameterStore) -> Self {
                Self {
                    store,
                    config: $crate::AccessorConfig::default(),
                }
            }

            pub fn with_config(mut self, config: $crate::AccessorConfig) -> Self {
                self.config = config;
                self
            }

            pub fn into_store(self) -> $crate::ParameterStore {
                self.store
            }

            $crate::rpc_fields! { $($fields)* }
        }

        impl $crate::accessor::Parameters for $name {
            fn store(&self) -> &$crate::ParameterStore {
                &self.store
            }

            fn store_mut(&mut self) -> &mut $crate::ParameterStore {
                &mut self.store
            }

            fn config(&self) -> &$crate::AccessorConfig {
                &self.config
            }
        }

        impl $crate::value::IntoValue for $name {
            fn into_value(self) -> $crate::Value {
                $crate::Value::Store(self.store)
            }
        }

        impl $crate::value::FromValue for $name {
            fn from_value(
                value: &$crate::Value,
                config: &$crate::AccessorConfig,
            ) -> Option<Self> {
                value.as_store().map(|store| Self {
                    store: store.clone(),
                    config: *config,
                })
            }
        }
    };
}

/// Declare a typed request wrapping an [`crate::RpcMessage`].
#[macro_export]
macro_rules! rpc_request {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $function:path {
            $($fields:tt)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name {
            message: $crate::RpcMessage,
        }

        impl $name {
            pub const FUNCTION_NAME: &'static str = $function;

            pub fn new() -> Self {
                Self {
                    message: $crate::RpcMessage::request($function),
                }
            }

            /// Wrap an envelope store received off the wire.
            ///
            /// The function name carried by the store is adopted without being
            /// compared to [`Self::FUNCTION_NAME`].
            pub fn from_store(store: $crate::ParameterStore) -> Self {
                Self {
                    message: $crate::RpcMessage::from_store(store),
                }
            }

            /// Copy another message, cloning its parameter store.
            ///
            /// The copy is always a request; the source's role is not kept.
            pub fn from_message(message: &$crate::RpcMessage) -> Self {
                Self {
                    message: message.clone().with_role($crate::MessageRole::Request),
                }
            }

            /// Take a message after checking its role and function name.
            pub fn try_from_message(message: $crate::RpcMessage) -> $crate::error::Result<Self> {
                message.expect_role($crate::MessageRole::Request)?;
                message.expect_function($function)?;
                Ok(Self { message })
            }

            pub fn with_config(mut self, config: $crate::AccessorConfig) -> Self {
                self.message = self.message.with_config(config);
                self
            }

            pub fn function_name(&self) -> &str {
                self.message.function_name()
            }

            pub fn correlation_id(&self) -> Option<i64> {
                self.message.correlation_id()
            }

            pub fn set_correlation_id(&mut self, correlation_id: Option<i64>) {
                self.message.set_correlation_id(correlation_id);
            }

            pub fn message(&self) -> &$crate::RpcMessage {
                &self.message
            }

            pub fn into_message(self) -> $crate::RpcMessage {
                self.message
            }

            pub fn to_store(&self) -> $crate::ParameterStore {
                self.message.to_store()
            }

            pub fn into_store(self) -> $crate::ParameterStore {
                self.message.into_store()
            }

            $crate::rpc_fields! { $($fields)* }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::accessor::Parameters for $name {
            fn store(&self) -> &$crate::ParameterStore {
                self.message.parameters()
            }

            fn store_mut(&mut self) -> &mut $crate::ParameterStore {
                self.message.parameters_mut()
            }

            fn config(&self) -> &$crate::AccessorConfig {
                <$crate::RpcMessage as $crate::accessor::Parameters>::config(&self.message)
            }
        }

        impl AsRef<$crate::RpcMessage> for $name {
            fn as_ref(&self) -> &$crate::RpcMessage {
                &self.message
            }
        }

        impl From<$name> for $crate::RpcMessage {
            fn from(request: $name) -> Self {
                request.message
            }
        }
    };
}

//! Errors raised while assembling exporter factories or building exporters.
use crate::config::Type;
use thiserror::Error;

/// A specialized `Result` type for component operations.
pub type ComponentResult<T> = Result<T, ComponentError>;

/// Errors returned by exporter factories and the surrounding registration
/// helpers.
///
/// Errors produced by a registered exporter constructor are returned to the
/// caller exactly as the constructor produced them.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ComponentError {
    /// The factory has no constructor registered for the requested telemetry
    /// signal.
    ///
    /// This is a wiring mistake, not a transient condition: retrying the same
    /// call always fails the same way.
    #[error("telemetry type is not supported")]
    DataTypeNotSupported,

    /// A configuration type name does not follow the naming rules.
    #[error("invalid component type {name:?}: {reason}")]
    InvalidType {
        /// The rejected name.
        name: String,
        /// Which rule the name broke.
        reason: &'static str,
    },

    /// Two factories were registered under the same configuration type.
    #[error("duplicate exporter factory \"{0}\"")]
    DuplicateFactory(Type),

    /// The configuration handed to a constructor was not usable.
    #[error("invalid exporter configuration: {0}")]
    InvalidConfig(String),

    /// Any other failure raised by an exporter constructor.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl From<String> for ComponentError {
    fn from(err_msg: String) -> Self {
        ComponentError::Other(err_msg.into())
    }
}

impl From<&'static str> for ComponentError {
    fn from(err_msg: &'static str) -> Self {
        ComponentError::Other(err_msg.into())
    }
}

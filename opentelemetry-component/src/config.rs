//! Configuration-facing types shared by every exporter factory.
//!
//! Loading and validating configuration files happens elsewhere. This module
//! only names the pieces a factory needs to route configuration to the right
//! constructor: the configuration [`Type`] a factory answers to, the
//! telemetry [`DataType`]s, and the opaque [`ExporterConfig`] trait object.
use crate::error::{ComponentError, ComponentResult};
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

const TYPE_MAX_LEN: usize = 63;

/// Identifier of the configuration schema a factory expects, e.g. `otlp`.
///
/// Names start with an ASCII letter, continue with ASCII letters, digits or
/// underscores, and are at most 63 characters long.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Type(Cow<'static, str>);

impl Type {
    /// Validates `name` and wraps it as a configuration type.
    pub fn new(name: impl Into<Cow<'static, str>>) -> ComponentResult<Self> {
        let name = name.into();
        let invalid = |reason| ComponentError::InvalidType {
            name: name.to_string(),
            reason,
        };

        let mut chars = name.chars();
        match chars.next() {
            None => return Err(invalid("name is empty")),
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(invalid("name must start with an ASCII letter"))
            }
            Some(_) => {}
        }
        if name.len() > TYPE_MAX_LEN {
            return Err(invalid("name is longer than 63 characters"));
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid(
                "name may only contain ASCII letters, digits and underscores",
            ));
        }

        Ok(Type(name))
    }

    /// The type name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl FromStr for Type {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::new(s.to_owned())
    }
}

/// The telemetry signals an exporter may consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataType {
    /// Spans.
    Traces,
    /// Metric streams.
    Metrics,
    /// Log records.
    Logs,
}

impl DataType {
    /// Every data type, in declaration order.
    pub const ALL: [DataType; 3] = [DataType::Traces, DataType::Metrics, DataType::Logs];

    /// The lowercase signal name used in configuration files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DataType::Traces => "traces",
            DataType::Metrics => "metrics",
            DataType::Logs => "logs",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "traces" => Ok(DataType::Traces),
            "metrics" => Ok(DataType::Metrics),
            "logs" => Ok(DataType::Logs),
            other => Err(ComponentError::InvalidConfig(format!(
                "unknown data type {other:?}"
            ))),
        }
    }
}

/// Upcast helper for [`ExporterConfig`] trait objects.
///
/// Implemented for every `'static` type, there is no need to implement it by
/// hand.
pub trait AsAny: Any {
    /// Returns `self` as [`Any`].
    fn as_any(&self) -> &dyn Any;

    /// Returns `self` as mutable [`Any`].
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Configuration of a single exporter instance.
///
/// Factories treat configuration as opaque: they hand it to the constructor
/// registered for the requested signal, which recovers its concrete type with
/// `downcast_ref`.
pub trait ExporterConfig: AsAny + fmt::Debug + Send + Sync + 'static {
    /// Checks the configuration for values the exporter cannot work with.
    fn validate(&self) -> ComponentResult<()> {
        Ok(())
    }
}

impl dyn ExporterConfig {
    /// Returns the configuration as `T` if that is its concrete type.
    pub fn downcast_ref<T: ExporterConfig>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Returns the configuration as a mutable `T` if that is its concrete
    /// type.
    pub fn downcast_mut<T: ExporterConfig>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Returns `true` if the configuration's concrete type is `T`.
    pub fn is<T: ExporterConfig>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Default)]
    struct OtlpConfig {
        endpoint: String,
    }

    impl ExporterConfig for OtlpConfig {
        fn validate(&self) -> ComponentResult<()> {
            if self.endpoint.is_empty() {
                return Err(ComponentError::InvalidConfig("endpoint is empty".into()));
            }
            Ok(())
        }
    }

    #[derive(Debug)]
    struct StdoutConfig;

    impl ExporterConfig for StdoutConfig {}

    #[rstest]
    #[case("otlp")]
    #[case("otlphttp")]
    #[case("file_v2")]
    #[case("A1")]
    fn valid_type_names(#[case] name: &'static str) {
        let ty = Type::new(name).unwrap();
        assert_eq!(ty.as_str(), name);
        assert_eq!(ty.to_string(), name);
    }

    #[rstest]
    #[case("")]
    #[case("1otlp")]
    #[case("_otlp")]
    #[case("otlp/http")]
    #[case("otlp-http")]
    fn invalid_type_names(#[case] name: &'static str) {
        let err = Type::new(name).unwrap_err();
        assert!(matches!(err, ComponentError::InvalidType { .. }));
    }

    #[test]
    fn type_name_length_limit() {
        let longest = "a".repeat(TYPE_MAX_LEN);
        assert!(Type::new(longest.clone()).is_ok());
        assert!(Type::new(longest + "a").is_err());
    }

    #[test]
    fn type_debug_is_the_name() {
        assert_eq!(format!("{:?}", Type::new("otlp").unwrap()), "\"otlp\"");
    }

    #[test]
    fn data_type_names() {
        for data_type in DataType::ALL {
            assert_eq!(data_type.as_str().parse::<DataType>().unwrap(), data_type);
        }
        assert!("profiles".parse::<DataType>().is_err());
    }

    #[test]
    fn downcast_config() {
        let cfg: Box<dyn ExporterConfig> = Box::new(OtlpConfig {
            endpoint: "localhost:4317".into(),
        });
        assert!(cfg.is::<OtlpConfig>());
        assert_eq!(
            cfg.downcast_ref::<OtlpConfig>().unwrap().endpoint,
            "localhost:4317"
        );
        assert!(cfg.downcast_ref::<StdoutConfig>().is_none());
    }

    #[test]
    fn validate_through_trait_object() {
        let cfg: Box<dyn ExporterConfig> = Box::new(OtlpConfig::default());
        assert!(matches!(
            cfg.validate(),
            Err(ComponentError::InvalidConfig(_))
        ));
        let cfg: Box<dyn ExporterConfig> = Box::new(StdoutConfig);
        assert!(cfg.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn data_type_serde_names() {
        let parsed: Vec<DataType> = serde_json::from_str(r#"["traces","logs"]"#).unwrap();
        assert_eq!(parsed, vec![DataType::Traces, DataType::Logs]);
        assert_eq!(
            serde_json::to_string(&DataType::Metrics).unwrap(),
            "\"metrics\""
        );
    }
}

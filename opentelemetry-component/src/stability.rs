//! Maturity levels attached to each capability of an exporter factory.
use crate::error::ComponentError;
use std::fmt;
use std::str::FromStr;

/// How ready a capability is for production use.
///
/// Levels are ordered from least to most mature, so
/// `StabilityLevel::Alpha < StabilityLevel::Stable`. [`StabilityLevel::Undefined`]
/// is the default and is reported for capabilities a factory does not support.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StabilityLevel {
    /// No stability was declared.
    #[default]
    Undefined,
    /// The component lost its maintainers.
    Unmaintained,
    /// The component is scheduled for removal.
    Deprecated,
    /// Work in progress, not meant for general use yet.
    Development,
    /// Usable, but configuration and behavior may still change.
    Alpha,
    /// Feature complete, changes are rare.
    Beta,
    /// Production ready.
    Stable,
}

impl StabilityLevel {
    /// Every level, from least to most mature.
    pub const ALL: [StabilityLevel; 7] = [
        StabilityLevel::Undefined,
        StabilityLevel::Unmaintained,
        StabilityLevel::Deprecated,
        StabilityLevel::Development,
        StabilityLevel::Alpha,
        StabilityLevel::Beta,
        StabilityLevel::Stable,
    ];

    /// The level's name, e.g. `Beta`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StabilityLevel::Undefined => "Undefined",
            StabilityLevel::Unmaintained => "Unmaintained",
            StabilityLevel::Deprecated => "Deprecated",
            StabilityLevel::Development => "Development",
            StabilityLevel::Alpha => "Alpha",
            StabilityLevel::Beta => "Beta",
            StabilityLevel::Stable => "Stable",
        }
    }

    /// A sentence meant for operators, logged when a component at this level
    /// is put into a pipeline.
    pub const fn log_message(&self) -> &'static str {
        match self {
            StabilityLevel::Undefined => "Stability level of component is undefined",
            StabilityLevel::Unmaintained => {
                "Unmaintained component. Actively looking for contributors. Component will become deprecated after 6 months of remaining unmaintained."
            }
            StabilityLevel::Deprecated => {
                "Deprecated component. Will be removed in future releases."
            }
            StabilityLevel::Development => "Development component. May change in the future.",
            StabilityLevel::Alpha => "Alpha component. May change in the future.",
            StabilityLevel::Beta => "Beta component. May change in the future.",
            StabilityLevel::Stable => "Stable component.",
        }
    }
}

impl fmt::Display for StabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StabilityLevel {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StabilityLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ComponentError::InvalidConfig(format!("unknown stability level {s:?}")))
    }
}

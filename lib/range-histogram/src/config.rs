use figment::Figment;
use serde::{Deserialize, Serialize};
use snafu::ResultExt as _;

use crate::error::{ConfigurationError, Extract};

/// How a histogram treats a bin that fails validation after being inserted.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertionMode {
    /// The rejected bin is left in place.
    ///
    /// The error is still returned to the caller, but the histogram keeps the offending bin, and every subsequent
    /// insertion will fail validation until the histogram is discarded.
    #[default]
    Retaining,

    /// The rejected bin is removed before the error is returned, leaving the histogram as it was before the insertion.
    Transactional,
}

/// Histogram configuration.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct HistogramConfiguration {
    /// How bins that fail validation are handled.
    ///
    /// Defaults to `retaining`.
    #[serde(default)]
    pub insertion_mode: InsertionMode,
}

impl HistogramConfiguration {
    /// Creates a new `HistogramConfiguration` with the given insertion mode.
    pub fn with_insertion_mode(insertion_mode: InsertionMode) -> Self {
        Self { insertion_mode }
    }

    /// Extracts a `HistogramConfiguration` from the given figment.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// If the figment holds a value of the wrong type for a known field, an error is returned.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigurationError> {
        figment.extract().context(Extract)
    }
}

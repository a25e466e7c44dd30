//! Consistency settings for one operation category.

use serde::{Deserialize, Serialize};

use super::level::{Consistency, SerialConsistency};
use crate::error::{ConsistencyError, ParseConsistencyError, ParseSerialConsistencyError};

/// Consistency applied when nothing is configured at any level.
pub const DEFAULT_CONSISTENCY: &str = "LOCAL_QUORUM";

/// Serial consistency applied when nothing is configured at any level.
pub const DEFAULT_SERIAL_CONSISTENCY: &str = "LOCAL_SERIAL";

/// A `(consistency, serialConsistency)` pair as written in configuration.
///
/// An empty string means "inherit from the fallback". Values are kept as
/// strings until validation so that an unresolved tree can round-trip
/// through serde unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsistencySettings {
    /// Consistency level name, e.g. `"LOCAL_QUORUM"`.
    pub consistency: String,
    /// Serial consistency level name, e.g. `"LOCAL_SERIAL"`.
    pub serial_consistency: String,
}

impl ConsistencySettings {
    /// Creates a settings pair from two level names.
    #[must_use]
    pub fn new(consistency: impl Into<String>, serial_consistency: impl Into<String>) -> Self {
        Self {
            consistency: consistency.into(),
            serial_consistency: serial_consistency.into(),
        }
    }

    /// Returns the hard-coded global defaults (`LOCAL_QUORUM` / `LOCAL_SERIAL`).
    #[must_use]
    pub fn global_default() -> Self {
        Self::new(DEFAULT_CONSISTENCY, DEFAULT_SERIAL_CONSISTENCY)
    }

    /// Returns `true` if both fields are set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.consistency.is_empty() && !self.serial_consistency.is_empty()
    }

    /// Fills empty fields of `settings` from `fallback`.
    ///
    /// Non-empty fields are never overwritten. An absent `settings` yields
    /// a fresh copy of `fallback`.
    #[must_use]
    pub fn fill(settings: Option<&Self>, fallback: &Self) -> Self {
        let Some(settings) = settings else {
            return fallback.clone();
        };
        Self {
            consistency: pick(&settings.consistency, &fallback.consistency),
            serial_consistency: pick(&settings.serial_consistency, &fallback.serial_consistency),
        }
    }

    /// Checks that both fields name known levels.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::BadConsistency`] or
    /// [`ConsistencyError::BadSerialConsistency`], checking `consistency` first.
    pub fn validate(&self) -> Result<(), ConsistencyError> {
        self.consistency()?;
        self.serial_consistency()?;
        Ok(())
    }

    /// Parses the consistency level for use by the storage client.
    ///
    /// # Errors
    ///
    /// Returns [`ParseConsistencyError`] if the name is unknown or empty.
    pub fn consistency(&self) -> Result<Consistency, ParseConsistencyError> {
        self.consistency.parse()
    }

    /// Parses the serial consistency level for use by the storage client.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSerialConsistencyError`] if the name is unknown or empty.
    pub fn serial_consistency(&self) -> Result<SerialConsistency, ParseSerialConsistencyError> {
        self.serial_consistency.parse()
    }
}

fn pick(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn absent_settings_take_fallback() {
        let fallback = ConsistencySettings::new("QUORUM", "SERIAL");
        assert_eq!(ConsistencySettings::fill(None, &fallback), fallback);
    }

    #[test]
    fn fill_only_replaces_empty_fields() {
        let fallback = ConsistencySettings::global_default();

        let partial = ConsistencySettings::new("ONE", "");
        let filled = ConsistencySettings::fill(Some(&partial), &fallback);
        assert_eq!(filled, ConsistencySettings::new("ONE", "LOCAL_SERIAL"));

        let partial = ConsistencySettings::new("", "SERIAL");
        let filled = ConsistencySettings::fill(Some(&partial), &fallback);
        assert_eq!(filled, ConsistencySettings::new("LOCAL_QUORUM", "SERIAL"));
    }

    #[test]
    fn fill_keeps_invalid_values_for_validation() {
        let partial = ConsistencySettings::new("NOT_A_LEVEL", "");
        let filled =
            ConsistencySettings::fill(Some(&partial), &ConsistencySettings::global_default());
        assert_eq!(filled.consistency, "NOT_A_LEVEL");
        assert!(filled.is_complete());
    }

    #[test]
    fn global_default_is_valid() {
        let settings = ConsistencySettings::global_default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.consistency(), Ok(Consistency::LocalQuorum));
        assert_eq!(
            settings.serial_consistency(),
            Ok(SerialConsistency::LocalSerial)
        );
    }

    #[test]
    fn validate_reports_bad_consistency() {
        let settings = ConsistencySettings::new("NOT_A_LEVEL", "LOCAL_SERIAL");
        let Err(err) = settings.validate() else {
            panic!("expected validation to fail");
        };
        assert!(matches!(err, ConsistencyError::BadConsistency(_)));
        assert!(err.to_string().contains("bad cassandra consistency"));
    }

    #[test]
    fn validate_reports_bad_serial_consistency() {
        let settings = ConsistencySettings::new("ONE", "QUORUM");
        assert!(matches!(
            settings.validate(),
            Err(ConsistencyError::BadSerialConsistency(_))
        ));
    }

    #[test]
    fn validate_accepts_mixed_case_serial() {
        let settings = ConsistencySettings::new("ONE", "Local_Serial");
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn deserializes_partial_settings() {
        let settings: Option<ConsistencySettings> =
            serde_json::from_str(r#"{"serialConsistency":"SERIAL"}"#).ok();
        assert_eq!(settings, Some(ConsistencySettings::new("", "SERIAL")));
    }
}

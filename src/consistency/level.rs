//! Cassandra consistency levels as understood by the storage driver.
//!
//! [`Consistency`] covers the regular read/write levels and
//! [`SerialConsistency`] the two levels used for conditional
//! (compare-and-set) writes. Both are upper-cased before matching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseConsistencyError, ParseSerialConsistencyError};

/// Replica acknowledgement policy for ordinary reads and writes.
///
/// The discriminant is the CQL native protocol code for the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u16)]
pub enum Consistency {
    /// Any node, including a hinted handoff.
    Any = 0x00,
    /// One replica.
    One = 0x01,
    /// Two replicas.
    Two = 0x02,
    /// Three replicas.
    Three = 0x03,
    /// A majority of replicas across all datacenters.
    Quorum = 0x04,
    /// Every replica.
    All = 0x05,
    /// A majority of replicas in the local datacenter.
    LocalQuorum = 0x06,
    /// A majority of replicas in every datacenter.
    EachQuorum = 0x07,
    /// One replica in the local datacenter.
    LocalOne = 0x0A,
}

impl Consistency {
    /// Every level, in protocol code order.
    pub const ALL: [Self; 9] = [
        Self::Any,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Quorum,
        Self::All,
        Self::LocalQuorum,
        Self::EachQuorum,
        Self::LocalOne,
    ];

    /// Returns the canonical configuration name (e.g. `"LOCAL_QUORUM"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::One => "ONE",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Quorum => "QUORUM",
            Self::All => "ALL",
            Self::LocalQuorum => "LOCAL_QUORUM",
            Self::EachQuorum => "EACH_QUORUM",
            Self::LocalOne => "LOCAL_ONE",
        }
    }

    /// Returns the CQL native protocol code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Consistency {
    type Err = ParseConsistencyError;

    /// Parses a level, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == upper)
            .ok_or_else(|| ParseConsistencyError {
                value: s.to_string(),
            })
    }
}

/// Consistency used for the Paxos phase of conditional writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u16)]
pub enum SerialConsistency {
    /// Linearizable across all datacenters.
    Serial = 0x08,
    /// Linearizable within the local datacenter.
    LocalSerial = 0x09,
}

impl SerialConsistency {
    /// Returns the canonical configuration name (e.g. `"LOCAL_SERIAL"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serial => "SERIAL",
            Self::LocalSerial => "LOCAL_SERIAL",
        }
    }

    /// Returns the CQL native protocol code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for SerialConsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SerialConsistency {
    type Err = ParseSerialConsistencyError;

    /// Parses a serial level, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        match upper.as_str() {
            "SERIAL" => Ok(Self::Serial),
            "LOCAL_SERIAL" => Ok(Self::LocalSerial),
            _ => Err(ParseSerialConsistencyError { value: upper }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_consistency_name() {
        for level in Consistency::ALL {
            assert_eq!(level.as_str().parse::<Consistency>(), Ok(level));
        }
    }

    #[test]
    fn consistency_ignores_case() {
        assert_eq!("local_quorum".parse(), Ok(Consistency::LocalQuorum));
        assert_eq!("Quorum".parse(), Ok(Consistency::Quorum));
        assert_eq!("each_Quorum".parse(), Ok(Consistency::EachQuorum));
    }

    #[test]
    fn unknown_consistency_keeps_original_spelling() {
        let err = "not_a_level".parse::<Consistency>().err();
        assert_eq!(err.map(|e| e.value), Some("not_a_level".to_string()));
    }

    #[test]
    fn unknown_consistency_reports_name() {
        let err = "NOT_A_LEVEL".parse::<Consistency>().err();
        assert_eq!(
            err.map(|e| e.to_string()),
            Some("invalid consistency \"NOT_A_LEVEL\"".to_string())
        );
    }

    #[test]
    fn serial_levels_are_not_consistency_levels() {
        assert!("SERIAL".parse::<Consistency>().is_err());
        assert!("LOCAL_SERIAL".parse::<Consistency>().is_err());
    }

    #[test]
    fn serial_consistency_ignores_case() {
        for name in ["local_serial", "Local_Serial", "LOCAL_SERIAL"] {
            assert_eq!(
                name.parse::<SerialConsistency>(),
                Ok(SerialConsistency::LocalSerial)
            );
        }
        assert_eq!("serial".parse(), Ok(SerialConsistency::Serial));
    }

    #[test]
    fn unknown_serial_consistency_is_rejected() {
        assert!("QUORUM".parse::<SerialConsistency>().is_err());
        assert!("".parse::<SerialConsistency>().is_err());
    }

    #[test]
    fn protocol_codes() {
        assert_eq!(Consistency::LocalQuorum.code(), 0x06);
        assert_eq!(Consistency::LocalOne.code(), 0x0A);
        assert_eq!(SerialConsistency::LocalSerial.code(), 0x09);
    }

    #[test]
    fn serde_uses_config_names() {
        let json = serde_json::to_string(&Consistency::EachQuorum).ok();
        assert_eq!(json.as_deref(), Some("\"EACH_QUORUM\""));
        let level: Option<SerialConsistency> = serde_json::from_str("\"LOCAL_SERIAL\"").ok();
        assert_eq!(level, Some(SerialConsistency::LocalSerial));
    }
}

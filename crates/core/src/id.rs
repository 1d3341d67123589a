//! Strongly-typed identifiers used across the domain.
//!
//! The host platform keys orders, packages and package types by numeric ids,
//! so these are integer newtypes rather than UUIDs.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a sales order in the host platform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

/// Identifier of a shipping-package row attached to an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(i64);

/// Identifier of a package-type catalog entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageTypeId(i64);

/// Platform-side sequence number of a shipping-package row, used when writing
/// the carrier package number and label key back to the platform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceNumber(i64);

macro_rules! impl_i64_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = i64::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_i64_newtype!(OrderId, "OrderId");
impl_i64_newtype!(PackageId, "PackageId");
impl_i64_newtype!(PackageTypeId, "PackageTypeId");
impl_i64_newtype!(SequenceNumber, "SequenceNumber");

/// Carrier-assigned shipment number.
///
/// Opaque to the plugin: carriers mix digits and letters, so this stays a
/// string. It doubles as the label storage key stem (`"<number>.pdf"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentNumber(String);

impl ShipmentNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Storage key for the label document of this shipment.
    pub fn label_key(&self) -> String {
        format!("{}.pdf", self.0)
    }
}

impl core::fmt::Display for ShipmentNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<String> for ShipmentNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ShipmentNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_parses_from_string() {
        let id: OrderId = "42".parse().unwrap();
        assert_eq!(id, OrderId::new(42));
    }

    #[test]
    fn order_id_rejects_non_numeric() {
        let err = "abc".parse::<OrderId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn shipment_number_label_key_appends_pdf_suffix() {
        let number = ShipmentNumber::new("911778899");
        assert_eq!(number.label_key(), "911778899.pdf");
    }
}

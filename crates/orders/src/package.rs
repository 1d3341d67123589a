use serde::{Deserialize, Serialize};

use shiplink_core::{OrderId, PackageId, PackageTypeId, SequenceNumber};

/// A physical package attached to an order, awaiting a carrier label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPackage {
    pub id: PackageId,
    pub order_id: OrderId,
    /// Platform row id, used to write the carrier package number back.
    pub sequence_number: SequenceNumber,
    pub weight_grams: u32,
    pub package_type_id: PackageTypeId,
}

/// Package-type catalog entry. Dimensions are centimetres; `None` or a
/// non-positive value means the dimension is not maintained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageType {
    pub id: PackageTypeId,
    pub name: String,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl PackageType {
    /// Resolve the dimensions reported to the carrier.
    ///
    /// All-or-nothing: a zero, negative or missing value in any one dimension
    /// invalidates all three, so partial dimension data never reaches the
    /// carrier.
    pub fn dimensions(&self) -> PackageDimensions {
        match (self.length, self.width, self.height) {
            (Some(length), Some(width), Some(height))
                if length > 0.0 && width > 0.0 && height > 0.0 =>
            {
                PackageDimensions::Known {
                    length,
                    width,
                    height,
                }
            }
            _ => PackageDimensions::Unknown,
        }
    }
}

/// Dimensions passed to the carrier, resolved from a [`PackageType`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PackageDimensions {
    Known { length: f64, width: f64, height: f64 },
    Unknown,
}

impl PackageDimensions {
    /// The `(length, width, height)` triple as the wire format wants it:
    /// either all three present or all three null.
    pub fn as_triple(&self) -> (Option<f64>, Option<f64>, Option<f64>) {
        match *self {
            PackageDimensions::Known {
                length,
                width,
                height,
            } => (Some(length), Some(width), Some(height)),
            PackageDimensions::Unknown => (None, None, None),
        }
    }
}

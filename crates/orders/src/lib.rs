//! `shiplink-orders` — order-side read model consumed by the shipping workflow.
//!
//! Orders, delivery addresses, shipping packages and package types are owned
//! by the host platform; this crate models the slice of them the workflow
//! reads. Nothing here is persisted by the plugin.

pub mod order;
pub mod package;

pub use order::{DeliveryAddress, Order};
pub use package::{PackageDimensions, PackageType, ShippingPackage};

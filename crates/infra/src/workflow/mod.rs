//! The shipment registration/cancellation workflow.
//!
//! Both components process batches of order ids sequentially and absorb
//! failures per unit of work: a carrier fault skips one package (or one
//! cancellation entry), a lookup or storage failure skips one order, and the
//! batch call itself never fails once the input shape is valid. All
//! accumulation is per-invocation; nothing outlives a single call.

use shiplink_carrier::Party;
use shiplink_orders::DeliveryAddress;
use shiplink_shipping::SenderConfig;

pub mod canceller;
pub mod outcome;
pub mod registrar;

pub use canceller::ShipmentCanceller;
pub use outcome::{BatchOutcome, SkipReason, SkippedOrder};
pub use registrar::ShipmentRegistrar;

/// Receiver party from the order's delivery address, passed through as-is.
/// The platform owns address validity; empty fields are forwarded untouched.
pub(crate) fn receiver_party(address: &DeliveryAddress) -> Party {
    Party {
        name: address.full_name(),
        street: address.street.clone(),
        house_number: address.house_number.clone(),
        postal_code: address.postal_code.clone(),
        town: address.town.clone(),
        country: address.country.clone(),
    }
}

/// Sender party from static plugin configuration.
pub(crate) fn sender_party(config: &SenderConfig) -> Party {
    Party {
        name: config.name.clone(),
        street: config.street.clone(),
        house_number: config.house_number.clone(),
        postal_code: config.postal_code.clone(),
        town: config.town.clone(),
        country: config.country().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receiver_party_passes_empty_fields_through() {
        let address = DeliveryAddress {
            first_name: "Jo".to_string(),
            last_name: "Muster".to_string(),
            street: String::new(),
            house_number: String::new(),
            postal_code: "34117".to_string(),
            town: "Kassel".to_string(),
            country: "Germany".to_string(),
        };
        let party = receiver_party(&address);
        assert_eq!(party.name, "Jo Muster");
        assert_eq!(party.street, "");
        assert_eq!(party.house_number, "");
    }

    #[test]
    fn sender_party_resolves_country_from_selector() {
        let config = SenderConfig {
            country_selector: 3,
            ..SenderConfig::default()
        };
        assert_eq!(sender_party(&config).country, "Austria");
    }
}

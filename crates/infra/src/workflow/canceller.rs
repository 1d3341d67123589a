use std::sync::Arc;

use tracing::{debug, warn};

use shiplink_carrier::CarrierClient;
use shiplink_shipping::{OrderIdsInput, OrderResult};

use crate::repository::ShipmentRecordRepository;

use super::outcome::{BatchOutcome, SkipReason};

/// Voids registered shipments and resets order shipping state.
///
/// Orders without a shipment record (or with no registered packages) are
/// no-ops. A carrier fault skips that one cancellation entry; the record is
/// still reset afterwards, which makes the order eligible for
/// re-registration.
pub struct ShipmentCanceller<R> {
    records: R,
    carrier: Arc<dyn CarrierClient>,
}

impl<R> ShipmentCanceller<R>
where
    R: ShipmentRecordRepository,
{
    pub fn new(records: R, carrier: Arc<dyn CarrierClient>) -> Self {
        Self { records, carrier }
    }

    /// Cancel previously registered shipments for every order in `input`.
    /// Never fails as a whole.
    pub fn cancel(&self, input: &OrderIdsInput) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for order_id in input.normalize() {
            let record = match self.records.get(order_id) {
                Ok(record) => record,
                Err(e) => {
                    warn!(%order_id, error = %e, "record lookup failed, skipping order");
                    outcome.record_skip(order_id, SkipReason::Storage(e.to_string()));
                    continue;
                }
            };

            let Some(record) = record else {
                debug!(%order_id, "no shipment record, nothing to cancel");
                outcome.record_skip(order_id, SkipReason::NothingToCancel);
                continue;
            };
            if record.additional_data.is_empty() {
                debug!(%order_id, "no registered packages, nothing to cancel");
                outcome.record_skip(order_id, SkipReason::NothingToCancel);
                continue;
            }

            let mut last_status: Option<String> = None;
            for item in &record.additional_data {
                match self.carrier.cancel_shipment(&item.shipment_number) {
                    Ok(response) => last_status = Some(response.status),
                    Err(fault) => {
                        warn!(
                            %order_id,
                            shipment_number = %item.shipment_number,
                            fault = %fault,
                            "carrier fault, skipping cancellation entry"
                        );
                    }
                }
            }

            match last_status {
                Some(status) => outcome.record_result(order_id, OrderResult::cancelled(&status)),
                None => outcome.record_skip(order_id, SkipReason::AllPackagesFaulted),
            }

            // Reset regardless of per-entry faults, matching the platform
            // contract: a cancel attempt re-opens the order.
            if let Err(e) = self.records.reset(order_id) {
                warn!(%order_id, error = %e, "failed to reset shipment record");
            } else {
                debug!(%order_id, "shipment record reset to open");
            }
        }

        outcome
    }
}

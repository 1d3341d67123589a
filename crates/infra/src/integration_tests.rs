//! Integration tests for the full registration/cancellation workflow.
//!
//! Tests: order ids → open-order filter → carrier → blob store → shipment record
//!
//! Verifies:
//! - The shipping status gate makes registration idempotent
//! - Partial failures stay local to one package or one order
//! - Cancel-then-register round-trips an order back to open

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use chrono::{NaiveDate, Utc};

    use shiplink_carrier::{
        CancelShipmentResponse, CarrierClient, CarrierFault, RegisterShipmentRequest,
        RegisterShipmentResponse, SandboxCarrierClient,
    };
    use shiplink_core::{
        OrderId, PackageId, PackageTypeId, SequenceNumber, ShipmentNumber,
    };
    use shiplink_orders::{DeliveryAddress, Order, PackageType, ShippingPackage};
    use shiplink_shipping::{
        OrderIdsInput, SenderConfig, ShipmentItem, ShipmentRecord, ShippingStatus,
    };

    use crate::blob_store::InMemoryBlobStore;
    use crate::label::InMemoryLabelFetcher;
    use crate::repository::{
        InMemoryOrderRepository, InMemoryShipmentRecordRepository, ShipmentRecordRepository,
    };
    use crate::workflow::{ShipmentCanceller, ShipmentRegistrar, SkipReason};

    /// Carrier double driven by a script of per-call results. Records every
    /// request so tests can assert what reached the carrier.
    #[derive(Default)]
    struct ScriptedCarrier {
        register_script: Mutex<VecDeque<Result<RegisterShipmentResponse, CarrierFault>>>,
        cancel_script: Mutex<VecDeque<Result<CancelShipmentResponse, CarrierFault>>>,
        register_calls: Mutex<Vec<RegisterShipmentRequest>>,
        cancel_calls: Mutex<Vec<ShipmentNumber>>,
    }

    impl ScriptedCarrier {
        fn new() -> Self {
            Self::default()
        }

        fn push_register_ok(&self, number: &str) {
            self.register_script
                .lock()
                .unwrap()
                .push_back(Ok(register_response(number)));
        }

        fn push_register_fault(&self) {
            self.register_script
                .lock()
                .unwrap()
                .push_back(Err(CarrierFault::Transport("boom".to_string())));
        }

        fn push_cancel_ok(&self) {
            self.cancel_script
                .lock()
                .unwrap()
                .push_back(Ok(CancelShipmentResponse {
                    status: "shipment cancelled".to_string(),
                }));
        }

        fn push_cancel_fault(&self) {
            self.cancel_script
                .lock()
                .unwrap()
                .push_back(Err(CarrierFault::Timeout));
        }

        fn register_calls(&self) -> Vec<RegisterShipmentRequest> {
            self.register_calls.lock().unwrap().clone()
        }

        fn cancel_calls(&self) -> Vec<ShipmentNumber> {
            self.cancel_calls.lock().unwrap().clone()
        }
    }

    impl CarrierClient for ScriptedCarrier {
        fn register_shipment(
            &self,
            request: &RegisterShipmentRequest,
        ) -> Result<RegisterShipmentResponse, CarrierFault> {
            self.register_calls.lock().unwrap().push(request.clone());
            self.register_script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(register_response("900000000")))
        }

        fn cancel_shipment(
            &self,
            shipment_number: &ShipmentNumber,
        ) -> Result<CancelShipmentResponse, CarrierFault> {
            self.cancel_calls
                .lock()
                .unwrap()
                .push(shipment_number.clone());
            self.cancel_script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| {
                    Ok(CancelShipmentResponse {
                        status: "shipment cancelled".to_string(),
                    })
                })
        }
    }

    fn register_response(number: &str) -> RegisterShipmentResponse {
        RegisterShipmentResponse {
            label_url: format!("https://carrier.example/labels/{number}.pdf"),
            shipment_number: ShipmentNumber::new(number),
            sequence_number: 1,
            status: "shipment successfully registered".to_string(),
        }
    }

    fn delivery_address() -> DeliveryAddress {
        DeliveryAddress {
            first_name: "Erika".to_string(),
            last_name: "Musterfrau".to_string(),
            street: "Musterstrasse".to_string(),
            house_number: "12".to_string(),
            postal_code: "34117".to_string(),
            town: "Kassel".to_string(),
            country: "Germany".to_string(),
        }
    }

    fn shipment_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    struct Fixture {
        orders: Arc<InMemoryOrderRepository>,
        records: Arc<InMemoryShipmentRecordRepository>,
        blobs: Arc<InMemoryBlobStore>,
        carrier: Arc<ScriptedCarrier>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                orders: Arc::new(InMemoryOrderRepository::new()),
                records: Arc::new(InMemoryShipmentRecordRepository::new()),
                blobs: Arc::new(InMemoryBlobStore::new()),
                carrier: Arc::new(ScriptedCarrier::new()),
            }
        }

        fn seed_order(&self, order_id: i64, package_count: usize) {
            let order_id = OrderId::new(order_id);
            self.orders.insert_order(Order {
                id: order_id,
                delivery_address: delivery_address(),
            });
            self.orders.insert_package_type(PackageType {
                id: PackageTypeId::new(1),
                name: "parcel M".to_string(),
                length: Some(40.0),
                width: Some(30.0),
                height: Some(20.0),
            });
            for n in 0..package_count {
                self.orders.insert_package(ShippingPackage {
                    id: PackageId::new(order_id.value() * 100 + n as i64),
                    order_id,
                    sequence_number: SequenceNumber::new(order_id.value() * 100 + n as i64),
                    weight_grams: 1500,
                    package_type_id: PackageTypeId::new(1),
                });
            }
        }

        fn registrar(
            &self,
        ) -> ShipmentRegistrar<
            Arc<InMemoryOrderRepository>,
            Arc<InMemoryShipmentRecordRepository>,
            Arc<InMemoryBlobStore>,
            Arc<InMemoryLabelFetcher>,
        > {
            ShipmentRegistrar::new(
                self.orders.clone(),
                self.records.clone(),
                self.blobs.clone(),
                Arc::new(InMemoryLabelFetcher::with_placeholder()),
                self.carrier.clone(),
                SenderConfig::default(),
            )
        }

        fn canceller(&self) -> ShipmentCanceller<Arc<InMemoryShipmentRecordRepository>> {
            ShipmentCanceller::new(self.records.clone(), self.carrier.clone())
        }
    }

    #[test]
    fn registered_order_is_never_sent_to_carrier_again() {
        let fx = Fixture::new();
        fx.seed_order(11, 1);
        fx.records.insert(ShipmentRecord::registered(
            OrderId::new(11),
            vec![ShipmentItem {
                label_url: "https://carrier.example/labels/1.pdf".to_string(),
                shipment_number: ShipmentNumber::new("1"),
            }],
            Utc::now(),
            shipment_date(),
        ));
        let before = fx.records.get(OrderId::new(11)).unwrap().unwrap();

        let outcome = fx
            .registrar()
            .register(&OrderIdsInput::One(11), shipment_date());

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].reason, SkipReason::AlreadyRegistered);
        assert!(fx.carrier.register_calls().is_empty());
        // Record untouched.
        assert_eq!(fx.records.get(OrderId::new(11)).unwrap().unwrap(), before);
    }

    #[test]
    fn open_and_unknown_status_orders_are_eligible() {
        let fx = Fixture::new();
        // Order 1: no record at all. Order 2: record reset back to open.
        fx.seed_order(1, 1);
        fx.seed_order(2, 1);
        fx.records.insert(ShipmentRecord::registered(
            OrderId::new(2),
            vec![],
            Utc::now(),
            shipment_date(),
        ));
        fx.records.reset(OrderId::new(2)).unwrap();
        fx.carrier.push_register_ok("911778899");
        fx.carrier.push_register_ok("911778900");

        let outcome = fx
            .registrar()
            .register(&OrderIdsInput::Many(vec![1, 2]), shipment_date());

        assert_eq!(outcome.results.len(), 2);
        assert!(outcome.results.contains_key(&OrderId::new(1)));
        assert!(outcome.results.contains_key(&OrderId::new(2)));
    }

    #[test]
    fn partial_dimensions_reach_carrier_as_all_null() {
        let fx = Fixture::new();
        let order_id = OrderId::new(3);
        fx.orders.insert_order(Order {
            id: order_id,
            delivery_address: delivery_address(),
        });
        fx.orders.insert_package_type(PackageType {
            id: PackageTypeId::new(9),
            name: "odd box".to_string(),
            length: Some(10.0),
            width: Some(0.0),
            height: Some(5.0),
        });
        fx.orders.insert_package(ShippingPackage {
            id: PackageId::new(31),
            order_id,
            sequence_number: SequenceNumber::new(31),
            weight_grams: 800,
            package_type_id: PackageTypeId::new(9),
        });
        fx.carrier.push_register_ok("911778899");

        fx.registrar()
            .register(&OrderIdsInput::One(3), shipment_date());

        let calls = fx.carrier.register_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].length, None);
        assert_eq!(calls[0].width, None);
        assert_eq!(calls[0].height, None);
    }

    #[test]
    fn cancel_then_register_reopens_the_order() {
        let fx = Fixture::new();
        fx.seed_order(4, 1);
        fx.carrier.push_register_ok("911778899");

        let registrar = fx.registrar();
        let outcome = registrar.register(&OrderIdsInput::One(4), shipment_date());
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(
            fx.records
                .get(OrderId::new(4))
                .unwrap()
                .unwrap()
                .shipping_status,
            ShippingStatus::Registered
        );

        fx.carrier.push_cancel_ok();
        let outcome = fx.canceller().cancel(&OrderIdsInput::One(4));
        assert!(outcome.results.contains_key(&OrderId::new(4)));
        assert!(fx.records.get(OrderId::new(4)).unwrap().unwrap().is_open());

        // Eligible again: the carrier is re-invoked.
        fx.carrier.push_register_ok("911778901");
        let outcome = registrar.register(&OrderIdsInput::One(4), shipment_date());
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(fx.carrier.register_calls().len(), 2);
    }

    #[test]
    fn carrier_fault_skips_one_package_and_keeps_the_rest() {
        let fx = Fixture::new();
        fx.seed_order(5, 2);
        fx.seed_order(6, 1);
        // Order 5: first package faults, second succeeds. Order 6: succeeds.
        fx.carrier.push_register_fault();
        fx.carrier.push_register_ok("911778900");
        fx.carrier.push_register_ok("911778901");

        let outcome = fx
            .registrar()
            .register(&OrderIdsInput::Many(vec![5, 6]), shipment_date());

        let result = &outcome.results[&OrderId::new(5)];
        let packages = result.packages.as_ref().unwrap();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].shipment_number.as_str(), "911778900");

        // The record only references the surviving package.
        let record = fx.records.get(OrderId::new(5)).unwrap().unwrap();
        assert_eq!(record.transaction_id, "911778900");

        // The other order in the batch is unaffected.
        assert!(outcome.results.contains_key(&OrderId::new(6)));
    }

    #[test]
    fn all_packages_faulting_leaves_order_open_for_retry() {
        let fx = Fixture::new();
        fx.seed_order(7, 2);
        fx.carrier.push_register_fault();
        fx.carrier.push_register_fault();

        let registrar = fx.registrar();
        let outcome = registrar.register(&OrderIdsInput::One(7), shipment_date());

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.skipped[0].reason, SkipReason::AllPackagesFaulted);
        assert!(fx.records.get(OrderId::new(7)).unwrap().is_none());

        // Retry gets through the gate again.
        fx.carrier.push_register_ok("911778899");
        fx.carrier.push_register_ok("911778900");
        let outcome = registrar.register(&OrderIdsInput::One(7), shipment_date());
        assert_eq!(outcome.results.len(), 1);
    }

    #[test]
    fn single_id_and_one_element_list_behave_identically() {
        for input in [OrderIdsInput::One(8), OrderIdsInput::Many(vec![8])] {
            let fx = Fixture::new();
            fx.seed_order(8, 1);
            fx.carrier.push_register_ok("911778899");

            let outcome = fx.registrar().register(&input, shipment_date());

            assert_eq!(outcome.results.len(), 1);
            let result = &outcome.results[&OrderId::new(8)];
            assert!(result.success);
            assert_eq!(result.message, "Code: shipment successfully registered");
        }
    }

    #[test]
    fn missing_order_yields_no_result_key() {
        let fx = Fixture::new();

        let outcome = fx
            .registrar()
            .register(&OrderIdsInput::Many(vec![999]), shipment_date());

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].order_id, OrderId::new(999));
        assert_eq!(outcome.skipped[0].reason, SkipReason::OrderNotFound);
        // Failed lookups release the claim; the order stays eligible.
        assert!(fx
            .records
            .claim_for_registration(OrderId::new(999))
            .unwrap());
    }

    #[test]
    fn label_is_stored_under_the_shipment_number_key() {
        let fx = Fixture::new();
        fx.seed_order(9, 1);
        fx.carrier.push_register_ok("911778899");

        fx.registrar()
            .register(&OrderIdsInput::One(9), shipment_date());

        assert_eq!(fx.blobs.keys("shiplink"), vec!["911778899.pdf".to_string()]);
        assert!(fx.blobs.get("shiplink", "911778899.pdf").is_some());

        // The package row links back to the same shipment.
        let update = fx
            .orders
            .package_update(SequenceNumber::new(900))
            .expect("package update written");
        assert_eq!(update.package_number.as_str(), "911778899");
        assert_eq!(update.label, "911778899.pdf");
    }

    #[test]
    fn order_without_packages_is_silently_skipped() {
        let fx = Fixture::new();
        fx.seed_order(10, 0);

        let outcome = fx
            .registrar()
            .register(&OrderIdsInput::One(10), shipment_date());

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.skipped[0].reason, SkipReason::NoPackages);
        assert!(fx.records.get(OrderId::new(10)).unwrap().is_none());
        assert!(fx.carrier.register_calls().is_empty());
    }

    #[test]
    fn cancel_skips_orders_without_shipment_data() {
        let fx = Fixture::new();
        // No record for order 20; record with no packages for order 21.
        fx.records.insert(ShipmentRecord::registered(
            OrderId::new(21),
            vec![],
            Utc::now(),
            shipment_date(),
        ));

        let outcome = fx.canceller().cancel(&OrderIdsInput::Many(vec![20, 21]));

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.skipped.len(), 2);
        assert!(fx.carrier.cancel_calls().is_empty());
    }

    #[test]
    fn cancel_fault_skips_the_entry_but_still_resets_the_record() {
        let fx = Fixture::new();
        fx.records.insert(ShipmentRecord::registered(
            OrderId::new(22),
            vec![
                ShipmentItem {
                    label_url: "https://carrier.example/labels/a.pdf".to_string(),
                    shipment_number: ShipmentNumber::new("911778899"),
                },
                ShipmentItem {
                    label_url: "https://carrier.example/labels/b.pdf".to_string(),
                    shipment_number: ShipmentNumber::new("911778900"),
                },
            ],
            Utc::now(),
            shipment_date(),
        ));
        fx.carrier.push_cancel_fault();
        fx.carrier.push_cancel_ok();

        let outcome = fx.canceller().cancel(&OrderIdsInput::One(22));

        // Both entries were attempted; one fault does not stop the other.
        assert_eq!(fx.carrier.cancel_calls().len(), 2);
        let result = &outcome.results[&OrderId::new(22)];
        assert_eq!(result.message, "Code: shipment cancelled");
        assert_eq!(result.packages, None);
        assert!(fx.records.get(OrderId::new(22)).unwrap().unwrap().is_open());
    }

    #[test]
    fn duplicate_ids_in_one_batch_register_once() {
        let fx = Fixture::new();
        fx.seed_order(23, 1);
        fx.carrier.push_register_ok("911778899");

        let outcome = fx
            .registrar()
            .register(&OrderIdsInput::Many(vec![23, 23, 23]), shipment_date());

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(fx.carrier.register_calls().len(), 1);
    }

    #[test]
    fn sandbox_carrier_drives_the_full_flow() {
        let fx = Fixture::new();
        fx.seed_order(24, 2);

        let registrar = ShipmentRegistrar::new(
            fx.orders.clone(),
            fx.records.clone(),
            fx.blobs.clone(),
            Arc::new(InMemoryLabelFetcher::with_placeholder()),
            Arc::new(SandboxCarrierClient::new()),
            SenderConfig::default(),
        );

        let outcome = registrar.register(&OrderIdsInput::One(24), shipment_date());

        let record = fx.records.get(OrderId::new(24)).unwrap().unwrap();
        assert_eq!(record.transaction_id, "911778899,911778900");
        assert_eq!(record.additional_data.len(), 2);
        assert_eq!(
            outcome.results[&OrderId::new(24)]
                .packages
                .as_ref()
                .unwrap()
                .len(),
            2
        );
        let mut keys = fx.blobs.keys("shiplink");
        keys.sort();
        assert_eq!(keys, vec!["911778899.pdf", "911778900.pdf"]);
    }
}

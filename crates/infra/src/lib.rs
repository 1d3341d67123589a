//! `shiplink-infra` — collaborator ports, adapters and the workflow engine.
//!
//! The host platform owns orders, shipment records and blob storage; this
//! crate defines the ports the workflow consumes ([`repository`],
//! [`blob_store`], [`label`]) together with in-memory implementations for
//! tests and sandbox deployments, and the two workflow components
//! ([`workflow::ShipmentRegistrar`], [`workflow::ShipmentCanceller`]).

pub mod blob_store;
pub mod label;
pub mod repository;
pub mod workflow;

#[cfg(test)]
mod integration_tests;

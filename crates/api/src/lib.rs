//! `shiplink-api` — HTTP surface the host platform calls.
//!
//! Exposes the two workflow operations (`registerShipments`,
//! `deleteShipments`) as JSON endpoints and wires the workflow to its
//! collaborators according to the configured carrier mode.

pub mod app;
pub mod config;

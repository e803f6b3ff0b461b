//! Application core: pure domain logic, zero I/O.
//!
//! The business rules for the vehicle controller: the fixed-order polling
//! iteration over welcome, ignition, engine, and headlight decisions.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;

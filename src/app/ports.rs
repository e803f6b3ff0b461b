//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ VehicleControlLoop (domain)
//! ```
//!
//! Driven adapters (pins, ADC, serial console, logger) implement these
//! traits.  The [`VehicleControlLoop`](super::service::VehicleControlLoop)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! Reads and writes are infallible at this boundary: a sensor always
//! returns its current value and an actuator write always lands.

use crate::fsm::{BeamOutputs, Notice};

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: current value of every input, synchronously.
pub trait InputPort {
    /// Driver seat occupancy sensor.
    fn seat_occupied(&mut self) -> bool;

    /// Ignition push-button level (true while held).
    fn ignition_pressed(&mut self) -> bool;

    /// High-beam stalk position.
    fn high_beam_requested(&mut self) -> bool;

    /// Ambient light sensor, nominally `[0.0, 1.0]`.
    fn light_level(&mut self) -> f32;

    /// Headlight mode dial, nominally `[0.0, 1.0]`.
    fn mode_dial(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: indicators and headlamp channels.
pub trait OutputPort {
    fn set_ignition_indicator(&mut self, on: bool);

    fn set_engine_indicator(&mut self, on: bool);

    /// Drive all four headlamp channels at once.
    fn set_beams(&mut self, beams: BeamOutputs);
}

// ───────────────────────────────────────────────────────────────
// Notification sink (driven adapter: domain → driver text channel)
// ───────────────────────────────────────────────────────────────

/// Line-oriented text channel to the driver (serial console on target).
pub trait NotificationSink {
    /// Write one notice as a single line.
    fn notify(&mut self, notice: Notice);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

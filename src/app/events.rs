//! Outbound application events.
//!
//! The [`VehicleControlLoop`](super::service::VehicleControlLoop) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  They describe
//! what the loop decided; the driver-facing text goes through
//! [`NotificationSink`](super::ports::NotificationSink) separately.

use crate::fsm::{BeamOutputs, EngineState, HeadlightMode, Notice};
use crate::sensors::light::LightVerdict;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Outputs initialised, loop about to run.
    Started,

    /// A notice was written to the text channel.
    Notified(Notice),

    /// Ignition stage switched.
    IgnitionChanged { on: bool },

    /// Engine transitioned.
    EngineChanged { from: EngineState, to: EngineState },

    /// Stored headlight decision changed.
    HeadlightModeChanged { from: HeadlightMode, to: HeadlightMode },

    /// Auto band ran the light confirmation without reaching a decision.
    AutoUndecided(LightVerdict),

    /// Periodic status snapshot.
    Telemetry(VehicleStatus),
}

/// A point-in-time view of the controller suitable for logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleStatus {
    pub iteration: u64,
    pub ignition_on: bool,
    pub engine: EngineState,
    pub headlight: HeadlightMode,
    pub beams: BeamOutputs,
    pub welcome_sent: bool,
}

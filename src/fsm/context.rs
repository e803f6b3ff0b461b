//! State threaded through every step of a loop iteration.
//!
//! `VehicleState` replaces the loose set of flags a polling controller
//! usually keeps in globals.  It is owned by the control loop and lent to
//! each step in turn, so the read/write order is exactly the step order.

use super::{BeamOutputs, EngineState, HeadlightMode};

// ---------------------------------------------------------------------------
// Input snapshot (sampled once at the top of each iteration)
// ---------------------------------------------------------------------------

/// Digital inputs for one iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Driver seat sensor: true = occupied.
    pub seat_occupied: bool,
    /// Ignition push-button, sampled as a level (held = true).
    pub ignition_pressed: bool,
    /// High-beam stalk position.
    pub high_beam_requested: bool,
}

// ---------------------------------------------------------------------------
// VehicleState
// ---------------------------------------------------------------------------

/// Process-lifetime controller state.  Everything starts off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VehicleState {
    /// Ignition stage; never true while the engine runs.
    pub ignition_on: bool,
    pub engine: EngineState,
    /// Last decided headlight mode (`Off` or `On`).
    pub headlight: HeadlightMode,
    /// Welcome guard for the current occupancy session.
    pub welcome_sent: bool,
    /// Beam outputs as last written to the lamps.
    pub beams: BeamOutputs,
}

impl VehicleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine_running(&self) -> bool {
        self.engine.is_running()
    }
}

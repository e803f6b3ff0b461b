//! The five update steps, in loop order.
//!
//! Each step reads the input snapshot and whatever earlier steps wrote to
//! [`VehicleState`] in this iteration.  Inputs are levels, not edges: a held
//! ignition button keeps matching the next applicable engine transition on
//! every iteration it stays down.

use log::debug;

use super::context::{InputSnapshot, VehicleState};
use super::{BeamOutputs, EngineState, HeadlightMode, HeadlightRequest, Notice};

// ---------------------------------------------------------------------------
// 1. Welcome
// ---------------------------------------------------------------------------

/// One welcome per occupancy session, never while the engine runs.
/// Leaving the seat rearms the guard.
pub fn welcome_update(state: &mut VehicleState, seat_occupied: bool) -> Option<Notice> {
    if seat_occupied && !state.engine_running() {
        if !state.welcome_sent {
            state.welcome_sent = true;
            return Some(Notice::Welcome);
        }
    } else if !seat_occupied {
        state.welcome_sent = false;
    }
    None
}

// ---------------------------------------------------------------------------
// 2. Ignition
// ---------------------------------------------------------------------------

/// Level-triggered: ignition is on exactly while the seat is occupied and
/// the engine is stopped.  Returns the new ignition value.
pub fn ignition_update(state: &mut VehicleState, seat_occupied: bool) -> bool {
    state.ignition_on = seat_occupied && !state.engine_running();
    state.ignition_on
}

// ---------------------------------------------------------------------------
// 3. Engine
// ---------------------------------------------------------------------------

/// Result of the engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOutcome {
    /// Stopped -> Running.
    Started,
    /// Running -> Stopped.
    Stopped,
    /// Button pressed without ignition; no state change.
    Inhibited { seat_occupied: bool },
    /// Button released, or nothing applicable.
    Unchanged,
}

impl EngineOutcome {
    /// Notices to write for this outcome, in order.
    pub fn notices(self) -> &'static [Notice] {
        match self {
            Self::Started => &[Notice::EngineStarted],
            Self::Inhibited {
                seat_occupied: true,
            } => &[Notice::IgnitionInhibited],
            Self::Inhibited {
                seat_occupied: false,
            } => &[Notice::IgnitionInhibited, Notice::SeatNotOccupied],
            Self::Stopped | Self::Unchanged => &[],
        }
    }
}

/// Engine start/stop.  First matching rule wins:
///
/// | ignition | button | engine  | result                         |
/// |----------|--------|---------|--------------------------------|
/// | on       | held   | stopped | start, ignition off            |
/// | off      | held   | stopped | inhibited (+ seat notice)      |
/// | any      | held   | running | stop                           |
pub fn engine_update(state: &mut VehicleState, input: &InputSnapshot) -> EngineOutcome {
    let running = state.engine_running();

    if state.ignition_on && input.ignition_pressed && !running {
        state.ignition_on = false;
        state.engine = EngineState::Running;
        EngineOutcome::Started
    } else if !state.ignition_on && input.ignition_pressed && !running {
        EngineOutcome::Inhibited {
            seat_occupied: input.seat_occupied,
        }
    } else if running && input.ignition_pressed {
        state.engine = EngineState::Stopped;
        EngineOutcome::Stopped
    } else {
        EngineOutcome::Unchanged
    }
}

// ---------------------------------------------------------------------------
// 4. Headlight mode
// ---------------------------------------------------------------------------

/// Apply the headlight request and return the mode the output step should
/// drive this iteration.
///
/// An undecided Auto request keeps the stored mode and yields
/// [`HeadlightMode::Auto`], which the output step treats as "leave the
/// beams alone".
pub fn headlight_mode_update(state: &mut VehicleState, request: HeadlightRequest) -> HeadlightMode {
    let decided = match request {
        HeadlightRequest::EngineStopped | HeadlightRequest::DialOff => HeadlightMode::Off,
        HeadlightRequest::DialOn => HeadlightMode::On,
        HeadlightRequest::Auto { lit: Some(true) } => HeadlightMode::On,
        HeadlightRequest::Auto { lit: Some(false) } => HeadlightMode::Off,
        HeadlightRequest::Auto { lit: None } => {
            debug!("auto: no decision, holding {:?}", state.headlight);
            return HeadlightMode::Auto;
        }
    };
    state.headlight = decided;
    decided
}

// ---------------------------------------------------------------------------
// 5. Headlight output
// ---------------------------------------------------------------------------

/// Pure mapping from mode and stalk position to the four channels.
/// `Auto` has no rule: `None` means the beams keep their last value.
pub fn beam_outputs(mode: HeadlightMode, high_beam_requested: bool) -> Option<BeamOutputs> {
    match mode {
        HeadlightMode::Off => Some(BeamOutputs::all_off()),
        HeadlightMode::On if high_beam_requested => Some(BeamOutputs::all_on()),
        HeadlightMode::On => Some(BeamOutputs::low_only()),
        HeadlightMode::Auto => None,
    }
}

/// Compute the beam outputs and record them in the state.  Returns what the
/// lamps must be driven to, if anything.
pub fn headlight_output_update(
    state: &mut VehicleState,
    mode: HeadlightMode,
    high_beam_requested: bool,
) -> Option<BeamOutputs> {
    let beams = beam_outputs(mode, high_beam_requested)?;
    state.beams = beams;
    Some(beams)
}

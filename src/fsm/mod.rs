//! Vehicle decision logic: state, notices, and the per-iteration steps.
//!
//! ```text
//!   InputSnapshot ──▶ welcome ──▶ ignition ──▶ engine ──▶ headlight mode ──▶ headlight output
//!                          │           │           │              │                   │
//!                          └───────────┴───── &mut VehicleState ──┴───────────────────┘
//! ```
//!
//! Every step is a plain function over `&mut VehicleState`.  The order is
//! fixed: a step may depend on what an earlier step wrote in the same
//! iteration (the engine step sees the ignition value computed just before
//! it).  Hardware access stays outside this module; the service samples the
//! inputs and applies the outputs.

pub mod context;
pub mod steps;

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Engine run state.  Only the explicit start transition sets `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum EngineState {
    #[default]
    Stopped = 0,
    Running = 1,
}

impl EngineState {
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

// ---------------------------------------------------------------------------
// Headlights
// ---------------------------------------------------------------------------

/// Headlight decision.
///
/// The stored mode is always `Off` or `On`: the Auto band resolves to one of
/// them once the light reading is confirmed.  `Auto` is what the output step
/// receives for an iteration where the Auto band made no decision, and it
/// leaves the beams untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum HeadlightMode {
    #[default]
    Off = 0,
    Auto = 1,
    On = 2,
}

/// What the headlight-mode step is asked to do this iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlightRequest {
    /// Engine not running: headlights forced off, dial ignored.
    EngineStopped,
    /// Dial in the Off band.
    DialOff,
    /// Dial in the On band.
    DialOn,
    /// Dial in the Auto band.  `lit` carries the confirmed ambient decision
    /// (`true` = dark, lights on), or `None` when the readings did not agree.
    Auto { lit: Option<bool> },
}

/// The four headlight channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BeamOutputs {
    pub left_low: bool,
    pub right_low: bool,
    pub left_high: bool,
    pub right_high: bool,
}

impl BeamOutputs {
    pub const fn all_off() -> Self {
        Self {
            left_low: false,
            right_low: false,
            left_high: false,
            right_high: false,
        }
    }

    pub const fn low_only() -> Self {
        Self {
            left_low: true,
            right_low: true,
            left_high: false,
            right_high: false,
        }
    }

    pub const fn all_on() -> Self {
        Self {
            left_low: true,
            right_low: true,
            left_high: true,
            right_high: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Notices (text channel)
// ---------------------------------------------------------------------------

/// Driver-facing messages written to the text channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    Welcome,
    EngineStarted,
    IgnitionInhibited,
    SeatNotOccupied,
}

impl Notice {
    /// Exact message text, without line terminator.
    pub const fn text(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome to BMW, the ultimate driving machine.",
            Self::EngineStarted => "Engine started.",
            Self::IgnitionInhibited => "Ignition inhibited",
            Self::SeatNotOccupied => "Driver seat not occupied.",
        }
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.text())
    }
}

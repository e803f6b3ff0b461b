//! Application service: the hexagonal core.
//!
//! [`VehicleControlLoop`] owns the [`VehicleState`] and configuration and
//! runs one polling iteration per [`tick`](VehicleControlLoop::tick).  All
//! I/O flows through port traits injected at call sites, making the loop
//! testable with mock adapters.
//!
//! ```text
//!    InputPort ──▶ ┌──────────────────────────────┐ ──▶ NotificationSink
//!                  │      VehicleControlLoop       │
//!   OutputPort ◀── │ welcome · ignition · engine   │ ──▶ EventSink
//!      DelayNs ◀── │ headlight mode · output       │
//!                  └──────────────────────────────┘
//! ```

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::ControlConfig;
use crate::fsm::context::{InputSnapshot, VehicleState};
use crate::fsm::steps;
use crate::fsm::{HeadlightRequest, Notice};
use crate::sensors::dial::{self, DialBand};
use crate::sensors::light::confirm_ambient_light;

use super::events::{AppEvent, VehicleStatus};
use super::ports::{EventSink, InputPort, NotificationSink, OutputPort};

// ───────────────────────────────────────────────────────────────
// VehicleControlLoop
// ───────────────────────────────────────────────────────────────

/// The cyclic controller.  One instance per process, ticked forever.
pub struct VehicleControlLoop {
    state: VehicleState,
    config: ControlConfig,
    iteration: u64,
}

impl VehicleControlLoop {
    /// Construct the loop with everything off.
    ///
    /// Does **not** touch the outputs; call [`start`](Self::start) next.
    pub fn new(config: ControlConfig) -> Self {
        Self {
            state: VehicleState::new(),
            config,
            iteration: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive both indicators off before the first iteration.
    pub fn start(&mut self, hw: &mut impl OutputPort, sink: &mut impl EventSink) {
        hw.set_ignition_indicator(false);
        hw.set_engine_indicator(false);
        sink.emit(&AppEvent::Started);
        info!("VehicleControlLoop started");
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// Run one iteration: welcome → ignition → engine → headlight mode →
    /// headlight output.
    ///
    /// In the Auto band this call blocks on `delay` for one or two
    /// confirmation waits.  The `hw` parameter satisfies **both**
    /// [`InputPort`] and [`OutputPort`], which avoids a double mutable borrow
    /// while keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl InputPort + OutputPort),
        delay: &mut impl DelayNs,
        notices: &mut impl NotificationSink,
        sink: &mut impl EventSink,
    ) {
        self.iteration += 1;
        let prev = self.state;

        let input = InputSnapshot {
            seat_occupied: hw.seat_occupied(),
            ignition_pressed: hw.ignition_pressed(),
            high_beam_requested: hw.high_beam_requested(),
        };

        // 1. Welcome
        if let Some(notice) = steps::welcome_update(&mut self.state, input.seat_occupied) {
            Self::notify(notice, notices, sink);
        }

        // 2. Ignition
        let ignition = steps::ignition_update(&mut self.state, input.seat_occupied);
        hw.set_ignition_indicator(ignition);

        // 3. Engine
        let outcome = steps::engine_update(&mut self.state, &input);
        for &notice in outcome.notices() {
            Self::notify(notice, notices, sink);
        }
        hw.set_ignition_indicator(self.state.ignition_on);
        hw.set_engine_indicator(self.state.engine_running());

        // 4. Headlight mode
        let request = self.headlight_request(hw, delay, sink);
        let drive = steps::headlight_mode_update(&mut self.state, request);

        // 5. Headlight output
        if let Some(beams) =
            steps::headlight_output_update(&mut self.state, drive, input.high_beam_requested)
        {
            hw.set_beams(beams);
        }

        self.emit_changes(&prev, sink);
    }

    /// Emit a telemetry snapshot every `telemetry_interval_ticks` iterations.
    /// Returns `true` if one was emitted.
    pub fn emit_telemetry_if_due(&self, sink: &mut impl EventSink) -> bool {
        let every = u64::from(self.config.telemetry_interval_ticks);
        if every == 0 || self.iteration == 0 || self.iteration % every != 0 {
            return false;
        }
        sink.emit(&AppEvent::Telemetry(self.status()));
        true
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn status(&self) -> VehicleStatus {
        VehicleStatus {
            iteration: self.iteration,
            ignition_on: self.state.ignition_on,
            engine: self.state.engine,
            headlight: self.state.headlight,
            beams: self.state.beams,
            welcome_sent: self.state.welcome_sent,
        }
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Iterations executed since startup.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    // ── Internal ──────────────────────────────────────────────

    /// Sample the dial (and, in the Auto band, the light sensor) into a
    /// request for the headlight-mode step.  Inputs are untouched while the
    /// engine is stopped.
    fn headlight_request(
        &self,
        hw: &mut impl InputPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> HeadlightRequest {
        if !self.state.engine_running() {
            return HeadlightRequest::EngineStopped;
        }

        match dial::classify(hw.mode_dial(), &self.config) {
            DialBand::Off => HeadlightRequest::DialOff,
            DialBand::On => HeadlightRequest::DialOn,
            DialBand::Auto => {
                let verdict = confirm_ambient_light(hw, delay, &self.config);
                let lit = verdict.lit();
                if lit.is_none() {
                    sink.emit(&AppEvent::AutoUndecided(verdict));
                }
                HeadlightRequest::Auto { lit }
            }
        }
    }

    fn notify(notice: Notice, notices: &mut impl NotificationSink, sink: &mut impl EventSink) {
        debug!("notice: {}", notice);
        notices.notify(notice);
        sink.emit(&AppEvent::Notified(notice));
    }

    fn emit_changes(&self, prev: &VehicleState, sink: &mut impl EventSink) {
        if prev.ignition_on != self.state.ignition_on {
            sink.emit(&AppEvent::IgnitionChanged {
                on: self.state.ignition_on,
            });
        }
        if prev.engine != self.state.engine {
            sink.emit(&AppEvent::EngineChanged {
                from: prev.engine,
                to: self.state.engine,
            });
        }
        if prev.headlight != self.state.headlight {
            sink.emit(&AppEvent::HeadlightModeChanged {
                from: prev.headlight,
                to: self.state.headlight,
            });
        }
    }
}

//! Mock hardware adapter for integration tests.
//!
//! Records every output call and every delay so tests can assert on the
//! full command history without touching real GPIO registers.  Light
//! readings are scripted per test.

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use vehicle_control::adapters::console::SerialNotifier;
use vehicle_control::app::events::AppEvent;
use vehicle_control::app::ports::{EventSink, InputPort, NotificationSink, OutputPort};
use vehicle_control::app::service::VehicleControlLoop;
use vehicle_control::config::ControlConfig;
use vehicle_control::fsm::{BeamOutputs, Notice};

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputCall {
    IgnitionLed(bool),
    EngineLed(bool),
    Beams(BeamOutputs),
}

// ── MockVehicle ───────────────────────────────────────────────

pub struct MockVehicle {
    pub seat: bool,
    pub button: bool,
    pub high_beam: bool,
    pub dial: f32,
    /// Light readings consumed in order; `steady_light` once exhausted.
    pub light_script: VecDeque<f32>,
    pub steady_light: f32,

    pub calls: Vec<OutputCall>,
    pub dial_reads: usize,
    pub light_reads: usize,
}

#[allow(dead_code)]
impl MockVehicle {
    pub fn new() -> Self {
        Self {
            seat: false,
            button: false,
            high_beam: false,
            dial: 0.0,
            light_script: VecDeque::new(),
            steady_light: 0.0,
            calls: Vec::new(),
            dial_reads: 0,
            light_reads: 0,
        }
    }

    pub fn script_light(&mut self, readings: &[f32]) {
        self.light_script.extend(readings.iter().copied());
    }

    pub fn ignition_led(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            OutputCall::IgnitionLed(on) => Some(*on),
            _ => None,
        })
    }

    pub fn engine_led(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            OutputCall::EngineLed(on) => Some(*on),
            _ => None,
        })
    }

    pub fn beams(&self) -> Option<BeamOutputs> {
        self.calls.iter().rev().find_map(|c| match c {
            OutputCall::Beams(b) => Some(*b),
            _ => None,
        })
    }

    pub fn beam_writes(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, OutputCall::Beams(_)))
            .count()
    }
}

impl Default for MockVehicle {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for MockVehicle {
    fn seat_occupied(&mut self) -> bool {
        self.seat
    }

    fn ignition_pressed(&mut self) -> bool {
        self.button
    }

    fn high_beam_requested(&mut self) -> bool {
        self.high_beam
    }

    fn light_level(&mut self) -> f32 {
        self.light_reads += 1;
        self.light_script.pop_front().unwrap_or(self.steady_light)
    }

    fn mode_dial(&mut self) -> f32 {
        self.dial_reads += 1;
        self.dial
    }
}

impl OutputPort for MockVehicle {
    fn set_ignition_indicator(&mut self, on: bool) {
        self.calls.push(OutputCall::IgnitionLed(on));
    }

    fn set_engine_indicator(&mut self, on: bool) {
        self.calls.push(OutputCall::EngineLed(on));
    }

    fn set_beams(&mut self, beams: BeamOutputs) {
        self.calls.push(OutputCall::Beams(beams));
    }
}

// ── MockDelay ─────────────────────────────────────────────────

#[derive(Default)]
pub struct MockDelay {
    pub waits_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}

// ── Notice recorder ───────────────────────────────────────────

#[derive(Default)]
pub struct NoticeLog {
    pub notices: Vec<Notice>,
}

impl NotificationSink for NoticeLog {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

// ── EventLog ──────────────────────────────────────────────────

#[derive(Default)]
pub struct EventLog {
    pub events: Vec<AppEvent>,
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Rig: loop + every mock, ticked together ───────────────────

pub struct Rig {
    pub app: VehicleControlLoop,
    pub hw: MockVehicle,
    pub delay: MockDelay,
    pub notices: NoticeLog,
    pub events: EventLog,
}

#[allow(dead_code)]
impl Rig {
    pub fn new() -> Self {
        let mut rig = Self {
            app: VehicleControlLoop::new(ControlConfig::default()),
            hw: MockVehicle::new(),
            delay: MockDelay::default(),
            notices: NoticeLog::default(),
            events: EventLog::default(),
        };
        rig.app.start(&mut rig.hw, &mut rig.events);
        rig
    }

    pub fn tick(&mut self) {
        self.app
            .tick(&mut self.hw, &mut self.delay, &mut self.notices, &mut self.events);
    }

    pub fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Seat occupied, one press, release: engine running.
    pub fn start_engine(&mut self) {
        self.hw.seat = true;
        self.tick();
        self.hw.button = true;
        self.tick();
        self.hw.button = false;
        assert!(self.app.state().engine_running(), "engine should be running");
    }

    /// Drain recorded notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices.notices)
    }

    /// Drain recorded delays.
    pub fn take_waits(&mut self) -> Vec<u32> {
        std::mem::take(&mut self.delay.waits_ms)
    }
}

/// Text channel backed by a byte buffer, for checking the wire format.
#[allow(dead_code)]
pub fn serial_buffer() -> SerialNotifier<Vec<u8>> {
    SerialNotifier::new(Vec::new())
}

//! Hardware adapter: bridges board pins to domain port traits.
//!
//! Generic over the `embedded-hal` digital pin traits and [`AnalogInput`],
//! so the same adapter drives the real GPIO drivers on target and plain
//! test doubles on host.  Pin errors never reach the domain: a failed read
//! counts as "not asserted" and a failed write is logged and skipped.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use log::warn;

use crate::app::ports::{InputPort, OutputPort};
use crate::fsm::BeamOutputs;
use crate::sensors::AnalogInput;

/// Every pin the controller touches, handed over at construction.
pub struct VehiclePins<I, O, A> {
    pub seat_sensor: I,
    pub ignition_button: I,
    pub high_beam_switch: I,
    pub light_sensor: A,
    pub mode_dial: A,
    pub ignition_led: O,
    pub engine_led: O,
    pub left_low_beam: O,
    pub right_low_beam: O,
    pub left_high_beam: O,
    pub right_high_beam: O,
}

/// Concrete adapter that combines all pins behind the port traits.
pub struct HardwareAdapter<I, O, A> {
    pins: VehiclePins<I, O, A>,
}

impl<I, O, A> HardwareAdapter<I, O, A> {
    pub fn new(pins: VehiclePins<I, O, A>) -> Self {
        Self { pins }
    }

    /// Hand the pins back (used by tests to inspect outputs).
    pub fn into_pins(self) -> VehiclePins<I, O, A> {
        self.pins
    }
}

fn read_level(pin: &mut impl InputPin, name: &str) -> bool {
    match pin.is_high() {
        Ok(level) => level,
        Err(e) => {
            warn!("{} read failed: {:?}", name, e);
            false
        }
    }
}

fn write_level(pin: &mut impl OutputPin, on: bool, name: &str) {
    if let Err(e) = pin.set_state(PinState::from(on)) {
        warn!("{} write failed: {:?}", name, e);
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<I: InputPin, O, A: AnalogInput> InputPort for HardwareAdapter<I, O, A> {
    fn seat_occupied(&mut self) -> bool {
        read_level(&mut self.pins.seat_sensor, "seat sensor")
    }

    fn ignition_pressed(&mut self) -> bool {
        read_level(&mut self.pins.ignition_button, "ignition button")
    }

    fn high_beam_requested(&mut self) -> bool {
        read_level(&mut self.pins.high_beam_switch, "high-beam switch")
    }

    fn light_level(&mut self) -> f32 {
        self.pins.light_sensor.read()
    }

    fn mode_dial(&mut self) -> f32 {
        self.pins.mode_dial.read()
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl<I, O: OutputPin, A> OutputPort for HardwareAdapter<I, O, A> {
    fn set_ignition_indicator(&mut self, on: bool) {
        write_level(&mut self.pins.ignition_led, on, "ignition LED");
    }

    fn set_engine_indicator(&mut self, on: bool) {
        write_level(&mut self.pins.engine_led, on, "engine LED");
    }

    fn set_beams(&mut self, beams: BeamOutputs) {
        write_level(&mut self.pins.left_low_beam, beams.left_low, "left low beam");
        write_level(&mut self.pins.right_low_beam, beams.right_low, "right low beam");
        write_level(&mut self.pins.left_high_beam, beams.left_high, "left high beam");
        write_level(&mut self.pins.right_high_beam, beams.right_high, "right high beam");
    }
}

//! Fuzz target: `VehicleControlLoop`
//!
//! Drives arbitrary input sequences through the loop, four bytes per
//! iteration (switch bits, dial, two light readings), and verifies:
//! - No panics under arbitrary inputs
//! - Ignition and engine are never on together
//! - Headlights are off whenever the engine is stopped
//! - The stored headlight mode is never `Auto`
//! - Each iteration waits at most twice, one second each
//!
//! cargo fuzz run fuzz_control_loop

#![no_main]

use embedded_hal::delay::DelayNs;
use libfuzzer_sys::fuzz_target;
use vehicle_control::app::events::AppEvent;
use vehicle_control::app::ports::{EventSink, InputPort, NotificationSink, OutputPort};
use vehicle_control::app::service::VehicleControlLoop;
use vehicle_control::config::ControlConfig;
use vehicle_control::fsm::{BeamOutputs, HeadlightMode, Notice};

// ── In-memory vehicle ─────────────────────────────────────────

#[derive(Default)]
struct FuzzVehicle {
    switches: u8,
    dial: f32,
    light: [f32; 2],
    light_reads: usize,
    beams: Option<BeamOutputs>,
}

impl InputPort for FuzzVehicle {
    fn seat_occupied(&mut self) -> bool {
        self.switches & 0b001 != 0
    }

    fn ignition_pressed(&mut self) -> bool {
        self.switches & 0b010 != 0
    }

    fn high_beam_requested(&mut self) -> bool {
        self.switches & 0b100 != 0
    }

    fn light_level(&mut self) -> f32 {
        // Third reading repeats the second.
        let v = self.light[self.light_reads.min(1)];
        self.light_reads += 1;
        v
    }

    fn mode_dial(&mut self) -> f32 {
        self.dial
    }
}

impl OutputPort for FuzzVehicle {
    fn set_ignition_indicator(&mut self, _on: bool) {}
    fn set_engine_indicator(&mut self, _on: bool) {}
    fn set_beams(&mut self, beams: BeamOutputs) {
        self.beams = Some(beams);
    }
}

#[derive(Default)]
struct Waits(Vec<u32>);

impl DelayNs for Waits {
    fn delay_ns(&mut self, _ns: u32) {}
    fn delay_ms(&mut self, ms: u32) {
        self.0.push(ms);
    }
}

struct Quiet;

impl NotificationSink for Quiet {
    fn notify(&mut self, _notice: Notice) {}
}

impl EventSink for Quiet {
    fn emit(&mut self, _event: &AppEvent) {}
}

/// Byte to a reading slightly beyond `[0, 1]` on both sides.
fn reading(b: u8) -> f32 {
    f32::from(b) / 200.0 - 0.1
}

fuzz_target!(|data: &[u8]| {
    let mut app = VehicleControlLoop::new(ControlConfig::default());
    let mut hw = FuzzVehicle::default();
    let mut delay = Waits::default();
    app.start(&mut hw, &mut Quiet);

    for chunk in data.chunks_exact(4).take(256) {
        hw.switches = chunk[0];
        hw.dial = reading(chunk[1]);
        hw.light = [reading(chunk[2]), reading(chunk[3])];
        hw.light_reads = 0;
        delay.0.clear();

        app.tick(&mut hw, &mut delay, &mut Quiet, &mut Quiet);

        let state = app.state();
        assert!(
            !(state.ignition_on && state.engine_running()),
            "ignition and engine both on"
        );
        assert_ne!(state.headlight, HeadlightMode::Auto, "Auto stored as mode");
        if !state.engine_running() {
            assert_eq!(state.headlight, HeadlightMode::Off);
            assert_eq!(hw.beams, Some(BeamOutputs::all_off()));
        }
        assert!(delay.0.len() <= 2, "more than two confirmation waits");
        assert!(delay.0.iter().all(|&ms| ms == 1000));
        assert!(hw.light_reads <= 3);
    }
});

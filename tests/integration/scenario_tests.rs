//! Integration tests: end-to-end driving sessions through the full loop.

use vehicle_control::app::events::AppEvent;
use vehicle_control::fsm::{BeamOutputs, EngineState, HeadlightMode, Notice};

use super::mock_hw::{serial_buffer, Rig};

#[test]
fn occupant_leaves_and_returns() {
    let mut rig = Rig::new();

    rig.hw.seat = true;
    rig.ticks(3);
    assert_eq!(rig.take_notices(), vec![Notice::Welcome]);
    assert_eq!(rig.hw.ignition_led(), Some(true));

    rig.hw.seat = false;
    rig.ticks(2);
    assert_eq!(rig.hw.ignition_led(), Some(false));
    assert!(rig.take_notices().is_empty());

    rig.hw.seat = true;
    rig.ticks(3);
    assert_eq!(rig.take_notices(), vec![Notice::Welcome]);
    assert_eq!(rig.hw.ignition_led(), Some(true));
}

#[test]
fn each_missing_start_precondition_blocks_running() {
    // Seat empty: inhibited.
    let mut rig = Rig::new();
    rig.hw.button = true;
    rig.tick();
    assert_eq!(rig.app.state().engine, EngineState::Stopped);

    // Button released: nothing happens.
    let mut rig = Rig::new();
    rig.hw.seat = true;
    rig.ticks(2);
    assert_eq!(rig.app.state().engine, EngineState::Stopped);

    // Engine already running: the press stops it instead.
    let mut rig = Rig::new();
    rig.start_engine();
    rig.hw.button = true;
    rig.tick();
    assert_eq!(rig.app.state().engine, EngineState::Stopped);

    // All three present: running.
    let mut rig = Rig::new();
    rig.hw.seat = true;
    rig.tick();
    rig.hw.button = true;
    rig.tick();
    assert_eq!(rig.app.state().engine, EngineState::Running);
}

#[test]
fn evening_drive() {
    let mut rig = Rig::new();

    // Get in and start.
    rig.start_engine();
    assert_eq!(
        rig.take_notices(),
        vec![Notice::Welcome, Notice::EngineStarted]
    );
    assert_eq!(rig.hw.engine_led(), Some(true));
    assert_eq!(rig.hw.ignition_led(), Some(false));

    // Headlights on manually, then high beams.
    rig.hw.dial = 1.0;
    rig.tick();
    assert_eq!(rig.hw.beams(), Some(BeamOutputs::low_only()));
    rig.hw.high_beam = true;
    rig.tick();
    assert_eq!(rig.hw.beams(), Some(BeamOutputs::all_on()));
    rig.hw.high_beam = false;

    // Switch to Auto in broad daylight: lights go off after two waits.
    rig.take_waits();
    rig.hw.dial = 0.5;
    rig.hw.script_light(&[0.9, 0.9, 0.9]);
    rig.tick();
    assert_eq!(rig.take_waits(), vec![1000, 1000]);
    assert_eq!(rig.hw.beams(), Some(BeamOutputs::all_off()));

    // Dusk: one wait, lights on.
    rig.hw.script_light(&[0.25, 0.25]);
    rig.tick();
    assert_eq!(rig.take_waits(), vec![1000]);
    assert_eq!(rig.app.state().headlight, HeadlightMode::On);
    assert_eq!(rig.hw.beams(), Some(BeamOutputs::low_only()));

    // Park: engine off, lights off, ignition back on while seated.
    rig.hw.button = true;
    rig.tick();
    rig.hw.button = false;
    assert_eq!(rig.hw.engine_led(), Some(false));
    assert_eq!(rig.hw.beams(), Some(BeamOutputs::all_off()));
    rig.tick();
    assert_eq!(rig.hw.ignition_led(), Some(true));

    // Get out.
    rig.hw.seat = false;
    rig.tick();
    assert_eq!(rig.hw.ignition_led(), Some(false));
    assert!(rig.take_notices().is_empty());

    let modes: Vec<_> = rig
        .events
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::HeadlightModeChanged { to, .. } => Some(*to),
            _ => None,
        })
        .collect();
    assert_eq!(
        modes,
        vec![
            HeadlightMode::On,
            HeadlightMode::Off,
            HeadlightMode::On,
            HeadlightMode::Off,
        ]
    );
}

#[test]
fn session_transcript_on_the_wire() {
    let mut rig = Rig::new();
    let mut serial = serial_buffer();

    let mut step = |rig: &mut Rig, seat: bool, button: bool| {
        rig.hw.seat = seat;
        rig.hw.button = button;
        rig.app
            .tick(&mut rig.hw, &mut rig.delay, &mut serial, &mut rig.events);
    };

    step(&mut rig, false, true);
    step(&mut rig, true, false);
    step(&mut rig, true, true);
    step(&mut rig, true, false);

    let text = String::from_utf8(serial.into_inner()).unwrap();
    assert_eq!(
        text,
        "Ignition inhibited\r\n\
         Driver seat not occupied.\r\n\
         Welcome to BMW, the ultimate driving machine.\r\n\
         Engine started.\r\n"
    );
}

#[test]
fn stuck_button_keeps_toggling() {
    let mut rig = Rig::new();
    rig.hw.seat = true;
    rig.tick();
    rig.hw.button = true;

    let mut engine_leds = Vec::new();
    for _ in 0..6 {
        rig.tick();
        engine_leds.push(rig.hw.engine_led() == Some(true));
    }
    assert_eq!(engine_leds, vec![true, false, true, false, true, false]);
}

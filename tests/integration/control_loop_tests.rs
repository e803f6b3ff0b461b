//! Integration tests: VehicleControlLoop → welcome / ignition / engine steps.

use vehicle_control::app::events::AppEvent;
use vehicle_control::fsm::{EngineState, Notice};

use super::mock_hw::{OutputCall, Rig};

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_drives_indicators_off() {
    let rig = Rig::new();
    assert_eq!(
        rig.hw.calls,
        vec![OutputCall::IgnitionLed(false), OutputCall::EngineLed(false)]
    );
    assert_eq!(rig.events.events, vec![AppEvent::Started]);
}

#[test]
fn idle_iteration_touches_no_analog_input() {
    let mut rig = Rig::new();
    rig.ticks(3);
    assert_eq!(rig.hw.dial_reads, 0);
    assert_eq!(rig.hw.light_reads, 0);
    assert!(rig.delay.waits_ms.is_empty());
    assert!(rig.notices.notices.is_empty());
}

// ── Welcome + ignition ────────────────────────────────────────

#[test]
fn seat_occupied_welcomes_once_and_lights_ignition() {
    let mut rig = Rig::new();
    rig.hw.seat = true;
    rig.ticks(5);

    assert_eq!(rig.take_notices(), vec![Notice::Welcome]);
    assert_eq!(rig.hw.ignition_led(), Some(true));
    assert_eq!(rig.hw.engine_led(), Some(false));
    assert!(rig.app.status().welcome_sent);
}

#[test]
fn leaving_seat_rearms_welcome_and_drops_ignition() {
    let mut rig = Rig::new();
    rig.hw.seat = true;
    rig.tick();
    assert_eq!(rig.take_notices(), vec![Notice::Welcome]);

    rig.hw.seat = false;
    rig.tick();
    assert_eq!(rig.hw.ignition_led(), Some(false));
    assert!(!rig.app.status().welcome_sent);
    assert!(rig.take_notices().is_empty());

    rig.hw.seat = true;
    rig.tick();
    assert_eq!(rig.take_notices(), vec![Notice::Welcome]);
    assert_eq!(rig.hw.ignition_led(), Some(true));
}

#[test]
fn ignition_events_follow_seat() {
    let mut rig = Rig::new();
    rig.hw.seat = true;
    rig.tick();
    rig.hw.seat = false;
    rig.tick();

    let ignition: Vec<_> = rig
        .events
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::IgnitionChanged { .. }))
        .cloned()
        .collect();
    assert_eq!(
        ignition,
        vec![
            AppEvent::IgnitionChanged { on: true },
            AppEvent::IgnitionChanged { on: false },
        ]
    );
}

// ── Engine start ──────────────────────────────────────────────

#[test]
fn engine_starts_with_seat_ignition_and_button() {
    let mut rig = Rig::new();
    rig.hw.seat = true;
    rig.tick();
    rig.take_notices();

    rig.hw.button = true;
    rig.tick();

    assert_eq!(rig.app.state().engine, EngineState::Running);
    assert!(!rig.app.state().ignition_on);
    assert_eq!(rig.take_notices(), vec![Notice::EngineStarted]);
    assert_eq!(rig.hw.ignition_led(), Some(false));
    assert_eq!(rig.hw.engine_led(), Some(true));
    assert!(rig.events.events.contains(&AppEvent::EngineChanged {
        from: EngineState::Stopped,
        to: EngineState::Running,
    }));
}

#[test]
fn seat_and_button_in_same_first_iteration_starts_engine() {
    // Ignition is computed before the engine step in the same iteration.
    let mut rig = Rig::new();
    rig.hw.seat = true;
    rig.hw.button = true;
    rig.tick();

    assert!(rig.app.state().engine_running());
    assert_eq!(
        rig.take_notices(),
        vec![Notice::Welcome, Notice::EngineStarted]
    );
}

#[test]
fn no_start_without_button() {
    let mut rig = Rig::new();
    rig.hw.seat = true;
    rig.ticks(10);
    assert!(!rig.app.state().engine_running());
}

#[test]
fn button_without_seat_is_inhibited_every_iteration() {
    let mut rig = Rig::new();
    rig.hw.button = true;
    rig.ticks(3);

    assert!(!rig.app.state().engine_running());
    assert_eq!(
        rig.take_notices(),
        vec![
            Notice::IgnitionInhibited,
            Notice::SeatNotOccupied,
            Notice::IgnitionInhibited,
            Notice::SeatNotOccupied,
            Notice::IgnitionInhibited,
            Notice::SeatNotOccupied,
        ]
    );
}

#[test]
fn inhibited_notices_reach_the_wire_in_order() {
    let mut rig = Rig::new();
    let mut serial = super::mock_hw::serial_buffer();
    rig.hw.button = true;
    rig.app
        .tick(&mut rig.hw, &mut rig.delay, &mut serial, &mut rig.events);

    assert_eq!(
        serial.into_inner(),
        b"Ignition inhibited\r\nDriver seat not occupied.\r\n".to_vec()
    );
}

// ── Engine stop + level-triggered button ──────────────────────

#[test]
fn pressing_again_stops_engine_without_notice() {
    let mut rig = Rig::new();
    rig.start_engine();
    rig.tick();
    rig.take_notices();

    rig.hw.button = true;
    rig.tick();

    assert_eq!(rig.app.state().engine, EngineState::Stopped);
    assert!(rig.take_notices().is_empty());
    assert_eq!(rig.hw.engine_led(), Some(false));
    // Ignition stays off for the rest of the stopping iteration.
    assert_eq!(rig.hw.ignition_led(), Some(false));
}

#[test]
fn held_button_toggles_engine_every_iteration() {
    let mut rig = Rig::new();
    rig.hw.seat = true;
    rig.hw.button = true;

    let mut running = Vec::new();
    for _ in 0..4 {
        rig.tick();
        running.push(rig.app.state().engine_running());
    }
    assert_eq!(running, vec![true, false, true, false]);
    assert_eq!(
        rig.take_notices(),
        vec![Notice::Welcome, Notice::EngineStarted, Notice::EngineStarted]
    );
}

#[test]
fn no_welcome_after_engine_stops_while_still_seated() {
    let mut rig = Rig::new();
    rig.start_engine();
    rig.take_notices();

    rig.hw.button = true;
    rig.tick();
    rig.hw.button = false;
    rig.ticks(2);

    // Guard still set from the session's first welcome.
    assert!(rig.take_notices().is_empty());
    assert_eq!(rig.hw.ignition_led(), Some(true));
}

#[test]
fn leaving_seat_with_engine_running_keeps_engine_running() {
    let mut rig = Rig::new();
    rig.start_engine();
    rig.hw.seat = false;
    rig.ticks(2);

    assert!(rig.app.state().engine_running());
    assert!(!rig.app.state().ignition_on);
    assert!(!rig.app.status().welcome_sent);
}

// ── Telemetry ─────────────────────────────────────────────────

#[test]
fn telemetry_emitted_on_interval() {
    let mut rig = Rig::new();
    let every = rig.app.config().telemetry_interval_ticks as usize;

    rig.ticks(every - 1);
    assert!(!rig.app.emit_telemetry_if_due(&mut rig.events));
    rig.tick();
    assert!(rig.app.emit_telemetry_if_due(&mut rig.events));

    match rig.events.events.last() {
        Some(AppEvent::Telemetry(status)) => {
            assert_eq!(status.iteration, every as u64);
            assert_eq!(status.engine, EngineState::Stopped);
        }
        other => panic!("expected telemetry, got {:?}", other),
    }
}

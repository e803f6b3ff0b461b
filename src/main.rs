//! Vehicle controller firmware entry point.
//!
//! Hexagonal architecture with a single cyclic polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter    SerialNotifier     LogEventSink  SystemDelay│
//! │  (Input+Output)     (NotificationSink) (EventSink)   (DelayNs)  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │           VehicleControlLoop (pure logic)              │    │
//! │  │  welcome · ignition · engine · headlight mode/output   │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use embedded_hal::delay::DelayNs;
use log::{error, info, warn};

use vehicle_control::adapters::console::SerialNotifier;
use vehicle_control::adapters::hardware::{HardwareAdapter, VehiclePins};
use vehicle_control::adapters::log_sink::LogEventSink;
use vehicle_control::adapters::time::SystemDelay;
use vehicle_control::app::service::VehicleControlLoop;
use vehicle_control::config::ControlConfig;
use vehicle_control::drivers::adc::AdcChannel;
use vehicle_control::drivers::gpio::{GpioInput, GpioOutput};
use vehicle_control::drivers::hw_init;
use vehicle_control::pins;

/// Pause between iterations so the idle task can feed the task watchdog.
const LOOP_YIELD_MS: u32 = 10;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Vehicle controller v{}          ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Peripherals (pull-down inputs, outputs LOW, ADC1) ──
    if let Err(e) = hw_init::init_peripherals() {
        error!("HAL init failed: {}, halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Configuration ──────────────────────────────────────
    let config = ControlConfig::default().validated_or_default();
    match serde_json::to_string(&config) {
        Ok(json) => info!("Config: {}", json),
        Err(e) => warn!("Config dump failed: {}", e),
    }

    // ── 4. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(VehiclePins {
        seat_sensor: GpioInput::new(pins::SEAT_SENSOR_GPIO),
        ignition_button: GpioInput::new(pins::IGNITION_BUTTON_GPIO),
        high_beam_switch: GpioInput::new(pins::HIGH_BEAM_SWITCH_GPIO),
        light_sensor: AdcChannel::new(pins::LIGHT_SENSOR_ADC_CH),
        mode_dial: AdcChannel::new(pins::MODE_DIAL_ADC_CH),
        ignition_led: GpioOutput::new(pins::IGNITION_LED_GPIO),
        engine_led: GpioOutput::new(pins::ENGINE_LED_GPIO),
        left_low_beam: GpioOutput::new(pins::LEFT_LOW_BEAM_GPIO),
        right_low_beam: GpioOutput::new(pins::RIGHT_LOW_BEAM_GPIO),
        left_high_beam: GpioOutput::new(pins::LEFT_HIGH_BEAM_GPIO),
        right_high_beam: GpioOutput::new(pins::RIGHT_HIGH_BEAM_GPIO),
    });
    let mut delay = SystemDelay::new();
    let mut notices = SerialNotifier::new(std::io::stdout());
    let mut log_sink = LogEventSink::new();

    // ── 5. Control loop ───────────────────────────────────────
    let mut app = VehicleControlLoop::new(config);
    app.start(&mut hw, &mut log_sink);

    info!("System ready. Entering control loop.");

    loop {
        app.tick(&mut hw, &mut delay, &mut notices, &mut log_sink);
        app.emit_telemetry_if_due(&mut log_sink);
        delay.delay_ms(LOOP_YIELD_MS);
    }
}

//! GPIO / peripheral pin assignments for the vehicle controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Digital inputs (pull-down, active HIGH)
// ---------------------------------------------------------------------------

/// Driver seat occupancy switch.
pub const SEAT_SENSOR_GPIO: i32 = 4;
/// Momentary ignition push-button.
pub const IGNITION_BUTTON_GPIO: i32 = 5;
/// High-beam stalk switch.
pub const HIGH_BEAM_SWITCH_GPIO: i32 = 6;

pub const DIGITAL_INPUT_GPIOS: [i32; 3] = [
    SEAT_SENSOR_GPIO,
    IGNITION_BUTTON_GPIO,
    HIGH_BEAM_SWITCH_GPIO,
];

// ---------------------------------------------------------------------------
// Digital outputs (active HIGH, driven LOW at boot)
// ---------------------------------------------------------------------------

pub const IGNITION_LED_GPIO: i32 = 10;
pub const ENGINE_LED_GPIO: i32 = 11;

pub const LEFT_LOW_BEAM_GPIO: i32 = 12;
pub const LEFT_HIGH_BEAM_GPIO: i32 = 13;
pub const RIGHT_LOW_BEAM_GPIO: i32 = 14;
pub const RIGHT_HIGH_BEAM_GPIO: i32 = 15;

pub const DIGITAL_OUTPUT_GPIOS: [i32; 6] = [
    IGNITION_LED_GPIO,
    ENGINE_LED_GPIO,
    LEFT_LOW_BEAM_GPIO,
    LEFT_HIGH_BEAM_GPIO,
    RIGHT_LOW_BEAM_GPIO,
    RIGHT_HIGH_BEAM_GPIO,
];

// ---------------------------------------------------------------------------
// Analog inputs (ADC1, oneshot)
// ---------------------------------------------------------------------------

/// LDR light sensor divider, ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const LIGHT_SENSOR_ADC_CH: u32 = 0;
/// Headlight mode potentiometer, ADC1 channel 1 (GPIO 2 on ESP32-S3).
pub const MODE_DIAL_ADC_CH: u32 = 1;

/// Full-scale raw value at 12-bit resolution.
pub const ADC_FULL_SCALE: u16 = 4095;

//! Sensor interpretation: analog normalisation, dial bands, and the
//! Auto-mode ambient light confirmation.
//!
//! Raw acquisition lives in [`crate::drivers`]; this module only turns
//! readings into decisions.

pub mod dial;
pub mod light;

/// A normalised analog input, full scale mapped to `[0.0, 1.0]`.
///
/// Implemented by the ADC driver on target and by test doubles on host.
pub trait AnalogInput {
    fn read(&mut self) -> f32;
}

/// Clamp a reading into `[0.0, 1.0]`.  NaN reads as `0.0`.
///
/// Out-of-range values are silently corrected, never reported.
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

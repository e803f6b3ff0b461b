//! Headlight mode dial (potentiometer) band classification.
//!
//! ```text
//!   0.0 ────── off_level ────── auto_level ────── on_level
//!   │     Off      ]│     Auto       ]│      On       ]
//! ```
//!
//! Upper edges are inclusive.

use crate::config::ControlConfig;

use super::clamp_unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialBand {
    Off,
    Auto,
    On,
}

/// Classify a dial reading.  The reading is clamped to `[0, 1]` first; a
/// value above `on_level` (only possible with a reduced on-level) saturates
/// to `On`.
pub fn classify(reading: f32, config: &ControlConfig) -> DialBand {
    let p = clamp_unit(reading);
    if p <= config.headlight_off_level {
        DialBand::Off
    } else if p <= config.headlight_auto_level {
        DialBand::Auto
    } else {
        DialBand::On
    }
}

//! Ambient light confirmation for Auto headlight mode.
//!
//! Dusk/dawn detection with a deliberately asymmetric debounce:
//!
//! ```text
//!   A ── wait ── B ──┬─ |A-B| >= tol ──────────────────────────▶ Unstable
//!                    ├─ B <= divide (dim) ──────────────────────▶ Dim
//!                    └─ B >  divide (bright) ── wait ── C ──┬─ |C-B| < tol ─▶ Bright
//!                                                           └─ otherwise ───▶ BrightUnconfirmed
//! ```
//!
//! The waits block the caller.  Nothing else in the control loop runs and
//! no other input is sampled until the verdict is returned.

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::app::ports::InputPort;
use crate::config::ControlConfig;

use super::clamp_unit;

/// Outcome of one confirmation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightVerdict {
    /// First pair disagreed; no decision.
    Unstable,
    /// Stable and at or below the divide: lights on.
    Dim,
    /// Stable, above the divide, and the third reading agreed: lights off.
    Bright,
    /// Stable and above the divide, but the third reading disagreed.
    BrightUnconfirmed,
}

impl LightVerdict {
    /// `Some(true)` = lights on, `Some(false)` = lights off, `None` = no decision.
    pub fn lit(self) -> Option<bool> {
        match self {
            Self::Dim => Some(true),
            Self::Bright => Some(false),
            Self::Unstable | Self::BrightUnconfirmed => None,
        }
    }
}

fn agrees(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() < tolerance
}

/// Run the confirmation protocol against the light sensor.
pub fn confirm_ambient_light<I, D>(inputs: &mut I, delay: &mut D, config: &ControlConfig) -> LightVerdict
where
    I: InputPort + ?Sized,
    D: DelayNs + ?Sized,
{
    let first = clamp_unit(inputs.light_level());
    delay.delay_ms(config.first_confirm_delay_ms);
    let second = clamp_unit(inputs.light_level());
    debug!("auto: light A={:.3} B={:.3}", first, second);

    if !agrees(first, second, config.stability_tolerance) {
        return LightVerdict::Unstable;
    }
    if second <= config.dawn_dusk_divide {
        return LightVerdict::Dim;
    }

    delay.delay_ms(config.second_confirm_delay_ms);
    let third = clamp_unit(inputs.light_level());
    debug!("auto: light C={:.3} (against B={:.3})", third, second);

    if agrees(third, second, config.stability_tolerance) {
        LightVerdict::Bright
    } else {
        LightVerdict::BrightUnconfirmed
    }
}

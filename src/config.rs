//! Control parameters
//!
//! The dial bands, the dawn/dusk divide, and the two Auto-mode confirmation
//! delays are fixed by the vehicle calibration and exposed as named constants.
//! [`ControlConfig`] bundles them so the control loop and tests can be built
//! against a single value.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dial reading at or below which the headlights are commanded off.
pub const HEADLIGHT_OFF_LEVEL: f32 = 0.33;
/// Upper edge (inclusive) of the Auto band.
pub const HEADLIGHT_AUTO_LEVEL: f32 = 0.66;
/// Upper edge (inclusive) of the On band; full scale of the dial.
pub const HEADLIGHT_ON_LEVEL: f32 = 1.00;
/// Light level above which the surroundings count as bright.
pub const LDR_DAWN_DUSK_DIVIDE: f32 = 0.5;
/// Two light readings closer than this are considered stable.
pub const LIGHT_STABILITY_TOLERANCE: f32 = 0.05;
/// Wait between the first and second light reading (milliseconds).
pub const FIRST_CONFIRM_DELAY_MS: u32 = 1000;
/// Wait before the third reading on the bright path (milliseconds).
pub const SECOND_CONFIRM_DELAY_MS: u32 = 1000;

/// Core control configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlConfig {
    // --- Headlight dial bands ---
    pub headlight_off_level: f32,
    pub headlight_auto_level: f32,
    pub headlight_on_level: f32,

    // --- Auto mode ---
    /// Dawn/dusk divide on the normalised light sensor
    pub dawn_dusk_divide: f32,
    /// Maximum difference between two readings for them to agree
    pub stability_tolerance: f32,
    pub first_confirm_delay_ms: u32,
    pub second_confirm_delay_ms: u32,

    // --- Reporting ---
    /// Loop iterations between telemetry snapshots (0 disables)
    pub telemetry_interval_ticks: u32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            headlight_off_level: HEADLIGHT_OFF_LEVEL,
            headlight_auto_level: HEADLIGHT_AUTO_LEVEL,
            headlight_on_level: HEADLIGHT_ON_LEVEL,

            dawn_dusk_divide: LDR_DAWN_DUSK_DIVIDE,
            stability_tolerance: LIGHT_STABILITY_TOLERANCE,
            first_confirm_delay_ms: FIRST_CONFIRM_DELAY_MS,
            second_confirm_delay_ms: SECOND_CONFIRM_DELAY_MS,

            telemetry_interval_ticks: 100,
        }
    }
}

impl ControlConfig {
    /// Reject parameter sets that would break the band partition or the
    /// light confirmation.  Values are never clamped here.
    #[allow(clippy::neg_cmp_op_on_partial_ord)] // NaN must fail the checks
    pub fn validate(&self) -> Result<()> {
        let unit = 0.0..=1.0;
        if !unit.contains(&self.headlight_off_level)
            || !unit.contains(&self.headlight_auto_level)
            || !unit.contains(&self.headlight_on_level)
        {
            return Err(Error::Config("dial levels must lie within [0, 1]"));
        }
        if !(self.headlight_off_level < self.headlight_auto_level
            && self.headlight_auto_level < self.headlight_on_level)
        {
            return Err(Error::Config("dial levels must be strictly increasing"));
        }
        if !unit.contains(&self.dawn_dusk_divide) {
            return Err(Error::Config("dawn/dusk divide must lie within [0, 1]"));
        }
        if !(self.stability_tolerance > 0.0) {
            return Err(Error::Config("stability tolerance must be positive"));
        }
        Ok(())
    }

    /// Return `self` if it validates, otherwise the defaults.
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("{}; falling back to default config", e);
                Self::default()
            }
        }
    }
}

//! ADC1 oneshot channel as a normalised [`AnalogInput`].
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the oneshot channel initialised by hw_init.
//! On host/test: reads the simulated channel set via `hw_init::sim_set_adc`.

use crate::pins::ADC_FULL_SCALE;
use crate::sensors::{AnalogInput, clamp_unit};

use super::hw_init;

pub struct AdcChannel {
    channel: u32,
}

impl AdcChannel {
    pub fn new(channel: u32) -> Self {
        Self { channel }
    }

    pub fn read_raw(&self) -> u16 {
        hw_init::adc1_read(self.channel)
    }
}

impl AnalogInput for AdcChannel {
    /// Raw counts over full scale; anything above full scale reads as 1.0.
    fn read(&mut self) -> f32 {
        clamp_unit(f32::from(self.read_raw()) / f32::from(ADC_FULL_SCALE))
    }
}

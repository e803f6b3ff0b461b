//! Pin and ADC drivers, plus one-shot hardware initialisation.

pub mod adc;
pub mod gpio;
pub mod hw_init;

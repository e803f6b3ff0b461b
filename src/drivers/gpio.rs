//! Digital pin drivers exposing the `embedded-hal` 1.0 digital traits.
//!
//! Both wrap a GPIO number already configured by
//! [`hw_init::init_peripherals`](super::hw_init::init_peripherals).  Pin
//! access cannot fail once configured, so the error type is `Infallible`.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use super::hw_init;

/// Input pin with pull-down: HIGH = asserted.
pub struct GpioInput {
    gpio: i32,
}

impl GpioInput {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }
}

impl ErrorType for GpioInput {
    type Error = Infallible;
}

impl InputPin for GpioInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(hw_init::gpio_read(self.gpio))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!hw_init::gpio_read(self.gpio))
    }
}

/// Push-pull output pin.  Remembers the last commanded level.
pub struct GpioOutput {
    gpio: i32,
    level: bool,
}

impl GpioOutput {
    /// Wraps the pin; `hw_init` has already driven it LOW.
    pub fn new(gpio: i32) -> Self {
        Self { gpio, level: false }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    fn write(&mut self, high: bool) {
        hw_init::gpio_write(self.gpio, high);
        self.level = high;
    }
}

impl ErrorType for GpioOutput {
    type Error = Infallible;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}

impl StatefulOutputPin for GpioOutput {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level)
    }
}

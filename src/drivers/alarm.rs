//! Aggregate alarm LED driver (single red LED).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives one GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct AlarmLed {
    gpio: i32,
    active: bool,
}

impl AlarmLed {
    pub fn new(gpio: i32) -> Self {
        let mut led = Self {
            gpio,
            active: false,
        };
        led.apply();
        led
    }

    pub fn set(&mut self, active: bool) {
        self.active = active;
        self.apply();
    }

    pub fn is_on(&self) -> bool {
        self.active
    }

    fn apply(&mut self) {
        hw_init::gpio_write(self.gpio, self.active);
    }
}

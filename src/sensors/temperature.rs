//! TMP36 water temperature sensor.
//!
//! The TMP36 runs from the 5 V rail and outputs 10 mV/°C with a 500 mV
//! offset, read through the 10-bit ADC front end:
//!
//! ```text
//! celsius = (raw * 5.0 / 1023.0 - 0.5) * 100
//! ```
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH2 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static AtomicU16 for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_ADC: AtomicU16 = AtomicU16::new(153);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temp_adc(raw: u16) {
    SIM_TEMP_ADC.store(raw, Ordering::Relaxed);
}

const ADC_MAX: f32 = 1023.0;
const V_REF: f32 = 5.0;
const OFFSET_V: f32 = 0.5;
const DEG_PER_VOLT: f32 = 100.0;

/// Convert a raw ADC count to degrees Celsius via the TMP36 transfer
/// function. No clamping; implausible counts yield implausible temperatures
/// that simply fail the ideal-band check downstream.
pub fn raw_to_celsius(raw: u16) -> f32 {
    let voltage = f32::from(raw) * V_REF / ADC_MAX;
    (voltage - OFFSET_V) * DEG_PER_VOLT
}

#[derive(Debug, Clone, Copy)]
pub struct TemperatureReading {
    pub raw: u16,
    pub celsius: f32,
}

pub struct TemperatureSensor {
    _adc_channel: u32,
}

impl TemperatureSensor {
    pub fn new(adc_channel: u32) -> Self {
        Self {
            _adc_channel: adc_channel,
        }
    }

    pub fn read(&self) -> TemperatureReading {
        let raw = self.read_adc();
        TemperatureReading {
            raw,
            celsius: raw_to_celsius(raw),
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(pins::TEMP_ADC_CH)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_TEMP_ADC.load(Ordering::Relaxed)
    }
}

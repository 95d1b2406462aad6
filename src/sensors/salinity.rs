//! Salinity sensor driver (conductivity probe, 0 – 100 ppt full scale).
//!
//! The conditioning board maps 0 – 100 ppt linearly onto the ADC input
//! range; conversion mirrors the pH driver with a different full scale.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static AtomicU16 for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(not(target_os = "espidf"))]
static SIM_SALINITY_ADC: AtomicU16 = AtomicU16::new(348);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_salinity_adc(raw: u16) {
    SIM_SALINITY_ADC.store(raw, Ordering::Relaxed);
}

const ADC_MAX: f32 = 1023.0;
const PPT_FULL_SCALE: f32 = 100.0;

/// Convert a raw ADC count to parts-per-thousand salinity.
///
/// Pure linear map [0, 1023] → [0, 100]; extrapolates past the nominal
/// range without clamping.
pub fn raw_to_ppt(raw: u16) -> f32 {
    f32::from(raw) * PPT_FULL_SCALE / ADC_MAX
}

#[derive(Debug, Clone, Copy)]
pub struct SalinityReading {
    pub raw: u16,
    pub ppt: f32,
}

pub struct SalinitySensor {
    _adc_channel: u32,
}

impl SalinitySensor {
    pub fn new(adc_channel: u32) -> Self {
        Self {
            _adc_channel: adc_channel,
        }
    }

    pub fn read(&self) -> SalinityReading {
        let raw = self.read_adc();
        SalinityReading {
            raw,
            ppt: raw_to_ppt(raw),
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(pins::SALINITY_ADC_CH)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_SALINITY_ADC.load(Ordering::Relaxed)
    }
}

//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns every sensor driver and produces a [`WaterSnapshot`] each
//! cycle that feeds the classifier and the serial report.

pub mod ph;
pub mod salinity;
pub mod temperature;

use crate::water::WaterSnapshot;
use ph::PhSensor;
use salinity::SalinitySensor;
use temperature::TemperatureSensor;

/// Aggregates all sensor drivers and produces a unified snapshot.
pub struct SensorHub {
    pub ph: PhSensor,
    pub salinity: SalinitySensor,
    pub temperature: TemperatureSensor,
}

impl SensorHub {
    /// Construct a new hub.  Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(ph: PhSensor, salinity: SalinitySensor, temperature: TemperatureSensor) -> Self {
        Self {
            ph,
            salinity,
            temperature,
        }
    }

    /// Read every sensor and return a unified snapshot.
    ///
    /// Reads are assumed to succeed; a disconnected probe shows up as an
    /// out-of-band engineering value, not as an error.
    pub fn read_all(&mut self) -> WaterSnapshot {
        let ph = self.ph.read();
        let temperature = self.temperature.read();
        let salinity = self.salinity.read();

        WaterSnapshot {
            ph_raw: ph.raw,
            ph: ph.ph,
            temperature_raw: temperature.raw,
            temperature_c: temperature.celsius,
            salinity_raw: salinity.raw,
            salinity_ppt: salinity.ppt,
        }
    }
}

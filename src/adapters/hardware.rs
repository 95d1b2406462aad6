//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`] and the indicator drivers, exposing them through
//! [`SensorPort`] and [`IndicatorPort`].  This is the only module in the
//! system that touches actual hardware.  On non-espidf targets, the
//! underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{IndicatorPort, SensorPort};
use crate::drivers::alarm::AlarmLed;
use crate::drivers::indicator::StatusPair;
use crate::sensors::SensorHub;
use crate::water::{Metric, WaterSnapshot};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensor_hub: SensorHub,
    ph_pair: StatusPair,
    temperature_pair: StatusPair,
    salinity_pair: StatusPair,
    alarm: AlarmLed,
}

impl HardwareAdapter {
    pub fn new(
        sensor_hub: SensorHub,
        ph_pair: StatusPair,
        temperature_pair: StatusPair,
        salinity_pair: StatusPair,
        alarm: AlarmLed,
    ) -> Self {
        Self {
            sensor_hub,
            ph_pair,
            temperature_pair,
            salinity_pair,
            alarm,
        }
    }

    fn pair_mut(&mut self, metric: Metric) -> &mut StatusPair {
        match metric {
            Metric::Ph => &mut self.ph_pair,
            Metric::Temperature => &mut self.temperature_pair,
            Metric::Salinity => &mut self.salinity_pair,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_all(&mut self) -> WaterSnapshot {
        self.sensor_hub.read_all()
    }
}

// ── IndicatorPort implementation ──────────────────────────────

impl IndicatorPort for HardwareAdapter {
    fn set_status(&mut self, metric: Metric, in_range: bool) {
        self.pair_mut(metric).set(in_range);
    }

    fn set_alarm(&mut self, active: bool) {
        self.alarm.set(active);
    }

    fn all_off(&mut self) {
        // A pair has no dark state; drop all three to Attention and kill
        // the alarm.
        for metric in Metric::ALL {
            self.pair_mut(metric).set(false);
        }
        self.alarm.set(false);
    }
}

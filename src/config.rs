//! System configuration parameters
//!
//! All tunable parameters for the ReefMon monitor. Bands and thresholds are
//! fixed at build time via [`Default`]; the struct stays serialisable so a
//! provisioning channel can be added without touching the domain core.

use serde::{Deserialize, Serialize};

use crate::water::{IdealBand, Metric, PhLabelBounds};

/// Core monitor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    // --- Ideal bands (closed intervals, both bounds inclusive) ---
    /// Lowest healthy pH.
    pub ph_ideal_low: f32,
    /// Highest healthy pH.
    pub ph_ideal_high: f32,
    /// Lowest healthy water temperature (Celsius).
    pub temperature_ideal_low_c: f32,
    /// Highest healthy water temperature (Celsius).
    pub temperature_ideal_high_c: f32,
    /// Lowest healthy salinity (ppt).
    pub salinity_ideal_low_ppt: f32,
    /// Highest healthy salinity (ppt).
    pub salinity_ideal_high_ppt: f32,

    // --- pH report labels ---
    // Reporting-only thresholds. They happen to equal the pH ideal band
    // today, but the label rule and the band rule are independent knobs.
    /// Report "Acidic" below this pH.
    pub ph_acidic_below: f32,
    /// Report "Alkaline" above this pH.
    pub ph_alkaline_above: f32,

    // --- Alarm ---
    /// Out-of-band metric count at which the aggregate alarm turns on.
    pub alarm_out_of_range_threshold: u8,

    // --- Timing ---
    /// Delay between sample cycles (milliseconds).
    pub sample_period_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            // Bands
            ph_ideal_low: 6.0,
            ph_ideal_high: 8.0,
            temperature_ideal_low_c: 21.0,
            temperature_ideal_high_c: 28.0,
            salinity_ideal_low_ppt: 31.0,
            salinity_ideal_high_ppt: 37.0,

            // pH labels
            ph_acidic_below: 6.0,
            ph_alkaline_above: 8.0,

            // Alarm
            alarm_out_of_range_threshold: 2,

            // Timing
            sample_period_ms: 2500,
        }
    }
}

impl MonitorConfig {
    /// The ideal band for a given metric.
    pub fn ideal_band(&self, metric: Metric) -> IdealBand {
        match metric {
            Metric::Ph => IdealBand::new(self.ph_ideal_low, self.ph_ideal_high),
            Metric::Temperature => {
                IdealBand::new(self.temperature_ideal_low_c, self.temperature_ideal_high_c)
            }
            Metric::Salinity => {
                IdealBand::new(self.salinity_ideal_low_ppt, self.salinity_ideal_high_ppt)
            }
        }
    }

    /// The qualitative pH label boundaries (reporting only).
    pub fn ph_labels(&self) -> PhLabelBounds {
        PhLabelBounds {
            acidic_below: self.ph_acidic_below,
            alkaline_above: self.ph_alkaline_above,
        }
    }
}

//! Water-quality domain core.
//!
//! Pure classification logic — no I/O, no hardware. Each cycle the
//! [`MonitorService`](crate::app::service::MonitorService) feeds the latest
//! [`WaterSnapshot`] through [`assess`] and gets back an [`Assessment`]:
//! one in-range flag per metric plus the aggregate alarm decision.
//!
//! Two distinct rules live here and must stay distinct:
//!
//! - the **ideal band** check (drives the green/yellow indicators), and
//! - the **pH label** rule (drives the "Acidic"/"Neutral"/"Alkaline" text
//!   in the report).
//!
//! Their pH constants are equal today; neither is derived from the other.

use crate::config::MonitorConfig;

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// The three monitored water-quality metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Ph,
    Temperature,
    Salinity,
}

impl Metric {
    /// All metrics, in report order.
    pub const ALL: [Metric; 3] = [Metric::Ph, Metric::Temperature, Metric::Salinity];

    /// Human-readable name used in log output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ph => "pH",
            Self::Temperature => "temperature",
            Self::Salinity => "salinity",
        }
    }
}

// ---------------------------------------------------------------------------
// Ideal band
// ---------------------------------------------------------------------------

/// A closed interval of healthy values for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealBand {
    pub low: f32,
    pub high: f32,
}

impl IdealBand {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Membership test. Both bounds are inclusive: a reading sitting exactly
    /// on a band edge counts as healthy.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.low && value <= self.high
    }
}

// ---------------------------------------------------------------------------
// pH qualitative label
// ---------------------------------------------------------------------------

/// Report-label thresholds for pH. Independent of the ideal band.
#[derive(Debug, Clone, Copy)]
pub struct PhLabelBounds {
    /// "Acidic" strictly below this value.
    pub acidic_below: f32,
    /// "Alkaline" strictly above this value.
    pub alkaline_above: f32,
}

/// Qualitative pH classification, used in the serial report only — the
/// indicator logic never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhClass {
    Acidic,
    Neutral,
    Alkaline,
}

impl PhClass {
    /// Classify a pH value against the label bounds.
    pub fn classify(ph: f32, bounds: &PhLabelBounds) -> Self {
        if ph < bounds.acidic_below {
            Self::Acidic
        } else if ph > bounds.alkaline_above {
            Self::Alkaline
        } else {
            Self::Neutral
        }
    }

    /// Label text as it appears in the report line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Acidic => "Acidic",
            Self::Neutral => "Neutral",
            Self::Alkaline => "Alkaline",
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of all three sensors: raw ADC counts plus the
/// derived engineering values. Built fresh every cycle, never persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaterSnapshot {
    /// Raw pH ADC count (0 – 1023 nominal).
    pub ph_raw: u16,
    /// pH value (0 – 14 nominal).
    pub ph: f32,

    /// Raw temperature ADC count.
    pub temperature_raw: u16,
    /// Water temperature (°C).
    pub temperature_c: f32,

    /// Raw salinity ADC count.
    pub salinity_raw: u16,
    /// Salinity (ppt, 0 – 100 nominal).
    pub salinity_ppt: f32,
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// The outcome of classifying one snapshot: per-metric in-range flags and
/// the aggregate alarm decision derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub ph_in_range: bool,
    pub temperature_in_range: bool,
    pub salinity_in_range: bool,
    /// Alarm LED state: out-of-band count reached the configured threshold.
    pub alarm_active: bool,
}

impl Assessment {
    /// In-range flag for a given metric.
    pub fn in_range(&self, metric: Metric) -> bool {
        match metric {
            Metric::Ph => self.ph_in_range,
            Metric::Temperature => self.temperature_in_range,
            Metric::Salinity => self.salinity_in_range,
        }
    }

    /// Number of metrics currently outside their ideal band (0 – 3).
    pub fn out_of_range_count(&self) -> u8 {
        Metric::ALL.iter().filter(|m| !self.in_range(**m)).count() as u8
    }
}

/// Classify a snapshot against the configured ideal bands.
///
/// Total and side-effect free: any float input (including values far outside
/// the nominal sensor range) yields a well-defined flag.
pub fn assess(snapshot: &WaterSnapshot, config: &MonitorConfig) -> Assessment {
    let ph_in_range = config.ideal_band(Metric::Ph).contains(snapshot.ph);
    let temperature_in_range = config
        .ideal_band(Metric::Temperature)
        .contains(snapshot.temperature_c);
    let salinity_in_range = config
        .ideal_band(Metric::Salinity)
        .contains(snapshot.salinity_ppt);

    let out_of_range = [ph_in_range, temperature_in_range, salinity_in_range]
        .iter()
        .filter(|ok| !**ok)
        .count() as u8;

    Assessment {
        ph_in_range,
        temperature_in_range,
        salinity_in_range,
        alarm_active: out_of_range >= config.alarm_out_of_range_threshold,
    }
}

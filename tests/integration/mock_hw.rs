//! Mock hardware adapter for integration tests.
//!
//! Records every indicator call so tests can assert on the full command
//! history without touching real GPIO registers, and serves a canned
//! [`WaterSnapshot`] built from raw ADC counts through the real
//! conversion functions.

use reefmon::app::events::MonitorEvent;
use reefmon::app::ports::{EventSink, IndicatorPort, SensorPort};
use reefmon::sensors::{ph, salinity, temperature};
use reefmon::water::{Metric, WaterSnapshot};

// ── Indicator call record ─────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorCall {
    SetStatus { metric: Metric, in_range: bool },
    SetAlarm { active: bool },
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub snapshot: WaterSnapshot,
    pub calls: Vec<IndicatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            snapshot: WaterSnapshot::default(),
            calls: Vec::new(),
        }
    }

    /// Build the snapshot the way the firmware would: raw 10-bit counts
    /// pushed through the per-sensor conversion functions.
    pub fn from_raw(ph_raw: u16, temp_raw: u16, salinity_raw: u16) -> Self {
        Self {
            snapshot: WaterSnapshot {
                ph_raw,
                ph: ph::raw_to_ph(ph_raw),
                temperature_raw: temp_raw,
                temperature_c: temperature::raw_to_celsius(temp_raw),
                salinity_raw,
                salinity_ppt: salinity::raw_to_ppt(salinity_raw),
            },
            calls: Vec::new(),
        }
    }

    /// Last commanded state for a metric's green/yellow pair.
    pub fn pair_green(&self, metric: Metric) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            IndicatorCall::SetStatus { metric: m, in_range } if *m == metric => Some(*in_range),
            IndicatorCall::AllOff => Some(false),
            _ => None,
        })
    }

    /// Last commanded alarm state.
    pub fn alarm_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                IndicatorCall::SetAlarm { active } => Some(*active),
                IndicatorCall::AllOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_all(&mut self) -> WaterSnapshot {
        self.snapshot
    }
}

impl IndicatorPort for MockHardware {
    fn set_status(&mut self, metric: Metric, in_range: bool) {
        self.calls.push(IndicatorCall::SetStatus { metric, in_range });
    }

    fn set_alarm(&mut self, active: bool) {
        self.calls.push(IndicatorCall::SetAlarm { active });
    }

    fn all_off(&mut self) {
        self.calls.push(IndicatorCall::AllOff);
    }
}

// ── Recording event sink ──────────────────────────────────────

pub struct LogSink {
    pub events: Vec<MonitorEvent>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn reports(&self) -> Vec<&reefmon::app::events::ReportData> {
        self.events
            .iter()
            .filter_map(|e| match e {
                MonitorEvent::Report(r) => Some(r),
                _ => None,
            })
            .collect()
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &MonitorEvent) {
        self.events.push(event.clone());
    }
}

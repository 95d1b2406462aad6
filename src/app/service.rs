//! Application service — the hexagonal core.
//!
//! [`MonitorService`] owns the configuration and runs the per-cycle
//! pipeline.  All I/O flows through port traits injected at call sites,
//! making the entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │     MonitorService      │
//! IndicatorPort ◀──│  sample · assess · drive │
//!                 └────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::MonitorConfig;
use crate::water::{self, Metric, PhClass};

use super::events::{MonitorEvent, ReportData};
use super::ports::{EventSink, IndicatorPort, SensorPort};

// ───────────────────────────────────────────────────────────────
// MonitorService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates one sample cycle at a time.
///
/// Every reading is recomputed from scratch each cycle; the only state kept
/// across cycles is the previous alarm level, used to emit raised/cleared
/// edge events. Indicator outputs never depend on it.
pub struct MonitorService {
    config: MonitorConfig,
    cycle_count: u64,
    alarm_active: bool,
}

impl MonitorService {
    /// Construct the service from configuration.
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            cycle_count: 0,
            alarm_active: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce startup. Call once before the first [`tick`](Self::tick).
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&MonitorEvent::Started);
        info!(
            "MonitorService started (period={}ms, alarm at {} out-of-range)",
            self.config.sample_period_ms, self.config.alarm_out_of_range_threshold
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full sample cycle: read sensors → classify → drive
    /// indicators → report.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`IndicatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(&mut self, hw: &mut (impl SensorPort + IndicatorPort), sink: &mut impl EventSink) {
        self.cycle_count += 1;

        // 1. Read sensors via SensorPort
        let snapshot = hw.read_all();

        // 2. Classify against the ideal bands
        let assessment = water::assess(&snapshot, &self.config);

        // 3. Drive the indicator LEDs via IndicatorPort
        for metric in Metric::ALL {
            hw.set_status(metric, assessment.in_range(metric));
        }
        hw.set_alarm(assessment.alarm_active);

        // 4. Alarm edge events
        let out_of_range = assessment.out_of_range_count();
        if assessment.alarm_active && !self.alarm_active {
            warn!("Alarm raised: {out_of_range} metrics out of range");
            sink.emit(&MonitorEvent::AlarmRaised { out_of_range });
        } else if !assessment.alarm_active && self.alarm_active {
            info!("Alarm cleared");
            sink.emit(&MonitorEvent::AlarmCleared);
        }
        self.alarm_active = assessment.alarm_active;

        // 5. Per-cycle status report
        sink.emit(&MonitorEvent::Report(ReportData {
            ph: snapshot.ph,
            ph_class: PhClass::classify(snapshot.ph, &self.config.ph_labels()),
            temperature_c: snapshot.temperature_c,
            salinity_ppt: snapshot.salinity_ppt,
            out_of_range,
            alarm: assessment.alarm_active,
        }));
    }

    // ── Queries ───────────────────────────────────────────────

    /// Total sample cycles executed since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Whether the aggregate alarm was active after the last cycle.
    pub fn alarm_active(&self) -> bool {
        self.alarm_active
    }

    /// Clone of the live configuration.
    pub fn current_config(&self) -> MonitorConfig {
        self.config.clone()
    }
}

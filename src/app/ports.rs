//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (sensors, indicators, event sinks) implement these traits.
//! The [`MonitorService`](super::service::MonitorService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::water::{Metric, WaterSnapshot};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain sensor data.
pub trait SensorPort {
    /// Read every sensor and return a unified snapshot.
    fn read_all(&mut self) -> WaterSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the indicator LEDs.
pub trait IndicatorPort {
    /// Drive a metric's green/yellow pair: green iff `in_range`.
    fn set_status(&mut self, metric: Metric, in_range: bool);

    /// Drive the aggregate alarm LED.
    fn set_alarm(&mut self, active: bool);

    /// Drop every pair to its attention state and clear the alarm
    /// (shutdown / test teardown). Pairs have no dark state.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`MonitorEvent`](super::events::MonitorEvent)s
/// through this port.  Adapters decide where they go (serial log today; an
/// MQTT or BLE characteristic would implement the same trait).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::MonitorEvent);
}

//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing monitor events to the logger (which
//! goes to UART / USB-CDC in production).  Each [`ReportData`] becomes the
//! one-line status report followed by a separator line; the line itself is
//! assembled in a fixed-capacity buffer so reporting never allocates.

use core::fmt::Write as _;

use log::{info, warn};

use crate::app::events::{MonitorEvent, ReportData};
use crate::app::ports::EventSink;

/// Adapter that logs every [`MonitorEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

/// Render the per-cycle status line: pH with its qualitative label, then
/// temperature, then salinity with the ppt suffix.
pub fn format_report(report: &ReportData) -> heapless::String<96> {
    let mut line = heapless::String::new();
    // 96 bytes holds the worst-case field widths; write! cannot fail short of that.
    let _ = write!(
        line,
        "pH: {:.2} ({}) | Temperature: {:.2}C | Salinity: {:.2} ppt",
        report.ph,
        report.ph_class.label(),
        report.temperature_c,
        report.salinity_ppt,
    );
    line
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &MonitorEvent) {
        match event {
            MonitorEvent::Report(report) => {
                info!("{}", format_report(report));
                info!("---");
            }
            MonitorEvent::AlarmRaised { out_of_range } => {
                warn!("ALARM | raised, {out_of_range} metrics out of range");
            }
            MonitorEvent::AlarmCleared => {
                info!("ALARM | cleared");
            }
            MonitorEvent::Started => {
                info!("START | monitor running");
            }
        }
    }
}

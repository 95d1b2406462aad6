//! Integration tests for the MonitorService → classifier → indicator pipeline.
//!
//! These run on the host (x86_64) and verify that a full sample cycle from
//! raw ADC counts down to indicator commands and the serial report works
//! correctly without any real hardware.

use crate::mock_hw::{IndicatorCall, LogSink, MockHardware};

use reefmon::adapters::log_sink::format_report;
use reefmon::app::events::MonitorEvent;
use reefmon::app::service::MonitorService;
use reefmon::config::MonitorConfig;
use reefmon::water::{Metric, PhClass};

// Raw 10-bit counts for representative conditions.
const PH_NEUTRAL_RAW: u16 = 512; // ≈ 7.0 pH
const PH_ACIDIC_RAW: u16 = 365; // ≈ 5.0 pH
const TEMP_OK_RAW: u16 = 153; // ≈ 24.8 °C
const TEMP_COLD_RAW: u16 = 133; // ≈ 15.0 °C
const SALINITY_OK_RAW: u16 = 348; // ≈ 34.0 ppt
const SALINITY_LOW_RAW: u16 = 100; // ≈ 9.8 ppt

fn make_service() -> (MonitorService, LogSink) {
    let mut service = MonitorService::new(MonitorConfig::default());
    let mut sink = LogSink::new();
    service.start(&mut sink);
    (service, sink)
}

// ── Healthy tank: greens across the board, no alarm ──────────

#[test]
fn healthy_tank_all_green_no_alarm() {
    let (mut service, mut sink) = make_service();
    let mut hw = MockHardware::from_raw(PH_NEUTRAL_RAW, TEMP_OK_RAW, SALINITY_OK_RAW);

    service.tick(&mut hw, &mut sink);

    for metric in Metric::ALL {
        assert_eq!(
            hw.pair_green(metric),
            Some(true),
            "{} pair should be green",
            metric.name()
        );
    }
    assert!(!hw.alarm_on());

    let reports = sink.reports();
    assert_eq!(reports.len(), 1);
    let report = reports[0];
    assert_eq!(report.ph_class, PhClass::Neutral);
    assert_eq!(report.out_of_range, 0);
    assert!(!report.alarm);
}

// ── One metric out: yellow for it alone, still no alarm ──────

#[test]
fn acidic_ph_alone_goes_yellow_without_alarm() {
    let (mut service, mut sink) = make_service();
    let mut hw = MockHardware::from_raw(PH_ACIDIC_RAW, TEMP_OK_RAW, SALINITY_OK_RAW);

    service.tick(&mut hw, &mut sink);

    assert_eq!(hw.pair_green(Metric::Ph), Some(false));
    assert_eq!(hw.pair_green(Metric::Temperature), Some(true));
    assert_eq!(hw.pair_green(Metric::Salinity), Some(true));
    assert!(!hw.alarm_on(), "a single out-of-range metric must not alarm");

    let report = sink.reports()[0];
    assert_eq!(report.ph_class, PhClass::Acidic);
    assert_eq!(report.out_of_range, 1);
    assert!(!report.alarm);
    assert!(
        !sink
            .events
            .iter()
            .any(|e| matches!(e, MonitorEvent::AlarmRaised { .. })),
        "no alarm event for a single unhealthy metric"
    );
}

// ── Two metrics out: aggregate alarm fires ───────────────────

#[test]
fn two_unhealthy_metrics_raise_the_alarm() {
    let (mut service, mut sink) = make_service();
    let mut hw = MockHardware::from_raw(PH_ACIDIC_RAW, TEMP_COLD_RAW, SALINITY_OK_RAW);

    service.tick(&mut hw, &mut sink);

    assert_eq!(hw.pair_green(Metric::Ph), Some(false));
    assert_eq!(hw.pair_green(Metric::Temperature), Some(false));
    assert_eq!(hw.pair_green(Metric::Salinity), Some(true));
    assert!(hw.alarm_on());

    let report = sink.reports()[0];
    assert_eq!(report.out_of_range, 2);
    assert!(report.alarm);
    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, MonitorEvent::AlarmRaised { out_of_range: 2 })));
}

// ── Every flag combination: pair exclusivity + alarm rule ────

#[test]
fn every_combination_commands_each_pair_exactly_once_per_cycle() {
    let ph = [PH_NEUTRAL_RAW, PH_ACIDIC_RAW];
    let temp = [TEMP_OK_RAW, TEMP_COLD_RAW];
    let sal = [SALINITY_OK_RAW, SALINITY_LOW_RAW];

    for p in 0..2usize {
        for t in 0..2usize {
            for s in 0..2usize {
                let (mut service, mut sink) = make_service();
                let mut hw = MockHardware::from_raw(ph[p], temp[t], sal[s]);
                service.tick(&mut hw, &mut sink);

                // Exactly one status command per metric per cycle — the pair
                // is driven to exactly one of its two states.
                for metric in Metric::ALL {
                    let commands = hw
                        .calls
                        .iter()
                        .filter(|c| {
                            matches!(c, IndicatorCall::SetStatus { metric: m, .. } if *m == metric)
                        })
                        .count();
                    assert_eq!(commands, 1, "{} commanded once", metric.name());
                }

                let unhealthy = (p + t + s) as u8;
                assert_eq!(sink.reports()[0].out_of_range, unhealthy);
                assert_eq!(
                    hw.alarm_on(),
                    unhealthy >= 2,
                    "alarm wrong for p={p} t={t} s={s}"
                );
            }
        }
    }
}

// ── Alarm recovery over consecutive cycles ───────────────────

#[test]
fn alarm_clears_when_water_recovers() {
    let (mut service, mut sink) = make_service();
    let mut hw = MockHardware::from_raw(PH_ACIDIC_RAW, TEMP_COLD_RAW, SALINITY_OK_RAW);

    service.tick(&mut hw, &mut sink);
    assert!(hw.alarm_on());

    hw.snapshot = MockHardware::from_raw(PH_NEUTRAL_RAW, TEMP_OK_RAW, SALINITY_OK_RAW).snapshot;
    service.tick(&mut hw, &mut sink);

    assert!(!hw.alarm_on());
    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, MonitorEvent::AlarmCleared)));
    assert_eq!(service.cycle_count(), 2);
}

// ── Report line rendering from an end-to-end cycle ───────────

#[test]
fn report_line_matches_serial_format() {
    let (mut service, mut sink) = make_service();
    let mut hw = MockHardware::from_raw(PH_NEUTRAL_RAW, TEMP_OK_RAW, SALINITY_OK_RAW);

    service.tick(&mut hw, &mut sink);

    let line = format_report(sink.reports()[0]);
    assert!(line.starts_with("pH: 7.0"));
    assert!(line.contains("(Neutral)"));
    assert!(line.contains("Temperature: 24.7"));
    assert!(line.ends_with(" ppt"));
}

//! ReefMon Firmware — Main Entry Point
//!
//! Hexagonal architecture around a fixed-period sample loop:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  HardwareAdapter            LogEventSink                 │
//! │  (Sensor+Indicator)         (EventSink)                  │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ──────────────        │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │           MonitorService (pure logic)          │      │
//! │  │      sample · classify · annunciate            │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::info;

use reefmon::adapters::hardware::HardwareAdapter;
use reefmon::adapters::log_sink::LogEventSink;
use reefmon::app::service::MonitorService;
use reefmon::config::MonitorConfig;
use reefmon::drivers::alarm::AlarmLed;
use reefmon::drivers::hw_init;
use reefmon::drivers::indicator::StatusPair;
use reefmon::pins;
use reefmon::sensors::ph::PhSensor;
use reefmon::sensors::salinity::SalinitySensor;
use reefmon::sensors::temperature::TemperatureSensor;
use reefmon::sensors::SensorHub;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ReefMon v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Wire adapters behind the port boundary ─────────────
    let config = MonitorConfig::default();

    let sensor_hub = SensorHub::new(
        PhSensor::new(pins::PH_ADC_CH),
        SalinitySensor::new(pins::SALINITY_ADC_CH),
        TemperatureSensor::new(pins::TEMP_ADC_CH),
    );
    let mut hw = HardwareAdapter::new(
        sensor_hub,
        StatusPair::new(pins::PH_GREEN_GPIO, pins::PH_YELLOW_GPIO),
        StatusPair::new(pins::TEMP_GREEN_GPIO, pins::TEMP_YELLOW_GPIO),
        StatusPair::new(pins::SALINITY_GREEN_GPIO, pins::SALINITY_YELLOW_GPIO),
        AlarmLed::new(pins::ALARM_GPIO),
    );
    let mut sink = LogEventSink::new();

    // ── 4. Run the monitor forever ────────────────────────────
    let period_ms = config.sample_period_ms;
    let mut service = MonitorService::new(config);
    service.start(&mut sink);

    loop {
        service.tick(&mut hw, &mut sink);
        FreeRtos::delay_ms(period_ms);
    }
}

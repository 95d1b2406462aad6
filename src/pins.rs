//! ADC channel / GPIO pin assignments for the ReefMon sensor board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1, 10-bit front end)
// ---------------------------------------------------------------------------

/// pH probe amplifier output — ADC1 channel 0.
pub const PH_ADC_CH: u32 = 0;
/// Conductivity-derived salinity output — ADC1 channel 1.
pub const SALINITY_ADC_CH: u32 = 1;
/// TMP36 temperature sensor output — ADC1 channel 2.
pub const TEMP_ADC_CH: u32 = 2;

/// Full-scale ADC count (10-bit front end).
pub const ADC_MAX_COUNTS: u16 = 1023;

// ---------------------------------------------------------------------------
// Status LED pairs (green = in range, yellow = out of range)
// ---------------------------------------------------------------------------

pub const PH_GREEN_GPIO: i32 = 3;
pub const PH_YELLOW_GPIO: i32 = 4;

pub const TEMP_GREEN_GPIO: i32 = 5;
pub const TEMP_YELLOW_GPIO: i32 = 6;

pub const SALINITY_GREEN_GPIO: i32 = 7;
pub const SALINITY_YELLOW_GPIO: i32 = 8;

// ---------------------------------------------------------------------------
// Aggregate alarm LED (red)
// ---------------------------------------------------------------------------

/// Digital output: HIGH = two or more metrics outside their ideal band.
pub const ALARM_GPIO: i32 = 9;

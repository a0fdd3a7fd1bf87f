use std::fmt;
use std::fmt::Formatter;
use std::ops::RangeInclusive;
use serde::{Deserialize, Serialize};
use crate::errors::ObservationError;

/// Bounds for the 9am and 3pm relative humidity controls (%)
pub const HUMIDITY_RANGE: RangeInclusive<u8> = 0..=100;

/// Bounds for the 9am max wind speed control (mph)
pub const WIND_SPEED_RANGE: RangeInclusive<f64> = 0.0..=25.0;

/// Bounds for the 9am air pressure control (hPa)
pub const PRESSURE_RANGE: RangeInclusive<f64> = 908.0..=930.0;

/// The user adjustable controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Humidity9am,
    Humidity3pm,
    WindSpeed9am,
    Pressure9am,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::Humidity9am,
        Control::Humidity3pm,
        Control::WindSpeed9am,
        Control::Pressure9am,
    ];

    /// Returns the key used for the control in config files and session commands
    pub fn key(&self) -> &'static str {
        match self {
            Control::Humidity9am  => "humidity_9am",
            Control::Humidity3pm  => "humidity_3pm",
            Control::WindSpeed9am => "wind_speed_9am",
            Control::Pressure9am  => "pressure_9am",
        }
    }

    /// Returns the control matching the given key, if any
    ///
    /// # Arguments
    ///
    /// * 'key' - control key, e.g. 'humidity_9am'
    pub fn from_key(key: &str) -> Option<Control> {
        Control::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Control {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Control::Humidity9am  => write!(f, "9am Relative Humidity (%)"),
            Control::Humidity3pm  => write!(f, "3pm Relative Humidity (%)"),
            Control::WindSpeed9am => write!(f, "9am Max Wind Speed (mph)"),
            Control::Pressure9am  => write!(f, "9am Air Pressure (hPa)"),
        }
    }
}

/// One set of 9am/3pm observations as entered by the user.
///
/// Values are checked against the control bounds on construction, so an Observation that
/// exists is always within range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawObservation")]
pub struct Observation {
    humidity_9am: u8,
    humidity_3pm: u8,
    wind_speed_9am: f64,
    pressure_9am: f64,
}

#[derive(Deserialize)]
struct RawObservation {
    humidity_9am: u8,
    humidity_3pm: u8,
    wind_speed_9am: f64,
    pressure_9am: f64,
}

impl TryFrom<RawObservation> for Observation {
    type Error = ObservationError;

    fn try_from(raw: RawObservation) -> Result<Self, Self::Error> {
        Observation::new(raw.humidity_9am, raw.humidity_3pm, raw.wind_speed_9am, raw.pressure_9am)
    }
}

impl Observation {
    /// Returns a new Observation if all values are within their control bounds
    ///
    /// # Arguments
    ///
    /// * 'humidity_9am' - relative humidity at 9am (0-100 %)
    /// * 'humidity_3pm' - relative humidity at 3pm (0-100 %)
    /// * 'wind_speed_9am' - max wind speed at 9am (0.0-25.0 mph)
    /// * 'pressure_9am' - air pressure at 9am (908.0-930.0 hPa)
    pub fn new(humidity_9am: u8, humidity_3pm: u8, wind_speed_9am: f64, pressure_9am: f64) -> Result<Observation, ObservationError> {
        check_humidity(Control::Humidity9am, humidity_9am)?;
        check_humidity(Control::Humidity3pm, humidity_3pm)?;
        check_float(Control::WindSpeed9am, wind_speed_9am, &WIND_SPEED_RANGE)?;
        check_float(Control::Pressure9am, pressure_9am, &PRESSURE_RANGE)?;

        Ok(Observation { humidity_9am, humidity_3pm, wind_speed_9am, pressure_9am })
    }

    pub fn humidity_9am(&self) -> u8 {
        self.humidity_9am
    }

    pub fn humidity_3pm(&self) -> u8 {
        self.humidity_3pm
    }

    pub fn wind_speed_9am(&self) -> f64 {
        self.wind_speed_9am
    }

    pub fn pressure_9am(&self) -> f64 {
        self.pressure_9am
    }

    /// Returns a copy of this observation with one control changed.
    /// The value is parsed and checked against the bounds of that control.
    ///
    /// # Arguments
    ///
    /// * 'control' - the control to change
    /// * 'value' - the new value as entered by the user
    pub fn with_control(&self, control: Control, value: &str) -> Result<Observation, ObservationError> {
        let mut next = *self;
        match control {
            Control::Humidity9am  => next.humidity_9am = parse_humidity(control, value)?,
            Control::Humidity3pm  => next.humidity_3pm = parse_humidity(control, value)?,
            Control::WindSpeed9am => next.wind_speed_9am = parse_float(control, value)?,
            Control::Pressure9am  => next.pressure_9am = parse_float(control, value)?,
        }

        Observation::new(next.humidity_9am, next.humidity_3pm, next.wind_speed_9am, next.pressure_9am)
    }

    /// Returns the current value of a control formatted for display
    ///
    /// # Arguments
    ///
    /// * 'control' - the control to get the value for
    pub fn control_value(&self, control: Control) -> String {
        match control {
            Control::Humidity9am  => format!("{}", self.humidity_9am),
            Control::Humidity3pm  => format!("{}", self.humidity_3pm),
            Control::WindSpeed9am => format!("{:.1}", self.wind_speed_9am),
            Control::Pressure9am  => format!("{:.1}", self.pressure_9am),
        }
    }
}

impl Default for Observation {
    fn default() -> Self {
        Observation { humidity_9am: 75, humidity_3pm: 70, wind_speed_9am: 12.0, pressure_9am: 918.0 }
    }
}

fn check_humidity(control: Control, value: u8) -> Result<(), ObservationError> {
    if HUMIDITY_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(ObservationError::OutOfRange {
            control,
            value: value as f64,
            min: *HUMIDITY_RANGE.start() as f64,
            max: *HUMIDITY_RANGE.end() as f64,
        })
    }
}

fn check_float(control: Control, value: f64, range: &RangeInclusive<f64>) -> Result<(), ObservationError> {
    if !value.is_finite() {
        Err(ObservationError::NotANumber { control, value: value.to_string() })
    } else if !range.contains(&value) {
        Err(ObservationError::OutOfRange { control, value, min: *range.start(), max: *range.end() })
    } else {
        Ok(())
    }
}

fn parse_humidity(control: Control, value: &str) -> Result<u8, ObservationError> {
    let number = parse_float(control, value)?;
    if number.fract() != 0.0 {
        return Err(ObservationError::NotAnInteger { control, value: value.to_string() });
    }
    if number < *HUMIDITY_RANGE.start() as f64 || number > *HUMIDITY_RANGE.end() as f64 {
        return Err(ObservationError::OutOfRange {
            control,
            value: number,
            min: *HUMIDITY_RANGE.start() as f64,
            max: *HUMIDITY_RANGE.end() as f64,
        });
    }

    Ok(number as u8)
}

fn parse_float(control: Control, value: &str) -> Result<f64, ObservationError> {
    let number = value.trim().parse::<f64>()
        .map_err(|_| ObservationError::NotANumber { control, value: value.to_string() })?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(ObservationError::NotANumber { control, value: value.to_string() })
    }
}

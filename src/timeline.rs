use serde::Serialize;
use crate::models::prediction::Prediction;

/// Hour of day where the synthetic intensity curve peaks
const PEAK_HOUR: usize = 15;

/// Peak intensity when rain is predicted
const RAIN_BASE_LEVEL: f64 = 0.8;

/// Peak intensity when no rain is predicted
const NO_RAIN_BASE_LEVEL: f64 = 0.1;

/// Value of the constant reference series charted alongside the intensity
pub const SCALE_MAX: f64 = 1.0;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HourIntensity {
    pub hour: String,
    pub intensity: f64,
}

/// Struct holding a synthetic rain intensity curve with one value per hour.
///
/// The curve is purely illustrative. It is a triangle peaking at 15:00 with a height that only
/// depends on the predicted label.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct IntensityTimeline {
    hours: Vec<HourIntensity>,
}

impl IntensityTimeline {
    /// Returns a new IntensityTimeline for the given prediction
    ///
    /// # Arguments
    ///
    /// * 'prediction' - the classifier output
    pub fn new(prediction: Prediction) -> IntensityTimeline {
        let base_level = match prediction {
            Prediction::Rain   => RAIN_BASE_LEVEL,
            Prediction::NoRain => NO_RAIN_BASE_LEVEL,
        };

        let hours = (0..24)
            .map(|h: usize| {
                let distance = h.abs_diff(PEAK_HOUR) as f64;
                let intensity = base_level * (1.0 - distance / PEAK_HOUR as f64);
                HourIntensity { hour: format!("{:02}:00", h), intensity: intensity.max(0.0) }
            })
            .collect::<Vec<HourIntensity>>();

        IntensityTimeline { hours }
    }

    pub fn hours(&self) -> &[HourIntensity] {
        &self.hours
    }

    /// Returns the intensity values in hour order
    pub fn intensities(&self) -> Vec<f64> {
        self.hours.iter().map(|h| h.intensity).collect()
    }

    /// Returns the constant reference series, one value per hour
    pub fn scale_max(&self) -> Vec<f64> {
        vec![SCALE_MAX; self.hours.len()]
    }
}

use std::fmt;
use std::fmt::Formatter;
use serde::Serialize;
use crate::models::observation::Observation;

/// Number of features the classifier is trained on
pub const FEATURE_COUNT: usize = 8;

/// Feature names in the exact order the classifier was trained on
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "air_pressure_9am",
    "air_temp_9am",
    "avg_wind_direction_9am",
    "avg_wind_speed_9am",
    "max_wind_direction_9am",
    "max_wind_speed_9am",
    "relative_humidity_9am",
    "relative_humidity_3pm",
];

/// Placeholder for the 9am air temperature which is not exposed as a control
const AIR_TEMP_9AM: f64 = 20.0;

/// Placeholder for the 9am average and max wind directions which are not exposed as controls
const WIND_DIRECTION_9AM: f64 = 180.0;

/// Average wind speed is estimated from the max wind speed using this factor
const AVG_WIND_SPEED_FACTOR: f64 = 0.7;

/// The feature vector fed to the classifier.
///
/// Field order matters, [`FeatureRecord::values`] returns the values in the order of
/// [`FEATURE_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub air_pressure_9am: f64,
    pub air_temp_9am: f64,
    pub avg_wind_direction_9am: f64,
    pub avg_wind_speed_9am: f64,
    pub max_wind_direction_9am: f64,
    pub max_wind_speed_9am: f64,
    pub relative_humidity_9am: f64,
    pub relative_humidity_3pm: f64,
}

impl FeatureRecord {
    /// Returns the feature values in training order
    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.air_pressure_9am,
            self.air_temp_9am,
            self.avg_wind_direction_9am,
            self.avg_wind_speed_9am,
            self.max_wind_direction_9am,
            self.max_wind_speed_9am,
            self.relative_humidity_9am,
            self.relative_humidity_3pm,
        ]
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for FeatureRecord {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let pairs = FEATURE_NAMES.iter()
            .zip(self.values())
            .map(|(n, v)| format!("{}={}", n, v))
            .collect::<Vec<String>>();

        write!(f, "{}", pairs.join(", "))
    }
}

/// Assembles the classifier feature record from an observation.
///
/// Features not exposed as controls are padded with fixed placeholders, and the average
/// wind speed is derived from the max wind speed.
///
/// # Arguments
///
/// * 'observation' - the user supplied observation
pub fn assemble(observation: &Observation) -> FeatureRecord {
    let wind_speed = observation.wind_speed_9am();

    FeatureRecord {
        air_pressure_9am: observation.pressure_9am(),
        air_temp_9am: AIR_TEMP_9AM,
        avg_wind_direction_9am: WIND_DIRECTION_9AM,
        avg_wind_speed_9am: wind_speed * AVG_WIND_SPEED_FACTOR,
        max_wind_direction_9am: WIND_DIRECTION_9AM,
        max_wind_speed_9am: wind_speed,
        relative_humidity_9am: observation.humidity_9am() as f64,
        relative_humidity_3pm: observation.humidity_3pm() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_default_observation() {
        let obs = Observation::new(75, 70, 12.0, 918.0).unwrap();
        let record = assemble(&obs);

        let values = record.values();
        assert_eq!(values.len(), FEATURE_COUNT);
        assert_eq!(values[0], 918.0);
        assert_eq!(values[1], 20.0);
        assert_eq!(values[2], 180.0);
        assert!((values[3] - 8.4).abs() < 1e-12);
        assert_eq!(values[4], 180.0);
        assert_eq!(values[5], 12.0);
        assert_eq!(values[6], 75.0);
        assert_eq!(values[7], 70.0);
    }

    #[test]
    fn test_wind_speed_derivation_is_exact() {
        for wind in [0.0, 0.1, 3.3, 12.0, 17.25, 25.0] {
            let obs = Observation::new(50, 50, wind, 920.0).unwrap();
            let record = assemble(&obs);
            assert_eq!(record.avg_wind_speed_9am, 0.7 * wind);
            assert_eq!(record.max_wind_speed_9am, wind);
        }
    }

    #[test]
    fn test_placeholders_are_constant() {
        let a = assemble(&Observation::new(0, 0, 0.0, 908.0).unwrap());
        let b = assemble(&Observation::new(100, 100, 25.0, 930.0).unwrap());
        assert_eq!(a.air_temp_9am, b.air_temp_9am);
        assert_eq!(a.avg_wind_direction_9am, 180.0);
        assert_eq!(b.max_wind_direction_9am, 180.0);
    }

    #[test]
    fn test_values_follow_feature_names() {
        let record = assemble(&Observation::new(11, 22, 10.0, 909.0).unwrap());
        let json = serde_json::to_value(record).unwrap();
        for (name, value) in FEATURE_NAMES.iter().zip(record.values()) {
            assert_eq!(json[name].as_f64(), Some(value), "feature {}", name);
        }
    }
}

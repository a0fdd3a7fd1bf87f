use chrono::{DateTime, Local};
use log::{debug, info};
use serde::Serialize;
use crate::features::{assemble, FeatureRecord};
use crate::manager_model::Classifier;
use crate::manager_model::errors::ModelError;
use crate::models::observation::Observation;
use crate::models::prediction::Prediction;
use crate::timeline::IntensityTimeline;

/// The result of one prediction request
#[derive(Serialize, Clone, Debug)]
pub struct Forecast {
    pub generated_at: DateTime<Local>,
    pub observation: Observation,
    pub features: FeatureRecord,
    pub prediction: Prediction,
    pub rain_probability: Option<f64>,
    pub timeline: IntensityTimeline,
}

/// Runs one full prediction: assembles features, asks the classifier and builds the timeline.
///
/// Nothing is cached between calls, each call is a complete recomputation.
///
/// # Arguments
///
/// * 'classifier' - the loaded classifier
/// * 'observation' - the observation to predict for
pub fn run_forecast<C: Classifier + ?Sized>(classifier: &C, observation: &Observation) -> Result<Forecast, ModelError> {
    let features = assemble(observation);
    debug!("features: {}", features);

    let prediction = classifier.predict(&features)?;
    let rain_probability = classifier.rain_probability(&features);
    info!("prediction: {}, probability: {:?}", prediction, rain_probability);

    let timeline = IntensityTimeline::new(prediction);
    debug!("timeline: {:?}", timeline.intensities());

    Ok(Forecast {
        generated_at: Local::now(),
        observation: *observation,
        features,
        prediction,
        rain_probability,
        timeline,
    })
}

use log::info;
use crate::config::{load_config, Config};
use crate::errors::SkyCastInitError;
use crate::logging::setup_logger;
use crate::manager_model::TreeEnsemble;

/// Loads configuration, sets up logging and loads the classifier.
/// Any failure here is fatal since there is nothing to predict with.
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
/// * 'model_override' - model file to use instead of the configured one
pub fn init(config_path: &str, model_override: Option<String>) -> Result<(Config, TreeEnsemble), SkyCastInitError> {
    let mut config = load_config(config_path)?;
    if let Some(model_file) = model_override {
        config.files.model_file = model_file;
    }

    setup_logger(&config.general)?;
    info!("skycast version: {}", env!("CARGO_PKG_VERSION"));

    let model = TreeEnsemble::load(&config.files.model_file)?;

    Ok((config, model))
}

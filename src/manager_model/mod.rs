pub mod errors;

use std::fs;
use std::path::Path;
use log::info;
use crate::features::{FeatureRecord, FEATURE_COUNT, FEATURE_NAMES};
use crate::manager_model::errors::ModelError;
use crate::models::prediction::Prediction;
use crate::models::tree_ensemble::{Node, TreeEnsembleDocument};

/// A pre-trained binary rain classifier
pub trait Classifier {
    /// Predicts rain or no rain for the given feature record
    ///
    /// # Arguments
    ///
    /// * 'record' - features in training order
    fn predict(&self, record: &FeatureRecord) -> Result<Prediction, ModelError>;

    /// Returns the probability of rain for classifiers that can estimate it
    fn rain_probability(&self, _record: &FeatureRecord) -> Option<f64> {
        None
    }
}

/// Gradient boosted decision tree classifier loaded from a JSON model file.
///
/// The decision function is `init_score + learning_rate * sum(leaf values)` and a positive
/// decision means rain. All trees are validated on load so that evaluation can't fail or loop.
#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    init_score: f64,
    learning_rate: f64,
    trees: Vec<Vec<Node>>,
}

impl TreeEnsemble {
    /// Loads and validates a model file
    ///
    /// # Arguments
    ///
    /// * 'model_path' - path to the JSON model file
    pub fn load(model_path: &str) -> Result<TreeEnsemble, ModelError> {
        let path = Path::new(model_path);
        if !path.exists() {
            return Err(ModelError::Io(format!("model file not found: {}", model_path)));
        }

        let json = fs::read_to_string(path)?;
        let model = TreeEnsemble::from_json(&json)?;
        info!("loaded model {} with {} trees", model_path, model.tree_count());

        Ok(model)
    }

    /// Parses and validates a model from a JSON string
    ///
    /// # Arguments
    ///
    /// * 'json' - the model document
    pub fn from_json(json: &str) -> Result<TreeEnsemble, ModelError> {
        let document: TreeEnsembleDocument = serde_json::from_str(json)?;
        TreeEnsemble::from_document(document)
    }

    /// Validates a model document and returns a classifier built from it
    ///
    /// # Arguments
    ///
    /// * 'document' - the deserialized model document
    pub fn from_document(document: TreeEnsembleDocument) -> Result<TreeEnsemble, ModelError> {
        if !document.feature_names.iter().eq(FEATURE_NAMES.iter()) {
            return Err(ModelError::SchemaMismatch {
                expected: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
                found: document.feature_names,
            });
        }
        if !document.init_score.is_finite() || !document.learning_rate.is_finite() {
            return Err(ModelError::Document("init_score and learning_rate must be finite".to_string()));
        }

        let mut trees = Vec::with_capacity(document.trees.len());
        for (t, tree) in document.trees.into_iter().enumerate() {
            validate_tree(t, &tree.nodes)?;
            trees.push(tree.nodes);
        }

        Ok(TreeEnsemble { init_score: document.init_score, learning_rate: document.learning_rate, trees })
    }

    /// Returns the raw decision function value (log odds of rain)
    ///
    /// # Arguments
    ///
    /// * 'record' - features in training order
    pub fn decision_function(&self, record: &FeatureRecord) -> f64 {
        let x = record.values();
        let sum = self.trees.iter().map(|t| evaluate_tree(t, &x)).sum::<f64>();

        self.init_score + self.learning_rate * sum
    }

    /// Returns the probability of rain
    ///
    /// # Arguments
    ///
    /// * 'record' - features in training order
    pub fn predict_proba(&self, record: &FeatureRecord) -> f64 {
        1.0 / (1.0 + (-self.decision_function(record)).exp())
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl Classifier for TreeEnsemble {
    fn predict(&self, record: &FeatureRecord) -> Result<Prediction, ModelError> {
        let decision = self.decision_function(record);
        if !decision.is_finite() {
            return Err(ModelError::Prediction(format!("decision function is not finite: {}", decision)));
        }

        Ok(if decision > 0.0 { Prediction::Rain } else { Prediction::NoRain })
    }

    fn rain_probability(&self, record: &FeatureRecord) -> Option<f64> {
        Some(self.predict_proba(record))
    }
}

/// Checks that a tree can be walked from its root without indexing out of bounds or looping.
/// Children must come after their parent in the node list.
///
/// # Arguments
///
/// * 'tree' - index of the tree, for error reporting
/// * 'nodes' - the nodes of the tree, root first
fn validate_tree(tree: usize, nodes: &[Node]) -> Result<(), ModelError> {
    if nodes.is_empty() {
        return Err(ModelError::InvalidTree { tree, msg: "tree has no nodes".to_string() });
    }

    for (i, node) in nodes.iter().enumerate() {
        match node {
            Node::Split(s) => {
                if s.feature >= FEATURE_COUNT {
                    return Err(ModelError::InvalidTree { tree, msg: format!("node {} splits on unknown feature {}", i, s.feature) });
                }
                if !s.threshold.is_finite() {
                    return Err(ModelError::InvalidTree { tree, msg: format!("node {} has a non finite threshold", i) });
                }
                for child in [s.left, s.right] {
                    if child <= i || child >= nodes.len() {
                        return Err(ModelError::InvalidTree { tree, msg: format!("node {} has invalid child {}", i, child) });
                    }
                }
            }
            Node::Leaf(l) => {
                if !l.value.is_finite() {
                    return Err(ModelError::InvalidTree { tree, msg: format!("node {} has a non finite value", i) });
                }
            }
        }
    }

    Ok(())
}

fn evaluate_tree(nodes: &[Node], x: &[f64; FEATURE_COUNT]) -> f64 {
    let mut idx = 0;
    loop {
        match &nodes[idx] {
            Node::Leaf(l) => return l.value,
            Node::Split(s) => {
                idx = if x[s.feature] <= s.threshold { s.left } else { s.right };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::assemble;
    use crate::models::observation::Observation;

    fn names_json() -> String {
        serde_json::to_string(&FEATURE_NAMES).unwrap()
    }

    /// One stump on 3pm humidity and one on pressure
    fn two_stumps() -> String {
        format!(r#"{{
            "feature_names": {},
            "init_score": -0.5,
            "learning_rate": 0.5,
            "trees": [
                {{ "nodes": [
                    {{ "split": {{ "feature": 7, "threshold": 60.0, "left": 1, "right": 2 }} }},
                    {{ "leaf": {{ "value": -1.0 }} }},
                    {{ "leaf": {{ "value": 2.0 }} }}
                ] }},
                {{ "nodes": [
                    {{ "split": {{ "feature": 0, "threshold": 915.0, "left": 1, "right": 2 }} }},
                    {{ "leaf": {{ "value": 1.0 }} }},
                    {{ "leaf": {{ "value": -0.5 }} }}
                ] }}
            ]
        }}"#, names_json())
    }

    #[test]
    fn test_decision_function() {
        let model = TreeEnsemble::from_json(&two_stumps()).unwrap();
        assert_eq!(model.tree_count(), 2);

        // humid afternoon, high pressure: -0.5 + 0.5 * (2.0 - 0.5) = 0.25
        let wet = assemble(&Observation::new(75, 70, 12.0, 918.0).unwrap());
        assert!((model.decision_function(&wet) - 0.25).abs() < 1e-12);
        assert_eq!(model.predict(&wet).unwrap(), Prediction::Rain);
        assert!(model.predict_proba(&wet) > 0.5);
        assert_eq!(model.rain_probability(&wet), Some(model.predict_proba(&wet)));

        // dry afternoon, high pressure: -0.5 + 0.5 * (-1.0 - 0.5) = -1.25
        let dry = assemble(&Observation::new(75, 40, 12.0, 918.0).unwrap());
        assert!((model.decision_function(&dry) + 1.25).abs() < 1e-12);
        assert_eq!(model.predict(&dry).unwrap(), Prediction::NoRain);
    }

    #[test]
    fn test_threshold_goes_left() {
        let model = TreeEnsemble::from_json(&two_stumps()).unwrap();
        // exactly on both thresholds: -0.5 + 0.5 * (-1.0 + 1.0) = -0.5
        let edge = assemble(&Observation::new(50, 60, 0.0, 915.0).unwrap());
        assert!((model.decision_function(&edge) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_decision_is_no_rain() {
        let json = format!(r#"{{ "feature_names": {}, "init_score": 0.0, "learning_rate": 1.0,
            "trees": [ {{ "nodes": [ {{ "leaf": {{ "value": 0.0 }} }} ] }} ] }}"#, names_json());
        let model = TreeEnsemble::from_json(&json).unwrap();
        let record = assemble(&Observation::default());
        assert_eq!(model.predict(&record).unwrap(), Prediction::NoRain);
        assert_eq!(model.predict_proba(&record), 0.5);
    }

    #[test]
    fn test_schema_mismatch() {
        let mut names = FEATURE_NAMES.to_vec();
        names.swap(6, 7);
        let json = format!(r#"{{ "feature_names": {}, "init_score": 0.0, "learning_rate": 1.0, "trees": [] }}"#,
            serde_json::to_string(&names).unwrap());

        assert!(matches!(TreeEnsemble::from_json(&json), Err(ModelError::SchemaMismatch { .. })));
    }

    #[test]
    fn test_rejects_backward_child() {
        let json = format!(r#"{{ "feature_names": {}, "init_score": 0.0, "learning_rate": 1.0,
            "trees": [ {{ "nodes": [
                {{ "split": {{ "feature": 0, "threshold": 1.0, "left": 0, "right": 1 }} }},
                {{ "leaf": {{ "value": 1.0 }} }}
            ] }} ] }}"#, names_json());

        assert!(matches!(TreeEnsemble::from_json(&json), Err(ModelError::InvalidTree { tree: 0, .. })));
    }

    #[test]
    fn test_rejects_dangling_child_and_unknown_feature() {
        let dangling = format!(r#"{{ "feature_names": {}, "init_score": 0.0, "learning_rate": 1.0,
            "trees": [ {{ "nodes": [
                {{ "split": {{ "feature": 0, "threshold": 1.0, "left": 1, "right": 5 }} }},
                {{ "leaf": {{ "value": 1.0 }} }}
            ] }} ] }}"#, names_json());
        assert!(matches!(TreeEnsemble::from_json(&dangling), Err(ModelError::InvalidTree { .. })));

        let unknown = format!(r#"{{ "feature_names": {}, "init_score": 0.0, "learning_rate": 1.0,
            "trees": [ {{ "nodes": [
                {{ "split": {{ "feature": 8, "threshold": 1.0, "left": 1, "right": 2 }} }},
                {{ "leaf": {{ "value": 1.0 }} }},
                {{ "leaf": {{ "value": 1.0 }} }}
            ] }} ] }}"#, names_json());
        assert!(matches!(TreeEnsemble::from_json(&unknown), Err(ModelError::InvalidTree { .. })));
    }

    #[test]
    fn test_rejects_empty_tree_and_bad_json() {
        let empty = format!(r#"{{ "feature_names": {}, "init_score": 0.0, "learning_rate": 1.0,
            "trees": [ {{ "nodes": [] }} ] }}"#, names_json());
        assert!(matches!(TreeEnsemble::from_json(&empty), Err(ModelError::InvalidTree { .. })));

        assert!(matches!(TreeEnsemble::from_json("{ not json"), Err(ModelError::Document(_))));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("skycast_no_such_model.json");
        let result = TreeEnsemble::load(path.to_str().unwrap());
        assert!(matches!(result, Err(ModelError::Io(_))));
    }

    #[test]
    fn test_bundled_model() {
        let model = TreeEnsemble::from_json(include_str!("../../model/weather_model.json")).unwrap();
        assert!(model.tree_count() > 0);

        let humid = assemble(&Observation::new(90, 85, 20.0, 910.0).unwrap());
        assert_eq!(model.predict(&humid).unwrap(), Prediction::Rain);

        let dry = assemble(&Observation::new(20, 15, 2.0, 928.0).unwrap());
        assert_eq!(model.predict(&dry).unwrap(), Prediction::NoRain);
    }
}

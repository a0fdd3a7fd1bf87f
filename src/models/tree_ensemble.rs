use serde::{Deserialize, Serialize};

/// Persisted gradient boosting classifier document
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TreeEnsembleDocument {
    pub feature_names: Vec<String>,
    pub init_score: f64,
    pub learning_rate: f64,
    pub trees: Vec<TreeDocument>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TreeDocument {
    pub nodes: Vec<Node>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Split(Split),
    Leaf(Leaf),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Split {
    pub feature: usize,
    pub threshold: f64,
    pub left: usize,
    pub right: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Leaf {
    pub value: f64,
}

pub mod observation;
pub mod prediction;
pub mod tree_ensemble;

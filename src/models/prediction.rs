use std::fmt;
use std::fmt::Formatter;
use serde::Serialize;

/// The binary classifier output
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    NoRain,
    Rain,
}

impl Prediction {
    /// Returns the raw classifier label, 0 for no rain and 1 for rain
    pub fn label(&self) -> u8 {
        match self {
            Prediction::NoRain => 0,
            Prediction::Rain   => 1,
        }
    }
}

impl TryFrom<u8> for Prediction {
    type Error = String;

    fn try_from(label: u8) -> Result<Self, Self::Error> {
        match label {
            0 => Ok(Prediction::NoRain),
            1 => Ok(Prediction::Rain),
            _ => Err(format!("unknown classifier label: {}", label)),
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Prediction::NoRain => write!(f, "{} (no rain)", self.label()),
            Prediction::Rain   => write!(f, "{} (rain)", self.label()),
        }
    }
}

use std::fmt::Write;
use crate::forecast::Forecast;
use crate::models::observation::{Control, Observation};
use crate::models::prediction::Prediction;
use crate::timeline::{IntensityTimeline, SCALE_MAX};

pub const TITLE: &str = "SkyCast: Rain Frequency Predictor";

pub const IDLE_PROMPT: &str =
    "Please adjust the atmospheric controls and click 'Predict Weather' to generate a forecast.";

const TIPS: [&str; 3] = [
    "Humidity: High humidity is the strongest indicator of rain.",
    "Air Pressure: Lower pressure often signals an approaching storm.",
    "Wind Speed: High wind gusts can increase the chance of rain.",
];

/// Verdict shown to the user for a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub headline: &'static str,
    pub detail: &'static str,
}

/// Returns the verdict text for a prediction
///
/// # Arguments
///
/// * 'prediction' - the classifier output
pub fn verdict(prediction: Prediction) -> Verdict {
    match prediction {
        Prediction::Rain => Verdict {
            headline: "☔ Rain is Likely Today",
            detail: "Potential disruptions in outdoor activities.",
        },
        Prediction::NoRain => Verdict {
            headline: "☀️ Clear Skies Expected",
            detail: "Conditions are stable. Low probability of precipitation.",
        },
    }
}

/// Renders the complete report for a forecast: verdict followed by the intensity chart
///
/// # Arguments
///
/// * 'forecast' - the forecast to render
/// * 'chart_width' - width in characters of a full scale bar
pub fn render_forecast(forecast: &Forecast, chart_width: usize) -> String {
    let v = verdict(forecast.prediction);
    let mut out = String::new();

    let _ = writeln!(out, "### {}", v.headline);
    let _ = writeln!(out, "{}", v.detail);
    if let Some(p) = forecast.rain_probability {
        let _ = writeln!(out, "Probability of rain: {:.0}%", p * 100.0);
    }
    let _ = writeln!(out, "Generated {}", forecast.generated_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out);
    out.push_str(&render_chart(&forecast.timeline, chart_width));

    out
}

/// Renders the timeline as a horizontal bar chart. Each row is scaled against the reference
/// series, whose value is marked by the closing '|'.
///
/// # Arguments
///
/// * 'timeline' - the intensity timeline
/// * 'width' - width in characters of a full scale bar
pub fn render_chart(timeline: &IntensityTimeline, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#### Predicted Rain Intensity Timeline");
    let _ = writeln!(out, "{:<5} |{:<width$}| Rain Intensity (Scale_Max = {:.1})", "Time", "", SCALE_MAX, width = width);

    for (h, max) in timeline.hours().iter().zip(timeline.scale_max()) {
        let filled = ((h.intensity / max) * width as f64).round().clamp(0.0, width as f64) as usize;
        let _ = writeln!(out, "{} |{}{}| {:.2}", h.hour, "█".repeat(filled), " ".repeat(width - filled), h.intensity);
    }

    out
}

/// Renders the current control values
///
/// # Arguments
///
/// * 'observation' - the current control values
pub fn render_controls(observation: &Observation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Observation Controls");
    for control in Control::ALL {
        let _ = writeln!(out, "  {:<15} {:<27} {}", control.key(), control.to_string(), observation.control_value(control));
    }

    out
}

/// Renders the tips section
pub fn render_tips() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tips");
    for tip in TIPS {
        let _ = writeln!(out, "- {}", tip);
    }

    out
}

use std::io::{BufRead, Write};
use log::{debug, warn};
use crate::errors::SessionError;
use crate::forecast::run_forecast;
use crate::manager_model::Classifier;
use crate::models::observation::{Control, Observation};
use crate::report::{render_controls, render_forecast, render_tips, IDLE_PROMPT, TITLE};

const HELP: &str = "\
Commands:
  set <control> <value>   adjust a control (humidity_9am, humidity_3pm, wind_speed_9am, pressure_9am)
  show                    show current control values
  predict                 predict weather for the current controls
  tips                    show tips
  help                    show this help
  quit                    leave";

/// Interactive prediction session over any line based input and output.
///
/// The session only holds the control values. Each predict command runs the full pipeline
/// again, and changing a control clears the shown forecast.
pub struct Session<'a, C: Classifier + ?Sized> {
    classifier: &'a C,
    observation: Observation,
    chart_width: usize,
}

impl<'a, C: Classifier + ?Sized> Session<'a, C> {
    /// Returns a new Session
    ///
    /// # Arguments
    ///
    /// * 'classifier' - the loaded classifier, shared for the whole session
    /// * 'observation' - initial control values
    /// * 'chart_width' - width in characters of a full scale chart bar
    pub fn new(classifier: &'a C, observation: Observation, chart_width: usize) -> Session<'a, C> {
        Session { classifier, observation, chart_width }
    }

    pub fn observation(&self) -> &Observation {
        &self.observation
    }

    /// Runs the session until quit or end of input
    ///
    /// # Arguments
    ///
    /// * 'input' - where commands are read from
    /// * 'out' - where output is written
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), SessionError> {
        writeln!(out, "{}", TITLE)?;
        writeln!(out, "{}", render_controls(&self.observation))?;
        writeln!(out, "{}", IDLE_PROMPT)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let mut parts = line.split_whitespace();

            match parts.next() {
                None => {}
                Some("quit") | Some("exit") => break,
                Some("set") => {
                    let control = parts.next();
                    let value = parts.next();
                    self.set(control, value, out)?;
                }
                Some("show") => writeln!(out, "{}", render_controls(&self.observation))?,
                Some("predict") => {
                    let forecast = run_forecast(self.classifier, &self.observation)?;
                    writeln!(out, "{}", render_forecast(&forecast, self.chart_width))?;
                }
                Some("tips") => writeln!(out, "{}", render_tips())?,
                Some("help") => writeln!(out, "{}", HELP)?,
                Some(other) => writeln!(out, "Unknown command '{}', type 'help' for commands", other)?,
            }

            write!(out, "> ")?;
            out.flush()?;
        }
        writeln!(out)?;

        Ok(())
    }

    /// Handles the set command. A rejected value leaves the control unchanged.
    fn set<W: Write>(&mut self, control: Option<&str>, value: Option<&str>, out: &mut W) -> Result<(), SessionError> {
        let (Some(key), Some(value)) = (control, value) else {
            writeln!(out, "Usage: set <control> <value>")?;
            return Ok(());
        };

        let Some(control) = Control::from_key(key) else {
            writeln!(out, "Unknown control '{}'", key)?;
            return Ok(());
        };

        match self.observation.with_control(control, value) {
            Ok(observation) => {
                debug!("{} set to {}", control.key(), value);
                self.observation = observation;
                writeln!(out, "{}: {}", control, self.observation.control_value(control))?;
                writeln!(out, "{}", IDLE_PROMPT)?;
            }
            Err(e) => {
                warn!("rejected input: {}", e);
                writeln!(out, "{}", e)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::tests::FixedClassifier;
    use crate::models::prediction::Prediction;

    fn run_session(classifier: &FixedClassifier, script: &str) -> (String, Observation) {
        let mut session = Session::new(classifier, Observation::default(), 10);
        let mut out: Vec<u8> = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();

        (String::from_utf8(out).unwrap(), *session.observation())
    }

    #[test]
    fn test_idle_until_predict() {
        let classifier = FixedClassifier::new(Prediction::Rain);
        let (out, _) = run_session(&classifier, "show\nquit\n");
        assert!(out.contains(IDLE_PROMPT));
        assert!(!out.contains("Rain is Likely"));
        assert!(classifier.calls.borrow().is_empty());
    }

    #[test]
    fn test_predict_uses_adjusted_controls() {
        let classifier = FixedClassifier::new(Prediction::Rain);
        let (out, obs) = run_session(&classifier, "set humidity_3pm 90\nset pressure_9am 910\npredict\n");
        assert!(out.contains("Rain is Likely Today"));
        assert_eq!(obs.humidity_3pm(), 90);

        let calls = classifier.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].relative_humidity_3pm, 90.0);
        assert_eq!(calls[0].air_pressure_9am, 910.0);
    }

    #[test]
    fn test_rejected_set_keeps_value() {
        let classifier = FixedClassifier::new(Prediction::NoRain);
        let (out, obs) = run_session(&classifier, "set wind_speed_9am 40\nset humidity_9am abc\n");
        assert!(out.contains("must be within"));
        assert!(out.contains("must be a number"));
        assert_eq!(obs, Observation::default());
    }

    #[test]
    fn test_every_predict_recomputes() {
        let classifier = FixedClassifier::new(Prediction::NoRain);
        let (out, _) = run_session(&classifier, "predict\npredict\nexit\npredict\n");
        assert_eq!(classifier.calls.borrow().len(), 2);
        assert_eq!(out.matches("Clear Skies Expected").count(), 2);
    }

    #[test]
    fn test_unknown_commands() {
        let classifier = FixedClassifier::new(Prediction::NoRain);
        let (out, _) = run_session(&classifier, "forecast\nset\nset temperature 20\n");
        assert!(out.contains("Unknown command 'forecast'"));
        assert!(out.contains("Usage: set <control> <value>"));
        assert!(out.contains("Unknown control 'temperature'"));
    }
}

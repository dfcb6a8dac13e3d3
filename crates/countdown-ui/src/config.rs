use std::time::SystemTime;

use countdown_engine::error::{validate_radius, validate_stroke_width};
use countdown_engine::paint::Color;
use countdown_engine::time::ProgressSampler;
use countdown_engine::CountdownError;

/// Appearance and timing of a circular countdown.
///
/// Read once per frame; change it between frames through the widget setters,
/// which validate eagerly.
///
/// # Example
/// ```rust,ignore
/// CountdownConfig::default()
///     .circle_radius(40.0)
///     .fill_color(Some(Color::white()))
///     .interval(10.0)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownConfig {
    /// Radius `r`; the widget's preferred size is the `2r` square.
    pub circle_radius: f32,
    pub fill_color: Option<Color>,
    /// Stroke is drawn only with a color and a positive width.
    pub stroke_color: Option<Color>,
    pub stroke_width: f32,
    /// Cycle length in seconds. Must be positive.
    pub interval: f64,
    /// Start of the first cycle. `None` measures cycles from the Unix epoch.
    pub base_date: Option<SystemTime>,
}

impl CountdownConfig {
    pub fn circle_radius(mut self, v: f32) -> Self { self.circle_radius = v; self }
    pub fn fill_color(mut self, v: Option<Color>) -> Self { self.fill_color = v; self }
    pub fn stroke_color(mut self, v: Option<Color>) -> Self { self.stroke_color = v; self }
    pub fn stroke_width(mut self, v: f32) -> Self { self.stroke_width = v; self }
    pub fn interval(mut self, v: f64) -> Self { self.interval = v; self }
    pub fn base_date(mut self, v: Option<SystemTime>) -> Self { self.base_date = v; self }

    /// Checks radius, stroke width and interval.
    pub fn validate(&self) -> Result<(), CountdownError> {
        validate_radius(self.circle_radius)?;
        validate_stroke_width(self.stroke_width)?;
        self.sampler().map(|_| ())
    }

    /// Sampler for this interval and base date.
    pub fn sampler(&self) -> Result<ProgressSampler, CountdownError> {
        ProgressSampler::new(self.interval, self.base_date)
    }
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            circle_radius: 0.0,
            fill_color: None,
            stroke_color: None,
            stroke_width: 0.0,
            interval: 30.0,
            base_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(CountdownConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_interval_is_thirty_seconds() {
        assert_eq!(CountdownConfig::default().interval, 30.0);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = CountdownConfig::default().interval(0.0).validate().unwrap_err();
        assert_eq!(err, CountdownError::InvalidInterval { seconds: 0.0 });
    }

    #[test]
    fn negative_radius_is_rejected() {
        let err = CountdownConfig::default().circle_radius(-3.0).validate().unwrap_err();
        assert_eq!(err, CountdownError::InvalidRadius { radius: -3.0 });
    }

    #[test]
    fn negative_stroke_width_is_rejected() {
        let err = CountdownConfig::default().stroke_width(-0.5).validate().unwrap_err();
        assert_eq!(err, CountdownError::InvalidStrokeWidth { width: -0.5 });
    }
}

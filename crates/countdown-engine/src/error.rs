use std::fmt;

/// Configuration error raised by the sampler or by widget setters.
///
/// Per-frame conditions (stale ticks, a missing renderer) are not errors; they are
/// reported as tick outcomes by the redraw loop and never leave the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountdownError {
    /// Cycle interval is zero, negative, or not a finite number of seconds.
    InvalidInterval { seconds: f64 },
    /// Circle radius is negative or not finite.
    InvalidRadius { radius: f32 },
    /// Stroke width is negative or not finite.
    InvalidStrokeWidth { width: f32 },
}

impl fmt::Display for CountdownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownError::InvalidInterval { seconds } => {
                write!(f, "invalid countdown interval {seconds}s: must be a positive number of seconds")
            }
            CountdownError::InvalidRadius { radius } => {
                write!(f, "invalid circle radius {radius}: must be finite and non-negative")
            }
            CountdownError::InvalidStrokeWidth { width } => {
                write!(f, "invalid stroke width {width}: must be finite and non-negative")
            }
        }
    }
}

impl std::error::Error for CountdownError {}

/// Rejects radii and stroke widths that cannot describe a circle.
pub(crate) fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

/// Validates a circle radius.
pub fn validate_radius(radius: f32) -> Result<f32, CountdownError> {
    if non_negative(radius) {
        Ok(radius)
    } else {
        Err(CountdownError::InvalidRadius { radius })
    }
}

/// Validates a stroke width.
pub fn validate_stroke_width(width: f32) -> Result<f32, CountdownError> {
    if non_negative(width) {
        Ok(width)
    } else {
        Err(CountdownError::InvalidStrokeWidth { width })
    }
}

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::CountdownError;

/// Accepts only positive, finite intervals (seconds).
pub fn validate_interval(seconds: f64) -> Result<f64, CountdownError> {
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(CountdownError::InvalidInterval { seconds })
    }
}

/// Signed seconds from `base` to `now`; negative when `now` precedes `base`.
pub fn seconds_since(now: SystemTime, base: SystemTime) -> f64 {
    match now.duration_since(base) {
        Ok(ahead) => ahead.as_secs_f64(),
        Err(behind) => -behind.duration().as_secs_f64(),
    }
}

/// Position of `now` inside the cycle of length `interval` seconds anchored at
/// `base`, as a fraction in [0, 1).
///
/// Uses a truncating remainder followed by `abs`, so instants before `base`
/// still report forward-running progress (3 s before the base of a 10 s cycle
/// samples as 0.3).
pub fn sample_progress(now: SystemTime, base: SystemTime, interval: f64) -> Result<f64, CountdownError> {
    let interval = validate_interval(interval)?;
    Ok(fraction_within(seconds_since(now, base), interval))
}

/// `interval` must already be validated.
fn fraction_within(elapsed: f64, interval: f64) -> f64 {
    let fraction = (elapsed % interval).abs() / interval;

    // The remainder is below `interval`, but the division can round up to 1.
    if fraction < 1.0 { fraction } else { 0.0 }
}

/// Validated interval plus an optional base instant.
///
/// Without a base, cycles are measured from the Unix epoch so every sampler
/// with the same interval is in phase with wall-clock time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProgressSampler {
    interval: f64,
    base: Option<SystemTime>,
}

impl ProgressSampler {
    pub fn new(interval: f64, base: Option<SystemTime>) -> Result<Self, CountdownError> {
        Ok(Self { interval: validate_interval(interval)?, base })
    }

    #[inline]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    #[inline]
    pub fn base(&self) -> SystemTime {
        self.base.unwrap_or(UNIX_EPOCH)
    }

    #[inline]
    pub fn sample(&self, now: SystemTime) -> f64 {
        fraction_within(seconds_since(now, self.base()), self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    fn t0() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(1_700_000_000)
    }

    fn at(base: SystemTime, secs: f64) -> SystemTime {
        if secs >= 0.0 {
            base + Duration::from_secs_f64(secs)
        } else {
            base - Duration::from_secs_f64(-secs)
        }
    }

    #[test]
    fn sample_at_base_is_zero() {
        assert_eq!(sample_progress(t0(), t0(), 30.0), Ok(0.0));
    }

    #[test]
    fn halfway_through_thirty_seconds() {
        let f = sample_progress(at(t0(), 15.0), t0(), 30.0).unwrap();
        assert!((f - 0.5).abs() < 1e-9);
        assert!((f * 360.0 - 180.0).abs() < 1e-6);
    }

    #[test]
    fn exact_boundary_wraps_to_zero() {
        assert_eq!(sample_progress(at(t0(), 10.0), t0(), 10.0), Ok(0.0));
    }

    #[test]
    fn just_before_boundary_stays_below_one() {
        let now = at(t0(), 10.0 - 1e-6);
        let f = sample_progress(now, t0(), 10.0).unwrap();
        assert!(f > 0.999 && f < 1.0, "{f}");
        assert_eq!(ProgressSampler::new(10.0, Some(t0())).unwrap().sample(now), f);
    }

    #[test]
    fn periodic_in_whole_intervals() {
        let interval = 7.5;
        for k in [1u32, 2, 5, 40] {
            for t in [0.0, 1.25, 3.2, 7.4] {
                let shifted = sample_progress(at(t0(), k as f64 * interval + t), t0(), interval).unwrap();
                let plain = sample_progress(at(t0(), t), t0(), interval).unwrap();
                assert!((shifted - plain).abs() < 1e-6, "k={k} t={t}: {shifted} vs {plain}");
            }
        }
    }

    #[test]
    fn always_in_unit_range() {
        for i in -500..500 {
            let f = sample_progress(at(t0(), i as f64 * 0.37), t0(), 3.3).unwrap();
            assert!((0.0..1.0).contains(&f), "{f}");
        }
    }

    #[test]
    fn before_base_runs_forward_by_magnitude() {
        let f = sample_progress(at(t0(), -3.0), t0(), 10.0).unwrap();
        assert!((f - 0.3).abs() < 1e-9);
    }

    #[test]
    fn non_positive_interval_is_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = sample_progress(t0(), t0(), bad).unwrap_err();
            assert!(matches!(err, CountdownError::InvalidInterval { .. }));
        }
    }

    #[test]
    fn seconds_since_is_signed() {
        assert!((seconds_since(at(t0(), 2.5), t0()) - 2.5).abs() < 1e-9);
        assert!((seconds_since(at(t0(), -2.5), t0()) + 2.5).abs() < 1e-9);
    }

    #[test]
    fn sampler_without_base_uses_epoch() {
        let s = ProgressSampler::new(60.0, None).unwrap();
        let now = UNIX_EPOCH + Duration::from_secs(3600 + 45);
        assert!((s.sample(now) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn sampler_matches_free_function() {
        let s = ProgressSampler::new(12.0, Some(t0())).unwrap();
        let now = at(t0(), 100.5);
        assert_eq!(Ok(s.sample(now)), sample_progress(now, t0(), 12.0));
    }

    #[test]
    fn sampler_rejects_zero_interval() {
        assert_eq!(
            ProgressSampler::new(0.0, None),
            Err(CountdownError::InvalidInterval { seconds: 0.0 })
        );
    }
}

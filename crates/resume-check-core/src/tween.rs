//! Numeric tweening over a fixed duration
//!
//! A [`Tween`] knows nothing about the element it drives. The caller supplies
//! timestamps (milliseconds, e.g. from `performance.now()`) and writes the
//! sampled value wherever it belongs.

/// Maps linear progress in `[0, 1]` to eased progress.
pub type Easing = fn(f64) -> f64;

/// `1 - (1 - t)^3`
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Counter from 0 to `to` with cubic ease-out.
    pub fn counter(to: f64, start_ms: f64, duration_ms: f64) -> Self {
        Self::new(0.0, to, start_ms, duration_ms, ease_out_cubic)
    }

    /// Elapsed fraction, clamped to `[0, 1]`. A zero duration is complete at once.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value(&self, now_ms: f64) -> f64 {
        let eased = (self.easing)(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }

    /// Rounded value and whether the tween has reached its end.
    pub fn sample(&self, now_ms: f64) -> (i64, bool) {
        (
            self.value(now_ms).round() as i64,
            self.progress(now_ms) >= 1.0,
        )
    }
}

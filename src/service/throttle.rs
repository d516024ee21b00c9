use std::time::Duration;
use tokio::time::Instant;

/// How long a repeated error stays quiet after being reported.
#[derive(Clone, Debug, PartialEq)]
pub enum ThrottleWindow {
    /// The same window after every report.
    Fixed(Duration),
    /// The window grows for each repeat of the same error: `base * factor^repeats`, capped at `max`.
    /// A different error starts over from `base`.
    Exponential {
        base: Duration,
        factor: f64,
        max: Duration,
    },
}

impl Default for ThrottleWindow {
    fn default() -> Self {
        ThrottleWindow::Fixed(Duration::from_secs(10))
    }
}

impl ThrottleWindow {
    fn after_repeats(&self, repeats: u32) -> Duration {
        match self {
            ThrottleWindow::Fixed(d) => *d,
            ThrottleWindow::Exponential { base, factor, max } => {
                let exp = i32::try_from(repeats).unwrap_or(i32::MAX);
                // a negative factor flips the sign on odd repeats
                let secs = (base.as_secs_f64() * factor.powi(exp)).max(0.0);
                if secs.is_finite() && secs < max.as_secs_f64() {
                    Duration::from_secs_f64(secs)
                } else {
                    *max
                }
            }
        }
    }
}

/// Decides whether a failure should reach the consumer or only the log.
///
/// Keyed on the error signature: a new signature is always reported; the same
/// signature again is reported only once its window has elapsed.
#[derive(Debug, Default)]
pub struct ErrorThrottle {
    window: ThrottleWindow,
    last_signature: Option<String>,
    last_reported_at: Option<Instant>,
    repeats: u32,
}

impl ErrorThrottle {
    pub fn new(window: ThrottleWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// Record a failure seen at `now`; returns `true` if it should be reported.
    pub fn should_report(&mut self, signature: &str, now: Instant) -> bool {
        let same = self.last_signature.as_deref() == Some(signature);

        if same {
            let window = self.window.after_repeats(self.repeats);
            let elapsed = self
                .last_reported_at
                .map(|at| now.saturating_duration_since(at))
                .unwrap_or(Duration::MAX);
            if elapsed <= window {
                return false;
            }
            self.repeats = self.repeats.saturating_add(1);
        } else {
            self.last_signature = Some(signature.to_string());
            self.repeats = 0;
        }

        self.last_reported_at = Some(now);
        true
    }

    pub fn reset(&mut self) {
        self.last_signature = None;
        self.last_reported_at = None;
        self.repeats = 0;
    }
}

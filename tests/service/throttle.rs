use std::time::Duration;
use tokio::time::Instant;
use ytchat_rs::{ErrorThrottle, ThrottleWindow};

const SIG: &str = "NetworkError|HTTP error: connection refused";

#[test]
fn same_error_is_quiet_inside_the_window() {
    let mut t = ErrorThrottle::new(ThrottleWindow::default());
    let t0 = Instant::now();

    assert!(t.should_report(SIG, t0));
    assert!(!t.should_report(SIG, t0 + Duration::from_secs(5)));
    assert!(t.should_report(SIG, t0 + Duration::from_secs(15)));
    // the window restarts from the last report
    assert!(!t.should_report(SIG, t0 + Duration::from_secs(20)));
}

#[test]
fn a_different_error_is_reported_at_once() {
    let mut t = ErrorThrottle::new(ThrottleWindow::Fixed(Duration::from_secs(10)));
    let t0 = Instant::now();

    assert!(t.should_report(SIG, t0));
    assert!(t.should_report("MalformedResponse|Malformed chat response: x", t0 + Duration::from_secs(1)));
    // and switching back counts as new too
    assert!(t.should_report(SIG, t0 + Duration::from_secs(2)));
}

#[test]
fn reset_forgets_history() {
    let mut t = ErrorThrottle::new(ThrottleWindow::default());
    let t0 = Instant::now();

    assert!(t.should_report(SIG, t0));
    t.reset();
    assert!(t.should_report(SIG, t0 + Duration::from_secs(1)));
}

#[test]
fn exponential_window_grows_per_repeat() {
    let mut t = ErrorThrottle::new(ThrottleWindow::Exponential {
        base: Duration::from_secs(10),
        factor: 2.0,
        max: Duration::from_secs(30),
    });
    let t0 = Instant::now();
    let at = |s: u64| t0 + Duration::from_secs(s);

    assert!(t.should_report(SIG, at(0)));
    // window 10s
    assert!(!t.should_report(SIG, at(9)));
    assert!(t.should_report(SIG, at(11)));
    // window 20s
    assert!(!t.should_report(SIG, at(30)));
    assert!(t.should_report(SIG, at(32)));
    // window capped at 30s instead of 40s
    assert!(t.should_report(SIG, at(63)));

    // a new signature starts from base again
    assert!(t.should_report("other", at(64)));
    assert!(t.should_report("other", at(75)));
}

#[test]
fn negative_factor_clamps_to_an_empty_window() {
    let mut t = ErrorThrottle::new(ThrottleWindow::Exponential {
        base: Duration::from_secs(10),
        factor: -2.0,
        max: Duration::from_secs(30),
    });
    let t0 = Instant::now();
    let at = |s: u64| t0 + Duration::from_secs(s);

    assert!(t.should_report(SIG, at(0)));
    // factor^0 = 1: the first window is still the 10s base
    assert!(!t.should_report(SIG, at(5)));
    assert!(t.should_report(SIG, at(11)));
    // factor^1 < 0: clamped to zero, so any later instant reports
    assert!(t.should_report(SIG, at(12)));
    // factor^2 = 4: 40s, capped at 30s
    assert!(!t.should_report(SIG, at(40)));
    assert!(t.should_report(SIG, at(43)));
}

use super::*;

fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

#[test]
fn pulse_starts_idle() {
    let pulse = AnimationPulse::new();
    assert!(!pulse.is_animating());
    assert!(pulse.next_deadline().is_none());
    assert_eq!(pulse.duration(), millis(275));
}

#[test]
fn pulse_sets_flag_synchronously() {
    let mut pulse = AnimationPulse::new();
    let now = Instant::now();
    pulse.pulse(now);
    assert!(pulse.is_animating());
    assert_eq!(pulse.next_deadline(), Some(now + millis(275)));
}

#[test]
fn flag_clears_exactly_at_deadline() {
    let mut pulse = AnimationPulse::new();
    let t0 = Instant::now();
    pulse.pulse(t0);

    assert!(!pulse.tick(t0 + millis(274)));
    assert!(pulse.is_animating());

    assert!(pulse.tick(t0 + millis(275)));
    assert!(!pulse.is_animating());
    assert!(pulse.next_deadline().is_none());

    // Nothing left to clear.
    assert!(!pulse.tick(t0 + millis(600)));
}

#[test]
fn second_pulse_reschedules_instead_of_duplicating() {
    let mut pulse = AnimationPulse::new();
    let t0 = Instant::now();
    let first = pulse.pulse(t0);
    let second = pulse.pulse(t0 + millis(200));
    assert_ne!(first, second);

    // The first window would have ended here; the flag must survive it.
    assert!(!pulse.tick(t0 + millis(275)));
    assert!(pulse.is_animating());

    assert!(pulse.tick(t0 + millis(475)));
    assert!(!pulse.is_animating());
}

#[test]
fn stale_timer_callbacks_are_ignored() {
    let mut pulse = AnimationPulse::new();
    let t0 = Instant::now();
    let first = pulse.pulse(t0);
    let second = pulse.pulse(t0 + millis(100));

    assert!(!pulse.fire(first));
    assert!(pulse.is_animating());
    assert_eq!(pulse.pending_handle(), Some(second));

    assert!(pulse.fire(second));
    assert!(!pulse.is_animating());
    assert!(!pulse.fire(second));
}

#[test]
fn cancel_turns_flag_off() {
    let mut pulse = AnimationPulse::with_duration(millis(50));
    pulse.pulse(Instant::now());
    pulse.cancel();
    assert!(!pulse.is_animating());
    assert!(pulse.pending_handle().is_none());
}

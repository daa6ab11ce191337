// Host-side tests for the pulse decay schedule on a virtual clock.

use std::time::Duration;
use vektor_web::core::{Pulse, PulseLevel};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn idle_pulse_is_off() {
    let mut p = Pulse::default();
    assert_eq!(p.level(), PulseLevel::Off);
    assert!(!p.poll(ms(10_000)));
    assert_eq!(p.intensity(), 0.0);
}

#[test]
fn trigger_decays_to_half_then_off() {
    let mut p = Pulse::default();
    p.trigger(ms(0));
    assert_eq!(p.intensity(), 1.0);
    assert!(!p.poll(ms(199)));
    assert_eq!(p.intensity(), 1.0);
    assert!(p.poll(ms(200)));
    assert_eq!(p.intensity(), 0.5);
    assert!(!p.poll(ms(599)));
    assert_eq!(p.intensity(), 0.5);
    assert!(p.poll(ms(600)));
    assert_eq!(p.intensity(), 0.0);
    assert!(!p.is_decaying());
}

#[test]
fn late_poll_jumps_straight_to_off() {
    let mut p = Pulse::default();
    p.trigger(ms(100));
    assert!(p.poll(ms(5_000)));
    assert_eq!(p.level(), PulseLevel::Off);
}

#[test]
fn retrigger_restarts_the_schedule() {
    let mut p = Pulse::default();
    p.trigger(ms(0));
    p.poll(ms(300));
    assert_eq!(p.level(), PulseLevel::Half);

    p.trigger(ms(400));
    assert_eq!(p.level(), PulseLevel::Full);
    // The first trigger's 600ms mark no longer applies
    p.poll(ms(599));
    assert_eq!(p.level(), PulseLevel::Full);
    p.poll(ms(600));
    assert_eq!(p.level(), PulseLevel::Half);
    p.poll(ms(999));
    assert_eq!(p.level(), PulseLevel::Half);
    p.poll(ms(1_000));
    assert_eq!(p.level(), PulseLevel::Off);
}

#[test]
fn intensity_is_always_one_of_three_levels() {
    let mut p = Pulse::default();
    p.trigger(ms(0));
    for t in (0..1_000).step_by(7) {
        p.poll(ms(t));
        let v = p.intensity();
        assert!(v == 0.0 || v == 0.5 || v == 1.0, "unexpected intensity {v}");
    }
}

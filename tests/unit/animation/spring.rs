use super::*;

#[test]
fn spring_at_rest_does_not_move() {
    let mut s = Spring::new(1.0, SpringConfig::HOVER);
    assert!(s.is_at_rest());
    assert_eq!(s.step(0.016), 1.0);
}

#[test]
fn spring_converges_to_target() {
    let mut s = Spring::new(1.0, SpringConfig::HOVER);
    s.set_target(1.2);
    let mut overshoot = false;
    for _ in 0..240 {
        let v = s.step(1.0 / 60.0);
        if v > 1.2 {
            overshoot = true;
        }
    }
    // Friction 10 against tension 300 is underdamped.
    assert!(overshoot);
    assert!(s.is_at_rest());
    assert_eq!(s.value(), 1.2);
}

#[test]
fn spring_is_independent_of_frame_grouping_on_whole_millis() {
    let mut a = Spring::new(1.0, SpringConfig::HOVER);
    let mut b = Spring::new(1.0, SpringConfig::HOVER);
    a.set_target(1.2);
    b.set_target(1.2);
    a.step(0.004);
    for _ in 0..4 {
        b.step(0.001);
    }
    assert!((a.value() - b.value()).abs() < 1e-12);
}

#[test]
fn sub_millisecond_regrouping_only_drifts_slightly() {
    let mut a = Spring::new(1.0, SpringConfig::HOVER);
    let mut b = Spring::new(1.0, SpringConfig::HOVER);
    a.set_target(1.2);
    b.set_target(1.2);
    a.step(0.0015);
    b.step(0.001);
    b.step(0.0005);
    let drift = (a.value() - b.value()).abs();
    assert!(drift > 0.0);
    assert!(drift < 1e-5);
}

#[test]
fn long_or_invalid_deltas_are_handled() {
    let mut s = Spring::new(1.0, SpringConfig::HOVER);
    s.set_target(2.0);
    assert_eq!(s.step(f64::NAN), 1.0);
    assert_eq!(s.step(-1.0), 1.0);
    assert_eq!(s.step(5.0), 2.0);
    assert!(s.is_at_rest());
}

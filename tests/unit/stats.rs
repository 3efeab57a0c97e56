use super::*;

#[test]
fn groups_thousands() {
    assert_eq!(format_display(0, 0, ""), "0");
    assert_eq!(format_display(999, 0, ""), "999");
    assert_eq!(format_display(1000, 0, ""), "1,000");
    assert_eq!(format_display(10_000, 0, "+"), "10,000+");
    assert_eq!(format_display(1_234_567, 0, ""), "1,234,567");
}

#[test]
fn fixed_decimals_are_zero_padded() {
    assert_eq!(format_display(999, 1, "%"), "99.9%");
    assert_eq!(format_display(5, 2, ""), "0.05");
    assert_eq!(format_display(1_234_567, 1, ""), "123,456.7");
}

#[test]
fn landing_stats_finish_on_their_labels() {
    let shown: Vec<String> = landing_stats()
        .iter()
        .map(|s| {
            let mut c = s.animator().unwrap();
            c.sample(0.0);
            let last = c.sample(s.duration_ms).unwrap();
            s.display(last)
        })
        .collect();
    assert_eq!(shown, vec!["99.9%", "10,000+", "50M+", "24/7"]);
}

#[test]
fn scaled_target_rounds_to_display_units() {
    let s = StatCounter::new("x", 99.9, 1, "%");
    assert_eq!(s.scaled_target().unwrap(), 999);
    let s = StatCounter::new("x", 0.125, 2, "");
    assert_eq!(s.scaled_target().unwrap(), 13);
}

#[test]
fn invalid_stats_are_rejected() {
    assert!(StatCounter::new("neg", -1.0, 0, "").animator().is_err());
    assert!(StatCounter::new("nan", f64::NAN, 0, "").animator().is_err());
    assert!(StatCounter::new("dec", 1.0, 12, "").animator().is_err());
}

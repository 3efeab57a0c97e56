use super::*;

fn carrier(params: FloatParams, offset: f64) -> FloatCarrier {
    FloatCarrier { params, offset }
}

#[test]
fn zero_speed_is_identity() {
    let c = carrier(FloatParams::new(0.0, 1.0, 2.0), 123.0);
    assert!(c.transform(3.5).is_identity());
}

#[test]
fn bob_and_rock_stay_within_intensity_bounds() {
    let c = carrier(FloatParams::new(2.0, 1.0, 2.0), 0.0);
    for i in 0..500 {
        let t = c.transform(i as f64 * 0.05);
        assert!(t.rotation.x.abs() <= 1.0 / 8.0 + 1e-12);
        assert!(t.rotation.y.abs() <= 1.0 / 8.0 + 1e-12);
        assert!(t.rotation.z.abs() <= 1.0 / 20.0 + 1e-12);
        assert!(t.position.y.abs() <= 0.2 + 1e-12);
        assert_eq!(t.position.x, 0.0);
        assert_eq!(t.scale, Vec3::ONE);
    }
}

#[test]
fn offset_shifts_phase() {
    let a = carrier(FloatParams::default(), 0.0);
    let b = carrier(FloatParams::default(), 4.0);
    assert_eq!(a.transform(4.0), b.transform(0.0));
    assert_ne!(a.transform(0.0), b.transform(0.0));
}

#[test]
fn floating_range_remaps_height() {
    let p = FloatParams {
        floating_range: [0.0, 0.2],
        ..FloatParams::default()
    };
    let c = carrier(p, 0.0);
    // sin(0) = 0 maps to the middle of the range.
    assert!((c.transform(0.0).position.y - 0.1).abs() < 1e-12);
}

#[test]
fn build_samples_offset_once_from_rng() {
    let mut r1 = Rng64::new(9);
    let mut r2 = Rng64::new(9);
    let a = FloatCarrier::build(FloatParams::default(), &mut r1);
    let b = FloatCarrier::build(FloatParams::default(), &mut r2);
    assert_eq!(a, b);
    assert!((0.0..OFFSET_SPAN).contains(&a.offset));
    assert_eq!(a.transform(1.25), a.transform(1.25));
}

#[test]
fn rejects_non_finite_params() {
    assert!(FloatParams::new(f64::NAN, 1.0, 1.0).validate().is_err());
    assert!(FloatParams::default().validate().is_ok());
}

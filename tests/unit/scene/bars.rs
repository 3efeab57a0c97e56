use super::*;

fn ring(seed: u64) -> RadialBars {
    RadialBars::build(RadialBarsParams::default(), &mut Rng64::new(seed))
}

#[test]
fn default_ring_has_twenty_bars_on_radius() {
    let r = ring(1);
    assert_eq!(r.len(), 20);
    for b in &r.bars {
        let d = (b.position.x * b.position.x + b.position.z * b.position.z).sqrt();
        assert!((d - 1.5).abs() < 1e-12);
        assert_eq!(b.position.y, 0.0);
        assert!((0.5..2.5).contains(&b.height));
    }
    assert_eq!(r.bars[0].position, Vec3::new(1.5, 0.0, 0.0));
}

#[test]
fn heights_are_fixed_per_seed() {
    assert_eq!(ring(7), ring(7));
    assert_ne!(ring(7).bars[0].height, ring(8).bars[0].height);
}

#[test]
fn scale_follows_height_plus_phase_shifted_sine() {
    let r = ring(3);
    let t = 1.75;
    for (i, b) in r.bars.iter().enumerate() {
        let expected = b.height + 0.3 * (t + i as f64).sin();
        assert_eq!(r.bar_scale(i, t), Some(expected));
    }
    assert_eq!(r.bar_scale(20, t), None);
}

#[test]
fn bars_desynchronize_even_with_equal_heights() {
    let mut r = ring(11);
    for b in &mut r.bars {
        b.height = 1.0;
    }
    let mut found = false;
    for k in 0..50 {
        let t = k as f64 * 0.1;
        if r.bar_scale(0, t) != r.bar_scale(1, t) {
            found = true;
            break;
        }
    }
    assert!(found);

    // Distinct phases give distinct perturbations at the same instant.
    let s = r.bar_scales(0.3);
    assert_ne!(s[2], s[5]);
}

#[test]
fn fill_reuses_buffer_and_matches_bar_scales() {
    let r = ring(5);
    let mut buf = vec![0.0; 3];
    r.fill_bar_scales(2.0, &mut buf);
    assert_eq!(buf, r.bar_scales(2.0));
    assert_eq!(buf.len(), 20);
}

#[test]
fn zero_count_is_invalid() {
    let p = RadialBarsParams {
        count: 0,
        ..RadialBarsParams::default()
    };
    assert!(p.validate().is_err());
    assert!(RadialBarsParams::default().validate().is_ok());
}

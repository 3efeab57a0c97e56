use super::*;

#[test]
fn vec3_axis_access_roundtrips() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.get(Axis::Y), 2.0);
    let w = v.with(Axis::Z, -1.0);
    assert_eq!(w, Vec3::new(1.0, 2.0, -1.0));
    assert_eq!(v + w, Vec3::new(2.0, 4.0, 2.0));
    assert_eq!(v * 2.0, Vec3::new(2.0, 4.0, 6.0));
}

#[test]
fn transform_to_cols_identity_and_translation() {
    let t = Transform3D::default();
    assert!(t.is_identity());
    #[rustfmt::skip]
    let identity = [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ];
    assert_eq!(t.to_cols_array(), identity);

    let t = Transform3D {
        position: Vec3::new(4.0, 1.0, -2.0),
        ..Transform3D::default()
    };
    let m = t.to_cols_array();
    assert_eq!(&m[12..15], &[4.0, 1.0, -2.0]);
}

#[test]
fn transform_rotation_about_y_moves_x_axis_towards_minus_z() {
    let t = Transform3D {
        rotation: Vec3::new(0.0, std::f64::consts::FRAC_PI_2, 0.0),
        ..Transform3D::default()
    };
    let m = t.to_cols_array();
    // First column is the image of +X.
    assert!(m[0].abs() < 1e-12);
    assert!(m[1].abs() < 1e-12);
    assert!((m[2] + 1.0).abs() < 1e-12);
}

fn assert_close(a: Vec3, b: Vec3) {
    for (x, y) in a.as_array().into_iter().zip(b.as_array()) {
        assert!((x - y).abs() < 1e-12, "{a:?} vs {b:?}");
    }
}

#[test]
fn compose_with_unrotated_parent_scales_and_offsets() {
    let parent = Transform3D {
        position: Vec3::new(1.0, 0.0, 0.0),
        scale: Vec3::splat(2.0),
        ..Transform3D::default()
    };
    let child = Transform3D {
        rotation: Vec3::new(0.1, 0.2, 0.3),
        position: Vec3::new(0.0, 0.5, 0.0),
        scale: Vec3::ONE,
    };
    let out = parent.compose(&child);
    assert_eq!(out.rotation, child.rotation);
    assert_eq!(out.position, Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(out.scale, Vec3::splat(2.0));
}

#[test]
fn compose_rotates_child_position_and_adds_angles_on_one_axis() {
    let parent = Transform3D {
        rotation: Vec3::new(0.0, std::f64::consts::FRAC_PI_2, 0.0),
        ..Transform3D::default()
    };
    let child = Transform3D {
        rotation: Vec3::new(0.0, 0.25, 0.0),
        position: Vec3::new(1.0, 0.0, 0.0),
        scale: Vec3::ONE,
    };
    let out = parent.compose(&child);
    assert_close(out.position, Vec3::new(0.0, 0.0, -1.0));
    // Past +pi/2 about Y, XYZ Euler re-expresses the rotation with X and Z flipped by pi.
    let direct = Transform3D {
        rotation: out.rotation,
        ..Transform3D::default()
    }
    .to_cols_array();
    let expected = Transform3D {
        rotation: Vec3::new(0.0, std::f64::consts::FRAC_PI_2 + 0.25, 0.0),
        ..Transform3D::default()
    }
    .to_cols_array();
    for (a, b) in direct.iter().zip(expected.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn compose_matches_matrix_product() {
    let parent = Transform3D {
        rotation: Vec3::new(0.05, -0.1, 0.02),
        position: Vec3::new(0.0, 0.3, 0.0),
        scale: Vec3::ONE,
    };
    let child = Transform3D {
        rotation: Vec3::new(0.2, 1.1, -0.4),
        position: Vec3::new(4.0, 1.0, -2.0),
        scale: Vec3::ONE,
    };
    let got = parent.compose(&child).to_cols_array();

    let p = parent.to_cols_array();
    let c = child.to_cols_array();
    for col in 0..4 {
        for row in 0..4 {
            let want: f64 = (0..4).map(|k| p[k * 4 + row] * c[col * 4 + k]).sum();
            assert!((got[col * 4 + row] - want).abs() < 1e-12);
        }
    }
}

#[test]
fn duration_helpers_agree() {
    let d = std::time::Duration::from_millis(1500);
    assert_eq!(duration_secs(d), 1.5);
    assert_eq!(duration_millis(d), 1500.0);
}

use super::*;
use crate::scene::hero::{AI_CORE, DATA_RING, SHIELD, STARFIELD, hero_scene_def};

fn scene() -> Scene {
    Scene::build(&hero_scene_def(1234)).unwrap()
}

#[test]
fn transform_is_bit_reproducible() {
    let scene = scene();
    for obj in scene.objects() {
        for i in 0..200 {
            let t = i as f64 * 0.0371;
            for hovered in [false, true] {
                let a = compute_frame_transform(obj, t, hovered);
                let b = compute_frame_transform(obj, t, hovered);
                assert_eq!(a.rotation.x.to_bits(), b.rotation.x.to_bits());
                assert_eq!(a.rotation.y.to_bits(), b.rotation.y.to_bits());
                assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
                assert_eq!(a, b);
                assert_eq!(
                    compute_object_frame(obj, t, hovered),
                    compute_object_frame(obj, t, hovered)
                );
            }
        }
    }
}

#[test]
fn core_follows_its_motion_rule() {
    let scene = scene();
    let core = scene.get(AI_CORE).unwrap();
    let t = 3.0;
    let tr = compute_object_frame(core, t, false).transform;
    assert_eq!(tr.rotation.x, 0.1 * (0.5 * t).sin());
    assert_eq!(tr.rotation.y, 0.6 * t);
    assert_eq!(tr.position.y, 0.1 * t.sin());
    assert_eq!(tr.scale, Vec3::ONE);
}

#[test]
fn shield_bobs_around_its_base_height() {
    let scene = scene();
    let shield = scene.get(SHIELD).unwrap();
    let tr = compute_object_frame(shield, 0.0, false).transform;
    assert_eq!(tr.position, Vec3::new(4.0, 1.15, -2.0));
    assert_eq!(tr.rotation.y, 0.0);
}

#[test]
fn scene_transform_nests_part_in_carrier() {
    let scene = scene();
    let shield = scene.get(SHIELD).unwrap();
    let t = 0.8;
    let f = compute_object_frame(shield, t, false);
    let carrier = f.carrier.unwrap();
    assert_eq!(compute_frame_transform(shield, t, false), carrier.compose(&f.transform));
    assert_eq!(f.world_transform(), compute_frame_transform(shield, t, false));
}

#[test]
fn hover_scales_the_whole_group() {
    let scene = scene();
    let core = scene.get(AI_CORE).unwrap();
    let off = compute_frame_transform(core, 1.5, false);
    let on = compute_frame_transform(core, 1.5, true);
    assert_eq!(on.rotation, off.rotation);
    assert_eq!(on.position, off.position * 1.2);
    assert_eq!(on.scale, Vec3::splat(1.2));

    // The local part is untouched; the multiplier sits on the group around the carrier.
    let f_off = compute_object_frame(core, 1.5, false);
    let f_on = compute_object_frame(core, 1.5, true);
    assert_eq!(f_on.transform, f_off.transform);
    assert_eq!(f_on.carrier, f_off.carrier);
    assert_eq!(f_off.group_scale, 1.0);
    assert_eq!(f_on.group_scale, 1.2);
}

#[test]
fn halo_and_inner_disc_ride_only_the_carrier() {
    let scene = scene();
    let t = 1.0;

    let shield = compute_object_frame(scene.get(SHIELD).unwrap(), t, false);
    assert_eq!(shield.transform.rotation.y, 0.2 * (0.3 * t).sin());
    let inner = shield.rest.unwrap();
    assert_eq!(inner.rotation, Vec3::ZERO);
    assert_eq!(inner.position, Vec3::new(4.0, 1.0, -2.0));
    let carrier = shield.carrier.unwrap();
    assert_eq!(shield.world_rest_transform(), Some(carrier.compose(&inner)));

    let core = compute_object_frame(scene.get(AI_CORE).unwrap(), t, true);
    assert_eq!(core.transform.rotation.y, 0.6 * t);
    let halo = core.rest.unwrap();
    assert_eq!(halo.rotation, Vec3::ZERO);
    assert_eq!(halo.position, Vec3::ZERO);
    let world = core.world_rest_transform().unwrap();
    let carrier = core.carrier.unwrap();
    for (a, b) in world.rotation.as_array().into_iter().zip(carrier.rotation.as_array()) {
        assert!((a - b).abs() < 1e-12);
    }
    assert_eq!(world.scale, Vec3::splat(1.2));
}

#[test]
fn only_objects_with_fixed_parts_report_rest() {
    let scene = scene();
    for (id, has_rest) in [
        (STARFIELD, false),
        (AI_CORE, true),
        (SHIELD, true),
        (DATA_RING, false),
    ] {
        let f = compute_object_frame(scene.get(id).unwrap(), 0.5, false);
        assert_eq!(f.rest.is_some(), has_rest, "{id}");
    }
}

#[test]
fn hovering_one_object_leaves_others_untouched() {
    let scene = scene();
    let mut hover = HoverStates::for_scene(&scene);
    let t = 2.25;
    let before = compute_scene_frame(&scene, t, &hover);

    hover.set_by_id(&scene, AI_CORE, true).unwrap();
    let after = compute_scene_frame(&scene, t, &hover);

    for (b, a) in before.iter().zip(&after) {
        if b.id == AI_CORE {
            assert_ne!(a.group_scale, b.group_scale);
            assert!(a.hovered);
        } else {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn ring_reports_desynchronized_bar_scales() {
    let scene = scene();
    let ring = scene.get(DATA_RING).unwrap();
    let bars = ring.radial_bars().unwrap();

    let mut found = false;
    for k in 0..100 {
        let t = k as f64 * 0.05;
        let f = compute_object_frame(ring, t, false);
        assert_eq!(f.bar_scales.len(), 20);
        // Compare the time-dependent parts so random heights cannot mask equal phases.
        let d0 = f.bar_scales[0] - bars.bars[0].height;
        let d1 = f.bar_scales[1] - bars.bars[1].height;
        if d0 != d1 {
            found = true;
        }
    }
    assert!(found);
}

#[test]
fn static_objects_have_no_carrier_or_bars() {
    let scene = scene();
    let stars = scene.get(STARFIELD).unwrap();
    let f = compute_object_frame(stars, 10.0, false);
    assert!(f.carrier.is_none());
    assert!(f.bar_scales.is_empty());
    assert!(f.transform.is_identity());

    let core = compute_object_frame(scene.get(AI_CORE).unwrap(), 10.0, false);
    assert!(core.carrier.is_some());
}

#[test]
fn hover_states_reject_unknown_ids() {
    let scene = scene();
    let mut hover = HoverStates::for_scene(&scene);
    assert!(hover.set_by_id(&scene, "nope", true).is_err());
    assert!(hover.set(99, true).is_err());
    assert!(hover.set(0, true).unwrap());
    assert!(!hover.set(0, true).unwrap());
    assert!(hover.any());
    hover.clear();
    assert!(!hover.any());
}

use super::*;
use crate::scene::model::Scene;

#[test]
fn hero_table_builds() {
    let scene = Scene::build(&hero_scene_def(0)).unwrap();
    let ids: Vec<&str> = scene.objects().iter().map(|o| o.id()).collect();
    assert_eq!(ids, vec![STARFIELD, AI_CORE, SHIELD, DATA_RING, SPARKLE_FIELD]);
}

#[test]
fn brand_colors_parse() {
    for s in ["#3B82F6", "#60A5FA", "#10B981", "#065F46", "#34D399"] {
        assert!(Color::hex(s).is_ok(), "{s}");
        assert_ne!(hex(s), Color::WHITE);
    }
}

#[test]
fn only_the_core_reacts_to_hover() {
    let def = hero_scene_def(0);
    for o in &def.objects {
        if o.id == AI_CORE {
            assert_eq!(o.hover_scale, 1.2);
        } else {
            assert_eq!(o.hover_scale, 1.0);
        }
    }
}

#[test]
fn data_ring_uses_twenty_bars() {
    let def = hero_scene_def(0);
    let ring = def.objects.iter().find(|o| o.id == DATA_RING).unwrap();
    match &ring.shape {
        ShapeDef::RadialBars(p) => assert_eq!(p.count, 20),
        _ => panic!("data ring must be radial bars"),
    }
}

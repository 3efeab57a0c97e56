use super::*;
use crate::scene::hero::AI_CORE;
use crate::session::config::SessionConfig;
use crate::session::motion_session::{FrameDriven, MotionSession};
use std::time::Duration;

fn frame_at(ms: u64, hover: bool) -> FrameOutput {
    let mut s = MotionSession::new(&SessionConfig::default()).unwrap();
    s.mount_stats().unwrap();
    if hover {
        s.pointer_enter(AI_CORE).unwrap();
    }
    s.on_frame(Duration::ZERO);
    s.on_frame(Duration::from_millis(ms))
}

#[test]
fn identical_frames_hash_identically() {
    let a = fingerprint_frame(&frame_at(1234, false));
    let b = fingerprint_frame(&frame_at(1234, false));
    assert_eq!(a, b);
}

#[test]
fn time_hover_and_counters_all_feed_the_hash() {
    let base = frame_at(1234, false);
    let fp = fingerprint_frame(&base);

    assert_ne!(fp, fingerprint_frame(&frame_at(1235, false)));
    assert_ne!(fp, fingerprint_frame(&frame_at(1234, true)));

    let mut edited = base.clone();
    edited.counters[0].value += 1;
    assert_ne!(fp, fingerprint_frame(&edited));

    let mut edited = base.clone();
    edited.objects[2].carrier = None;
    assert_ne!(fp, fingerprint_frame(&edited));

    let mut edited = base.clone();
    edited.objects[2].rest = None;
    assert_ne!(fp, fingerprint_frame(&edited));

    let mut edited = base.clone();
    edited.objects[2].group_scale = 1.1;
    assert_ne!(fp, fingerprint_frame(&edited));

    let mut edited = base;
    edited.objects[3].bar_scales.pop();
    assert_ne!(fp, fingerprint_frame(&edited));
}

#[test]
fn display_is_32_hex_digits() {
    let fp = FrameFingerprint { hi: 0xab, lo: 1 };
    assert_eq!(fp.to_string(), "00000000000000ab0000000000000001");
    let s = fingerprint_frame(&frame_at(0, false)).to_string();
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}

use xxhash_rust::xxh3::Xxh3;

use crate::foundation::core::{Transform3D, Vec3};
use crate::scene::frame::ObjectFrame;
use crate::session::motion_session::{CounterFrame, FrameOutput};

const XXH3_SEED: u64 = 0x6372_6564_696f_6d6f;

/// 128-bit digest of one [`FrameOutput`], stable across runs and platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash every value a host would observe for the frame, bit-exact for floats.
pub fn fingerprint_frame(frame: &FrameOutput) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_f64(frame.elapsed_secs);
    h.write_bool(frame.loaded);
    h.write_bool(frame.wants_next_frame);

    h.write_u32(frame.objects.len() as u32);
    for o in &frame.objects {
        write_object(&mut h, o);
    }

    h.write_u32(frame.counters.len() as u32);
    for c in &frame.counters {
        write_counter(&mut h, c);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_vec3(h: &mut StableHasher, v: Vec3) {
    for c in v.as_array() {
        h.write_f64(c);
    }
}

fn write_transform(h: &mut StableHasher, t: &Transform3D) {
    write_vec3(h, t.rotation);
    write_vec3(h, t.position);
    write_vec3(h, t.scale);
}

fn write_opt_transform(h: &mut StableHasher, t: Option<&Transform3D>) {
    match t {
        None => h.write_u8(0),
        Some(t) => {
            h.write_u8(1);
            write_transform(h, t);
        }
    }
}

fn write_object(h: &mut StableHasher, o: &ObjectFrame) {
    h.write_str(&o.id);
    h.write_u8(o.kind.tag());
    h.write_bool(o.hovered);
    h.write_f64(o.group_scale);
    write_opt_transform(h, o.carrier.as_ref());
    write_transform(h, &o.transform);
    write_opt_transform(h, o.rest.as_ref());
    h.write_u32(o.bar_scales.len() as u32);
    for &s in &o.bar_scales {
        h.write_f64(s);
    }
}

fn write_counter(h: &mut StableHasher, c: &CounterFrame) {
    h.write_u32(c.id.0);
    match &c.label {
        None => h.write_u8(0),
        Some(l) => {
            h.write_u8(1);
            h.write_str(l);
        }
    }
    h.write_u64(c.value);
    h.write_str(&c.display);
    h.write_bool(c.finished);
}

#[cfg(test)]
#[path = "../../tests/unit/session/fingerprint.rs"]
mod tests;

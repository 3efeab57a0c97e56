use std::ops::{Add, Mul};

/// Three-component vector used for positions, Euler rotations and scales.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn with(mut self, axis: Axis, v: f64) -> Self {
        match axis {
            Axis::X => self.x = v,
            Axis::Y => self.y = v,
            Axis::Z => self.z = v,
        }
        self
    }

    /// Component-wise product.
    pub fn mul_elem(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }

    pub fn as_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Cartesian axis selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Per-frame object transform handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform3D {
    pub rotation: Vec3, // Euler XYZ, radians
    pub position: Vec3,
    pub scale: Vec3, // default (1,1,1)
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            position: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform3D {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Transform of `child` expressed in the parent space of `self`.
    ///
    /// Exact for uniform parent scale. A parent without rotation keeps the child's Euler angles
    /// bit-for-bit.
    pub fn compose(&self, child: &Transform3D) -> Transform3D {
        let scaled = self.scale.mul_elem(child.position);
        let scale = self.scale.mul_elem(child.scale);
        if self.rotation == Vec3::ZERO {
            return Self {
                rotation: child.rotation,
                position: self.position + scaled,
                scale,
            };
        }
        let r = rotation_matrix(self.rotation);
        Self {
            rotation: euler_xyz(&mat_mul(&r, &rotation_matrix(child.rotation))),
            position: self.position + mat_vec(&r, scaled),
            scale,
        }
    }

    /// Column-major 4x4 matrix `T * R(xyz) * S`, matching the usual WebGL/three.js layout.
    pub fn to_cols_array(self) -> [f64; 16] {
        let (b, a) = self.rotation.x.sin_cos();
        let (d, c) = self.rotation.y.sin_cos();
        let (f, e) = self.rotation.z.sin_cos();
        let (ae, af, be, bf) = (a * e, a * f, b * e, b * f);
        let s = self.scale;
        let p = self.position;

        // Canonical order: T(position) * R(x, then y, then z) * S(scale)
        [
            c * e * s.x,
            (af + be * d) * s.x,
            (bf - ae * d) * s.x,
            0.0,
            -c * f * s.y,
            (ae - bf * d) * s.y,
            (be + af * d) * s.y,
            0.0,
            d * s.z,
            -b * c * s.z,
            a * c * s.z,
            0.0,
            p.x,
            p.y,
            p.z,
            1.0,
        ]
    }
}

type Mat3 = [[f64; 3]; 3];

// Row-major R = Rx * Ry * Rz.
fn rotation_matrix(r: Vec3) -> Mat3 {
    let (b, a) = r.x.sin_cos();
    let (d, c) = r.y.sin_cos();
    let (f, e) = r.z.sin_cos();
    let (ae, af, be, bf) = (a * e, a * f, b * e, b * f);
    [
        [c * e, -c * f, d],
        [af + be * d, ae - bf * d, -b * c],
        [bf - ae * d, be + af * d, a * c],
    ]
}

fn mat_mul(p: &Mat3, q: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, v) in row.iter_mut().enumerate() {
            *v = p[i][0] * q[0][j] + p[i][1] * q[1][j] + p[i][2] * q[2][j];
        }
    }
    out
}

fn mat_vec(m: &Mat3, v: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
        m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
        m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
    )
}

fn euler_xyz(m: &Mat3) -> Vec3 {
    let m13 = m[0][2].clamp(-1.0, 1.0);
    let y = m13.asin();
    if m13.abs() < 0.999_999_9 {
        Vec3::new((-m[1][2]).atan2(m[2][2]), y, (-m[0][1]).atan2(m[0][0]))
    } else {
        // Gimbal lock: fold Z into X.
        Vec3::new(m[2][1].atan2(m[1][1]), y, 0.0)
    }
}

/// Convert a host-provided elapsed duration to seconds.
pub fn duration_secs(d: std::time::Duration) -> f64 {
    d.as_secs_f64()
}

/// Convert a host-provided elapsed duration to milliseconds.
pub fn duration_millis(d: std::time::Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

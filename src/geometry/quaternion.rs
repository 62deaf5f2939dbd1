// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orientation quaternions as stored in the `ORIENTATION` panel field.

use std::f32::consts::FRAC_PI_4;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn length(&self) -> f64 {
        let (x, y, z, w) = (self.x as f64, self.y as f64, self.z as f64, self.w as f64);
        (w * w + x * x + y * y + z * z).sqrt()
    }

    /// Scale to unit length. A zero quaternion is returned unchanged.
    pub fn normalize(self) -> Self {
        let length = self.length() as f32;
        if length == 0.0 {
            return self;
        }
        Self::new(self.x / length, self.y / length, self.z / length, self.w / length)
    }

    /// Hamilton product `self * other`.
    pub fn mul(&self, other: &Quaternion) -> Self {
        let (a, b) = (self, other);
        Self {
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        }
    }

    /// Rotate a quarter turn about the x axis.
    pub fn rotate90(&self) -> Self {
        let q = Quaternion::new(FRAC_PI_4.sin(), 0.0, 0.0, FRAC_PI_4.cos());
        self.mul(&q).normalize()
    }
}

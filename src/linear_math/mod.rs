use glam::{Affine3A, Vec3A};
use std::f32::consts::FRAC_1_SQRT_2;

pub mod obb;

pub trait AffineExt {
    /// Rotates a world-space direction into the transform's local frame.
    fn inv_rotate(&self, in_vec: Vec3A) -> Vec3A;
}

impl AffineExt for Affine3A {
    #[inline]
    fn inv_rotate(&self, in_vec: Vec3A) -> Vec3A {
        self.matrix3.transpose() * in_vec
    }
}

/// Two unit vectors that, together with the unit vector `n`, form an orthonormal basis.
pub fn plane_space(n: Vec3A) -> (Vec3A, Vec3A) {
    if n.z.abs() > FRAC_1_SQRT_2 {
        // choose p in y-z plane
        let a = n.y.mul_add(n.y, n.z * n.z);
        let k = 1. / a.sqrt();
        let p = Vec3A::new(0., -n.z * k, n.y * k);
        (p, Vec3A::new(a * k, -n.x * p.z, n.x * p.y))
    } else {
        // choose p in x-y plane
        let a = n.x.mul_add(n.x, n.y * n.y);
        let k = 1. / a.sqrt();
        let p = Vec3A::new(-n.y * k, n.x * k, 0.);
        (p, Vec3A::new(-n.z * p.y, n.z * p.x, a * k))
    }
}

/// `dir` with its component along the unit vector `axis` removed.
#[inline]
pub fn reject(dir: Vec3A, axis: Vec3A) -> Vec3A {
    dir - axis * dir.dot(axis)
}

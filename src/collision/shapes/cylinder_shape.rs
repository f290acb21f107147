use glam::{Affine3A, Vec3A};

use crate::{
    consts::PARALLEL_THRESHOLD,
    linear_math::{plane_space, reject},
};

/// A solid cylinder whose symmetry axis is its local Y axis.
#[derive(Clone, Debug, PartialEq)]
pub struct CylinderShape {
    radius: f32,
    half_height: f32,
    center: Vec3A,
    axis: Vec3A,
    half_axis: Vec3A,
}

impl CylinderShape {
    #[must_use]
    pub fn new(radius: f32, half_height: f32) -> Self {
        debug_assert!(radius > 0.0, "cylinder radius must be positive, got {radius}");
        debug_assert!(
            half_height > 0.0,
            "cylinder half height must be positive, got {half_height}"
        );

        Self {
            radius,
            half_height,
            center: Vec3A::ZERO,
            axis: Vec3A::Y,
            half_axis: Vec3A::new(0.0, half_height, 0.0),
        }
    }

    #[inline]
    #[must_use]
    pub const fn get_radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    #[must_use]
    pub const fn get_half_height(&self) -> f32 {
        self.half_height
    }

    #[inline]
    #[must_use]
    pub const fn get_center(&self) -> Vec3A {
        self.center
    }

    /// World-space unit symmetry axis.
    #[inline]
    #[must_use]
    pub const fn get_axis(&self) -> Vec3A {
        self.axis
    }

    /// Vector from the center to the center of the top cap.
    #[inline]
    #[must_use]
    pub const fn get_half_axis(&self) -> Vec3A {
        self.half_axis
    }

    pub fn update_world_cache(&mut self, transform: &Affine3A) {
        self.center = transform.translation;
        self.axis = transform.matrix3.y_axis;
        self.half_axis = self.axis * self.half_height;
    }

    pub fn local_get_supporting_vertex(&self, vec: Vec3A) -> Vec3A {
        let y = if vec.y >= 0.0 {
            self.half_height
        } else {
            -self.half_height
        };

        let lateral_sq = vec.x.mul_add(vec.x, vec.z * vec.z);
        if lateral_sq > f32::EPSILON * f32::EPSILON * vec.length_squared() {
            let k = self.radius / lateral_sq.sqrt();
            Vec3A::new(vec.x * k, y, vec.z * k)
        } else {
            // any rim point is extremal, pick the one on local +X
            Vec3A::new(self.radius, y, 0.0)
        }
    }

    /// Unit direction from the axis toward the side point furthest along `dir`.
    #[must_use]
    pub fn get_radial_direction(&self, dir: Vec3A) -> Vec3A {
        let dir = dir.normalize_or_zero();
        if self.axis.dot(dir).abs() > PARALLEL_THRESHOLD {
            return plane_space(self.axis).0;
        }

        reject(dir, self.axis)
            .try_normalize()
            .unwrap_or_else(|| plane_space(self.axis).0)
    }

    /// The side line segment (bottom rim to top rim) furthest along `dir`.
    #[must_use]
    pub fn get_support_segment(&self, dir: Vec3A) -> (Vec3A, Vec3A) {
        let rim_offset = self.get_radial_direction(dir) * self.radius;
        (
            self.center - self.half_axis + rim_offset,
            self.center + self.half_axis + rim_offset,
        )
    }

    /// Center and outward unit normal of the cap facing along `dir`.
    ///
    /// The top cap wins when `dir` is perpendicular to the axis.
    #[must_use]
    pub fn get_cap(&self, dir: Vec3A) -> (Vec3A, Vec3A) {
        if self.axis.dot(dir) >= 0.0 {
            (self.center + self.half_axis, self.axis)
        } else {
            (self.center - self.half_axis, -self.axis)
        }
    }
}

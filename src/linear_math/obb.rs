use glam::{Affine3A, Mat3A, Vec3A};

/// World-space oriented box: the cached form of a transformed box shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obb {
    pub center: Vec3A,
    /// Columns are the world-space face normals of the +X, +Y and +Z faces.
    pub axis: Mat3A,
    pub extent: Vec3A,
}

impl Default for Obb {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Obb {
    pub const DEFAULT: Self = Self {
        center: Vec3A::ZERO,
        axis: Mat3A::IDENTITY,
        extent: Vec3A::ZERO,
    };

    #[inline]
    #[must_use]
    pub fn from_transform(transform: &Affine3A, extent: Vec3A) -> Self {
        Self {
            center: transform.translation,
            axis: transform.matrix3,
            extent,
        }
    }

    #[inline]
    #[must_use]
    pub const fn axes(&self) -> [Vec3A; 3] {
        [self.axis.x_axis, self.axis.y_axis, self.axis.z_axis]
    }

    /// Vectors from the center to the center of the +X, +Y and +Z faces.
    #[inline]
    #[must_use]
    pub fn half_edges(&self) -> [Vec3A; 3] {
        [
            self.axis.x_axis * self.extent.x,
            self.axis.y_axis * self.extent.y,
            self.axis.z_axis * self.extent.z,
        ]
    }

    /// The 8 corners. Bit `i` of a corner's index is set when the corner lies
    /// on the positive side of axis `i`, so corners `k` and `k ^ (1 << i)`
    /// share an edge parallel to axis `i`.
    #[must_use]
    pub fn vertices(&self) -> [Vec3A; 8] {
        let half_edges = self.half_edges();
        std::array::from_fn(|k| {
            half_edges
                .iter()
                .enumerate()
                .fold(self.center, |corner, (i, &half_edge)| {
                    if k & (1 << i) == 0 {
                        corner - half_edge
                    } else {
                        corner + half_edge
                    }
                })
        })
    }

    /// The face whose normal is most (anti)parallel to `dir`, as
    /// `(axis index, sign, cos)` where `sign * axes()[index]` faces along `dir`
    /// and `cos` is that outward normal dotted with `dir`.
    #[must_use]
    pub fn find_face(&self, dir: Vec3A) -> (usize, f32, f32) {
        let local = self.axis.transpose() * dir;
        let abs = local.abs();
        let face = if abs.x >= abs.y && abs.x >= abs.z {
            0
        } else if abs.y >= abs.z {
            1
        } else {
            2
        };

        let sign = if local[face] >= 0.0 { 1.0 } else { -1.0 };
        (face, sign, abs[face])
    }
}

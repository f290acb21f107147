use glam::{Affine3A, Vec3A};

use crate::linear_math::obb::Obb;

#[derive(Clone, Debug, PartialEq)]
pub struct BoxShape {
    half_extents: Vec3A,
    obb: Obb,
    vertices: [Vec3A; 8],
}

impl BoxShape {
    #[must_use]
    pub fn new(half_extents: Vec3A) -> Self {
        debug_assert!(
            half_extents.cmpgt(Vec3A::ZERO).all(),
            "box half extents must be positive, got {half_extents}"
        );

        let obb = Obb {
            extent: half_extents,
            ..Obb::DEFAULT
        };

        Self {
            half_extents,
            vertices: obb.vertices(),
            obb,
        }
    }

    #[inline]
    #[must_use]
    pub const fn get_half_extents(&self) -> Vec3A {
        self.half_extents
    }

    /// World-space center, face normals and extents as of the last transform update.
    #[inline]
    #[must_use]
    pub const fn get_obb(&self) -> &Obb {
        &self.obb
    }

    #[inline]
    #[must_use]
    pub const fn get_vertices(&self) -> &[Vec3A; 8] {
        &self.vertices
    }

    pub fn update_world_cache(&mut self, transform: &Affine3A) {
        self.obb = Obb::from_transform(transform, self.half_extents);
        self.vertices = self.obb.vertices();
    }

    pub fn local_get_supporting_vertex(&self, vec: Vec3A) -> Vec3A {
        Vec3A::select(vec.cmpge(Vec3A::splat(0.0)), self.half_extents, -self.half_extents)
    }

    /// The world-space edge reaching furthest along `dir`.
    ///
    /// Of the three edges meeting at the deepest corner, the one most
    /// perpendicular to `dir` is returned, starting at that corner.
    #[must_use]
    pub fn get_support_edge(&self, dir: Vec3A) -> (Vec3A, Vec3A) {
        let local = self.obb.axis.transpose() * dir;
        let corner = usize::from(local.x >= 0.0)
            | usize::from(local.y >= 0.0) << 1
            | usize::from(local.z >= 0.0) << 2;

        let abs = local.abs();
        let edge_axis = if abs.x <= abs.y && abs.x <= abs.z {
            0
        } else if abs.y <= abs.z {
            1
        } else {
            2
        };

        (self.vertices[corner], self.vertices[corner ^ (1 << edge_axis)])
    }
}

use glam::{Affine3A, Mat3A, Vec3A};

use crate::{
    collision::shapes::{
        collision_shape::{CollisionShapes, ShapeType},
        convex_shape::ConvexSupport,
    },
    linear_math::AffineExt,
};

fn is_rigid(transform: &Affine3A) -> bool {
    (transform.matrix3.transpose() * transform.matrix3).abs_diff_eq(Mat3A::IDENTITY, 1e-4)
        && transform.matrix3.determinant() > 0.0
}

/// A shape placed in the world.
///
/// `id` is a stable ordinal used to order symmetric pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionObject {
    id: u32,
    world_transform: Affine3A,
    collision_shape: CollisionShapes,
}

impl CollisionObject {
    #[must_use]
    pub fn new(
        id: u32,
        collision_shape: impl Into<CollisionShapes>,
        world_transform: Affine3A,
    ) -> Self {
        let mut obj = Self {
            id,
            world_transform: Affine3A::IDENTITY,
            collision_shape: collision_shape.into(),
        };
        obj.set_world_transform(world_transform);
        obj
    }

    #[inline]
    #[must_use]
    pub const fn get_id(&self) -> u32 {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn get_world_transform(&self) -> &Affine3A {
        &self.world_transform
    }

    /// Moves the object, refreshing the shape's cached world-space data.
    pub fn set_world_transform(&mut self, world_transform: Affine3A) {
        debug_assert!(
            is_rigid(&world_transform),
            "world transform must be a rotation and translation"
        );

        self.world_transform = world_transform;
        self.collision_shape.update_world_cache(&world_transform);
    }

    #[inline]
    #[must_use]
    pub const fn get_collision_shape(&self) -> &CollisionShapes {
        &self.collision_shape
    }

    #[inline]
    #[must_use]
    pub const fn get_shape_type(&self) -> ShapeType {
        self.collision_shape.get_shape_type()
    }
}

impl ConvexSupport for CollisionObject {
    #[inline]
    fn center(&self) -> Vec3A {
        self.world_transform.translation
    }

    fn support(&self, dir: Vec3A) -> Vec3A {
        let local_dir = self.world_transform.inv_rotate(dir);
        self.world_transform
            .transform_point3a(self.collision_shape.local_get_supporting_vertex(local_dir))
    }
}

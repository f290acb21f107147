use glam::{Affine3A, Quat, Vec3, Vec3A};
use mpr_narrowphase::{BoxShape, CollisionObject, CollisionShapes, ConvexSupport, CylinderShape};

#[derive(Clone, Debug)]
pub struct ShapeSetup {
    pub id: u32,
    pub shape: CollisionShapes,
    pub pos: Vec3,
    pub rot: Quat,
}

impl ShapeSetup {
    pub fn new_box(id: u32, half_extents: Vec3) -> Self {
        Self {
            id,
            shape: BoxShape::new(half_extents.into()).into(),
            pos: Vec3::ZERO,
            rot: Quat::IDENTITY,
        }
    }

    pub fn new_cylinder(id: u32, radius: f32, half_height: f32) -> Self {
        Self {
            id,
            shape: CylinderShape::new(radius, half_height).into(),
            pos: Vec3::ZERO,
            rot: Quat::IDENTITY,
        }
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rot(mut self, rot: Quat) -> Self {
        self.rot = rot;
        self
    }

    pub fn build(&self) -> CollisionObject {
        CollisionObject::new(
            self.id,
            self.shape.clone(),
            Affine3A::from_rotation_translation(self.rot, self.pos),
        )
    }
}

/// Unit box (half extents 1) with the given id.
pub fn unit_box(id: u32) -> ShapeSetup {
    ShapeSetup::new_box(id, Vec3::ONE)
}

/// Cylinder with radius 1 and half height 1.
pub fn unit_cylinder(id: u32) -> ShapeSetup {
    ShapeSetup::new_cylinder(id, 1.0, 1.0)
}

/// A sphere given only by its support mapping.
pub struct Ball {
    pub center: Vec3A,
    pub radius: f32,
}

impl ConvexSupport for Ball {
    fn center(&self) -> Vec3A {
        self.center
    }

    fn support(&self, dir: Vec3A) -> Vec3A {
        self.center + dir.normalize_or_zero() * self.radius
    }
}

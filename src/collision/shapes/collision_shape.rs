use glam::{Affine3A, Vec3A};

use super::{box_shape::BoxShape, cylinder_shape::CylinderShape};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Box,
    Cylinder,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CollisionShapes {
    Box(BoxShape),
    Cylinder(CylinderShape),
}

impl From<BoxShape> for CollisionShapes {
    fn from(shape: BoxShape) -> Self {
        Self::Box(shape)
    }
}

impl From<CylinderShape> for CollisionShapes {
    fn from(shape: CylinderShape) -> Self {
        Self::Cylinder(shape)
    }
}

impl CollisionShapes {
    #[inline]
    #[must_use]
    pub const fn get_shape_type(&self) -> ShapeType {
        match self {
            Self::Box(_) => ShapeType::Box,
            Self::Cylinder(_) => ShapeType::Cylinder,
        }
    }

    #[inline]
    #[must_use]
    pub fn local_get_supporting_vertex(&self, vec: Vec3A) -> Vec3A {
        match self {
            Self::Box(shape) => shape.local_get_supporting_vertex(vec),
            Self::Cylinder(shape) => shape.local_get_supporting_vertex(vec),
        }
    }

    pub fn update_world_cache(&mut self, transform: &Affine3A) {
        match self {
            Self::Box(shape) => shape.update_world_cache(transform),
            Self::Cylinder(shape) => shape.update_world_cache(transform),
        }
    }
}

use glam::Vec3A;
use log::debug;

use super::{
    collision_algorithm::CollisionAlgorithm,
    collision_object::CollisionObject,
    feature_clipping::{
        ContactEmitter, FaceBounds, ReferenceFace, add_clipped_contacts, add_sampled_contacts,
        sample_cap,
    },
};
use crate::{
    collision::{
        narrowphase::{
            contact_manifold::ContactManifold,
            mpr::{SeparationResult, get_separation},
        },
        shapes::{collision_shape::CollisionShapes, cylinder_shape::CylinderShape},
    },
    config::NarrowphaseConfig,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ContactFeatures {
    CapOnCap,
    /// The second cylinder's side or rim touches the first one's cap.
    SideOnCap0,
    /// The first cylinder's side or rim touches the second one's cap.
    SideOnCap1,
    /// Near-parallel cylinders lying side by side.
    SideOnSide,
    Vertex,
}

fn cap_face(cylinder: &CylinderShape, dir: Vec3A) -> ReferenceFace {
    let (center, normal) = cylinder.get_cap(dir);
    ReferenceFace {
        center,
        normal,
        bounds: FaceBounds::Disc {
            radius: cylinder.get_radius(),
        },
    }
}

/// Contact generation between two cylinders.
///
/// The pair is solved with the lower id first, so swapping the arguments
/// yields the same points with reversed normals and `flip` set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CylinderCylinderDetector {
    config: NarrowphaseConfig,
}

impl CylinderCylinderDetector {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(NarrowphaseConfig::DEFAULT)
    }

    #[must_use]
    pub const fn with_config(config: NarrowphaseConfig) -> Self {
        Self { config }
    }

    fn classify(&self, normal: Vec3A, cyl0: &CylinderShape, cyl1: &CylinderShape) -> ContactFeatures {
        let cos0 = cyl0.get_axis().dot(normal);
        let cos1 = cyl1.get_axis().dot(normal);

        match (self.config.is_face_aligned(cos0), self.config.is_face_aligned(cos1)) {
            (true, true) => ContactFeatures::CapOnCap,
            (true, false) => ContactFeatures::SideOnCap0,
            (false, true) => ContactFeatures::SideOnCap1,
            (false, false)
                if self.config.line_contacts
                    && self.config.is_side_aligned(cos0)
                    && self.config.is_side_aligned(cos1)
                    && cyl0.get_axis().dot(cyl1.get_axis()).abs()
                        > self.config.line_contact_threshold =>
            {
                ContactFeatures::SideOnSide
            }
            (false, false) => ContactFeatures::Vertex,
        }
    }

    fn add_contacts(
        &self,
        sep: &SeparationResult,
        cyl0: &CylinderShape,
        cyl1: &CylinderShape,
        emitter: &mut ContactEmitter,
    ) {
        let normal = sep.normal;

        let num_added = match self.classify(normal, cyl0, cyl1) {
            ContactFeatures::CapOnCap => {
                let face = cap_face(cyl0, normal);
                let (cap_center, cap_normal) = cyl1.get_cap(-normal);
                let samples = sample_cap(cap_center, cap_normal, cyl1.get_radius());
                add_sampled_contacts(&face, &samples, face.normal, emitter)
            }
            ContactFeatures::SideOnCap0 => {
                let face = cap_face(cyl0, normal);
                let (start, end) = cyl1.get_support_segment(-face.normal);
                add_clipped_contacts(&face, start, end, face.normal, emitter)
            }
            ContactFeatures::SideOnCap1 => {
                let face = cap_face(cyl1, -normal);
                let (start, end) = cyl0.get_support_segment(-face.normal);
                add_clipped_contacts(&face, start, end, -face.normal, emitter)
            }
            ContactFeatures::SideOnSide => {
                let axis = cyl0.get_axis();
                let side_normal = cyl0.get_radial_direction(normal);
                let face = ReferenceFace {
                    center: cyl0.get_center() + side_normal * cyl0.get_radius(),
                    normal: side_normal,
                    bounds: FaceBounds::Rect {
                        tangent1: axis,
                        half1: cyl0.get_half_height(),
                        tangent2: side_normal.cross(axis),
                        half2: cyl0.get_radius(),
                    },
                };

                let (start, end) = cyl1.get_support_segment(-side_normal);
                add_clipped_contacts(&face, start, end, side_normal, emitter)
            }
            ContactFeatures::Vertex => 0,
        };

        if num_added == 0 {
            emitter.add(sep.position, normal, sep.depth);
        }
    }
}

impl CollisionAlgorithm for CylinderCylinderDetector {
    fn detect_collision(
        &self,
        body0: &CollisionObject,
        body1: &CollisionObject,
        manifold: &mut ContactManifold,
    ) {
        let is_swapped = body1.get_id() < body0.get_id();
        let (obj0, obj1) = if is_swapped {
            (body1, body0)
        } else {
            (body0, body1)
        };

        let (CollisionShapes::Cylinder(cyl0), CollisionShapes::Cylinder(cyl1)) =
            (obj0.get_collision_shape(), obj1.get_collision_shape())
        else {
            debug!(
                "cylinder/cylinder detector got {:?} and {:?}",
                body0.get_shape_type(),
                body1.get_shape_type()
            );
            return;
        };

        let Some(sep) = get_separation(obj0, obj1, &self.config) else {
            return;
        };

        let mut emitter = ContactEmitter::new(manifold, is_swapped);
        self.add_contacts(&sep, cyl0, cyl1, &mut emitter);
    }
}

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
        shapes::{box_shape::BoxShape, collision_shape::CollisionShapes, cylinder_shape::CylinderShape},
    },
    config::NarrowphaseConfig,
};

/// Which features of the box and the cylinder meet, judged from the separating normal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ContactFeatures {
    /// A cap lies flat on a box face.
    CapOnFace,
    /// The cylinder's side or rim touches a box face.
    SideOnFace,
    /// A box edge or corner touches a cap.
    EdgeOnCap,
    /// A box edge touches the cylinder's side.
    EdgeOnSide,
    Vertex,
}

/// Contact generation between a box and a cylinder.
///
/// The pair is always solved with the box first. With `flip` set the
/// detector expects `(cylinder, box)` and reverses the reported normals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxCylinderDetector {
    flip: bool,
    config: NarrowphaseConfig,
}

impl BoxCylinderDetector {
    #[must_use]
    pub const fn new(flip: bool) -> Self {
        Self::with_config(flip, NarrowphaseConfig::DEFAULT)
    }

    #[must_use]
    pub const fn with_config(flip: bool, config: NarrowphaseConfig) -> Self {
        Self { flip, config }
    }

    #[inline]
    #[must_use]
    pub const fn is_flipped(&self) -> bool {
        self.flip
    }

    fn classify(&self, normal: Vec3A, box_shape: &BoxShape, cylinder: &CylinderShape) -> ContactFeatures {
        let (_, _, face_cos) = box_shape.get_obb().find_face(normal);
        let face_aligned = self.config.is_face_aligned(face_cos);

        let axis_cos = cylinder.get_axis().dot(normal);
        let cap_aligned = self.config.is_face_aligned(axis_cos);

        match (face_aligned, cap_aligned) {
            (true, true) => ContactFeatures::CapOnFace,
            (true, false) => ContactFeatures::SideOnFace,
            (false, true) => ContactFeatures::EdgeOnCap,
            (false, false) if self.config.line_contacts && self.config.is_side_aligned(axis_cos) => {
                ContactFeatures::EdgeOnSide
            }
            (false, false) => ContactFeatures::Vertex,
        }
    }

    /// The box face most aligned with `normal`, facing the cylinder.
    fn box_reference_face(box_shape: &BoxShape, normal: Vec3A) -> ReferenceFace {
        let obb = box_shape.get_obb();
        let (face, sign, _) = obb.find_face(normal);
        let axes = obb.axes();
        let u = (face + 1) % 3;
        let v = (face + 2) % 3;

        let face_normal = axes[face] * sign;
        ReferenceFace {
            center: obb.center + face_normal * obb.extent[face],
            normal: face_normal,
            bounds: FaceBounds::Rect {
                tangent1: axes[u],
                half1: obb.extent[u],
                tangent2: axes[v],
                half2: obb.extent[v],
            },
        }
    }

    fn add_contacts(
        &self,
        sep: &SeparationResult,
        box_shape: &BoxShape,
        cylinder: &CylinderShape,
        emitter: &mut ContactEmitter,
    ) {
        let normal = sep.normal;

        let num_added = match self.classify(normal, box_shape, cylinder) {
            ContactFeatures::CapOnFace => {
                let face = Self::box_reference_face(box_shape, normal);
                let (cap_center, cap_normal) = cylinder.get_cap(-normal);
                let samples = sample_cap(cap_center, cap_normal, cylinder.get_radius());
                add_sampled_contacts(&face, &samples, face.normal, emitter)
            }
            ContactFeatures::SideOnFace => {
                let face = Self::box_reference_face(box_shape, normal);
                let (start, end) = cylinder.get_support_segment(-face.normal);
                add_clipped_contacts(&face, start, end, face.normal, emitter)
            }
            ContactFeatures::EdgeOnCap => {
                let (cap_center, cap_normal) = cylinder.get_cap(-normal);
                let face = ReferenceFace {
                    center: cap_center,
                    normal: cap_normal,
                    bounds: FaceBounds::Disc {
                        radius: cylinder.get_radius(),
                    },
                };

                let (start, end) = box_shape.get_support_edge(-cap_normal);
                add_clipped_contacts(&face, start, end, -cap_normal, emitter)
            }
            ContactFeatures::EdgeOnSide => {
                let axis = cylinder.get_axis();
                let (start, end) = box_shape.get_support_edge(normal);
                let edge_cos = (end - start).normalize_or_zero().dot(axis);
                if edge_cos.abs() > self.config.line_contact_threshold {
                    let side_normal = cylinder.get_radial_direction(-normal);
                    let face = ReferenceFace {
                        center: cylinder.get_center() + side_normal * cylinder.get_radius(),
                        normal: side_normal,
                        bounds: FaceBounds::Rect {
                            tangent1: axis,
                            half1: cylinder.get_half_height(),
                            tangent2: side_normal.cross(axis),
                            half2: cylinder.get_radius(),
                        },
                    };

                    add_clipped_contacts(&face, start, end, -side_normal, emitter)
                } else {
                    0
                }
            }
            ContactFeatures::Vertex => 0,
        };

        // an overlap always yields at least the separator's own point
        if num_added == 0 {
            emitter.add(sep.position, normal, sep.depth);
        }
    }
}

impl CollisionAlgorithm for BoxCylinderDetector {
    fn detect_collision(
        &self,
        body0: &CollisionObject,
        body1: &CollisionObject,
        manifold: &mut ContactManifold,
    ) {
        let (box_obj, cylinder_obj) = if self.flip {
            (body1, body0)
        } else {
            (body0, body1)
        };

        let (CollisionShapes::Box(box_shape), CollisionShapes::Cylinder(cylinder)) =
            (box_obj.get_collision_shape(), cylinder_obj.get_collision_shape())
        else {
            debug!(
                "box/cylinder detector (flip: {}) got {:?} and {:?}",
                self.flip,
                body0.get_shape_type(),
                body1.get_shape_type()
            );
            return;
        };

        let Some(sep) = get_separation(box_obj, cylinder_obj, &self.config) else {
            return;
        };

        let mut emitter = ContactEmitter::new(manifold, self.flip);
        self.add_contacts(&sep, box_shape, cylinder, &mut emitter);
    }
}

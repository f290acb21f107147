use ahash::AHashSet;
use log::{debug, trace};

use super::{
    box_cylinder_detector::BoxCylinderDetector, collision_algorithm::CollisionAlgorithm,
    collision_object::CollisionObject, cylinder_cylinder_detector::CylinderCylinderDetector,
};
use crate::{
    collision::{narrowphase::contact_manifold::ContactManifold, shapes::collision_shape::ShapeType},
    config::NarrowphaseConfig,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Algorithms {
    BoxCylinder(BoxCylinderDetector),
    CylinderCylinder(CylinderCylinderDetector),
}

impl CollisionAlgorithm for Algorithms {
    fn detect_collision(
        &self,
        body0: &CollisionObject,
        body1: &CollisionObject,
        manifold: &mut ContactManifold,
    ) {
        match self {
            Self::BoxCylinder(alg) => alg.detect_collision(body0, body1, manifold),
            Self::CylinderCylinder(alg) => alg.detect_collision(body0, body1, manifold),
        }
    }
}

/// The contacts found for one pair, with normals pointing from
/// `objects[body0_idx]` toward `objects[body1_idx]`.
#[derive(Clone, Debug, PartialEq)]
pub struct PairManifold {
    pub body0_idx: usize,
    pub body1_idx: usize,
    pub manifold: ContactManifold,
}

#[derive(Clone, Debug, Default)]
pub struct CollisionDispatcher {
    pub config: NarrowphaseConfig,
    pub manifolds: Vec<PairManifold>,
}

impl CollisionDispatcher {
    #[must_use]
    pub const fn new(config: NarrowphaseConfig) -> Self {
        Self {
            config,
            manifolds: Vec::new(),
        }
    }

    /// The detector for a pair of shape kinds, set up to accept them in this order.
    #[must_use]
    pub const fn find_algorithm(&self, shape0: ShapeType, shape1: ShapeType) -> Option<Algorithms> {
        match (shape0, shape1) {
            (ShapeType::Box, ShapeType::Cylinder) => Some(Algorithms::BoxCylinder(
                BoxCylinderDetector::with_config(false, self.config),
            )),
            (ShapeType::Cylinder, ShapeType::Box) => Some(Algorithms::BoxCylinder(
                BoxCylinderDetector::with_config(true, self.config),
            )),
            (ShapeType::Cylinder, ShapeType::Cylinder) => Some(Algorithms::CylinderCylinder(
                CylinderCylinderDetector::with_config(self.config),
            )),
            (ShapeType::Box, ShapeType::Box) => None,
        }
    }

    /// Runs the matching detector on one pair, appending to `manifold`.
    pub fn detect_pair(
        &self,
        body0: &CollisionObject,
        body1: &CollisionObject,
        manifold: &mut ContactManifold,
    ) {
        let shape0 = body0.get_shape_type();
        let shape1 = body1.get_shape_type();

        let Some(algorithm) = self.find_algorithm(shape0, shape1) else {
            debug!("no detector for {shape0:?} vs {shape1:?}");
            return;
        };

        algorithm.detect_collision(body0, body1, manifold);
    }

    fn near_callback(&mut self, objects: &[CollisionObject], body0_idx: usize, body1_idx: usize) {
        let mut manifold = ContactManifold::new();
        self.detect_pair(&objects[body0_idx], &objects[body1_idx], &mut manifold);

        if !manifold.is_empty() {
            self.manifolds.push(PairManifold {
                body0_idx,
                body1_idx,
                manifold,
            });
        }
    }

    /// Replaces `manifolds` with the contacts of every overlapping pair.
    ///
    /// Pairs index into `objects`. Self pairs are skipped, and a pair listed
    /// more than once (in either order) is only run the first time.
    pub fn dispatch_all_collision_pairs(&mut self, objects: &[CollisionObject], pairs: &[(usize, usize)]) {
        self.manifolds.clear();

        let mut seen = AHashSet::with_capacity(pairs.len());
        for &(body0_idx, body1_idx) in pairs {
            if body0_idx == body1_idx {
                trace!("skipping self pair {body0_idx}");
                continue;
            }

            if !seen.insert((body0_idx.min(body1_idx), body0_idx.max(body1_idx))) {
                trace!("skipping repeated pair ({body0_idx}, {body1_idx})");
                continue;
            }

            self.near_callback(objects, body0_idx, body1_idx);
        }
    }
}

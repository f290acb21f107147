//! Narrow-phase contact generation for box/cylinder and cylinder/cylinder pairs.
//!
//! [`get_separation`] runs portal refinement over the Minkowski difference of
//! any two [`ConvexSupport`] shapes. The per-pair detectors turn its result
//! into a [`ContactManifold`] of up to four points, and [`CollisionDispatcher`]
//! routes broad-phase pairs to the right detector.

pub mod collision;
pub mod config;
pub mod consts;
pub mod linear_math;
pub mod logging;

pub use ahash;
pub use glam;

pub use collision::{
    dispatch::{
        box_cylinder_detector::BoxCylinderDetector,
        collision_algorithm::CollisionAlgorithm,
        collision_dispatcher::{Algorithms, CollisionDispatcher, PairManifold},
        collision_object::CollisionObject,
        cylinder_cylinder_detector::CylinderCylinderDetector,
    },
    narrowphase::{
        contact_manifold::{ContactManifold, MANIFOLD_CACHE_SIZE},
        contact_point::ContactPoint,
        mpr::{SeparationResult, get_separation},
    },
    shapes::{
        box_shape::BoxShape,
        collision_shape::{CollisionShapes, ShapeType},
        convex_shape::ConvexSupport,
        cylinder_shape::CylinderShape,
    },
};
pub use config::NarrowphaseConfig;

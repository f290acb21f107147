use super::collision_object::CollisionObject;
use crate::collision::narrowphase::contact_manifold::ContactManifold;

pub trait CollisionAlgorithm {
    /// Appends the contacts between `body0` and `body1` to `manifold`.
    ///
    /// Contact normals point from `body0` toward `body1`. Nothing is appended
    /// when the bodies are separated or are not the kinds this algorithm handles.
    fn detect_collision(
        &self,
        body0: &CollisionObject,
        body1: &CollisionObject,
        manifold: &mut ContactManifold,
    );
}

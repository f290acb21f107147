use glam::Vec3A;

/// A convex shape placed in the world, described by its support mapping.
pub trait ConvexSupport {
    /// A point strictly inside the shape.
    fn center(&self) -> Vec3A;

    /// The world-space point of the shape furthest along `dir`.
    ///
    /// `dir` does not need to be normalized.
    fn support(&self, dir: Vec3A) -> Vec3A;
}

use glam::Vec3A;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContactPoint {
    /// World-space point midway between the two surfaces.
    pub position: Vec3A,
    /// Unit normal pointing from the first shape passed to the detector toward the second.
    pub normal: Vec3A,
    /// Signed separation along `normal`, never positive.
    pub depth: f32,
    /// Set when the detector's canonical shape order is the reverse of the argument order.
    pub flip: bool,
}

impl ContactPoint {
    #[must_use]
    pub const fn new(position: Vec3A, normal: Vec3A, depth: f32, flip: bool) -> Self {
        Self {
            position,
            normal,
            depth,
            flip,
        }
    }
}

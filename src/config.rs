use crate::consts;

/// Tunables shared by the separator and the manifold builders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NarrowphaseConfig {
    pub max_iterations: u32,
    pub advance_tolerance: f32,
    pub center_nudge: f32,
    pub face_alignment_threshold: f32,
    pub line_contact_threshold: f32,
    /// Emit up to two clipped points for side-against-side contacts (a box
    /// edge along a cylinder's side, or parallel cylinders side by side)
    /// instead of a single point at the separation.
    pub line_contacts: bool,
}

impl Default for NarrowphaseConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl NarrowphaseConfig {
    pub const DEFAULT: Self = Self {
        max_iterations: consts::MPR_MAX_ITERATIONS,
        advance_tolerance: consts::MPR_ADVANCE_TOLERANCE,
        center_nudge: consts::MPR_CENTER_NUDGE,
        face_alignment_threshold: consts::FACE_ALIGNMENT_THRESHOLD,
        line_contact_threshold: consts::LINE_CONTACT_THRESHOLD,
        line_contacts: false,
    };

    /// Whether `cos` (the dot product of two unit vectors) is close enough to
    /// ±1 for the corresponding face to act as the reference feature.
    #[inline]
    #[must_use]
    pub fn is_face_aligned(&self, cos: f32) -> bool {
        cos.abs() > self.face_alignment_threshold
    }

    /// Whether a normal making `cos` with a cylinder axis lies in the side's
    /// tangent plane to within the face alignment tolerance.
    #[inline]
    #[must_use]
    pub fn is_side_aligned(&self, cos: f32) -> bool {
        1.0 - cos * cos > self.face_alignment_threshold * self.face_alignment_threshold
    }
}

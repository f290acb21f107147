/// Portal refinement gives up after this many iterations and reports no contact.
pub const MPR_MAX_ITERATIONS: u32 = 100;
/// Refinement stops once a new support point moves the portal less than this.
pub const MPR_ADVANCE_TOLERANCE: f32 = 0.01;
/// Offset applied along +Y when the two shape centers coincide.
pub const MPR_CENTER_NUDGE: f32 = 0.001;

/// Minimum |cos| between the contact normal and a face (or cap) normal for that
/// face to be used as the reference feature.
pub const FACE_ALIGNMENT_THRESHOLD: f32 = 0.999;
/// Minimum |cos| between an incident edge and a cylinder axis for a side
/// contact to be treated as a line contact.
pub const LINE_CONTACT_THRESHOLD: f32 = 0.96;
/// Above this |cos| a direction has no usable component perpendicular to an axis.
pub const PARALLEL_THRESHOLD: f32 = 0.999_999;

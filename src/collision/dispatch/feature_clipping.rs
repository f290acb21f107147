use glam::{Mat2, Vec2, Vec3A};

use crate::{collision::narrowphase::contact_manifold::ContactManifold, linear_math::plane_space};

const SIN_120: f32 = 0.866_025_4;
const ROTATE_120: Mat2 = Mat2::from_cols(Vec2::new(-0.5, SIN_120), Vec2::new(-SIN_120, -0.5));

/// Writes contacts computed in a detector's canonical shape order into a
/// manifold that is reported in argument order.
pub(crate) struct ContactEmitter<'a> {
    manifold: &'a mut ContactManifold,
    flip: bool,
}

impl<'a> ContactEmitter<'a> {
    pub fn new(manifold: &'a mut ContactManifold, flip: bool) -> Self {
        Self { manifold, flip }
    }

    /// `normal` points from the canonical first shape to the canonical second.
    pub fn add(&mut self, position: Vec3A, normal: Vec3A, depth: f32) {
        let normal = if self.flip { -normal } else { normal };
        self.manifold.add_contact_point(position, normal, depth, self.flip);
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum FaceBounds {
    Rect {
        tangent1: Vec3A,
        half1: f32,
        tangent2: Vec3A,
        half2: f32,
    },
    Disc {
        radius: f32,
    },
}

/// A planar face bounded by a rectangle or a circle.
///
/// `normal` is the outward normal of the shape owning the face, so incident
/// points below the face have negative depth.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ReferenceFace {
    pub center: Vec3A,
    pub normal: Vec3A,
    pub bounds: FaceBounds,
}

impl ReferenceFace {
    #[inline]
    pub fn depth(&self, point: Vec3A) -> f32 {
        (point - self.center).dot(self.normal)
    }

    /// Halfway between `point` and its projection onto the face plane.
    #[inline]
    pub fn contact_position(&self, point: Vec3A, depth: f32) -> Vec3A {
        point - self.normal * (depth * 0.5)
    }

    /// Pulls an in-plane offset from the face center back inside the bounds.
    fn clamp_offset(&self, offset: Vec3A) -> Vec3A {
        match self.bounds {
            FaceBounds::Rect {
                tangent1,
                half1,
                tangent2,
                half2,
            } => {
                tangent1 * offset.dot(tangent1).clamp(-half1, half1)
                    + tangent2 * offset.dot(tangent2).clamp(-half2, half2)
            }
            FaceBounds::Disc { radius } => offset.clamp_length_max(radius),
        }
    }

    /// Trims the segment `start -> end` to the part whose projection lies
    /// inside the face bounds. `None` if no part does.
    pub fn clip_segment(&self, start: Vec3A, end: Vec3A) -> Option<(Vec3A, Vec3A)> {
        match self.bounds {
            FaceBounds::Rect {
                tangent1,
                half1,
                tangent2,
                half2,
            } => {
                let mut seg = (start, end);
                for (dir, half) in [
                    (tangent1, half1),
                    (-tangent1, half1),
                    (tangent2, half2),
                    (-tangent2, half2),
                ] {
                    seg = clip_segment_to_half_plane(seg, self.center, dir, half)?;
                }

                Some(seg)
            }
            FaceBounds::Disc { radius } => self.clip_segment_to_disc(start, end, radius),
        }
    }

    fn clip_segment_to_disc(&self, start: Vec3A, end: Vec3A, radius: f32) -> Option<(Vec3A, Vec3A)> {
        let offset_start = start - self.center;
        let offset_start = offset_start - self.normal * offset_start.dot(self.normal);
        let offset_end = end - self.center;
        let offset_end = offset_end - self.normal * offset_end.dot(self.normal);

        // |offset_start + t * dir| = radius
        let dir = offset_end - offset_start;
        let a = dir.length_squared();
        let b = offset_start.dot(dir);
        let c = offset_start.length_squared() - radius * radius;

        if a <= f32::EPSILON * f32::EPSILON {
            // segment projects onto a single point
            return (c <= 0.0).then_some((start, end));
        }

        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let t_min = ((-b - root) / a).max(0.0);
        let t_max = ((-b + root) / a).min(1.0);
        if t_min > t_max {
            return None;
        }

        Some((start.lerp(end, t_min), start.lerp(end, t_max)))
    }
}

/// Cuts the segment against the half-space `dot(p - center, dir) <= half`.
fn clip_segment_to_half_plane(
    (start, end): (Vec3A, Vec3A),
    center: Vec3A,
    dir: Vec3A,
    half: f32,
) -> Option<(Vec3A, Vec3A)> {
    let d1 = (start - center).dot(dir) - half;
    let d2 = (end - center).dot(dir) - half;

    if d1 > 0.0 && d2 > 0.0 {
        return None;
    }

    if d1 > 0.0 {
        Some((start.lerp(end, d1 / (d1 - d2)), end))
    } else if d2 > 0.0 {
        Some((start, start.lerp(end, d1 / (d1 - d2))))
    } else {
        Some((start, end))
    }
}

/// Three rim points 120 degrees apart plus the center of a cylinder cap.
pub(crate) fn sample_cap(center: Vec3A, normal: Vec3A, radius: f32) -> [Vec3A; 4] {
    let (u, w) = plane_space(normal);

    let mut spoke = Vec2::X;
    let mut samples = [center; 4];
    for sample in &mut samples[..3] {
        *sample = center + (u * spoke.x + w * spoke.y) * radius;
        spoke = ROTATE_120 * spoke;
    }

    samples
}

/// Projects each sample onto the face and emits the ones at or below it,
/// with their in-plane position clamped to the face bounds. Returns how many
/// points were emitted.
pub(crate) fn add_sampled_contacts(
    face: &ReferenceFace,
    samples: &[Vec3A],
    normal: Vec3A,
    emitter: &mut ContactEmitter,
) -> usize {
    let mut num_added = 0;
    for &sample in samples {
        let depth = face.depth(sample);
        if depth > 0.0 {
            continue;
        }

        let offset = face.clamp_offset(sample - face.center - face.normal * depth);
        let position = face.center + offset + face.normal * (depth * 0.5);
        emitter.add(position, normal, depth);
        num_added += 1;
    }

    num_added
}

/// Clips the incident segment to the face and emits the endpoints below it.
/// Returns how many points were emitted.
pub(crate) fn add_clipped_contacts(
    face: &ReferenceFace,
    start: Vec3A,
    end: Vec3A,
    normal: Vec3A,
    emitter: &mut ContactEmitter,
) -> usize {
    let Some((start, end)) = face.clip_segment(start, end) else {
        return 0;
    };

    let num_endpoints = if start.distance_squared(end) <= f32::EPSILON * f32::EPSILON {
        1
    } else {
        2
    };

    let mut num_added = 0;
    for point in [start, end].into_iter().take(num_endpoints) {
        let depth = face.depth(point);
        if depth < 0.0 {
            emitter.add(face.contact_position(point, depth), normal, depth);
            num_added += 1;
        }
    }

    num_added
}

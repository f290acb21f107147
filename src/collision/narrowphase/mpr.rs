use std::mem;

use glam::Vec3A;
use log::{debug, trace};

use crate::{collision::shapes::convex_shape::ConvexSupport, config::NarrowphaseConfig};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeparationResult {
    /// Unit vector pointing from shape A toward shape B.
    pub normal: Vec3A,
    /// Estimated contact point, midway between the two surfaces.
    pub position: Vec3A,
    /// Signed separation along `normal`, never positive.
    pub depth: f32,
}

/// A vertex of the Minkowski difference `B - A`, along with the points on
/// each shape that produced it.
#[derive(Clone, Copy, Debug)]
struct SupportPoint {
    v: Vec3A,
    on_a: Vec3A,
    on_b: Vec3A,
}

impl SupportPoint {
    #[inline]
    fn new<A: ConvexSupport, B: ConvexSupport>(shape_a: &A, shape_b: &B, dir: Vec3A) -> Self {
        let on_a = shape_a.support(-dir);
        let on_b = shape_b.support(dir);
        Self {
            v: on_b - on_a,
            on_a,
            on_b,
        }
    }
}

/// Interpolates the witness points of the final portal, using the barycentric
/// coordinates of the origin's projection in the tetrahedron `(v0, v1, v2, v3)`.
///
/// Falls back to the portal triangle alone when the tetrahedron is degenerate.
fn witness_midpoint(v0: &SupportPoint, portal: &[SupportPoint; 3], n: Vec3A) -> Vec3A {
    let [v1, v2, v3] = portal;

    let mut b0 = v1.v.cross(v2.v).dot(v3.v);
    let mut b1 = v3.v.cross(v2.v).dot(v0.v);
    let mut b2 = v0.v.cross(v1.v).dot(v3.v);
    let mut b3 = v2.v.cross(v1.v).dot(v0.v);
    let mut sum = b0 + b1 + b2 + b3;

    if sum <= 0.0 {
        b0 = 0.0;
        b1 = v2.v.cross(v3.v).dot(n);
        b2 = v3.v.cross(v1.v).dot(n);
        b3 = v1.v.cross(v2.v).dot(n);
        sum = b1 + b2 + b3;
    }

    let inv = 1.0 / sum;
    let p1 = (v0.on_a * b0 + v1.on_a * b1 + v2.on_a * b2 + v3.on_a * b3) * inv;
    let p2 = (v0.on_b * b0 + v1.on_b * b1 + v2.on_b * b2 + v3.on_b * b3) * inv;

    (p1 + p2) * 0.5
}

/// Decides whether two convex shapes overlap by Minkowski portal refinement
/// over `B - A`.
///
/// Returns `None` when the shapes are separated, or when refinement fails to
/// converge within `config.max_iterations`. Otherwise the result's normal
/// points from `shape_a` to `shape_b` and its depth is `<= 0`.
pub fn get_separation<A: ConvexSupport, B: ConvexSupport>(
    shape_a: &A,
    shape_b: &B,
    config: &NarrowphaseConfig,
) -> Option<SeparationResult> {
    let center_a = shape_a.center();
    let center_b = shape_b.center();
    let mut v0 = SupportPoint {
        v: center_b - center_a,
        on_a: center_a,
        on_b: center_b,
    };

    if v0.v.length_squared() <= f32::EPSILON * f32::EPSILON {
        trace!("coincident shape centers, nudging by {}", config.center_nudge);
        v0.v.y += config.center_nudge;
    }

    // first portal vertex, toward the origin
    let mut n = -v0.v;
    let mut v1 = SupportPoint::new(shape_a, shape_b, n);
    if v1.v.dot(n) <= 0.0 {
        return None;
    }

    n = v1.v.cross(v0.v);
    if n.length_squared() <= f32::EPSILON * f32::EPSILON {
        // the origin lies on the segment v0 -> v1
        let axis = (v1.v - v0.v).try_normalize()?;

        trace!("origin on the center ray, separating along {axis}");
        return Some(SeparationResult {
            normal: -axis,
            position: (v1.on_a + v1.on_b) * 0.5,
            depth: (-v1.v.dot(axis)).min(0.0),
        });
    }

    let mut v2 = SupportPoint::new(shape_a, shape_b, n);
    if v2.v.dot(n) <= 0.0 {
        return None;
    }

    n = (v1.v - v0.v).cross(v2.v - v0.v);
    if n.dot(v0.v) > 0.0 {
        mem::swap(&mut v1, &mut v2);
        n = -n;
    }

    let mut iterations = 0;

    // find a portal that the ray from v0 through the origin passes through
    let mut v3 = loop {
        iterations += 1;
        if iterations > config.max_iterations {
            debug!("portal discovery hit the iteration cap of {}", config.max_iterations);
            return None;
        }

        let v3 = SupportPoint::new(shape_a, shape_b, n);
        if v3.v.dot(n) <= 0.0 {
            return None;
        }

        if v1.v.cross(v3.v).dot(v0.v) < 0.0 {
            v2 = v3;
            n = (v1.v - v0.v).cross(v3.v - v0.v);
            continue;
        }

        if v3.v.cross(v2.v).dot(v0.v) < 0.0 {
            v1 = v3;
            n = (v3.v - v0.v).cross(v2.v - v0.v);
            continue;
        }

        break v3;
    };

    // push the portal out toward the boundary of B - A
    let mut hit = false;
    loop {
        iterations += 1;
        if iterations > config.max_iterations {
            debug!("portal refinement hit the iteration cap of {}", config.max_iterations);
            return None;
        }

        let Some(portal_n) = (v2.v - v1.v).cross(v3.v - v1.v).try_normalize() else {
            trace!("portal collapsed during refinement");
            return None;
        };
        n = portal_n;

        if !hit && n.dot(v1.v) >= 0.0 {
            hit = true;
        }

        let v4 = SupportPoint::new(shape_a, shape_b, n);
        let advance = (v4.v - v3.v).dot(n);
        let separation = -v4.v.dot(n);

        if advance <= config.advance_tolerance || separation >= 0.0 {
            return hit.then(|| SeparationResult {
                normal: -n,
                position: witness_midpoint(&v0, &[v1, v2, v3], n),
                depth: separation.min(0.0),
            });
        }

        // keep the half of the split portal the center ray still passes through
        let t = v4.v.cross(v0.v);
        if v1.v.dot(t) > 0.0 {
            if v2.v.dot(t) > 0.0 {
                v1 = v4;
            } else {
                v3 = v4;
            }
        } else if v3.v.dot(t) > 0.0 {
            v2 = v4;
        } else {
            v1 = v4;
        }
    }
}

use glam::Vec3A;
use mpr_narrowphase::ContactManifold;

#[track_caller]
pub fn assert_near(actual: f32, expected: f32, tolerance: f32, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{what}: expected {expected} ± {tolerance}, got {actual}"
    );
}

#[track_caller]
pub fn assert_vec_near(actual: Vec3A, expected: Vec3A, tolerance: f32, what: &str) {
    assert!(
        actual.abs_diff_eq(expected, tolerance),
        "{what}: expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Checks the properties every manifold must have, whatever the configuration.
#[track_caller]
pub fn assert_manifold_sane(manifold: &ContactManifold, flip: bool) {
    assert!(manifold.num_contacts() <= 4, "too many contacts: {manifold:?}");
    for point in manifold {
        assert!(point.depth <= 0.0, "positive depth: {point:?}");
        assert_near(point.normal.length(), 1.0, 1e-3, "normal length");
        assert!(point.position.is_finite(), "non-finite position: {point:?}");
        assert_eq!(point.flip, flip, "flip flag: {point:?}");
    }
}

/// Asserts `flipped` holds the same points as `canonical` with reversed normals.
#[track_caller]
pub fn assert_mirrored(canonical: &ContactManifold, flipped: &ContactManifold) {
    assert_eq!(canonical.num_contacts(), flipped.num_contacts());
    for (a, b) in canonical.iter().zip(flipped) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.depth, b.depth);
        assert_eq!(a.normal, -b.normal);
        assert_ne!(a.flip, b.flip);
    }
}

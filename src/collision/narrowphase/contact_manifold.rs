use arrayvec::ArrayVec;
use glam::Vec3A;
use log::trace;

use super::contact_point::ContactPoint;

pub const MANIFOLD_CACHE_SIZE: usize = 4;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactManifold {
    pub point_cache: ArrayVec<ContactPoint, MANIFOLD_CACHE_SIZE>,
}

impl ContactManifold {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            point_cache: ArrayVec::new_const(),
        }
    }

    #[inline]
    #[must_use]
    pub fn num_contacts(&self) -> usize {
        self.point_cache.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.point_cache.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.point_cache.clear();
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ContactPoint> {
        self.point_cache.iter()
    }

    /// The most penetrating point, if any.
    #[must_use]
    pub fn deepest(&self) -> Option<&ContactPoint> {
        self.point_cache
            .iter()
            .min_by(|a, b| a.depth.total_cmp(&b.depth))
    }

    fn shallowest_index(&self) -> Option<usize> {
        self.point_cache
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.depth.total_cmp(&b.depth))
            .map(|(i, _)| i)
    }

    /// Appends a point. Once the cache is full the new point replaces the
    /// shallowest cached point if it penetrates further, and is dropped otherwise.
    pub fn add_contact_point(&mut self, position: Vec3A, normal: Vec3A, depth: f32, flip: bool) {
        debug_assert!(depth <= 0.0, "contact depth must not be positive, got {depth}");

        let new_pt = ContactPoint::new(position, normal, depth, flip);
        let Err(overflow) = self.point_cache.try_push(new_pt) else {
            return;
        };

        let Some(idx) = self.shallowest_index() else {
            return;
        };

        if depth < self.point_cache[idx].depth {
            trace!("manifold full, replacing point {idx} at depth {}", self.point_cache[idx].depth);
            self.point_cache[idx] = overflow.element();
        }
    }
}

impl<'a> IntoIterator for &'a ContactManifold {
    type Item = &'a ContactPoint;
    type IntoIter = std::slice::Iter<'a, ContactPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.point_cache.iter()
    }
}

pub mod contact_manifold;
pub mod contact_point;
pub mod mpr;

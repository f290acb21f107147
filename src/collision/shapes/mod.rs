pub mod box_shape;
pub mod collision_shape;
pub mod convex_shape;
pub mod cylinder_shape;

pub mod box_cylinder_detector;
pub mod collision_algorithm;
pub mod collision_dispatcher;
pub mod collision_object;
pub mod cylinder_cylinder_detector;
mod feature_clipping;

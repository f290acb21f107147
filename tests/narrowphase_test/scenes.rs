use glam::{Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

use super::setup::{ShapeSetup, unit_box, unit_cylinder};

/// Upright unit cylinder `gap` above the top face of the unit box at the origin.
/// A negative gap makes the cylinder sink into the box.
pub fn cylinder_above_box(gap: f32) -> (ShapeSetup, ShapeSetup) {
    (
        unit_box(0),
        unit_cylinder(1).with_pos(Vec3::new(0.0, 2.0 + gap, 0.0)),
    )
}

/// Unit cylinder lying along the world X axis, sunk 0.1 into the unit box's top face.
pub fn cylinder_lying_on_box() -> (ShapeSetup, ShapeSetup) {
    (
        unit_box(0),
        ShapeSetup::new_cylinder(1, 1.0, 0.5)
            .with_pos(Vec3::new(0.0, 1.9, 0.0))
            .with_rot(Quat::from_rotation_z(FRAC_PI_2)),
    )
}

/// Small box balanced on one edge, that edge sunk 0.1 into the top cap of
/// the upright unit cylinder at the origin.
pub fn box_edge_on_cap() -> (ShapeSetup, ShapeSetup) {
    let half = 0.5;
    let edge_drop = half * std::f32::consts::SQRT_2;
    (
        ShapeSetup::new_box(0, Vec3::splat(half))
            .with_pos(Vec3::new(0.0, 1.0 + edge_drop - 0.1, 0.0))
            .with_rot(Quat::from_rotation_z(std::f32::consts::FRAC_PI_4)),
        unit_cylinder(1),
    )
}

/// Box and cylinder, both tilted, with their centers 1.7 apart.
pub fn tilted_box_cylinder() -> (ShapeSetup, ShapeSetup) {
    (
        unit_box(0).with_rot(Quat::from_rotation_y(0.35)),
        unit_cylinder(1)
            .with_pos(Vec3::new(0.2, 1.7, -0.1))
            .with_rot(Quat::from_rotation_z(0.26)),
    )
}

/// Unit cylinder tilted by `angle` about Z with its lowest rim point sunk
/// 0.02 into the top face of a 3 x 1 x 3 box.
pub fn cylinder_tilted_on_box(angle: f32) -> (ShapeSetup, ShapeSetup) {
    let reach = angle.cos() + angle.sin().abs();
    (
        ShapeSetup::new_box(0, Vec3::new(1.5, 0.5, 1.5)),
        unit_cylinder(1)
            .with_pos(Vec3::new(0.0, 0.5 + reach - 0.02, 0.0))
            .with_rot(Quat::from_rotation_z(angle)),
    )
}

/// Box turned 45 degrees about Y so one vertical edge presses 0.1 into the
/// side of the upright unit cylinder at the origin.
pub fn box_edge_on_side() -> (ShapeSetup, ShapeSetup) {
    let half = 0.5;
    let edge_reach = half * std::f32::consts::SQRT_2;
    (
        ShapeSetup::new_box(0, Vec3::splat(half))
            .with_pos(Vec3::new(1.0 + edge_reach - 0.1, 0.0, 0.0))
            .with_rot(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4)),
        unit_cylinder(1),
    )
}

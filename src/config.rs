//! Tunable game constants.
//!
//! All numbers the collision rules depend on live in [`PhysicsConfig`]. The
//! defaults reproduce the shipped level: four portals, one per quadrant, and
//! an out-of-bounds strip west of `x = -7`.

use cgmath::{Euler, Rad, Vector3};

/// Destinations indexed by the sign of the mover's `(x, z)` position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeleportTable {
    pub neg_x_neg_z: Vector3<f32>,
    pub pos_x_neg_z: Vector3<f32>,
    pub neg_x_pos_z: Vector3<f32>,
    pub pos_x_pos_z: Vector3<f32>,
}

impl TeleportTable {
    /// A position lying exactly on an axis belongs to no quadrant.
    pub fn destination(&self, position: Vector3<f32>) -> Option<Vector3<f32>> {
        let (x, z) = (position.x, position.z);
        if x < 0.0 && z < 0.0 {
            Some(self.neg_x_neg_z)
        } else if x > 0.0 && z < 0.0 {
            Some(self.pos_x_neg_z)
        } else if x < 0.0 && z > 0.0 {
            Some(self.neg_x_pos_z)
        } else if x > 0.0 && z > 0.0 {
            Some(self.pos_x_pos_z)
        } else {
            None
        }
    }

    /// The level's portal layout, with the exit pushed `depth` units out along z.
    fn mirrored(depth: f32) -> Self {
        Self {
            neg_x_neg_z: Vector3::new(5.0, 4.0, depth),
            pos_x_neg_z: Vector3::new(-5.0, 4.0, depth),
            neg_x_pos_z: Vector3::new(5.0, 1.0, -depth),
            pos_x_pos_z: Vector3::new(-5.0, 1.0, -depth),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Bodies thinner than this along local z are portals.
    pub portal_thickness: f32,
    /// Seconds before another teleport may fire.
    pub teleport_cooldown: f32,
    /// Extra impulse applied when the player, not a cube, does the pushing.
    pub player_push_multiplier: f32,
    /// Jump buffer granted on landing, in frames.
    pub landing_jump_frames: u32,
    /// Players entering a portal west of this x fall out of the level.
    pub out_of_bounds_x: f32,
    pub respawn_position: Vector3<f32>,
    pub respawn_rotation: Euler<Rad<f32>>,
    pub cube_destinations: TeleportTable,
    pub player_destinations: TeleportTable,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            portal_thickness: 0.05,
            teleport_cooldown: 0.5,
            player_push_multiplier: 7.0,
            landing_jump_frames: 20,
            out_of_bounds_x: -7.0,
            respawn_position: Vector3::new(0.0, 20.0, 0.0),
            respawn_rotation: Euler::new(Rad(-1.5), Rad(0.0), Rad(0.0)),
            cube_destinations: TeleportTable::mirrored(8.0),
            player_destinations: TeleportTable::mirrored(8.5),
        }
    }
}

//! Collision response between a moving node and any other body.
//!
//! Detection is a plain AABB overlap test on world-space boxes. Separation uses
//! a single-axis minimum translation vector (MTV): six candidate depths are
//! scanned in a fixed order and the first strictly smallest non-negative one
//! wins. This is a heuristic; with two near-equal penetrations it can push out
//! along the "wrong" axis.

use cgmath::{Quaternion, Vector3, Zero};
use log::{debug, info};

use crate::{
    data_structures::{
        aabb::Aabb,
        scene_graph::{NodeId, SceneGraph},
    },
    physics::{Physics, body::PhysicsBody},
};

/**
 * Translation that moves `a` out of `b` along one axis.
 *
 * Candidates are `b.max - a.min` (push `a` towards +axis) for x, y, z and then
 * `a.max - b.min` (push towards -axis) for x, y, z. Ties keep the earlier
 * candidate. Returns zero when no candidate is non-negative, which cannot
 * happen for intersecting, well-formed boxes.
 */
pub fn minimum_translation(a: &Aabb, b: &Aabb) -> Vector3<f32> {
    let diff_a = b.max - a.min;
    let diff_b = a.max - b.min;
    let candidates = [
        (diff_a.x, Vector3::unit_x()),
        (diff_a.y, Vector3::unit_y()),
        (diff_a.z, Vector3::unit_z()),
        (diff_b.x, -Vector3::unit_x()),
        (diff_b.y, -Vector3::unit_y()),
        (diff_b.z, -Vector3::unit_z()),
    ];

    let mut min_diff = f32::INFINITY;
    let mut direction = Vector3::zero();
    for (depth, axis) in candidates {
        if depth >= 0.0 && depth < min_diff {
            min_diff = depth;
            direction = axis * depth;
        }
    }
    direction
}

impl Physics {
    /// Separates `a` from `b` if their world boxes overlap and applies the
    /// game rules: landing, portals and pushing.
    ///
    /// Only `a` is moved. `b` at most receives an impulse on its velocity.
    pub fn resolve(&mut self, scene: &mut SceneGraph, a: NodeId, b: NodeId) {
        let (Some(a_box), Some(b_box)) = (scene.world_aabb(a), scene.world_aabb(b)) else {
            return;
        };
        if !a_box.intersects(&b_box) {
            return;
        }
        let mtv = minimum_translation(&a_box, &b_box);

        let b_is_portal = scene
            .get(b)
            .is_some_and(|node| node.local_transform().scale.z < self.config.portal_thickness);
        let b_is_pushable = scene.body(b).is_some_and(PhysicsBody::is_pushable);

        let Some(body) = scene.body_mut(a) else {
            return;
        };
        if mtv.y != 0.0 {
            if let Some(player) = body.player_state_mut() {
                player.grounded = true;
                player.jump_frames = self.config.landing_jump_frames;
            }
        }
        let a_is_player = body.is_player();

        if body.has_velocity() && b_is_portal && self.cooldown <= 0.0 {
            self.teleport(scene, a, b);
        }

        // Applied even right after a teleport: the exit lands offset by the
        // entry's separation vector.
        scene.mutate_local_transform(a, |local| local.position += mtv);

        if b_is_pushable {
            let strength = if a_is_player {
                self.config.player_push_multiplier
            } else {
                1.0
            };
            if let Some(other) = scene.body_mut(b) {
                other.velocity -= mtv * strength;
            }
        }
    }

    fn teleport(&mut self, scene: &mut SceneGraph, id: NodeId, portal: NodeId) {
        let Some(node) = scene.get(id) else {
            return;
        };
        let position = node.translation();
        let is_player = node.body().is_some_and(PhysicsBody::is_player);

        if is_player && position.x < self.config.out_of_bounds_x {
            let respawn = self.config.respawn_position;
            let rotation = Quaternion::from(self.config.respawn_rotation);
            self.teleport_signal.emit(id, Some(respawn));
            scene.mutate_local_transform(id, |local| {
                local.position = respawn;
                local.rotation = rotation;
            });
            if let Some(body) = scene.body_mut(id) {
                body.movable = false;
            }
            info!("Player {} fell out of the level through portal {}", id, portal);
            self.game_over_signal.emit(id);
        } else {
            let table = if is_player {
                &self.config.player_destinations
            } else {
                &self.config.cube_destinations
            };
            let destination = table.destination(position);
            self.teleport_signal.emit(id, destination);
            match destination {
                Some(destination) => {
                    scene.mutate_local_transform(id, |local| local.position = destination);
                    debug!("Teleported {} through {} to {:?}", id, portal, destination);
                }
                None => debug!(
                    "{} entered portal {} on a quadrant boundary at {:?}, staying put",
                    id, portal, position
                ),
            }
        }
        self.cooldown = self.config.teleport_cooldown;
    }
}

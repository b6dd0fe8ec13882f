//! Explicit Euler integration of node positions and cube self-propulsion.

use cgmath::{InnerSpace, Quaternion, Vector3};
use log::warn;

use crate::{
    data_structures::scene_graph::{NodeId, SceneGraph},
    physics::body::{PhysicsBody, Role},
};

/// Advances a movable node by its velocity over `dt` seconds. The player also
/// falls by its gravity; nothing accumulates gravity into velocity, so the fall
/// speed is constant.
///
/// Matrices of the node and its subtree are refreshed afterwards.
pub fn integrate(scene: &mut SceneGraph, id: NodeId, dt: f32) {
    let Some(body) = scene.body(id) else {
        warn!("Tried to integrate node {} which has no physics body", id);
        return;
    };
    if !body.movable {
        return;
    }
    let mut displacement = body.velocity * dt;
    if body.is_player() {
        displacement += body.gravity * dt;
    }
    scene.mutate_local_transform(id, |local| local.position += displacement);
}

/// Pushes a cube along its local "down" and caps its speed.
///
/// The downward factor is `cos` of the rotation quaternion's y component, so an
/// unrotated cube accelerates straight down at full strength.
pub fn accelerate(body: &mut PhysicsBody, rotation: &Quaternion<f32>, dt: f32) {
    let Role::Pushable(motion) = body.role else {
        return;
    };
    let down = Vector3::new(0.0, -rotation.v.y.cos(), 0.0);
    body.velocity += down * (dt * motion.acceleration);

    let len = body.velocity.magnitude();
    if len > motion.max_speed {
        body.velocity *= motion.max_speed / len;
    }
}

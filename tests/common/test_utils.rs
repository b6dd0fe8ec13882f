#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use portal_ngin::{
    Vector3,
    config::PhysicsConfig,
    data_structures::{
        aabb::Aabb,
        instance::Instance,
        scene_graph::{NodeId, SceneGraph},
    },
    physics::{
        Physics,
        body::{CubeMotion, PhysicsBody},
    },
};

pub const EPSILON: f32 = 1e-4;

/// Everything the physics told the presentation layer.
#[derive(Default)]
pub struct Recorded {
    pub teleports: Vec<(NodeId, Option<Vector3<f32>>)>,
    pub game_overs: Vec<NodeId>,
}

/// Physics with default constants whose signals write into the returned log.
pub fn recording_physics() -> (Physics, Rc<RefCell<Recorded>>) {
    let log = Rc::new(RefCell::new(Recorded::default()));
    let teleports = log.clone();
    let game_overs = log.clone();
    let physics = Physics::new(
        PhysicsConfig::default(),
        move |node: NodeId, destination: Option<Vector3<f32>>| {
            teleports.borrow_mut().teleports.push((node, destination))
        },
        move |node: NodeId| game_overs.borrow_mut().game_overs.push(node),
    );
    (physics, log)
}

pub fn add_body(
    scene: &mut SceneGraph,
    name: &str,
    position: Vector3<f32>,
    scale: Vector3<f32>,
    body: PhysicsBody,
) -> NodeId {
    let instance = Instance::from(position).with_scale(scale);
    let id = scene.add_node(None, Some(name), instance).unwrap();
    scene.attach_body(id, body).unwrap();
    id
}

fn half(extent: f32) -> Aabb {
    Aabb::from_half_extents(Vector3::new(extent, extent, extent))
}

/// A pushable 1x1x1 cube centered on `position`.
pub fn cube(scene: &mut SceneGraph, position: Vector3<f32>) -> NodeId {
    add_body(
        scene,
        "cube",
        position,
        Vector3::new(1.0, 1.0, 1.0),
        PhysicsBody::pushable(half(0.5), CubeMotion::default()),
    )
}

/// A 1x1x1 player falling with the level's gravity.
pub fn player(scene: &mut SceneGraph, position: Vector3<f32>) -> NodeId {
    add_body(
        scene,
        "player",
        position,
        Vector3::new(1.0, 1.0, 1.0),
        PhysicsBody::player(half(0.5), Vector3::new(0.0, -7.0, 0.0)),
    )
}

pub fn wall(scene: &mut SceneGraph, position: Vector3<f32>, half_extents: Vector3<f32>) -> NodeId {
    add_body(
        scene,
        "wall",
        position,
        Vector3::new(1.0, 1.0, 1.0),
        PhysicsBody::fixed(Aabb::from_half_extents(half_extents)),
    )
}

/// A 4x4 portal slab whose front face sits exactly at `position.z` and which
/// is 0.01 deep after scaling.
pub fn portal(scene: &mut SceneGraph, position: Vector3<f32>) -> NodeId {
    add_body(
        scene,
        "portal",
        position,
        Vector3::new(1.0, 1.0, 0.01),
        PhysicsBody::fixed(Aabb::new(
            Vector3::new(-2.0, -2.0, 0.0),
            Vector3::new(2.0, 2.0, 1.0),
        )),
    )
}

/// Portal whose front face rests against the +z face of a unit body at
/// `body_position`. The separation vector is then zero, so the body ends up
/// exactly on its teleport destination.
pub fn touching_portal(scene: &mut SceneGraph, body_position: Vector3<f32>) -> NodeId {
    let face = body_position + Vector3::new(0.0, 0.0, 0.5);
    portal(scene, face)
}

pub fn translation(scene: &SceneGraph, id: NodeId) -> Vector3<f32> {
    scene.get(id).unwrap().translation()
}

pub fn velocity(scene: &SceneGraph, id: NodeId) -> Vector3<f32> {
    scene.body(id).unwrap().velocity
}

pub fn assert_vec_near(actual: Vector3<f32>, expected: Vector3<f32>) {
    let delta = actual - expected;
    assert!(
        delta.x.abs() < EPSILON && delta.y.abs() < EPSILON && delta.z.abs() < EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

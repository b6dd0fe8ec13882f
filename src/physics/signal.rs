//! Hooks from the physics core into the presentation layer.
//!
//! The core never touches audio or the DOM itself. Whoever builds [`Physics`]
//! hands it one sink per event; closures work out of the box and [`Ignore`]
//! drops the event.
//!
//! [`Physics`]: crate::physics::Physics

use cgmath::Vector3;

use crate::data_structures::scene_graph::NodeId;

/// Fired when a body passes through a portal, before it is moved.
pub trait TeleportSignal {
    fn emit(&mut self, node: NodeId, destination: Option<Vector3<f32>>);
}

/// Fired when the player leaves the level through the out-of-bounds portal.
pub trait GameOverSignal {
    fn emit(&mut self, node: NodeId);
}

impl<F> TeleportSignal for F
where
    F: FnMut(NodeId, Option<Vector3<f32>>),
{
    fn emit(&mut self, node: NodeId, destination: Option<Vector3<f32>>) {
        self(node, destination)
    }
}

impl<F> GameOverSignal for F
where
    F: FnMut(NodeId),
{
    fn emit(&mut self, node: NodeId) {
        self(node)
    }
}

/// Sink that drops every event. Handy for headless simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ignore;

impl TeleportSignal for Ignore {
    fn emit(&mut self, _: NodeId, _: Option<Vector3<f32>>) {}
}

impl GameOverSignal for Ignore {
    fn emit(&mut self, _: NodeId) {}
}

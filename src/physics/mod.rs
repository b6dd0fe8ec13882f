//! Per-frame physics: integration, collision detection and game response.
//!
//! - `body` holds the per-node physical state and its [`body::Role`]
//! - `integrator` moves nodes and propels cubes
//! - `collision` computes separation vectors and applies the game rules
//! - `signal` defines the hooks into audio and UI
//!
//! One [`Physics::step`] per rendered frame. Every movable body is moved and
//! then tested against every other body in the scene, in scene order. The scan
//! is quadratic, which is fine for a hand-built level of a few dozen nodes; a
//! spatial index would only need to replace the inner loop of `step`.

pub mod body;
pub mod collision;
pub mod integrator;
pub mod signal;

use std::fmt::Debug;

use log::warn;

use crate::{
    config::PhysicsConfig,
    data_structures::scene_graph::{NodeId, SceneGraph},
    physics::signal::{GameOverSignal, Ignore, TeleportSignal},
};

pub struct Physics {
    pub config: PhysicsConfig,
    /// Seconds until portals work again. Allowed to run negative.
    cooldown: f32,
    teleport_signal: Box<dyn TeleportSignal>,
    game_over_signal: Box<dyn GameOverSignal>,
}

impl Physics {
    pub fn new(
        config: PhysicsConfig,
        teleport_signal: impl TeleportSignal + 'static,
        game_over_signal: impl GameOverSignal + 'static,
    ) -> Self {
        Self {
            config,
            cooldown: 0.0,
            teleport_signal: Box::new(teleport_signal),
            game_over_signal: Box::new(game_over_signal),
        }
    }

    /// Physics without anyone listening for teleports or game over.
    pub fn headless(config: PhysicsConfig) -> Self {
        Self::new(config, Ignore, Ignore)
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, scene: &mut SceneGraph, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            warn!("Skipping physics step with invalid dt {}", dt);
            return;
        }
        let bodies: Vec<NodeId> = scene
            .node_ids()
            .into_iter()
            .filter(|id| scene.body(*id).is_some())
            .collect();

        for &node in &bodies {
            // Checked per visit: a teleport earlier in this frame may have
            // frozen the node.
            if !scene.body(node).is_some_and(|body| body.movable) {
                continue;
            }
            integrator::integrate(scene, node, dt);
            for &other in &bodies {
                if other != node {
                    self.resolve(scene, node, other);
                }
            }
        }

        self.cooldown -= dt;
    }
}

// Dummy impl, the signals are opaque
impl Debug for Physics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Physics")
            .field("config", &self.config)
            .field("cooldown", &self.cooldown)
            .finish_non_exhaustive()
    }
}

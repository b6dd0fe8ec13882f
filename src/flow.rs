//! Frame driver.
//!
//! A [`Game`] owns the scene and the physics and is ticked once per rendered
//! frame by the host's animation callback. Rendering, input and audio stay
//! with the host; the game only moves nodes and raises signals.
//!
//! # Lifecycle Flow
//!
//! The host follows this pattern each frame:
//! 1. Feed input into the player body (velocity, jumps)
//! 2. Call [`Game::tick`] (or [`Game::update`] with its own timestep)
//! 3. Read back node matrices for drawing
//!
//! Inside an update:
//! 1. [`Physics::step`] integrates and resolves collisions
//! 2. Every pushable cube accelerates and has its speed capped

use instant::{Duration, Instant};

use crate::{
    data_structures::scene_graph::{NodeId, SceneGraph},
    physics::{Physics, body::PhysicsBody, integrator},
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[derive(Debug)]
pub struct Game {
    pub scene: SceneGraph,
    pub physics: Physics,
    player: Option<NodeId>,
    cubes: Vec<NodeId>,
    last_time: Instant,
}

impl Game {
    pub fn new(scene: SceneGraph, physics: Physics) -> Self {
        // A later player replaces an earlier one.
        let player = scene.find_bodies(PhysicsBody::is_player).last().copied();
        if player.is_none() {
            log::warn!("The scene has no player; nothing will fall or land.");
        }
        let cubes = scene.find_bodies(PhysicsBody::is_pushable);
        Self {
            scene,
            physics,
            player,
            cubes,
            last_time: Instant::now(),
        }
    }

    /// The last player in scene order.
    pub fn player(&self) -> Option<NodeId> {
        self.player
    }

    pub fn cubes(&self) -> &[NodeId] {
        &self.cubes
    }

    /// Runs one frame with the wall-clock time since the previous tick.
    pub fn tick(&mut self) -> Duration {
        let dt = self.last_time.elapsed();
        self.last_time = Instant::now();
        self.update(dt);
        dt
    }

    pub fn update(&mut self, dt: Duration) {
        let dt = dt.as_secs_f32();
        self.physics.step(&mut self.scene, dt);

        for &cube in &self.cubes {
            let Some(rotation) = self
                .scene
                .get(cube)
                .map(|node| node.local_transform().rotation)
            else {
                continue;
            };
            if let Some(body) = self.scene.body_mut(cube) {
                integrator::accelerate(body, &rotation, dt);
            }
        }
    }
}

/// Installs the platform logger: `env_logger` natively, the browser console on wasm.
pub fn init_logger() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }
}

//! portal-ngin
//!
//! Physics and collision core of a small first-person portal game that runs
//! natively and in the browser. The player walks a level of walls, pushable
//! cubes and thin portal slabs; every frame bodies are integrated, tested
//! pairwise with axis-aligned bounding boxes and pushed apart along a minimum
//! translation vector, with portals teleporting whatever touches them.
//!
//! Rendering, audio and input are left to the host, which reads node matrices
//! after each frame and listens to the teleport and game-over signals.
//!
//! High-level modules
//! - `config`: tunable constants (portal thickness, cooldown, destinations)
//! - `data_structures`: transforms, bounding boxes and the scene graph
//! - `physics`: bodies, integration, collision response and signals
//! - `flow`: the per-frame driver that owns scene and physics
//! - `wasm`: DOM-backed signals for the browser build
//!

pub mod config;
pub mod data_structures;
pub mod flow;
pub mod physics;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;

//! Engine data structures: transforms, bounding boxes and the scene graph.
//!
//! - `instance` holds a node's translation, rotation and scale
//! - `aabb` is the axis-aligned box used for every collision query
//! - `scene_graph` enables hierarchical scene organization

pub mod aabb;
pub mod instance;
pub mod scene_graph;

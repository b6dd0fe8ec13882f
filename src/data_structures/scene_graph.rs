//! Scene graph and hierarchical scene organization.
//!
//! Nodes live in an arena owned by [`SceneGraph`] and refer to each other by
//! [`NodeId`]. Every node has exactly one parent (or none, for roots) and an
//! ordered list of children. Each node caches its local matrix and its world
//! matrix (`parent world * local`); any transform change made through the graph
//! refreshes the node and its whole subtree, so the cache is always coherent.

use std::fmt;

use anyhow::{Context, bail};
use cgmath::{Matrix4, SquareMatrix};
use log::warn;

use crate::{
    data_structures::{aabb::Aabb, instance::Instance},
    physics::body::{PhysicsBody, Role},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    pub name: Option<String>,
    instance: Instance,
    local: Matrix4<f32>,
    world: Matrix4<f32>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    body: Option<PhysicsBody>,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn local_transform(&self) -> &Instance {
        &self.instance
    }

    pub fn translation(&self) -> cgmath::Vector3<f32> {
        self.instance.position
    }

    pub fn local_matrix(&self) -> &Matrix4<f32> {
        &self.local
    }

    pub fn world_matrix(&self) -> &Matrix4<f32> {
        &self.world
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn body(&self) -> Option<&PhysicsBody> {
        self.body.as_ref()
    }

    /// Body bounds in world space, if this node takes part in collisions.
    pub fn world_aabb(&self) -> Option<Aabb> {
        self.body.as_ref().map(|body| body.aabb.transformed(&self.world))
    }
}

#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Adds a node under `parent` (or as a new root) and computes its matrices.
    ///
    /// # Errors
    /// Returns an error if `parent` is `Some` but the node doesn't exist.
    pub fn add_node(
        &mut self,
        parent: Option<NodeId>,
        name: Option<&str>,
        instance: Instance,
    ) -> anyhow::Result<NodeId> {
        if let Some(parent_id) = parent {
            if self.get(parent_id).is_none() {
                bail!("Parent node {} not found in scene", parent_id);
            }
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            name: name.map(str::to_string),
            instance,
            local: Matrix4::identity(),
            world: Matrix4::identity(),
            parent,
            children: Vec::new(),
            body: None,
        });
        match parent {
            Some(parent_id) => self.nodes[parent_id.0].children.push(id),
            None => self.roots.push(id),
        }
        self.update_matrix(id);
        Ok(id)
    }

    /// Attaches collision and motion state to an existing node.
    ///
    /// Bodies are validated here so the per-frame code never has to:
    /// malformed boxes, movable static geometry and cubes without a usable
    /// speed limit are rejected.
    pub fn attach_body(&mut self, id: NodeId, body: PhysicsBody) -> anyhow::Result<()> {
        let label = self.label(id);
        let node = self
            .nodes
            .get_mut(id.0)
            .with_context(|| format!("Cannot attach a body to unknown node {}", id))?;
        if !body.aabb.is_well_formed() {
            bail!(
                "Node {} has a malformed bounding box: min {:?}, max {:?}",
                label,
                body.aabb.min,
                body.aabb.max
            );
        }
        match body.role {
            Role::Static if body.movable => {
                bail!("Node {} is static geometry but was flagged movable", label)
            }
            Role::Pushable(motion) if !(motion.max_speed.is_finite() && motion.max_speed > 0.0) => {
                bail!(
                    "Node {} needs a positive max speed, got {}",
                    label,
                    motion.max_speed
                )
            }
            _ => {}
        }
        if node.body.is_some() {
            warn!("Replacing the physics body of node {}", label);
        }
        node.body = Some(body);
        Ok(())
    }

    pub fn body(&self, id: NodeId) -> Option<&PhysicsBody> {
        self.get(id).and_then(Node::body)
    }

    /// Bodies can be edited freely; none of their fields feed the matrices.
    pub fn body_mut(&mut self, id: NodeId) -> Option<&mut PhysicsBody> {
        self.nodes.get_mut(id.0).and_then(|node| node.body.as_mut())
    }

    pub fn set_local_transform(&mut self, id: NodeId, instance: Instance) {
        self.mutate_local_transform(id, |local| *local = instance);
    }

    /// Edits a node's translation/rotation/scale and refreshes the matrices of
    /// the node and everything below it.
    pub fn mutate_local_transform(&mut self, id: NodeId, mutation: impl FnOnce(&mut Instance)) {
        match self.nodes.get_mut(id.0) {
            Some(node) => {
                mutation(&mut node.instance);
                self.update_matrix(id);
            }
            None => warn!("You tried to transform node {}, which is not in the scene.", id),
        }
    }

    /// Recomputes the local matrix of `id` from its transform and the world
    /// matrices of `id` and its descendants.
    pub fn update_matrix(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(id.0) else {
            warn!("You tried to update node {}, which is not in the scene.", id);
            return;
        };
        let parent_world = node
            .parent
            .map(|parent| self.nodes[parent.0].world)
            .unwrap_or_else(Matrix4::identity);
        self.update_world_transforms(id, &parent_world);
    }

    pub fn update_world_transform_all(&mut self) {
        for i in 0..self.roots.len() {
            let root = self.roots[i];
            self.update_world_transforms(root, &Matrix4::identity());
        }
    }

    fn update_world_transforms(&mut self, id: NodeId, parent_world: &Matrix4<f32>) {
        let node = &mut self.nodes[id.0];
        node.local = node.instance.to_matrix();
        node.world = parent_world * node.local;
        let world = node.world;
        for i in 0..self.nodes[id.0].children.len() {
            let child = self.nodes[id.0].children[i];
            self.update_world_transforms(child, &world);
        }
    }

    pub fn world_transform(&self, id: NodeId) -> Option<Matrix4<f32>> {
        self.get(id).map(|node| node.world)
    }

    pub fn world_aabb(&self, id: NodeId) -> Option<Aabb> {
        self.get(id).and_then(Node::world_aabb)
    }

    /**
     * Depth-first traversal with matrix-stack semantics.
     *
     * `pre_visit` receives each node together with the accumulated transform
     * (`accumulated parent * local`), `post_visit` runs once the subtree is done
     * and the parent's accumulated transform is current again.
     */
    pub fn traverse<Pre, Post>(&self, mut pre_visit: Pre, mut post_visit: Post)
    where
        Pre: FnMut(&Node, &Matrix4<f32>),
        Post: FnMut(&Node),
    {
        for root in &self.roots {
            self.visit(*root, &Matrix4::identity(), &mut pre_visit, &mut post_visit);
        }
    }

    fn visit(
        &self,
        id: NodeId,
        accumulated: &Matrix4<f32>,
        pre_visit: &mut dyn FnMut(&Node, &Matrix4<f32>),
        post_visit: &mut dyn FnMut(&Node),
    ) {
        let node = &self.nodes[id.0];
        let current = accumulated * node.local;
        pre_visit(node, &current);
        for child in &node.children {
            self.visit(*child, &current, pre_visit, post_visit);
        }
        post_visit(node);
    }

    /// All node ids in pre-order, the order the physics loop scans them in.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.nodes.len());
        self.traverse(|node, _| ids.push(node.id), |_| {});
        ids
    }

    /// Nodes whose body matches `predicate`, in pre-order.
    pub fn find_bodies(&self, predicate: impl Fn(&PhysicsBody) -> bool) -> Vec<NodeId> {
        self.node_ids()
            .into_iter()
            .filter(|id| self.body(*id).is_some_and(&predicate))
            .collect()
    }

    fn label(&self, id: NodeId) -> String {
        match self.get(id).and_then(|node| node.name.as_deref()) {
            Some(name) => format!("{} ({})", id, name),
            None => id.to_string(),
        }
    }
}

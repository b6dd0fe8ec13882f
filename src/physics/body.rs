//! Per-node physical state.

use cgmath::{Vector3, Zero};

use crate::data_structures::aabb::Aabb;

/// Player-only state consumed by the camera controller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub grounded: bool,
    pub jump_frames: u32,
}

impl PlayerState {
    /// Spends the ground contact for a jump. Returns `false` while airborne.
    pub fn consume_jump(&mut self) -> bool {
        std::mem::take(&mut self.grounded)
    }
}

/// Self-propulsion parameters of a pushable cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeMotion {
    pub acceleration: f32,
    // Not applied by the integrator; exposed for controllers that want damping.
    pub friction: f32,
    pub max_speed: f32,
}

impl Default for CubeMotion {
    fn default() -> Self {
        Self {
            acceleration: 20.0,
            friction: 0.2,
            max_speed: 5.0,
        }
    }
}

/// What a body is to the collision rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Role {
    Player(PlayerState),
    Pushable(CubeMotion),
    Static,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsBody {
    pub velocity: Vector3<f32>,
    pub gravity: Vector3<f32>,
    pub movable: bool,
    /// Model-space bounds. World bounds are derived per query.
    pub aabb: Aabb,
    pub role: Role,
}

impl PhysicsBody {
    pub fn player(aabb: Aabb, gravity: Vector3<f32>) -> Self {
        Self {
            velocity: Vector3::zero(),
            gravity,
            movable: true,
            aabb,
            role: Role::Player(PlayerState::default()),
        }
    }

    pub fn pushable(aabb: Aabb, motion: CubeMotion) -> Self {
        Self {
            velocity: Vector3::zero(),
            gravity: Vector3::zero(),
            movable: true,
            aabb,
            role: Role::Pushable(motion),
        }
    }

    /// Walls, floors and portals.
    pub fn fixed(aabb: Aabb) -> Self {
        Self {
            velocity: Vector3::zero(),
            gravity: Vector3::zero(),
            movable: false,
            aabb,
            role: Role::Static,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector3<f32>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_movable(mut self, movable: bool) -> Self {
        self.movable = movable;
        self
    }

    pub fn is_player(&self) -> bool {
        matches!(self.role, Role::Player(_))
    }

    pub fn is_pushable(&self) -> bool {
        matches!(self.role, Role::Pushable(_))
    }

    /// Static bodies carry no meaningful velocity.
    pub fn has_velocity(&self) -> bool {
        !matches!(self.role, Role::Static)
    }

    pub fn player_state(&self) -> Option<&PlayerState> {
        match &self.role {
            Role::Player(state) => Some(state),
            _ => None,
        }
    }

    pub fn player_state_mut(&mut self) -> Option<&mut PlayerState> {
        match &mut self.role {
            Role::Player(state) => Some(state),
            _ => None,
        }
    }

    pub fn cube_motion(&self) -> Option<&CubeMotion> {
        match &self.role {
            Role::Pushable(motion) => Some(motion),
            _ => None,
        }
    }
}

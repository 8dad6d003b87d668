//! Simulated body state and entity kinds
//!
//! Every simulated object shares a `Body` (position, box, contact flags);
//! kind-specific data lives on the wrapper structs so that, say, an AI state
//! can never be read off a platform tile.

use glam::{Vec3, vec3};

use super::ai::{AiState, AiVariant};
use super::animation::SpriteAnimation;
use crate::consts::*;

/// Stable identity handle into the game state's entity storage.
///
/// Used for `last_hit` back-references; compared for identity, never
/// dereferenced for ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityId {
    Player,
    Platform(usize),
    Enemy(usize),
}

/// Which sides of a body were resolved against a candidate this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactFlags {
    /// Something above was resolved (body pushed downward)
    pub top: bool,
    /// Something below was resolved (body pushed upward)
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl ContactFlags {
    /// True if either horizontal side made contact
    pub fn any_side(&self) -> bool {
        self.left || self.right
    }
}

/// Common state for any simulated body.
///
/// The bounding box is always derived from `position` and `width`/`height`;
/// it is never stored separately. Z is unused by gameplay and kept only for
/// render depth.
#[derive(Debug, Clone)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    /// Movement intent for this tick, written by input (player) or AI (enemy)
    pub movement: Vec3,
    /// Full box extents, centered on `position`
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub jump_power: f32,
    /// Set by input/AI, consumed and cleared by the simulation step
    pub jump_requested: bool,
    pub touching: ContactFlags,
    /// Most recent body this one was resolved against
    pub last_hit: Option<EntityId>,
    /// Inactive bodies are skipped by collision and AI
    pub is_active: bool,
}

impl Body {
    pub fn new(position: Vec3, width: f32, height: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            movement: Vec3::ZERO,
            width,
            height,
            speed: 0.0,
            jump_power: 0.0,
            jump_requested: false,
            touching: ContactFlags::default(),
            last_hit: None,
            is_active: true,
        }
    }

    /// Grounded means the last resolution pass pushed this body up off
    /// something below it
    pub fn grounded(&self) -> bool {
        self.touching.bottom
    }
}

/// The player-controlled body plus its sprite animation state
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub anim: SpriteAnimation,
}

impl Player {
    pub fn spawn() -> Self {
        let mut body = Body::new(PLAYER_SPAWN, PLAYER_WIDTH, PLAYER_HEIGHT);
        body.acceleration = vec3(0.0, GRAVITY, 0.0);
        body.speed = PLAYER_SPEED;
        body.jump_power = PLAYER_JUMP_POWER;
        Self {
            body,
            anim: SpriteAnimation::new(),
        }
    }
}

/// A static platform tile; position never changes after construction
#[derive(Debug, Clone)]
pub struct Platform {
    pub body: Body,
}

impl Platform {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(vec3(x, y, 0.0), TILE_SIZE, TILE_SIZE),
        }
    }
}

/// Whether player contact on the side of this enemy physically pushes the
/// enemy out or only records the contact flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideContact {
    Push,
    DetectOnly,
}

/// An enemy body plus its behavior state machine
#[derive(Debug, Clone)]
pub struct Enemy {
    pub body: Body,
    pub variant: AiVariant,
    pub state: AiState,
    pub side_contact: SideContact,
}

impl Enemy {
    fn spawn(position: Vec3, variant: AiVariant, state: AiState, side_contact: SideContact) -> Self {
        let mut body = Body::new(position, ENEMY_WIDTH, ENEMY_HEIGHT);
        body.acceleration = vec3(0.0, GRAVITY, 0.0);
        body.speed = ENEMY_SPEED;
        Self {
            body,
            variant,
            state,
            side_contact,
        }
    }

    /// The walker marches left from spawn and shoves the player on contact
    pub fn walker() -> Self {
        let mut enemy = Enemy::spawn(
            WALKER_SPAWN,
            AiVariant::Walker,
            AiState::Walking,
            SideContact::Push,
        );
        enemy.body.movement = vec3(-1.0, 0.0, 0.0);
        enemy
    }

    /// The jumper hops in place whenever it lands
    pub fn jumper() -> Self {
        let mut enemy = Enemy::spawn(
            JUMPER_SPAWN,
            AiVariant::Jumper,
            AiState::Jumping,
            SideContact::DetectOnly,
        );
        enemy.body.jump_power = JUMPER_JUMP_POWER;
        enemy
    }

    /// The wait-and-go enemy idles until the player comes near
    pub fn wait_and_go() -> Self {
        Enemy::spawn(
            WAIT_AND_GO_SPAWN,
            AiVariant::WaitAndGo,
            AiState::Idle,
            SideContact::DetectOnly,
        )
    }
}

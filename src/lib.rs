//! Ledge Runner - a tiny tile platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision, enemy AI, outcome)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: User preferences persisted in LocalStorage

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::{Vec3, vec3};

    /// Fixed simulation timestep (60 Hz)
    pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
    /// Maximum fixed steps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Orthographic world extents (half-sizes); the view spans 10 x 7.5 units
    pub const VIEW_HALF_WIDTH: f32 = 5.0;
    pub const VIEW_HALF_HEIGHT: f32 = 3.75;

    /// Gravity, world units per second squared (Y is up)
    pub const GRAVITY: f32 = -9.81;

    /// Player tuning
    pub const PLAYER_SPAWN: Vec3 = vec3(-4.5, -2.25, 0.0);
    pub const PLAYER_WIDTH: f32 = 0.7;
    pub const PLAYER_HEIGHT: f32 = 0.8;
    pub const PLAYER_SPEED: f32 = 1.5;
    pub const PLAYER_JUMP_POWER: f32 = 6.0;

    /// Enemy tuning (shared box and walk speed)
    pub const ENEMY_WIDTH: f32 = 0.8;
    pub const ENEMY_HEIGHT: f32 = 0.65;
    pub const ENEMY_SPEED: f32 = 1.0;
    pub const JUMPER_JUMP_POWER: f32 = 3.0;
    /// Distance at which a waiting enemy notices the player and starts walking
    pub const WAIT_AND_GO_RADIUS: f32 = 3.0;

    /// Platform tiles are unit squares
    pub const TILE_SIZE: f32 = 1.0;

    /// Fixed platform layout: ten ground tiles plus three floating ledges
    pub const PLATFORM_LAYOUT: [(f32, f32); 13] = [
        (-4.5, -3.25),
        (-3.5, -3.25),
        (-2.5, -3.25),
        (-1.5, -3.25),
        (-0.5, -3.25),
        (0.5, -3.25),
        (1.5, -3.25),
        (2.5, -3.25),
        (3.5, -3.25),
        (4.5, -3.25),
        (-2.0, -2.25),
        (2.0, -2.25),
        (3.0, -2.25),
    ];

    /// Enemy initial placements
    pub const WALKER_SPAWN: Vec3 = vec3(1.0, -1.0, 0.0);
    pub const JUMPER_SPAWN: Vec3 = vec3(3.0, -1.0, 0.0);
    pub const WAIT_AND_GO_SPAWN: Vec3 = vec3(2.0, -1.0, 0.0);
}

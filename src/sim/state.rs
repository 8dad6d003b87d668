//! Game state and world construction
//!
//! One explicit context object owns every entity and the session outcome;
//! the tick mutates it, the renderer reads it.

use super::entity::{Enemy, Platform, Player};
use crate::consts::PLATFORM_LAYOUT;

/// Session outcome; terminal states are sticky for the rest of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Running,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::Running
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub outcome: Outcome,
    /// Fixed ticks elapsed
    pub time_ticks: u64,
    pub player: Player,
    /// Fixed-size, positions immutable after construction
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Build the fixed level: the tile layout, the player at its spawn, and
    /// the three enemies
    pub fn new() -> Self {
        let platforms = PLATFORM_LAYOUT
            .iter()
            .map(|&(x, y)| Platform::at(x, y))
            .collect();

        Self {
            outcome: Outcome::Running,
            time_ticks: 0,
            player: Player::spawn(),
            platforms,
            enemies: vec![Enemy::walker(), Enemy::jumper(), Enemy::wait_and_go()],
        }
    }

    /// True once every enemy has been stomped
    pub fn all_enemies_defeated(&self) -> bool {
        self.enemies.iter().all(|e| !e.body.is_active)
    }
}

//! Enemy behavior state machines
//!
//! Each variant writes only movement intent (and a jump request for the
//! jumper) before the physics step runs; AI never touches positions.

use super::entity::{Body, Enemy};
use crate::consts::WAIT_AND_GO_RADIUS;

/// Behavioral category of an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiVariant {
    Walker,
    Jumper,
    WaitAndGo,
}

/// Current state within a variant's machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Idle,
    Walking,
    Jumping,
}

/// Drive one enemy for this tick. Inactive enemies are untouched.
pub fn drive(enemy: &mut Enemy, player: &Body) {
    if !enemy.body.is_active {
        return;
    }
    match enemy.variant {
        AiVariant::Walker => walker(enemy),
        AiVariant::Jumper => jumper(enemy),
        AiVariant::WaitAndGo => wait_and_go(enemy, player),
    }
}

/// Marches at constant speed in its current direction, forever
fn walker(enemy: &mut Enemy) {
    if enemy.state == AiState::Walking {
        let dir = if enemy.body.movement.x < 0.0 { -1.0 } else { 1.0 };
        enemy.body.movement.x = dir;
    }
}

/// Requests a hop every time it lands; no horizontal movement
fn jumper(enemy: &mut Enemy) {
    if enemy.state == AiState::Jumping && enemy.body.grounded() {
        enemy.body.jump_requested = true;
    }
}

/// Idles until the player comes within range, then walks toward them
fn wait_and_go(enemy: &mut Enemy, player: &Body) {
    match enemy.state {
        AiState::Idle => {
            if player.position.distance(enemy.body.position) < WAIT_AND_GO_RADIUS {
                enemy.state = AiState::Walking;
            }
        }
        AiState::Walking => {
            let dx = player.position.x - enemy.body.position.x;
            enemy.body.movement.x = if dx < 0.0 { -1.0 } else { 1.0 };
        }
        AiState::Jumping => {}
    }
}

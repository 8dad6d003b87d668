//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable entity order (player, then platforms, then enemies by index)
//! - No rendering or platform dependencies

pub mod ai;
pub mod animation;
pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;

pub use ai::{AiState, AiVariant};
pub use animation::{Direction, SpriteAnimation};
pub use collision::{Axis, overlaps, resolve_x, resolve_y, shallow_axis};
pub use entity::{Body, ContactFlags, Enemy, EntityId, Platform, Player, SideContact};
pub use state::{GameState, Outcome};
pub use tick::{TickAccumulator, TickInput, tick};

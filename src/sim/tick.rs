//! Fixed timestep simulation tick
//!
//! One tick: player intent from input, AI intent per enemy, per-body
//! integration with per-axis platform resolution, player-vs-enemy contact
//! checks, then outcome evaluation. The `TickAccumulator` decides how many
//! ticks a rendered frame runs.

use glam::Vec3;

use super::ai;
use super::animation::Direction;
use super::collision::{self, Axis};
use super::entity::{Body, EntityId, Platform, SideContact};
use super::state::{GameState, Outcome};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Jump pressed this frame (one-shot)
    pub jump: bool,
}

/// Carry-over wall-clock time deciding how many fixed ticks each frame runs.
///
/// Whatever fraction of a timestep is left after draining carries to the
/// next frame, so tick count depends only on total elapsed time, not on how
/// it was chunked across frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickAccumulator {
    carry: f32,
}

impl TickAccumulator {
    pub fn new() -> Self {
        Self { carry: 0.0 }
    }

    /// Add a frame's wall-clock delta
    pub fn add(&mut self, frame_dt: f32) {
        self.carry += frame_dt;
    }

    /// Consume one fixed timestep if enough time has accumulated
    pub fn try_consume(&mut self) -> bool {
        if self.carry >= FIXED_TIMESTEP {
            self.carry -= FIXED_TIMESTEP;
            true
        } else {
            false
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    debug_assert!(dt > 0.0, "timestep must be positive");

    state.time_ticks += 1;
    let running = !state.outcome.is_terminal();

    // Input becomes player intent; ignored once the session is decided
    let player = &mut state.player;
    player.body.movement = Vec3::ZERO;
    if running {
        if input.left {
            player.body.movement.x = -1.0;
            player.anim.facing = Direction::Left;
        } else if input.right {
            player.body.movement.x = 1.0;
            player.anim.facing = Direction::Right;
        }
        if input.jump {
            player.body.jump_requested = true;
        }
    }

    // AI intent per enemy, before any integration
    if running {
        let player_body = &state.player.body;
        for enemy in &mut state.enemies {
            ai::drive(enemy, player_body);
        }
    }

    // Physics, player first, then enemies in index order
    step_body(dt, &mut state.player.body, &state.platforms);
    let walking = state.player.body.movement.x != 0.0;
    state.player.anim.advance(dt, walking);

    for enemy in &mut state.enemies {
        if enemy.body.is_active {
            step_body(dt, &mut enemy.body, &state.platforms);
        }
    }

    // Player-vs-enemy contact, from each enemy's point of view
    let player_body = &state.player.body;
    for enemy in &mut state.enemies {
        if !enemy.body.is_active {
            continue;
        }
        match collision::shallow_axis(&enemy.body, player_body) {
            Some(Axis::Y) => {
                collision::resolve_y(&mut enemy.body, player_body, EntityId::Player, 1.0);
            }
            Some(Axis::X) => {
                let factor = match enemy.side_contact {
                    SideContact::Push => 1.0,
                    SideContact::DetectOnly => 0.0,
                };
                collision::resolve_x(&mut enemy.body, player_body, EntityId::Player, factor);
            }
            None => {}
        }
    }

    if running {
        evaluate_outcome(state);
    }
}

/// Integrate one body for `dt` and resolve it against the platform set,
/// one axis at a time
fn step_body(dt: f32, body: &mut Body, platforms: &[Platform]) {
    let grounded = body.grounded();
    collision::reset_contacts(body);

    // A jump request converts to velocity only when grounded; it is always
    // consumed, so airborne presses don't queue
    if body.jump_requested {
        body.jump_requested = false;
        if grounded {
            body.velocity.y = body.jump_power;
        }
    }

    body.velocity.x = body.movement.x * body.speed;
    body.velocity += body.acceleration * dt;

    body.position.y += body.velocity.y * dt;
    collision::resolve_set_y(body, platform_candidates(platforms), 1.0);

    body.position.x += body.velocity.x * dt;
    collision::resolve_set_x(body, platform_candidates(platforms), 1.0);
}

fn platform_candidates(platforms: &[Platform]) -> impl Iterator<Item = (EntityId, &Body)> {
    platforms
        .iter()
        .enumerate()
        .map(|(i, p)| (EntityId::Platform(i), &p.body))
}

/// Decide win/loss from this tick's contact flags.
///
/// Stomps (player contact from above) deactivate the enemy; a surviving
/// enemy's side contact with the player loses the session; all enemies down
/// wins it. Terminal outcomes are sticky.
fn evaluate_outcome(state: &mut GameState) {
    for enemy in &mut state.enemies {
        if enemy.body.last_hit != Some(EntityId::Player) || !enemy.body.is_active {
            continue;
        }
        if enemy.body.touching.top {
            enemy.body.is_active = false;
        } else if enemy.body.touching.any_side() {
            state.outcome = Outcome::Lost;
        }
    }

    if state.outcome == Outcome::Running && state.all_enemies_defeated() {
        state.outcome = Outcome::Won;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;
    use proptest::prelude::*;

    fn run_ticks(state: &mut GameState, input: &TickInput, n: u32) {
        for _ in 0..n {
            tick(state, input, FIXED_TIMESTEP);
        }
    }

    /// Let the player settle onto the ground below its spawn
    fn settled_state() -> GameState {
        let mut state = GameState::new();
        run_ticks(&mut state, &TickInput::default(), 30);
        assert!(state.player.body.grounded());
        state
    }

    #[test]
    fn test_jump_from_ground() {
        let mut state = settled_state();
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &input, FIXED_TIMESTEP);
        assert!(state.player.body.velocity.y > 0.0);
        assert!(!state.player.body.jump_requested);
    }

    #[test]
    fn test_airborne_jump_is_dropped() {
        let mut state = settled_state();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, FIXED_TIMESTEP);

        // Mid-air now; a second press must not convert or queue
        tick(&mut state, &TickInput::default(), FIXED_TIMESTEP);
        assert!(!state.player.body.grounded());
        let vy_before = state.player.body.velocity.y;
        tick(&mut state, &jump, FIXED_TIMESTEP);
        assert!(state.player.body.velocity.y < vy_before);
        assert!(!state.player.body.jump_requested);
    }

    #[test]
    fn test_facing_follows_input() {
        let mut state = settled_state();
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &left, FIXED_TIMESTEP);
        assert_eq!(state.player.anim.facing, Direction::Left);
        assert!(state.player.body.velocity.x < 0.0);

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right, FIXED_TIMESTEP);
        assert_eq!(state.player.anim.facing, Direction::Right);
    }

    #[test]
    fn test_walker_stomp_deactivates() {
        let mut state = GameState::new();
        // Drop the player right above the walker, already falling
        let walker_pos = state.enemies[0].body.position;
        state.player.body.position = walker_pos + vec3(0.0, 0.7, 0.0);
        state.player.body.velocity.y = -1.0;

        tick(&mut state, &TickInput::default(), FIXED_TIMESTEP);

        let walker = &state.enemies[0];
        assert!(!walker.body.is_active);
        assert!(walker.body.touching.top);
        assert_eq!(walker.body.last_hit, Some(EntityId::Player));
        // One stomped enemy alone decides nothing
        assert_eq!(state.outcome, Outcome::Running);
    }

    #[test]
    fn test_stomped_enemy_is_fully_skipped() {
        let mut state = GameState::new();
        state.enemies[0].body.is_active = false;
        let frozen = state.enemies[0].body.position;

        run_ticks(&mut state, &TickInput::default(), 60);
        assert_eq!(state.enemies[0].body.position, frozen);
    }

    #[test]
    fn test_jumper_hops_forever() {
        let mut state = GameState::new();
        let mut landings = 0;
        let mut airborne_after_landing = false;
        let mut was_grounded = false;

        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), FIXED_TIMESTEP);
            let grounded = state.enemies[1].body.grounded();
            if grounded && !was_grounded {
                landings += 1;
            }
            if was_grounded && !grounded {
                airborne_after_landing = true;
            }
            was_grounded = grounded;
        }

        assert!(landings >= 2, "jumper landed only {landings} times");
        assert!(airborne_after_landing);
        assert!(state.enemies[1].body.is_active);
    }

    #[test]
    fn test_side_contact_with_active_enemy_loses() {
        let mut state = GameState::new();
        // Stand the player beside the walker, overlapping only a sliver in X
        let walker_pos = state.enemies[0].body.position;
        state.player.body.position = walker_pos + vec3(0.7, 0.05, 0.0);

        tick(&mut state, &TickInput::default(), FIXED_TIMESTEP);

        assert_eq!(state.outcome, Outcome::Lost);
        let walker = &state.enemies[0];
        assert!(walker.body.is_active);
        assert!(walker.body.touching.any_side());
        assert!(!walker.body.touching.top);
    }

    #[test]
    fn test_walker_is_blocked_by_ledge_side() {
        // Marching left from spawn the walker runs into the right side of
        // the floating ledge at x = -2.0 and holds there; nothing ends the
        // session on its own
        let mut state = GameState::new();
        run_ticks(&mut state, &TickInput::default(), 300);

        let walker = &state.enemies[0].body;
        assert!((walker.position.x - (-1.1)).abs() < 1e-3);
        assert!(walker.grounded());
        assert_eq!(state.outcome, Outcome::Running);
    }

    #[test]
    fn test_won_on_exact_tick_and_sticky() {
        let mut state = settled_state();
        for enemy in &mut state.enemies {
            enemy.body.is_active = false;
        }
        assert_eq!(state.outcome, Outcome::Running);

        tick(&mut state, &TickInput::default(), FIXED_TIMESTEP);
        assert_eq!(state.outcome, Outcome::Won);

        // Even if an enemy were somehow revived, the outcome holds
        state.enemies[0].body.is_active = true;
        run_ticks(&mut state, &TickInput::default(), 10);
        assert_eq!(state.outcome, Outcome::Won);
    }

    #[test]
    fn test_input_gated_after_terminal() {
        let mut state = settled_state();
        state.outcome = Outcome::Lost;

        let input = TickInput {
            right: true,
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &input, FIXED_TIMESTEP);
        assert_eq!(state.player.body.movement.x, 0.0);
        assert_eq!(state.player.body.velocity.x, 0.0);
        assert!(!state.player.body.jump_requested);
        assert_eq!(state.outcome, Outcome::Lost);
    }

    #[test]
    fn test_accumulator_chunking_equivalence() {
        // One frame of 3 timesteps vs ten frames of 0.3 timesteps each
        let mut lump = TickAccumulator::new();
        lump.add(3.0 * FIXED_TIMESTEP);
        let mut lump_ticks = 0;
        while lump.try_consume() {
            lump_ticks += 1;
        }

        let mut split = TickAccumulator::new();
        let mut split_ticks = 0;
        for _ in 0..10 {
            split.add(0.3 * FIXED_TIMESTEP);
            while split.try_consume() {
                split_ticks += 1;
            }
        }

        assert_eq!(lump_ticks, 3);
        assert!((split_ticks as i32 - lump_ticks as i32).abs() <= 1);
    }

    #[test]
    fn test_fast_frames_run_zero_ticks() {
        let mut acc = TickAccumulator::new();
        acc.add(FIXED_TIMESTEP * 0.4);
        assert!(!acc.try_consume());
        // Carry persists into the next frame
        acc.add(FIXED_TIMESTEP * 0.7);
        assert!(acc.try_consume());
        assert!(!acc.try_consume());
    }

    proptest! {
        /// However the same total time is chunked across frames, the drained
        /// tick count stays within one rounding boundary of the whole-step
        /// count
        #[test]
        fn prop_accumulator_is_chunking_invariant(
            chunks in proptest::collection::vec(0.01f32..3.0, 1..40)
        ) {
            let total: f32 = chunks.iter().sum();

            let mut acc = TickAccumulator::new();
            let mut ticks = 0u32;
            for chunk in &chunks {
                acc.add(chunk * FIXED_TIMESTEP);
                while acc.try_consume() {
                    ticks += 1;
                }
            }

            let expected = total.floor() as i64;
            prop_assert!((ticks as i64 - expected).abs() <= 1);
        }
    }
}

//! Shape generation for the platformer scene
//!
//! Builds one triangle list per frame from the game state: platform tiles,
//! enemies, and the player figure with a simple leg stride driven by the
//! sprite animation slot.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::animation::FRAMES_PER_DIRECTION;
use crate::sim::{AiVariant, Body, Direction, GameState};

/// Six vertices for an axis-aligned quad centered at `center`
pub fn quad(center: Vec2, half_w: f32, half_h: f32, color: [f32; 4]) -> [Vertex; 6] {
    let (l, r) = (center.x - half_w, center.x + half_w);
    let (b, t) = (center.y - half_h, center.y + half_h);
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]
}

/// Quad covering a body's bounding box
pub fn body_quad(body: &Body, color: [f32; 4]) -> [Vertex; 6] {
    quad(
        Vec2::new(body.position.x, body.position.y),
        body.width / 2.0,
        body.height / 2.0,
        color,
    )
}

/// A platform tile: dirt block with a grass lip
pub fn tile(body: &Body, out: &mut Vec<Vertex>) {
    out.extend(body_quad(body, colors::TILE));
    let lip_h = body.height * 0.12;
    out.extend(quad(
        Vec2::new(body.position.x, body.position.y + body.height / 2.0 - lip_h / 2.0),
        body.width / 2.0,
        lip_h / 2.0,
        colors::TILE_TOP,
    ));
}

/// Per-slot horizontal leg offsets for the four-frame walk cycle
const STRIDE: [f32; FRAMES_PER_DIRECTION] = [0.0, 0.5, 0.0, -0.5];

/// The player figure: torso plus two legs whose stride follows the current
/// animation frame and flips with facing
pub fn player_figure(body: &Body, facing: Direction, anim_slot: usize, out: &mut Vec<Vertex>) {
    let center = Vec2::new(body.position.x, body.position.y);
    let half_w = body.width / 2.0;
    let half_h = body.height / 2.0;

    let leg_h = body.height * 0.3;
    let torso_h = body.height - leg_h;

    // Torso sits on top of the legs
    out.extend(quad(
        Vec2::new(center.x, center.y + half_h - torso_h / 2.0),
        half_w,
        torso_h / 2.0,
        colors::PLAYER,
    ));

    let mirror = if facing == Direction::Left { -1.0 } else { 1.0 };
    let stride = STRIDE[anim_slot % FRAMES_PER_DIRECTION] * half_w * mirror;
    let leg_w = body.width * 0.22;
    let leg_y = center.y - half_h + leg_h / 2.0;
    for side in [-1.0, 1.0] {
        let x = center.x + side * half_w * 0.45 + side * stride * 0.5;
        out.extend(quad(
            Vec2::new(x, leg_y),
            leg_w / 2.0,
            leg_h / 2.0,
            colors::PLAYER_LIMB,
        ));
    }
}

/// An enemy: body quad plus an eye on its walking side
pub fn enemy_figure(body: &Body, variant: AiVariant, out: &mut Vec<Vertex>) {
    let mut color = match variant {
        AiVariant::Walker => colors::WALKER,
        AiVariant::Jumper => colors::JUMPER,
        AiVariant::WaitAndGo => colors::WAIT_AND_GO,
    };
    if !body.is_active {
        color[3] = colors::DEFEATED_ALPHA;
    }
    out.extend(body_quad(body, color));

    if body.is_active {
        let look = if body.movement.x < 0.0 { -1.0 } else { 1.0 };
        let eye = Vec2::new(
            body.position.x + look * body.width * 0.25,
            body.position.y + body.height * 0.15,
        );
        out.extend(quad(eye, body.width * 0.08, body.height * 0.1, [1.0; 4]));
    }
}

/// Assemble the whole scene back-to-front.
///
/// `reduced_motion` freezes the walk-cycle stride on its rest pose.
pub fn scene(state: &GameState, reduced_motion: bool) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(
        state.platforms.len() * 12 + state.enemies.len() * 12 + 18,
    );

    for platform in &state.platforms {
        tile(&platform.body, &mut vertices);
    }
    for enemy in &state.enemies {
        enemy_figure(&enemy.body, enemy.variant, &mut vertices);
    }
    let slot = if reduced_motion {
        0
    } else {
        state.player.anim.slot
    };
    player_figure(&state.player.body, state.player.anim.facing, slot, &mut vertices);

    vertices
}

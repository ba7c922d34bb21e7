//! Per-frame simulation step
//!
//! Core game loop that advances the simulation one step: paddle first, then
//! the ball and everything it can hit, then respawn if the ball fell out.

use serde::{Deserialize, Serialize};

use super::collision::{Contact, resolve_ball};
use super::rect::Rect;
use super::state::{Block, GameState};
use crate::config::Config;

/// Input for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Pointer x position in screen pixels
    pub pointer_x: f64,
}

impl TickInput {
    pub fn pointer(pointer_x: f64) -> Self {
        Self { pointer_x }
    }
}

/// What the host needs to draw after a tick
#[derive(Debug, Clone, Serialize)]
pub struct TickResult {
    /// Tick number this result belongs to (1-based)
    pub tick: u64,
    pub paddle: Rect,
    /// The ball in play. After a loss this is already the respawned ball.
    pub ball: Rect,
    /// Live blocks, sorted by id
    pub blocks: Vec<Block>,
    /// The ball fell past the bottom edge this tick
    pub ball_lost: bool,
    /// Everything the ball bounced off this tick, in order
    pub contacts: Vec<Contact>,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f64) -> TickResult {
    debug_assert!(dt.is_finite() && dt >= 0.0, "bad timestep {}", dt);

    state.time_ticks += 1;

    state.paddle.track_pointer(input.pointer_x, dt);

    let resolution = resolve_ball(
        &mut state.ball,
        &state.paddle,
        &mut state.blocks,
        &state.config,
        dt,
    );

    if resolution.ball_lost {
        log::debug!("Ball lost on tick {}", state.time_ticks);
        state.respawn_ball();
    }

    TickResult {
        tick: state.time_ticks,
        paddle: state.paddle.rect(),
        ball: state.ball.rect(),
        blocks: state.blocks.clone(),
        ball_lost: resolution.ball_lost,
        contacts: resolution.contacts,
    }
}

/// Lay out the block grid, centered horizontally, ids in row-major order
pub fn generate_blocks(config: &Config) -> Vec<Block> {
    let left = (config.screen_width - config.grid_width()) / 2.0;
    let step_x = config.block_width + config.block_buffer;
    let step_y = config.block_height + config.block_buffer;

    let mut blocks = Vec::with_capacity((config.block_rows * config.block_cols) as usize);
    for row in 0..config.block_rows {
        for col in 0..config.block_cols {
            blocks.push(Block {
                id: row * config.block_cols + col,
                rect: Rect::new(
                    left + col as f64 * step_x,
                    config.block_top_offset + row as f64 * step_y,
                    config.block_width,
                    config.block_height,
                ),
            });
        }
    }

    log::debug!(
        "Generated {}x{} block grid starting at x={}",
        config.block_rows,
        config.block_cols,
        left
    );
    blocks
}

//! Collision detection and response
//!
//! The heart of the game: move the ball, bounce it off the walls, the paddle
//! and the blocks, and report what it touched. Every bounce goes through
//! [`Ball::bounce`], so the facing stays unit length.
//!
//! Order within a tick is fixed: side walls, top wall, paddle, blocks, then
//! the out-of-bounds check. There is no bottom wall.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Ball, Block, Paddle};
use super::vector::{LEFT_NORM, RIGHT_NORM, UP_NORM, dot, normalize, sign};
use crate::config::Config;

/// Gap left between the ball and a wall after it is pushed back in
pub const WALL_NUDGE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
    Top,
}

impl WallSide {
    /// Normal pointing into the playfield
    pub fn normal(&self) -> DVec2 {
        match self {
            WallSide::Left => DVec2::X,
            WallSide::Right => DVec2::NEG_X,
            WallSide::Top => DVec2::Y,
        }
    }
}

/// Where along its top edge the paddle was struck
///
/// The ends of the paddle throw the ball off at steeper angles than the
/// middle, which is what lets the player aim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleZone {
    /// Ball entirely inside the left strike zone
    FarLeft,
    /// Ball straddling the left strike zone boundary
    Left,
    Center,
    /// Ball reaching into the right strike zone
    Right,
    /// Ball edge resting exactly on a strike zone boundary
    FarRight,
}

impl PaddleZone {
    /// Classify a hit from the ball's edges against the strike zone boundaries
    ///
    /// Checked left to right. The center band is strict, and any ball
    /// inside the right strike zone straddles it for the blended normal, so
    /// `FarRight` is only reached with a ball edge exactly on a boundary.
    pub fn classify(ball: &Rect, paddle: &Rect, strike_zone: f64) -> Self {
        let left_boundary = paddle.left + strike_zone;
        let right_boundary = paddle.right() - strike_zone;

        if ball.right() < left_boundary {
            PaddleZone::FarLeft
        } else if ball.left < left_boundary {
            PaddleZone::Left
        } else if ball.left > left_boundary && ball.right() < right_boundary {
            PaddleZone::Center
        } else if ball.right() > right_boundary {
            PaddleZone::Right
        } else {
            PaddleZone::FarRight
        }
    }

    /// Surface normal for this zone
    ///
    /// The straddling zones use the raw sum of the diagonal and up normals.
    /// It is not unit length, which makes the reflection overshoot toward
    /// the side before the result is renormalized.
    pub fn normal(&self) -> DVec2 {
        match self {
            PaddleZone::FarLeft => LEFT_NORM,
            PaddleZone::Left => LEFT_NORM + UP_NORM,
            PaddleZone::Center => UP_NORM,
            PaddleZone::Right => RIGHT_NORM + UP_NORM,
            PaddleZone::FarRight => RIGHT_NORM,
        }
    }
}

/// Which part of a block the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockFace {
    /// The corner facing the ball
    Corner,
    /// Left or right edge (horizontal normal)
    VerticalEdge,
    /// Top or bottom edge (vertical normal)
    HorizontalEdge,
}

impl BlockFace {
    /// Normal opposing a ball travelling in direction `(sx, sy)`
    pub fn normal(&self, sx: i8, sy: i8) -> DVec2 {
        let (sx, sy) = (sx as f64, sy as f64);
        match self {
            BlockFace::Corner => normalize(DVec2::new(-sx, -sy)),
            BlockFace::VerticalEdge => DVec2::new(-sx, 0.0),
            BlockFace::HorizontalEdge => DVec2::new(0.0, -sy),
        }
    }
}

/// Something the ball bounced off during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    Wall(WallSide),
    Paddle(PaddleZone),
    /// Block `id` was struck and destroyed
    Block { id: u32, face: BlockFace },
}

/// Outcome of resolving one tick of ball movement
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Bounces in the order they happened
    pub contacts: Vec<Contact>,
    /// Ball fell past the bottom of the screen
    pub ball_lost: bool,
}

/// Move the ball and resolve every collision for one tick
///
/// Removes at most one block from `blocks`.
pub fn resolve_ball(
    ball: &mut Ball,
    paddle: &Paddle,
    blocks: &mut Vec<Block>,
    config: &Config,
    dt: f64,
) -> Resolution {
    let mut resolution = Resolution::default();

    ball.pos += ball.velocity() * dt;

    resolve_side_walls(ball, config.screen_width, &mut resolution.contacts);
    resolve_top_wall(ball, &mut resolution.contacts);

    if let Some(zone) = resolve_paddle(ball, &paddle.rect()) {
        resolution.contacts.push(Contact::Paddle(zone));
    }

    if config.variant.has_blocks() {
        if let Some(contact) = resolve_blocks(ball, blocks) {
            resolution.contacts.push(contact);
        }
    }

    resolution.ball_lost = ball_out(&ball.rect(), config.screen_height);
    resolution
}

/// Bounce off `side` unless the ball is already heading away from it
///
/// A ball pushed back inside last tick may still overlap the wall; checking
/// the direction keeps it from flipping twice.
fn bounce_off_wall(ball: &mut Ball, side: WallSide, contacts: &mut Vec<Contact>) {
    let normal = side.normal();
    if dot(ball.facing, normal) < 0.0 {
        ball.bounce(normal);
        contacts.push(Contact::Wall(side));
        log::trace!("Wall {:?} -> facing ({:.3}, {:.3})", side, ball.facing.x, ball.facing.y);
    }
}

/// Left and right screen edges
pub fn resolve_side_walls(ball: &mut Ball, screen_width: f64, contacts: &mut Vec<Contact>) {
    let rect = ball.rect();
    if rect.left < 0.0 {
        ball.pos.x = WALL_NUDGE;
        bounce_off_wall(ball, WallSide::Left, contacts);
    } else if rect.right() > screen_width {
        ball.pos.x = screen_width - ball.size - WALL_NUDGE;
        bounce_off_wall(ball, WallSide::Right, contacts);
    }
}

/// Top screen edge
pub fn resolve_top_wall(ball: &mut Ball, contacts: &mut Vec<Contact>) {
    if ball.rect().top < 0.0 {
        ball.pos.y = WALL_NUDGE;
        bounce_off_wall(ball, WallSide::Top, contacts);
    }
}

/// Zoned paddle bounce; only a falling ball can hit the paddle
pub fn resolve_paddle(ball: &mut Ball, paddle: &Rect) -> Option<PaddleZone> {
    let rect = ball.rect();
    if ball.facing.y <= 0.0 || !rect.overlaps(paddle) {
        return None;
    }

    let zone = PaddleZone::classify(&rect, paddle, ball.strike_zone);
    ball.bounce(zone.normal());
    log::trace!("Paddle {:?} -> facing ({:.3}, {:.3})", zone, ball.facing.x, ball.facing.y);
    Some(zone)
}

/// Decide which part of `block` a ball moving along `facing` struck
///
/// Keyed on the signs of the facing. A diagonal ball approaches one corner
/// of the block; if it covers that corner the corner normal is used,
/// otherwise the edge it has already passed tells which face it came
/// through. The four diagonal quadrants are mirror images, so the signs
/// pick the corner and the normal and the rest is shared.
///
/// # Panics
/// If `facing` is zero on both axes. The ball always moves, so this is a
/// broken invariant rather than a collision to ignore.
pub fn classify_block_hit(ball: &Rect, block: &Rect, facing: DVec2) -> (BlockFace, DVec2) {
    let sx = sign(facing.x);
    let sy = sign(facing.y);

    let face = match (sx, sy) {
        (0, 0) => panic!(
            "block collision with a ball that has no direction ({}, {})",
            facing.x, facing.y
        ),
        (_, 0) => BlockFace::VerticalEdge,
        (0, _) => BlockFace::HorizontalEdge,
        _ => diagonal_face(ball, block, sx, sy),
    };

    (face, face.normal(sx, sy))
}

fn diagonal_face(ball: &Rect, block: &Rect, sx: i8, sy: i8) -> BlockFace {
    let contains_corner = ball.contains_point(block.corner(-sx, -sy));

    // Has the ball moved past the block edge it is heading toward on each axis?
    let crossed_x = if sx > 0 {
        ball.left >= block.left
    } else {
        ball.right() <= block.right()
    };
    let crossed_y = if sy > 0 {
        ball.top >= block.top
    } else {
        ball.bottom() <= block.bottom()
    };

    match (contains_corner, crossed_x, crossed_y) {
        // Neither edge crossed means the ball already covers the corner
        (true, _, _) | (false, false, false) => BlockFace::Corner,
        // Already inside the block's column, so it came through the top or bottom
        (false, true, false) => BlockFace::HorizontalEdge,
        (false, false, true) => BlockFace::VerticalEdge,
        (false, true, true) => {
            let depth_x = if sx > 0 {
                ball.right() - block.left
            } else {
                block.right() - ball.left
            };
            let depth_y = if sy > 0 {
                ball.bottom() - block.top
            } else {
                block.bottom() - ball.top
            };
            if depth_y < depth_x {
                BlockFace::HorizontalEdge
            } else if depth_x < depth_y {
                BlockFace::VerticalEdge
            } else {
                BlockFace::Corner
            }
        }
    }
}

/// Bounce off and destroy the first overlapping block, if any
///
/// First in id order, not nearest. A fast ball can skip past blocks between
/// ticks; nothing here sweeps the path.
pub fn resolve_blocks(ball: &mut Ball, blocks: &mut Vec<Block>) -> Option<Contact> {
    let rect = ball.rect();
    let index = blocks.iter().position(|b| rect.overlaps(&b.rect))?;
    let block = blocks.remove(index);

    let (face, normal) = classify_block_hit(&rect, &block.rect, ball.facing);
    ball.bounce(normal);
    log::debug!(
        "Block {} destroyed ({:?}), {} left",
        block.id,
        face,
        blocks.len()
    );

    Some(Contact::Block { id: block.id, face })
}

/// The ball's top edge has passed the bottom of the screen
#[inline]
pub fn ball_out(ball: &Rect, screen_height: f64) -> bool {
    ball.top > screen_height
}

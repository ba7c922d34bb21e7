//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time step supplied by the host
//! - Stable iteration order (blocks by id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{BlockFace, Contact, PaddleZone, Resolution, WallSide, resolve_ball};
pub use rect::Rect;
pub use state::{Ball, Block, GameState, Paddle};
pub use tick::{TickInput, TickResult, generate_blocks, tick};
pub use vector::{dot, normalize, reflect};

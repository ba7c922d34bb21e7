//! Paddle Break - A paddle/ball arcade core with an optional brick field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball, blocks, collisions)
//! - `config`: Session tunables with JSON loading and validation
//! - `error`: Configuration errors
//!
//! Windowing, input polling and drawing belong to the host. The host calls
//! [`sim::tick`] once per frame and draws the rectangles it gets back.

pub mod config;
pub mod error;
pub mod sim;

pub use config::{Config, Variant};
pub use error::ConfigError;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the headless host (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Screen defaults
    pub const SCREEN_WIDTH: f64 = 800.0;
    pub const SCREEN_HEIGHT: f64 = 800.0;

    /// Paddle defaults
    pub const PLAYER_WIDTH: f64 = 100.0;
    pub const PLAYER_HEIGHT: f64 = 10.0;
    pub const PLAYER_SPEED: f64 = 320.0;
    /// Paddle bottom edge as a fraction of screen height
    pub const PLAYER_START_HEIGHT: f64 = 0.95;
    /// Pointer offset (pixels) below which the paddle holds still
    pub const PLAYER_DEADZONE: f64 = 10.0;

    /// Ball defaults
    pub const BALL_LENGTH: f64 = 10.0;
    pub const BALL_SPEED: f64 = 400.0;

    /// Block grid defaults
    pub const BLOCK_WIDTH: f64 = 60.0;
    pub const BLOCK_HEIGHT: f64 = 15.0;
    pub const BLOCK_BUFFER: f64 = 10.0;
    pub const BLOCK_ROWS: u32 = 10;
    pub const BLOCK_COLS: u32 = 10;
    pub const BLOCK_TOP_OFFSET: f64 = 50.0;

    /// Paddle width is split by this to get the strike zone width
    pub const STRIKE_ZONE_DIVISOR: f64 = 3.0;
}

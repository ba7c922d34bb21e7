//! Session configuration
//!
//! Every tunable is fixed when a session starts. Missing JSON keys fall back
//! to the defaults in [`crate::consts`], so a file can override just the
//! values you care about.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Which game is being simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Paddle and ball only
    Classic,
    /// Paddle, ball and a grid of destructible blocks
    #[default]
    Breakout,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Breakout => "Breakout",
        }
    }

    /// Whether this variant has a block field
    pub fn has_blocks(&self) -> bool {
        match self {
            Variant::Classic => false,
            Variant::Breakout => true,
        }
    }
}

/// Session tunables (read-only once a [`GameState`](crate::sim::GameState) exists)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub variant: Variant,

    // === Screen ===
    pub screen_width: f64,
    pub screen_height: f64,

    // === Paddle ===
    pub player_width: f64,
    pub player_height: f64,
    /// Horizontal speed (pixels/s)
    pub player_speed: f64,
    /// Paddle bottom edge as a fraction of screen height
    pub player_start_height: f64,
    /// Pointer offset below which the paddle does not move
    pub player_deadzone: f64,

    // === Ball ===
    /// Side length of the square ball
    pub ball_length: f64,
    /// Ball speed (pixels/s)
    pub ball_speed: f64,

    // === Blocks ===
    pub block_width: f64,
    pub block_height: f64,
    /// Gap between neighbouring blocks
    pub block_buffer: f64,
    pub block_rows: u32,
    pub block_cols: u32,
    /// Distance from the screen top to the first block row
    pub block_top_offset: f64,

    /// Paddle width divided by this gives the strike zone width
    pub strike_zone_divisor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_start_height: PLAYER_START_HEIGHT,
            player_deadzone: PLAYER_DEADZONE,

            ball_length: BALL_LENGTH,
            ball_speed: BALL_SPEED,

            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_buffer: BLOCK_BUFFER,
            block_rows: BLOCK_ROWS,
            block_cols: BLOCK_COLS,
            block_top_offset: BLOCK_TOP_OFFSET,

            strike_zone_divisor: STRIKE_ZONE_DIVISOR,
        }
    }
}

impl Config {
    /// Default tunables for the given variant
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Parse a JSON document; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded {} config from {}", config.variant.as_str(), path.display());
        Ok(config)
    }

    /// Width of the paddle's steep-reflection band at each end
    #[inline]
    pub fn strike_zone(&self) -> f64 {
        self.player_width / self.strike_zone_divisor
    }

    /// Y of the paddle's top edge
    #[inline]
    pub fn paddle_top(&self) -> f64 {
        self.screen_height * self.player_start_height - self.player_height
    }

    /// Total width of the block grid including inner gaps
    pub fn grid_width(&self) -> f64 {
        let cols = self.block_cols as f64;
        cols * self.block_width + (cols - 1.0).max(0.0) * self.block_buffer
    }

    /// Y of the bottom edge of the lowest block row
    pub fn grid_bottom(&self) -> f64 {
        let rows = self.block_rows as f64;
        self.block_top_offset + rows * self.block_height + (rows - 1.0).max(0.0) * self.block_buffer
    }

    /// Check that the tunables describe a playable screen
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_speed", self.player_speed),
            ("ball_length", self.ball_length),
            ("ball_speed", self.ball_speed),
            ("strike_zone_divisor", self.strike_zone_divisor),
        ];
        for (name, value) in positive {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if !(self.player_deadzone >= 0.0) {
            return Err(ConfigError::OutOfRange {
                name: "player_deadzone",
                value: self.player_deadzone,
                range: "[0, ∞)",
            });
        }
        if !(self.player_start_height > 0.0 && self.player_start_height <= 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "player_start_height",
                value: self.player_start_height,
                range: "(0, 1]",
            });
        }
        if self.strike_zone_divisor < 2.0 {
            // Below 2 the two strike zones overlap and there is no center band
            return Err(ConfigError::OutOfRange {
                name: "strike_zone_divisor",
                value: self.strike_zone_divisor,
                range: "[2, ∞)",
            });
        }
        if self.player_width > self.screen_width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.player_width,
                screen_width: self.screen_width,
            });
        }
        if self.paddle_top() < 0.0 {
            return Err(ConfigError::OutOfRange {
                name: "player_start_height",
                value: self.player_start_height,
                range: "high enough for the paddle to fit on screen",
            });
        }

        if self.variant.has_blocks() {
            self.validate_grid()?;
        }

        Ok(())
    }

    fn validate_grid(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("block_width", self.block_width),
            ("block_height", self.block_height),
            ("block_rows", self.block_rows as f64),
            ("block_cols", self.block_cols as f64),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        for (name, value) in [
            ("block_buffer", self.block_buffer),
            ("block_top_offset", self.block_top_offset),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::OutOfRange {
                    name,
                    value,
                    range: "[0, ∞)",
                });
            }
        }

        let grid_width = self.grid_width();
        if grid_width > self.screen_width {
            return Err(ConfigError::GridTooWide {
                grid_width,
                screen_width: self.screen_width,
            });
        }
        let grid_bottom = self.grid_bottom();
        let paddle_top = self.paddle_top();
        if grid_bottom >= paddle_top {
            return Err(ConfigError::GridTooTall {
                grid_bottom,
                paddle_top,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        Config::default().validate().unwrap();
        Config::for_variant(Variant::Classic).validate().unwrap();
    }

    #[test]
    fn test_strike_zone_is_a_third_of_paddle() {
        let config = Config::default();
        assert!((config.strike_zone() - 100.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_paddle_top_from_start_height() {
        let config = Config::default();
        // bottom at 800 * 0.95 = 760, height 10
        assert!((config.paddle_top() - 750.0).abs() < 1e-9);
    }

    #[test]
    fn test_grid_dimensions() {
        let config = Config::default();
        assert!((config.grid_width() - 690.0).abs() < 1e-9);
        assert!((config.grid_bottom() - 290.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json_str(r#"{ "screen_width": 600, "variant": "classic" }"#)
            .unwrap();
        assert_eq!(config.screen_width, 600.0);
        assert_eq!(config.variant, Variant::Classic);
        assert_eq!(config.ball_speed, BALL_SPEED);
    }

    #[test]
    fn test_variant_names_come_from_serde() {
        let config = Config::from_json_str(r#"{ "variant": "breakout" }"#).unwrap();
        assert_eq!(config.variant, Variant::Breakout);
        assert_eq!(config.variant.as_str(), "Breakout");

        let err = Config::from_json_str(r#"{ "variant": "tetris" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_zero_speed() {
        let err = Config::from_json_str(r#"{ "ball_speed": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                name: "ball_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Config::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_wide_grid() {
        let config = Config {
            block_cols: 20,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooWide { .. })
        ));
    }

    #[test]
    fn test_wide_grid_is_fine_without_blocks() {
        let config = Config {
            variant: Variant::Classic,
            block_cols: 20,
            ..Config::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn test_rejects_grid_reaching_paddle() {
        let config = Config {
            block_rows: 40,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooTall { .. })
        ));
    }

    #[test]
    fn test_rejects_paddle_wider_than_screen() {
        let config = Config {
            player_width: 900.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooWide { .. })
        ));
    }

    #[test]
    fn test_rejects_overlapping_strike_zones() {
        let config = Config {
            strike_zone_divisor: 1.5,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                name: "strike_zone_divisor",
                ..
            })
        ));
    }
}

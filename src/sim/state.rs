//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; the host only
//! ever sees copies of the rectangles.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::vector::{RIGHT_NORM, normalize, reflect};
use crate::config::Config;
use crate::error::ConfigError;

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Horizontal center (pixels)
    pub center_x: f64,
    /// Top edge; the paddle never moves vertically
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal speed (pixels/s)
    pub speed: f64,
    /// Pointer offset below which the paddle holds still
    pub deadzone: f64,
    /// Last movement direction: -1 left, 0 still, 1 right
    pub direction: i8,
    screen_left: f64,
    screen_right: f64,
}

impl Paddle {
    /// Paddle centered horizontally, bottom edge at `screen_height * player_start_height`
    pub fn new(config: &Config) -> Self {
        Self {
            center_x: config.screen_width / 2.0,
            top: config.paddle_top(),
            width: config.player_width,
            height: config.player_height,
            speed: config.player_speed,
            deadzone: config.player_deadzone,
            direction: 0,
            screen_left: 0.0,
            screen_right: config.screen_width,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.center_x - self.width / 2.0,
            self.top,
            self.width,
            self.height,
        )
    }

    /// Move toward the pointer at constant speed, staying on screen
    ///
    /// Only the position is clamped; `direction` keeps pointing at the wall
    /// while the pointer is beyond it.
    pub fn track_pointer(&mut self, pointer_x: f64, dt: f64) {
        let offset = pointer_x - self.center_x;
        self.direction = if offset > self.deadzone {
            1
        } else if offset < -self.deadzone {
            -1
        } else {
            0
        };

        self.center_x += self.direction as f64 * self.speed * dt;

        let half = self.width / 2.0;
        self.center_x = self
            .center_x
            .clamp(self.screen_left + half, self.screen_right - half);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the ball's square
    pub pos: DVec2,
    /// Unit direction of travel
    pub facing: DVec2,
    /// Pixels per second
    pub speed: f64,
    /// Side length
    pub size: f64,
    /// Width of the steep-reflection band at each end of the paddle
    pub strike_zone: f64,
}

impl Ball {
    /// # Panics
    /// If `facing` is the zero vector.
    pub fn new(pos: DVec2, facing: DVec2, speed: f64, size: f64, strike_zone: f64) -> Self {
        Self {
            pos,
            facing: normalize(facing),
            speed,
            size,
            strike_zone,
        }
    }

    /// Fresh ball resting on the paddle's top-center, heading up and to the right
    pub fn spawn_on(paddle: &Paddle, config: &Config) -> Self {
        let size = config.ball_length;
        let rect = Rect::from_midbottom(paddle.center_x, paddle.top, size, size);
        Self::new(
            DVec2::new(rect.left, rect.top),
            RIGHT_NORM,
            config.ball_speed,
            size,
            config.strike_zone(),
        )
    }

    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.facing * self.speed
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Reflect the facing off a surface and renormalize
    pub fn bounce(&mut self, normal: DVec2) {
        self.facing = normalize(reflect(normal, self.facing));
    }
}

/// A destructible block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Row-major grid index, never reused within a session
    pub id: u32,
    pub rect: Rect,
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: Config,
    pub paddle: Paddle,
    /// Only one ball is ever in play
    pub ball: Ball,
    /// Live blocks, sorted by id
    pub blocks: Vec<Block>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Start a session: paddle centered, ball on the paddle, full block grid
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let paddle = Paddle::new(&config);
        let ball = Ball::spawn_on(&paddle, &config);
        let blocks = if config.variant.has_blocks() {
            super::tick::generate_blocks(&config)
        } else {
            Vec::new()
        };

        log::info!(
            "{} session: {}x{} screen, {} blocks",
            config.variant.as_str(),
            config.screen_width,
            config.screen_height,
            blocks.len()
        );

        Ok(Self {
            config,
            paddle,
            ball,
            blocks,
            time_ticks: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the ball with a fresh one on the paddle
    pub fn respawn_ball(&mut self) {
        self.ball = Ball::spawn_on(&self.paddle, &self.config);
        log::debug!(
            "Ball respawned at ({:.1}, {:.1})",
            self.ball.pos.x,
            self.ball.pos.y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use proptest::prelude::*;

    fn paddle() -> Paddle {
        Paddle::new(&Config::default())
    }

    #[test]
    fn test_paddle_starts_centered() {
        let p = paddle();
        let rect = p.rect();
        assert_eq!(rect.center_x(), 400.0);
        assert!((rect.bottom() - 760.0).abs() < 1e-9);
        assert_eq!(rect.width, 100.0);
    }

    #[test]
    fn test_paddle_moves_toward_pointer() {
        let mut p = paddle();
        p.track_pointer(600.0, 0.5);
        assert_eq!(p.direction, 1);
        assert!((p.center_x - 560.0).abs() < 1e-9);

        p.track_pointer(100.0, 0.25);
        assert_eq!(p.direction, -1);
        assert!((p.center_x - 480.0).abs() < 1e-9);
    }

    #[test]
    fn test_paddle_deadzone_holds_still() {
        let mut p = paddle();
        p.track_pointer(410.0, 1.0);
        assert_eq!(p.direction, 0);
        assert_eq!(p.center_x, 400.0);

        p.track_pointer(390.0, 1.0);
        assert_eq!(p.direction, 0);
        assert_eq!(p.center_x, 400.0);

        p.track_pointer(410.5, 0.01);
        assert_eq!(p.direction, 1);
    }

    #[test]
    fn test_paddle_clamps_position_not_direction() {
        let mut p = paddle();
        for _ in 0..100 {
            p.track_pointer(2000.0, 0.1);
        }
        assert_eq!(p.rect().right(), 800.0);
        assert_eq!(p.direction, 1);

        for _ in 0..100 {
            p.track_pointer(-500.0, 0.1);
        }
        assert_eq!(p.rect().left, 0.0);
        assert_eq!(p.direction, -1);
    }

    #[test]
    fn test_ball_spawns_on_paddle_top_center() {
        let config = Config::default();
        let p = paddle();
        let ball = Ball::spawn_on(&p, &config);
        let rect = ball.rect();
        assert_eq!(rect.center_x(), p.rect().center_x());
        assert!((rect.bottom() - p.rect().top).abs() < 1e-9);
        assert!(ball.facing.x > 0.0 && ball.facing.y < 0.0);
        assert!((ball.facing.length() - 1.0).abs() < 1e-9);
        assert!((ball.strike_zone - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_ball_velocity() {
        let ball = Ball::new(DVec2::ZERO, DVec2::new(0.0, 2.0), 400.0, 10.0, 30.0);
        assert_eq!(ball.facing, DVec2::new(0.0, 1.0));
        assert_eq!(ball.velocity(), DVec2::new(0.0, 400.0));
    }

    #[test]
    fn test_ball_bounce_keeps_unit_facing() {
        let mut ball = Ball::new(DVec2::ZERO, DVec2::new(1.0, 1.0), 400.0, 10.0, 30.0);
        ball.bounce(DVec2::new(-1.0, 0.0));
        assert!(ball.facing.x < 0.0 && ball.facing.y > 0.0);
        assert!((ball.facing.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_new_state_has_full_grid() {
        let state = GameState::new(Config::default()).unwrap();
        assert_eq!(state.blocks.len(), 100);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_classic_state_has_no_blocks() {
        let state = GameState::new(Config::for_variant(Variant::Classic)).unwrap();
        assert!(state.blocks.is_empty());
    }

    #[test]
    fn test_new_state_rejects_bad_config() {
        let config = Config {
            player_width: -5.0,
            ..Config::default()
        };
        assert!(GameState::new(config).is_err());
    }

    #[test]
    fn test_respawn_follows_paddle() {
        let mut state = GameState::new(Config::default()).unwrap();
        state.paddle.center_x = 123.0;
        state.ball.pos = DVec2::new(5.0, 900.0);
        state.respawn_ball();
        assert_eq!(state.ball.rect().center_x(), 123.0);
        assert!((state.ball.rect().bottom() - state.paddle.top).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_on_screen(
            pointers in prop::collection::vec(-1000.0f64..2000.0, 1..200),
            dt in 0.001f64..0.5,
        ) {
            let mut p = paddle();
            for pointer in pointers {
                p.track_pointer(pointer, dt);
                let rect = p.rect();
                prop_assert!(rect.left >= 0.0);
                prop_assert!(rect.right() <= 800.0);
            }
        }
    }
}

//! Configuration errors
//!
//! The simulation itself has no recoverable failures: a zero-length vector or
//! a facing with no direction is a bug and panics where it is found. Bad
//! tunables, on the other hand, come from outside and are reported here.

use std::fmt;

/// Why a [`Config`](crate::Config) could not be loaded or accepted
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// Config file is not valid JSON for [`Config`](crate::Config)
    Parse(serde_json::Error),
    /// A size, speed or divisor that must be strictly positive
    NonPositive { name: &'static str, value: f64 },
    /// A value outside its accepted range
    OutOfRange {
        name: &'static str,
        value: f64,
        range: &'static str,
    },
    /// Paddle is wider than the screen
    PaddleTooWide { paddle_width: f64, screen_width: f64 },
    /// Block grid does not fit horizontally
    GridTooWide { grid_width: f64, screen_width: f64 },
    /// Block grid reaches the paddle
    GridTooTall { grid_bottom: f64, paddle_top: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {}", e),
            ConfigError::NonPositive { name, value } => {
                write!(f, "'{}' must be greater than zero, got {}", name, value)
            }
            ConfigError::OutOfRange { name, value, range } => {
                write!(f, "'{}' = {} is outside {}", name, value, range)
            }
            ConfigError::PaddleTooWide {
                paddle_width,
                screen_width,
            } => write!(
                f,
                "paddle width {} exceeds screen width {}",
                paddle_width, screen_width
            ),
            ConfigError::GridTooWide {
                grid_width,
                screen_width,
            } => write!(
                f,
                "block grid is {} wide but the screen is only {}",
                grid_width, screen_width
            ),
            ConfigError::GridTooTall {
                grid_bottom,
                paddle_top,
            } => write!(
                f,
                "block grid ends at y={} which is below the paddle top at y={}",
                grid_bottom, paddle_top
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_field() {
        let err = ConfigError::NonPositive {
            name: "ball_speed",
            value: -1.0,
        };
        assert!(err.to_string().contains("ball_speed"));
    }

    #[test]
    fn test_parse_error_has_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::from(json_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}

//! Shared types and constants for the simulation.
//!
//! Everything here is plain data. The core, terminal and engine crates all
//! take a [`LifeConfig`] by reference instead of reading process-wide state.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 50 | Grid columns |
//! | `DEFAULT_HEIGHT` | 30 | Grid rows |
//! | `DEFAULT_DENSITY` | 0.2 | Probability a cell starts alive |
//! | `FRAME_MS` | 100 | Pause between frames |
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use tui_life_types::{LifeConfig, ConfigError};
//!
//! let config = LifeConfig::default();
//! assert_eq!((config.width, config.height), (50, 30));
//! assert_eq!(config.frame_delay, Duration::from_millis(100));
//!
//! let err = LifeConfig::new(0, 10, 0.5, Duration::ZERO).unwrap_err();
//! assert_eq!(err, ConfigError::ZeroWidth);
//! ```

use std::time::Duration;

use thiserror::Error;

/// Grid width in cells (50 columns)
pub const DEFAULT_WIDTH: usize = 50;

/// Grid height in cells (30 rows)
pub const DEFAULT_HEIGHT: usize = 30;

/// Probability that a cell starts alive
pub const DEFAULT_DENSITY: f64 = 0.2;

/// Delay between frames in milliseconds
pub const FRAME_MS: u64 = 100;

/// Glyph for a live cell.
pub const ALIVE_GLYPH: char = '█';

/// Glyph for a dead cell.
pub const DEAD_GLYPH: char = ' ';

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid width must be at least 1")]
    ZeroWidth,
    #[error("grid height must be at least 1")]
    ZeroHeight,
    #[error("density must be within [0, 1], got {0}")]
    DensityOutOfRange(f64),
}

/// Immutable simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    /// Probability each cell starts alive.
    pub density: f64,
    /// Pause after each rendered frame.
    pub frame_delay: Duration,
}

impl LifeConfig {
    /// Build a validated config.
    pub fn new(
        width: usize,
        height: usize,
        density: f64,
        frame_delay: Duration,
    ) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if !density.is_finite() || !(0.0..=1.0).contains(&density) {
            return Err(ConfigError::DensityOutOfRange(density));
        }
        Ok(Self {
            width,
            height,
            density,
            frame_delay,
        })
    }

    /// Total number of cells in a grid built from this config.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            density: DEFAULT_DENSITY,
            frame_delay: Duration::from_millis(FRAME_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let c = LifeConfig::default();
        assert_eq!(c.width, DEFAULT_WIDTH);
        assert_eq!(c.height, DEFAULT_HEIGHT);
        assert_eq!(c.density, DEFAULT_DENSITY);
        assert_eq!(c.frame_delay, Duration::from_millis(FRAME_MS));
        assert_eq!(c.cell_count(), 1500);
    }

    #[test]
    fn new_accepts_density_bounds() {
        assert!(LifeConfig::new(1, 1, 0.0, Duration::ZERO).is_ok());
        assert!(LifeConfig::new(1, 1, 1.0, Duration::ZERO).is_ok());
    }

    #[test]
    fn new_rejects_bad_values() {
        assert_eq!(
            LifeConfig::new(5, 0, 0.5, Duration::ZERO),
            Err(ConfigError::ZeroHeight)
        );
        assert_eq!(
            LifeConfig::new(5, 5, 1.5, Duration::ZERO),
            Err(ConfigError::DensityOutOfRange(1.5))
        );
        assert!(matches!(
            LifeConfig::new(5, 5, f64::NAN, Duration::ZERO),
            Err(ConfigError::DensityOutOfRange(_))
        ));
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            ConfigError::DensityOutOfRange(-0.5).to_string(),
            "density must be within [0, 1], got -0.5"
        );
    }
}

//! Session configuration
//!
//! Everything a session needs up front: the starting keys, the random
//! creation parameters, and the presentation hints handed on to renderers.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use rand::Rng;
use thiserror::Error;

use crate::input::ParseError;
use crate::tree::{Key, SAMPLE_VALUES};

/// Default pause between displayed steps
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(1000);
/// Default number of keys for random creation
pub const DEFAULT_RANDOM_COUNT: usize = 18;
/// Default key range for random creation
pub const DEFAULT_RANDOM_RANGE: RangeInclusive<Key> = 1..=99;

/// Errors that make a configuration unusable
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Step delay of zero
    #[error("step delay must be > 0")]
    ZeroStepDelay,

    /// Random range contains no keys
    #[error("random range {start}..={end} is empty")]
    EmptyRange {
        /// Range start
        start: Key,
        /// Range end
        end: Key,
    },

    /// Range cannot supply enough distinct keys
    #[error("cannot draw {requested} distinct keys from a range of {available}")]
    RangeTooSmall {
        /// Keys asked for
        requested: usize,
        /// Keys the range holds
        available: usize,
    },
}

/// Panel palette handed to the renderer
///
/// Chosen once at start-up and passed down, never read from global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Palette {
    /// `#32CD32`
    #[default]
    LimeGreen,
    /// `#FF69B4`
    Pink,
    /// `#FF8C00`
    Orange,
    /// `#FFD700`
    Gold,
    /// `#4169E1`
    RoyalBlue,
    /// `#FF6347`
    Tomato,
    /// `#00CED1`
    DarkTurquoise,
    /// `#9370DB`
    MediumPurple,
}

impl Palette {
    /// All palettes in menu order
    pub const ALL: [Palette; 8] = [
        Palette::LimeGreen,
        Palette::Pink,
        Palette::Orange,
        Palette::Gold,
        Palette::RoyalBlue,
        Palette::Tomato,
        Palette::DarkTurquoise,
        Palette::MediumPurple,
    ];

    /// Accent colour as `#RRGGBB`
    pub fn hex(self) -> &'static str {
        match self {
            Palette::LimeGreen => "#32CD32",
            Palette::Pink => "#FF69B4",
            Palette::Orange => "#FF8C00",
            Palette::Gold => "#FFD700",
            Palette::RoyalBlue => "#4169E1",
            Palette::Tomato => "#FF6347",
            Palette::DarkTurquoise => "#00CED1",
            Palette::MediumPurple => "#9370DB",
        }
    }

    /// Kebab-case name
    pub fn name(self) -> &'static str {
        match self {
            Palette::LimeGreen => "lime-green",
            Palette::Pink => "pink",
            Palette::Orange => "orange",
            Palette::Gold => "gold",
            Palette::RoyalBlue => "royal-blue",
            Palette::Tomato => "tomato",
            Palette::DarkTurquoise => "dark-turquoise",
            Palette::MediumPurple => "medium-purple",
        }
    }

    /// Pick one uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|palette| palette.name() == wanted)
            .ok_or_else(|| ParseError::UnknownPalette(s.to_string()))
    }
}

/// Configuration parameters for a [`super::Session`]
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Keys inserted, in order, to build the starting tree
    pub initial_values: Vec<Key>,

    /// Pause between displayed steps (a hint for the playback layer)
    pub step_delay: Duration,

    /// Key range for random creation (inclusive)
    pub random_range: RangeInclusive<Key>,

    /// Number of keys for random creation
    pub random_count: usize,

    /// RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,

    /// Renderer palette
    pub palette: Palette,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_values: SAMPLE_VALUES.to_vec(),
            step_delay: DEFAULT_STEP_DELAY,
            random_range: DEFAULT_RANDOM_RANGE,
            random_count: DEFAULT_RANDOM_COUNT,
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl SessionConfig {
    /// Start from an explicit key sequence
    pub fn with_values(mut self, values: Vec<Key>) -> Self {
        self.initial_values = values;
        self
    }

    /// Set step delay
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Set random creation range
    pub fn with_random_range(mut self, range: RangeInclusive<Key>) -> Self {
        self.random_range = range;
        self
    }

    /// Set random creation count
    pub fn with_random_count(mut self, count: usize) -> Self {
        self.random_count = count;
        self
    }

    /// Fix the RNG seed (reproducible random trees)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Number of distinct keys the random range holds (saturating)
    pub fn range_len(&self) -> usize {
        let span = i128::from(*self.random_range.end()) - i128::from(*self.random_range.start()) + 1;
        if span <= 0 {
            0
        } else {
            usize::try_from(span).unwrap_or(usize::MAX)
        }
    }

    /// Check that `count` distinct keys can be drawn from the random range
    pub fn check_random(&self, count: usize) -> Result<(), ConfigError> {
        let available = self.range_len();
        if available == 0 {
            return Err(ConfigError::EmptyRange {
                start: *self.random_range.start(),
                end: *self.random_range.end(),
            });
        }
        if count > available {
            return Err(ConfigError::RangeTooSmall {
                requested: count,
                available,
            });
        }
        Ok(())
    }

    /// Validate the whole configuration
    ///
    /// The random range is only checked when `random_count > 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_delay.is_zero() {
            return Err(ConfigError::ZeroStepDelay);
        }
        if self.random_count > 0 {
            self.check_random(self.random_count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SessionConfig::default();
        assert_eq!(config.initial_values.len(), 15);
        assert_eq!(config.range_len(), 99);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let zero = SessionConfig::default().with_step_delay(Duration::ZERO);
        assert_eq!(zero.validate(), Err(ConfigError::ZeroStepDelay));

        #[allow(clippy::reversed_empty_ranges)]
        let empty = SessionConfig::default().with_random_range(10..=1);
        assert!(matches!(
            empty.validate(),
            Err(ConfigError::EmptyRange { start: 10, end: 1 })
        ));

        let small = SessionConfig::default()
            .with_random_range(1..=5)
            .with_random_count(6);
        assert_eq!(
            small.validate(),
            Err(ConfigError::RangeTooSmall {
                requested: 6,
                available: 5
            })
        );
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_unused_random_range_is_not_checked() {
        let unused = SessionConfig::default()
            .with_random_range(10..=1)
            .with_random_count(0);
        assert!(unused.validate().is_ok());
        assert!(matches!(
            unused.check_random(1),
            Err(ConfigError::EmptyRange { start: 10, end: 1 })
        ));
        assert!(unused.clone().with_random_count(1).validate().is_err());
    }

    #[test]
    fn test_full_key_range_does_not_overflow() {
        let config = SessionConfig::default().with_random_range(Key::MIN..=Key::MAX);
        assert_eq!(config.range_len(), usize::MAX);
    }

    #[test]
    fn test_random_palette_is_seeded() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let a = Palette::random(&mut StdRng::seed_from_u64(3));
        let b = Palette::random(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
        assert!(Palette::ALL.contains(&a));
    }

    #[test]
    fn test_palette_names_round_trip() {
        for palette in Palette::ALL {
            assert_eq!(palette.name().parse::<Palette>(), Ok(palette));
        }
        assert_eq!("Royal_Blue".parse::<Palette>(), Ok(Palette::RoyalBlue));
        assert!("plaid".parse::<Palette>().is_err());
    }
}

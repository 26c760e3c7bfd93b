use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration, fixed for the lifetime of the game loop.
///
/// The board is sized in display terms: an edge of `board_pixels` pixels
/// divided into `cell_size`-pixel cells, rounded up.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Length of the board's edge, in pixels
    pub(crate) board_pixels: u32,

    /// Length of one cell's edge, in pixels
    pub(crate) cell_size: u32,

    /// Simulation steps per second
    pub(crate) ticks_per_second: u32,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            board_pixels: consts::DEFAULT_BOARD_PIXELS,
            cell_size: consts::DEFAULT_CELL_SIZE,
            ticks_per_second: consts::DEFAULT_TICKS_PER_SECOND,
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("torsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, the default configuration is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if its contents could
    /// not be deserialized, or if a value is out of range.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell-size must be positive"));
        }
        if self.board_pixels < self.cell_size {
            return Err(ConfigError::Invalid(
                "board-pixels must be at least cell-size",
            ));
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::Invalid("ticks-per-second must be positive"));
        }
        let side = self.board_pixels.div_ceil(self.cell_size);
        // A one-cell board has no cell left over for the food once the
        // length-1 snake spawns, so food placement could never terminate.
        if side < 2 {
            return Err(ConfigError::Invalid(
                "board must be at least two cells on a side",
            ));
        }
        if side > u32::from(u16::MAX) {
            return Err(ConfigError::Invalid(
                "board-pixels divided by cell-size is too large",
            ));
        }
        Ok(())
    }

    /// Number of cells along one edge of the (square) board
    pub(crate) fn board_side_cells(&self) -> u16 {
        u16::try_from(self.board_pixels.div_ceil(self.cell_size)).unwrap_or(u16::MAX)
    }

    /// Time between simulation steps
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.board_pixels, 720);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.ticks_per_second, 12);
        assert_eq!(config.board_side_cells(), 36);
    }

    #[rstest]
    #[case(720, 20, 36)]
    #[case(710, 20, 36)]
    #[case(100, 20, 5)]
    #[case(40, 20, 2)]
    #[case(21, 20, 2)]
    fn board_side_rounds_up(#[case] board_pixels: u32, #[case] cell_size: u32, #[case] side: u16) {
        let config = Config {
            board_pixels,
            cell_size,
            ..Config::default()
        };
        assert_eq!(config.board_side_cells(), side);
    }

    #[test]
    fn tick_period() {
        let config = Config {
            ticks_per_second: 8,
            ..Config::default()
        };
        assert_eq!(config.tick_period(), Duration::from_millis(125));
    }

    #[test]
    fn load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "board-pixels = 100").unwrap();
        writeln!(file, "cell-size = 20").unwrap();
        let config = Config::load(file.path(), false).unwrap();
        assert_eq!(
            config,
            Config {
                board_pixels: 100,
                cell_size: 20,
                ticks_per_second: 12,
            }
        );
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load(&path, true).unwrap();
        assert_eq!(config, Config::default());
        assert!(Config::load(&path, false).is_err());
    }

    #[rstest]
    #[case("cell-size = 0")]
    #[case("ticks-per-second = 0")]
    #[case("board-pixels = 10\ncell-size = 20")]
    // A board of exactly one cell would leave nowhere to place the food
    #[case("board-pixels = 20\ncell-size = 20")]
    fn load_invalid_file(#[case] content: &str) {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{content}").unwrap();
        assert!(matches!(
            Config::load(file.path(), false),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn load_unparseable_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "board-pixels = \"wide\"").unwrap();
        assert!(matches!(
            Config::load(file.path(), false),
            Err(ConfigError::Parse(_))
        ));
    }
}

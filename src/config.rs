//! Configuration file loading.
//!
//! Settings live in `config.toml` under the user's config dir (or the path
//! given with `--config`). Every problem is downgraded to a warning so a bad
//! file never keeps the sheet from starting.

use directories::ProjectDirs;
use gridpad_core::{Dimensions, Settings, UnresolvedPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB
/// A through ZZ.
const MAX_COLUMNS: usize = 702;
const MAX_ROWS: usize = 10_000;
/// Every cell is built up front, so the area is capped as well as each side.
const MAX_CELLS: usize = 100_000;
const MIN_COLUMN_WIDTH: u16 = 3;
pub const DEFAULT_COLUMN_WIDTH: u16 = 9;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    grid: Option<GridSection>,
    evaluation: Option<EvaluationSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GridSection {
    columns: Option<usize>,
    rows: Option<usize>,
    column_width: Option<u16>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EvaluationSection {
    unresolved: Option<UnresolvedPolicy>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingSection {
    file: Option<PathBuf>,
}

/// Resolved configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub settings: Settings,
    /// Terminal cells per grid column.
    pub column_width: u16,
    /// Where to send log output, if anywhere.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            column_width: DEFAULT_COLUMN_WIDTH,
            log_file: None,
        }
    }
}

/// Load configuration from `config_file`, or from the user config dir.
///
/// Returns the configuration plus any warnings. A missing file in the user
/// config dir is not a warning; a missing explicit `--config` file is.
pub fn load_config(config_file: Option<&Path>) -> (Config, Vec<String>) {
    let explicit = config_file.is_some();
    let Some(path) = config_file.map(Path::to_path_buf).or_else(user_config_path) else {
        return (Config::default(), Vec::new());
    };

    if !path.exists() {
        let warnings = if explicit {
            vec![ConfigError::NotFound(path).to_string()]
        } else {
            Vec::new()
        };
        return (Config::default(), warnings);
    }

    match read_config_file(&path) {
        Ok(content) => match parse_config(&content) {
            Ok(parsed) => parsed,
            Err(source) => (
                Config::default(),
                vec![ConfigError::Parse { path, source }.to_string()],
            ),
        },
        Err(err) => (Config::default(), vec![err.to_string()]),
    }
}

fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    let meta = std::fs::metadata(path).map_err(io_err)?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(ConfigError::TooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            max: MAX_CONFIG_FILE_BYTES,
        });
    }
    std::fs::read_to_string(path).map_err(io_err)
}

/// Parse config text. Out-of-range values fall back to their defaults with a warning.
pub fn parse_config(content: &str) -> Result<(Config, Vec<String>), toml::de::Error> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut warnings = Vec::new();
    let mut config = Config::default();

    if let Some(grid) = file.grid {
        let defaults = Dimensions::default();
        let dimensions = Dimensions {
            columns: checked(grid.columns, 1, MAX_COLUMNS, "grid.columns", &mut warnings)
                .unwrap_or(defaults.columns),
            rows: checked(grid.rows, 1, MAX_ROWS, "grid.rows", &mut warnings)
                .unwrap_or(defaults.rows),
        };
        config.settings.dimensions = if dimensions.columns * dimensions.rows > MAX_CELLS {
            warnings.push(format!(
                "grid of {}x{} exceeds {} cells; using the default size",
                dimensions.columns, dimensions.rows, MAX_CELLS
            ));
            defaults
        } else {
            dimensions
        };
        config.column_width = checked(
            grid.column_width,
            MIN_COLUMN_WIDTH,
            u16::MAX,
            "grid.column_width",
            &mut warnings,
        )
        .unwrap_or(DEFAULT_COLUMN_WIDTH);
    }

    if let Some(unresolved) = file.evaluation.and_then(|e| e.unresolved) {
        config.settings.unresolved = unresolved;
    }

    config.log_file = file.logging.and_then(|l| l.file);

    Ok((config, warnings))
}

fn checked<T: PartialOrd + std::fmt::Display + Copy>(
    value: Option<T>,
    min: T,
    max: T,
    key: &str,
    warnings: &mut Vec<String>,
) -> Option<T> {
    let value = value?;
    if value < min || value > max {
        warnings.push(format!(
            "{} = {} is out of range ({}..={}); using the default",
            key, value, min, max
        ));
        return None;
    }
    Some(value)
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gridpad").map(|dirs| dirs.config_dir().join("config.toml"))
}

//! # Settings Module
//!
//! ## Purpose
//! Keeps the user adjustable parameters of the crate in one JSON file
//! (`realgas_config.json` in the working directory): quadrature tolerances, the log level
//! and an optional path to a user substance library that replaces the built-in one.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "quadrature": { "abs_tol": 1.49e-8, "rel_tol": 1.49e-8, "max_subdivisions": 50 },
//!   "log_level": "info",
//!   "substance_library": null
//! }
//! ```
//! A missing file means defaults; a missing key inside the file means the default of that key.
//!
//! ## Usage
//! ```rust
//! use RealGasThermo::settings::Settings;
//!
//! let settings = Settings::new();
//! let library = settings.substance_library().unwrap();
//! assert!(library.get("CH4").is_ok());
//! ```

use crate::RealGas::errors::RealGasError;
use crate::RealGas::quadrature::QuadratureConfig;
use crate::RealGas::substance::SubstanceLibrary;
use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "realgas_config.json";

/// Serializable content of the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealGasConfig {
    pub quadrature: QuadratureConfig,
    /// one of off, error, warn, info, debug, trace
    pub log_level: String,
    /// JSON substance library used instead of the built-in one
    pub substance_library: Option<String>,
}

impl Default for RealGasConfig {
    fn default() -> Self {
        Self {
            quadrature: QuadratureConfig::default(),
            log_level: "info".to_string(),
            substance_library: None,
        }
    }
}

/// Configuration bound to the file it came from
#[derive(Debug, Clone)]
pub struct Settings {
    config: RealGasConfig,
    config_file: PathBuf,
}

impl Settings {
    /// Settings from `realgas_config.json` in the working directory, defaults if it is absent or broken
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    /// Like [`Settings::load_or_default`], logging the problem with the file if there is one
    pub fn with_config_file<P: AsRef<Path>>(config_file: P) -> Self {
        let (settings, problem) = Self::load_or_default(config_file);
        if let Some(e) = problem {
            warn!(
                "could not read {}: {}, using default settings",
                settings.config_file.display(),
                e
            );
        }
        settings
    }

    /// Settings from the file, or the defaults together with the reason the file was rejected.
    /// Nothing is logged, so the binary can report the problem once its logger is up.
    pub fn load_or_default<P: AsRef<Path>>(config_file: P) -> (Self, Option<RealGasError>) {
        let config_file = config_file.as_ref().to_path_buf();
        let (config, problem) = match Self::load_config(&config_file) {
            Ok(config) => (config, None),
            Err(e) => (RealGasConfig::default(), Some(e)),
        };
        (
            Self {
                config,
                config_file,
            },
            problem,
        )
    }

    /// Reads and checks the file; a file that does not exist gives the defaults
    pub fn load_config(config_file: &Path) -> Result<RealGasConfig, RealGasError> {
        if config_file.exists() {
            let content = fs::read_to_string(config_file)?;
            let config: RealGasConfig = serde_json::from_str(&content)?;
            validate_quadrature(&config.quadrature)?;
            Ok(config)
        } else {
            Ok(RealGasConfig::default())
        }
    }

    pub fn save_config(&self) -> Result<(), RealGasError> {
        let content = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.config_file, content)?;
        Ok(())
    }

    pub fn config(&self) -> &RealGasConfig {
        &self.config
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn quadrature(&self) -> QuadratureConfig {
        self.config.quadrature
    }

    pub fn set_quadrature(&mut self, quadrature: QuadratureConfig) -> Result<(), RealGasError> {
        validate_quadrature(&quadrature)?;
        self.config.quadrature = quadrature;
        Ok(())
    }

    /// Log level from the file, `Info` when the text is not a level name
    pub fn log_level(&self) -> LevelFilter {
        self.config
            .log_level
            .trim()
            .parse()
            .unwrap_or(LevelFilter::Info)
    }

    pub fn set_log_level(&mut self, level: LevelFilter) {
        self.config.log_level = level.to_string().to_lowercase();
    }

    pub fn set_substance_library(&mut self, path: Option<&str>) {
        self.config.substance_library = path.map(|p| p.to_string());
    }

    /// The configured library file, or the built-in library when none is set
    pub fn substance_library(&self) -> Result<SubstanceLibrary, RealGasError> {
        match &self.config.substance_library {
            Some(path) => SubstanceLibrary::from_file(Path::new(path)),
            None => SubstanceLibrary::builtin(),
        }
    }

    pub fn reset_to_defaults(&mut self) {
        self.config = RealGasConfig::default();
    }
}

/// Tolerances must be non-negative and not both zero, at least one panel is needed
pub fn validate_quadrature(quadrature: &QuadratureConfig) -> Result<(), RealGasError> {
    let context = "quadrature settings";
    if !(quadrature.abs_tol >= 0.0 && quadrature.rel_tol >= 0.0)
        || quadrature.abs_tol + quadrature.rel_tol == 0.0
    {
        return Err(RealGasError::invalid_argument(
            "validate_quadrature",
            "tolerance",
            quadrature.abs_tol.min(quadrature.rel_tol),
            context,
        ));
    }
    if quadrature.max_subdivisions == 0 {
        return Err(RealGasError::invalid_argument(
            "validate_quadrature",
            "max_subdivisions",
            0.0,
            context,
        ));
    }
    Ok(())
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

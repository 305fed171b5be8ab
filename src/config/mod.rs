// SPDX-License-Identifier: MPL-2.0
//! This module handles the exporter's configuration: an optional
//! `icon_forge.toml` settings file, environment variables and command-line
//! overrides, merged into one [`Settings`] value.
//!
//! # Resolution Order
//!
//! Each setting is resolved in the following priority order:
//! 1. **CLI arguments** (`--output-dir`, `--style`, ...)
//! 2. **Environment variables** (`ICON_FORGE_OUTPUT_DIR`)
//! 3. **Settings file** (see [`resolve_config_path`])
//! 4. **Built-in default** from [`defaults`]
//!
//! # Examples
//!
//! ```no_run
//! use icon_forge::config::{self, CliOverrides, EnvOverrides, Settings};
//!
//! let config = config::load(None).unwrap();
//! let settings = Settings::resolve(&config, &CliOverrides::default(), &EnvOverrides::from_env())
//!     .unwrap();
//! assert_eq!(settings.icon_set.len(), 10);
//! ```

pub mod defaults;

use crate::domain::icon::{IconSet, IconSpec};
use crate::error::{Error, Result};
use crate::render::text::DEFAULT_FONT_CANDIDATES;
use crate::render::ArtworkStyle;
use defaults::{
    DEFAULT_OUTPUT_DIR, DEFAULT_PREVIEW_PATH, DEFAULT_PREVIEW_SIZE, DEFAULT_SOURCE_IMAGE,
    LOCAL_CONFIG_FILE, MAX_PREVIEW_SIZE, MIN_PREVIEW_SIZE,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IconForge";

/// Environment variable pointing at a settings file.
pub const ENV_CONFIG: &str = "ICON_FORGE_CONFIG";

/// Environment variable overriding the iconset directory.
pub const ENV_OUTPUT_DIR: &str = "ICON_FORGE_OUTPUT_DIR";

/// One `[[icons]]` table of the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    pub logical: u32,
    #[serde(default = "default_scale")]
    pub scale: u32,
}

fn default_scale() -> u32 {
    1
}

/// Contents of a settings file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output_dir: Option<String>,
    pub preview_path: Option<String>,
    pub source_image: Option<String>,
    pub style: Option<String>,
    pub badge_font: Option<String>,
    pub preview_size: Option<u32>,
    pub icons: Option<Vec<IconEntry>>,
}

impl Config {
    /// A settings file spelling out every default, including the macOS icon list.
    #[must_use]
    pub fn documented_defaults() -> Self {
        let icons = IconSet::macos()
            .entries()
            .iter()
            .map(|spec| IconEntry {
                logical: spec.logical.value(),
                scale: spec.scale.value(),
            })
            .collect();
        Self {
            output_dir: Some(DEFAULT_OUTPUT_DIR.to_string()),
            preview_path: Some(DEFAULT_PREVIEW_PATH.to_string()),
            source_image: Some(DEFAULT_SOURCE_IMAGE.to_string()),
            style: Some(ArtworkStyle::default().name().to_string()),
            badge_font: None,
            preview_size: Some(DEFAULT_PREVIEW_SIZE),
            icons: Some(icons),
        }
    }

    /// The configured icon set, or the macOS set when none is configured.
    pub fn icon_set(&self) -> Result<IconSet> {
        match &self.icons {
            None => Ok(IconSet::macos()),
            Some(entries) => {
                let specs = entries
                    .iter()
                    .map(|entry| IconSpec::from_raw(entry.logical, entry.scale))
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(IconSet::new(specs)?)
            }
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_dir: Option<PathBuf>,
    pub preview_path: Option<PathBuf>,
    pub source_image: Option<PathBuf>,
    pub style: Option<String>,
    pub badge_font: Option<PathBuf>,
}

/// Values read from the environment.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub output_dir: Option<PathBuf>,
}

impl EnvOverrides {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            output_dir: std::env::var_os(ENV_OUTPUT_DIR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Fully resolved settings of one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub preview_path: PathBuf,
    pub source_image: PathBuf,
    pub style: ArtworkStyle,
    /// Font files tried for badge text, in order.
    pub font_candidates: Vec<PathBuf>,
    pub preview_size: u32,
    pub icon_set: IconSet,
}

impl Settings {
    /// Merges CLI, environment and file values over the defaults.
    pub fn resolve(config: &Config, cli: &CliOverrides, env: &EnvOverrides) -> Result<Self> {
        let output_dir = cli
            .output_dir
            .clone()
            .or_else(|| env.output_dir.clone())
            .or_else(|| config.output_dir.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let preview_path = cli
            .preview_path
            .clone()
            .or_else(|| config.preview_path.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREVIEW_PATH));

        let source_image = cli
            .source_image
            .clone()
            .or_else(|| config.source_image.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_IMAGE));

        let style = match cli.style.as_deref().or(config.style.as_deref()) {
            Some(name) => name.parse()?,
            None => ArtworkStyle::default(),
        };

        let mut font_candidates: Vec<PathBuf> = cli
            .badge_font
            .iter()
            .cloned()
            .chain(config.badge_font.iter().map(PathBuf::from))
            .collect();
        font_candidates.extend(DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from));

        let preview_size = config.preview_size.unwrap_or(DEFAULT_PREVIEW_SIZE);
        if !(MIN_PREVIEW_SIZE..=MAX_PREVIEW_SIZE).contains(&preview_size) {
            return Err(Error::Config(format!(
                "preview_size {preview_size} outside {MIN_PREVIEW_SIZE}..={MAX_PREVIEW_SIZE}"
            )));
        }

        Ok(Self {
            output_dir,
            preview_path,
            source_image,
            style,
            font_candidates,
            preview_size,
            icon_set: config.icon_set()?,
        })
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Finds the settings file to use.
///
/// Order: `explicit` (from `--config`), [`ENV_CONFIG`], `./icon_forge.toml`,
/// then the platform config directory. An explicit or environment path is
/// returned even if it does not exist, so that loading reports it.
#[must_use]
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_config_path_from(
        explicit,
        std::env::var_os(ENV_CONFIG)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from),
        Path::new(LOCAL_CONFIG_FILE),
        get_default_config_path(),
    )
}

fn resolve_config_path_from(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    local: &Path,
    user: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if env_path.is_some() {
        return env_path;
    }
    if local.is_file() {
        return Some(local.to_path_buf());
    }
    user.filter(|path| path.is_file())
}

/// Loads the settings file found by [`resolve_config_path`], or defaults when there is none.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match resolve_config_path(explicit) {
        Some(path) => {
            tracing::debug!("loading settings from {}", path.display());
            load_from_path(&path)
        }
        None => Ok(Config::default()),
    }
}

/// Loads a settings file. A file that does not parse is a [`Error::Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

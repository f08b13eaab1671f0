//! Configuration for the Draftboard canvas.
//!
//! All types implement [`serde::Deserialize`] and every field has a
//! default, so a configuration file only needs the settings it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and style settings.
//! - [`RenderConfig`] - Controls debug markers and the initial zoom.
//! - [`StyleConfig`] - Controls visual styling such as the background color.
//! - [`load_config`] - Finds and loads a TOML configuration file.
//!
//! # Example
//!
//! ```
//! # use draftboard::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [render]
//!     show_debug_markers = true
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.render().show_debug_markers());
//! assert_eq!(config.render().zoom(), 1.0);
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;

use draftboard_core::color::Color;

use crate::error::DraftboardError;

/// Top-level configuration combining render and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    render: RenderConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(render: RenderConfig, style: StyleConfig) -> Self {
        Self { render, style }
    }

    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Rendering settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Draw bounding boxes and handles on every shape.
    #[serde(default)]
    show_debug_markers: bool,

    /// Zoom factor applied before the first editor state arrives.
    #[serde(default = "default_zoom")]
    zoom: f32,
}

fn default_zoom() -> f32 {
    1.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_debug_markers: false,
            zoom: default_zoom(),
        }
    }
}

impl RenderConfig {
    pub fn new(show_debug_markers: bool, zoom: f32) -> Self {
        Self {
            show_debug_markers,
            zoom,
        }
    }

    pub fn show_debug_markers(&self) -> bool {
        self.show_debug_markers
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }
}

/// Visual styling of the exported canvas.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Canvas background, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

/// Finds and loads the configuration.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (`draftboard/config.toml`)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns [`DraftboardError::Config`] if an explicit path does not exist
/// or a found file is not valid TOML, and [`DraftboardError::Io`] if it
/// cannot be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, DraftboardError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("draftboard/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(system_config) = system_config_path() {
        if system_config.exists() {
            info!(
                path = system_config.display().to_string();
                "Loading configuration from system path"
            );
            return load_config_file(system_config);
        }
        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn system_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "draftboard", "draftboard")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, DraftboardError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DraftboardError::Config(format!(
            "Missing configuration file: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|err| {
        DraftboardError::Config(format!("Failed to parse TOML configuration: {err}"))
    })
}

//! SVG export of a scene.

use std::{fs, path::Path};

use log::{debug, info};

use draftboard_core::scene::Scene;

use crate::{config::StyleConfig, error::DraftboardError};

/// Serializes the attached elements of `scene` into an SVG string.
///
/// # Errors
///
/// Returns [`DraftboardError::Export`] if the configured background color
/// is not a valid color.
pub fn render_svg(scene: &Scene, style: &StyleConfig) -> Result<String, DraftboardError> {
    let background = style.background_color().map_err(DraftboardError::Export)?;
    let svg = scene.to_document(background).to_string();

    debug!(
        elements = scene.attached().len(),
        bytes = svg.len();
        "Exported scene to SVG"
    );
    Ok(svg)
}

/// Writes the scene as an SVG file at `path`.
///
/// # Errors
///
/// Returns the errors of [`render_svg`], or [`DraftboardError::Io`] if the
/// file cannot be written.
pub fn write_svg(
    scene: &Scene,
    style: &StyleConfig,
    path: impl AsRef<Path>,
) -> Result<(), DraftboardError> {
    let path = path.as_ref();
    let svg = render_svg(scene, style)?;
    fs::write(path, svg)?;

    info!(path = path.display().to_string(); "SVG written");
    Ok(())
}

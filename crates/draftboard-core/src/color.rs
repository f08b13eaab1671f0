//! Colors of shape appearances.
//!
//! Appearance values hold colors either as parsed [`Color`]s or as CSS
//! strings entered in a property panel; both end up here before they are
//! written into SVG `fill` and `stroke` attributes.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A CSS color, backed by `color::DynamicColor`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color string such as `"#0052cc"`, `"rgb(0 82 204)"` or `"navy"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use draftboard_core::color::Color;
    ///
    /// let accent = Color::new("#0052cc").unwrap();
    /// assert_eq!(accent.alpha(), 1.0);
    /// assert!(Color::new("accent").is_err());
    /// ```
    pub fn new(css: &str) -> Result<Self, String> {
        DynamicColor::from_str(css)
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{css}`: {err}"))
    }

    /// Returns a copy with the alpha component replaced.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Alpha component, from 0.0 (transparent) to 1.0 (opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Whether painting with this color has no visible effect.
    pub fn is_transparent(&self) -> bool {
        self.alpha() <= 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(css: &str) -> Result<Self, Self::Err> {
        Self::new(css)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<Color> for svg::node::Value {
    fn from(color: Color) -> Self {
        Self::from(color.to_string())
    }
}

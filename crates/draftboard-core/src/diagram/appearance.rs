//! Shape appearance values.
//!
//! The appearance of a shape is an ordered set of key/value pairs. The
//! reconciler never looks inside it; renderers read the keys they
//! understand and fall back to defaults for the rest.

use indexmap::IndexMap;

use crate::color::Color;

pub const BACKGROUND_COLOR: &str = "BACKGROUND_COLOR";
pub const FOREGROUND_COLOR: &str = "FOREGROUND_COLOR";
pub const STROKE_COLOR: &str = "STROKE_COLOR";
pub const STROKE_THICKNESS: &str = "STROKE_THICKNESS";
pub const TEXT: &str = "TEXT";
pub const FONT_SIZE: &str = "FONT_SIZE";
pub const TEXT_ALIGNMENT: &str = "TEXT_ALIGNMENT";

/// A single appearance value.
#[derive(Debug, Clone, PartialEq)]
pub enum AppearanceValue {
    Number(f32),
    Text(String),
    Color(Color),
    Flag(bool),
}

impl From<f32> for AppearanceValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AppearanceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AppearanceValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Color> for AppearanceValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<bool> for AppearanceValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Ordered appearance map of a shape.
///
/// # Examples
///
/// ```
/// use draftboard_core::color::Color;
/// use draftboard_core::diagram::appearance::{self, Appearance};
///
/// let appearance = Appearance::new()
///     .with(appearance::TEXT, "Submit")
///     .with(appearance::STROKE_THICKNESS, 2.0)
///     .with(appearance::BACKGROUND_COLOR, Color::new("white").unwrap());
///
/// assert_eq!(appearance.text(appearance::TEXT), Some("Submit"));
/// assert_eq!(appearance.number(appearance::STROKE_THICKNESS), Some(2.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Appearance {
    values: IndexMap<String, AppearanceValue>,
}

impl Appearance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value (builder style).
    pub fn with(mut self, key: &str, value: impl Into<AppearanceValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a value, replacing any previous value for the key.
    pub fn set(&mut self, key: &str, value: impl Into<AppearanceValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AppearanceValue> {
        self.values.get(key)
    }

    /// Returns the value for `key` if it is a number.
    pub fn number(&self, key: &str) -> Option<f32> {
        match self.get(key)? {
            AppearanceValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value for `key` if it is text.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            AppearanceValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value for `key` if it is a color.
    ///
    /// Text values are parsed as CSS colors, so appearances coming from
    /// loosely typed sources still resolve.
    pub fn color(&self, key: &str) -> Option<Color> {
        match self.get(key)? {
            AppearanceValue::Color(color) => Some(*color),
            AppearanceValue::Text(value) => Color::new(value).ok(),
            _ => None,
        }
    }

    /// Returns the value for `key` if it is a flag.
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            AppearanceValue::Flag(value) => Some(*value),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AppearanceValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_value() {
        let mut appearance = Appearance::new().with(TEXT, "old");
        appearance.set(TEXT, "new");

        assert_eq!(appearance.len(), 1);
        assert_eq!(appearance.text(TEXT), Some("new"));
    }

    #[test]
    fn test_typed_accessors_reject_other_variants() {
        let appearance = Appearance::new().with(FONT_SIZE, 14.0);

        assert_eq!(appearance.number(FONT_SIZE), Some(14.0));
        assert_eq!(appearance.text(FONT_SIZE), None);
        assert_eq!(appearance.flag(FONT_SIZE), None);
        assert_eq!(appearance.number(TEXT), None);
    }

    #[test]
    fn test_color_parses_text_values() {
        let appearance = Appearance::new()
            .with(STROKE_COLOR, "#ff0000")
            .with(BACKGROUND_COLOR, "definitely not a color");

        assert_eq!(appearance.color(STROKE_COLOR), Color::new("#ff0000").ok());
        assert_eq!(appearance.color(BACKGROUND_COLOR), None);
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let appearance = Appearance::new()
            .with(TEXT, "a")
            .with(FONT_SIZE, 12.0)
            .with(STROKE_THICKNESS, 1.0);

        let keys: Vec<&str> = appearance.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![TEXT, FONT_SIZE, STROKE_THICKNESS]);
    }
}

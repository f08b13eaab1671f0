//! Registry of shape renderers.
//!
//! The registry maps a renderer key to a [`Renderer`]. It is assembled once
//! with [`RendererRegistryBuilder`] at startup and is read-only afterwards.
//!
//! # Example
//!
//! ```
//! use draftboard::registry::RendererRegistry;
//!
//! let registry = RendererRegistry::with_builtin_renderers();
//! assert!(registry.get("Rectangle").is_some());
//! assert!(registry.get("Spaceship").is_none());
//! ```

use std::{collections::HashMap, rc::Rc};

use log::{debug, warn};

use crate::{
    renderer::Renderer,
    renderers::{ButtonRenderer, EllipseRenderer, LabelRenderer, RectangleRenderer},
};

/// Immutable map from renderer key to renderer.
#[derive(Debug, Default)]
pub struct RendererRegistry {
    renderers: HashMap<String, Rc<dyn Renderer>>,
}

impl RendererRegistry {
    /// Starts building a registry.
    pub fn builder() -> RendererRegistryBuilder {
        RendererRegistryBuilder::default()
    }

    /// Creates a registry containing every built-in renderer.
    pub fn with_builtin_renderers() -> Self {
        Self::builder().register_builtin_renderers().build()
    }

    /// Looks up the renderer registered under `key`.
    pub fn get(&self, key: &str) -> Option<Rc<dyn Renderer>> {
        self.renderers.get(key).map(Rc::clone)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.renderers.contains_key(key)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

/// Builder for [`RendererRegistry`].
#[derive(Debug, Default)]
pub struct RendererRegistryBuilder {
    renderers: HashMap<String, Rc<dyn Renderer>>,
}

impl RendererRegistryBuilder {
    /// Registers a renderer under its own [`Renderer::identifier`].
    ///
    /// A later registration for the same key replaces the earlier one.
    pub fn register(mut self, renderer: impl Renderer + 'static) -> Self {
        let key = renderer.identifier().to_string();
        if self.renderers.contains_key(&key) {
            warn!(renderer = key; "Renderer registered twice, keeping the last registration");
        }
        self.renderers.insert(key, Rc::new(renderer));
        self
    }

    /// Registers the rectangle, ellipse, label and button renderers.
    pub fn register_builtin_renderers(self) -> Self {
        self.register(RectangleRenderer)
            .register(EllipseRenderer)
            .register(LabelRenderer)
            .register(ButtonRenderer)
    }

    pub fn build(self) -> RendererRegistry {
        debug!(renderers = self.renderers.len(); "Renderer registry built");
        RendererRegistry {
            renderers: self.renderers,
        }
    }
}

//! Draftboard - render reconciliation for a wireframe editor.
//!
//! Keeps a mutable [`scene::Scene`] in sync with successive snapshots of an
//! immutable [`diagram::Diagram`]. Each snapshot is flattened into paint
//! order, shapes that left the diagram are dropped, and every remaining
//! shape is either rendered again by its [`renderer::Renderer`] or, when its
//! value is the very same `Rc` as last time, simply re-attached.
//!
//! The [`canvas::Canvas`] ties this to editor state and configuration:
//!
//! ```
//! use std::rc::Rc;
//!
//! use draftboard::{
//!     canvas::{Canvas, EditorState},
//!     config::AppConfig,
//!     diagram::{Diagram, Shape},
//!     geometry::{Point, Size, Transform},
//!     identifier::Id,
//!     registry::RendererRegistry,
//! };
//!
//! let registry = Rc::new(RendererRegistry::with_builtin_renderers());
//! let mut canvas = Canvas::new(&AppConfig::default(), registry).unwrap();
//!
//! let diagram = Rc::new(Diagram::new(Id::new("page")).with_shape(Shape::new(
//!     Id::new("ok"),
//!     "Button",
//!     Transform::new(Point::new(40.0, 20.0), Size::new(60.0, 24.0)),
//! )));
//! let state = EditorState::new(Some(diagram), 1.0, Size::new(320.0, 240.0));
//!
//! let first = canvas.on_state_changed(&state).unwrap();
//! let second = canvas.on_state_changed(&state).unwrap();
//! assert_eq!((first.rendered, second.rendered, second.reattached), (1, 0, 1));
//! ```

pub mod canvas;
pub mod config;
pub mod export;
pub mod reconciler;
pub mod registry;
pub mod renderer;
pub mod renderers;
pub mod shape_ref;

mod error;

pub use draftboard_core::{color, diagram, geometry, identifier, scene};

pub use error::DraftboardError;

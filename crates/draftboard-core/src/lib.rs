//! Draftboard Core Types and Definitions
//!
//! This crate provides the foundational types for the Draftboard wireframe
//! editor. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Diagram**: The immutable diagram model and its commands ([`diagram`] module)
//! - **Scene**: The mutable scene surface rendered elements live on ([`scene`] module)

pub mod color;
pub mod diagram;
pub mod geometry;
pub mod identifier;
pub mod scene;

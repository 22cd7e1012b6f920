//! A single icon component parameterized by shape and size class.
//!
//! Icon artwork is data: an [`IconRegistry`] maps `(size, name)` to an
//! [`IconShape`], and [`render_icon`] turns a shape plus [`IconOptions`] into
//! an SVG element.

pub mod icon;
pub mod registry;
pub mod shape;

pub use icon::{render_icon, IconOptions};
pub use registry::{parse_svg, IconRegistry};
pub use shape::{IconShape, SizeClass};

/// Errors that can occur when looking up or rendering icons.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("Icon not found: {size}/{name}")]
    NotFound { size: SizeClass, name: String },

    #[error("Unknown icon size: {0} (expected sm or lg)")]
    UnknownSize(String),

    #[error("Invalid attribute name: {0:?}")]
    InvalidAttribute(String),

    #[error("Icons directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },
}

//! Minimal PPTX (PresentationML) writing support.
//!
//! The model is deliberately small: a [`Presentation`] owns an ordered
//! sequence of [`Slide`]s, each either a title slide (title + subtitle) or
//! a content slide (title + bullets), and serializes the whole document to
//! a `.pptx` package in one pass. The static package scaffolding (slide
//! master, layouts, theme, document properties) lives in [`template`].

pub mod error;
pub mod package;
pub mod presentation;
pub mod slide;
pub mod template;

// Re-export main types
pub use error::{PptxError, Result};
pub use presentation::Presentation;
pub use slide::{Slide, SlideBody};

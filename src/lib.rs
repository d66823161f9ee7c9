//! Tamarind - generates the Lourdes Garden V1.0 launch review deck as a
//! PowerPoint (.pptx) file.
//!
//! The crate is a small PresentationML writer with a fixed deck on top:
//!
//! - [`pptx`]: the presentation document model (deck builder) and its
//!   serialization to a `.pptx` package
//! - [`opc`]: the write side of the Open Packaging Conventions container
//!   (partnames, relationships, `[Content_Types].xml`, ZIP packaging)
//! - [`common`]: shared value types (colors, units, XML escaping)
//! - [`deck`]: the literal Lourdes Garden deck content and output filename
//!
//! # Example
//!
//! ```no_run
//! use tamarind::pptx::Presentation;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = Presentation::new();
//! pres.add_title_slide("Lourdes Garden V1.0", "Launch review");
//! pres.add_content_slide("Highlights", &["Bilingual", "Gallery", "Contact portal"])?;
//! pres.save("review.pptx")?;
//! # Ok(())
//! # }
//! ```

/// Shared value types and helpers
pub mod common;

/// The fixed Lourdes Garden deck
pub mod deck;

/// Open Packaging Conventions (OPC) container support, write side
pub mod opc;

/// PresentationML document model and serialization
pub mod pptx;

// Re-export commonly used types for convenience
pub use pptx::{Presentation, PptxError};

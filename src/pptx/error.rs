/// Error types for PPTX generation.
use thiserror::Error;

/// Result type for PPTX generation.
pub type Result<T> = std::result::Result<T, PptxError>;

/// Error types for PPTX generation.
#[derive(Error, Debug)]
pub enum PptxError {
    /// OPC package error
    #[error("OPC error: {0}")]
    Opc(#[from] crate::opc::OpcError),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// A content slide was given no bullets
    #[error("content slide {0:?} has an empty bullet list")]
    EmptyBody(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

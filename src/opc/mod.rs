/// Open Packaging Conventions (OPC) support, write side only.
///
/// An OPC package is a ZIP archive of *parts*, each with a partname and a
/// content type, tied together by relationship files. This module models the
/// subset a package generator needs:
///
/// - partnames ([`PackURI`])
/// - relationships and `.rels` serialization ([`rel`])
/// - parts and the in-memory package ([`part`], [`package`])
/// - serialization to a ZIP archive ([`pkgwriter`], [`phys_pkg`])
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use error::{OpcError, Result};
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};

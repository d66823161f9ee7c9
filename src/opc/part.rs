/// Open Packaging Convention (OPC) objects related to package parts.
///
/// Parts are the fundamental units of content in an OPC package. Each part
/// has a unique partname ([`PackURI`]), a content type, a binary payload,
/// and may have relationships to other parts. A generator only ever
/// produces payloads it has just serialized, so a single concrete part type
/// is sufficient here.
use crate::opc::packuri::PackURI;
use crate::opc::rel::Relationships;

/// A part in an OPC package.
#[derive(Debug)]
pub struct Part {
    /// The partname (URI) of this part
    partname: PackURI,

    /// The content type of this part
    content_type: String,

    /// The binary content of this part
    blob: Vec<u8>,

    /// Relationships from this part to other parts
    rels: Relationships,
}

impl Part {
    /// Create a new part.
    pub fn new(partname: PackURI, content_type: &str, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels: Relationships::new(),
        }
    }

    /// Get the partname of this part.
    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    /// Get the content type of this part.
    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Get the binary content of this part.
    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the binary content of this part.
    ///
    /// Used when a part's XML can only be produced after its relationships
    /// have been allocated (the XML references the rIds).
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    /// Get the relationships for this part.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add or get a relationship to another part.
    ///
    /// If a relationship of the given type to the target already exists,
    /// returns its rId. Otherwise, creates a new relationship and returns
    /// the new rId.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target_ref).r_id().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_accessors() {
        let partname = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        let part = Part::new(partname, "application/xml", b"<sld/>".to_vec());

        assert_eq!(part.partname().as_str(), "/ppt/slides/slide1.xml");
        assert_eq!(part.content_type(), "application/xml");
        assert_eq!(part.blob(), b"<sld/>");
        assert!(part.rels().is_empty());
    }

    #[test]
    fn test_relate_to() {
        let partname = PackURI::new("/ppt/presentation.xml").unwrap();
        let mut part = Part::new(partname, "application/xml", Vec::new());

        let rid = part.relate_to("slides/slide1.xml", "reltype");
        assert_eq!(rid, "rId1");
        // Repeating the same relation returns the same rId.
        assert_eq!(part.relate_to("slides/slide1.xml", "reltype"), "rId1");
        assert_eq!(part.relate_to("slides/slide2.xml", "reltype"), "rId2");
    }

    #[test]
    fn test_set_blob() {
        let partname = PackURI::new("/ppt/presentation.xml").unwrap();
        let mut part = Part::new(partname, "application/xml", Vec::new());
        part.set_blob(b"<presentation/>".to_vec());
        assert_eq!(part.blob(), b"<presentation/>");
    }
}

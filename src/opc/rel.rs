/// Relationship-related objects for OPC packages.
///
/// Every part that points at another part does so through a relationship:
/// an rId, a relationship type URI, and a target reference relative to the
/// source part. The package itself carries a relationship collection too
/// (`/_rels/.rels`).
use crate::common::xml::escape_xml;

/// A single relationship from a source (part or package) to a target part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source's base URI
    target_ref: String,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Collection of relationships from a single source, in insertion order.
///
/// Relationship IDs are allocated sequentially (`rId1`, `rId2`, ...).
/// Nothing on the write path ever removes a relationship, so insertion
/// order and numeric rId order coincide.
#[derive(Debug, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or add a relationship of `reltype` to `target_ref`.
    ///
    /// If a matching relationship already exists its rId is returned,
    /// otherwise a new relationship with the next rId is created.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> &Relationship {
        if let Some(pos) = self
            .rels
            .iter()
            .position(|rel| rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return &self.rels[pos];
        }

        self.rels.push(Relationship {
            r_id: format!("rId{}", self.rels.len() + 1),
            reltype: reltype.to_string(),
            target_ref: target_ref.to_string(),
        });
        self.rels.last().unwrap()
    }

    /// Get a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Get an iterator over all relationships in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Get the number of relationships in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize relationships to the XML of a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        xml.push('\n');

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"  <Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref),
            ));
            xml.push('\n');
        }

        xml.push_str("</Relationships>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_r_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.get_or_add("type1", "target1").r_id(), "rId1");
        assert_eq!(rels.get_or_add("type1", "target2").r_id(), "rId2");
        assert_eq!(rels.get_or_add("type2", "target3").r_id(), "rId3");
        assert_eq!(rels.len(), 3);
    }

    #[test]
    fn test_get_or_add_reuses_existing() {
        let mut rels = Relationships::new();
        let first = rels.get_or_add("type1", "target1").r_id().to_string();
        let second = rels.get_or_add("type1", "target1").r_id().to_string();
        assert_eq!(first, second);
        assert_eq!(rels.len(), 1);
    }

    #[test]
    fn test_get() {
        let mut rels = Relationships::new();
        rels.get_or_add("type1", "slides/slide1.xml");
        assert_eq!(rels.get("rId1").unwrap().target_ref(), "slides/slide1.xml");
        assert!(rels.get("rId9").is_none());
    }

    #[test]
    fn test_to_xml() {
        let mut rels = Relationships::new();
        rels.get_or_add(
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide",
            "slides/slide1.xml",
        );
        let xml = rels.to_xml();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Target="slides/slide1.xml""#));
        assert!(xml.ends_with("</Relationships>"));
    }
}

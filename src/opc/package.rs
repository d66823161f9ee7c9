/// The in-memory OPC package being assembled.
///
/// Holds package-level relationships and parts in insertion order. Order
/// matters for output determinism: parts are serialized to the archive in
/// the order they were added.
use crate::opc::packuri::PackURI;
use crate::opc::part::Part;
use crate::opc::rel::Relationships;

/// An Open Packaging Convention package under construction.
pub struct OpcPackage {
    /// Package-level relationships (serialized as /_rels/.rels)
    rels: Relationships,

    /// All parts in the package, in insertion order
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(),
            parts: Vec::new(),
        }
    }

    /// Add a part to the package.
    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Relate the package to a part.
    ///
    /// # Returns
    /// The relationship ID (rId)
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target_ref).r_id().to_string()
    }

    /// Get a reference to the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Get an iterator over all parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Get the number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Check if a part with the given partname exists in the package.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|p| p.partname() == partname)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_part_preserves_order() {
        let mut pkg = OpcPackage::new();
        for name in ["/a.xml", "/b.xml", "/c.xml"] {
            pkg.add_part(Part::new(
                PackURI::new(name).unwrap(),
                "application/xml",
                Vec::new(),
            ));
        }

        let names: Vec<&str> = pkg.iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(names, ["/a.xml", "/b.xml", "/c.xml"]);
        assert_eq!(pkg.part_count(), 3);
    }

    #[test]
    fn test_contains_part() {
        let mut pkg = OpcPackage::new();
        let partname = PackURI::new("/ppt/presentation.xml").unwrap();
        assert!(!pkg.contains_part(&partname));

        pkg.add_part(Part::new(partname.clone(), "application/xml", Vec::new()));
        assert!(pkg.contains_part(&partname));
    }

    #[test]
    fn test_package_rels() {
        let mut pkg = OpcPackage::new();
        let rid = pkg.relate_to("ppt/presentation.xml", "officeDocument");
        assert_eq!(rid, "rId1");
        assert_eq!(pkg.rels().len(), 1);
    }
}

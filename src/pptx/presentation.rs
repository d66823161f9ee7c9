/// The presentation document and its builder operations.
use crate::pptx::error::{PptxError, Result};
use crate::pptx::package;
use crate::pptx::slide::Slide;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// A presentation under construction.
///
/// Slides are appended in call order and serialized in that same order;
/// nothing reorders them afterwards.
///
/// # Examples
///
/// ```rust,no_run
/// use tamarind::pptx::Presentation;
///
/// let mut pres = Presentation::new();
/// pres.add_title_slide("Launch Review", "Q3 status");
/// pres.add_content_slide("Highlights", &["Shipped v1", "Zero regressions"])?;
/// pres.save("review.pptx")?;
/// # Ok::<(), tamarind::pptx::PptxError>(())
/// ```
#[derive(Debug)]
pub struct Presentation {
    /// Slides in presentation order
    slides: Vec<Slide>,
    /// Slide width in EMUs (914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
}

impl Presentation {
    /// Create a new empty presentation.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9_144_000,  // 10 inches
            slide_height: 6_858_000, // 7.5 inches
        }
    }

    /// Append a title slide (centered title + subtitle).
    pub fn add_title_slide(&mut self, title: &str, subtitle: &str) {
        let slide_id = self.next_slide_id();
        self.slides.push(Slide::title_slide(slide_id, title, subtitle));
    }

    /// Append a content slide (title + bulleted body).
    ///
    /// The first bullet becomes the body's base paragraph; the rest are
    /// appended as further paragraphs in order. Fails with
    /// [`PptxError::EmptyBody`] when `bullets` is empty.
    pub fn add_content_slide(&mut self, title: &str, bullets: &[&str]) -> Result<()> {
        let slide_id = self.next_slide_id();
        self.slides.push(Slide::content_slide(slide_id, title, bullets)?);
        Ok(())
    }

    /// Get the slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        package::to_bytes(self)
    }

    /// Serialize the presentation to a `.pptx` file at `path`.
    ///
    /// An existing file at `path` is overwritten. The archive is assembled
    /// in memory and written with a single filesystem call, so a failure
    /// leaves no dangling handle and no partially written package.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    // Slide IDs start at 256; sldId values below that are reserved.
    fn next_slide_id(&self) -> u32 {
        (self.slides.len() + 256) as u32
    }

    /// Generate presentation.xml content.
    ///
    /// # Arguments
    /// * `slide_rel_ids` - relationship IDs of the slide parts, in slide
    ///   order, from the presentation part's relationships
    pub(crate) fn generate_presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        debug_assert_eq!(slide_rel_ids.len(), self.slides.len());

        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);

        // Slide master ID list; the master is always the presentation
        // part's first relationship (see package::build_package).
        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), rel_id)
                    .map_err(|e| PptxError::Xml(e.to_string()))?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )
        .map_err(|e| PptxError::Xml(e.to_string()))?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_create_presentation() {
        let pres = Presentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_add_slides_in_order() {
        let mut pres = Presentation::new();
        pres.add_title_slide("Title", "Subtitle");
        pres.add_content_slide("Second", &["a"]).unwrap();
        pres.add_content_slide("Third", &["b"]).unwrap();

        let titles: Vec<&str> = pres.slides().iter().map(|s| s.title()).collect();
        assert_eq!(titles, ["Title", "Second", "Third"]);
        let ids: Vec<u32> = pres.slides().iter().map(|s| s.slide_id()).collect();
        assert_eq!(ids, [256, 257, 258]);
    }

    #[test]
    fn test_add_content_slide_empty_bullets_fails() {
        let mut pres = Presentation::new();
        assert!(pres.add_content_slide("No body", &[]).is_err());
        // The failed call must not append a slide.
        assert_eq!(pres.slide_count(), 0);
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = Presentation::new();
        pres.add_title_slide("One", "sub");
        pres.add_content_slide("Two", &["x"]).unwrap();

        let rel_ids = vec!["rId2".to_string(), "rId3".to_string()];
        let xml = pres.generate_presentation_xml(&rel_ids).unwrap();

        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let mut pres = Presentation::new();
        pres.add_title_slide("Saved", "to disk");
        pres.save(&path).unwrap();

        let first = std::fs::read(&path).unwrap();
        assert!(!first.is_empty());

        // Saving again overwrites the existing file with identical bytes.
        pres.save(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), first);
    }

    proptest! {
        #[test]
        fn prop_slide_order_matches_call_order(titles in proptest::collection::vec("[a-zA-Z0-9 ]{1,20}", 1..12)) {
            let mut pres = Presentation::new();
            for title in &titles {
                pres.add_content_slide(title, &["body"]).unwrap();
            }
            let got: Vec<&str> = pres.slides().iter().map(|s| s.title()).collect();
            prop_assert_eq!(got, titles.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}

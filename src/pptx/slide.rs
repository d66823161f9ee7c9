/// Slide types and slide XML generation.
use crate::common::style::RGBColor;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::pptx::error::{PptxError, Result};
use std::fmt::Write as FmtWrite;

/// Title text color on content slides (#052E16).
pub const TITLE_COLOR: RGBColor = RGBColor::new(5, 46, 22);

/// Background fill on content slides.
pub const BACKGROUND_COLOR: RGBColor = RGBColor::new(255, 255, 255);

/// Font size of follow-on body paragraphs, in points.
pub const BODY_FONT_SIZE_PT: f64 = 18.0;

/// Spacing after each follow-on body paragraph, in points.
pub const BODY_SPACE_AFTER_PT: f64 = 10.0;

/// The layout a slide binds to.
///
/// Layouts are fixed package parts (see [`super::template`]); a slide's
/// placeholder shapes must match the placeholders of its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layout {
    /// Layout 1: centered title + subtitle
    Title,
    /// Layout 2: title + bulleted body
    TitleAndContent,
}

impl Layout {
    /// Target reference of the layout part, relative to /ppt/slides.
    pub(crate) fn target_ref(self) -> &'static str {
        match self {
            Layout::Title => "../slideLayouts/slideLayout1.xml",
            Layout::TitleAndContent => "../slideLayouts/slideLayout2.xml",
        }
    }
}

/// The body of a slide.
#[derive(Debug, Clone)]
pub enum SlideBody {
    /// Title-slide variant: a single subtitle line
    Subtitle(String),
    /// Content-slide variant: one paragraph per bullet, never empty
    Bullets(Vec<String>),
}

/// One slide of a presentation.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID (unique identifier within the presentation)
    slide_id: u32,
    /// Slide title text
    title: String,
    /// Slide body
    body: SlideBody,
}

impl Slide {
    /// Create a title slide.
    pub(crate) fn title_slide(slide_id: u32, title: &str, subtitle: &str) -> Self {
        Self {
            slide_id,
            title: title.to_string(),
            body: SlideBody::Subtitle(subtitle.to_string()),
        }
    }

    /// Create a content slide.
    ///
    /// Fails with [`PptxError::EmptyBody`] when `bullets` is empty: the
    /// first bullet becomes the body's base paragraph, so a bulletless
    /// content slide has no meaning.
    pub(crate) fn content_slide(slide_id: u32, title: &str, bullets: &[&str]) -> Result<Self> {
        if bullets.is_empty() {
            return Err(PptxError::EmptyBody(title.to_string()));
        }

        Ok(Self {
            slide_id,
            title: title.to_string(),
            body: SlideBody::Bullets(bullets.iter().map(|b| b.to_string()).collect()),
        })
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Get the slide title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the slide body.
    pub fn body(&self) -> &SlideBody {
        &self.body
    }

    /// Get the subtitle, if this is a title slide.
    pub fn subtitle(&self) -> Option<&str> {
        match &self.body {
            SlideBody::Subtitle(subtitle) => Some(subtitle),
            SlideBody::Bullets(_) => None,
        }
    }

    /// Get the bullets, if this is a content slide.
    pub fn bullets(&self) -> Option<&[String]> {
        match &self.body {
            SlideBody::Subtitle(_) => None,
            SlideBody::Bullets(bullets) => Some(bullets),
        }
    }

    /// The layout this slide binds to.
    pub(crate) fn layout(&self) -> Layout {
        match self.body {
            SlideBody::Subtitle(_) => Layout::Title,
            SlideBody::Bullets(_) => Layout::TitleAndContent,
        }
    }

    /// Generate the slide part XML.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);

        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");

        // Background comes BEFORE spTree per the PresentationML schema.
        // Only content slides carry an explicit (white) background; the
        // title slide inherits the master's.
        if matches!(self.body, SlideBody::Bullets(_)) {
            self.write_background(&mut xml)?;
        }

        xml.push_str("<p:spTree>");

        // Group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        match &self.body {
            SlideBody::Subtitle(subtitle) => {
                self.write_title_shape(&mut xml, "ctrTitle", false)?;
                self.write_subtitle_shape(&mut xml, subtitle)?;
            },
            SlideBody::Bullets(bullets) => {
                self.write_title_shape(&mut xml, "title", true)?;
                self.write_body_shape(&mut xml, bullets)?;
            },
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");

        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Write the solid background fill of a content slide.
    fn write_background(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:bg><p:bgPr><a:solidFill>");
        write!(xml, r#"<a:srgbClr val="{}"/>"#, BACKGROUND_COLOR.to_hex())
            .map_err(|e| PptxError::Xml(e.to_string()))?;
        xml.push_str("</a:solidFill><a:effectLst/></p:bgPr></p:bg>");
        Ok(())
    }

    /// Write the title placeholder shape.
    ///
    /// `ph_type` is the placeholder type of the bound layout ("ctrTitle" on
    /// the title slide, "title" on content slides). Content-slide titles
    /// render bold in the fixed deck color.
    fn write_title_shape(&self, xml: &mut String, ph_type: &str, styled: bool) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        // IDs: group shape uses id=1, title id=2, body/subtitle id=3
        xml.push_str(r#"<p:cNvPr id="2" name="Title 1"/>"#);
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        write!(xml, r#"<p:nvPr><p:ph type="{}"/></p:nvPr>"#, ph_type)
            .map_err(|e| PptxError::Xml(e.to_string()))?;
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        xml.push_str("<a:p>");
        xml.push_str("<a:r>");
        if styled {
            write!(
                xml,
                r#"<a:rPr lang="en-US" b="1" dirty="0"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:rPr>"#,
                TITLE_COLOR.to_hex()
            )
            .map_err(|e| PptxError::Xml(e.to_string()))?;
        } else {
            xml.push_str(r#"<a:rPr lang="en-US" dirty="0"/>"#);
        }
        write!(xml, "<a:t>{}</a:t>", escape_xml(&self.title))
            .map_err(|e| PptxError::Xml(e.to_string()))?;
        xml.push_str("</a:r>");
        xml.push_str("</a:p>");
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");

        Ok(())
    }

    /// Write the subtitle placeholder shape of a title slide.
    fn write_subtitle_shape(&self, xml: &mut String, subtitle: &str) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="3" name="Subtitle 2"/>"#);
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        xml.push_str(r#"<p:nvPr><p:ph type="subTitle" idx="1"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        xml.push_str("<a:p>");
        xml.push_str("<a:r>");
        xml.push_str(r#"<a:rPr lang="en-US" dirty="0"/>"#);
        write!(xml, "<a:t>{}</a:t>", escape_xml(subtitle))
            .map_err(|e| PptxError::Xml(e.to_string()))?;
        xml.push_str("</a:r>");
        xml.push_str("</a:p>");
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");

        Ok(())
    }

    /// Write the body placeholder shape of a content slide.
    ///
    /// The first bullet is the body's base paragraph and inherits the
    /// layout's formatting; every following bullet is an appended level-0
    /// paragraph at [`BODY_FONT_SIZE_PT`] with [`BODY_SPACE_AFTER_PT`]
    /// spacing after it.
    fn write_body_shape(&self, xml: &mut String, bullets: &[String]) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="3" name="Content Placeholder 2"/>"#);
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        xml.push_str(r#"<p:nvPr><p:ph idx="1"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");

        for (index, bullet) in bullets.iter().enumerate() {
            xml.push_str("<a:p>");
            if index > 0 {
                write!(
                    xml,
                    r#"<a:pPr lvl="0"><a:spcAft><a:spcPts val="{}"/></a:spcAft></a:pPr>"#,
                    pt_to_centipoints(BODY_SPACE_AFTER_PT)
                )
                .map_err(|e| PptxError::Xml(e.to_string()))?;
            }
            xml.push_str("<a:r>");
            if index > 0 {
                write!(
                    xml,
                    r#"<a:rPr lang="en-US" sz="{}" dirty="0"/>"#,
                    pt_to_centipoints(BODY_FONT_SIZE_PT)
                )
                .map_err(|e| PptxError::Xml(e.to_string()))?;
            } else {
                xml.push_str(r#"<a:rPr lang="en-US" dirty="0"/>"#);
            }
            write!(xml, "<a:t>{}</a:t>", escape_xml(bullet))
                .map_err(|e| PptxError::Xml(e.to_string()))?;
            xml.push_str("</a:r>");
            xml.push_str("</a:p>");
        }

        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        Ok(())
    }
}

//! Maps a [`Presentation`] onto OPC parts and serializes the package.
//!
//! Part graph of a generated package:
//!
//! ```text
//! /                        -> ppt/presentation.xml, docProps/{core,app}.xml
//! ppt/presentation.xml     -> slideMaster1, slide1..slideN, presProps,
//!                             viewProps, theme1, tableStyles
//! ppt/slides/slideN.xml    -> its slideLayout
//! ppt/slideMasters/...     -> slideLayout1, slideLayout2, theme1
//! ppt/slideLayouts/...     -> slideMaster1
//! ```

use crate::opc::constants::{content_type as ct, relationship_type as rt};
use crate::opc::{OpcPackage, PackURI, PackageWriter, Part};
use crate::pptx::error::Result;
use crate::pptx::presentation::Presentation;
use crate::pptx::template;

/// Serialize a presentation to `.pptx` archive bytes.
pub(crate) fn to_bytes(pres: &Presentation) -> Result<Vec<u8>> {
    let pkg = build_package(pres)?;
    Ok(PackageWriter::to_bytes(&pkg)?)
}

/// Assemble the OPC package for a presentation.
fn build_package(pres: &Presentation) -> Result<OpcPackage> {
    let mut pkg = OpcPackage::new();

    let mut pres_part = Part::new(
        PackURI::new("/ppt/presentation.xml")?,
        ct::PML_PRESENTATION_MAIN,
        Vec::new(),
    );

    // The master template's sldLayoutIdLst hardcodes rId1/rId2, so the
    // layout relationships must be allocated first and in layout order.
    let mut master = Part::new(
        PackURI::new("/ppt/slideMasters/slideMaster1.xml")?,
        ct::PML_SLIDE_MASTER,
        template::default_slide_master_xml().as_bytes().to_vec(),
    );
    master.relate_to("../slideLayouts/slideLayout1.xml", rt::SLIDE_LAYOUT);
    master.relate_to("../slideLayouts/slideLayout2.xml", rt::SLIDE_LAYOUT);
    master.relate_to("../theme/theme1.xml", rt::THEME);

    let mut layout1 = Part::new(
        PackURI::new("/ppt/slideLayouts/slideLayout1.xml")?,
        ct::PML_SLIDE_LAYOUT,
        template::title_slide_layout_xml().as_bytes().to_vec(),
    );
    layout1.relate_to("../slideMasters/slideMaster1.xml", rt::SLIDE_MASTER);

    let mut layout2 = Part::new(
        PackURI::new("/ppt/slideLayouts/slideLayout2.xml")?,
        ct::PML_SLIDE_LAYOUT,
        template::content_slide_layout_xml().as_bytes().to_vec(),
    );
    layout2.relate_to("../slideMasters/slideMaster1.xml", rt::SLIDE_MASTER);

    // presentation.xml's master relationship must be rId1 (the generated
    // sldMasterIdLst references it), so it is allocated before the slides.
    pres_part.relate_to("slideMasters/slideMaster1.xml", rt::SLIDE_MASTER);

    let mut slide_rel_ids = Vec::with_capacity(pres.slide_count());
    for (index, slide) in pres.slides().iter().enumerate() {
        let number = index + 1;
        let mut part = Part::new(
            PackURI::new(format!("/ppt/slides/slide{}.xml", number))?,
            ct::PML_SLIDE,
            slide.to_xml()?.into_bytes(),
        );
        part.relate_to(slide.layout().target_ref(), rt::SLIDE_LAYOUT);

        let rel_id = pres_part.relate_to(&format!("slides/slide{}.xml", number), rt::SLIDE);
        slide_rel_ids.push(rel_id);
        pkg.add_part(part);
    }

    pres_part.relate_to("presProps.xml", rt::PRES_PROPS);
    pres_part.relate_to("viewProps.xml", rt::VIEW_PROPS);
    pres_part.relate_to("theme/theme1.xml", rt::THEME);
    pres_part.relate_to("tableStyles.xml", rt::TABLE_STYLES);

    pres_part.set_blob(pres.generate_presentation_xml(&slide_rel_ids)?.into_bytes());
    pkg.add_part(pres_part);
    pkg.add_part(master);
    pkg.add_part(layout1);
    pkg.add_part(layout2);

    pkg.add_part(Part::new(
        PackURI::new("/ppt/theme/theme1.xml")?,
        ct::OFC_THEME,
        template::default_theme_xml().as_bytes().to_vec(),
    ));
    pkg.add_part(Part::new(
        PackURI::new("/ppt/presProps.xml")?,
        ct::PML_PRES_PROPS,
        template::default_pres_props_xml().as_bytes().to_vec(),
    ));
    pkg.add_part(Part::new(
        PackURI::new("/ppt/viewProps.xml")?,
        ct::PML_VIEW_PROPS,
        template::default_view_props_xml().as_bytes().to_vec(),
    ));
    pkg.add_part(Part::new(
        PackURI::new("/ppt/tableStyles.xml")?,
        ct::PML_TABLE_STYLES,
        template::default_table_styles_xml().as_bytes().to_vec(),
    ));
    pkg.add_part(Part::new(
        PackURI::new("/docProps/core.xml")?,
        ct::OPC_CORE_PROPERTIES,
        template::default_core_props_xml().as_bytes().to_vec(),
    ));
    pkg.add_part(Part::new(
        PackURI::new("/docProps/app.xml")?,
        ct::OFC_EXTENDED_PROPERTIES,
        template::default_app_props_xml().as_bytes().to_vec(),
    ));

    pkg.relate_to("ppt/presentation.xml", rt::OFFICE_DOCUMENT);
    pkg.relate_to("docProps/core.xml", rt::CORE_PROPERTIES);
    pkg.relate_to("docProps/app.xml", rt::EXTENDED_PROPERTIES);

    Ok(pkg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn sample_presentation() -> Presentation {
        let mut pres = Presentation::new();
        pres.add_title_slide("Deck", "Subtitle");
        pres.add_content_slide("Content", &["one", "two"]).unwrap();
        pres
    }

    fn read_member(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn test_package_members() {
        let bytes = to_bytes(&sample_presentation()).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(&bytes[..])).unwrap();

        let names: Vec<&str> = archive.file_names().collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/slides/slide2.xml",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideLayouts/slideLayout2.xml",
            "ppt/theme/theme1.xml",
            "ppt/presProps.xml",
            "ppt/viewProps.xml",
            "ppt/tableStyles.xml",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(names.contains(&expected), "missing member {}", expected);
        }
    }

    #[test]
    fn test_content_types_cover_all_parts() {
        let bytes = to_bytes(&sample_presentation()).unwrap();
        let content_types = read_member(&bytes, "[Content_Types].xml");

        assert!(content_types.contains(r#"PartName="/ppt/presentation.xml""#));
        assert!(content_types.contains(r#"PartName="/ppt/slides/slide1.xml""#));
        assert!(content_types.contains(r#"PartName="/ppt/slides/slide2.xml""#));
        assert!(content_types.contains(r#"PartName="/ppt/slideMasters/slideMaster1.xml""#));
        assert!(content_types.contains(r#"PartName="/ppt/theme/theme1.xml""#));
        assert!(content_types.contains(r#"PartName="/docProps/core.xml""#));
    }

    #[test]
    fn test_slides_relate_to_their_layouts() {
        let bytes = to_bytes(&sample_presentation()).unwrap();

        // Slide 1 is the title slide (layout 1), slide 2 a content slide
        // (layout 2).
        let slide1_rels = read_member(&bytes, "ppt/slides/_rels/slide1.xml.rels");
        assert!(slide1_rels.contains(r#"Target="../slideLayouts/slideLayout1.xml""#));

        let slide2_rels = read_member(&bytes, "ppt/slides/_rels/slide2.xml.rels");
        assert!(slide2_rels.contains(r#"Target="../slideLayouts/slideLayout2.xml""#));
    }

    #[test]
    fn test_master_rel_ids_match_template() {
        let bytes = to_bytes(&sample_presentation()).unwrap();
        let master_rels = read_member(&bytes, "ppt/slideMasters/_rels/slideMaster1.xml.rels");

        // The master template hardcodes rId1/rId2 for its layouts.
        assert!(master_rels
            .contains(r#"Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml""#));
        assert!(master_rels
            .contains(r#"Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout2.xml""#));
    }

    #[test]
    fn test_presentation_xml_references_actual_slide_rels() {
        let bytes = to_bytes(&sample_presentation()).unwrap();

        let pres_xml = read_member(&bytes, "ppt/presentation.xml");
        let pres_rels = read_member(&bytes, "ppt/_rels/presentation.xml.rels");

        // Master is rId1; the two slides follow in order.
        assert!(pres_rels.contains(r#"Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster""#));
        assert!(pres_rels.contains(r#"Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml""#));
        assert!(pres_rels.contains(r#"Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide2.xml""#));
        assert!(pres_xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(pres_xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
    }

    #[test]
    fn test_package_rels() {
        let bytes = to_bytes(&sample_presentation()).unwrap();
        let rels = read_member(&bytes, "_rels/.rels");

        assert!(rels.contains(r#"Target="ppt/presentation.xml""#));
        assert!(rels.contains(r#"Target="docProps/core.xml""#));
        assert!(rels.contains(r#"Target="docProps/app.xml""#));
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let first = to_bytes(&sample_presentation()).unwrap();
        let second = to_bytes(&sample_presentation()).unwrap();
        assert_eq!(first, second);
    }
}

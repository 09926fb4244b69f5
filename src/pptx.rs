// ABOUTME: PPTX package writer for slide-forge
// ABOUTME: Collects rendered slides in a mutable deck handle and zips them into a presentation

use crate::color::Rgb;
use crate::errors::Result;
use crate::layout::{Rect, TextRegion};
use crate::model::{AspectRatio, RenderedDeck};
use crate::template::{
    NS_A, NS_P, NS_R, REL_IMAGE, REL_SLIDE, REL_SLIDE_LAYOUT, REL_SLIDE_MASTER, REL_THEME,
    ROOT_RELS_XML, SLIDE_LAYOUT_RELS_XML, SLIDE_LAYOUT_XML, SLIDE_MASTER_RELS_XML,
    SLIDE_MASTER_XML, THEME_XML,
};
use log::{debug, info};
use std::io::{Cursor, Write};
use zip::{write::FileOptions, ZipWriter};

/// MIME type a delivery layer should send with the deck bytes.
pub const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// Bullet indent in EMU.
const BULLET_INDENT: i64 = 342_900;

/// Image formats a presentation can embed directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Png,
    Jpeg,
    Gif,
}

impl MediaFormat {
    pub fn extension(self) -> &'static str {
        match self {
            MediaFormat::Png => "png",
            MediaFormat::Jpeg => "jpeg",
            MediaFormat::Gif => "gif",
        }
    }
}

#[derive(Debug, Clone)]
struct MediaPart {
    file_name: String,
    format: MediaFormat,
    bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
struct SlidePart {
    title: String,
    xml: String,
    media: Vec<MediaPart>,
}

/// One slide under construction.
#[derive(Debug)]
pub struct SlideBuilder {
    title: String,
    background: Option<Rgb>,
    shapes: Vec<String>,
    media: Vec<MediaPart>,
    next_shape_id: u32,
}

impl SlideBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            background: None,
            shapes: Vec::new(),
            media: Vec::new(),
            // id 1 is the shape tree itself
            next_shape_id: 2,
        }
    }

    pub fn set_background(&mut self, color: Rgb) {
        self.background = Some(color);
    }

    #[cfg(test)]
    pub(crate) fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    fn take_shape_id(&mut self) -> u32 {
        let id = self.next_shape_id;
        self.next_shape_id += 1;
        id
    }

    /// Add a text box with one paragraph per line. An empty `lines` slice
    /// produces an empty paragraph so the box still exists.
    pub fn add_text_box(
        &mut self,
        name: &str,
        region: &TextRegion,
        font: &str,
        lines: &[&str],
        bulleted: bool,
    ) {
        let id = self.take_shape_id();
        let font = xml_text(font);
        let run_props = format!(
            r#"lang="en-US" sz="{size}" b="{bold}" dirty="0""#,
            size = region.font_size_pt * 100,
            bold = u8::from(region.bold),
        );
        let run_fill = format!(
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:latin typeface="{font}"/><a:cs typeface="{font}"/>"#,
            region.color.to_hex(),
        );

        let mut paragraphs = String::new();
        if lines.is_empty() {
            paragraphs.push_str(&format!(
                r#"<a:p><a:pPr algn="{}"/><a:endParaRPr {run_props}>{run_fill}</a:endParaRPr></a:p>"#,
                region.align.as_drawingml(),
            ));
        }
        for line in lines {
            let paragraph_props = if bulleted {
                format!(
                    r#"<a:pPr marL="{BULLET_INDENT}" indent="-{BULLET_INDENT}" algn="{}"><a:spcBef><a:spcPts val="600"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/></a:pPr>"#,
                    region.align.as_drawingml(),
                )
            } else {
                format!(
                    r#"<a:pPr algn="{}"><a:buNone/></a:pPr>"#,
                    region.align.as_drawingml()
                )
            };
            paragraphs.push_str(&format!(
                r#"<a:p>{paragraph_props}<a:r><a:rPr {run_props}>{run_fill}</a:rPr><a:t>{}</a:t></a:r></a:p>"#,
                xml_text(line),
            ));
        }

        let anchor = if region.anchor_middle { "ctr" } else { "t" };
        self.shapes.push(format!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name} {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>{xfrm}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr><p:txBody><a:bodyPr wrap="square" rtlCol="0" anchor="{anchor}"><a:normAutofit/></a:bodyPr><a:lstStyle/>{paragraphs}</p:txBody></p:sp>"#,
            name = xml_text(name),
            xfrm = xfrm(&region.rect),
        ));
    }

    /// Embed a picture stretched exactly over `rect`.
    pub fn add_picture(&mut self, rect: &Rect, format: MediaFormat, bytes: Vec<u8>) {
        let id = self.take_shape_id();
        // rId1 is the slide layout; pictures follow in insertion order
        let rel_id = self.media.len() + 2;
        self.media.push(MediaPart {
            file_name: String::new(),
            format,
            bytes,
        });
        self.shapes.push(format!(
            r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Picture {id}"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="rId{rel_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr>{xfrm}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#,
            xfrm = xfrm(rect),
        ));
    }

    fn to_xml(&self) -> String {
        let background = self
            .background
            .map(|color| {
                format!(
                    r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                    color.to_hex()
                )
            })
            .unwrap_or_default();

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">
    <p:cSld>
        {background}
        <p:spTree>
            <p:nvGrpSpPr>
                <p:cNvPr id="1" name=""/>
                <p:cNvGrpSpPr/>
                <p:nvPr/>
            </p:nvGrpSpPr>
            <p:grpSpPr>
                <a:xfrm>
                    <a:off x="0" y="0"/>
                    <a:ext cx="0" cy="0"/>
                    <a:chOff x="0" y="0"/>
                    <a:chExt cx="0" cy="0"/>
                </a:xfrm>
            </p:grpSpPr>
            {shapes}
        </p:spTree>
    </p:cSld>
    <p:clrMapOvr>
        <a:masterClrMapping/>
    </p:clrMapOvr>
</p:sld>"#,
            shapes = self.shapes.join("\n            "),
        )
    }
}

/// Mutable presentation under construction. Not shared between threads; each
/// assembly owns one and consumes it in [`DeckHandle::finalize`].
#[derive(Debug)]
pub struct DeckHandle {
    title: String,
    aspect_ratio: AspectRatio,
    slides: Vec<SlidePart>,
    media_count: usize,
}

impl DeckHandle {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            aspect_ratio: AspectRatio::Widescreen16x9,
            slides: Vec::new(),
            media_count: 0,
        }
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Append a finished slide after all previously added ones.
    pub fn add_slide(&mut self, slide: SlideBuilder) {
        let xml = slide.to_xml();
        let SlideBuilder {
            title, mut media, ..
        } = slide;
        for part in media.iter_mut() {
            self.media_count += 1;
            part.file_name = format!("image{}.{}", self.media_count, part.format.extension());
        }
        debug!(
            "Added slide {} ({:?}) with {} media part(s)",
            self.slides.len() + 1,
            title,
            media.len()
        );
        self.slides.push(SlidePart { title, xml, media });
    }

    /// Serialize the deck into PPTX bytes.
    pub fn finalize(self) -> Result<RenderedDeck> {
        let (cx, cy) = self.aspect_ratio.slide_size_emu();
        let slide_count = self.slides.len();
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default();

        info!("Creating PPTX structure: [Content_Types].xml");
        zip.start_file("[Content_Types].xml", options)?;
        let content_types = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="jpeg" ContentType="image/jpeg"/>
    <Default Extension="png" ContentType="image/png"/>
    <Default Extension="gif" ContentType="image/gif"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
    <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
    <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
    {slides}
</Types>"#,
            slides = (1..=slide_count)
                .map(|n| format!(r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#))
                .collect::<Vec<String>>()
                .join("\n    ")
        );
        zip.write_all(content_types.as_bytes())?;

        info!("Creating PPTX structure: _rels/.rels");
        zip.start_file("_rels/.rels", options)?;
        zip.write_all(ROOT_RELS_XML.as_bytes())?;

        info!("Creating PPTX structure: docProps");
        zip.start_file("docProps/app.xml", options)?;
        let app_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>slide-forge</Application>
    <PresentationFormat>Widescreen</PresentationFormat>
    <Slides>{slide_count}</Slides>
</Properties>"#
        );
        zip.write_all(app_xml.as_bytes())?;

        zip.start_file("docProps/core.xml", options)?;
        let core_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{}</dc:title>
    <dc:creator>slide-forge</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
            xml_text(&self.title),
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
        );
        zip.write_all(core_xml.as_bytes())?;

        info!("Creating PPTX structure: ppt/presentation.xml");
        zip.start_file("ppt/_rels/presentation.xml.rels", options)?;
        let mut pres_rels = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
        );
        pres_rels.push_str(&format!(
            "    <Relationship Id=\"rId1\" Type=\"{REL_SLIDE_MASTER}\" Target=\"slideMasters/slideMaster1.xml\"/>\n"
        ));
        for n in 1..=slide_count {
            pres_rels.push_str(&format!(
                "    <Relationship Id=\"rId{}\" Type=\"{REL_SLIDE}\" Target=\"slides/slide{n}.xml\"/>\n",
                n + 1
            ));
        }
        pres_rels.push_str(&format!(
            "    <Relationship Id=\"rId{}\" Type=\"{REL_THEME}\" Target=\"theme/theme1.xml\"/>\n",
            slide_count + 2
        ));
        pres_rels.push_str("</Relationships>");
        zip.write_all(pres_rels.as_bytes())?;

        zip.start_file("ppt/presentation.xml", options)?;
        let presentation_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" saveSubsetFonts="1">
    <p:sldMasterIdLst>
        <p:sldMasterId id="2147483648" r:id="rId1"/>
    </p:sldMasterIdLst>
    <p:sldIdLst>
{slide_ids}
    </p:sldIdLst>
    <p:sldSz cx="{cx}" cy="{cy}"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
            slide_ids = (1..=slide_count)
                .map(|n| format!(r#"        <p:sldId id="{}" r:id="rId{}"/>"#, 255 + n, n + 1))
                .collect::<Vec<String>>()
                .join("\n"),
        );
        zip.write_all(presentation_xml.as_bytes())?;

        info!("Creating PPTX structure: slide master, layout and theme");
        zip.start_file("ppt/slideMasters/slideMaster1.xml", options)?;
        zip.write_all(SLIDE_MASTER_XML.as_bytes())?;
        zip.start_file("ppt/slideMasters/_rels/slideMaster1.xml.rels", options)?;
        zip.write_all(SLIDE_MASTER_RELS_XML.as_bytes())?;
        zip.start_file("ppt/slideLayouts/slideLayout1.xml", options)?;
        zip.write_all(SLIDE_LAYOUT_XML.as_bytes())?;
        zip.start_file("ppt/slideLayouts/_rels/slideLayout1.xml.rels", options)?;
        zip.write_all(SLIDE_LAYOUT_RELS_XML.as_bytes())?;
        zip.start_file("ppt/theme/theme1.xml", options)?;
        zip.write_all(THEME_XML.as_bytes())?;

        let mut slide_titles = Vec::with_capacity(slide_count);
        for (i, slide) in self.slides.into_iter().enumerate() {
            let slide_num = i + 1;
            info!("Creating slide XML: ppt/slides/slide{}.xml", slide_num);

            for part in &slide.media {
                debug!("Adding image to PPTX: ppt/media/{}", part.file_name);
                zip.start_file(format!("ppt/media/{}", part.file_name), options)?;
                zip.write_all(&part.bytes)?;
            }

            zip.start_file(
                format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
                options,
            )?;
            let mut slide_rels = format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{REL_SLIDE_LAYOUT}" Target="../slideLayouts/slideLayout1.xml"/>
"#
            );
            for (k, part) in slide.media.iter().enumerate() {
                slide_rels.push_str(&format!(
                    "    <Relationship Id=\"rId{}\" Type=\"{REL_IMAGE}\" Target=\"../media/{}\"/>\n",
                    k + 2,
                    part.file_name
                ));
            }
            slide_rels.push_str("</Relationships>");
            zip.write_all(slide_rels.as_bytes())?;

            zip.start_file(format!("ppt/slides/slide{}.xml", slide_num), options)?;
            zip.write_all(slide.xml.as_bytes())?;
            slide_titles.push(slide.title);
        }

        info!("Finalizing PPTX with {} slide(s)", slide_count);
        let bytes = zip.finish()?.into_inner();

        Ok(RenderedDeck {
            bytes,
            slide_count,
            aspect_ratio: self.aspect_ratio,
            slide_titles,
        })
    }
}

fn xfrm(rect: &Rect) -> String {
    format!(
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        rect.x, rect.y, rect.width, rect.height
    )
}

/// Escape text for XML, dropping control characters XML 1.0 cannot carry.
pub fn xml_text(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect();
    quick_xml::escape::escape(cleaned.as_str()).into_owned()
}

/// Download file name for a deck title, e.g. `"Q3 Review"` → `q3-review.pptx`.
pub fn deck_file_name(title: &str) -> String {
    let slug = title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "presentation.pptx".to_string()
    } else {
        format!("{}.pptx", slug)
    }
}

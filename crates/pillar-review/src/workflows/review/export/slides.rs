//! Single-slide Office Open XML presentation writer.

use super::parts;
use chrono::Utc;
use quick_xml::escape::escape;
use std::io::{Seek, Write};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Path of the only slide inside the package.
pub const SLIDE_PART: &str = "ppt/slides/slide1.xml";

const EMU_PER_INCH: i64 = 914_400;
const TITLE_POINT_SIZE: u32 = 32;
const BODY_POINT_SIZE: u32 = 14;
const TEXT_COLOR: &str = "FFFFFF";
pub(crate) const BACKGROUND_COLOR: &str = "1E1E1E";

#[derive(Debug, Clone, Copy)]
struct Frame {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

impl Frame {
    /// Position and size in hundredths of an inch.
    const fn hundredths(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x: x * EMU_PER_INCH / 100,
            y: y * EMU_PER_INCH / 100,
            width: width * EMU_PER_INCH / 100,
            height: height * EMU_PER_INCH / 100,
        }
    }

    fn xml(&self) -> String {
        format!(
            r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            self.x, self.y, self.width, self.height
        )
    }
}

const TITLE_FRAME: Frame = Frame::hundredths(50, 30, 900, 100);
const BODY_FRAME: Frame = Frame::hundredths(50, 150, 900, 550);

/// Writes the presentation package and hands back the underlying writer.
pub fn write_slide_deck<W: Write + Seek>(
    writer: W,
    title: &str,
    body_lines: &[String],
) -> Result<W, ZipError> {
    let created = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let slide = slide_xml(title, body_lines);
    let core = parts::core_properties(&escape(title), &created);

    let entries: [(&str, &str); 13] = [
        ("[Content_Types].xml", parts::CONTENT_TYPES),
        ("_rels/.rels", parts::PACKAGE_RELS),
        ("docProps/app.xml", parts::APP_PROPERTIES),
        ("docProps/core.xml", core.as_str()),
        ("ppt/presentation.xml", parts::PRESENTATION),
        ("ppt/_rels/presentation.xml.rels", parts::PRESENTATION_RELS),
        (SLIDE_PART, slide.as_str()),
        ("ppt/slides/_rels/slide1.xml.rels", parts::SLIDE_RELS),
        ("ppt/slideLayouts/slideLayout1.xml", parts::SLIDE_LAYOUT),
        ("ppt/slideLayouts/_rels/slideLayout1.xml.rels", parts::SLIDE_LAYOUT_RELS),
        ("ppt/slideMasters/slideMaster1.xml", parts::SLIDE_MASTER),
        (
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            parts::SLIDE_MASTER_RELS,
        ),
        ("ppt/theme/theme1.xml", parts::THEME),
    ];

    let mut archive = ZipWriter::new(writer);
    for (name, contents) in entries {
        archive.start_file(name, part_options())?;
        archive.write_all(contents.as_bytes())?;
    }

    archive.finish()
}

fn part_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// Slide markup: a bold title placeholder and one body textbox, one paragraph
/// per line.
pub fn slide_xml(title: &str, body_lines: &[String]) -> String {
    let mut xml = String::new();
    xml.push_str(parts::XML_DECLARATION);
    xml.push_str(r#"<p:sld "#);
    xml.push_str(parts::NAMESPACES);
    xml.push('>');
    xml.push_str(&format!(
        r#"<p:cSld><p:bg><p:bgPr><a:solidFill><a:srgbClr val="{BACKGROUND_COLOR}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg><p:spTree>"#
    ));
    xml.push_str(parts::GROUP_SHAPE_PROPERTIES);

    xml.push_str(&format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr>{frame}</p:spPr><p:txBody><a:bodyPr/><a:lstStyle/><a:p>{run}</a:p></p:txBody></p:sp>"#,
        frame = TITLE_FRAME.xml(),
        run = text_run(title, TITLE_POINT_SIZE, true),
    ));

    xml.push_str(&format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="TextBox 2"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>{frame}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr><p:txBody><a:bodyPr wrap="square" rtlCol="0"><a:normAutofit/></a:bodyPr><a:lstStyle/>"#,
        frame = BODY_FRAME.xml(),
    ));
    for line in body_lines {
        if line.is_empty() {
            xml.push_str(&format!(
                r#"<a:p><a:endParaRPr lang="en-US" sz="{}"/></a:p>"#,
                BODY_POINT_SIZE * 100,
            ));
        } else {
            xml.push_str(&format!("<a:p>{}</a:p>", text_run(line, BODY_POINT_SIZE, false)));
        }
    }
    xml.push_str("</p:txBody></p:sp>");

    xml.push_str("</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>");
    xml
}

fn text_run(text: &str, point_size: u32, bold: bool) -> String {
    let bold = if bold { r#" b="1""# } else { "" };
    format!(
        r#"<a:r><a:rPr lang="en-US" sz="{size}"{bold} dirty="0"><a:solidFill><a:srgbClr val="{TEXT_COLOR}"/></a:solidFill></a:rPr><a:t>{text}</a:t></a:r>"#,
        size = point_size * 100,
        text = escape(text),
    )
}

use super::canvas::{draw_text, fill_rect, GLYPH_SIZE, BACKGROUND, FOREGROUND};
use image::RgbImage;

pub const SUMMARY_WIDTH: u32 = 1000;
pub const SUMMARY_HEIGHT: u32 = 800;

const MARGIN: u32 = 30;
const SCALE: u32 = 2;
const LINE_HEIGHT: i64 = 18;
const SECTION_GAP: i64 = 8;

/// Characters that fit on one line between the margins.
pub(crate) fn line_columns() -> usize {
    ((SUMMARY_WIDTH - 2 * MARGIN) / (GLYPH_SIZE * SCALE)) as usize
}

/// Renders the title and body lines onto the fixed canvas. Long lines wrap;
/// anything that runs past the bottom margin is dropped.
pub fn render_summary_image(title: &str, lines: &[String]) -> RgbImage {
    let mut image = RgbImage::from_pixel(SUMMARY_WIDTH, SUMMARY_HEIGHT, BACKGROUND);
    let left = i64::from(MARGIN);
    let glyph_height = i64::from(GLYPH_SIZE * SCALE);
    let bottom = i64::from(SUMMARY_HEIGHT - MARGIN);
    let columns = line_columns();

    let mut y = i64::from(MARGIN);
    for row in textwrap::wrap(title, columns) {
        draw_text(&mut image, left, y, &row, SCALE, FOREGROUND);
        y += LINE_HEIGHT;
    }
    fill_rect(&mut image, left, y + 2, SUMMARY_WIDTH - 2 * MARGIN, 2, FOREGROUND);
    y += SECTION_GAP * 2;

    for line in lines {
        if line.is_empty() {
            y += SECTION_GAP;
            continue;
        }

        let options = textwrap::Options::new(columns).subsequent_indent("  ");
        for row in textwrap::wrap(line, options) {
            if y + glyph_height > bottom {
                return image;
            }
            draw_text(&mut image, left, y, &row, SCALE, FOREGROUND);
            y += LINE_HEIGHT;
        }
    }

    image
}

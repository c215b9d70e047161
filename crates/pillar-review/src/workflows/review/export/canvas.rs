use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

pub const BACKGROUND: Rgb<u8> = Rgb([30, 30, 30]);
pub const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Edge length of one glyph cell before scaling.
pub(crate) const GLYPH_SIZE: u32 = 8;

pub(crate) fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale
}

/// Draws `text` with its top-left corner at `(x, y)`. Characters outside the
/// basic Latin set leave a blank cell.
pub(crate) fn draw_text(image: &mut RgbImage, x: i64, y: i64, text: &str, scale: u32, color: Rgb<u8>) {
    let advance = i64::from(GLYPH_SIZE * scale);
    let step = i64::from(scale);

    for (index, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let origin_x = x + index as i64 * advance;

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                fill_rect(
                    image,
                    origin_x + i64::from(col) * step,
                    y + row as i64 * step,
                    scale,
                    scale,
                    color,
                );
            }
        }
    }
}

/// Centers `text` horizontally on `center_x`.
pub(crate) fn draw_text_centered(
    image: &mut RgbImage,
    center_x: i64,
    y: i64,
    text: &str,
    scale: u32,
    color: Rgb<u8>,
) {
    let x = center_x - i64::from(text_width(text, scale)) / 2;
    draw_text(image, x, y, text, scale, color);
}

/// Fills a rectangle, clipping anything outside the canvas.
pub(crate) fn fill_rect(image: &mut RgbImage, x: i64, y: i64, width: u32, height: u32, color: Rgb<u8>) {
    let (canvas_width, canvas_height) = image.dimensions();
    let left = x.max(0);
    let top = y.max(0);
    let right = (x + i64::from(width)).min(i64::from(canvas_width));
    let bottom = (y + i64::from(height)).min(i64::from(canvas_height));

    for py in top..bottom {
        for px in left..right {
            image.put_pixel(px as u32, py as u32, color);
        }
    }
}

pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

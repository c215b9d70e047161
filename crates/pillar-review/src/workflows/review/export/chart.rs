use super::super::domain::ReviewInput;
use super::super::report::format_percent;
use super::canvas::{draw_text, draw_text_centered, fill_rect, BACKGROUND, FOREGROUND};
use image::{Rgb, RgbImage};
use std::f64::consts::TAU;

pub const CHART_WIDTH: u32 = 640;
pub const CHART_HEIGHT: u32 = 540;

const CENTER_X: f64 = 320.0;
const CENTER_Y: f64 = 270.0;
const RADIUS: f64 = 180.0;
const OUTLINE: f64 = 3.0;
const LABEL_RADIUS: f64 = RADIUS * 0.62;

pub const GREEN: Rgb<u8> = Rgb([46, 204, 113]);
pub const AMBER: Rgb<u8> = Rgb([243, 156, 18]);
pub const RED: Rgb<u8> = Rgb([231, 76, 60]);
const MUTED: Rgb<u8> = Rgb([128, 128, 128]);

/// One wedge of the status pie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub count: u32,
    pub fraction: f64,
    pub color: Rgb<u8>,
}

/// Green, amber and red wedges sized against their combined count. `None`
/// when all three are zero.
pub fn chart_slices(input: &ReviewInput) -> Option<[ChartSlice; 3]> {
    let sum = input.status_sum();
    if sum == 0 {
        return None;
    }

    let sum = sum as f64;
    let slice = |label: &'static str, count: u32, color: Rgb<u8>| ChartSlice {
        label,
        count,
        fraction: f64::from(count) / sum,
        color,
    };

    Some([
        slice("Green (80-100%)", input.green, GREEN),
        slice("Amber (60-79%)", input.amber, AMBER),
        slice("Red (0-59%)", input.red, RED),
    ])
}

/// Pie chart on a dark canvas. Degenerate input yields an empty outlined
/// circle labelled "NO DATA".
pub fn render_pie_chart(input: &ReviewInput) -> RgbImage {
    let mut image = RgbImage::from_pixel(CHART_WIDTH, CHART_HEIGHT, BACKGROUND);
    let title = format!("Project Status - {}", input.pillar.label());
    draw_text_centered(&mut image, CENTER_X as i64, 24, &title, 2, FOREGROUND);

    match chart_slices(input) {
        Some(slices) => {
            fill_wedges(&mut image, &slices);
            label_wedges(&mut image, &slices);
            draw_legend(&mut image, &slices);
        }
        None => {
            draw_ring(&mut image);
            draw_text_centered(
                &mut image,
                CENTER_X as i64,
                CENTER_Y as i64 - 8,
                "NO DATA",
                2,
                MUTED,
            );
        }
    }

    image
}

/// Angle in `[0, TAU)` measured clockwise from twelve o'clock.
fn clockwise_angle(dx: f64, dy: f64) -> f64 {
    let angle = dx.atan2(-dy);
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

fn pie_bounds() -> (u32, u32, u32, u32) {
    let left = (CENTER_X - RADIUS).floor().max(0.0) as u32;
    let top = (CENTER_Y - RADIUS).floor().max(0.0) as u32;
    let right = ((CENTER_X + RADIUS).ceil() as u32).min(CHART_WIDTH);
    let bottom = ((CENTER_Y + RADIUS).ceil() as u32).min(CHART_HEIGHT);
    (left, top, right, bottom)
}

fn fill_wedges(image: &mut RgbImage, slices: &[ChartSlice; 3]) {
    let (left, top, right, bottom) = pie_bounds();
    let fallback = slices
        .iter()
        .rev()
        .find(|slice| slice.fraction > 0.0)
        .map_or(MUTED, |slice| slice.color);

    for y in top..bottom {
        for x in left..right {
            let dx = f64::from(x) + 0.5 - CENTER_X;
            let dy = f64::from(y) + 0.5 - CENTER_Y;
            if dx * dx + dy * dy > RADIUS * RADIUS {
                continue;
            }

            let position = clockwise_angle(dx, dy) / TAU;
            let mut end = 0.0;
            let mut color = fallback;
            for slice in slices {
                end += slice.fraction;
                if slice.fraction > 0.0 && position < end {
                    color = slice.color;
                    break;
                }
            }
            image.put_pixel(x, y, color);
        }
    }
}

fn label_wedges(image: &mut RgbImage, slices: &[ChartSlice; 3]) {
    let mut start = 0.0;
    for slice in slices {
        let middle = (start + slice.fraction / 2.0) * TAU;
        start += slice.fraction;
        if slice.count == 0 {
            continue;
        }

        let x = CENTER_X + LABEL_RADIUS * middle.sin();
        let y = CENTER_Y - LABEL_RADIUS * middle.cos();
        draw_text_centered(
            image,
            x.round() as i64,
            y.round() as i64 - 8,
            &format_percent(slice.fraction),
            2,
            FOREGROUND,
        );
    }
}

fn draw_legend(image: &mut RgbImage, slices: &[ChartSlice; 3]) {
    let y = i64::from(CHART_HEIGHT) - 40;
    let column = i64::from(CHART_WIDTH) / 3;

    for (index, slice) in slices.iter().enumerate() {
        let x = 24 + index as i64 * column;
        fill_rect(image, x, y, 14, 14, slice.color);
        draw_text(image, x + 22, y + 3, slice.label, 1, FOREGROUND);
    }
}

fn draw_ring(image: &mut RgbImage) {
    let (left, top, right, bottom) = pie_bounds();
    let inner = (RADIUS - OUTLINE) * (RADIUS - OUTLINE);

    for y in top..bottom {
        for x in left..right {
            let dx = f64::from(x) + 0.5 - CENTER_X;
            let dy = f64::from(y) + 0.5 - CENTER_Y;
            let distance = dx * dx + dy * dy;
            if distance <= RADIUS * RADIUS && distance >= inner {
                image.put_pixel(x, y, MUTED);
            }
        }
    }
}

use std::f64::consts::{FRAC_PI_2, TAU};

use web_sys::CanvasRenderingContext2d;

use super::clear_frame;

const AXIS_TEXT: &str = "#5c6168";
const LABEL_FONT: &str = "11px sans-serif";

pub struct Slice<'a> {
    pub label: &'a str,
    pub value: f64,
    pub color: &'a str,
}

/// Donut chart. Slices with non-positive values are skipped; an all-zero
/// input draws nothing but the background.
pub fn draw_donut_chart(ctx: &CanvasRenderingContext2d, width: f64, height: f64, slices: &[Slice<'_>]) {
    clear_frame(ctx, width, height);

    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = (width.min(height) / 2.0 - 26.0).max(10.0);
    let inner = outer * 0.5;

    let mut angle = -FRAC_PI_2;
    for slice in slices {
        let value = slice.value.max(0.0);
        if value <= 0.0 {
            continue;
        }
        let sweep = value / total * TAU;

        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, angle, angle + sweep);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, angle + sweep, angle, true);
        ctx.close_path();
        ctx.set_fill_style_str(slice.color);
        ctx.fill();

        let mid = angle + sweep / 2.0;
        let lx = cx + mid.cos() * (outer + 12.0);
        let ly = cy + mid.sin() * (outer + 12.0);
        ctx.set_fill_style_str(AXIS_TEXT);
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align(if mid.cos() < 0.0 { "right" } else { "left" });
        ctx.set_text_baseline("middle");
        let percent = (value / total * 100.0).round() as u32;
        let _ = ctx.fill_text(&format!("{} {percent}%", slice.label), lx, ly);

        angle += sweep;
    }
}

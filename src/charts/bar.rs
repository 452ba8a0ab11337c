use web_sys::CanvasRenderingContext2d;

use super::scale::{nice_ticks, LinearScale};
use super::{clear_frame, draw_x_labels, draw_y_grid, draw_y_labels, plot_area, AxisSide};

const MAX_BAR_WIDTH: f64 = 20.0;

/// Vertical bar chart anchored at zero. Empty input draws an empty frame.
pub fn draw_bar_chart(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    labels: &[String],
    values: &[f64],
    color: &str,
) {
    clear_frame(ctx, width, height);
    let area = plot_area(width, height, false);

    let hi = values.iter().copied().fold(0.0f64, f64::max).max(1.0);
    let ticks = nice_ticks(0.0, hi, 4);
    let d1 = ticks.last().copied().unwrap_or(hi).max(hi);
    let scale = LinearScale::new((0.0, d1), (area.bottom, area.top));

    draw_y_grid(ctx, area, &ticks, &scale);
    draw_y_labels(ctx, area, &ticks, &scale, AxisSide::Left);

    if values.is_empty() {
        return;
    }

    let slot = area.width() / values.len() as f64;
    let bar_width = (slot * 0.6).min(MAX_BAR_WIDTH).max(1.0);
    ctx.set_fill_style_str(color);
    for (index, &value) in values.iter().enumerate() {
        let x = area.left + slot * (index as f64 + 0.5) - bar_width / 2.0;
        let y = scale.map(value.max(0.0));
        ctx.fill_rect(x, y, bar_width, (area.bottom - y).max(0.0));
    }

    draw_x_labels(ctx, area, labels, |index| {
        area.left + slot * (index as f64 + 0.5)
    });
}

use web_sys::CanvasRenderingContext2d;

use super::scale::{extent, nice_ticks, LinearScale};
use super::{clear_frame, draw_x_labels, draw_y_grid, draw_y_labels, plot_area, AxisSide, PlotArea};

pub struct Series<'a> {
    pub points: &'a [f64],
    pub color: &'a str,
}

/// Line chart with an optional second series on its own right-hand axis.
/// Empty series produce an empty gridded frame rather than an error.
pub fn draw_line_chart(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    labels: &[String],
    primary: &Series<'_>,
    secondary: Option<&Series<'_>>,
) {
    clear_frame(ctx, width, height);
    let area = plot_area(width, height, secondary.is_some());

    let (lo, hi) = extent(primary.points.iter().copied()).unwrap_or((0.0, 1.0));
    let ticks = nice_ticks(lo, hi, 4);
    let d0 = ticks.first().copied().unwrap_or(lo).min(lo);
    let d1 = ticks.last().copied().unwrap_or(hi).max(hi);
    let scale = LinearScale::new((d0, d1), (area.bottom, area.top));

    draw_y_grid(ctx, area, &ticks, &scale);
    draw_y_labels(ctx, area, &ticks, &scale, AxisSide::Left);

    if let Some(series) = secondary {
        let (lo, hi) = extent(series.points.iter().copied()).unwrap_or((0.0, 1.0));
        let ticks = nice_ticks(lo, hi, 4);
        let d0 = ticks.first().copied().unwrap_or(lo).min(lo);
        let d1 = ticks.last().copied().unwrap_or(hi).max(hi);
        let scale = LinearScale::new((d0, d1), (area.bottom, area.top));
        draw_y_labels(ctx, area, &ticks, &scale, AxisSide::Right);
        draw_series(ctx, area, series, &scale);
    }

    draw_series(ctx, area, primary, &scale);
    draw_x_labels(ctx, area, labels, |index| area.x_at(index, labels.len()));
}

fn draw_series(ctx: &CanvasRenderingContext2d, area: PlotArea, series: &Series<'_>, scale: &LinearScale) {
    let points = series.points;
    if points.is_empty() {
        return;
    }

    ctx.set_stroke_style_str(series.color);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (index, &value) in points.iter().enumerate() {
        let x = area.x_at(index, points.len());
        let y = scale.map(value);
        if index == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style_str(series.color);
    for (index, &value) in points.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(
            area.x_at(index, points.len()),
            scale.map(value),
            2.5,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
}

pub mod bar;
pub mod line;
pub mod pie;
pub mod scale;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use self::scale::{tick_label, LinearScale};

// Series palette carried over from the product's design.
pub const BLUE: &str = "#5686C4";
pub const PURPLE: &str = "#826BC6";
pub const GREEN: &str = "#3EB489";
pub const INDIGO: &str = "#6366f1";
pub const POSE_UP: &str = "#3b82f6";
pub const POSE_FRONT: &str = "#10b981";
pub const POSE_DOWN: &str = "#ef4444";

const BG: &str = "#ffffff";
const GRID_LINE: &str = "#d9dee7";
const AXIS_TEXT: &str = "#8a8f98";
const FONT: &str = "10px sans-serif";

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()?
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// X position of point `index` out of `count` evenly spread points.
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width() / 2.0;
        }
        self.left + self.width() * index as f64 / (count - 1) as f64
    }
}

pub(crate) fn plot_area(width: f64, height: f64, dual_axis: bool) -> PlotArea {
    PlotArea {
        left: 38.0,
        right: width - if dual_axis { 38.0 } else { 12.0 },
        top: 10.0,
        bottom: height - 22.0,
    }
}

pub(crate) fn clear_frame(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style_str(BG);
    ctx.fill_rect(0.0, 0.0, width, height);
}

fn set_dash(ctx: &CanvasRenderingContext2d, on: f64, off: f64) {
    let dash = js_sys::Array::of2(&JsValue::from_f64(on), &JsValue::from_f64(off));
    let _ = ctx.set_line_dash(&dash.into());
}

fn clear_dash(ctx: &CanvasRenderingContext2d) {
    let _ = ctx.set_line_dash(&js_sys::Array::new().into());
}

pub(crate) fn draw_y_grid(
    ctx: &CanvasRenderingContext2d,
    area: PlotArea,
    ticks: &[f64],
    scale: &LinearScale,
) {
    ctx.set_stroke_style_str(GRID_LINE);
    ctx.set_line_width(1.0);
    set_dash(ctx, 3.0, 3.0);
    for &tick in ticks {
        let y = scale.map(tick);
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.right, y);
        ctx.stroke();
    }
    clear_dash(ctx);
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum AxisSide {
    Left,
    Right,
}

pub(crate) fn draw_y_labels(
    ctx: &CanvasRenderingContext2d,
    area: PlotArea,
    ticks: &[f64],
    scale: &LinearScale,
    side: AxisSide,
) {
    ctx.set_fill_style_str(AXIS_TEXT);
    ctx.set_font(FONT);
    ctx.set_text_baseline("middle");
    let x = match side {
        AxisSide::Left => {
            ctx.set_text_align("right");
            area.left - 4.0
        }
        AxisSide::Right => {
            ctx.set_text_align("left");
            area.right + 4.0
        }
    };
    for &tick in ticks {
        let _ = ctx.fill_text(&tick_label(tick), x, scale.map(tick));
    }
}

/// Evenly spread x labels, thinned so at most ~8 are drawn.
pub(crate) fn draw_x_labels<F>(
    ctx: &CanvasRenderingContext2d,
    area: PlotArea,
    labels: &[String],
    position: F,
) where
    F: Fn(usize) -> f64,
{
    if labels.is_empty() {
        return;
    }
    let step = (labels.len() + 7) / 8;
    ctx.set_fill_style_str(AXIS_TEXT);
    ctx.set_font(FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    for (index, label) in labels.iter().enumerate().step_by(step.max(1)) {
        let _ = ctx.fill_text(label, position(index), area.bottom + 6.0);
    }
}

//! Cairo-based rendering functions for shapes and canvas layers.

use super::color::Color;
use super::font::FontDescriptor;
use super::pixels::BackgroundImage;
use super::shape::{DASH_PATTERN, SPRAY_DOT_COUNT, Shape, ShapeKind};
use crate::util::{Point, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Errors raised while creating or reading back render surfaces.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface data unavailable: {0}")]
    SurfaceData(#[from] cairo::BorrowError),

    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

/// Fills the whole surface with the canvas background color.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    color.apply(ctx);
    let _ = ctx.paint(); // A failed paint leaves the surface transparent
}

/// Draws `image` stretched to cover a `width` x `height` surface.
pub fn render_background_image(
    ctx: &cairo::Context,
    image: &BackgroundImage,
    width: i32,
    height: i32,
) {
    if image.width() <= 0 || image.height() <= 0 || width <= 0 || height <= 0 {
        return;
    }

    ctx.save().ok();
    ctx.scale(
        width as f64 / image.width() as f64,
        height as f64 / image.height() as f64,
    );
    if ctx.set_source_surface(image.surface(), 0.0, 0.0).is_ok() {
        let _ = ctx.paint();
    }
    ctx.restore().ok();
}

/// Draws 1px grid lines every `spacing` pixels across the surface.
pub fn render_grid(ctx: &cairo::Context, spacing: u32, color: Color, width: i32, height: i32) {
    if spacing == 0 {
        return;
    }
    let step = spacing as usize;

    ctx.save().ok();
    color.apply(ctx);
    ctx.set_line_width(1.0);
    ctx.set_line_cap(cairo::LineCap::Butt);

    // Offset by half a pixel so 1px lines land on pixel centers
    for x in (0..width.max(0)).step_by(step) {
        ctx.move_to(x as f64 + 0.5, 0.0);
        ctx.line_to(x as f64 + 0.5, height as f64);
    }
    for y in (0..height.max(0)).step_by(step) {
        ctx.move_to(0.0, y as f64 + 0.5);
        ctx.line_to(width as f64, y as f64 + 0.5);
    }
    let _ = ctx.stroke();
    ctx.restore().ok();
}

/// Renders all shapes in paint order (first shape = bottom layer).
///
/// `background` is the canvas color, needed by eraser patches.
pub fn render_shapes<'a>(
    ctx: &cairo::Context,
    shapes: impl IntoIterator<Item = &'a Shape>,
    background: Color,
) {
    for shape in shapes {
        shape.render(ctx, background);
    }
}

/// Renders a single shape.
///
/// Context state is saved and restored around the shape so dash patterns, caps
/// and sources never leak into the next shape.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape, background: Color) {
    ctx.save().ok();

    let width = shape.effective_line_width();
    match &shape.kind {
        ShapeKind::Freehand
        | ShapeKind::ThinStroke
        | ShapeKind::ThickStroke
        | ShapeKind::Line => {
            render_line(ctx, shape.start, shape.end, shape.color, width);
        }
        ShapeKind::DashedStroke => {
            render_dashed_line(ctx, shape.start, shape.end, shape.color, width);
        }
        ShapeKind::SprayDab { seed } => {
            render_spray(ctx, shape.start, shape.stroke_width, shape.color, *seed);
        }
        ShapeKind::Highlighter => {
            render_filled_box(ctx, Rect::from_corners(shape.start, shape.end), shape.color);
        }
        ShapeKind::Eraser => {
            let side = shape.stroke_width;
            render_filled_box(
                ctx,
                Rect::new(shape.start.x, shape.start.y, side, side),
                background,
            );
        }
        ShapeKind::Rectangle => {
            render_rect(ctx, shape.start, shape.end, shape.color, width);
        }
        ShapeKind::Circle => {
            render_circle(ctx, shape.start, shape.end, shape.color, width);
        }
        ShapeKind::Text {
            text,
            font,
            font_size,
        } => {
            render_text(ctx, shape.start, text, shape.color, *font_size, font);
        }
    }

    ctx.restore().ok();
}

/// Render a straight segment with round caps
fn render_line(ctx: &cairo::Context, from: Point, to: Point, color: Color, thick: f64) {
    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(from.x as f64, from.y as f64);
    ctx.line_to(to.x as f64, to.y as f64);
    let _ = ctx.stroke();
}

/// Render a segment with a 4-on/4-off dash pattern
fn render_dashed_line(ctx: &cairo::Context, from: Point, to: Point, color: Color, thick: f64) {
    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Butt);
    ctx.set_line_join(cairo::LineJoin::Miter);
    ctx.set_dash(&DASH_PATTERN, 0.0);

    ctx.move_to(from.x as f64, from.y as f64);
    ctx.line_to(to.x as f64, to.y as f64);
    let _ = ctx.stroke();
}

/// Render single-pixel dots scattered in a `size`-wide square centered on `center`.
///
/// The pattern comes from `seed`, so the same dab always lands on the same pixels.
fn render_spray(ctx: &cairo::Context, center: Point, size: u32, color: Color, seed: u64) {
    let size = i32::try_from(size.max(1)).unwrap_or(i32::MAX);
    let mut rng = StdRng::seed_from_u64(seed);

    color.apply(ctx);
    for _ in 0..SPRAY_DOT_COUNT {
        let dx = rng.random_range(0..size) - size / 2;
        let dy = rng.random_range(0..size) - size / 2;
        ctx.rectangle(
            center.x as f64 + dx as f64,
            center.y as f64 + dy as f64,
            1.0,
            1.0,
        );
    }
    let _ = ctx.fill();
}

/// Fill an axis-aligned box; degenerate boxes draw nothing
fn render_filled_box(ctx: &cairo::Context, rect: Option<Rect>, color: Color) {
    let Some(rect) = rect else {
        return;
    };
    color.apply(ctx);
    ctx.rectangle(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    );
    let _ = ctx.fill();
}

/// Render a rectangle outline spanning two corners
fn render_rect(ctx: &cairo::Context, a: Point, b: Point, color: Color, thick: f64) {
    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    let x = a.x.min(b.x) as f64;
    let y = a.y.min(b.y) as f64;
    let w = (b.x as f64 - a.x as f64).abs();
    let h = (b.y as f64 - a.y as f64).abs();

    ctx.rectangle(x, y, w, h);
    let _ = ctx.stroke();
}

/// Render a circle inscribed in the square of side max(|dx|, |dy|) at the min corner
fn render_circle(ctx: &cairo::Context, a: Point, b: Point, color: Color, thick: f64) {
    let diameter = (b.x as f64 - a.x as f64)
        .abs()
        .max((b.y as f64 - a.y as f64).abs());
    if diameter == 0.0 {
        return;
    }

    let radius = diameter / 2.0;
    let cx = a.x.min(b.x) as f64 + radius;
    let cy = a.y.min(b.y) as f64 + radius;

    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.new_sub_path();
    ctx.arc(cx, cy, radius, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.stroke();
}

/// Renders a text label using Pango.
///
/// `anchor` is the baseline origin of the first line. Newlines in `text` start
/// new lines below it.
pub fn render_text(
    ctx: &cairo::Context,
    anchor: Point,
    text: &str,
    color: Color,
    size: f64,
    font_descriptor: &FontDescriptor,
) {
    if text.is_empty() {
        return;
    }

    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font_descriptor.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    // Pango positions layouts by their top-left corner
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(anchor.x as f64, anchor.y as f64 - baseline);

    color.apply(ctx);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

use crate::color::Color;
use crate::renderer::FrameBuffer;
use crate::shape::{Line, LineCap, Point, Shape};

/// Shape rasterizer.
///
/// All coordinates are view-space: origin at the frame center, y down, one
/// layout unit per pixel. Edges get a one-pixel coverage feather so tween
/// motion stays smooth at this renderer's scale.
pub struct Raster;

/// Coverage of a pixel whose signed distance to the shape edge is `d`
fn coverage(d: f32) -> f32 {
    (0.5 - d).clamp(0.0, 1.0)
}

impl Raster {
    /// Paint a whole scene view into the buffer
    pub fn draw_view(buffer: &mut FrameBuffer, shapes: &[Shape]) {
        for shape in shapes {
            Self::draw_shape(buffer, shape);
        }
    }

    /// Paint a single shape
    pub fn draw_shape(buffer: &mut FrameBuffer, shape: &Shape) {
        match shape {
            Shape::Circle(circle) => {
                Self::fill_ellipse(
                    buffer,
                    circle.x.get(),
                    circle.y.get(),
                    circle.width.get() / 2.0,
                    circle.height.get() / 2.0,
                    circle.fill.get(),
                );
            }
            Shape::Rect(rect) => {
                Self::fill_rounded_rect(
                    buffer,
                    rect.x.get(),
                    rect.y.get(),
                    rect.width.get(),
                    rect.height.get(),
                    rect.radius.get(),
                    rect.fill.get(),
                );
            }
            Shape::Line(line) => {
                Self::stroke_segment(buffer, line);
            }
            Shape::DashBar(bar) => {
                let (x, y) = (bar.x.get(), bar.y.get());
                let thickness = bar.thickness();
                let albedo = bar.albedo.get();

                Self::fill_rounded_rect(
                    buffer,
                    x,
                    y,
                    bar.width.get(),
                    thickness,
                    thickness,
                    albedo,
                );

                // Dash segments are derived per evaluation, drawn as
                // ephemeral lines in bar-local coordinates
                for dash in bar.segments() {
                    Self::stroke_segment(
                        buffer,
                        &Line {
                            from: Point::new(x + dash.from.x, y + dash.from.y),
                            to: Point::new(x + dash.to.x, y + dash.to.y),
                            stroke: albedo,
                            line_width: thickness,
                            cap: LineCap::Round,
                        },
                    );
                }
            }
        }
    }

    /// Fill an axis-aligned ellipse centered at (cx, cy)
    pub fn fill_ellipse(
        buffer: &mut FrameBuffer,
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        color: Color,
    ) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }

        let feather = rx.min(ry);
        Self::scan(buffer, cx - rx, cy - ry, cx + rx, cy + ry, |vx, vy| {
            let nx = (vx - cx) / rx;
            let ny = (vy - cy) / ry;
            ((nx * nx + ny * ny).sqrt() - 1.0) * feather
        }, color);
    }

    /// Fill a rounded rectangle centered at (cx, cy); the radius is clamped
    /// to half the smaller side, so radius >= height/2 produces pill ends
    pub fn fill_rounded_rect(
        buffer: &mut FrameBuffer,
        cx: f32,
        cy: f32,
        width: f32,
        height: f32,
        radius: f32,
        color: Color,
    ) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let hw = width / 2.0;
        let hh = height / 2.0;
        let r = radius.clamp(0.0, hw.min(hh));

        Self::scan(buffer, cx - hw, cy - hh, cx + hw, cy + hh, |vx, vy| {
            let qx = (vx - cx).abs() - (hw - r);
            let qy = (vy - cy).abs() - (hh - r);
            let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
            outside + qx.max(qy).min(0.0) - r
        }, color);
    }

    /// Stroke a thick line segment
    pub fn stroke_segment(buffer: &mut FrameBuffer, line: &Line) {
        let hw = line.line_width / 2.0;
        if hw <= 0.0 {
            return;
        }

        let (a, b) = (line.from, line.to);
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let len = (dx * dx + dy * dy).sqrt();
        let cap = line.cap;

        let min_x = a.x.min(b.x) - hw;
        let min_y = a.y.min(b.y) - hw;
        let max_x = a.x.max(b.x) + hw;
        let max_y = a.y.max(b.y) + hw;

        Self::scan(buffer, min_x, min_y, max_x, max_y, |vx, vy| {
            let px = vx - a.x;
            let py = vy - a.y;

            if len <= f32::EPSILON {
                // Degenerate segment: a round cap renders a dot
                let d = (px * px + py * py).sqrt();
                return match cap {
                    LineCap::Round => d - hw,
                    LineCap::Butt => f32::INFINITY,
                };
            }

            let along = (px * dx + py * dy) / len;
            match cap {
                LineCap::Round => {
                    let t = (along / len).clamp(0.0, 1.0);
                    let nx = px - dx * t;
                    let ny = py - dy * t;
                    (nx * nx + ny * ny).sqrt() - hw
                }
                LineCap::Butt => {
                    let perp = (px * -dy + py * dx) / len;
                    let side = perp.abs() - hw;
                    let end = (-along).max(along - len);
                    side.max(end)
                }
            }
        }, line.stroke);
    }

    /// Iterate pixels of a view-space bounding box, blending `color` by the
    /// coverage derived from the signed distance `sdf` returns
    fn scan(
        buffer: &mut FrameBuffer,
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
        sdf: impl Fn(f32, f32) -> f32,
        color: Color,
    ) {
        let (buf_w, buf_h) = buffer.dimensions();
        let half_w = buf_w as f32 / 2.0;
        let half_h = buf_h as f32 / 2.0;

        let x0 = ((min_x + half_w - 1.0).floor().max(0.0)) as u32;
        let y0 = ((min_y + half_h - 1.0).floor().max(0.0)) as u32;
        let x1 = ((max_x + half_w + 1.0).ceil().min(buf_w as f32)) as u32;
        let y1 = ((max_y + half_h + 1.0).ceil().min(buf_h as f32)) as u32;

        for py in y0..y1 {
            for px in x0..x1 {
                // Sample at the pixel center
                let vx = px as f32 + 0.5 - half_w;
                let vy = py as f32 + 0.5 - half_h;
                let c = coverage(sdf(vx, vy));
                if c > 0.0 {
                    buffer.blend_pixel(px, py, color, c);
                }
            }
        }
    }
}

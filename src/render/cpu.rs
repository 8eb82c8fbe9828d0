use kurbo::Shape as _;

use crate::animate::animator::CameraState;
use crate::foundation::core::{BezPath, Canvas, Point};
use crate::foundation::error::{BrollError, BrollResult};
use crate::render::display_list::{DrawItem, Geom, build_display_list};
use crate::render::frame::FrameRGBA;
use crate::render::grade::{apply_grade, force_opaque};
use crate::scene::model::Scene;

const PATH_TOLERANCE: f64 = 0.1;

/// CPU rasterizer powered by `vello_cpu`.
///
/// The render context and target pixmap are kept between frames and only reallocated when the
/// canvas size changes.
#[derive(Default)]
pub struct CpuRenderer {
    ctx: Option<vello_cpu::RenderContext>,
    pixmap: Option<vello_cpu::Pixmap>,
}

impl std::fmt::Debug for CpuRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuRenderer")
            .field("surface", &self.surface_size())
            .finish()
    }
}

impl CpuRenderer {
    /// Create a renderer with no surface allocated yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the currently allocated surface, if any.
    pub fn surface_size(&self) -> Option<(u32, u32)> {
        self.ctx
            .as_ref()
            .map(|c| (u32::from(c.width()), u32::from(c.height())))
    }

    /// Allocate the surface for `canvas` ahead of the next render, replacing any other size.
    pub fn resize(&mut self, canvas: Canvas) -> BrollResult<()> {
        let (w, h) = surface_dims(canvas)?;
        if self.surface_size() != Some((canvas.width, canvas.height)) {
            self.ctx = Some(vello_cpu::RenderContext::new(w, h));
            self.pixmap = Some(vello_cpu::Pixmap::new(w, h));
        }
        Ok(())
    }

    /// Drop the render context and target surface.
    pub fn release(&mut self) {
        self.ctx = None;
        self.pixmap = None;
    }

    /// Rasterize `scene` as seen from `camera` onto a `canvas`-sized frame.
    #[tracing::instrument(level = "trace", skip_all, fields(w = canvas.width, h = canvas.height))]
    pub fn render(
        &mut self,
        scene: &Scene,
        camera: &CameraState,
        canvas: Canvas,
    ) -> BrollResult<FrameRGBA> {
        let (w, h) = surface_dims(canvas)?;

        let items = build_display_list(scene, camera, canvas);

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => vello_cpu::RenderContext::new(w, h),
        };
        let mut pixmap = match self.pixmap.take() {
            Some(p) if p.width() == w && p.height() == h => p,
            _ => vello_cpu::Pixmap::new(w, h),
        };

        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        let fog = scene.fog.color;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(fog.r, fog.g, fog.b, 255));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));
        for item in &items {
            fill_item(&mut ctx, item);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        force_opaque(pixmap.data_as_u8_slice_mut(), canvas.width);
        apply_grade(pixmap.data_as_u8_slice_mut(), canvas.width, scene.grade);
        let data = pixmap.data_as_u8_slice().to_vec();

        self.ctx = Some(ctx);
        self.pixmap = Some(pixmap);

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data,
            premultiplied: true,
        })
    }
}

fn surface_dims(canvas: Canvas) -> BrollResult<(u16, u16)> {
    canvas.validate()?;
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| BrollError::render("canvas width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| BrollError::render("canvas height exceeds u16"))?;
    Ok((w, h))
}

fn fill_item(ctx: &mut vello_cpu::RenderContext, item: &DrawItem) {
    let [r, g, b, a] = item.rgba;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    match &item.geom {
        Geom::Polygon(pts) => ctx.fill_path(&bezpath_to_cpu(&polygon_path(pts))),
        Geom::Disc { center, radius } => {
            ctx.fill_path(&bezpath_to_cpu(&disc_path(*center, *radius)));
        }
        Geom::Capsule { a, ra, b, rb } => {
            // Filled as separate pieces so overlapping windings cannot cancel out.
            for path in capsule_paths(*a, *ra, *b, *rb) {
                ctx.fill_path(&bezpath_to_cpu(&path));
            }
        }
    }
}

pub(crate) fn polygon_path(pts: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    let mut it = pts.iter();
    if let Some(first) = it.next() {
        p.move_to(*first);
        for q in it {
            p.line_to(*q);
        }
        p.close_path();
    }
    p
}

fn disc_path(center: Point, radius: f64) -> BezPath {
    kurbo::Circle::new(center, radius).to_path(PATH_TOLERANCE)
}

/// End caps plus the tangent quad joining them.
pub(crate) fn capsule_paths(a: Point, ra: f64, b: Point, rb: f64) -> Vec<BezPath> {
    let d = b - a;
    let len = d.hypot();
    if len < 1e-3 {
        return vec![disc_path(a, ra.max(rb))];
    }
    let perp = kurbo::Vec2::new(-d.y / len, d.x / len);
    let quad = polygon_path(&[a + perp * ra, b + perp * rb, b - perp * rb, a - perp * ra]);
    vec![disc_path(a, ra), quad, disc_path(b, rb)]
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

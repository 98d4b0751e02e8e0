use std::sync::Arc;

use kurbo::Shape as _;

use crate::foundation::core::{Affine, BezPath, FrameRGBA, Point, Rect, Rgba8};
use crate::foundation::error::{TraceError, TraceResult};
use crate::render::composite;

/// Curve flattening tolerance for circles, in logical units.
const SHAPE_TOLERANCE: f64 = 0.1;

/// One raster layer: a premultiplied RGBA8 pixmap plus the logical-to-device scale.
///
/// Draw calls take logical coordinates; the `scale` (device pixel ratio) is applied at
/// rasterization time so callers never deal with device pixels.
pub struct Surface {
    width: u16,
    height: u16,
    scale: f64,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Allocate a transparent surface of `width x height` device pixels.
    pub fn new(width: u32, height: u32, scale: f64) -> TraceResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| TraceError::surface("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| TraceError::surface("surface height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(TraceError::surface("surface must be at least 1x1"));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(TraceError::surface("surface scale must be finite and > 0"));
        }
        Ok(Self {
            width: width_u16,
            height: height_u16,
            scale,
            pixmap: vello_cpu::Pixmap::new(width_u16, height_u16),
        })
    }

    /// Width in device pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Height in device pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Device pixels per logical unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        composite::fill(self.pixmap.data_as_u8_slice_mut(), [0, 0, 0, 0]);
    }

    /// Flood every pixel with `color`.
    pub fn fill(&mut self, color: Rgba8) {
        composite::fill(self.pixmap.data_as_u8_slice_mut(), color.premul());
    }

    /// Whether every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data().chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Alpha at a logical position, `None` outside the surface.
    pub fn alpha_at(&self, p: Point) -> Option<u8> {
        let x = (p.x * self.scale).floor();
        let y = (p.y * self.scale).floor();
        if x < 0.0 || y < 0.0 || x >= f64::from(self.width) || y >= f64::from(self.height) {
            return None;
        }
        let idx = ((y as usize) * usize::from(self.width) + (x as usize)) * 4 + 3;
        self.data().get(idx).copied()
    }

    /// Stroke `path` with round joins and caps.
    pub fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) -> TraceResult<()> {
        let cpu_path = bezpath_to_cpu(path);
        let stroke = vello_cpu::kurbo::Stroke::new(width)
            .with_join(vello_cpu::kurbo::Join::Round)
            .with_caps(vello_cpu::kurbo::Cap::Round);
        self.render_over(|ctx| {
            ctx.set_paint(color.to_cpu());
            ctx.set_stroke(stroke);
            ctx.stroke_path(&cpu_path);
        })
    }

    /// Fill a circle.
    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) -> TraceResult<()> {
        if radius <= 0.0 {
            return Ok(());
        }
        let path = kurbo::Circle::new(center, radius).to_path(SHAPE_TOLERANCE);
        let cpu_path = bezpath_to_cpu(&path);
        self.render_over(|ctx| {
            ctx.set_paint(color.to_cpu());
            ctx.fill_path(&cpu_path);
        })
    }

    /// Composite `src` over this surface pixel-for-pixel.
    pub fn over(&mut self, src: &Surface) -> TraceResult<()> {
        if src.width != self.width || src.height != self.height {
            return Err(TraceError::surface(format!(
                "over: size mismatch {}x{} onto {}x{}",
                src.width, src.height, self.width, self.height
            )));
        }
        composite::over_in_place(self.pixmap.data_as_u8_slice_mut(), src.data())
    }

    /// Paint a surface of any resolution over this one, stretched to cover it.
    pub fn over_scaled(&mut self, src: Surface) -> TraceResult<()> {
        if src.width == self.width && src.height == self.height {
            return self.over(&src);
        }
        let (src_w, src_h) = (f64::from(src.width), f64::from(src.height));
        let sx = f64::from(self.width) / src_w;
        let sy = f64::from(self.height) / src_h;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(src.pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.render_over(|ctx| {
            ctx.set_transform(affine_to_cpu(Affine::scale_non_uniform(sx, sy)));
            ctx.set_paint(paint);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, src_w, src_h));
        })
    }

    /// Copy of the pixels as a frame.
    pub fn to_frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.width(),
            height: self.height(),
            data: self.data().to_vec(),
            premultiplied: true,
        }
    }

    /// Logical bounds of the surface.
    pub fn logical_bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.width) / self.scale,
            f64::from(self.height) / self.scale,
        )
    }

    // Rasterizes into a scratch pixmap and composites it over the existing pixels, so draws
    // accumulate regardless of how the rasterizer treats the destination.
    fn render_over(&mut self, f: impl FnOnce(&mut vello_cpu::RenderContext)) -> TraceResult<()> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_transform(affine_to_cpu(Affine::scale(self.scale)));
        f(&mut ctx);
        ctx.flush();
        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut layer);
        composite::over_in_place(self.pixmap.data_as_u8_slice_mut(), layer.data_as_u8_slice())
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;

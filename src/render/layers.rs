use crate::config::validate_surface_geometry;
use crate::foundation::core::{BezPath, FrameRGBA, Point, Rgba8};
use crate::foundation::error::TraceResult;
use crate::render::surface::Surface;

/// The four stacked layers, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Brush and pointer indicator.
    Interface,
    /// The stroke being drawn right now.
    Scratch,
    /// Committed strokes.
    Drawing,
    /// Static crosshair guide.
    Grid,
}

impl LayerKind {
    /// All layers, topmost first.
    pub const TOP_DOWN: [LayerKind; 4] = [
        LayerKind::Interface,
        LayerKind::Scratch,
        LayerKind::Drawing,
        LayerKind::Grid,
    ];

    /// Stacking order; higher is closer to the viewer.
    pub fn z_index(self) -> u8 {
        match self {
            LayerKind::Interface => 40,
            LayerKind::Scratch => 30,
            LayerKind::Drawing => 20,
            LayerKind::Grid => 10,
        }
    }
}

/// Appearance of the guide crosshair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    /// Line color.
    pub color: Rgba8,
    /// Line width in logical units.
    pub width: f64,
}

/// Appearance of the brush/pointer indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorStyle {
    /// Brush disc color.
    pub brush_color: Rgba8,
    /// Raw pointer dot color.
    pub pointer_color: Rgba8,
    /// Raw pointer dot radius.
    pub pointer_radius: f64,
}

struct LayerSet {
    interface: Surface,
    scratch: Surface,
    drawing: Surface,
    grid: Surface,
}

impl LayerSet {
    fn get(&self, kind: LayerKind) -> &Surface {
        match kind {
            LayerKind::Interface => &self.interface,
            LayerKind::Scratch => &self.scratch,
            LayerKind::Drawing => &self.drawing,
            LayerKind::Grid => &self.grid,
        }
    }

    fn get_mut(&mut self, kind: LayerKind) -> &mut Surface {
        match kind {
            LayerKind::Interface => &mut self.interface,
            LayerKind::Scratch => &mut self.scratch,
            LayerKind::Drawing => &mut self.drawing,
            LayerKind::Grid => &mut self.grid,
        }
    }
}

/// Owns the layer surfaces and moves finished strokes from scratch into the drawing.
///
/// Starts without surfaces; every operation is a no-op (returning `false`) until the first
/// [`LayerCompositor::resize`] allocates them.
pub struct LayerCompositor {
    grid_style: GridStyle,
    css_size: f64,
    dpr: f64,
    layers: Option<LayerSet>,
}

impl LayerCompositor {
    /// Compositor with no surfaces yet.
    pub fn new(grid_style: GridStyle) -> Self {
        Self {
            grid_style,
            css_size: 0.0,
            dpr: 1.0,
            layers: None,
        }
    }

    /// Whether surfaces have been allocated.
    pub fn is_ready(&self) -> bool {
        self.layers.is_some()
    }

    /// Logical edge length of the square area.
    pub fn css_size(&self) -> f64 {
        self.css_size
    }

    /// Current device pixel ratio.
    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    /// Backing edge length in device pixels.
    pub fn pixel_size(&self) -> u32 {
        backing_pixels(self.css_size, self.dpr)
    }

    /// Borrow a layer, if allocated.
    pub fn layer(&self, kind: LayerKind) -> Option<&Surface> {
        self.layers.as_ref().map(|l| l.get(kind))
    }

    /// Mutably borrow a layer, if allocated.
    pub fn layer_mut(&mut self, kind: LayerKind) -> Option<&mut Surface> {
        self.layers.as_mut().map(|l| l.get_mut(kind))
    }

    /// (Re)allocate every layer at `css_size * dpr` pixels and redraw the guide.
    ///
    /// Committed ink is carried over, rescaled to the new backing resolution. Scratch and
    /// interface content is dropped.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, css_size: f64, dpr: f64) -> TraceResult<()> {
        validate_surface_geometry(css_size, dpr)?;
        let px = backing_pixels(css_size, dpr);

        let mut next = LayerSet {
            interface: Surface::new(px, px, dpr)?,
            scratch: Surface::new(px, px, dpr)?,
            drawing: Surface::new(px, px, dpr)?,
            grid: Surface::new(px, px, dpr)?,
        };
        if let Some(old) = self.layers.take()
            && !old.drawing.is_blank()
            && let Err(err) = next.drawing.over_scaled(old.drawing)
        {
            tracing::warn!(error = %err, "committed ink dropped on resize");
        }

        self.css_size = css_size;
        self.dpr = dpr;
        self.layers = Some(next);
        tracing::debug!(px, "layers allocated");
        self.draw_grid()?;
        Ok(())
    }

    /// Redraw the crosshair guide: one vertical and one horizontal line through the center.
    ///
    /// Idempotent; the grid layer is cleared first.
    pub fn draw_grid(&mut self) -> TraceResult<bool> {
        let size = self.css_size;
        let style = self.grid_style;
        let Some(grid) = self.layer_mut(LayerKind::Grid) else {
            return Ok(false);
        };
        grid.clear();
        let half = size / 2.0;

        let mut vertical = BezPath::new();
        vertical.move_to((half, 0.0));
        vertical.line_to((half, size));
        grid.stroke_path(&vertical, style.width, style.color)?;

        let mut horizontal = BezPath::new();
        horizontal.move_to((0.0, half));
        horizontal.line_to((size, half));
        grid.stroke_path(&horizontal, style.width, style.color)?;
        Ok(true)
    }

    /// Redraw the interface layer with the brush disc and the raw pointer dot.
    pub fn draw_interface(
        &mut self,
        brush: Point,
        brush_radius: f64,
        raw: Point,
        style: &CursorStyle,
    ) -> TraceResult<bool> {
        let Some(ui) = self.layer_mut(LayerKind::Interface) else {
            return Ok(false);
        };
        ui.clear();
        ui.fill_circle(brush, brush_radius, style.brush_color)?;
        ui.fill_circle(raw, style.pointer_radius, style.pointer_color)?;
        Ok(true)
    }

    /// Blank the interface layer.
    pub fn clear_interface(&mut self) -> bool {
        self.clear_layer(LayerKind::Interface)
    }

    /// Blank the scratch layer.
    pub fn clear_scratch(&mut self) -> bool {
        self.clear_layer(LayerKind::Scratch)
    }

    /// Copy scratch onto drawing, then clear scratch.
    ///
    /// Both layers share one backing resolution, so the copy is pixel-for-pixel.
    pub fn commit_scratch_to_drawing(&mut self) -> TraceResult<bool> {
        let Some(layers) = self.layers.as_mut() else {
            return Ok(false);
        };
        if !layers.scratch.is_blank() {
            layers.drawing.over(&layers.scratch)?;
        }
        layers.scratch.clear();
        Ok(true)
    }

    /// Clear scratch and drawing. The grid is left alone.
    pub fn clear_all(&mut self) -> bool {
        let Some(layers) = self.layers.as_mut() else {
            return false;
        };
        layers.scratch.clear();
        layers.drawing.clear();
        true
    }

    /// Composite the stack bottom-up over an optional background.
    pub fn flatten(
        &self,
        background: Option<Rgba8>,
        include_interface: bool,
    ) -> TraceResult<Option<FrameRGBA>> {
        let Some(layers) = self.layers.as_ref() else {
            return Ok(None);
        };
        let px = layers.grid.width();
        let mut out = Surface::new(px, px, self.dpr)?;
        if let Some(bg) = background {
            out.fill(bg);
        }
        for kind in LayerKind::TOP_DOWN.iter().rev() {
            if *kind == LayerKind::Interface && !include_interface {
                continue;
            }
            out.over(layers.get(*kind))?;
        }
        Ok(Some(out.to_frame()))
    }

    fn clear_layer(&mut self, kind: LayerKind) -> bool {
        match self.layer_mut(kind) {
            Some(s) => {
                s.clear();
                true
            }
            None => false,
        }
    }
}

fn backing_pixels(css_size: f64, dpr: f64) -> u32 {
    (css_size * dpr).round().max(0.0) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/render/layers.rs"]
mod tests;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{TraceError, TraceResult};

/// Tunables for a tracing board.
///
/// Loadable from JSON; missing fields fall back to [`BoardOpts::default`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardOpts {
    /// Edge length of the square drawing area in logical (CSS) units.
    pub css_size: f64,
    /// Backing pixels per logical unit.
    pub device_pixel_ratio: f64,
    /// Lazy brush trailing radius in logical units.
    pub brush_radius: f64,
    /// When false the brush tracks the pointer exactly.
    pub lazy_enabled: bool,
    /// Ink stroke width in logical units.
    pub stroke_width: f64,
    /// Ink color.
    pub ink: Rgba8,
    /// Guide crosshair color.
    pub grid_color: Rgba8,
    /// Guide crosshair line width in logical units.
    pub grid_width: f64,
    /// Draw the brush/pointer indicator on the interface layer.
    pub show_cursor: bool,
    /// Brush indicator color.
    pub cursor_color: Rgba8,
    /// Raw pointer dot color.
    pub pointer_color: Rgba8,
    /// Raw pointer dot radius in logical units.
    pub pointer_radius: f64,
}

impl Default for BoardOpts {
    fn default() -> Self {
        Self {
            css_size: 300.0,
            device_pixel_ratio: 1.0,
            brush_radius: 10.0,
            lazy_enabled: true,
            stroke_width: 14.0,
            ink: Rgba8::rgb(0x22, 0x22, 0x22),
            grid_color: Rgba8::rgb(0xF0, 0xF8, 0xFF),
            grid_width: 4.0,
            show_cursor: true,
            cursor_color: Rgba8::rgb(0x22, 0x22, 0x22),
            pointer_color: Rgba8::rgb(0xFF, 0x00, 0x00),
            pointer_radius: 2.0,
        }
    }
}

impl BoardOpts {
    /// Apply `KANJI_TRACE_*` environment overrides.
    ///
    /// Unparsable or non-positive values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_positive_f64("KANJI_TRACE_BRUSH_RADIUS") {
            self.brush_radius = v;
        }
        if let Some(v) = env_positive_f64("KANJI_TRACE_STROKE_WIDTH") {
            self.stroke_width = v;
        }
        if let Some(v) = env_positive_f64("KANJI_TRACE_DPR") {
            self.device_pixel_ratio = v;
        }
        self
    }

    /// Reject geometry the board cannot honor.
    pub fn validate(&self) -> TraceResult<()> {
        validate_surface_geometry(self.css_size, self.device_pixel_ratio)?;
        if !self.brush_radius.is_finite() || self.brush_radius < 0.0 {
            return Err(TraceError::validation("brush_radius must be finite and >= 0"));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(TraceError::validation("stroke_width must be finite and > 0"));
        }
        if !self.grid_width.is_finite() || self.grid_width <= 0.0 {
            return Err(TraceError::validation("grid_width must be finite and > 0"));
        }
        if !self.pointer_radius.is_finite() || self.pointer_radius < 0.0 {
            return Err(TraceError::validation(
                "pointer_radius must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_surface_geometry(css_size: f64, dpr: f64) -> TraceResult<()> {
    if !css_size.is_finite() || css_size <= 0.0 {
        return Err(TraceError::validation("css_size must be finite and > 0"));
    }
    if !dpr.is_finite() || dpr <= 0.0 {
        return Err(TraceError::validation(
            "device_pixel_ratio must be finite and > 0",
        ));
    }
    Ok(())
}

fn env_positive_f64(key: &str) -> Option<f64> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

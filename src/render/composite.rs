use crate::foundation::error::{TraceError, TraceResult};
use crate::foundation::math::mul_div255_u8;

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over for a single premultiplied pixel.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let inv = 255 - u16::from(sa);
            let keep = |d: u8| mul_div255_u8(u16::from(d), inv);
            [
                src[0].saturating_add(keep(dst[0])),
                src[1].saturating_add(keep(dst[1])),
                src[2].saturating_add(keep(dst[2])),
                sa.saturating_add(keep(dst[3])),
            ]
        }
    }
}

/// Source-over of a whole buffer onto another of identical size.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> TraceResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(TraceError::surface(format!(
            "over_in_place: {} byte source onto {} byte target",
            src.len(),
            dst.len()
        )));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Fill every pixel with one premultiplied color.
pub fn fill(dst: &mut [u8], rgba: PremulRgba8) {
    for px in dst.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

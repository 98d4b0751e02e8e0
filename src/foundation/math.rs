use kurbo::{Point, Vec2};

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

pub(crate) fn unpremul_rgba8(px: [u8; 4]) -> [u8; 4] {
    let a = px[3];
    if a == 0 {
        return [0, 0, 0, 0];
    }
    if a == 255 {
        return px;
    }
    let un = |c: u8| -> u8 {
        let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
        v.min(255) as u8
    };
    [un(px[0]), un(px[1]), un(px[2]), a]
}

/// Point halfway between `a` and `b`.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new(a.x + (b.x - a.x) / 2.0, a.y + (b.y - a.y) / 2.0)
}

/// Point on the segment from `center` to `p`, at most `radius` away from `center`.
///
/// Returns `p` when it already lies within `radius`. Otherwise the result sits on the circle,
/// nudged inward until `center.distance(result) <= radius` holds exactly in `f64`.
pub fn pull_within(center: Point, p: Point, radius: f64) -> Point {
    let away: Vec2 = p - center;
    let dist = away.hypot();
    if dist <= radius || !dist.is_finite() {
        return p;
    }
    let mut k = radius.max(0.0) / dist;
    let mut out = center + away * k;
    while k > 0.0 && center.distance(out) > radius {
        k *= 1.0 - f64::EPSILON;
        out = center + away * k;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

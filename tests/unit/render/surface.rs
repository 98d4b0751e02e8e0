use super::*;

fn line(a: (f64, f64), b: (f64, f64)) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(a);
    p.line_to(b);
    p
}

#[test]
fn new_surface_is_blank() {
    let s = Surface::new(16, 16, 1.0).unwrap();
    assert!(s.is_blank());
    assert_eq!(s.data().len(), 16 * 16 * 4);
}

#[test]
fn rejects_unrepresentable_sizes() {
    assert!(Surface::new(70_000, 4, 1.0).is_err());
    assert!(Surface::new(0, 4, 1.0).is_err());
    assert!(Surface::new(4, 4, 0.0).is_err());
}

#[test]
fn stroke_uses_logical_coordinates() {
    let mut s = Surface::new(64, 64, 2.0).unwrap();
    s.stroke_path(&line((4.0, 16.0), (28.0, 16.0)), 4.0, Rgba8::rgb(0, 0, 0))
        .unwrap();
    assert_eq!(s.alpha_at(Point::new(16.0, 16.0)), Some(255));
    assert_eq!(s.alpha_at(Point::new(16.0, 28.0)), Some(0));
    assert_eq!(s.alpha_at(Point::new(40.0, 16.0)), None);
    assert_eq!(s.logical_bounds(), Rect::new(0.0, 0.0, 32.0, 32.0));
}

#[test]
fn draws_accumulate_and_clear_resets() {
    let mut s = Surface::new(32, 32, 1.0).unwrap();
    s.fill_circle(Point::new(8.0, 8.0), 4.0, Rgba8::rgb(255, 0, 0))
        .unwrap();
    s.fill_circle(Point::new(24.0, 24.0), 4.0, Rgba8::rgb(0, 0, 255))
        .unwrap();
    assert_eq!(s.alpha_at(Point::new(8.0, 8.0)), Some(255));
    assert_eq!(s.alpha_at(Point::new(24.0, 24.0)), Some(255));
    s.clear();
    assert!(s.is_blank());
}

#[test]
fn over_requires_matching_sizes() {
    let mut a = Surface::new(8, 8, 1.0).unwrap();
    let b = Surface::new(4, 4, 1.0).unwrap();
    assert!(a.over(&b).is_err());
}

#[test]
fn over_scaled_stretches_content() {
    let mut small = Surface::new(16, 16, 1.0).unwrap();
    small
        .fill_circle(Point::new(8.0, 8.0), 4.0, Rgba8::rgb(0, 0, 0))
        .unwrap();

    let mut big = Surface::new(32, 32, 2.0).unwrap();
    big.over_scaled(small).unwrap();
    // Logical (8, 8) maps to device (16, 16) on the 2x surface.
    assert!(big.alpha_at(Point::new(8.0, 8.0)).unwrap() > 200);
    assert_eq!(big.alpha_at(Point::new(1.0, 1.0)), Some(0));
}

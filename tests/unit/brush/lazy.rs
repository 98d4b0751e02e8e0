use super::*;

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn unit(seed: u64) -> f64 {
    (mix64(seed) >> 11) as f64 / (1u64 << 53) as f64
}

#[test]
fn brush_stays_within_radius_for_arbitrary_input() {
    for radius in [0.0, 1.0, 7.5, 10.0, 20.0] {
        let mut lazy = LazyBrush::new(radius, true);
        for i in 0..20_000u64 {
            let x = unit(i * 2) * 600.0 - 150.0;
            let y = unit(i * 2 + 1) * 600.0 - 150.0;
            lazy.set_raw(Point::new(x, y));
            lazy.update();
            assert!(
                lazy.state().lag() <= radius,
                "lag {} exceeds radius {radius}",
                lazy.state().lag()
            );
        }
    }
}

#[test]
fn jitter_inside_radius_does_not_move_brush() {
    let mut lazy = LazyBrush::new(10.0, true);
    lazy.update_both(Point::new(50.0, 50.0));
    for (dx, dy) in [(3.0, 0.0), (-4.0, 2.0), (0.0, -9.9)] {
        lazy.set_raw(Point::new(50.0 + dx, 50.0 + dy));
        assert!(!lazy.update());
        assert!(!lazy.has_moved());
    }
    assert_eq!(lazy.brush(), Point::new(50.0, 50.0));
}

#[test]
fn brush_catches_up_to_radius_boundary() {
    let mut lazy = LazyBrush::new(10.0, true);
    lazy.update_both(Point::ORIGIN);
    lazy.set_raw(Point::new(30.0, 0.0));
    assert!(lazy.update());
    assert!(lazy.has_moved());
    assert!((lazy.brush().x - 20.0).abs() < 1e-12);
    assert_eq!(lazy.brush().y, 0.0);

    // No new input: already on the boundary, nothing to do.
    assert!(!lazy.update());
}

#[test]
fn update_both_is_not_motion() {
    let mut lazy = LazyBrush::new(5.0, true);
    lazy.set_raw(Point::new(100.0, 0.0));
    lazy.update();
    lazy.update_both(Point::new(7.0, 7.0));
    assert!(!lazy.has_moved());
    assert_eq!(lazy.raw(), lazy.brush());
}

#[test]
fn disabled_brush_tracks_pointer() {
    let mut lazy = LazyBrush::new(10.0, false);
    lazy.set_raw(Point::new(3.0, 4.0));
    assert!(lazy.update());
    assert_eq!(lazy.brush(), Point::new(3.0, 4.0));
    assert!(!lazy.update());
}

#[test]
fn negative_radius_clamps_to_zero() {
    let mut lazy = LazyBrush::new(-3.0, true);
    assert_eq!(lazy.radius(), 0.0);
    lazy.set_raw(Point::new(1.0, 0.0));
    lazy.update();
    assert!((lazy.brush().x - 1.0).abs() < 1e-12);
}

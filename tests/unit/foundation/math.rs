use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(0, 200), 0);
}

#[test]
fn unpremul_handles_edges() {
    assert_eq!(unpremul_rgba8([0, 0, 0, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremul_rgba8([9, 8, 7, 255]), [9, 8, 7, 255]);
}

#[test]
fn midpoint_is_halfway() {
    assert_eq!(
        midpoint(Point::new(10.0, 0.0), Point::new(10.0, 10.0)),
        Point::new(10.0, 5.0)
    );
}

#[test]
fn pull_within_lands_on_circle_along_segment() {
    let p = pull_within(Point::new(0.0, 0.0), Point::new(3.0, 4.0), 2.5);
    assert!((p.x - 1.5).abs() < 1e-12);
    assert!((p.y - 2.0).abs() < 1e-12);
    assert!(Point::ORIGIN.distance(p) <= 2.5);

    let inside = Point::new(1.0, 1.0);
    assert_eq!(pull_within(Point::ORIGIN, inside, 5.0), inside);
    assert_eq!(pull_within(inside, Point::new(9.0, 9.0), 0.0), inside);
}

#[test]
fn pull_within_never_overshoots_radius() {
    let center = Point::new(0.1, 0.7);
    for i in 1..5_000u32 {
        let t = f64::from(i);
        let p = Point::new(t * 0.37 - 900.0, 1.0 / t + t.sqrt() * 13.1);
        for radius in [0.3, 1.0, 7.5, 10.0, 20.0] {
            assert!(center.distance(pull_within(center, p, radius)) <= radius);
        }
    }
}

use super::*;
use kurbo::PathEl;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn fewer_than_two_points_render_nothing() {
    assert!(stroke_path(&[]).is_none());
    assert!(stroke_path(&pts(&[(1.0, 1.0)])).is_none());

    let mut scratch = Surface::new(32, 32, 1.0).unwrap();
    let r = StrokeRenderer::new(14.0, Rgba8::rgb(0, 0, 0));
    assert!(!r.render(&pts(&[(5.0, 5.0)]), &mut scratch).unwrap());
    assert!(scratch.is_blank());
}

#[test]
fn curve_uses_samples_as_controls_and_midpoints_as_ends() {
    let path = stroke_path(&pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])).unwrap();
    let els = path.elements();

    assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 0.0)));

    let first_quad = els
        .iter()
        .find_map(|el| match el {
            PathEl::QuadTo(c, e) => Some((*c, *e)),
            _ => None,
        })
        .unwrap();
    assert_eq!(first_quad, (Point::new(10.0, 0.0), Point::new(10.0, 5.0)));

    assert_eq!(els.last(), Some(&PathEl::LineTo(Point::new(0.0, 10.0))));
}

#[test]
fn two_points_form_a_single_line() {
    let path = stroke_path(&pts(&[(0.0, 0.0), (3.0, 4.0)])).unwrap();
    assert_eq!(
        path.elements(),
        &[
            PathEl::MoveTo(Point::new(0.0, 0.0)),
            PathEl::LineTo(Point::new(3.0, 4.0)),
        ]
    );
}

#[test]
fn path_passes_through_every_interior_midpoint() {
    let samples = pts(&[(0.0, 0.0), (8.0, 2.0), (16.0, 10.0), (20.0, 20.0), (30.0, 22.0)]);
    let path = stroke_path(&samples).unwrap();
    let ends: Vec<Point> = path.elements().iter().filter_map(|el| el.end_point()).collect();
    for w in samples.windows(2).take(samples.len() - 2) {
        let mid = midpoint(w[0], w[1]);
        assert!(ends.contains(&mid), "missing midpoint {mid:?}");
    }
    assert_eq!(ends.last(), samples.last());
}

#[test]
fn render_replaces_previous_scratch_content() {
    let mut scratch = Surface::new(64, 64, 1.0).unwrap();
    let r = StrokeRenderer::new(6.0, Rgba8::rgb(0, 0, 0));
    assert!(r.render(&pts(&[(4.0, 4.0), (20.0, 4.0)]), &mut scratch).unwrap());
    assert!(scratch.alpha_at(Point::new(12.0, 4.0)).unwrap() > 0);

    assert!(r.render(&pts(&[(4.0, 50.0), (60.0, 50.0)]), &mut scratch).unwrap());
    assert_eq!(scratch.alpha_at(Point::new(12.0, 4.0)), Some(0));
    assert!(scratch.alpha_at(Point::new(30.0, 50.0)).unwrap() > 0);
}

#[test]
fn stroke_clear_resets_validity() {
    let mut s = Stroke::new();
    s.push(Point::new(1.0, 1.0));
    s.push(Point::new(5.0, 1.0));
    s.valid = true;
    assert_eq!(s.len(), 2);
    assert!(s.path().is_some());
    s.clear();
    assert!(s.is_empty());
    assert!(!s.valid);
}

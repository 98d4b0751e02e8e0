use super::*;

#[test]
fn defaults_are_valid() {
    let opts = BoardOpts::default();
    opts.validate().unwrap();
    assert_eq!(opts.stroke_width, 14.0);
    assert_eq!(opts.grid_color, Rgba8::rgb(0xF0, 0xF8, 0xFF));
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let opts: BoardOpts =
        serde_json::from_str(r##"{ "brush_radius": 4.5, "ink": "#000000" }"##).unwrap();
    assert_eq!(opts.brush_radius, 4.5);
    assert_eq!(opts.ink, Rgba8::rgb(0, 0, 0));
    assert_eq!(opts.css_size, 300.0);
}

#[test]
fn validate_rejects_bad_geometry() {
    let opts = BoardOpts {
        device_pixel_ratio: 0.0,
        ..BoardOpts::default()
    };
    assert!(opts.validate().is_err());

    let opts = BoardOpts {
        css_size: f64::NAN,
        ..BoardOpts::default()
    };
    assert!(opts.validate().is_err());

    let opts = BoardOpts {
        stroke_width: -1.0,
        ..BoardOpts::default()
    };
    assert!(opts.validate().is_err());
}

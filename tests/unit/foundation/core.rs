use super::*;

#[test]
fn hex_parses_rgb_and_rgba() {
    assert_eq!(Rgba8::from_hex("#F0F8FF").unwrap(), Rgba8::rgb(0xF0, 0xF8, 0xFF));
    assert_eq!(
        Rgba8::from_hex("22222280").unwrap(),
        Rgba8::rgba(0x22, 0x22, 0x22, 0x80)
    );
}

#[test]
fn hex_rejects_bad_input() {
    assert!(Rgba8::from_hex("#FFF").is_err());
    assert!(Rgba8::from_hex("#GG0000").is_err());
    assert!(Rgba8::from_hex("#ＦＦ00").is_err());
    assert!(Rgba8::from_hex("#+F+F+F").is_err());
    assert!(Rgba8::from_hex("+FFFFFFF").is_err());
}

#[test]
fn color_serializes_as_hex_string() {
    let json = serde_json::to_string(&Rgba8::rgb(255, 0, 0)).unwrap();
    assert_eq!(json, "\"#FF0000\"");
    let back: Rgba8 = serde_json::from_str("\"#00FF0080\"").unwrap();
    assert_eq!(back, Rgba8::rgba(0, 255, 0, 128));
}

#[test]
fn premul_scales_channels_by_alpha() {
    assert_eq!(Rgba8::rgb(10, 20, 30).premul(), [10, 20, 30, 255]);
    assert_eq!(Rgba8::rgba(255, 255, 255, 0).premul(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::rgba(200, 100, 0, 128).premul(), [100, 50, 0, 128]);
}

#[test]
fn frame_unpremultiplies_for_export() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![100, 50, 0, 128, 0, 0, 0, 0],
        premultiplied: true,
    };
    let straight = frame.to_straight_rgba8();
    assert_eq!(&straight[4..], &[0, 0, 0, 0]);
    assert_eq!(straight[3], 128);
    assert!((i32::from(straight[0]) - 199).abs() <= 1);
    assert_eq!(frame.alpha_at(0, 0), Some(128));
    assert_eq!(frame.alpha_at(2, 0), None);
}

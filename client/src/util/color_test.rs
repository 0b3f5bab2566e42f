use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#CF0"), Some((204, 255, 0)));
    assert_eq!(parse_hex_rgb("  #ff4400 "), Some((255, 68, 0)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("ccff00"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("#ééé"), None);
}

#[test]
fn hex_to_rgba_formats_alpha() {
    assert_eq!(hex_to_rgba("#ccff00", 0.5), "rgba(204, 255, 0, 0.5)");
    assert_eq!(hex_to_rgba("#00ccff", 0.0), "rgba(0, 204, 255, 0)");
    assert_eq!(hex_to_rgba("#ff4400", 1.0), "rgba(255, 68, 0, 1)");
}

#[test]
fn hex_to_rgba_falls_back_to_black() {
    assert_eq!(hex_to_rgba("lime", 0.5), "rgba(0, 0, 0, 0.5)");
}

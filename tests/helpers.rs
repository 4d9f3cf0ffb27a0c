use filigranadrome::utils::rounding::Rounded;
use filigranadrome::utils::text::capitalize;

#[test]
fn rounding_is_idempotent() {
    for value in [0.0f32, 1.2345, -1.2345, 99.999, -0.005, 123.456, 1.0 / 3.0] {
        let once = value.rounded(2);
        assert_eq!(once.rounded(2), once);
    }
}

#[test]
fn rounding_goes_half_away_from_zero() {
    assert_eq!((0.125f32).rounded(2), 0.13);
    assert_eq!((-0.125f32).rounded(2), -0.13);
    assert_eq!((2.5f32).rounded(0), 3.0);
    assert_eq!((-2.5f32).rounded(0), -3.0);
}

#[test]
fn rounding_keeps_exact_values() {
    assert_eq!((150.0f32).rounded(2), 150.0);
    assert_eq!((1.0f32 / 3.0).rounded(2), 0.33);
}

#[test]
fn capitalize_uppercases_every_word() {
    assert_eq!(capitalize("speedy gonzalez"), "Speedy Gonzalez");
    assert_eq!(capitalize("  über  fast "), "Über Fast");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("x"), "X");
}

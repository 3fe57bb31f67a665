use fftlite::{
    fft_real, next_power_of_two, pad_to_power_of_two, round_complex, round_to_digits, Complex64,
    DEFAULT_DIGITS,
};

#[test]
fn next_power_of_two_table() {
    let cases = [(0usize, 1usize), (1, 1), (2, 2), (3, 4), (4, 4), (5, 8), (1023, 1024)];
    for &(n, expected) in &cases {
        assert_eq!(next_power_of_two(n), expected, "n = {}", n);
    }
}

#[test]
fn pad_appends_zeros_of_same_type() {
    assert_eq!(pad_to_power_of_two(&[1.0f64, 2.0, 3.0]), vec![1.0, 2.0, 3.0, 0.0]);
    assert_eq!(pad_to_power_of_two(&[1.0f64, 2.0, 3.0, 4.0]), vec![1.0, 2.0, 3.0, 4.0]);
}

// Padding is a spectral no-op for the retained prefix: the DC bin still sums
// the original samples.
#[test]
fn padded_dc_bin_sums_samples() {
    let spectrum = fft_real(&pad_to_power_of_two(&[1.0f64, 2.0, 3.0])).unwrap();
    assert!((spectrum[0].re - 6.0).abs() < 1e-12);
    assert!(spectrum[0].im.abs() < 1e-12);
}

#[test]
fn rounding_is_idempotent() {
    let spectrum: Vec<Complex64> = (0..8)
        .map(|i| Complex64::new(1.0 / (i as f64 + 3.0), -(i as f64) / 7.0))
        .collect();
    let once = round_complex(&spectrum, DEFAULT_DIGITS);
    let twice = round_complex(&once, DEFAULT_DIGITS);
    assert_eq!(once, twice);
}

#[test]
fn rounding_ties_away_from_zero() {
    // 0.25 and 0.375 are exact in binary, producing true ties at 1 and 2 digits.
    assert_eq!(round_to_digits(0.25f64, 1), 0.3);
    assert_eq!(round_to_digits(-0.25f64, 1), -0.3);
    assert_eq!(round_to_digits(0.375f64, 2), 0.38);
}

#[test]
fn rounding_suppresses_float_noise() {
    let noisy = vec![Complex64::new(2.0 + 1e-13, -3e-17)];
    let clean = round_complex(&noisy, DEFAULT_DIGITS);
    assert_eq!(clean[0], Complex64::new(2.0, 0.0));
}

#[test]
fn rounding_real_and_imaginary_independently() {
    let spectrum = vec![Complex64::new(1.23456, -9.87654)];
    let rounded = round_complex(&spectrum, 2);
    assert_eq!(rounded[0].re, 1.23);
    assert_eq!(rounded[0].im, -9.88);
}

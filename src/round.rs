//! Fixed-precision rounding for spectra.
//!
//! Bins that are mathematically zero come out of floating point as values
//! like `1e-16`; rounding both parts of every bin to a fixed number of
//! decimals keeps printed spectra stable and comparable across runs and
//! platforms. Ties round away from zero, matching `libm::round`.
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec::Vec;

use crate::num::{Complex, Float};

/// Decimal places kept by the transform front ends unless told otherwise.
pub const DEFAULT_DIGITS: u32 = 4;

/// Round `value` to `digits` decimal places, ties away from zero.
pub fn round_to_digits<T: Float>(value: T, digits: u32) -> T {
    let ten = T::from_f32(10.0);
    let mut scale = T::one();
    for _ in 0..digits {
        scale = scale * ten;
    }
    (value * scale).round() / scale
}

/// Round the real and imaginary parts of every bin independently.
pub fn round_complex<T: Float>(spectrum: &[Complex<T>], digits: u32) -> Vec<Complex<T>> {
    spectrum
        .iter()
        .map(|c| {
            Complex::new(
                round_to_digits(c.re, digits),
                round_to_digits(c.im, digits),
            )
        })
        .collect()
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_round_half_away_from_zero() {
        // 0.25 is exact in binary, so 0.25·10 = 2.5 is a true tie.
        assert_eq!(round_to_digits(0.25f64, 1), 0.3);
        assert_eq!(round_to_digits(-0.25f64, 1), -0.3);
    }

    #[test]
    fn test_round_complex_suppresses_noise() {
        let spectrum = vec![Complex::new(4.0f64, -1.2e-16), Complex::new(1e-5, 2.0)];
        let rounded = round_complex(&spectrum, DEFAULT_DIGITS);
        assert_eq!(rounded[0].re, 4.0);
        assert_eq!(rounded[0].im, 0.0);
        assert_eq!(rounded[1].re, 0.0);
        assert_eq!(rounded[1].im, 2.0);
    }
}

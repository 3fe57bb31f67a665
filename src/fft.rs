//! Radix-2 decimation-in-time FFT.
//!
//! Recursive [Cooley–Tukey](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm)
//! transform in the forward `exp(-2πi·kn/N)` convention. Every call returns a
//! freshly allocated spectrum in natural frequency order; twiddle factors are
//! computed per recursion frame and never cached across calls.
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec::Vec;

use crate::num::{Complex, Float};

#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};

/// Sequence lengths at or above this run the even/odd halves via
/// `rayon::join` when the `parallel` feature is enabled.
#[cfg(feature = "parallel")]
const PARALLEL_FFT_MIN_LEN: usize = 1 << 12;

/// Override for the parallel recursion threshold.
///
/// `0` means no override and the built-in default is used.
#[cfg(feature = "parallel")]
static PARALLEL_FFT_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);

#[cfg(feature = "parallel")]
/// Set a custom minimum sequence length for parallel recursion.
///
/// Passing `0` reverts to the built-in default. The split is purely a
/// scheduling choice; results are bit-identical either way.
pub fn set_parallel_fft_threshold(threshold: usize) {
    PARALLEL_FFT_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

#[cfg(feature = "parallel")]
fn parallel_fft_threshold() -> usize {
    let threshold = PARALLEL_FFT_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if threshold != 0 {
        threshold
    } else {
        PARALLEL_FFT_MIN_LEN
    }
}

/// Errors reported by the transform entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Input length is greater than one and not a power of two.
    InvalidLength,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::InvalidLength => write!(f, "input length must be a power of two"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Compute the discrete Fourier transform of `input`.
///
/// The length must be zero, one, or a power of two; arbitrary lengths are
/// rejected with [`FftError::InvalidLength`] and should be routed through
/// [`crate::pad::pad_complex`] first. Frequency bin `k` of the result is
/// `X[k] = Σ x[n]·e^(−2πi·kn/N)`, in natural order `0..N-1`.
pub fn fft<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    let n = input.len();
    if n > 1 && !n.is_power_of_two() {
        return Err(FftError::InvalidLength);
    }
    #[cfg(feature = "verbose-logging")]
    log::trace!("fft: n={}", n);
    Ok(transform(input))
}

/// Promote a real sequence to complex and transform it.
///
/// The promotion happens once at the transform boundary; the recursion itself
/// is complex throughout.
pub fn fft_real<T: Float>(input: &[T]) -> Result<Vec<Complex<T>>, FftError> {
    let promoted: Vec<Complex<T>> = input
        .iter()
        .map(|&x| Complex::new(x, T::zero()))
        .collect();
    fft(&promoted)
}

/// Recursive kernel. Length is zero, one, or a power of two on every frame.
fn transform<T: Float>(x: &[Complex<T>]) -> Vec<Complex<T>> {
    let n = x.len();
    if n <= 1 {
        return x.to_vec();
    }
    let half = n / 2;

    let even_half: Vec<Complex<T>> = x.iter().copied().step_by(2).collect();
    let odd_half: Vec<Complex<T>> = x.iter().copied().skip(1).step_by(2).collect();
    let (even, odd) = recurse(&even_half, &odd_half);

    let neg_two_pi = -(T::from_f32(2.0) * T::pi());
    let inv_n = T::one() / T::from_f32(n as f32);
    let mut out = alloc::vec![Complex::zero(); n];
    for k in 0..half {
        let w = Complex::expi(neg_two_pi * T::from_f32(k as f32) * inv_n);
        let t = w * odd[k];
        out[k] = even[k] + t;
        out[k + half] = even[k] - t;
    }
    out
}

#[cfg(not(feature = "parallel"))]
fn recurse<T: Float>(
    even: &[Complex<T>],
    odd: &[Complex<T>],
) -> (Vec<Complex<T>>, Vec<Complex<T>>) {
    (transform(even), transform(odd))
}

// The two halves are data-independent, so joining them is coordination-free.
#[cfg(feature = "parallel")]
fn recurse<T: Float>(
    even: &[Complex<T>],
    odd: &[Complex<T>],
) -> (Vec<Complex<T>>, Vec<Complex<T>>) {
    if even.len() + odd.len() >= parallel_fft_threshold() {
        rayon::join(|| transform(even), || transform(odd))
    } else {
        (transform(even), transform(odd))
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use crate::num::Complex32;
    use crate::pad::pad_complex;
    use alloc::vec::Vec;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn random_linearity() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 16;
        let x: Vec<Complex32> = (0..n)
            .map(|_| Complex32::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)))
            .collect();
        let y: Vec<Complex32> = (0..n)
            .map(|_| Complex32::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)))
            .collect();
        let a = Complex32::new(2.0, 0.0);
        let b = Complex32::new(-1.5, 0.5);
        let mixed: Vec<Complex32> = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| a * xi + b * yi)
            .collect();
        let fx = fft(&x).unwrap();
        let fy = fft(&y).unwrap();
        let fm = fft(&mixed).unwrap();
        for k in 0..n {
            let expected = a * fx[k] + b * fy[k];
            assert!((fm[k].re - expected.re).abs() < 1e-3);
            assert!((fm[k].im - expected.im).abs() < 1e-3);
        }
    }

    proptest! {
        // Parseval holds for any padded real signal: Σ|X|² = N·Σ|x|².
        #[test]
        fn parseval_after_padding(signal in prop::collection::vec(-100.0f32..100.0, 1..64)) {
            let promoted: Vec<Complex32> =
                signal.iter().map(|&x| Complex32::new(x, 0.0)).collect();
            let padded = pad_complex(&promoted);
            let spectrum = fft(&padded).unwrap();
            let time_energy: f32 = padded.iter().map(|c| c.norm_sqr()).sum();
            let freq_energy: f32 = spectrum.iter().map(|c| c.norm_sqr()).sum();
            let expected = padded.len() as f32 * time_energy;
            prop_assert!((freq_energy - expected).abs() <= 1e-3 * expected.max(1.0));
        }
    }
}

//! Fourier-series coefficients of periodic waveforms.
//!
//! Trapezoidal quadrature over one period yields the `a_n`/`b_n` projections;
//! the reported coefficients are the harmonic magnitudes `sqrt(a_n² + b_n²)`.
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec::Vec;

use crate::num::Float;

/// Default interval count for coefficient integration.
pub const QUADRATURE_STEPS: usize = 1_000_000;

/// Harmonic magnitudes at or below this are reported as exactly zero.
const COEFFICIENT_FLOOR: f32 = 1e-5;

/// Errors reported by the quadrature and sampling helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    /// The waveform period must be strictly positive.
    InvalidPeriod,
    /// Quadrature needs at least one interval.
    InvalidStepCount,
    /// Waveform sampling needs at least two points.
    InvalidPointCount,
}

impl core::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SeriesError::InvalidPeriod => write!(f, "period must be strictly positive"),
            SeriesError::InvalidStepCount => write!(f, "quadrature needs at least one interval"),
            SeriesError::InvalidPointCount => write!(f, "sampling needs at least two points"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeriesError {}

/// Fixed-step trapezoidal rule for `∫_a^b f(t) dt` over `steps` intervals.
pub fn trapezoid<T, F>(f: F, a: T, b: T, steps: usize) -> Result<T, SeriesError>
where
    T: Float,
    F: Fn(T) -> T,
{
    if steps == 0 {
        return Err(SeriesError::InvalidStepCount);
    }
    let dx = (b - a) / T::from_f32(steps as f32);
    let mut sum = (f(a) + f(b)) / T::from_f32(2.0);
    for i in 1..steps {
        sum = sum + f(a + dx * T::from_f32(i as f32));
    }
    Ok(sum * dx)
}

/// Fourier-series magnitude coefficients of a waveform with period `period`.
///
/// Returns `harmonics + 1` values: the mean `c0 = (1/T)·∫f`, then
/// `cn = sqrt(an² + bn²)` for each harmonic `n ≥ 1`, where `an` and `bn` are
/// the cosine and sine projections over one period. Magnitudes at or below
/// `1e-5` are floored to zero so missing harmonics print cleanly.
///
/// `steps` is the interval count per integral; [`QUADRATURE_STEPS`] is the
/// conventional default, lower counts trade accuracy for speed.
pub fn fourier_coefficients<T, F>(
    f: F,
    period: T,
    harmonics: usize,
    steps: usize,
) -> Result<Vec<T>, SeriesError>
where
    T: Float,
    F: Fn(T) -> T,
{
    if !(period > T::zero()) {
        return Err(SeriesError::InvalidPeriod);
    }
    #[cfg(feature = "verbose-logging")]
    log::trace!("fourier_coefficients: harmonics={} steps={}", harmonics, steps);
    let two = T::from_f32(2.0);
    let floor = T::from_f32(COEFFICIENT_FLOOR);
    let mut coefficients = Vec::with_capacity(harmonics + 1);

    let a0 = trapezoid(&f, T::zero(), period, steps)? / period;
    coefficients.push(a0);

    for n in 1..=harmonics {
        let omega = two * T::pi() * T::from_f32(n as f32) / period;
        let an = trapezoid(|t| f(t) * (omega * t).cos(), T::zero(), period, steps)? * two / period;
        let bn = trapezoid(|t| f(t) * (omega * t).sin(), T::zero(), period, steps)? * two / period;
        let magnitude = (an * an + bn * bn).sqrt();
        coefficients.push(if magnitude > floor { magnitude } else { T::zero() });
    }
    Ok(coefficients)
}

/// Rectangular pulse train: `amplitude` over the first `pulse_width` of each
/// period, zero for the remainder. Time wraps euclideanly, so negative `t`
/// samples the same waveform.
pub fn rectangle_wave<T: Float>(t: T, period: T, pulse_width: T, amplitude: T) -> T {
    let mut phase = t % period;
    if phase < T::zero() {
        phase = phase + period;
    }
    if phase < pulse_width {
        amplitude
    } else {
        T::zero()
    }
}

/// Evenly spaced `(t, f(t))` samples over `cycles` whole periods, endpoints
/// included. Intended for plot drivers.
pub fn sample_waveform<T, F>(
    f: F,
    period: T,
    cycles: usize,
    points: usize,
) -> Result<Vec<(T, T)>, SeriesError>
where
    T: Float,
    F: Fn(T) -> T,
{
    if !(period > T::zero()) {
        return Err(SeriesError::InvalidPeriod);
    }
    if points < 2 {
        return Err(SeriesError::InvalidPointCount);
    }
    let span = period * T::from_f32(cycles as f32);
    let step = span / T::from_f32((points - 1) as f32);
    let mut samples = Vec::with_capacity(points);
    for i in 0..points {
        let t = step * T::from_f32(i as f32);
        samples.push((t, f(t)));
    }
    Ok(samples)
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;

    #[test]
    fn test_trapezoid_linear_exact() {
        // The trapezoidal rule is exact for affine integrands.
        let area = trapezoid(|t: f64| 2.0 * t + 1.0, 0.0, 1.0, 100).unwrap();
        assert!((area - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_zero_steps() {
        assert_eq!(
            trapezoid(|t: f64| t, 0.0, 1.0, 0).unwrap_err(),
            SeriesError::InvalidStepCount
        );
    }

    #[test]
    fn test_rectangle_wave_wraps() {
        assert_eq!(rectangle_wave(0.1f64, 1.0, 0.25, 2.0), 2.0);
        assert_eq!(rectangle_wave(0.5f64, 1.0, 0.25, 2.0), 0.0);
        assert_eq!(rectangle_wave(2.1f64, 1.0, 0.25, 2.0), 2.0);
        assert_eq!(rectangle_wave(-0.9f64, 1.0, 0.25, 2.0), 2.0);
    }
}

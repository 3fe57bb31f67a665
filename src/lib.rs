//! # fftlite - recursive radix-2 FFT with fixed-precision spectra
//!
//! A small DSP library built around a pure, recursive Cooley–Tukey FFT:
//! zero-pad a sequence to a power-of-two length, transform it, and round the
//! resulting spectrum to a fixed number of decimals so outputs compare stably
//! across runs and platforms. A companion module derives Fourier-series
//! coefficients of periodic waveforms by trapezoidal quadrature.
//!
//! ## Features
//!
//! - **Pure transforms**: every call returns a fresh spectrum; no planner
//!   state, no cross-call caches
//! - **`no_std` + `alloc`**: math routes through `libm`
//! - **Optional parallel recursion** over the even/odd halves (Rayon)
//! - **Fail-fast validation**: non-power-of-two lengths are a typed error,
//!   not silent garbage
//!
//! ## Cargo Features
//!
//! - `std` (default): standard library integration (`std::error::Error` impls)
//! - `parallel`: split large recursions across threads with Rayon
//! - `verbose-logging`: `log` trace output at transform entry points
//! - `internal-tests`: enable randomized/property test dependencies
//!
//! ## Example
//!
//! ```
//! use fftlite::{fft_real, pad_to_power_of_two, round_complex, DEFAULT_DIGITS};
//!
//! let padded = pad_to_power_of_two(&[1.0f64, 1.0, 1.0]); // length 3 -> 4
//! let spectrum = fft_real(&padded).unwrap();
//! let rounded = round_complex(&spectrum, DEFAULT_DIGITS);
//! assert_eq!(rounded[0].re, 3.0); // DC bin sums the samples
//! ```
//!
//! ## License
//!
//! Licensed under either of the Apache License, Version 2.0 or the MIT
//! license, at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Radix-2 decimation-in-time FFT engine.
pub mod fft;

/// Comma-separated sequence parsing for front ends.
pub mod input;

/// Float abstraction and complex arithmetic.
pub mod num;

/// Zero padding to power-of-two lengths.
pub mod pad;

/// Fixed-precision rounding of spectra.
pub mod round;

/// Fourier-series coefficients via trapezoidal quadrature.
pub mod series;

pub use fft::{fft, fft_real, FftError};
pub use num::{Complex, Complex32, Complex64, Float};
pub use pad::{next_power_of_two, pad_complex, pad_to_power_of_two};
pub use round::{round_complex, round_to_digits, DEFAULT_DIGITS};

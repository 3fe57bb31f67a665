//! Zero padding to power-of-two lengths.
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec::Vec;

use crate::num::{Complex, Float};

/// Smallest power of two greater than or equal to `n`.
///
/// Zero maps to one, so an empty sequence pads to a single zero sample.
pub fn next_power_of_two(n: usize) -> usize {
    n.next_power_of_two()
}

/// Return `input` followed by zeros up to the next power-of-two length.
///
/// A length that is already a power of two comes back unchanged (in a fresh
/// allocation).
pub fn pad_to_power_of_two<T: Float>(input: &[T]) -> Vec<T> {
    let target = next_power_of_two(input.len());
    let mut padded = Vec::with_capacity(target);
    padded.extend_from_slice(input);
    padded.resize(target, T::zero());
    padded
}

/// Complex-sequence variant of [`pad_to_power_of_two`].
pub fn pad_complex<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    let target = next_power_of_two(input.len());
    let mut padded = Vec::with_capacity(target);
    padded.extend_from_slice(input);
    padded.resize(target, Complex::zero());
    padded
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;

    #[test]
    fn test_next_power_of_two_edges() {
        assert_eq!(next_power_of_two(0), 1);
        assert_eq!(next_power_of_two(1), 1);
        assert_eq!(next_power_of_two(5), 8);
        assert_eq!(next_power_of_two(8), 8);
    }

    #[test]
    fn test_pad_preserves_prefix() {
        let padded = pad_to_power_of_two(&[1.0f32, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(padded.len(), 8);
        assert_eq!(&padded[..5], &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(padded[5..].iter().all(|&x| x == 0.0));
    }
}

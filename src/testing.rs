//! Tools to test filters
#![allow(dead_code)]
use num_traits::Float;

use crate::{Fir, Output, Process, Sample, TAPS, Tap};

/// Tolerance `rtol * max(|a|, |b|) + atol`
pub fn max_error<T: Float>(a: T, b: T, rtol: T, atol: T) -> T {
    rtol * a.abs().max(b.abs()) + atol
}

/// Whether `a` and `b` are within [`max_error()`]
pub fn isclose<T: Float>(a: T, b: T, rtol: T, atol: T) -> bool {
    (a - b).abs() <= max_error(a, b, rtol, atol)
}

/// Unit impulse followed by zeros
pub fn impulse(n: usize) -> Vec<Sample> {
    let mut x = vec![0; n];
    if let Some(x0) = x.first_mut() {
        *x0 = 1;
    }
    x
}

/// Feed all samples on enabled ticks and collect the outputs
pub fn run(fir: &mut Fir, x: &[Sample]) -> Vec<Output> {
    let mut y = vec![0; x.len()];
    fir.block(x, &mut y);
    y
}

/// Direct form reference convolution with zero initial state
pub fn convolve(taps: &[Tap; TAPS], x: &[Sample]) -> Vec<Output> {
    (0..x.len())
        .map(|n| {
            taps.iter()
                .enumerate()
                .take(n + 1)
                .map(|(k, t)| *t as i64 * x[n - k] as i64)
                .sum()
        })
        .collect()
}

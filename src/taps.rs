/// Input sample, signed 16 bit
pub type Sample = i16;

/// FIR coefficient, signed Q15
pub type Tap = i16;

/// Single tap product, exactly `Sample::BITS + Tap::BITS` wide.
pub type Product = i32;

/// Registered filter output.
///
/// Holds the sum sign-extended from the configured output width.
pub type Output = i64;

/// Filter order (number of delay stages)
pub const ORDER: usize = 50;

/// Number of taps
pub const TAPS: usize = ORDER + 1;

/// Group delay in samples of a symmetric (linear phase) filter
pub const GROUP_DELAY: usize = ORDER / 2;

/// Default low-pass taps
///
/// * 51 taps, Hamming window, linear phase
/// * -6 dB at 0.113, pass band to 0.08 (relative to sample rate)
/// * more than 52 dB stop band attenuation beyond 0.15
/// * Q15: DC gain is `1 << 15` within a few LSB
/// * `sum(|tap|) < 1 << 16`, a full scale input can not exceed 32 bit output
#[rustfmt::skip]
pub const DEFAULT_TAPS: [Tap; TAPS] = [
    -30, -35, -25, 5, 49, 88, 90, 30,
    -86, -210, -261, -167, 80, 390, 594, 520,
    91, -583, -1203, -1371, -757, 732, 2857, 5091,
    6787, 7419, 6787, 5091, 2857, 732, -757, -1371,
    -1203, -583, 91, 520, 594, 390, 80, -167,
    -261, -210, -86, 30, 90, 88, 49, 5,
    -25, -35, -30,
];

/// Whether the taps are symmetric: `taps[i] == taps[ORDER - i]`.
pub fn is_symmetric(taps: &[Tap; TAPS]) -> bool {
    taps.iter().zip(taps.iter().rev()).all(|(a, b)| a == b)
}

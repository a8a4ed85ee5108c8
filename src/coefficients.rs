use num_complex::Complex;
use num_traits::Float;

use crate::{DEFAULT_TAPS, Error, ORDER, TAPS, Tap, is_symmetric};

/// Coefficient store
///
/// Holds the current taps and the vector they are restored to on reset.
/// In the static variant the taps can not be written.
///
/// The store does not know about filtering. The mutual exclusion between
/// writes and MAC reads is enforced by [`crate::Fir::tick()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CoefficientStore {
    taps: [Tap; TAPS],
    default: [Tap; TAPS],
    mutable: bool,
}

impl Default for CoefficientStore {
    fn default() -> Self {
        Self::new(DEFAULT_TAPS, false)
    }
}

impl CoefficientStore {
    /// Create a new store
    ///
    /// # Args
    /// * `taps`: Coefficients, also used as reset value.
    ///   `taps[0]` is paired with the newest sample.
    /// * `mutable`: Whether coefficients can be written (dynamic variant).
    pub const fn new(taps: [Tap; TAPS], mutable: bool) -> Self {
        Self {
            taps,
            default: taps,
            mutable,
        }
    }

    /// Whether [`CoefficientStore::write()`] is supported
    pub const fn is_mutable(&self) -> bool {
        self.mutable
    }

    /// Obtain a single tap
    pub fn get(&self, index: usize) -> Result<Tap, Error> {
        self.taps
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index })
    }

    /// All current taps
    pub fn taps(&self) -> &[Tap; TAPS] {
        &self.taps
    }

    /// The taps restored on reset
    pub fn default_taps(&self) -> &[Tap; TAPS] {
        &self.default
    }

    /// Restore the default taps, discarding all writes.
    pub fn reset(&mut self) {
        self.taps = self.default;
    }

    /// Replace a single tap.
    ///
    /// This applies unconditionally. Use [`crate::Fir::tick()`] to have
    /// writes gated against filtering.
    pub fn write(&mut self, index: usize, value: Tap) -> Result<(), Error> {
        if !self.mutable {
            return Err(Error::ReadOnly);
        }
        let tap = self
            .taps
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index })?;
        *tap = value;
        Ok(())
    }

    /// Whether the current taps are symmetric (linear phase)
    pub fn is_symmetric(&self) -> bool {
        is_symmetric(&self.taps)
    }

    /// Sum of all taps
    ///
    /// This is the response to a constant input of one.
    pub fn dc_gain(&self) -> i32 {
        self.taps.iter().map(|t| *t as i32).sum()
    }

    /// Frequency response in units of taps
    ///
    /// # Args
    /// * `f`: Frequency in units of the sample rate, `0..=0.5`
    ///
    /// # Returns
    /// `sum(tap[k] * exp(-2j*pi*f*k))`
    pub fn frequency_response(&self, f: f64) -> Complex<f64> {
        let w = -2.0 * core::f64::consts::PI * f;
        let (re, im) = self
            .taps
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(re, im), (k, t)| {
                let (s, c) = Float::sin_cos(w * k as f64);
                let t = *t as f64;
                (re + t * c, im + t * s)
            });
        Complex::new(re, im)
    }

    /// Center tap index
    pub const fn center(&self) -> usize {
        ORDER / 2
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::isclose;

    #[test]
    fn get_range() {
        let c = CoefficientStore::default();
        for i in 0..TAPS {
            assert_eq!(c.get(i), Ok(DEFAULT_TAPS[i]));
        }
        assert_eq!(c.get(TAPS), Err(Error::IndexOutOfRange { index: TAPS }));
        assert_eq!(c.get(usize::MAX), Err(Error::IndexOutOfRange { index: usize::MAX }));
    }

    #[test]
    fn read_only() {
        let mut c = CoefficientStore::default();
        assert!(!c.is_mutable());
        assert_eq!(c.write(0, 1), Err(Error::ReadOnly));
        assert_eq!(c.taps(), &DEFAULT_TAPS);
    }

    #[test]
    fn write_reset() {
        let mut c = CoefficientStore::new(DEFAULT_TAPS, true);
        c.write(7, -1234).unwrap();
        c.write(ORDER, 5).unwrap();
        assert_eq!(c.get(7), Ok(-1234));
        assert_eq!(c.get(ORDER), Ok(5));
        assert_eq!(c.get(8), Ok(DEFAULT_TAPS[8]));
        assert!(!c.is_symmetric());
        assert_eq!(c.write(TAPS, 0), Err(Error::IndexOutOfRange { index: TAPS }));
        c.reset();
        assert_eq!(c.taps(), &DEFAULT_TAPS);
        assert!(c.is_symmetric());
    }

    #[test]
    fn custom_default() {
        let mut taps = [0; TAPS];
        taps[ORDER / 2] = 1 << 14;
        let mut c = CoefficientStore::new(taps, true);
        c.write(0, 9).unwrap();
        c.reset();
        assert_eq!(c.taps(), &taps);
        assert_eq!(c.default_taps(), &taps);
        assert_eq!(c.dc_gain(), 1 << 14);
        assert_eq!(c.center(), 25);
    }

    #[test]
    fn response() {
        let c = CoefficientStore::default();
        let dc = c.frequency_response(0.0);
        assert!(isclose(dc.re, c.dc_gain() as f64, 0.0, 1e-9));
        assert!(isclose(dc.im, 0.0, 0.0, 1e-9));
        let one = (1 << 15) as f64;
        assert!(isclose(c.frequency_response(0.05).norm_sqr().sqrt(), one, 1e-2, 0.0));
        for f in [0.15, 0.2, 0.3, 0.4, 0.5] {
            // > 55 dB attenuation
            assert!(c.frequency_response(f).norm_sqr().sqrt() < one * 2e-3);
        }
    }
}

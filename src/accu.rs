use crate::{Error, Output, Product};

/// Product accumulator
///
/// Sums exactly in 64 bit and then wraps the sum to the output width
/// (two's complement, no saturation).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Accu {
    width: u32,
}

impl Accu {
    /// Create a new accumulator
    ///
    /// # Args
    /// * `width`: Output width in bits, 1..=64
    pub fn new(width: u32) -> Result<Self, Error> {
        if (1..=64).contains(&width) {
            Ok(Self { width })
        } else {
            Err(Error::OutputWidth { width })
        }
    }

    /// Output width in bits
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Wrap a value to the output width and sign extend it.
    pub fn wrap(&self, y: i64) -> Output {
        let s = 64 - self.width;
        (y << s) >> s
    }

    /// Reduce products into an output value.
    ///
    /// At most `1 << 33` products of `i32` can be summed without
    /// intermediate overflow.
    pub fn reduce(&self, products: &[Product]) -> Output {
        self.wrap(products.iter().map(|p| *p as i64).sum())
    }
}

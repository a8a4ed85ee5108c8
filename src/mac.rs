use crate::{CoefficientStore, DelayLine, Product, TAPS};

/// Multiply each delay line slot with its tap.
///
/// `product[i] = delay[i] * tap[i]`, tap 0 pairs with the newest sample.
/// The product is exact: `i16::MIN * i16::MIN` fits an `i32`.
pub fn products(delay: &DelayLine, coefficients: &CoefficientStore) -> [Product; TAPS] {
    let (x, a) = (delay.samples(), coefficients.taps());
    core::array::from_fn(|i| x[i] as Product * a[i] as Product)
}

//! Sample processing

/// Single input, single output sample processor
///
/// Implemented by stateful processors that consume one input per call,
/// e.g. [`crate::Fir`] on enabled ticks.
pub trait Process<X: Copy, Y = X> {
    /// Consume an input and obtain the new output
    fn process(&mut self, x: X) -> Y;

    /// Process a block of inputs into a block of outputs
    ///
    /// Input and output must be of the same size.
    fn block(&mut self, x: &[X], y: &mut [Y]) {
        debug_assert_eq!(x.len(), y.len());
        for (x, y) in x.iter().zip(y) {
            *y = self.process(*x);
        }
    }

    /// Feed a constant input `n` times (at least once) and return the last output
    ///
    /// With `n` larger than the response length this yields the settled response,
    /// e.g. the DC gain for a unit input.
    fn settle(&mut self, x: X, n: usize) -> Y {
        let y = self.process(x);
        (1..n).fold(y, |_, _| self.process(x))
    }
}

impl<X: Copy, Y, T: Process<X, Y>> Process<X, Y> for &mut T {
    fn process(&mut self, x: X) -> Y {
        (*self).process(x)
    }

    fn block(&mut self, x: &[X], y: &mut [Y]) {
        (*self).block(x, y)
    }
}

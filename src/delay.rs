use crate::{Error, Sample, TAPS};

/// Tapped delay line
///
/// Slot `i` holds the sample that arrived `i` active ticks ago,
/// slot 0 is the newest.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DelayLine {
    x: [Sample; TAPS],
}

impl Default for DelayLine {
    fn default() -> Self {
        Self { x: [0; TAPS] }
    }
}

impl DelayLine {
    /// Clear all slots
    pub fn reset(&mut self) {
        self.x = [0; TAPS];
    }

    /// Shift all slots one towards the past and insert a new sample at slot 0.
    ///
    /// The oldest sample is dropped.
    pub fn advance(&mut self, x0: Sample) {
        self.x.copy_within(0..TAPS - 1, 1);
        self.x[0] = x0;
    }

    /// Read a slot
    pub fn peek(&self, index: usize) -> Result<Sample, Error> {
        self.x
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index })
    }

    /// All slots, newest first
    pub fn samples(&self) -> &[Sample; TAPS] {
        &self.x
    }
}

use serde::{Deserialize, Serialize};

/// Filter errors
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Serialize, Deserialize, thiserror::Error,
)]
#[non_exhaustive]
pub enum Error {
    /// Tap or delay line slot index beyond the filter order
    #[error("index {index} out of range")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
    },
    /// Coefficient write to a static coefficient store
    #[error("coefficients are read-only")]
    ReadOnly,
    /// Output width not in `1..=64`
    #[error("invalid output width {width}")]
    OutputWidth {
        /// The requested width in bits
        width: u32,
    },
}

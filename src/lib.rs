#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

mod taps;
pub use taps::*;
mod error;
pub use error::*;
mod config;
pub use config::*;
mod coefficients;
pub use coefficients::*;
mod delay;
pub use delay::*;
mod mac;
pub use mac::*;
mod accu;
pub use accu::*;
mod process;
pub use process::*;
mod fir;
pub use fir::*;

#[cfg(test)]
pub mod testing;

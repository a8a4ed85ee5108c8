use serde::{Deserialize, Serialize};

use crate::{
    Accu, CoefficientStore, Config, DEFAULT_TAPS, DelayLine, Error, Output, Process, Sample, TAPS,
    Tap, products,
};

/// Controller state
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
pub enum State {
    /// Reset asserted during the last tick
    #[default]
    Reset,
    /// Enable deasserted during the last tick, all state held
    Idle,
    /// A sample was processed during the last tick
    Active,
}

/// Coefficient write request
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoefficientWrite {
    /// Tap index, `0..=ORDER`
    pub index: usize,
    /// New tap value
    pub value: Tap,
}

/// Inputs for a single tick
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    /// Input sample, only consumed if `enable` is asserted
    pub sample: Sample,
    /// Process `sample`
    pub enable: bool,
    /// Synchronous reset, dominates all other inputs
    pub reset: bool,
    /// Coefficient write, only applied if `enable` is deasserted
    pub write: Option<CoefficientWrite>,
}

impl Tick {
    /// An enabled tick processing `sample`
    pub const fn sample(sample: Sample) -> Self {
        Self {
            sample,
            enable: true,
            reset: false,
            write: None,
        }
    }

    /// A disabled tick
    pub const fn idle() -> Self {
        Self {
            sample: 0,
            enable: false,
            reset: false,
            write: None,
        }
    }

    /// A reset tick
    pub const fn reset() -> Self {
        Self {
            sample: 0,
            enable: false,
            reset: true,
            write: None,
        }
    }

    /// Add a coefficient write request
    pub const fn with_write(mut self, index: usize, value: Tap) -> Self {
        self.write = Some(CoefficientWrite { index, value });
        self
    }
}

/// Synchronous fixed-point FIR filter engine
///
/// Each [`Fir::tick()`] computes the next delay line, output and coefficients
/// from the current ones and commits them together:
///
/// * Reset restores default coefficients, clears delay line and output.
///   It overrides enable and any coefficient write.
/// * Enable shifts the sample into the delay line and registers the new output
///   computed with the coefficients as they were before the tick.
/// * A coefficient write is applied only if enable is deasserted.
///   Otherwise it is dropped without error.
/// * Without enable the delay line and output hold.
///
/// ```
/// # use sfir::*;
/// let mut fir = Fir::new(Variant::Dynamic.into()).unwrap();
/// assert_eq!(fir.update(1), DEFAULT_TAPS[0] as i64);
/// fir.write_coefficient(1, 100).unwrap();
/// assert_eq!(fir.update(0), 100);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fir {
    config: Config,
    coefficients: CoefficientStore,
    delay: DelayLine,
    accu: Accu,
    output: Output,
    state: State,
}

impl Fir {
    /// Create a new filter with the default low-pass taps
    pub fn new(config: Config) -> Result<Self, Error> {
        Self::with_taps(config, DEFAULT_TAPS)
    }

    /// Create a new filter with given taps
    ///
    /// The taps are also the values restored on reset.
    pub fn with_taps(config: Config, taps: [Tap; TAPS]) -> Result<Self, Error> {
        Ok(Self {
            accu: Accu::new(config.output_width)?,
            coefficients: CoefficientStore::new(taps, config.variant.mutable_coefficients()),
            delay: DelayLine::default(),
            output: 0,
            state: State::Reset,
            config,
        })
    }

    /// Advance by one tick
    ///
    /// # Returns
    /// The registered output after the tick. Held if not enabled.
    ///
    /// # Errors
    /// On a disabled tick, a write request to an out of range index or to a
    /// static store is rejected before any state changes.
    /// On enabled or reset ticks any write request is dropped unchecked.
    pub fn tick(&mut self, tick: &Tick) -> Result<Output, Error> {
        if tick.reset {
            if let Some(w) = tick.write {
                log::debug!("Dropping coefficient write {w:?} during reset");
            }
            self.reset();
            return Ok(self.output);
        }
        if let Some(w) = tick.write {
            if !tick.enable {
                if !self.coefficients.is_mutable() {
                    return Err(Error::ReadOnly);
                }
                self.coefficients.get(w.index)?;
            }
        }

        let mut delay = self.delay;
        let mut output = self.output;
        let mut coefficients = self.coefficients;
        if tick.enable {
            delay.advance(tick.sample);
            output = self.accu.reduce(&products(&delay, &self.coefficients));
        }
        if let Some(w) = tick.write {
            if tick.enable {
                log::debug!("Dropping coefficient write {w:?} while filtering");
            } else {
                coefficients.write(w.index, w.value)?;
                log::debug!("Coefficient write {w:?}");
            }
        }
        let state = if tick.enable {
            State::Active
        } else {
            State::Idle
        };
        if state != self.state {
            log::trace!("{} -> {}", self.state.as_ref(), state.as_ref());
        }

        self.delay = delay;
        self.output = output;
        self.coefficients = coefficients;
        self.state = state;
        Ok(output)
    }

    /// Process a sample (enabled tick without write)
    pub fn update(&mut self, sample: Sample) -> Output {
        // Infallible without a write request
        self.tick(&Tick::sample(sample)).unwrap_or(self.output)
    }

    /// Hold (disabled tick without write)
    pub fn hold(&mut self) -> Output {
        self.tick(&Tick::idle()).unwrap_or(self.output)
    }

    /// Write a coefficient on a disabled tick
    ///
    /// The new value is used from the next processed sample on.
    pub fn write_coefficient(&mut self, index: usize, value: Tap) -> Result<(), Error> {
        self.tick(&Tick::idle().with_write(index, value)).map(|_| ())
    }

    /// Reset tick
    ///
    /// Restores default coefficients and clears delay line and output.
    pub fn reset(&mut self) {
        if self.state != State::Reset {
            log::trace!("{} -> {}", self.state.as_ref(), State::Reset.as_ref());
        }
        self.coefficients.reset();
        self.delay.reset();
        self.output = 0;
        self.state = State::Reset;
    }

    /// Current registered output
    pub fn output(&self) -> Output {
        self.output
    }

    /// Controller state
    pub fn state(&self) -> State {
        self.state
    }

    /// Configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Coefficient store
    pub fn coefficients(&self) -> &CoefficientStore {
        &self.coefficients
    }

    /// Delay line
    pub fn delay(&self) -> &DelayLine {
        &self.delay
    }
}

impl Process<Sample, Output> for Fir {
    fn process(&mut self, x: Sample) -> Output {
        self.update(x)
    }
}

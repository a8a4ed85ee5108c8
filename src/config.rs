use miniconf::Tree;
use serde::{Deserialize, Serialize};

use crate::{Accu, Error};

/// Coefficient store variant
///
/// Both variants share the pipeline. They only differ in whether
/// coefficients can be written and in their reference output width.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::FromRepr,
)]
pub enum Variant {
    /// Coefficients fixed at construction
    #[default]
    Static = 0,
    /// Coefficients writable while not filtering
    Dynamic = 1,
}

impl Variant {
    /// Whether coefficients can be written
    pub const fn mutable_coefficients(&self) -> bool {
        matches!(self, Self::Dynamic)
    }

    /// Reference output width in bits
    pub const fn output_width(&self) -> u32 {
        match self {
            Self::Static => 33,
            Self::Dynamic => 32,
        }
    }
}

/// Filter engine configuration
///
/// Copied into a [`crate::Fir`] at construction and fixed from then on.
/// Can be exposed as part of a `miniconf` settings tree; changes made
/// through it only apply to engines built afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Tree)]
pub struct Config {
    /// Coefficient store variant
    #[tree(with=miniconf::leaf)]
    pub variant: Variant,
    /// Output register width in bits, 1..=64.
    ///
    /// The sum is wrapped (two's complement) to this width.
    pub output_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Variant::default().into()
    }
}

impl From<Variant> for Config {
    fn from(variant: Variant) -> Self {
        Self {
            variant,
            output_width: variant.output_width(),
        }
    }
}

impl Config {
    /// Check the output width
    pub fn validate(&self) -> Result<(), Error> {
        Accu::new(self.output_width).map(|_| ())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn variants() {
        let c = Config::from(Variant::Dynamic);
        assert_eq!(c.output_width, 32);
        assert!(c.variant.mutable_coefficients());
        let c = Config::default();
        assert_eq!(c.variant, Variant::Static);
        assert_eq!(c.output_width, 33);
        assert!(!c.variant.mutable_coefficients());
        assert_eq!("Dynamic".parse::<Variant>(), Ok(Variant::Dynamic));
        assert_eq!(Variant::from_repr(0), Some(Variant::Static));
        assert_eq!(Variant::Static.as_ref(), "Static");
    }

    #[test]
    fn width() {
        for width in [1, 32, 33, 64] {
            let c = Config {
                output_width: width,
                ..Default::default()
            };
            assert_eq!(c.validate(), Ok(()));
        }
        for width in [0, 65] {
            let c = Config {
                output_width: width,
                ..Default::default()
            };
            assert_eq!(c.validate(), Err(Error::OutputWidth { width }));
        }
    }
}

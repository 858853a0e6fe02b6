use std::io;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

mod adder;
pub mod utils;

pub use adder::{Adder, AdderKind};

/// Multiplies by repeated calls to an injected [`Adder`].
#[derive(Debug, Clone, Default)]
pub struct Multiplier<A = AdderKind> {
    adder: A,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub adder: AdderKind,
}

impl Config {
    /// A `--adder` flag wins over the configured adder.
    pub fn adder_or(&self, flag: Option<AdderKind>) -> AdderKind {
        flag.unwrap_or(self.adder)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("can't handle negative numbers")]
    InvalidArgument,
    #[error("could not read config: {0}")]
    IoError(#[from] io::Error),
    #[error("invalid config: {0}")]
    ConfigError(#[from] toml::de::Error),
}

impl<A: Adder> Multiplier<A> {
    pub fn new(adder: A) -> Self {
        Multiplier { adder }
    }

    pub fn adder(&self) -> &A {
        &self.adder
    }

    /// `a * b`, computed as `a` successive additions of `b` starting from zero.
    ///
    /// Fails with [`Error::InvalidArgument`] before calling the adder when `a` is negative.
    pub fn multiply(&self, a: i64, b: i64) -> Result<i64, Error> {
        if a < 0 {
            debug!("rejected multiply({}, {})", a, b);
            return Err(Error::InvalidArgument);
        }
        let mut acc = 0;
        for _ in 0..a {
            acc = self.adder.add(acc, b);
        }
        debug!("multiply({}, {}) = {}", a, b, acc);
        Ok(acc)
    }
}

pub fn multiply(a: i64, b: i64) -> Result<i64, Error> {
    Multiplier::<AdderKind>::default().multiply(a, b)
}

use serde::Deserialize;

/// Two-argument integer addition, injected into [`crate::Multiplier`].
pub trait Adder {
    fn add(&self, x: i64, y: i64) -> i64;
}

impl<F> Adder for F
where
    F: Fn(i64, i64) -> i64,
{
    fn add(&self, x: i64, y: i64) -> i64 {
        self(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ArgEnum)]
#[serde(rename_all = "lowercase")]
pub enum AdderKind {
    /// Native `+`; overflow follows the build profile.
    #[default]
    Plain,
    Wrapping,
}

impl Adder for AdderKind {
    fn add(&self, x: i64, y: i64) -> i64 {
        match self {
            AdderKind::Plain => x + y,
            AdderKind::Wrapping => x.wrapping_add(y),
        }
    }
}

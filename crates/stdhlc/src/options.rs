//! Codec settings for the CLI.
//!
//! Settings are layered, later layers winning:
//!
//! 1. Defaults: native decimal (radix 10, `stdhl` dialect)
//! 2. Environment: `STDHL_RADIX`, `STDHL_LITERAL`
//! 3. Flags: `--radix=<n>`, `--literal=<name>`
//!
//! Only the final pair is checked against the dialect rules, so an
//! environment default may be overridden by a flag into a valid format.

use stdhl_numeral::{
    Literal, NumeralError, NumeralFormat, ParseLiteralError, ParseRadixError, Radix,
};
use tracing::debug;

pub const RADIX_ENV: &str = "STDHL_RADIX";
pub const LITERAL_ENV: &str = "STDHL_LITERAL";

const RADIX_FLAG: &str = "--radix=";
const LITERAL_FLAG: &str = "--literal=";

/// Bad codec settings.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("{origin}: {source}")]
    Radix {
        origin: &'static str,
        source: ParseRadixError,
    },

    #[error("{origin}: {source}")]
    Literal {
        origin: &'static str,
        source: ParseLiteralError,
    },

    #[error("unknown option `{0}`")]
    UnknownFlag(String),

    #[error(transparent)]
    Unsupported(#[from] NumeralError),
}

/// Radix and dialect as requested by the user, not yet validated.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CodecOptions {
    pub radix: Radix,
    pub literal: Literal,
}

impl Default for CodecOptions {
    fn default() -> Self {
        let NumeralFormat { radix, literal } = NumeralFormat::NATIVE_DECIMAL;
        CodecOptions { radix, literal }
    }
}

impl CodecOptions {
    /// Defaults overlaid with the process environment.
    pub fn from_process_env() -> Result<Self, OptionsError> {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Overlay settings found through `lookup`. Empty values are ignored.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, OptionsError> {
        if let Some(text) = lookup(RADIX_ENV).filter(|text| !text.trim().is_empty()) {
            self.radix = parse_radix(&text, RADIX_ENV)?;
        }
        if let Some(text) = lookup(LITERAL_ENV).filter(|text| !text.trim().is_empty()) {
            self.literal = parse_literal(&text, LITERAL_ENV)?;
        }
        Ok(self)
    }

    /// Overlay `--radix=` and `--literal=` flags, returning the remaining
    /// positional arguments in order.
    ///
    /// Anything else starting with `--` is rejected. A single leading `-`
    /// is positional so negative numbers pass through.
    pub fn with_args<'a>(
        mut self,
        args: &'a [String],
    ) -> Result<(Self, Vec<&'a str>), OptionsError> {
        let mut positional = Vec::new();
        for arg in args {
            if let Some(text) = arg.strip_prefix(RADIX_FLAG) {
                self.radix = parse_radix(text, "--radix")?;
            } else if let Some(text) = arg.strip_prefix(LITERAL_FLAG) {
                self.literal = parse_literal(text, "--literal")?;
            } else if arg.starts_with("--") {
                return Err(OptionsError::UnknownFlag(arg.clone()));
            } else {
                positional.push(arg.as_str());
            }
        }
        Ok((self, positional))
    }

    /// The validated format.
    pub fn format(self) -> Result<NumeralFormat, OptionsError> {
        let format = NumeralFormat::new(self.radix, self.literal).check()?;
        debug!(%format, "codec options resolved");
        Ok(format)
    }
}

fn parse_radix(text: &str, origin: &'static str) -> Result<Radix, OptionsError> {
    text.parse()
        .map_err(|source| OptionsError::Radix { origin, source })
}

fn parse_literal(text: &str, origin: &'static str) -> Result<Literal, OptionsError> {
    text.parse()
        .map_err(|source| OptionsError::Literal { origin, source })
}

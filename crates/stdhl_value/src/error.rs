//! Value-level errors.

use stdhl_numeral::NumeralError;

/// A recoverable error raised while rendering a value.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error(transparent)]
    Numeral(#[from] NumeralError),

    /// Only inline scalars have a numeral form.
    #[error("cannot encode a heap-backed `{kind}` value as a numeral")]
    NotScalar { kind: &'static str },
}

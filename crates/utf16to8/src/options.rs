/// How the encoder treats ill-formed UTF-16 (unpaired or misordered
/// surrogates).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DecodeMode {
    /// Substitute U+FFFD (`EF BF BD`) for each ill-formed code unit and keep
    /// going. Conversion never fails.
    #[default]
    ReplaceInvalid,
    /// Fail the whole conversion at the first ill-formed code unit.
    StrictUnicode,
}

/// Configuration options for a single conversion.
///
/// # Default
///
/// [`DecodeMode::ReplaceInvalid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncodeOptions {
    /// Policy for unpaired or misordered surrogates.
    ///
    /// # Default
    ///
    /// [`DecodeMode::ReplaceInvalid`]
    pub decode_mode: DecodeMode,
}

impl EncodeOptions {
    /// Options that reject ill-formed input.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            decode_mode: DecodeMode::StrictUnicode,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::{DecodeMode, EncodeOptions};

    #[test]
    fn options_from_json() {
        let opts: EncodeOptions =
            serde_json::from_str(r#"{"decode_mode":"strict_unicode"}"#).unwrap();
        assert_eq!(opts, EncodeOptions::strict());

        let opts: EncodeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.decode_mode, DecodeMode::ReplaceInvalid);
    }
}

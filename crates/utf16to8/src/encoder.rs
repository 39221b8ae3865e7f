use alloc::string::String;

use crate::{
    buffer::Utf8Buffer,
    error::MalformedInput,
    options::{DecodeMode, EncodeOptions},
    view::CodeUnitView,
};

/// Encodes `view` as UTF-8, replacing each ill-formed code unit with U+FFFD.
///
/// An unpaired high surrogate, an unpaired low surrogate, and a low surrogate
/// not preceded by a high surrogate each become `EF BF BD`. A high surrogate
/// followed by something other than a low surrogate is replaced on its own;
/// the follower is decoded normally. The result is always valid UTF-8 and its
/// length equals [`utf8_len`].
#[must_use]
pub fn encode_utf8(view: CodeUnitView<'_>) -> Utf8Buffer {
    let mut text = String::with_capacity(utf8_len(view));
    for scalar in view.scalars() {
        match scalar {
            Ok(ch) => text.push(ch),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(index = err.index(), unit = err.unit(), "replacing unpaired surrogate");
                #[cfg(not(feature = "tracing"))]
                let _ = err;
                text.push(char::REPLACEMENT_CHARACTER);
            }
        }
    }
    Utf8Buffer::from_string(text)
}

/// Encodes `view` as UTF-8, failing on the first ill-formed code unit.
///
/// # Errors
///
/// Returns [`MalformedInput`] describing the first unpaired or misordered
/// surrogate. No partial output is returned.
pub fn try_encode_utf8(view: CodeUnitView<'_>) -> Result<Utf8Buffer, MalformedInput> {
    // Validate up front so a failing conversion allocates nothing.
    validate(view)?;
    let mut text = String::with_capacity(utf8_len(view));
    text.extend(view.scalars().flatten());
    Ok(Utf8Buffer::from_string(text))
}

/// Encodes `view` as UTF-8 using the policy in `options`.
///
/// # Errors
///
/// Only with [`DecodeMode::StrictUnicode`]; see [`try_encode_utf8`].
pub fn encode_utf8_with(
    view: CodeUnitView<'_>,
    options: EncodeOptions,
) -> Result<Utf8Buffer, MalformedInput> {
    match options.decode_mode {
        DecodeMode::ReplaceInvalid => Ok(encode_utf8(view)),
        DecodeMode::StrictUnicode => try_encode_utf8(view),
    }
}

/// Number of bytes [`encode_utf8`] produces for `view`.
///
/// Each scalar contributes its UTF-8 width (1 to 4 bytes); each ill-formed
/// code unit contributes 3, the width of U+FFFD.
#[must_use]
pub fn utf8_len(view: CodeUnitView<'_>) -> usize {
    view.scalars()
        .map(|scalar| scalar.unwrap_or(char::REPLACEMENT_CHARACTER).len_utf8())
        .sum()
}

/// Checks that `view` is well-formed UTF-16.
///
/// # Errors
///
/// Returns [`MalformedInput`] for the first unpaired or misordered surrogate.
pub fn validate(view: CodeUnitView<'_>) -> Result<(), MalformedInput> {
    match view.scalars().find_map(Result::err) {
        Some(err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(%err, len = view.len(), "rejecting malformed UTF-16");
            Err(err)
        }
        None => Ok(()),
    }
}

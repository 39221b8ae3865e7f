use crate::{CodeUnitView, MalformedInput, Utf8Buffer, encode_utf8, try_encode_utf8};

/// Method-call sugar over [`encode_utf8`] and [`try_encode_utf8`].
///
/// ```rust
/// use utf16to8::ToUtf8Buffer;
///
/// let units: Vec<u16> = "caf\u{e9}".encode_utf16().collect();
/// assert_eq!(units.to_utf8_buffer(), "caf\u{e9}");
/// ```
pub trait ToUtf8Buffer {
    /// See [`encode_utf8`].
    fn to_utf8_buffer(&self) -> Utf8Buffer;

    /// See [`try_encode_utf8`].
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInput`] for the first unpaired or misordered
    /// surrogate.
    fn try_to_utf8_buffer(&self) -> Result<Utf8Buffer, MalformedInput>;
}

impl ToUtf8Buffer for [u16] {
    fn to_utf8_buffer(&self) -> Utf8Buffer {
        encode_utf8(CodeUnitView::new(self))
    }

    fn try_to_utf8_buffer(&self) -> Result<Utf8Buffer, MalformedInput> {
        try_encode_utf8(CodeUnitView::new(self))
    }
}

impl ToUtf8Buffer for CodeUnitView<'_> {
    fn to_utf8_buffer(&self) -> Utf8Buffer {
        encode_utf8(*self)
    }

    fn try_to_utf8_buffer(&self) -> Result<Utf8Buffer, MalformedInput> {
        try_encode_utf8(*self)
    }
}

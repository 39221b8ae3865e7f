use alloc::{
    ffi::{CString, NulError},
    string::String,
    vec::Vec,
};
use core::fmt;

use bstr::BStr;

/// An owned UTF-8 byte buffer produced by the encoder.
///
/// The bytes are always valid UTF-8 and carry no trailing sentinel; the
/// length is explicit. The buffer shares no storage with the code units it
/// was encoded from and is never touched by the encoder once returned.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Utf8Buffer {
    text: String,
}

impl Utf8Buffer {
    pub(crate) fn from_string(text: String) -> Self {
        Self { text }
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// The encoded bytes as a `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The encoded bytes as a byte string.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.text.as_bytes())
    }

    /// Consumes the buffer, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into_bytes()
    }

    /// Consumes the buffer, returning its contents as a `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Copies the buffer into a NUL-terminated C string.
    ///
    /// The terminator belongs to the copy only; [`Utf8Buffer::len`] is
    /// unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`NulError`] if the text contains U+0000.
    pub fn to_c_string(&self) -> Result<CString, NulError> {
        CString::new(self.text.as_bytes())
    }
}

impl fmt::Debug for Utf8Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}

impl fmt::Display for Utf8Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<[u8]> for Utf8Buffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<str> for Utf8Buffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<BStr> for Utf8Buffer {
    fn as_ref(&self) -> &BStr {
        self.as_bstr()
    }
}

impl From<Utf8Buffer> for Vec<u8> {
    fn from(buf: Utf8Buffer) -> Self {
        buf.into_bytes()
    }
}

impl From<Utf8Buffer> for String {
    fn from(buf: Utf8Buffer) -> Self {
        buf.into_string()
    }
}

impl PartialEq<[u8]> for Utf8Buffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for Utf8Buffer {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Utf8Buffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

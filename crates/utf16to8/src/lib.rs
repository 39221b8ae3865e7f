//! Conversion of borrowed UTF-16 code units into owned UTF-8 buffers.
//!
//! A host text object (anything that stores its contents as 16-bit code
//! units) lends its storage through a [`CodeUnitView`]; the encoder reads it
//! once, left to right, and hands back a [`Utf8Buffer`] that shares nothing
//! with the source.
//!
//! Two policies exist for ill-formed input (unpaired or misordered
//! surrogates), each bound to its own operation:
//!
//! - [`encode_utf8`] substitutes U+FFFD for every ill-formed code unit and
//!   never fails.
//! - [`try_encode_utf8`] rejects the whole conversion with a
//!   [`MalformedInput`] pointing at the first ill-formed code unit.
//!
//! ```rust
//! use utf16to8::{CodeUnitView, encode_utf8, try_encode_utf8};
//!
//! let units = [0x0041, 0x00E9, 0xD83D, 0xDE00];
//! let out = encode_utf8(CodeUnitView::new(&units));
//! assert_eq!(out.as_bytes(), b"A\xC3\xA9\xF0\x9F\x98\x80");
//!
//! let lone = [0xD800];
//! assert_eq!(encode_utf8(CodeUnitView::new(&lone)).as_bytes(), b"\xEF\xBF\xBD");
//! assert!(try_encode_utf8(CodeUnitView::new(&lone)).is_err());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod encoder;
mod error;
mod ext;
mod options;
mod scalars;
mod view;

#[cfg(test)]
mod tests;

pub use buffer::Utf8Buffer;
pub use encoder::{encode_utf8, encode_utf8_with, try_encode_utf8, utf8_len, validate};
pub use error::{MalformedInput, SurrogateKind};
pub use ext::ToUtf8Buffer;
pub use options::{DecodeMode, EncodeOptions};
pub use scalars::Scalars;
pub use view::CodeUnitView;

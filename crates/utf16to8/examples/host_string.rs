//! Converts text owned by a UTF-16 host object into an independent UTF-8
//! buffer, the way a binding layer over a platform string type would.
//!
//! The "host" below hands out only a pointer and a length; the encoder never
//! participates in its ownership.

use std::sync::Arc;

use utf16to8::{CodeUnitView, EncodeOptions, encode_utf8, encode_utf8_with};

struct NativeString {
    storage: Arc<[u16]>,
}

impl NativeString {
    fn length(&self) -> usize {
        self.storage.len()
    }

    fn characters(&self) -> *const u16 {
        self.storage.as_ptr()
    }
}

fn main() {
    let mut units: Vec<u16> = "Join us, one and all! \u{1F600}".encode_utf16().collect();
    units.push(0xD800);
    let native = NativeString {
        storage: units.into(),
    };

    // SAFETY: `native.storage` is immutable and outlives `view`.
    let view = unsafe { CodeUnitView::from_raw_parts(native.characters(), native.length()) };

    let lossy = encode_utf8(view);
    println!("{} code units -> {} bytes: {lossy:?}", view.len(), lossy.len());

    match encode_utf8_with(view, EncodeOptions::strict()) {
        Ok(buf) => println!("strict: {buf}"),
        Err(err) => println!("strict: {err}"),
    }
}

#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use utf16to8::{CodeUnitView, DecodeMode, EncodeOptions, encode_utf8_with, utf8_len};

#[derive(Debug, Arbitrary)]
struct Input {
    strict: bool,
    units: Vec<u16>,
}

fn encoder(data: &[u8]) {
    let Ok(input) = Input::arbitrary(&mut Unstructured::new(data)) else {
        return;
    };

    let view = CodeUnitView::new(&input.units);
    let options = EncodeOptions {
        decode_mode: if input.strict {
            DecodeMode::StrictUnicode
        } else {
            DecodeMode::ReplaceInvalid
        },
    };

    match encode_utf8_with(view, options) {
        Ok(out) => {
            assert!(std::str::from_utf8(out.as_bytes()).is_ok());
            assert_eq!(out.len(), utf8_len(view));
            if input.strict {
                assert_eq!(Some(out.as_str()), String::from_utf16(&input.units).ok().as_deref());
            } else {
                assert_eq!(out.as_str(), String::from_utf16_lossy(&input.units));
            }
        }
        Err(err) => {
            assert!(input.strict, "replacement mode must not fail");
            assert!(String::from_utf16(&input.units).is_err());
            assert!((0xD800..=0xDFFF).contains(&input.units[err.index()]));
        }
    }
}

fuzz_target!(|data: &[u8]| encoder(data));

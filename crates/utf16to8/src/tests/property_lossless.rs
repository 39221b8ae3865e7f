use alloc::{boxed::Box, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen, QuickCheck};
use quickcheck_macros::quickcheck;

use crate::{CodeUnitView, encode_utf8, try_encode_utf8, utf8_len};

/// Code units drawn mostly from the surrogate ranges and their neighbours so
/// that pairing edge cases show up often.
#[derive(Debug, Clone)]
struct SurrogateHeavy(Vec<u16>);

impl Arbitrary for SurrogateHeavy {
    fn arbitrary(g: &mut Gen) -> Self {
        const POOL: &[u16] = &[
            0x0000, 0x0041, 0x007F, 0x0080, 0x07FF, 0x0800, 0xD7FF, 0xD800, 0xD83D, 0xDBFF,
            0xDC00, 0xDE00, 0xDFFF, 0xE000, 0xFFFD, 0xFFFF,
        ];
        let len = usize::arbitrary(g) % 24;
        let units = (0..len)
            .map(|_| {
                if bool::arbitrary(g) {
                    *g.choose(POOL).unwrap_or(&0)
                } else {
                    u16::arbitrary(g)
                }
            })
            .collect();
        Self(units)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: for text without ill-formed surrogates the output decodes back
/// to the original scalars, and its length is the sum of per-scalar widths.
#[test]
fn well_formed_round_trips() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String) -> bool {
        let units: Vec<u16> = text.encode_utf16().collect();
        let view = CodeUnitView::new(&units);
        let widths: usize = text.chars().map(char::len_utf8).sum();

        let out = encode_utf8(view);
        out.as_bytes() == text.as_bytes()
            && out.len() == widths
            && utf8_len(view) == widths
            && try_encode_utf8(view).is_ok_and(|strict| strict == out)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: replacement output matches `String::from_utf16_lossy` and the
/// strict path succeeds exactly when `String::from_utf16` does.
#[test]
fn matches_std_decoders() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(units: SurrogateHeavy) -> bool {
        let view = CodeUnitView::new(&units.0);
        let lossy = encode_utf8(view);
        let strict = try_encode_utf8(view).ok().map(crate::Utf8Buffer::into_string);

        lossy.as_str() == String::from_utf16_lossy(&units.0)
            && lossy.len() == utf8_len(view)
            && strict == String::from_utf16(&units.0).ok()
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(SurrogateHeavy) -> bool);
}

/// Property: the first error reported by the strict path is the first
/// ill-formed unit seen while decoding left to right.
#[test]
fn strict_error_is_first_replacement() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(units: SurrogateHeavy) -> bool {
        let view = CodeUnitView::new(&units.0);
        let first = view.scalars().find_map(Result::err);
        try_encode_utf8(view).err() == first
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(SurrogateHeavy) -> bool);
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn decoder_never_overruns(units: Vec<u16>) -> bool {
    let view = CodeUnitView::new(&units);
    let mut scalars = view.scalars();
    let mut items = 0;
    while scalars.next().is_some() {
        items += 1;
    }
    items <= units.len() && scalars.position() == units.len()
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn conversion_is_deterministic(units: Vec<u16>) -> bool {
    let view = CodeUnitView::new(&units);
    encode_utf8(view) == encode_utf8(view)
}
